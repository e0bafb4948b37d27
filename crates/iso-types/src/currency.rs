//! ISO 4217 currency codes.
//!
//! Each currency carries its alpha-3 code, numeric code and English name,
//! plus the local symbol data needed to display an amount: the symbol and
//! its alternate and Latin forms, its `\uXXXX` escape, whether it precedes
//! the amount and whether the decimal separator is a comma. Amount
//! formatting itself is left to callers.

use std::fmt;

/// Generic currency sign used when a currency has no symbol of its own.
pub const GENERIC_SYMBOL: &str = "\u{a4}";

macro_rules! currency_codes {
    ($(
        $variant:ident => $alpha3:literal, $numeric:literal, $name:literal,
        $symbol:expr, $alternate:expr, $latin:expr, $unicode:expr,
        $sign_before:literal, $comma:literal;
    )+) => {
        /// An ISO 4217 currency.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum CurrencyCode {
            $(
                #[doc = $name]
                #[cfg_attr(feature = "serde", serde(rename = $alpha3))]
                $variant,
            )+
        }

        impl CurrencyCode {
            /// Every known currency, in alpha-3 order.
            pub const ALL: &'static [CurrencyCode] = &[$(CurrencyCode::$variant),+];

            /// Looks up a currency by its alpha-3 code.
            pub fn from_alpha3(code: &str) -> Option<Self> {
                match code {
                    $($alpha3 => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Looks up a currency by its ISO 4217 numeric code.
            pub fn from_numeric(numeric: u16) -> Option<Self> {
                Self::ALL.iter().copied().find(|c| c.numeric() == numeric)
            }

            /// Returns the alpha-3 code.
            pub fn alpha3(self) -> &'static str {
                match self {
                    $(Self::$variant => $alpha3,)+
                }
            }

            /// Returns the ISO 4217 numeric code.
            pub fn numeric(self) -> u16 {
                match self {
                    $(Self::$variant => $numeric,)+
                }
            }

            /// Returns the English currency name.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Returns the local symbol, or [`GENERIC_SYMBOL`] when the
            /// currency has none.
            pub fn symbol(self) -> &'static str {
                self.local_symbol().unwrap_or(GENERIC_SYMBOL)
            }

            /// Returns true if the currency has a local symbol.
            pub fn has_symbol(self) -> bool {
                self.local_symbol().is_some()
            }

            fn local_symbol(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => $symbol,)+
                }
            }

            /// Returns the alternate symbol in use, e.g. `SFr` for the Swiss franc.
            pub fn alternate_symbol(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => $alternate,)+
                }
            }

            /// Returns the Latin form of a symbol written in another script.
            pub fn latin_symbol(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => $latin,)+
                }
            }

            /// Returns the symbol as `\uXXXX` escapes.
            pub fn unicode(self) -> Option<&'static str> {
                match self {
                    $(Self::$variant => $unicode,)+
                }
            }

            /// Returns true if the symbol is written before the amount.
            pub fn sign_before(self) -> bool {
                match self {
                    $(Self::$variant => $sign_before,)+
                }
            }

            /// Returns true if the decimal separator is a comma rather than a dot.
            pub fn comma_separator(self) -> bool {
                match self {
                    $(Self::$variant => $comma,)+
                }
            }
        }
    };
}

currency_codes! {
    Aed => "AED", 784, "UAE Dirham", Some("د.إ"), Some("DH"), None, Some(r"\u062f\u002e\u0625"), false, false;
    Afn => "AFN", 971, "Afghani", Some("؋"), None, Some("Afs"), Some(r"\u060B"), false, false;
    All => "ALL", 8, "Lek", Some("L"), None, None, Some(r"\u004C"), false, true;
    Amd => "AMD", 51, "Armenian Dram", Some("֏"), None, None, Some(r"\u058F"), false, true;
    Ang => "ANG", 532, "Netherlands Antillean Guilder", Some("ƒ"), Some("NAf"), None, Some(r"\u0192"), false, false;
    Aoa => "AOA", 973, "Kwanza", Some("Kz"), None, None, Some(r"\u004B\u007A"), false, true;
    Ars => "ARS", 32, "Argentine Peso", Some("$"), None, None, Some(r"\u0024"), true, true;
    Aud => "AUD", 36, "Australian Dollar", Some("$"), Some("A$"), None, Some(r"\u0024"), true, false;
    Awg => "AWG", 533, "Aruban Florin", Some("Afl."), None, None, Some(r"\u0041\u0066\u006C"), false, false;
    Azn => "AZN", 31, "Azerbaijanian Manat", None, None, None, Some(r"\u20BC"), false, true;
    Bam => "BAM", 977, "Convertible Mark", Some("KM"), None, None, Some(r"\u004B\u004D"), false, true;
    Bbd => "BBD", 52, "Barbados Dollar", Some("$"), Some("Bds$"), None, Some(r"\u0024"), true, false;
    Bdt => "BDT", 50, "Taka", Some("৳"), None, Some("Tk"), Some(r"\u09F3"), true, false;
    Bgn => "BGN", 975, "Bulgarian Lev", Some("лв"), None, None, Some(r"\u041B\u0412"), false, true;
    Bhd => "BHD", 48, "Bahraini Dinar", Some(".د.ب"), None, Some("BD"), Some(r"\u002E\u062F\u002E\u0628"), false, false;
    Bif => "BIF", 108, "Burundi Franc", Some("FBu"), None, None, Some(r"\u0046\u0042\u0075"), false, false;
    Bmd => "BMD", 60, "Bermudian Dollar", Some("$"), Some("BD$"), None, Some(r"\u0024"), true, false;
    Bnd => "BND", 96, "Brunei Dollar", Some("$"), Some("B$"), None, Some(r"\u0024"), true, false;
    Bob => "BOB", 68, "Boliviano", Some("Bs."), None, None, Some(r"\u0042\u0073\u002E"), true, true;
    Brl => "BRL", 986, "Brazilian Real", Some("R$"), None, None, Some(r"\u0052\u0024"), true, true;
    Bsd => "BSD", 44, "Bahamian Dollar", Some("$02E"), Some("B$"), None, Some(r"\u0024"), true, false;
    Btn => "BTN", 64, "Ngultrum", Some("Nu."), None, None, Some(r"\u004C\u0075"), true, false;
    Bwp => "BWP", 72, "Pula", Some("P"), None, None, Some(r"\u0050"), true, false;
    Byn => "BYN", 974, "Belarussian Ruble", Some("Br"), None, None, Some(r"\u0042\u0072"), true, true;
    Bzd => "BZD", 84, "Belize Dollar", Some("$"), Some("BZ$"), None, Some(r"\u0024"), true, false;
    Cad => "CAD", 124, "Canadian Dollar", Some("$"), Some("Can$"), None, Some(r"\u0024"), true, false;
    Cdf => "CDF", 976, "Congolese Franc", Some("CF"), Some("FC"), None, Some(r"\u0043\u0046"), false, false;
    Chf => "CHF", 756, "Swiss Franc", Some("Fr"), Some("SFr"), None, Some(r"\u0046\u0072"), false, true;
    Clp => "CLP", 152, "Chilean Peso", Some("$"), Some("CLP$"), None, Some(r"\u0024"), true, true;
    Cny => "CNY", 156, "Yuan Renminbi", Some("¥"), None, None, Some(r"\u00A5"), true, false;
    Cop => "COP", 170, "Colombian Peso", Some("$"), Some("COL$"), None, Some(r"\u0024"), true, true;
    Crc => "CRC", 188, "Costa Rican Colon", Some("₡"), None, None, Some(r"\u20A1"), true, true;
    Cuc => "CUC", 931, "Peso Convertible", Some("$"), Some("$CUC"), None, Some(r"\u0024"), true, true;
    Cup => "CUP", 192, "Cuban Peso", Some("$"), Some("$MN"), None, Some(r"\u0024"), true, true;
    Cve => "CVE", 132, "Cabo Verde Escudo", Some("$"), Some("Esc"), None, Some(r"\u0024"), true, false;
    Czk => "CZK", 203, "Czech Koruna", Some("Kč"), None, None, Some(r"\u004b\u010d"), false, true;
    Djf => "DJF", 262, "Djibouti Franc", Some("Fdj"), Some("DF"), None, Some(r"\u0046\u0064\u006A"), false, false;
    Dkk => "DKK", 208, "Danish Krone", Some("kr"), Some("Dkr"), None, Some(r"\u006B\u0072"), false, true;
    Dop => "DOP", 214, "Dominican Peso", Some("$"), Some("RD$"), None, Some(r"\u0024"), true, false;
    Dzd => "DZD", 12, "Algerian Dinar", Some("د.ج"), None, Some("DA"), Some(r"\u062F\u002E\u062C"), false, true;
    Egp => "EGP", 818, "Egyptian Pound", Some("ج.م."), None, Some("E£"), Some(r"\u062c\u002e\u0645\u002e"), true, false;
    Ern => "ERN", 232, "Nakfa", None, None, Some("Nfk"), Some(r"\u1293\u1245\u134B"), false, false;
    Etb => "ETB", 230, "Ethiopian Birr", None, None, Some("Br"), Some(r"\u1265\u122D"), false, false;
    Eur => "EUR", 978, "Euro", Some("€"), None, None, Some(r"\u20AC"), false, true;
    Fjd => "FJD", 242, "Fiji Dollar", Some("$"), Some("FJ$"), None, Some(r"\u0024"), true, false;
    Fkp => "FKP", 238, "Falkland Islands Pound", Some("£"), Some("FK£"), None, Some(r"\u00A3"), true, false;
    Gbp => "GBP", 826, "Pound Sterling", Some("£"), None, None, Some(r"\u00A3"), true, false;
    Gel => "GEL", 981, "Lari", Some("₾"), None, None, Some(r"\u20BE"), false, true;
    Ghs => "GHS", 288, "Ghana Cedi", Some("₵"), Some("GH₵"), None, Some(r"\u20B5"), true, false;
    Gip => "GIP", 292, "Gibraltar Pound", Some("£"), None, None, Some(r"\u00A3"), true, false;
    Gmd => "GMD", 270, "Dalasi", Some("D"), None, None, Some(r"\u0044"), false, false;
    Gnf => "GNF", 324, "Guinea Franc", Some("FG"), Some("GFr"), None, Some(r"\u0047\u0048"), false, false;
    Gtq => "GTQ", 320, "Quetzal", Some("Q"), None, None, Some(r"\u0051"), true, false;
    Gyd => "GYD", 328, "Guyana Dollar", Some("$"), Some("G$"), None, Some(r"\u0024"), true, false;
    Hkd => "HKD", 344, "Hong Kong Dollar", Some("$"), Some("HK$"), None, Some(r"\u0024"), true, false;
    Hnl => "HNL", 340, "Lempira", Some("L"), None, None, Some(r"\u004C"), true, false;
    Hrk => "HRK", 191, "Kuna", Some("Kn"), None, None, Some(r"\u004B\u006E"), false, true;
    Htg => "HTG", 332, "Gourde", Some("G"), None, None, Some(r"\u0048"), false, false;
    Huf => "HUF", 348, "Forint", Some("Ft"), None, None, Some(r"\u0046\u0074"), false, true;
    Idr => "IDR", 360, "Rupiah", Some("Rp"), None, None, Some(r"\u0052\u0070"), true, true;
    Ils => "ILS", 376, "New Israeli Sheqel", Some("₪"), Some("NIS"), None, Some(r"\u20AA"), true, false;
    Inr => "INR", 356, "Indian Rupee", Some("₹"), None, Some("Rs"), Some(r"\u20B9"), true, false;
    Iqd => "IQD", 368, "Iraqi Dinar", Some("ع.د"), None, None, Some(r"\u0639\u002e\u062f"), false, false;
    Irr => "IRR", 364, "Iranian Rial", Some("﷼"), None, None, Some(r"\uFDFC"), false, false;
    Isk => "ISK", 352, "Iceland Krona", Some("kr"), Some("Íkr"), None, Some(r"\u006B\u0072"), false, true;
    Jmd => "JMD", 388, "Jamaican Dollar", Some("$"), Some("J$"), None, Some(r"\u0024"), true, false;
    Jod => "JOD", 400, "Jordanian Dinar", Some("د.ك"), None, Some("JD"), Some(r"\u004A\u0044"), false, false;
    Jpy => "JPY", 392, "Yen", Some("¥"), None, None, Some(r"\u00A5"), true, false;
    Kes => "KES", 404, "Kenyan Shilling", Some("Ksh"), Some("KSh"), None, Some(r"\u0054\u0073\u0068"), false, false;
    Kgs => "KGS", 417, "Som", Some("сом"), None, None, Some(r"\u0431\u043E\u043C"), false, true;
    Khr => "KHR", 116, "Riel", Some("៛"), None, None, Some(r"\u17DB"), true, false;
    Kmf => "KMF", 174, "Comoro Franc", Some("CF"), Some("F"), None, Some(r"\u0043\u0046"), false, false;
    Kpw => "KPW", 408, "North Korean Won", Some("₩"), None, None, Some(r"\u20A9"), true, false;
    Krw => "KRW", 410, "Won", Some("₩"), None, None, Some(r"\u20A9"), true, false;
    Kwd => "KWD", 414, "Kuwaiti Dinar", Some("د.ك"), Some("K.D."), None, Some(r"\u004B\u002E\u0044\u002E"), false, false;
    Kyd => "KYD", 136, "Cayman Islands Dollar", Some("$"), Some("CI$"), None, Some(r"\u0024"), true, false;
    Kzt => "KZT", 398, "Tenge", Some("₸"), None, None, Some(r"\u20B8"), false, true;
    Lak => "LAK", 418, "Kip", Some("₭"), Some("₭N"), None, Some(r"\u20AD"), false, false;
    Lbp => "LBP", 422, "Lebanese Pound", Some("ل.ل"), None, Some("LL"), Some(r"\u0644\u002E\u0644"), false, true;
    Lkr => "LKR", 144, "Sri Lanka Rupee", Some("රු"), Some("SLRs"), None, Some(r"\u2048"), true, false;
    Lrd => "LRD", 430, "Liberian Dollar", Some("$"), Some("L$"), None, Some(r"\u0024"), true, false;
    Lsl => "LSL", 426, "Loti", Some("M"), None, None, Some(r"\u004D"), true, false;
    Lyd => "LYD", 434, "Libyan Dinar", Some("ل.د"), None, Some("LD"), Some(r"\u0644\u002E\u062F"), false, false;
    Mad => "MAD", 504, "Moroccan Dirham", Some("د.م"), None, Some("DH"), Some(r"\u062F\u002e\u0645"), false, true;
    Mdl => "MDL", 498, "Moldovan Leu", Some("lei"), None, None, Some(r"\u006C\u0065\u0069"), false, true;
    Mga => "MGA", 450, "Malagasy Ariary", Some("Ar"), None, None, Some(r"\u0041\u0072"), true, false;
    Mkd => "MKD", 807, "Denar", Some("ден"), None, Some("den"), Some(r"\u0434\u0435\u043D"), false, true;
    Mmk => "MMK", 104, "Kyat", Some("K"), None, None, Some(r"\u004B"), true, false;
    Mnt => "MNT", 496, "Tugrik", Some("₮"), None, None, Some(r"\u20AE"), false, true;
    Mop => "MOP", 446, "Pataca", Some("MOP$"), None, None, Some(r"\u004D\u004F\u0050\u0024"), true, true;
    Mro => "MRO", 478, "Ouguiya", Some("UM"), None, None, Some(r"\u0055\u004D"), false, false;
    Mur => "MUR", 480, "Mauritius Rupee", Some("₨"), None, None, Some(r"\u20A8"), true, false;
    Mvr => "MVR", 462, "Rufiyaa", Some("Rf."), Some("ރ."), None, Some(r"\u0052\u0066\u002E"), true, false;
    Mwk => "MWK", 454, "Malawi Kwacha", Some("MK"), None, None, Some(r"\u004D\u004B"), true, false;
    Mxn => "MXN", 484, "Mexican Peso", Some("$"), Some("Mex$"), None, Some(r"\u0024"), true, false;
    Myr => "MYR", 458, "Malaysian Ringgit", Some("RM"), None, None, Some(r"\u0052\u004D"), true, false;
    Mzn => "MZN", 508, "Mozambique Metical", Some("MT"), Some("MTn"), None, Some(r"\u004D\u0054"), false, true;
    Nad => "NAD", 516, "Namibia Dollar", Some("$"), Some("N$"), None, Some(r"\u0024"), true, true;
    Ngn => "NGN", 566, "Naira", Some("₦"), None, None, Some(r"\u20A6"), true, false;
    Nio => "NIO", 558, "Cordoba Oro", Some("C$"), None, None, Some(r"\u0040\u0024"), true, false;
    Nok => "NOK", 578, "Norwegian Krone", Some("kr"), None, None, Some(r"\u006B\u0072"), false, true;
    Npr => "NPR", 524, "Nepalese Rupee", Some("₨"), Some("NRs"), Some("Rs"), Some(r"\u20A8"), true, false;
    Nzd => "NZD", 554, "New Zealand Dollar", Some("$"), Some("NZ$"), None, Some(r"\u0024"), true, false;
    Omr => "OMR", 512, "Rial Omani", Some("ر.ع."), None, None, Some(r"\u0631\u002E\u0639\u002E"), false, false;
    Pab => "PAB", 590, "Balboa", Some("B/."), None, None, Some(r"\u0041\u002F\u002E"), true, false;
    Pen => "PEN", 604, "Sol", Some("S/"), None, None, Some(r"\u0053\u002F"), false, true;
    Pgk => "PGK", 598, "Kina", Some("K"), None, None, Some(r"\u004B"), false, false;
    Php => "PHP", 608, "Philippine Peso", Some("₱"), Some("P"), None, Some(r"\u20B1"), true, false;
    Pkr => "PKR", 586, "Pakistan Rupee", Some("₨"), None, None, Some(r"\u20A8"), true, false;
    Pln => "PLN", 985, "Zloty", Some("zł"), None, None, Some(r"\u007A\u0142"), false, true;
    Pyg => "PYG", 600, "Guarani", Some("₲"), None, None, Some(r"\u20B2"), false, true;
    Qar => "QAR", 634, "Qatari Rial", Some("ر.ق"), None, Some("QR"), Some(r"\u0631\u002E\u0642"), false, false;
    Ron => "RON", 642, "Romanian Leu", Some("lei"), None, None, Some(r"\u006C\u0065\u0069"), false, true;
    Rsd => "RSD", 891, "Serbian Dinar", None, None, Some("din."), Some(r"\u0434\u0438\u043D"), false, true;
    Rub => "RUB", 643, "Russian Ruble", None, Some("R"), None, Some(r"\u20BD"), false, true;
    Rwf => "RWF", 646, "Rwanda Franc", Some("FRw"), Some("RF"), None, Some(r"\u0046\u0052\u0077"), false, false;
    Sar => "SAR", 682, "Saudi Riyal", Some("﷼"), None, Some("SR"), Some(r"\uFDFC"), false, false;
    Sbd => "SBD", 90, "Solomon Islands Dollar", Some("SI$"), Some("$"), None, Some(r"\u0053\u0049\u0024"), true, false;
    Scr => "SCR", 690, "Seychellois Rupee", Some("SRe"), Some("SR"), None, Some(r"\u0053\u0052\u0065"), false, false;
    Sdg => "SDG", 938, "Sudanese Pound", Some("ج.س."), Some("Pounds"), None, Some(r"\u002E\u062C\u002E\u0633"), false, false;
    Sek => "SEK", 752, "Swedish Krona", Some("kr"), None, None, Some(r"\u006B\u0072"), false, true;
    Sgd => "SGD", 702, "Singapore Dollar", Some("$"), Some("S$"), None, Some(r"\u0024"), true, false;
    Shp => "SHP", 654, "Saint Helena Pound", Some("£"), None, None, Some(r"\u00A3"), true, false;
    Sll => "SLL", 694, "Leone", Some("Le"), None, None, Some(r"\u004C\u0065"), false, false;
    Sos => "SOS", 706, "Somali Shilling", Some("Sh.So."), None, None, Some(r"\u0053\u0068\u002E\u0053\u006F\u002E"), false, false;
    Srd => "SRD", 740, "Surinam Dollar", Some("$"), Some("SRD"), None, Some(r"\u0024"), true, false;
    Ssp => "SSP", 728, "South Sudanese Pound", Some("ج.س."), Some("Pounds"), None, Some(r"\u002E\u062C\u002E\u0633"), false, false;
    Std => "STD", 678, "Dobra", Some("Db"), None, None, Some(r"\u0044\u0062"), false, false;
    Syp => "SYP", 760, "Syrian Pound", Some("£S"), Some("LS"), None, Some(r"\u00A3\u004C"), false, false;
    Szl => "SZL", 748, "Lilangeni", Some("E"), None, None, Some(r"\u0045"), true, false;
    Thb => "THB", 764, "Baht", Some("฿"), None, None, Some(r"\u0E3F"), true, false;
    Tjs => "TJS", 972, "Somoni", Some("cомонӣ"), None, None, Some(r"\u0441\u043E\u043C\u043D\u0438"), false, false;
    Tmt => "TMT", 795, "Turkmenistan New Manat", Some("T"), None, None, Some(r"\u0054"), false, false;
    Tnd => "TND", 788, "Tunisian Dinar", Some("د.ت"), None, Some("DT"), Some(r"\u062F\u002E\u062A"), false, true;
    Top => "TOP", 776, "Pa’anga", Some("T$"), None, None, Some(r"\u0054\u0024"), true, false;
    Try => "TRY", 949, "Turkish Lira", None, Some("TL"), None, Some(r"\u20BA"), true, true;
    Ttd => "TTD", 780, "Trinidad and Tobago Dollar", Some("$"), Some("TT$"), None, Some(r"\u0024"), true, false;
    Twd => "TWD", 901, "New Taiwan Dollar", Some("$"), Some("NT$"), None, Some(r"\u0024"), true, false;
    Tzs => "TZS", 834, "Tanzanian Shilling", Some("TSh"), None, None, Some(r"\u0054\u0053\u0068"), false, false;
    Uah => "UAH", 980, "Hryvnia", Some("₴"), None, Some("hrn"), Some(r"\u20B4"), true, true;
    Ugx => "UGX", 800, "Uganda Shilling", Some("USh"), None, None, Some(r"\u0055\u0053\u0068"), false, false;
    Usd => "USD", 840, "US Dollar", Some("$"), None, None, Some(r"\u0024"), true, false;
    Uyu => "UYU", 858, "Peso Uruguayo", Some("$"), Some("$U"), None, Some(r"\u0024"), true, true;
    Uzs => "UZS", 860, "Uzbekistan Sum", Some("сўм"), None, Some("so'm"), Some(r"\u0441\u045E\u043C"), false, true;
    Vef => "VEF", 937, "Bolívar", Some("Bs."), Some("Bs.F."), None, Some(r"\u0042\u0073\u002E"), true, true;
    Vnd => "VND", 704, "Dong", Some("₫"), None, None, Some(r"\u20AB"), false, true;
    Vuv => "VUV", 548, "Vatu", Some("VT"), None, None, Some(r"\u0046\u0074"), false, false;
    Wst => "WST", 882, "Samoan Tala", Some("WS$"), Some("T"), None, Some(r"\u0057\u0053\u0024"), true, false;
    Xaf => "XAF", 950, "CFA Franc BEAC", Some("FCFA"), None, None, Some(r"\u0046\u0043\u0046\u0041"), false, true;
    Xcd => "XCD", 951, "East Caribbean Dollar", Some("$"), Some("EC$"), None, Some(r"\u0024"), true, false;
    Xof => "XOF", 952, "CFA Franc BCEAO", Some("CFA"), None, None, Some(r"\u0043\u0046\u0041"), false, false;
    Xpf => "XPF", 953, "CFP Franc", Some("CFP"), None, None, Some(r"\u0043\u0046\u0050"), false, false;
    Yer => "YER", 886, "Yemeni Rial", Some("﷼"), None, Some("YR"), Some(r"\ufdfc"), false, false;
    Zar => "ZAR", 710, "Rand", Some("R"), None, None, Some(r"\u0052"), true, true;
    Zmw => "ZMW", 894, "Zambian Kwacha", Some("ZK"), None, None, Some(r"\u005A\u004B"), false, false;
    Zwl => "ZWL", 716, "Zimbabwean Dollar", Some("$"), Some("Z$"), None, Some(r"\u0024"), true, false;
}

impl CurrencyCode {
    /// Returns the numeric code zero-padded to three digits, as used on the wire.
    pub fn numeric_as_string(self) -> String {
        format!("{:03}", self.numeric())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {:03})", self.name(), self.alpha3(), self.numeric())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_alpha3_and_numeric() {
        assert_eq!(CurrencyCode::from_alpha3("EUR"), Some(CurrencyCode::Eur));
        assert_eq!(CurrencyCode::from_numeric(978), Some(CurrencyCode::Eur));
        assert_eq!(CurrencyCode::from_alpha3("eur"), None);
        assert_eq!(CurrencyCode::from_numeric(1), None);
    }

    #[test]
    fn test_numeric_codes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for currency in CurrencyCode::ALL {
            assert!(seen.insert(currency.numeric()), "{} reused", currency.numeric());
        }
    }

    #[test]
    fn test_numeric_as_string() {
        assert_eq!(CurrencyCode::All.numeric_as_string(), "008");
        assert_eq!(CurrencyCode::Usd.numeric_as_string(), "840");
    }

    #[test]
    fn test_symbols() {
        let euro = CurrencyCode::Eur;
        assert_eq!(euro.symbol(), "€");
        assert_eq!(euro.unicode(), Some(r"\u20AC"));
        assert!(!euro.sign_before());
        assert!(euro.comma_separator());

        let dollar = CurrencyCode::Usd;
        assert_eq!(dollar.symbol(), "$");
        assert!(dollar.sign_before());
        assert!(!dollar.comma_separator());

        assert_eq!(CurrencyCode::Chf.alternate_symbol(), Some("SFr"));
        assert_eq!(CurrencyCode::Eur.alternate_symbol(), None);
        assert_eq!(CurrencyCode::Uah.latin_symbol(), Some("hrn"));
        assert_eq!(CurrencyCode::Uah.symbol(), "₴");
    }

    #[test]
    fn test_missing_symbol_falls_back_to_generic() {
        let manat = CurrencyCode::Azn;
        assert!(!manat.has_symbol());
        assert_eq!(manat.symbol(), GENERIC_SYMBOL);
        assert_eq!(manat.unicode(), Some(r"\u20BC"));
    }

    #[test]
    fn test_every_unicode_form_is_an_escape_run() {
        for currency in CurrencyCode::ALL {
            let Some(unicode) = currency.unicode() else {
                continue;
            };
            assert!(!unicode.is_empty() && unicode.len() % 6 == 0, "{unicode}");
            for group in unicode.as_bytes().chunks(6) {
                assert_eq!(&group[..2], b"\\u", "{}", currency.alpha3());
                assert!(group[2..].iter().all(u8::is_ascii_hexdigit));
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(CurrencyCode::Jpy.to_string(), "Yen (JPY, 392)");
    }
}
