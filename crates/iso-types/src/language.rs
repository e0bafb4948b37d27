//! ISO 639-2 language codes.
//!
//! The vocabulary is closed: only the codes referenced by the reference
//! tables are known. Lookups are by lowercase alpha-3 tag.
//!
//! # Example
//!
//! ```
//! use iso_types::LanguageCode;
//!
//! let lang = LanguageCode::from_alpha3("deu").unwrap();
//! assert_eq!(lang, LanguageCode::Deu);
//! assert_eq!(lang.english_name(), "German");
//! assert!(LanguageCode::from_alpha3("xyz").is_none());
//! ```

use std::fmt;

macro_rules! language_codes {
    ($($variant:ident => $alpha3:literal, $name:literal;)+) => {
        /// An ISO 639-2 alpha-3 language code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum LanguageCode {
            $(
                #[doc = $name]
                #[cfg_attr(feature = "serde", serde(rename = $alpha3))]
                $variant,
            )+
        }

        impl LanguageCode {
            /// Every known language code, in alpha-3 order.
            pub const ALL: &'static [LanguageCode] = &[$(LanguageCode::$variant),+];

            /// Looks up a language by its alpha-3 tag.
            ///
            /// Returns `None` if the tag is not part of the vocabulary.
            pub fn from_alpha3(tag: &str) -> Option<Self> {
                match tag {
                    $($alpha3 => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Returns the alpha-3 tag.
            pub fn alpha3(self) -> &'static str {
                match self {
                    $(Self::$variant => $alpha3,)+
                }
            }

            /// Returns the English name of the language.
            pub fn english_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }
    };
}

language_codes! {
    Aar => "aar", "Afar";
    Afr => "afr", "Afrikaans";
    Alb => "alb", "Albanian";
    Amh => "amh", "Amharic";
    Ara => "ara", "Arabic";
    Arm => "arm", "Armenian";
    Aym => "aym", "Aymara";
    Aze => "aze", "Azerbaijani";
    Bel => "bel", "Belarusian";
    Ben => "ben", "Bengali";
    Ber => "ber", "Berber languages";
    Bis => "bis", "Bislama";
    Bos => "bos", "Bosnian";
    Bul => "bul", "Bulgarian";
    Cha => "cha", "Chamorro";
    Cpe => "cpe", "Creoles and pidgins, English based";
    Cpf => "cpf", "Creoles and pidgins, French-based";
    Dan => "dan", "Danish";
    Deu => "deu", "German";
    Div => "div", "Dhivehi";
    Dzo => "dzo", "Dzongkha";
    Eng => "eng", "English";
    Est => "est", "Estonian";
    Fao => "fao", "Faroese";
    Fij => "fij", "Fijian";
    Fil => "fil", "Filipino";
    Fin => "fin", "Finnish";
    Fra => "fra", "French";
    Ful => "ful", "Fulah";
    Geo => "geo", "Georgian";
    Gil => "gil", "Gilbertese";
    Gle => "gle", "Irish";
    Gre => "gre", "Greek, Modern";
    Grn => "grn", "Guarani";
    Hat => "hat", "Haitian";
    Hau => "hau", "Hausa";
    Heb => "heb", "Hebrew";
    Hin => "hin", "Hindi";
    Hmo => "hmo", "Hiri Motu";
    Hrv => "hrv", "Croatian";
    Hun => "hun", "Hungarian";
    Ibo => "ibo", "Igbo";
    Ind => "ind", "Indonesian";
    Isl => "isl", "Icelandic";
    Ita => "ita", "Italian";
    Jpn => "jpn", "Japanese";
    Kal => "kal", "Kalaallisut";
    Kaz => "kaz", "Kazakh";
    Khm => "khm", "Central Khmer";
    Kho => "kho", "Khotanese";
    Kin => "kin", "Kinyarwanda";
    Kir => "kir", "Kirghiz";
    Kon => "kon", "Kongo";
    Kor => "kor", "Korean";
    Lao => "lao", "Lao";
    Lat => "lat", "Latin";
    Lav => "lav", "Latvian";
    Lin => "lin", "Lingala";
    Lit => "lit", "Lithuanian";
    Ltz => "ltz", "Luxembourgish";
    Lua => "lua", "Luba-Lulua";
    Mah => "mah", "Marshallese";
    Mao => "mao", "Maori";
    May => "may", "Malay";
    Mkd => "mkd", "Macedonian";
    Mlg => "mlg", "Malagasy";
    Mlt => "mlt", "Maltese";
    Mon => "mon", "Mongolian";
    Mya => "mya", "Burmese";
    Nau => "nau", "Nauru";
    Nbl => "nbl", "South Ndebele";
    Nep => "nep", "Nepali";
    Niu => "niu", "Niuean";
    Nld => "nld", "Dutch";
    Nno => "nno", "Norwegian Nynorsk";
    Nob => "nob", "Norwegian Bokmål";
    Nso => "nso", "Pedi";
    Nya => "nya", "Chichewa";
    Pap => "pap", "Papiamento";
    Pau => "pau", "Palauan";
    Per => "per", "Persian";
    Pol => "pol", "Polish";
    Por => "por", "Portuguese";
    Pus => "pus", "Pushto";
    Que => "que", "Quechua";
    Roh => "roh", "Romansh";
    Ron => "ron", "Romanian";
    Run => "run", "Rundi";
    Rus => "rus", "Russian";
    Sag => "sag", "Sango";
    Scc => "scc", "Serbian (deprecated code)";
    Sin => "sin", "Sinhala";
    Slk => "slk", "Slovak";
    Slv => "slv", "Slovenian";
    Smo => "smo", "Samoan";
    Sna => "sna", "Shona";
    Snk => "snk", "Soninke";
    Som => "som", "Somali";
    Sot => "sot", "Southern Sotho";
    Spa => "spa", "Spanish";
    Srp => "srp", "Serbian";
    Ssw => "ssw", "Swati";
    Swa => "swa", "Swahili";
    Swe => "swe", "Swedish";
    Tah => "tah", "Tahitian";
    Tam => "tam", "Tamil";
    Tet => "tet", "Tetum";
    Tgk => "tgk", "Tajik";
    Tha => "tha", "Thai";
    Tir => "tir", "Tigrinya";
    Tkl => "tkl", "Tokelau";
    Ton => "ton", "Tonga";
    Tpi => "tpi", "Tok Pisin";
    Tsn => "tsn", "Tswana";
    Tso => "tso", "Tsonga";
    Tuk => "tuk", "Turkmen";
    Tur => "tur", "Turkish";
    Tvl => "tvl", "Tuvalu";
    Ukr => "ukr", "Ukrainian";
    Urd => "urd", "Urdu";
    Uzb => "uzb", "Uzbek";
    Ven => "ven", "Venda";
    Vie => "vie", "Vietnamese";
    Wol => "wol", "Wolof";
    Xho => "xho", "Xhosa";
    Yor => "yor", "Yoruba";
    Zho => "zho", "Chinese";
    Zul => "zul", "Zulu";
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.english_name(), self.alpha3())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_alpha3() {
        assert_eq!(LanguageCode::from_alpha3("eng"), Some(LanguageCode::Eng));
        assert_eq!(LanguageCode::from_alpha3("zho"), Some(LanguageCode::Zho));
        assert_eq!(LanguageCode::from_alpha3("xyz"), None);
        assert_eq!(LanguageCode::from_alpha3("ENG"), None);
        assert_eq!(LanguageCode::from_alpha3(""), None);
    }

    #[test]
    fn test_alpha3_matches_lookup() {
        for lang in LanguageCode::ALL {
            assert_eq!(LanguageCode::from_alpha3(lang.alpha3()), Some(*lang));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(LanguageCode::Fra.to_string(), "French (fra)");
    }
}
