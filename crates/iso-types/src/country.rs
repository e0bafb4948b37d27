//! ISO 3166 country type.

use crate::{CurrencyCode, LanguageCode, NameRecord};

/// An ISO 3166-1 country with its local names and currencies.
///
/// The first entry of `names` is in the most used local language and the
/// first entry of `currencies` is the default currency.
///
/// # Examples
///
/// ```
/// use iso_types::{Country, CurrencyCode, LanguageCode, NameRecord};
///
/// let country = Country {
///     alpha3: "DEU".to_string(),
///     alpha2: "DE".to_string(),
///     numeric: 276,
///     english_name: "Germany".to_string(),
///     currencies: vec![CurrencyCode::Eur],
///     names: vec![NameRecord {
///         script_text: Some("Deutschland".to_string()),
///         language_tag: LanguageCode::Deu,
///         latin_form: None,
///         unicode_escape_form: None,
///         is_long_form: false,
///         is_default_language: true,
///     }],
/// };
///
/// assert_eq!(country.default_name(), "Deutschland");
/// assert_eq!(country.default_currency(), Some(CurrencyCode::Eur));
/// assert_eq!(country.numeric_as_string(), "276");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Country {
    /// ISO 3166-1 alpha-3 code.
    pub alpha3: String,
    /// ISO 3166-1 alpha-2 code.
    pub alpha2: String,
    /// ISO 3166-1 numeric code. User-assigned codes may exceed three digits
    /// (Kosovo is 999999).
    pub numeric: u32,
    /// English short name.
    pub english_name: String,
    /// Currencies in use, default first.
    pub currencies: Vec<CurrencyCode>,
    /// Local names, default language first.
    pub names: Vec<NameRecord>,
}

impl Country {
    /// Returns the numeric code zero-padded to three digits.
    pub fn numeric_as_string(&self) -> String {
        format!("{:03}", self.numeric)
    }

    /// Returns the default currency, if the country has one.
    pub fn default_currency(&self) -> Option<CurrencyCode> {
        self.currencies.first().copied()
    }

    /// Returns the default language, if any local name is known.
    pub fn default_language(&self) -> Option<LanguageCode> {
        self.names.first().map(|n| n.language_tag)
    }

    /// Returns the common name in the default language.
    ///
    /// Falls back to the English name when no local name is known.
    pub fn default_name(&self) -> &str {
        self.short_record(self.default_language())
            .map(NameRecord::display_name)
            .unwrap_or(&self.english_name)
    }

    /// Returns the common name in `lang`.
    pub fn name_in(&self, lang: LanguageCode) -> Option<&str> {
        self.short_record(Some(lang)).map(NameRecord::display_name)
    }

    /// Returns the long form in the default language.
    pub fn long_name(&self) -> Option<&str> {
        self.default_language().and_then(|lang| self.long_name_in(lang))
    }

    /// Returns the long form in `lang`.
    pub fn long_name_in(&self, lang: LanguageCode) -> Option<&str> {
        self.names
            .iter()
            .find(|n| n.is_long_form && n.language_tag == lang)
            .map(NameRecord::display_name)
    }

    /// Returns the Latin form of the common name in `lang`.
    pub fn latin_name_in(&self, lang: LanguageCode) -> Option<&str> {
        self.short_record(Some(lang)).map(NameRecord::latin_or_name)
    }

    /// Returns the common name in `lang` as `\uxxxx` escapes.
    pub fn unicode_name_in(&self, lang: LanguageCode) -> Option<String> {
        self.short_record(Some(lang)).map(|n| n.unicode().into_owned())
    }

    /// Returns every language a name is known in, without repeats, in table order.
    pub fn supported_languages(&self) -> Vec<LanguageCode> {
        let mut langs = Vec::with_capacity(self.names.len());
        for name in &self.names {
            if !langs.contains(&name.language_tag) {
                langs.push(name.language_tag);
            }
        }
        langs
    }

    fn short_record(&self, lang: Option<LanguageCode>) -> Option<&NameRecord> {
        let lang = lang?;
        self.names
            .iter()
            .find(|n| !n.is_long_form && n.language_tag == lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_name(text: &str, lang: LanguageCode, long: bool) -> NameRecord {
        NameRecord {
            script_text: Some(text.to_string()),
            language_tag: lang,
            latin_form: None,
            unicode_escape_form: None,
            is_long_form: long,
            is_default_language: false,
        }
    }

    fn make_belgium() -> Country {
        Country {
            alpha3: "BEL".to_string(),
            alpha2: "BE".to_string(),
            numeric: 56,
            english_name: "Belgium".to_string(),
            currencies: vec![CurrencyCode::Eur],
            names: vec![
                make_name("Belgique", LanguageCode::Fra, false),
                make_name("België", LanguageCode::Nld, false),
                make_name("Royaume de Belgique", LanguageCode::Fra, true),
                make_name("Koninkrijk België", LanguageCode::Nld, true),
            ],
        }
    }

    #[test]
    fn test_default_name_and_language() {
        let country = make_belgium();
        assert_eq!(country.default_language(), Some(LanguageCode::Fra));
        assert_eq!(country.default_name(), "Belgique");
        assert_eq!(country.numeric_as_string(), "056");
    }

    #[test]
    fn test_name_lookups() {
        let country = make_belgium();
        assert_eq!(country.name_in(LanguageCode::Nld), Some("België"));
        assert_eq!(country.name_in(LanguageCode::Deu), None);
        assert_eq!(country.long_name(), Some("Royaume de Belgique"));
        assert_eq!(country.long_name_in(LanguageCode::Nld), Some("Koninkrijk België"));
        assert_eq!(country.latin_name_in(LanguageCode::Nld), Some("België"));
        assert_eq!(
            country.unicode_name_in(LanguageCode::Fra).as_deref(),
            Some("\\u0042\\u0065\\u006c\\u0067\\u0069\\u0071\\u0075\\u0065")
        );
    }

    #[test]
    fn test_supported_languages_deduplicated() {
        let country = make_belgium();
        assert_eq!(
            country.supported_languages(),
            vec![LanguageCode::Fra, LanguageCode::Nld]
        );
    }

    #[test]
    fn test_empty_country_falls_back_to_english() {
        let mut country = make_belgium();
        country.names.clear();
        country.currencies.clear();
        assert_eq!(country.default_name(), "Belgium");
        assert_eq!(country.default_currency(), None);
        assert_eq!(country.long_name(), None);
    }
}
