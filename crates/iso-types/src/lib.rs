//! # iso-types
//!
//! Type definitions for ISO reference data.
//!
//! This crate provides Rust types for ISO 3166 countries, ISO 4217
//! currencies, ISO 639 languages and ISO 18245 merchant category codes,
//! together with the taxonomy coordinates used to classify merchant codes.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use iso_types::{CurrencyCode, HeadCategory, LanguageCode, MerchantCategoryRange};
//!
//! assert_eq!(CurrencyCode::from_alpha3("CHF").map(|c| c.numeric()), Some(756));
//! assert_eq!(LanguageCode::from_alpha3("ita"), Some(LanguageCode::Ita));
//!
//! let range = MerchantCategoryRange::from_code(7011).unwrap();
//! assert_eq!(range, MerchantCategoryRange::MiscellaneousStores);
//! assert_eq!(HeadCategory::HotelsMotels.code(), 8);
//! ```
//!
//! ## Without Serde
//!
//! ```toml
//! [dependencies]
//! iso-types = { version = "0.1", default-features = false }
//! ```

#![warn(missing_docs)]

mod country;
mod currency;
mod language;
mod mcc;
mod name;
mod scheme;
mod taxonomy;

// Re-export all public types at crate root
pub use country::Country;
pub use currency::{CurrencyCode, GENERIC_SYMBOL};
pub use language::LanguageCode;
pub use mcc::{BrandAbbreviations, MerchantCategoryCode};
pub use name::{NameRecord, UNKNOWN_NAME};
pub use scheme::{HeadCategory, MerchantCategoryRange, TransactionCategoryCode, VisaMerchantCategoryGroup};
pub use taxonomy::{EntityProjection, TaxonomyLevel, TrbcPath, ROOT_CODE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        let _lang = LanguageCode::Eng;
        let _currency = CurrencyCode::Usd;
        let _range = MerchantCategoryRange::Lodging;
        let _head = HeadCategory::HotelsMotels;
        let _tcc = TransactionCategoryCode::HotelMotel;
        let _mcg = VisaMerchantCategoryGroup::Lodging;
        assert_eq!(ROOT_CODE, -1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_iso_codes() {
        let json = serde_json::to_string(&CurrencyCode::Eur).unwrap();
        assert_eq!(json, "\"EUR\"");
        let lang: LanguageCode = serde_json::from_str("\"deu\"").unwrap();
        assert_eq!(lang, LanguageCode::Deu);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let name = NameRecord {
            script_text: None,
            language_tag: LanguageCode::Zho,
            latin_form: Some("Zhongguo".to_string()),
            unicode_escape_form: Some("\\u4e2d\\u56fd".to_string()),
            is_long_form: false,
            is_default_language: true,
        };

        let json = serde_json::to_string(&name).unwrap();
        let parsed: NameRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(name, parsed);
    }
}
