//! Localized names.
//!
//! A [`NameRecord`] is one name of a country in one language, as decoded
//! from a catalog literal.

use std::borrow::Cow;
use std::fmt;
use std::fmt::Write as _;

use crate::LanguageCode;

/// Placeholder returned when a record has nothing renderable.
pub const UNKNOWN_NAME: &str = "?";

/// One localized name of an entity.
///
/// # Examples
///
/// ```
/// use iso_types::{LanguageCode, NameRecord};
///
/// let name = NameRecord {
///     script_text: Some("Ελλάδα".to_string()),
///     language_tag: LanguageCode::Gre,
///     latin_form: Some("Elláda".to_string()),
///     unicode_escape_form: None,
///     is_long_form: false,
///     is_default_language: true,
/// };
///
/// assert_eq!(name.display_name(), "Ελλάδα");
/// assert_eq!(name.latin_or_name(), "Elláda");
/// assert!(name.unicode().starts_with("\\u0395"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NameRecord {
    /// The name in its native script, if renderable.
    pub script_text: Option<String>,
    /// Language of this name.
    pub language_tag: LanguageCode,
    /// Latin transliteration.
    pub latin_form: Option<String>,
    /// Run of `\uXXXX` escapes representing the script text.
    pub unicode_escape_form: Option<String>,
    /// Whether this is the formal ("Republic of ...") designation.
    pub is_long_form: bool,
    /// Whether this is the entity's first name, in its most used local language.
    pub is_default_language: bool,
}

impl NameRecord {
    /// Returns the best renderable form of the name.
    ///
    /// Falls back from script text to the escape form, then to the Latin
    /// form, then to `"?"`.
    pub fn display_name(&self) -> &str {
        self.script_text
            .as_deref()
            .or(self.unicode_escape_form.as_deref())
            .or(self.latin_form.as_deref())
            .unwrap_or(UNKNOWN_NAME)
    }

    /// Returns the Latin form, or the script text when no transliteration exists.
    pub fn latin_or_name(&self) -> &str {
        self.latin_form
            .as_deref()
            .or(self.script_text.as_deref())
            .unwrap_or(UNKNOWN_NAME)
    }

    /// Returns true if an explicit escape form was supplied.
    pub fn has_unicode(&self) -> bool {
        self.unicode_escape_form.is_some()
    }

    /// Returns the name as `\uxxxx` escapes.
    ///
    /// Uses the supplied escape form when present, otherwise escapes every
    /// UTF-16 unit of the script text.
    pub fn unicode(&self) -> Cow<'_, str> {
        if let Some(escaped) = &self.unicode_escape_form {
            return Cow::Borrowed(escaped);
        }
        match &self.script_text {
            Some(text) => Cow::Owned(escape_utf16(text)),
            None => Cow::Borrowed(UNKNOWN_NAME),
        }
    }
}

fn escape_utf16(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 6);
    for unit in text.encode_utf16() {
        let _ = write!(out, "\\u{unit:04x}");
    }
    out
}

impl fmt::Display for NameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.language_tag.alpha3())?;
        if let Some(latin) = &self.latin_form {
            write!(f, " [{latin}]")?;
        }
        if self.is_long_form {
            f.write_str(" long")?;
        }
        Ok(())
    }
}
