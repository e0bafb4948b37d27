//! Decoders for the compact literals used in the reference tables.
//!
//! A localized name is written as
//!
//! ```text
//! [##LONG##]<name>(<lang3>)[;;<latin_or_unicode>[;;<unicode_or_latin>]]
//! ```
//!
//! and a brand-specific merchant description as
//!
//! ```text
//! <brand>[;;##VISA##<abbr>][;;##MC##<abbr>][;;##TSYS##<abbr>]
//! ```
//!
//! # Example
//!
//! ```
//! use iso_catalog::decoder::decode;
//! use iso_catalog::iso_types::LanguageCode;
//!
//! let name = decode("##LONG##Republic of Fiji(eng)").unwrap();
//! assert!(name.is_long_form);
//! assert_eq!(name.script_text.as_deref(), Some("Republic of Fiji"));
//! assert_eq!(name.language_tag, LanguageCode::Eng);
//! ```

use std::sync::OnceLock;

use iso_types::{BrandAbbreviations, LanguageCode, NameRecord};
use regex::Regex;

use crate::types::DecodeError;

/// Separator between the fields of a literal.
pub const SEPARATOR: &str = ";;";

/// Marker of a long-form name, matched case-insensitively.
pub const LONG_MARKER: &str = "##LONG##";

const VISA_MARKER: &str = "##VISA##";
const MASTERCARD_MARKER: &str = "##MC##";
const TSYS_MARKER: &str = "##TSYS##";

const ESCAPE_MARKER: &str = "\\u";

fn escape_run() -> &'static Regex {
    static ESCAPE_RUN: OnceLock<Regex> = OnceLock::new();
    ESCAPE_RUN.get_or_init(|| {
        Regex::new(r"^\s*\\u[0-9A-Fa-f]{4}(?:\s*\\u[0-9A-Fa-f]{4})*\s*$")
            .expect("escape run pattern is valid")
    })
}

/// Decodes one localized name literal.
///
/// # Errors
/// - [`DecodeError::MalformedName`] if the literal has more than three
///   fields, no `(` after a non-empty prefix, or a tag shorter than three
///   characters.
/// - [`DecodeError::UnknownLanguage`] if the tag is not an ISO 639 code.
/// - [`DecodeError::InvalidUnicode`] if the escape field is not a run of
///   `\uXXXX` groups.
pub fn decode(literal: &str) -> Result<NameRecord, DecodeError> {
    let fields: Vec<&str> = literal.split(SEPARATOR).collect();
    if fields.len() > 3 {
        return Err(malformed(literal, "more than three fields"));
    }

    let (script_text, is_long_form, language_tag) = decode_head(fields[0], literal)?;

    let mut latin_form = None;
    let mut unicode_escape_form = None;

    if let Some(field) = fields.get(1).filter(|f| !f.is_empty()) {
        if field.contains(ESCAPE_MARKER) {
            unicode_escape_form = Some(check_escape_run(field, literal)?);
        } else {
            latin_form = Some(field.to_string());
        }
    }

    if let Some(field) = fields.get(2).filter(|f| !f.is_empty()) {
        if unicode_escape_form.is_some() {
            latin_form = Some(field.to_string());
        } else {
            unicode_escape_form = Some(check_escape_run(field, literal)?);
        }
    }

    Ok(NameRecord {
        script_text,
        language_tag,
        latin_form,
        unicode_escape_form,
        is_long_form,
        is_default_language: false,
    })
}

/// Splits `name(lang)` into the name, the long-form flag and the language.
fn decode_head(
    head: &str,
    literal: &str,
) -> Result<(Option<String>, bool, LanguageCode), DecodeError> {
    let open = match head.find('(') {
        Some(idx) if idx > 0 => idx,
        _ => return Err(malformed(literal, "missing name before '('")),
    };

    let mut name = head[..open].to_string();
    // ASCII lowercasing keeps byte offsets intact.
    let is_long_form = match name.to_ascii_lowercase().find(&LONG_MARKER.to_ascii_lowercase()) {
        Some(at) => {
            name.replace_range(at..at + LONG_MARKER.len(), "");
            true
        }
        None => false,
    };

    let tag: String = head[open + 1..].chars().take(3).collect();
    if tag.chars().count() < 3 {
        return Err(malformed(literal, "language tag shorter than three characters"));
    }
    let language_tag =
        LanguageCode::from_alpha3(&tag).ok_or_else(|| DecodeError::UnknownLanguage {
            tag: tag.clone(),
            literal: literal.to_string(),
        })?;

    let script_text = if name.is_empty() { None } else { Some(name) };
    Ok((script_text, is_long_form, language_tag))
}

fn check_escape_run(field: &str, literal: &str) -> Result<String, DecodeError> {
    if escape_run().is_match(field) {
        Ok(field.to_string())
    } else {
        Err(DecodeError::InvalidUnicode {
            value: field.to_string(),
            literal: literal.to_string(),
        })
    }
}

fn malformed(literal: &str, reason: &'static str) -> DecodeError {
    DecodeError::MalformedName {
        literal: literal.to_string(),
        reason,
    }
}

/// Splits a brand-specific description into its brand name and abbreviations.
///
/// A description without [`SEPARATOR`] is returned unchanged with no brand.
///
/// # Example
///
/// ```
/// use iso_catalog::decoder::decode_brand;
///
/// let (name, brand) = decode_brand("UNITED AIRLINES;;##VISA##UNITED AIR;;##MC##UNITED").unwrap();
/// let brand = brand.unwrap();
/// assert_eq!(name, "UNITED AIRLINES");
/// assert_eq!(brand.visa.as_deref(), Some("UNITED AIR"));
/// assert_eq!(brand.mastercard.as_deref(), Some("UNITED"));
/// assert_eq!(brand.tsys, None);
/// ```
pub fn decode_brand(
    description: &str,
) -> Result<(String, Option<BrandAbbreviations>), DecodeError> {
    if !description.contains(SEPARATOR) {
        return Ok((description.to_string(), None));
    }

    let parts: Vec<&str> = description.split(SEPARATOR).collect();
    if parts.len() > 4 {
        return Err(malformed_brand(description, "more than four parts"));
    }

    let name = parts[0];
    if name.is_empty() {
        return Err(malformed_brand(description, "empty brand name"));
    }
    if [VISA_MARKER, MASTERCARD_MARKER, TSYS_MARKER]
        .iter()
        .any(|m| name.contains(m))
    {
        return Err(malformed_brand(description, "marker in brand name"));
    }

    let mut brand = BrandAbbreviations {
        name: name.to_string(),
        ..Default::default()
    };

    for part in &parts[1..] {
        let (slot, abbr) = if let Some(abbr) = part.strip_prefix(VISA_MARKER) {
            (&mut brand.visa, abbr)
        } else if let Some(abbr) = part.strip_prefix(MASTERCARD_MARKER) {
            (&mut brand.mastercard, abbr)
        } else if let Some(abbr) = part.strip_prefix(TSYS_MARKER) {
            (&mut brand.tsys, abbr)
        } else {
            return Err(malformed_brand(description, "part without scheme marker"));
        };

        if abbr.is_empty() {
            return Err(malformed_brand(description, "empty abbreviation"));
        }

        if slot.is_some() {
            return Err(malformed_brand(description, "scheme marker repeated"));
        }
        *slot = Some(abbr.to_string());
    }

    Ok((name.to_string(), Some(brand)))
}

fn malformed_brand(description: &str, reason: &'static str) -> DecodeError {
    DecodeError::MalformedBrand {
        description: description.to_string(),
        reason,
    }
}
