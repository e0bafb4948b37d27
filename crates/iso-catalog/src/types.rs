//! Error and configuration types for catalog loading.

use thiserror::Error;

/// Errors raised while decoding a localized name or brand literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The literal does not follow the `name(lang)[;;..]` grammar.
    #[error("Malformed name literal '{literal}': {reason}")]
    MalformedName {
        /// The offending literal.
        literal: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// The language tag is not in the ISO 639 vocabulary.
    #[error("Unknown language tag '{tag}' in '{literal}'")]
    UnknownLanguage {
        /// The unresolved tag.
        tag: String,
        /// The literal it came from.
        literal: String,
    },

    /// A field expected to hold `\uXXXX` escapes is malformed.
    #[error("Invalid unicode escape run '{value}' in '{literal}'")]
    InvalidUnicode {
        /// The rejected field.
        value: String,
        /// The literal it came from.
        literal: String,
    },

    /// A brand description has an unknown marker or too many parts.
    #[error("Malformed brand description '{description}': {reason}")]
    MalformedBrand {
        /// The offending description.
        description: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

/// Errors raised while inserting into a taxonomy node store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    /// The path length differs from the store depth.
    #[error("Path has {found} levels, store expects {expected}")]
    DepthMismatch {
        /// Store depth.
        expected: usize,
        /// Length of the offending path.
        found: usize,
    },

    /// A node was reached with the same code but another label.
    #[error("Taxonomy code {code} is labelled '{existing}', got '{found}'")]
    ConflictingLabel {
        /// Code of the node.
        code: i64,
        /// Label already stored.
        existing: String,
        /// Label of the incoming level.
        found: String,
    },
}

/// Errors raised while registering merchant category codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A code was registered twice.
    #[error("Duplicate merchant category code {code:04}")]
    DuplicateCode {
        /// The repeated code.
        code: u32,
    },

    /// A code lies outside the range it is classified under.
    #[error("Merchant category code {code:04} is outside range {start:04}-{end:04}")]
    RangeViolation {
        /// The offending code.
        code: u32,
        /// First code of the declared range.
        start: u32,
        /// Last code of the declared range.
        end: u32,
    },

    /// Inserting into a taxonomy failed.
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),
}

/// Errors that can occur while loading the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON rendering error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Name or brand decoding error.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Registration error.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Invalid header - column count mismatch.
    #[error("Invalid header: expected {expected} columns, found {found}")]
    InvalidHeader {
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// Unexpected column name.
    #[error("Unexpected column '{found}' at position {position}, expected '{expected}'")]
    UnexpectedColumn {
        /// The column position.
        position: usize,
        /// Expected column name.
        expected: String,
        /// Found column name.
        found: String,
    },

    /// A required field is empty.
    #[error("Missing value for column '{column}'")]
    MissingValue {
        /// Column name.
        column: &'static str,
    },

    /// Invalid integer value.
    #[error("Invalid integer value: {value}")]
    InvalidInteger {
        /// The invalid integer value.
        value: String,
    },

    /// A merchant category code is not four digits.
    #[error("Invalid merchant category code: {value}")]
    InvalidCode {
        /// The invalid code.
        value: String,
    },

    /// Unknown Mastercard head category name.
    #[error("Unknown head category: {name}")]
    UnknownHeadCategory {
        /// The unresolved name.
        name: String,
    },

    /// Unknown Mastercard transaction category name.
    #[error("Unknown transaction category code: {name}")]
    UnknownTransactionCategory {
        /// The unresolved name.
        name: String,
    },

    /// Visa merchant category group outside 1 to 11.
    #[error("Unknown merchant category group: {code}")]
    UnknownMerchantCategoryGroup {
        /// The unresolved group number.
        code: u8,
    },

    /// Unknown ISO 4217 currency.
    #[error("Unknown currency '{code}' for country {country}")]
    UnknownCurrency {
        /// The unresolved currency code.
        code: String,
        /// Alpha-3 code of the country row.
        country: String,
    },

    /// A TRBC code whose parent has not been loaded.
    #[error("TRBC code {code} has no parent {parent}")]
    UnknownTrbcParent {
        /// The orphan code.
        code: i64,
        /// The missing parent code.
        parent: i64,
    },

    /// A TRBC code was loaded twice.
    #[error("Duplicate TRBC code {code}")]
    DuplicateTrbcCode {
        /// The repeated code.
        code: i64,
    },

    /// A TRBC code does not name a fourth-level industry.
    #[error("TRBC code {code} is not an industry")]
    NotAnIndustry {
        /// The code that was resolved.
        code: i64,
    },

    /// A merchant category code outside every range.
    #[error("No merchant category range contains {code:04}")]
    NoMerchantRange {
        /// The offending code.
        code: u32,
    },

    /// A country alpha-2 or alpha-3 code was loaded twice.
    #[error("Duplicate country code {code}")]
    DuplicateCountry {
        /// The repeated code.
        code: String,
    },

    /// An error attributed to a table line.
    #[error("Line {line}: {source}")]
    Row {
        /// One-based line number in the table.
        line: u64,
        /// The underlying error.
        source: Box<CatalogError>,
    },
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Configuration for loading tables.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Field delimiter of the tables.
    pub delimiter: u8,
    /// Label of the synthetic root of every taxonomy tree.
    pub root_label: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            delimiter: b'\t',
            root_label: "ROOT".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Creates a config with another root label.
    pub fn with_root_label(label: impl Into<String>) -> Self {
        Self {
            root_label: label.into(),
            ..Self::default()
        }
    }
}

/// Configuration for rendering taxonomy trees.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Spaces per depth level in display trees.
    pub indent_width: usize,
    /// Whether branch codes appear in documents.
    pub include_codes: bool,
    /// Whether JSON output is pretty-printed.
    pub pretty: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            include_codes: true,
            pretty: true,
        }
    }
}

impl RenderConfig {
    /// Creates a config producing single-line JSON.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }

    /// Creates a config leaving branch codes out of documents.
    pub fn without_codes() -> Self {
        Self {
            include_codes: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_config_default() {
        let config = CatalogConfig::default();
        assert_eq!(config.delimiter, b'\t');
        assert_eq!(config.root_label, "ROOT");
        assert_eq!(CatalogConfig::with_root_label("MCC").root_label, "MCC");
    }

    #[test]
    fn test_render_config_constructors() {
        let config = RenderConfig::default();
        assert_eq!(config.indent_width, 2);
        assert!(config.include_codes && config.pretty);
        assert!(!RenderConfig::compact().pretty);
        assert!(!RenderConfig::without_codes().include_codes);
    }

    #[test]
    fn test_row_error_message() {
        let err = CatalogError::Row {
            line: 12,
            source: Box::new(CatalogError::InvalidCode {
                value: "74".to_string(),
            }),
        };
        assert_eq!(err.to_string(), "Line 12: Invalid merchant category code: 74");
    }

    #[test]
    fn test_registry_error_formats_codes() {
        let err = RegistryError::RangeViolation {
            code: 742,
            start: 3000,
            end: 3299,
        };
        assert_eq!(
            err.to_string(),
            "Merchant category code 0742 is outside range 3000-3299"
        );
    }
}
