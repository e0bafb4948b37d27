//! Generic table parser.
//!
//! Provides a streaming parser for the delimiter-separated reference tables.

use std::io::Read;
use std::marker::PhantomData;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::types::{CatalogConfig, CatalogError, CatalogResult};

/// Trait for types that can be parsed from table rows.
pub trait TableRecord: Sized {
    /// Expected column names for this record type.
    const EXPECTED_COLUMNS: &'static [&'static str];

    /// Parse a record from a CSV StringRecord.
    fn from_record(record: &StringRecord) -> CatalogResult<Self>;
}

/// A streaming parser for reference tables.
///
/// Quoting is disabled: names such as `Côte d'Ivoire` or `"Scottish" Airlines`
/// are read verbatim.
pub struct TableParser<R: Read, T: TableRecord> {
    reader: Reader<R>,
    records_read: usize,
    _marker: PhantomData<T>,
}

impl<R: Read, T: TableRecord> TableParser<R, T> {
    /// Creates a new parser from a reader.
    ///
    /// # Errors
    /// Returns an error if the header row is missing or does not match
    /// [`TableRecord::EXPECTED_COLUMNS`].
    pub fn from_reader(reader: R, config: &CatalogConfig) -> CatalogResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(config.delimiter)
            .has_headers(true)
            .flexible(false)
            .quoting(false)
            .trim(csv::Trim::None)
            .from_reader(reader);

        Self::validate_headers(&mut csv_reader)?;

        Ok(Self {
            reader: csv_reader,
            records_read: 0,
            _marker: PhantomData,
        })
    }

    fn validate_headers(reader: &mut Reader<R>) -> CatalogResult<()> {
        let headers = reader.headers()?;
        let expected = T::EXPECTED_COLUMNS;

        if headers.len() != expected.len() {
            return Err(CatalogError::InvalidHeader {
                expected: expected.len(),
                found: headers.len(),
            });
        }

        for (i, expected_col) in expected.iter().enumerate() {
            let found = headers.get(i).unwrap_or("");
            // Handle UTF-8 BOM at start of file
            let found = found.trim_start_matches('\u{feff}');
            if found != *expected_col {
                return Err(CatalogError::UnexpectedColumn {
                    position: i,
                    expected: expected_col.to_string(),
                    found: found.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Returns the number of records read so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Parses all records into a Vec, stopping at the first error.
    pub fn parse_all(self) -> CatalogResult<Vec<T>> {
        self.collect()
    }
}

impl<R: Read, T: TableRecord> Iterator for TableParser<R, T> {
    type Item = CatalogResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    self.records_read += 1;

                    // Skip blank rows
                    if record.iter().all(|f| f.trim().is_empty()) {
                        continue;
                    }

                    return Some(T::from_record(&record).map_err(|e| CatalogError::Row {
                        line: record.position().map_or(0, |p| p.line()),
                        source: Box::new(e),
                    }));
                }
                Ok(false) => return None,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Helper functions for parsing table field values.
pub mod parse {
    use super::{CatalogError, CatalogResult};

    /// Parses an integer value.
    pub fn integer<T: std::str::FromStr>(value: &str) -> CatalogResult<T> {
        value.parse::<T>().map_err(|_| CatalogError::InvalidInteger {
            value: value.to_string(),
        })
    }

    /// Returns `None` for an empty field.
    pub fn optional(value: &str) -> Option<&str> {
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Returns the field, failing if it is empty.
    pub fn non_empty<'a>(value: &'a str, column: &'static str) -> CatalogResult<&'a str> {
        optional(value).ok_or(CatalogError::MissingValue { column })
    }

    /// Parses a four-digit merchant category code such as `0742`.
    pub fn code(value: &str) -> CatalogResult<u32> {
        if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CatalogError::InvalidCode {
                value: value.to_string(),
            });
        }
        integer(value)
    }
}
