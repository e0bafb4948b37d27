//! Thomson Reuters Business Classification table.
//!
//! TRBC codes concatenate two digits per level: economic sector `56`,
//! business sector `5610`, industry group `561020` and industry `56102010`.
//! The non-TRBC sectors (`100` Public Sector, `101` Membership
//! Organizations, `102` Other) follow the same rule with one more digit.

use std::collections::HashMap;
use std::io::Read;

use csv::StringRecord;
use iso_types::{TaxonomyLevel, TrbcPath};

use crate::parser::{parse, TableParser, TableRecord};
use crate::types::{CatalogConfig, CatalogError, CatalogResult};

/// One row of `trbc.tsv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrbcRow {
    /// Classification code.
    pub code: i64,
    /// English label.
    pub label: String,
}

impl TableRecord for TrbcRow {
    const EXPECTED_COLUMNS: &'static [&'static str] = &["code", "label"];

    fn from_record(record: &StringRecord) -> CatalogResult<Self> {
        Ok(Self {
            code: parse::integer(&record[0])?,
            label: parse::non_empty(&record[1], "label")?.to_string(),
        })
    }
}

#[derive(Debug, Clone)]
struct TrbcNode {
    label: String,
    depth: usize,
}

/// The TRBC hierarchy, indexed by code.
#[derive(Debug, Default)]
pub struct TrbcTable {
    nodes: HashMap<i64, TrbcNode>,
}

impl TrbcTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a table from `code<TAB>label` rows.
    ///
    /// Parents must come before their children.
    pub fn from_reader<R: Read>(reader: R, config: &CatalogConfig) -> CatalogResult<Self> {
        let mut table = Self::new();
        let mut parser: TableParser<R, TrbcRow> = TableParser::from_reader(reader, config)?;
        for row in parser.by_ref() {
            table.insert(row?)?;
        }
        tracing::debug!(
            "Loaded {} TRBC codes from {} rows",
            table.len(),
            parser.records_read()
        );
        Ok(table)
    }

    /// Adds one classification node.
    ///
    /// # Errors
    /// Fails with [`CatalogError::DuplicateTrbcCode`] on a repeated code and
    /// [`CatalogError::UnknownTrbcParent`] when a non-sector code has no
    /// loaded parent.
    pub fn insert(&mut self, row: TrbcRow) -> CatalogResult<()> {
        if self.nodes.contains_key(&row.code) {
            return Err(CatalogError::DuplicateTrbcCode { code: row.code });
        }

        let depth = match parent_code(row.code) {
            None => 1,
            Some(parent) => match self.nodes.get(&parent) {
                Some(node) => node.depth + 1,
                None => {
                    return Err(CatalogError::UnknownTrbcParent {
                        code: row.code,
                        parent,
                    })
                }
            },
        };

        self.nodes.insert(
            row.code,
            TrbcNode {
                label: row.label,
                depth,
            },
        );
        Ok(())
    }

    /// Returns the label of `code`.
    pub fn label(&self, code: i64) -> Option<&str> {
        self.nodes.get(&code).map(|n| n.label.as_str())
    }

    /// Returns the level of `code`, 1 for economic sectors to 4 for industries.
    pub fn depth(&self, code: i64) -> Option<usize> {
        self.nodes.get(&code).map(|n| n.depth)
    }

    /// Resolves an industry code to its full path.
    ///
    /// # Errors
    /// Returns [`CatalogError::NotAnIndustry`] if `code` is unknown or is not
    /// on the fourth level.
    pub fn resolve(&self, industry_code: i64) -> CatalogResult<TrbcPath> {
        let not_an_industry = || CatalogError::NotAnIndustry {
            code: industry_code,
        };
        if self.depth(industry_code) != Some(TrbcPath::DEPTH) {
            return Err(not_an_industry());
        }

        let group = industry_code / 100;
        let business = group / 100;
        let economic = business / 100;
        let level = |code: i64| -> CatalogResult<TaxonomyLevel> {
            let label = self.label(code).ok_or_else(not_an_industry)?;
            Ok(TaxonomyLevel::new(code, label))
        };

        Ok(TrbcPath::new([
            level(economic)?,
            level(business)?,
            level(group)?,
            level(industry_code)?,
        ]))
    }

    /// Returns the number of codes in the table.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Parent of a TRBC code. Economic sectors (two or three digits) have none.
fn parent_code(code: i64) -> Option<i64> {
    if code < 1000 {
        None
    } else {
        Some(code / 100)
    }
}
