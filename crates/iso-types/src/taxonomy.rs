//! Taxonomy coordinates.
//!
//! A [`TaxonomyLevel`] identifies one node inside one layer of a hierarchy.
//! An ordered slice of levels is a path from the root to a leaf bucket,
//! where entities are stored as [`EntityProjection`]s.

use std::fmt;

/// Code used for the synthetic root of every taxonomy tree.
pub const ROOT_CODE: i64 = -1;

/// One node identity inside one layer of a hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaxonomyLevel {
    /// Stable identity of the node within its layer.
    pub code: i64,
    /// Human-readable label.
    pub label: String,
}

impl TaxonomyLevel {
    /// Creates a level from a code and label.
    pub fn new(code: i64, label: impl Into<String>) -> Self {
        Self {
            code,
            label: label.into(),
        }
    }
}

impl fmt::Display for TaxonomyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.code, self.label)
    }
}

/// Minimal view of an entity stored at a taxonomy's terminal nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityProjection {
    /// Entity code.
    pub code: u32,
    /// English description.
    pub description: String,
}

impl EntityProjection {
    /// Creates a projection.
    pub fn new(code: u32, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }
}

impl fmt::Display for EntityProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:04}) {}", self.code, self.description)
    }
}

/// A full coordinate in the Thomson Reuters Business Classification.
///
/// Levels are economic sector, business sector, industry group and
/// industry. Each code extends its parent's code by two digits.
///
/// # Examples
///
/// ```
/// use iso_types::{TaxonomyLevel, TrbcPath};
///
/// let path = TrbcPath::new([
///     TaxonomyLevel::new(56, "Healthcare"),
///     TaxonomyLevel::new(5610, "Healthcare Services & Equipment"),
///     TaxonomyLevel::new(561020, "Healthcare Providers & Services"),
///     TaxonomyLevel::new(56102010, "Healthcare Facilities & Services"),
/// ]);
///
/// assert_eq!(path.industry().code, 56102010);
/// assert_eq!(path.as_slice().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrbcPath {
    levels: [TaxonomyLevel; 4],
}

impl TrbcPath {
    /// Number of levels in a TRBC path.
    pub const DEPTH: usize = 4;

    /// Creates a path from economic sector down to industry.
    pub fn new(levels: [TaxonomyLevel; 4]) -> Self {
        Self { levels }
    }

    /// Economic sector, e.g. `56` Healthcare.
    pub fn economic_sector(&self) -> &TaxonomyLevel {
        &self.levels[0]
    }

    /// Business sector, e.g. `5610`.
    pub fn business_sector(&self) -> &TaxonomyLevel {
        &self.levels[1]
    }

    /// Industry group, e.g. `561020`.
    pub fn industry_group(&self) -> &TaxonomyLevel {
        &self.levels[2]
    }

    /// Industry, e.g. `56102010`.
    pub fn industry(&self) -> &TaxonomyLevel {
        &self.levels[3]
    }

    /// Returns the levels from the root down.
    pub fn as_slice(&self) -> &[TaxonomyLevel] {
        &self.levels
    }
}

impl fmt::Display for TrbcPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.levels.iter().map(|l| l.label.as_str()).collect();
        write!(f, "{}", labels.join(" > "))
    }
}
