//! Hierarchical indexes over merchant category codes.
//!
//! Each taxonomy is a [`NodeStore`] filled at registration time and
//! snapshotted into a [`TaxonomyNode`] tree on request.

mod render;
mod store;
mod tree;

pub use render::{
    render_flat_list, to_display_tree, to_display_tree_with, to_document, to_document_with,
    to_json, DocumentItem, DocumentNode,
};
pub use store::NodeStore;
pub use tree::{materialize, BranchOrder, LeafOrder, TaxonomyNode};

use iso_types::TrbcPath;

/// The taxonomies every merchant category code is indexed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Taxonomy {
    /// Numeric range, then Mastercard head category.
    Scheme,
    /// Thomson Reuters Business Classification, four levels.
    Trbc,
}

impl Taxonomy {
    /// All taxonomies.
    pub const ALL: [Taxonomy; 2] = [Taxonomy::Scheme, Taxonomy::Trbc];

    /// Number of levels between the root and the leaf lists.
    pub fn depth(self) -> usize {
        match self {
            Self::Scheme => 2,
            Self::Trbc => TrbcPath::DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depths() {
        assert_eq!(Taxonomy::Scheme.depth(), 2);
        assert_eq!(Taxonomy::Trbc.depth(), 4);
    }
}
