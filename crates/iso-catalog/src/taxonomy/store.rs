//! Mutable node store for one taxonomy.
//!
//! Entities are inserted along a path of [`TaxonomyLevel`]s. Branch nodes
//! are created lazily the first time a coordinate is seen, and projections
//! accumulate at the node reached by the last level. Ordering is applied
//! only when a tree is materialized.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use iso_types::{EntityProjection, TaxonomyLevel, ROOT_CODE};

use crate::types::TaxonomyError;

/// One node of the store: a level identity with children or entities.
#[derive(Debug, Clone)]
pub(crate) struct StoreNode {
    pub(crate) code: i64,
    pub(crate) label: String,
    pub(crate) children: HashMap<i64, StoreNode>,
    pub(crate) entities: Vec<EntityProjection>,
}

impl StoreNode {
    fn new(code: i64, label: impl Into<String>) -> Self {
        Self {
            code,
            label: label.into(),
            children: HashMap::new(),
            entities: Vec::new(),
        }
    }
}

/// Append-only tree of branch nodes for one taxonomy.
///
/// Every path inserted into a store has the same length, so all leaf
/// lists sit at the same depth.
///
/// # Example
///
/// ```
/// use iso_catalog::NodeStore;
/// use iso_catalog::iso_types::{EntityProjection, TaxonomyLevel};
///
/// let mut store = NodeStore::new(2, "ROOT");
/// let path = [
///     TaxonomyLevel::new(1500, "Agricultural Services"),
///     TaxonomyLevel::new(6, "Contracted Services"),
/// ];
/// store.insert(&path, EntityProjection::new(742, "Veterinary Services")).unwrap();
/// store.insert(&path, EntityProjection::new(763, "Agricultural Cooperatives")).unwrap();
///
/// assert_eq!(store.node_count(), 2);
/// assert_eq!(store.entity_count(), 2);
/// ```
pub struct NodeStore {
    root: StoreNode,
    depth: usize,
    node_count: usize,
    entity_count: usize,
}

impl NodeStore {
    /// Creates an empty store whose paths have `depth` levels.
    pub fn new(depth: usize, root_label: impl Into<String>) -> Self {
        Self {
            root: StoreNode::new(ROOT_CODE, root_label),
            depth,
            node_count: 0,
            entity_count: 0,
        }
    }

    /// Inserts `entity` at the end of `path`, creating missing nodes.
    ///
    /// # Errors
    /// - [`TaxonomyError::DepthMismatch`] if `path` is not exactly
    ///   [`depth`](Self::depth) levels long.
    /// - [`TaxonomyError::ConflictingLabel`] if a level reuses a known code
    ///   with another label.
    pub fn insert(
        &mut self,
        path: &[TaxonomyLevel],
        entity: EntityProjection,
    ) -> Result<(), TaxonomyError> {
        self.validate(path)?;
        self.node_count += insert_at(&mut self.root, path, entity);
        self.entity_count += 1;
        Ok(())
    }

    /// Checks that `path` could be inserted without changing the store.
    ///
    /// # Errors
    /// Same as [`insert`](Self::insert).
    pub fn validate(&self, path: &[TaxonomyLevel]) -> Result<(), TaxonomyError> {
        if path.len() != self.depth {
            return Err(TaxonomyError::DepthMismatch {
                expected: self.depth,
                found: path.len(),
            });
        }
        check_labels(&self.root, path)
    }

    /// Number of levels in every path.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Label of the root node.
    pub fn root_label(&self) -> &str {
        &self.root.label
    }

    /// Number of branch and leaf nodes, root excluded.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of inserted entities.
    pub fn entity_count(&self) -> usize {
        self.entity_count
    }

    /// Returns true if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.entity_count == 0
    }

    pub(crate) fn root(&self) -> &StoreNode {
        &self.root
    }
}

impl std::fmt::Debug for NodeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeStore")
            .field("root_label", &self.root.label)
            .field("depth", &self.depth)
            .field("nodes", &self.node_count)
            .field("entities", &self.entity_count)
            .finish()
    }
}

fn check_labels(node: &StoreNode, path: &[TaxonomyLevel]) -> Result<(), TaxonomyError> {
    let Some((level, rest)) = path.split_first() else {
        return Ok(());
    };
    match node.children.get(&level.code) {
        Some(child) if child.label != level.label => Err(TaxonomyError::ConflictingLabel {
            code: level.code,
            existing: child.label.clone(),
            found: level.label.clone(),
        }),
        Some(child) => check_labels(child, rest),
        None => Ok(()),
    }
}

/// Walks `path` below `node` and returns the number of nodes created.
fn insert_at(node: &mut StoreNode, path: &[TaxonomyLevel], entity: EntityProjection) -> usize {
    match path {
        [] => {
            node.entities.push(entity);
            0
        }
        [level, rest @ ..] => {
            let (child, created) = match node.children.entry(level.code) {
                Entry::Occupied(e) => (e.into_mut(), 0),
                Entry::Vacant(e) => (e.insert(StoreNode::new(level.code, level.label.as_str())), 1),
            };
            created + insert_at(child, rest, entity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_path(levels: &[(i64, &str)]) -> Vec<TaxonomyLevel> {
        levels
            .iter()
            .map(|&(code, label)| TaxonomyLevel::new(code, label))
            .collect()
    }

    #[test]
    fn test_insert_creates_nodes_once() {
        let mut store = NodeStore::new(2, "ROOT");
        let vet = make_path(&[(1500, "Agricultural Services"), (6, "Contracted Services")]);
        let air = make_path(&[(6299, "Airlines"), (0, "Airlines")]);

        store.insert(&vet, EntityProjection::new(742, "Veterinary Services")).unwrap();
        store.insert(&vet, EntityProjection::new(780, "Landscaping")).unwrap();
        store.insert(&air, EntityProjection::new(3000, "United Airlines")).unwrap();

        assert_eq!(store.node_count(), 4);
        assert_eq!(store.entity_count(), 3);

        let agri = &store.root().children[&1500];
        assert_eq!(agri.label, "Agricultural Services");
        assert_eq!(agri.children[&6].entities.len(), 2);
        assert!(agri.entities.is_empty());
    }

    #[test]
    fn test_depth_mismatch() {
        let mut store = NodeStore::new(4, "ROOT");
        let path = make_path(&[(56, "Healthcare"), (5610, "Services")]);
        assert_eq!(
            store.insert(&path, EntityProjection::new(742, "Vet")),
            Err(TaxonomyError::DepthMismatch {
                expected: 4,
                found: 2
            })
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_conflicting_label_leaves_store_untouched() {
        let mut store = NodeStore::new(2, "ROOT");
        store
            .insert(
                &make_path(&[(1500, "Agricultural Services"), (6, "Contracted Services")]),
                EntityProjection::new(742, "Vet"),
            )
            .unwrap();

        let err = store
            .insert(
                &make_path(&[(1500, "Agricultural Services"), (6, "Contracting")]),
                EntityProjection::new(763, "Coop"),
            )
            .unwrap_err();
        assert!(matches!(err, TaxonomyError::ConflictingLabel { code: 6, .. }));

        let err = store
            .insert(
                &make_path(&[(1500, "Agriculture"), (7, "Government Services")]),
                EntityProjection::new(763, "Coop"),
            )
            .unwrap_err();
        assert!(matches!(err, TaxonomyError::ConflictingLabel { code: 1500, .. }));

        assert_eq!(store.node_count(), 2);
        assert_eq!(store.entity_count(), 1);
        assert!(!store.root().children[&1500].children.contains_key(&7));
    }

    #[test]
    fn test_same_code_at_different_levels() {
        let mut store = NodeStore::new(2, "ROOT");
        store
            .insert(
                &make_path(&[(6, "Six"), (6, "Six again")]),
                EntityProjection::new(1, "One"),
            )
            .unwrap();
        assert_eq!(store.node_count(), 2);
    }

    #[test]
    fn test_debug_shows_counts() {
        let store = NodeStore::new(2, "ROOT");
        let debug = format!("{store:?}");
        assert!(debug.contains("depth: 2"));
        assert!(debug.contains("entities: 0"));
    }
}
