//! Immutable, ordered taxonomy trees.

use std::cmp::Ordering;

use iso_types::EntityProjection;

use super::store::{NodeStore, StoreNode};

/// Ordering of sibling branch nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BranchOrder {
    /// Ascending taxonomy code.
    #[default]
    ByCode,
    /// Label, then code.
    ByLabel,
}

/// Ordering of entities inside a leaf list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LeafOrder {
    /// Ascending entity code.
    #[default]
    ByCode,
    /// Description, then code.
    ByLabel,
}

impl BranchOrder {
    fn compare(self, a: &TaxonomyNode, b: &TaxonomyNode) -> Ordering {
        match self {
            Self::ByCode => a.code().cmp(&b.code()),
            Self::ByLabel => a
                .label()
                .cmp(b.label())
                .then_with(|| a.code().cmp(&b.code())),
        }
    }
}

impl LeafOrder {
    pub(crate) fn compare(self, a: &EntityProjection, b: &EntityProjection) -> Ordering {
        match self {
            Self::ByCode => a.code.cmp(&b.code),
            Self::ByLabel => a
                .description
                .cmp(&b.description)
                .then_with(|| a.code.cmp(&b.code)),
        }
    }
}

/// One branch or leaf of a materialized taxonomy tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyNode {
    /// A node whose children are further nodes.
    Branch {
        /// Taxonomy code.
        code: i64,
        /// Label.
        label: String,
        /// Ordered child nodes.
        children: Vec<TaxonomyNode>,
    },
    /// A terminal node listing entities.
    Leaf {
        /// Taxonomy code.
        code: i64,
        /// Label.
        label: String,
        /// Ordered entities.
        entities: Vec<EntityProjection>,
    },
}

impl TaxonomyNode {
    /// Taxonomy code of the node.
    pub fn code(&self) -> i64 {
        match self {
            Self::Branch { code, .. } | Self::Leaf { code, .. } => *code,
        }
    }

    /// Label of the node.
    pub fn label(&self) -> &str {
        match self {
            Self::Branch { label, .. } | Self::Leaf { label, .. } => label,
        }
    }

    /// Returns true for leaf nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Child nodes; empty for leaves.
    pub fn children(&self) -> &[TaxonomyNode] {
        match self {
            Self::Branch { children, .. } => children,
            Self::Leaf { .. } => &[],
        }
    }

    /// Entities; empty for branches.
    pub fn entities(&self) -> &[EntityProjection] {
        match self {
            Self::Branch { .. } => &[],
            Self::Leaf { entities, .. } => entities,
        }
    }

    /// Returns the child with taxonomy code `code`.
    pub fn child(&self, code: i64) -> Option<&TaxonomyNode> {
        self.children().iter().find(|c| c.code() == code)
    }

    /// Follows `codes` down from this node.
    pub fn descend(&self, codes: &[i64]) -> Option<&TaxonomyNode> {
        codes
            .iter()
            .try_fold(self, |node, &code| node.child(code))
    }

    /// Every entity below this node, in tree order.
    pub fn leaves(&self) -> Vec<&EntityProjection> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a EntityProjection>) {
        match self {
            Self::Branch { children, .. } => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
            Self::Leaf { entities, .. } => out.extend(entities),
        }
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children()
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }
}

/// Snapshots `store` into an ordered tree.
///
/// Nodes at the store's depth become leaves; every other node, the root
/// included, is a branch. The store is not modified and the result shares
/// nothing with it.
///
/// # Example
///
/// ```
/// use iso_catalog::{materialize, BranchOrder, LeafOrder, NodeStore};
/// use iso_catalog::iso_types::{EntityProjection, TaxonomyLevel};
///
/// let mut store = NodeStore::new(1, "ROOT");
/// let head = [TaxonomyLevel::new(6, "Contracted Services")];
/// store.insert(&head, EntityProjection::new(780, "Landscaping")).unwrap();
/// store.insert(&head, EntityProjection::new(742, "Veterinary Services")).unwrap();
///
/// let tree = materialize(&store, BranchOrder::ByCode, LeafOrder::ByCode);
/// let codes: Vec<u32> = tree.leaves().iter().map(|e| e.code).collect();
/// assert_eq!(codes, vec![742, 780]);
/// ```
pub fn materialize(
    store: &NodeStore,
    branch_order: BranchOrder,
    leaf_order: LeafOrder,
) -> TaxonomyNode {
    tracing::debug!(
        "Materializing '{}' tree ({} nodes, {:?}/{:?})",
        store.root_label(),
        store.node_count(),
        branch_order,
        leaf_order
    );
    build(store.root(), store.depth(), branch_order, leaf_order)
}

fn build(
    node: &StoreNode,
    remaining: usize,
    branch_order: BranchOrder,
    leaf_order: LeafOrder,
) -> TaxonomyNode {
    if remaining == 0 {
        let mut entities = node.entities.clone();
        entities.sort_by(|a, b| leaf_order.compare(a, b));
        return TaxonomyNode::Leaf {
            code: node.code,
            label: node.label.clone(),
            entities,
        };
    }

    let mut children: Vec<TaxonomyNode> = node
        .children
        .values()
        .map(|child| build(child, remaining - 1, branch_order, leaf_order))
        .collect();
    children.sort_by(|a, b| branch_order.compare(a, b));

    TaxonomyNode::Branch {
        code: node.code,
        label: node.label.clone(),
        children,
    }
}
