//! Text and document renderings of taxonomy trees.
//!
//! The display tree is meant for people:
//!
//! ```text
//!   ROOT {
//!     Agricultural Services {
//!       Contracted Services {
//!         (0742) Veterinary Services
//!       }
//!     }
//!   }
//! ```
//!
//! The document form mirrors the tree as `{label, code, list}` objects and
//! is what [`to_json`] serializes.

use std::fmt::Write as _;

use iso_types::{EntityProjection, ROOT_CODE};
use serde::{Deserialize, Serialize};

use super::tree::TaxonomyNode;
use crate::types::{CatalogResult, RenderConfig};

/// One node of a serializable taxonomy document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentNode {
    /// Node label.
    pub label: String,
    /// Taxonomy code; absent on the root and when codes are disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// Child nodes of a branch, or entities of a leaf.
    pub list: Vec<DocumentItem>,
}

/// Element of a [`DocumentNode`] list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentItem {
    /// A nested node.
    Node(DocumentNode),
    /// An entity stored at a leaf.
    Entity(EntityProjection),
}

/// Renders `node` as indented text with the default [`RenderConfig`].
pub fn to_display_tree(node: &TaxonomyNode) -> String {
    to_display_tree_with(node, &RenderConfig::default())
}

/// Renders `node` as indented text.
///
/// A node at depth `d` is indented by `(d + 1) * indent_width` spaces and
/// its entities by one more step.
pub fn to_display_tree_with(node: &TaxonomyNode, config: &RenderConfig) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0, config.indent_width);
    out
}

fn write_node(out: &mut String, node: &TaxonomyNode, depth: usize, width: usize) {
    let indent = " ".repeat((depth + 1) * width);
    let _ = writeln!(out, "{indent}{} {{", node.label());
    match node {
        TaxonomyNode::Branch { children, .. } => {
            for child in children {
                write_node(out, child, depth + 1, width);
            }
        }
        TaxonomyNode::Leaf { entities, .. } => {
            let entity_indent = " ".repeat((depth + 2) * width);
            for entity in entities {
                let _ = writeln!(out, "{entity_indent}{entity}");
            }
        }
    }
    let _ = writeln!(out, "{indent}}}");
}

/// Converts `node` into a document with the default [`RenderConfig`].
pub fn to_document(node: &TaxonomyNode) -> DocumentNode {
    to_document_with(node, &RenderConfig::default())
}

/// Converts `node` into a document.
///
/// The root never carries a code. Other nodes carry theirs unless
/// `include_codes` is off.
pub fn to_document_with(node: &TaxonomyNode, config: &RenderConfig) -> DocumentNode {
    let code = (config.include_codes && node.code() != ROOT_CODE).then(|| node.code());
    let list = match node {
        TaxonomyNode::Branch { children, .. } => children
            .iter()
            .map(|child| DocumentItem::Node(to_document_with(child, config)))
            .collect(),
        TaxonomyNode::Leaf { entities, .. } => {
            entities.iter().cloned().map(DocumentItem::Entity).collect()
        }
    };
    DocumentNode {
        label: node.label().to_string(),
        code,
        list,
    }
}

/// Serializes `node` as a JSON document.
pub fn to_json(node: &TaxonomyNode, config: &RenderConfig) -> CatalogResult<String> {
    let document = to_document_with(node, config);
    let json = if config.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(json)
}

/// Renders one `(0742) description` line per entity.
pub fn render_flat_list(entities: &[EntityProjection]) -> String {
    entities.iter().fold(String::new(), |mut out, entity| {
        let _ = writeln!(out, "{entity}");
        out
    })
}
