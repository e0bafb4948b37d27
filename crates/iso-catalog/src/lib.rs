//! # iso-catalog
//!
//! Loader for ISO reference data and merchant category codes.
//!
//! The crate embeds three tab-separated tables (countries, TRBC codes and
//! merchant category codes), decodes them into [`iso_types`] values, and
//! indexes every merchant category code under two taxonomies:
//!
//! - **Scheme**: numeric range, then Mastercard head category.
//! - **TRBC**: the four levels of the Thomson Reuters Business Classification.
//!
//! Trees are materialized on request with independent branch and leaf
//! orderings, and render to indented text or JSON.
//!
//! ## Usage
//!
//! ```rust
//! use iso_catalog::{build_registry, to_display_tree, BranchOrder, LeafOrder, Taxonomy};
//!
//! let registry = build_registry().unwrap();
//! let tree = registry.tree(Taxonomy::Scheme, BranchOrder::ByCode, LeafOrder::ByCode);
//! let text = to_display_tree(&tree);
//! assert!(text.contains("(0742) Veterinary Services"));
//! ```

#![warn(missing_docs)]

// Re-export iso-types for convenience
pub use iso_types;

mod catalog;
mod country;
pub mod decoder;
mod mcc;
pub mod parser;
mod registry;
mod taxonomy;
mod trbc;
mod types;

pub use catalog::Catalog;
pub use country::{decode_local_names, CountryRegistry, CountryRow, NAME_SEPARATOR};
pub use mcc::MccRow;
pub use registry::{build_registry, build_registry_from_readers, MccRegistry};
pub use taxonomy::{
    materialize, render_flat_list, to_display_tree, to_display_tree_with, to_document,
    to_document_with, to_json, BranchOrder, DocumentItem, DocumentNode, LeafOrder, NodeStore,
    Taxonomy, TaxonomyNode,
};
pub use trbc::{TrbcRow, TrbcTable};
pub use types::{
    CatalogConfig, CatalogError, CatalogResult, DecodeError, RegistryError, RenderConfig,
    TaxonomyError,
};

/// Merchant category code table: `code head_category trbc_industry tcc mcg description`.
pub const MCC_TABLE: &str = include_str!("../data/mcc.tsv");

/// TRBC table: `code label`, parents before children.
pub const TRBC_TABLE: &str = include_str!("../data/trbc.tsv");

/// ISO 3166 table: `alpha3 alpha2 numeric name currencies local_names`.
pub const COUNTRY_TABLE: &str = include_str!("../data/countries.tsv");
