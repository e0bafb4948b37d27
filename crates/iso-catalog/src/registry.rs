//! Registry of merchant category codes and their taxonomy stores.

use std::collections::HashMap;
use std::io::Read;

use iso_types::{EntityProjection, MerchantCategoryCode, MerchantCategoryRange};

use crate::mcc::MccRow;
use crate::parser::TableParser;
use crate::taxonomy::{materialize, BranchOrder, LeafOrder, NodeStore, Taxonomy, TaxonomyNode};
use crate::trbc::TrbcTable;
use crate::types::{CatalogConfig, CatalogResult, RegistryError};
use crate::{MCC_TABLE, TRBC_TABLE};

/// Every loaded merchant category code, indexed by code and by taxonomy.
///
/// Registration is append-only. Once built the registry is only read, and
/// trees are materialized as independent copies.
pub struct MccRegistry {
    entities: Vec<MerchantCategoryCode>,
    by_code: HashMap<u32, usize>,
    scheme: NodeStore,
    trbc: NodeStore,
}

impl MccRegistry {
    /// Creates an empty registry whose tree roots carry `root_label`.
    pub fn new(root_label: impl Into<String>) -> Self {
        let root_label = root_label.into();
        Self {
            entities: Vec::new(),
            by_code: HashMap::new(),
            scheme: NodeStore::new(Taxonomy::Scheme.depth(), root_label.as_str()),
            trbc: NodeStore::new(Taxonomy::Trbc.depth(), root_label),
        }
    }

    /// Adds an entity and indexes it under every taxonomy.
    ///
    /// Both taxonomy paths are validated before anything is stored, so a
    /// failed registration leaves the registry unchanged.
    ///
    /// # Errors
    /// - [`RegistryError::DuplicateCode`] if the code is already registered.
    /// - [`RegistryError::RangeViolation`] if the code is outside its range.
    /// - [`RegistryError::Taxonomy`] if a path conflicts with a stored label.
    pub fn register(&mut self, mcc: MerchantCategoryCode) -> Result<(), RegistryError> {
        if self.by_code.contains_key(&mcc.code) {
            return Err(RegistryError::DuplicateCode { code: mcc.code });
        }
        if !mcc.range.contains(mcc.code) {
            return Err(RegistryError::RangeViolation {
                code: mcc.code,
                start: mcc.range.start(),
                end: mcc.range.end(),
            });
        }

        let scheme_path = mcc.scheme_path();
        self.scheme.validate(&scheme_path)?;
        self.trbc.validate(mcc.trbc_path())?;

        let projection = mcc.projection();
        self.scheme.insert(&scheme_path, projection.clone())?;
        self.trbc.insert(mcc.trbc_path(), projection)?;

        self.by_code.insert(mcc.code, self.entities.len());
        self.entities.push(mcc);
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // LOOKUPS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Returns every entity in registration order.
    pub fn all(&self) -> &[MerchantCategoryCode] {
        &self.entities
    }

    /// Looks up an entity by code.
    pub fn find(&self, code: u32) -> Option<&MerchantCategoryCode> {
        self.by_code.get(&code).map(|&i| &self.entities[i])
    }

    /// Returns the entities classified under `range`.
    pub fn in_range(
        &self,
        range: MerchantCategoryRange,
    ) -> impl Iterator<Item = &MerchantCategoryCode> + '_ {
        self.entities.iter().filter(move |mcc| mcc.range == range)
    }

    /// Returns the number of registered entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // VIEWS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Returns the projection of every entity, sorted by `order`.
    pub fn flat_list(&self, order: LeafOrder) -> Vec<EntityProjection> {
        let mut list: Vec<EntityProjection> =
            self.entities.iter().map(MerchantCategoryCode::projection).collect();
        list.sort_by(|a, b| order.compare(a, b));
        list
    }

    /// Materializes the tree of `taxonomy`.
    pub fn tree(
        &self,
        taxonomy: Taxonomy,
        branch_order: BranchOrder,
        leaf_order: LeafOrder,
    ) -> TaxonomyNode {
        materialize(self.store(taxonomy), branch_order, leaf_order)
    }

    /// Returns the node store backing `taxonomy`.
    pub fn store(&self, taxonomy: Taxonomy) -> &NodeStore {
        match taxonomy {
            Taxonomy::Scheme => &self.scheme,
            Taxonomy::Trbc => &self.trbc,
        }
    }
}

impl std::fmt::Debug for MccRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MccRegistry")
            .field("entities", &self.entities.len())
            .field("scheme_nodes", &self.scheme.node_count())
            .field("trbc_nodes", &self.trbc.node_count())
            .finish()
    }
}

/// Builds the registry from the tables embedded in this crate.
///
/// # Example
///
/// ```
/// use iso_catalog::build_registry;
///
/// let registry = build_registry().unwrap();
/// let vet = registry.find(742).unwrap();
/// assert_eq!(vet.description, "Veterinary Services");
/// ```
pub fn build_registry() -> CatalogResult<MccRegistry> {
    build_registry_from_readers(
        TRBC_TABLE.as_bytes(),
        MCC_TABLE.as_bytes(),
        &CatalogConfig::default(),
    )
}

/// Builds a registry from a TRBC table and an MCC table.
///
/// The TRBC table is loaded first; every MCC row is then resolved against
/// it and registered. The first failing row aborts the load.
pub fn build_registry_from_readers<T: Read, M: Read>(
    trbc_reader: T,
    mcc_reader: M,
    config: &CatalogConfig,
) -> CatalogResult<MccRegistry> {
    let trbc = TrbcTable::from_reader(trbc_reader, config)?;
    tracing::info!("Loaded TRBC table with {} codes", trbc.len());

    let mut registry = MccRegistry::new(config.root_label.as_str());
    let parser: TableParser<M, MccRow> = TableParser::from_reader(mcc_reader, config)?;
    for row in parser {
        registry.register(row?.into_entity(&trbc)?)?;
    }

    for taxonomy in Taxonomy::ALL {
        tracing::debug!(
            "{:?} taxonomy: created {} nodes",
            taxonomy,
            registry.store(taxonomy).node_count()
        );
    }
    tracing::info!("Loaded {} merchant category codes", registry.len());
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::to_json;
    use crate::types::{CatalogError, RenderConfig, TaxonomyError};
    use iso_types::{HeadCategory, TaxonomyLevel, TrbcPath};
    use std::collections::BTreeSet;

    fn make_mcc(code: u32, range: MerchantCategoryRange) -> MerchantCategoryCode {
        MerchantCategoryCode {
            code,
            description: format!("Entity {code}"),
            brand: None,
            range,
            head_category: HeadCategory::ContractedServices,
            trbc: TrbcPath::new([
                TaxonomyLevel::new(56, "Health Care"),
                TaxonomyLevel::new(5610, "Health Care Services"),
                TaxonomyLevel::new(561020, "Health Care Providers and Services"),
                TaxonomyLevel::new(56102010, "Health Care Facilities and Services"),
            ]),
            tcc: None,
            mcg: None,
        }
    }

    #[test]
    fn test_embedded_registry() {
        let registry = build_registry().unwrap();
        assert_eq!(registry.len(), 894);

        let vet = registry.find(742).unwrap();
        assert_eq!(vet.range, MerchantCategoryRange::AgriculturalServices);
        assert_eq!(vet.head_category, HeadCategory::ContractedServices);
        assert_eq!(vet.trbc.economic_sector().label, "Health Care");
        assert!(registry.find(1).is_none());
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MccRegistry>();
        assert_send_sync::<TaxonomyNode>();
    }

    #[test]
    fn test_vet_sits_under_agricultural_services() {
        let registry = build_registry().unwrap();
        let tree = registry.tree(Taxonomy::Scheme, BranchOrder::ByCode, LeafOrder::ByCode);

        let range = tree.child(1500).unwrap();
        assert_eq!(range.label(), "Agricultural Services");
        let head = range.child(6).unwrap();
        assert_eq!(head.label(), "Contracted Services");
        assert!(head
            .entities()
            .contains(&EntityProjection::new(742, "Veterinary Services")));
    }

    #[test]
    fn test_every_entity_once_per_tree() {
        let registry = build_registry().unwrap();
        let expected: BTreeSet<u32> = registry.all().iter().map(|m| m.code).collect();

        for taxonomy in Taxonomy::ALL {
            for branch in [BranchOrder::ByCode, BranchOrder::ByLabel] {
                for leaf in [LeafOrder::ByCode, LeafOrder::ByLabel] {
                    let tree = registry.tree(taxonomy, branch, leaf);
                    let leaves = tree.leaves();
                    assert_eq!(leaves.len(), registry.len(), "{taxonomy:?} {branch:?} {leaf:?}");
                    let codes: BTreeSet<u32> = leaves.iter().map(|e| e.code).collect();
                    assert_eq!(codes, expected);
                }
            }
        }
    }

    #[test]
    fn test_entities_sit_at_their_coordinates() {
        let registry = build_registry().unwrap();
        let scheme = registry.tree(Taxonomy::Scheme, BranchOrder::ByCode, LeafOrder::ByCode);
        let trbc = registry.tree(Taxonomy::Trbc, BranchOrder::ByCode, LeafOrder::ByCode);

        for mcc in registry.all() {
            let projection = mcc.projection();
            let scheme_codes: Vec<i64> = mcc.scheme_path().iter().map(|l| l.code).collect();
            let trbc_codes: Vec<i64> = mcc.trbc_path().iter().map(|l| l.code).collect();
            assert!(scheme.descend(&scheme_codes).unwrap().entities().contains(&projection));
            assert!(trbc.descend(&trbc_codes).unwrap().entities().contains(&projection));
        }
    }

    #[test]
    fn test_json_is_stable() {
        let registry = build_registry().unwrap();
        let config = RenderConfig::default();
        let first = registry.tree(Taxonomy::Trbc, BranchOrder::ByCode, LeafOrder::ByCode);
        let second = registry.tree(Taxonomy::Trbc, BranchOrder::ByCode, LeafOrder::ByCode);
        assert_eq!(
            to_json(&first, &config).unwrap(),
            to_json(&second, &config).unwrap()
        );
    }

    #[test]
    fn test_flat_list_orders() {
        let mut registry = MccRegistry::new("ROOT");
        registry
            .register(make_mcc(780, MerchantCategoryRange::AgriculturalServices))
            .unwrap();
        registry
            .register(make_mcc(742, MerchantCategoryRange::AgriculturalServices))
            .unwrap();
        registry
            .register(make_mcc(1520, MerchantCategoryRange::ContractedServices))
            .unwrap();

        let by_code: Vec<u32> = registry.flat_list(LeafOrder::ByCode).iter().map(|e| e.code).collect();
        assert_eq!(by_code, vec![742, 780, 1520]);
        let by_label: Vec<u32> = registry.flat_list(LeafOrder::ByLabel).iter().map(|e| e.code).collect();
        assert_eq!(by_label, vec![1520, 742, 780]);

        assert_eq!(
            registry.in_range(MerchantCategoryRange::AgriculturalServices).count(),
            2
        );
    }

    #[test]
    fn test_duplicate_code() {
        let mut registry = MccRegistry::new("ROOT");
        let mcc = make_mcc(742, MerchantCategoryRange::AgriculturalServices);
        registry.register(mcc.clone()).unwrap();
        assert_eq!(
            registry.register(mcc),
            Err(RegistryError::DuplicateCode { code: 742 })
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_range_violation() {
        let mut registry = MccRegistry::new("ROOT");
        let err = registry
            .register(make_mcc(742, MerchantCategoryRange::Airlines))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::RangeViolation {
                code: 742,
                start: 3000,
                end: 3299
            }
        );
        assert!(registry.is_empty());
        assert!(registry.store(Taxonomy::Scheme).is_empty());
    }

    #[test]
    fn test_conflicting_trbc_label_is_atomic() {
        let mut registry = MccRegistry::new("ROOT");
        registry
            .register(make_mcc(742, MerchantCategoryRange::AgriculturalServices))
            .unwrap();

        let mut other = make_mcc(763, MerchantCategoryRange::AgriculturalServices);
        other.trbc = TrbcPath::new([
            TaxonomyLevel::new(56, "Healthcare"),
            TaxonomyLevel::new(5610, "Health Care Services"),
            TaxonomyLevel::new(561020, "Health Care Providers and Services"),
            TaxonomyLevel::new(56102010, "Health Care Facilities and Services"),
        ]);
        assert!(matches!(
            registry.register(other),
            Err(RegistryError::Taxonomy(TaxonomyError::ConflictingLabel { code: 56, .. }))
        ));
        assert_eq!(registry.store(Taxonomy::Scheme).entity_count(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_from_readers_reports_bad_rows() {
        let trbc = "code\tlabel\n56\tHealth Care\n5610\tServices\n561020\tProviders\n56102010\tFacilities\n";
        let mcc = "code\thead_category\ttrbc_industry\ttcc\tmcg\tdescription\n\
                   0742\tCONTRACTED_SERVICES\t56102010\t\t\tVeterinary Services\n\
                   0742\tCONTRACTED_SERVICES\t56102010\t\t\tVeterinary Services\n";
        let err = build_registry_from_readers(
            trbc.as_bytes(),
            mcc.as_bytes(),
            &CatalogConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Registry(RegistryError::DuplicateCode { code: 742 })
        ));
    }

    #[test]
    fn test_root_label_from_config() {
        let registry = build_registry_from_readers(
            "code\tlabel\n".as_bytes(),
            "code\thead_category\ttrbc_industry\ttcc\tmcg\tdescription\n".as_bytes(),
            &CatalogConfig::with_root_label("MCC"),
        )
        .unwrap();
        assert!(registry.is_empty());
        let tree = registry.tree(Taxonomy::Trbc, BranchOrder::ByCode, LeafOrder::ByCode);
        assert_eq!(tree.label(), "MCC");
    }
}
