//! The full reference catalog: countries and merchant category codes.

use crate::country::CountryRegistry;
use crate::registry::{build_registry_from_readers, MccRegistry};
use crate::types::{CatalogConfig, CatalogResult};
use crate::{COUNTRY_TABLE, MCC_TABLE, TRBC_TABLE};

/// Every registry built from the embedded tables.
///
/// # Example
///
/// ```
/// use iso_catalog::Catalog;
///
/// let catalog = Catalog::load().unwrap();
/// let germany = catalog.countries.by_alpha2("DE").unwrap();
/// assert_eq!(germany.alpha3, "DEU");
/// assert!(catalog.mccs.find(5411).is_some());
/// ```
#[derive(Debug)]
pub struct Catalog {
    /// ISO 3166 countries.
    pub countries: CountryRegistry,
    /// Merchant category codes with their taxonomies.
    pub mccs: MccRegistry,
}

impl Catalog {
    /// Loads the embedded tables with the default configuration.
    pub fn load() -> CatalogResult<Self> {
        Self::load_with(&CatalogConfig::default())
    }

    /// Loads the embedded tables.
    pub fn load_with(config: &CatalogConfig) -> CatalogResult<Self> {
        let countries = CountryRegistry::from_reader(COUNTRY_TABLE.as_bytes(), config)?;
        let mccs = build_registry_from_readers(TRBC_TABLE.as_bytes(), MCC_TABLE.as_bytes(), config)?;

        tracing::info!(
            "Catalog ready: {} countries, {} merchant category codes",
            countries.len(),
            mccs.len()
        );
        Ok(Self { countries, mccs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{BranchOrder, LeafOrder, Taxonomy};
    use iso_types::{CurrencyCode, LanguageCode};

    #[test]
    fn test_every_country_loads() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.countries.len(), 251);
        assert_eq!(catalog.mccs.len(), 894);
    }

    #[test]
    fn test_country_lookups() {
        let catalog = Catalog::load().unwrap();
        let germany = catalog.countries.by_alpha3("DEU").unwrap();
        assert_eq!(germany.numeric, 276);
        assert_eq!(germany.default_currency(), Some(CurrencyCode::Eur));
        assert_eq!(germany.default_language(), Some(LanguageCode::Deu));
        assert_eq!(
            catalog.countries.by_numeric(276).map(|c| c.alpha2.as_str()),
            Some("DE")
        );
        assert!(catalog.countries.by_alpha3("XXX").is_none());
    }

    #[test]
    fn test_kosovo_numeric_code() {
        let catalog = Catalog::load().unwrap();
        let kosovo = catalog.countries.by_numeric(999999).unwrap();
        assert_eq!(kosovo.alpha3, "XKO");
        assert_eq!(kosovo.default_currency(), Some(CurrencyCode::Eur));
    }

    #[test]
    fn test_root_label_applies_to_trees() {
        let catalog = Catalog::load_with(&CatalogConfig::with_root_label("MCC")).unwrap();
        let tree = catalog
            .mccs
            .tree(Taxonomy::Scheme, BranchOrder::ByCode, LeafOrder::ByCode);
        assert_eq!(tree.label(), "MCC");
    }
}
