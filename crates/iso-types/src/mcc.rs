//! ISO 18245 merchant category code type.

use std::fmt;

use crate::{
    EntityProjection, HeadCategory, MerchantCategoryRange, TaxonomyLevel, TransactionCategoryCode,
    TrbcPath, VisaMerchantCategoryGroup,
};

/// Scheme-required abbreviations of a brand-specific code.
///
/// Airline, car rental and lodging codes name one brand each. Some schemes
/// require a shorter spelling of that brand in clearing records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BrandAbbreviations {
    /// Brand name as published.
    pub name: String,
    /// Abbreviation required by Visa.
    pub visa: Option<String>,
    /// Abbreviation required by Mastercard.
    pub mastercard: Option<String>,
    /// Abbreviation required by TSYS.
    pub tsys: Option<String>,
}

impl BrandAbbreviations {
    /// Returns true if no scheme requires an abbreviation.
    pub fn is_empty(&self) -> bool {
        self.visa.is_none() && self.mastercard.is_none() && self.tsys.is_none()
    }
}

/// One merchant category code with its classifications.
///
/// # Examples
///
/// ```
/// use iso_types::{
///     HeadCategory, MerchantCategoryCode, MerchantCategoryRange, TaxonomyLevel, TrbcPath,
/// };
///
/// let mcc = MerchantCategoryCode {
///     code: 742,
///     description: "Veterinary Services".to_string(),
///     brand: None,
///     range: MerchantCategoryRange::AgriculturalServices,
///     head_category: HeadCategory::ContractedServices,
///     trbc: TrbcPath::new([
///         TaxonomyLevel::new(56, "Healthcare"),
///         TaxonomyLevel::new(5610, "Healthcare Services & Equipment"),
///         TaxonomyLevel::new(561020, "Healthcare Providers & Services"),
///         TaxonomyLevel::new(56102010, "Healthcare Facilities & Services"),
///     ]),
///     tcc: None,
///     mcg: None,
/// };
///
/// assert_eq!(mcc.code_as_string(), "0742");
/// assert_eq!(mcc.scheme_path()[0].code, 1500);
/// assert!(mcc.to_string().starts_with("MCC (0742): Veterinary Services"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MerchantCategoryCode {
    /// Four-digit code.
    pub code: u32,
    /// English description.
    pub description: String,
    /// Brand abbreviations for brand-specific codes.
    pub brand: Option<BrandAbbreviations>,
    /// Numeric range containing the code.
    pub range: MerchantCategoryRange,
    /// Mastercard head category.
    pub head_category: HeadCategory,
    /// Thomson Reuters classification.
    pub trbc: TrbcPath,
    /// Mastercard transaction category, when assigned.
    pub tcc: Option<TransactionCategoryCode>,
    /// Visa merchant category group, when assigned.
    pub mcg: Option<VisaMerchantCategoryGroup>,
}

impl MerchantCategoryCode {
    /// Returns the code zero-padded to four digits.
    pub fn code_as_string(&self) -> String {
        format!("{:04}", self.code)
    }

    /// Returns the scheme coordinate: range, then head category.
    pub fn scheme_path(&self) -> [TaxonomyLevel; 2] {
        [self.range.level(), self.head_category.level()]
    }

    /// Returns the TRBC coordinate.
    pub fn trbc_path(&self) -> &[TaxonomyLevel] {
        self.trbc.as_slice()
    }

    /// Returns the leaf view stored in taxonomy trees.
    pub fn projection(&self) -> EntityProjection {
        EntityProjection::new(self.code, self.description.as_str())
    }
}

impl fmt::Display for MerchantCategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MCC ({}): {}", self.code_as_string(), self.description)?;
        if let Some(brand) = &self.brand {
            for (scheme, abbr) in [
                ("Visa", &brand.visa),
                ("Mastercard", &brand.mastercard),
                ("TSYS", &brand.tsys),
            ] {
                if let Some(abbr) = abbr {
                    writeln!(f, "  {scheme} abbreviation: {abbr}")?;
                }
            }
        }
        writeln!(f, "  Range: {}", self.range)?;
        writeln!(f, "  Head category: {}", self.head_category)?;
        writeln!(f, "  TRBC: {}", self.trbc)?;
        if let Some(tcc) = self.tcc {
            writeln!(f, "  TCC: {tcc}")?;
        }
        if let Some(mcg) = self.mcg {
            writeln!(f, "  MCG: {mcg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_mcc(code: u32, brand: Option<BrandAbbreviations>) -> MerchantCategoryCode {
        MerchantCategoryCode {
            code,
            description: "United Airlines".to_string(),
            brand,
            range: MerchantCategoryRange::Airlines,
            head_category: HeadCategory::Airlines,
            trbc: TrbcPath::new([
                TaxonomyLevel::new(52, "Industrials"),
                TaxonomyLevel::new(5240, "Transportation"),
                TaxonomyLevel::new(524060, "Passenger Transportation Services"),
                TaxonomyLevel::new(52406010, "Airlines"),
            ]),
            tcc: Some(TransactionCategoryCode::Airlines),
            mcg: Some(VisaMerchantCategoryGroup::CommercialTravelAirlines),
        }
    }

    #[test]
    fn test_paths() {
        let mcc = make_mcc(3000, None);
        let scheme = mcc.scheme_path();
        assert_eq!(scheme[0], TaxonomyLevel::new(6299, "Airlines"));
        assert_eq!(scheme[1], TaxonomyLevel::new(0, "Airlines"));
        assert_eq!(mcc.trbc_path().len(), 4);
        assert_eq!(mcc.projection(), EntityProjection::new(3000, "United Airlines"));
    }

    #[test]
    fn test_display_lists_abbreviations() {
        let brand = BrandAbbreviations {
            name: "United Airlines".to_string(),
            visa: Some("UNITED AIR".to_string()),
            mastercard: Some("UNITED".to_string()),
            tsys: None,
        };
        let text = make_mcc(3000, Some(brand)).to_string();
        assert!(text.starts_with("MCC (3000): United Airlines\n"));
        assert!(text.contains("  Visa abbreviation: UNITED AIR\n"));
        assert!(text.contains("  Mastercard abbreviation: UNITED\n"));
        assert!(!text.contains("TSYS"));
        assert!(text.contains("  TCC: (X) Airlines\n"));
    }

    #[test]
    fn test_brand_is_empty() {
        assert!(BrandAbbreviations::default().is_empty());
    }
}
