//! Merchant category code table rows.

use csv::StringRecord;
use iso_types::{
    HeadCategory, MerchantCategoryCode, MerchantCategoryRange, TransactionCategoryCode,
    VisaMerchantCategoryGroup,
};

use crate::decoder::decode_brand;
use crate::parser::{parse, TableRecord};
use crate::trbc::TrbcTable;
use crate::types::{CatalogError, CatalogResult};

/// One row of `mcc.tsv`.
///
/// The TRBC column holds an industry code only; the full path is resolved
/// against a [`TrbcTable`] by [`MccRow::into_entity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MccRow {
    /// Four-digit code.
    pub code: u32,
    /// Mastercard head category.
    pub head_category: HeadCategory,
    /// TRBC industry code.
    pub trbc_industry: i64,
    /// Mastercard transaction category.
    pub tcc: Option<TransactionCategoryCode>,
    /// Visa merchant category group.
    pub mcg: Option<VisaMerchantCategoryGroup>,
    /// Description, possibly carrying brand abbreviations.
    pub description: String,
}

impl TableRecord for MccRow {
    const EXPECTED_COLUMNS: &'static [&'static str] = &[
        "code",
        "head_category",
        "trbc_industry",
        "tcc",
        "mcg",
        "description",
    ];

    fn from_record(record: &StringRecord) -> CatalogResult<Self> {
        let head = parse::non_empty(&record[1], "head_category")?;
        let head_category =
            HeadCategory::from_name(head).ok_or_else(|| CatalogError::UnknownHeadCategory {
                name: head.to_string(),
            })?;

        let tcc = parse::optional(&record[3])
            .map(|name| {
                TransactionCategoryCode::from_name(name).ok_or_else(|| {
                    CatalogError::UnknownTransactionCategory {
                        name: name.to_string(),
                    }
                })
            })
            .transpose()?;

        let mcg = parse::optional(&record[4])
            .map(|value| {
                let code: u8 = parse::integer(value)?;
                VisaMerchantCategoryGroup::from_code(code)
                    .ok_or(CatalogError::UnknownMerchantCategoryGroup { code })
            })
            .transpose()?;

        Ok(Self {
            code: parse::code(&record[0])?,
            head_category,
            trbc_industry: parse::integer(&record[2])?,
            tcc,
            mcg,
            description: parse::non_empty(&record[5], "description")?.to_string(),
        })
    }
}

impl MccRow {
    /// Builds the entity, resolving the range and the TRBC path.
    ///
    /// # Errors
    /// Fails if the code lies outside every range, the TRBC code is not a
    /// known industry, or the brand description is malformed.
    pub fn into_entity(self, trbc: &TrbcTable) -> CatalogResult<MerchantCategoryCode> {
        let range = MerchantCategoryRange::from_code(self.code)
            .ok_or(CatalogError::NoMerchantRange { code: self.code })?;
        let (description, brand) = decode_brand(&self.description)?;

        Ok(MerchantCategoryCode {
            code: self.code,
            description,
            brand,
            range,
            head_category: self.head_category,
            trbc: trbc.resolve(self.trbc_industry)?,
            tcc: self.tcc,
            mcg: self.mcg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TableParser;
    use crate::types::{CatalogConfig, DecodeError};

    const HEADER: &str = "code\thead_category\ttrbc_industry\ttcc\tmcg\tdescription\n";

    fn make_rows(body: &str) -> CatalogResult<Vec<MccRow>> {
        let data = format!("{HEADER}{body}");
        TableParser::from_reader(data.as_bytes(), &CatalogConfig::default())?.parse_all()
    }

    fn make_trbc() -> TrbcTable {
        TrbcTable::from_reader(
            "code\tlabel\n52\tIndustrials\n5240\tTransportation\n\
             524060\tPassenger Transportation Services\n52406010\tAirlines\n"
                .as_bytes(),
            &CatalogConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_parse_row() {
        let rows = make_rows("0742\tCONTRACTED_SERVICES\t56102010\tR_ALL_OTHER_MERCHANTS\t7\tVeterinary Services\n")
            .unwrap();
        let row = &rows[0];
        assert_eq!(row.code, 742);
        assert_eq!(row.head_category, HeadCategory::ContractedServices);
        assert_eq!(row.trbc_industry, 56102010);
        assert_eq!(row.tcc, Some(TransactionCategoryCode::AllOtherMerchants));
        assert_eq!(row.mcg, Some(VisaMerchantCategoryGroup::Other));
    }

    #[test]
    fn test_optional_columns() {
        let rows = make_rows("4723\tTRANSPORTATION\t52406010\t\t\tTravel Agencies\n").unwrap();
        assert_eq!(rows[0].tcc, None);
        assert_eq!(rows[0].mcg, None);
    }

    #[test]
    fn test_unknown_names_are_rejected() {
        let err = make_rows("0742\tVETERINARY\t56102010\t\t\tVeterinary Services\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Row { ref source, .. }
                if matches!(**source, CatalogError::UnknownHeadCategory { .. })
        ));

        let err = make_rows("0742\tCONTRACTED_SERVICES\t56102010\tQ_UNKNOWN\t\tX\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Row { ref source, .. }
                if matches!(**source, CatalogError::UnknownTransactionCategory { .. })
        ));

        let err = make_rows("0742\tCONTRACTED_SERVICES\t56102010\t\t12\tX\n").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Row { ref source, .. }
                if matches!(**source, CatalogError::UnknownMerchantCategoryGroup { code: 12 })
        ));
    }

    #[test]
    fn test_into_entity_with_brand() {
        let rows = make_rows(
            "3000\tAIRLINES\t52406010\tX_AIRLINES\t1\tUNITED AIRLINES;;##VISA##UNITED AIR;;##MC##UNITED\n",
        )
        .unwrap();
        let mcc = rows[0].clone().into_entity(&make_trbc()).unwrap();
        assert_eq!(mcc.description, "UNITED AIRLINES");
        assert_eq!(mcc.range, MerchantCategoryRange::Airlines);
        assert_eq!(mcc.trbc.industry().label, "Airlines");
        let brand = mcc.brand.unwrap();
        assert_eq!(brand.visa.as_deref(), Some("UNITED AIR"));
        assert_eq!(brand.mastercard.as_deref(), Some("UNITED"));
    }

    #[test]
    fn test_into_entity_errors() {
        let trbc = make_trbc();
        let row = MccRow {
            code: 0,
            head_category: HeadCategory::Airlines,
            trbc_industry: 52406010,
            tcc: None,
            mcg: None,
            description: "Nowhere".to_string(),
        };
        assert!(matches!(
            row.clone().into_entity(&trbc),
            Err(CatalogError::NoMerchantRange { code: 0 })
        ));

        let unknown_industry = MccRow {
            code: 3000,
            trbc_industry: 524060,
            ..row.clone()
        };
        assert!(matches!(
            unknown_industry.into_entity(&trbc),
            Err(CatalogError::NotAnIndustry { code: 524060 })
        ));

        let bad_brand = MccRow {
            code: 3000,
            description: "AIR;;##AMEX##AIR".to_string(),
            ..row
        };
        assert!(matches!(
            bad_brand.into_entity(&trbc),
            Err(CatalogError::Decode(DecodeError::MalformedBrand { .. }))
        ));
    }
}
