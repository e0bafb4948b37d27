//! ISO 3166 country table and registry.

use std::collections::HashMap;
use std::io::Read;

use csv::StringRecord;
use iso_types::{Country, CurrencyCode, NameRecord};

use crate::decoder::{decode, SEPARATOR};
use crate::parser::{parse, TableParser, TableRecord};
use crate::types::{CatalogConfig, CatalogError, CatalogResult};

/// Separator between local name literals in the `local_names` column.
pub const NAME_SEPARATOR: char = '|';

/// One row of `countries.tsv`, fully decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRow(pub Country);

impl TableRecord for CountryRow {
    const EXPECTED_COLUMNS: &'static [&'static str] = &[
        "alpha3",
        "alpha2",
        "numeric",
        "name",
        "currencies",
        "local_names",
    ];

    fn from_record(record: &StringRecord) -> CatalogResult<Self> {
        let alpha3 = parse::non_empty(&record[0], "alpha3")?.to_string();

        let currencies = parse::optional(&record[4])
            .map(|value| {
                value
                    .split(SEPARATOR)
                    .map(|code| {
                        CurrencyCode::from_alpha3(code).ok_or_else(|| {
                            CatalogError::UnknownCurrency {
                                code: code.to_string(),
                                country: alpha3.clone(),
                            }
                        })
                    })
                    .collect::<CatalogResult<Vec<_>>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(Self(Country {
            alpha2: parse::non_empty(&record[1], "alpha2")?.to_string(),
            numeric: parse::integer(&record[2])?,
            english_name: parse::non_empty(&record[3], "name")?.to_string(),
            currencies,
            names: decode_local_names(&record[5])?,
            alpha3,
        }))
    }
}

/// Decodes the `|`-separated local names of one country.
///
/// Only the first name is flagged as the default language.
pub fn decode_local_names(value: &str) -> CatalogResult<Vec<NameRecord>> {
    let mut names = parse::optional(value)
        .map(|v| v.split(NAME_SEPARATOR).map(decode).collect::<Result<Vec<_>, _>>())
        .transpose()?
        .unwrap_or_default();

    if let Some(first) = names.first_mut() {
        first.is_default_language = true;
    }
    Ok(names)
}

/// Countries indexed by their ISO 3166 codes.
#[derive(Default)]
pub struct CountryRegistry {
    countries: Vec<Country>,
    by_alpha3: HashMap<String, usize>,
    by_alpha2: HashMap<String, usize>,
    by_numeric: HashMap<u32, usize>,
}

impl CountryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every row of a country table.
    pub fn from_reader<R: Read>(reader: R, config: &CatalogConfig) -> CatalogResult<Self> {
        let mut registry = Self::new();
        let parser: TableParser<R, CountryRow> = TableParser::from_reader(reader, config)?;
        for row in parser {
            registry.insert(row?.0)?;
        }
        tracing::info!(
            "Loaded {} countries with {} local names",
            registry.len(),
            registry.countries.iter().map(|c| c.names.len()).sum::<usize>()
        );
        Ok(registry)
    }

    /// Adds a country.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateCountry`] if the alpha-3 or alpha-2
    /// code is already present.
    pub fn insert(&mut self, country: Country) -> CatalogResult<()> {
        for (index, code) in [
            (&self.by_alpha3, &country.alpha3),
            (&self.by_alpha2, &country.alpha2),
        ] {
            if index.contains_key(code) {
                return Err(CatalogError::DuplicateCountry { code: code.clone() });
            }
        }

        let idx = self.countries.len();
        self.by_alpha3.insert(country.alpha3.clone(), idx);
        self.by_alpha2.insert(country.alpha2.clone(), idx);
        // Numeric codes are not unique in every revision; first one wins.
        self.by_numeric.entry(country.numeric).or_insert(idx);
        self.countries.push(country);
        Ok(())
    }

    /// Looks up a country by alpha-3 code, e.g. `DEU`.
    pub fn by_alpha3(&self, code: &str) -> Option<&Country> {
        self.by_alpha3.get(code).map(|&i| &self.countries[i])
    }

    /// Looks up a country by alpha-2 code, e.g. `DE`.
    pub fn by_alpha2(&self, code: &str) -> Option<&Country> {
        self.by_alpha2.get(code).map(|&i| &self.countries[i])
    }

    /// Looks up a country by numeric code, e.g. `276`.
    pub fn by_numeric(&self, numeric: u32) -> Option<&Country> {
        self.by_numeric.get(&numeric).map(|&i| &self.countries[i])
    }

    /// Returns every country in table order.
    pub fn all(&self) -> &[Country] {
        &self.countries
    }

    /// Returns the number of countries.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Returns true if no country is loaded.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl std::fmt::Debug for CountryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryRegistry")
            .field("countries", &self.countries.len())
            .finish()
    }
}
