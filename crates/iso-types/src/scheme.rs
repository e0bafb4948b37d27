//! Card-scheme classifications of merchant category codes.
//!
//! The scheme taxonomy has two levels: a [`MerchantCategoryRange`] (a
//! numeric block of codes) and a Mastercard [`HeadCategory`]. Visa
//! [`VisaMerchantCategoryGroup`] and Mastercard [`TransactionCategoryCode`]
//! are carried as extra attributes and are not part of any tree.

use std::fmt;

use crate::TaxonomyLevel;

/// A numeric block of merchant category codes.
///
/// # Examples
///
/// ```
/// use iso_types::MerchantCategoryRange;
///
/// let range = MerchantCategoryRange::from_code(742).unwrap();
/// assert_eq!(range, MerchantCategoryRange::AgriculturalServices);
/// assert_eq!(range.code(), 1500);
/// assert_eq!(range.to_string(), "[0001-1499] Agricultural Services");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MerchantCategoryRange {
    /// 0001-1499.
    AgriculturalServices,
    /// 1500-2999.
    ContractedServices,
    /// 4000-4799.
    TransportationServices,
    /// 4800-4999.
    UtilityServices,
    /// 5000-5599.
    RetailOutletServices,
    /// 5600-5699.
    ClothingStores,
    /// 5700-7299.
    MiscellaneousStores,
    /// 7300-7999.
    BusinessServices,
    /// 8000-8999.
    ProfessionalServicesAndMembershipOrganisations,
    /// 9000-9999.
    GovernmentServices,
    /// 3000-3299, travel and entertainment.
    Airlines,
    /// 3300-3499, travel and entertainment.
    CarRental,
    /// 3500-3999, travel and entertainment.
    Lodging,
}

impl MerchantCategoryRange {
    /// Every range, general ranges first, then travel and entertainment.
    pub const ALL: [MerchantCategoryRange; 13] = [
        Self::AgriculturalServices,
        Self::ContractedServices,
        Self::TransportationServices,
        Self::UtilityServices,
        Self::RetailOutletServices,
        Self::ClothingStores,
        Self::MiscellaneousStores,
        Self::BusinessServices,
        Self::ProfessionalServicesAndMembershipOrganisations,
        Self::GovernmentServices,
        Self::Airlines,
        Self::CarRental,
        Self::Lodging,
    ];

    /// Finds the range containing `code`.
    ///
    /// Returns `None` for codes outside every allocated block (0 and above 9999).
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.contains(code))
    }

    /// First code of the range.
    pub fn start(self) -> u32 {
        self.bounds().0
    }

    /// Last code of the range, inclusive.
    pub fn end(self) -> u32 {
        self.bounds().1
    }

    /// Returns true if `code` falls inside the range.
    pub fn contains(self, code: u32) -> bool {
        let (start, end) = self.bounds();
        (start..=end).contains(&code)
    }

    /// Taxonomy code of the range: `start + end`.
    pub fn code(self) -> i64 {
        i64::from(self.start()) + i64::from(self.end())
    }

    /// English description.
    pub fn label(self) -> &'static str {
        match self {
            Self::AgriculturalServices => "Agricultural Services",
            Self::ContractedServices => "Contracted Services",
            Self::TransportationServices => "Transportation Services",
            Self::UtilityServices => "Utility Services",
            Self::RetailOutletServices => "Retail Outlet Services",
            Self::ClothingStores => "Clothing Stores",
            Self::MiscellaneousStores => "Miscellaneous Stores",
            Self::BusinessServices => "Business Services",
            Self::ProfessionalServicesAndMembershipOrganisations => {
                "Professional Services and Membership Organisations"
            }
            Self::GovernmentServices => "Government Services",
            Self::Airlines => "Airlines",
            Self::CarRental => "Car Rental",
            Self::Lodging => "Lodging",
        }
    }

    /// Returns the range as a taxonomy level.
    pub fn level(self) -> TaxonomyLevel {
        TaxonomyLevel::new(self.code(), self.label())
    }

    fn bounds(self) -> (u32, u32) {
        match self {
            Self::AgriculturalServices => (1, 1499),
            Self::ContractedServices => (1500, 2999),
            Self::TransportationServices => (4000, 4799),
            Self::UtilityServices => (4800, 4999),
            Self::RetailOutletServices => (5000, 5599),
            Self::ClothingStores => (5600, 5699),
            Self::MiscellaneousStores => (5700, 7299),
            Self::BusinessServices => (7300, 7999),
            Self::ProfessionalServicesAndMembershipOrganisations => (8000, 8999),
            Self::GovernmentServices => (9000, 9999),
            Self::Airlines => (3000, 3299),
            Self::CarRental => (3300, 3499),
            Self::Lodging => (3500, 3999),
        }
    }
}

impl fmt::Display for MerchantCategoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:04}-{:04}] {}", self.start(), self.end(), self.label())
    }
}

/// Generates a field-less enum whose variants are addressed in data tables
/// by an upper-snake-case name.
macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $ty:ident {
            $($variant:ident => $name:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $ty {
            $(
                #[doc = $label]
                $variant,
            )+
        }

        impl $ty {
            /// Every value in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Looks up a value by its table name, e.g. `"HOTELS_MOTELS"`.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Returns the table name.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Returns the English label.
            pub fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }
    };
}

named_enum! {
    /// Mastercard merchant head category, the second level of the scheme taxonomy.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_types::HeadCategory;
    ///
    /// let head = HeadCategory::from_name("CONTRACTED_SERVICES").unwrap();
    /// assert_eq!(head.code(), 6);
    /// assert_eq!(head.to_string(), "(6) Contracted Services");
    /// ```
    pub enum HeadCategory {
        Airlines => "AIRLINES", "Airlines";
        AmusementAndEntertainment => "AMUSEMENT_AND_ENTERTAINMENT", "Amusement and Entertainment";
        AutomobileVehicleRental => "AUTOMOBILE_VEHICLE_RENTAL", "Automobile/Vehicle Rental";
        AutomobilesAndVehicles => "AUTOMOBILES_AND_VEHICLES", "Automobiles and Vehicles";
        BusinessServices => "BUSINESS_SERVICES", "Business Services";
        ClothingStores => "CLOTHING_STORES", "Clothing Stores";
        ContractedServices => "CONTRACTED_SERVICES", "Contracted Services";
        GovernmentServices => "GOVERNMENT_SERVICES", "Government Services";
        HotelsMotels => "HOTELS_MOTELS", "Hotels/Motels";
        Moto => "MOTO", "Mail Order/Telephone Order";
        MiscellaneousStores => "MISCELLANEOUS_STORES", "Miscellaneous Stores";
        PersonalServiceProviders => "PERSONAL_SERVICE_PROVIDERS", "Personal Service Providers";
        ProfessionalServicesAndMembership => "PROFESSIONAL_SERVICES_AND_MEMBERSHIP", "Professional Services and Membership Organizations";
        RepairServices => "REPAIR_SERVICES", "Repair Services";
        RetailStores => "RETAIL_STORES", "Retail Stores";
        ServiceProviders => "SERVICE_PROVIDERS", "Service Providers";
        Transportation => "TRANSPORTATION", "Transportation";
        MastercardUk => "MASTERCARD_UK", "Mastercard UK";
        Utilities => "UTILITIES", "Utilities";
        Wholesale => "WHOLESALE", "Wholesale";
        VisaServices => "VISA_SERVICES", "Visa Services";
    }
}

impl HeadCategory {
    /// Taxonomy code: the declaration ordinal.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Returns the head category as a taxonomy level.
    pub fn level(self) -> TaxonomyLevel {
        TaxonomyLevel::new(self.code(), self.label())
    }
}

impl fmt::Display for HeadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.code(), self.label())
    }
}

named_enum! {
    /// Mastercard transaction category code.
    ///
    /// Several categories share a letter; the table name tells them apart.
    pub enum TransactionCategoryCode {
        AutomobileVehicleRental => "A_AUTOMOBILE_VEHICLE_RENTAL", "Automobile/Vehicle Rental";
        CashDisbursement => "C_CASH_DISBURSEMENT", "Cash Disbursement";
        CashDisbursementAtm => "Z_CASH_DISBURSEMENT_ATM", "ATM Cash Disbursement";
        Restaurant => "F_RESTAURANT", "Restaurant";
        HotelMotel => "H_HOTEL_MOTEL", "Hotel/Motel";
        CollegeSchoolExpense => "O_COLLEGE_SCHOOL_EXPENSE", "College/School Expense";
        Hospital => "O_HOSPITAL", "Hospital";
        PaymentTransaction => "P_PAYMENT_TRANSACTION", "Payment Transaction";
        AllOtherMerchants => "R_ALL_OTHER_MERCHANTS", "All Other Merchants";
        AllOtherNonFaceToFace => "T_ALL_OTHER_NON_F2F_TRANSACTION", "All Other Non Face-to-Face Transactions";
        UniqueTransactionQuasiCash => "U_UNIQUE_TRANSACTION_QUASI_CASH_DISBURSEMENT", "Unique Transaction, Quasi Cash Disbursement";
        CardholderActivatedTerminalIfc => "U_CARDHOLDER_ACTIVATED_TERMINAL_IFC", "Cardholder Activated Terminal (IFC)";
        UniqueOther => "U_OTHER", "Unique Transaction, Other";
        CardholderActivatedTerminalOther => "R_CARDHOLDER_ACTIVATED_TERMINAL_OTHER", "Cardholder Activated Terminal, Other";
        Airlines => "X_AIRLINES", "Airlines";
        Railroad => "X_RAILROAD", "Railroad";
        TravelAgencyTransportation => "X_TRAVEL_AGENCY_TRANSPORTATION", "Travel Agency and Transportation";
    }
}

impl TransactionCategoryCode {
    /// The one-letter code used on the wire.
    pub fn code(self) -> char {
        // Every table name starts with its letter.
        self.name().chars().next().unwrap_or('?')
    }
}

impl fmt::Display for TransactionCategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.code(), self.label())
    }
}

named_enum! {
    /// Visa merchant category group (expense type).
    pub enum VisaMerchantCategoryGroup {
        CommercialTravelAirlines => "COMMERCIAL_TRAVEL_AIRLINES", "Commercial Travel, Airlines";
        Lodging => "LODGING", "Lodging";
        AutoRental => "AUTO_RENTAL", "Auto Rental";
        Restaurant => "RESTAURANT", "Restaurant";
        MotoEc => "MOTO_EC", "Mail Order/Telephone Order/E-Commerce";
        RiskyPurchase => "RISKY_PURCHASE", "Risky Purchase";
        Other => "OTHER", "Other";
        OtherManualCash => "OTHER_MANUAL_CASH", "Other Manual Cash";
        Atm => "ATM", "ATM";
        QuasiCash => "QUASI_CASH", "Quasi Cash";
        Medical => "MEDICAL", "Medical";
    }
}

impl VisaMerchantCategoryGroup {
    /// Returns the group number, 1 to 11.
    pub fn code(self) -> u8 {
        self as u8 + 1
    }

    /// Looks up a group by number.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code).checked_sub(1)?).copied()
    }
}

impl fmt::Display for VisaMerchantCategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.code(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_do_not_overlap() {
        for code in 1..=9999 {
            let hits = MerchantCategoryRange::ALL
                .iter()
                .filter(|r| r.contains(code))
                .count();
            assert_eq!(hits, 1, "code {code}");
        }
        assert_eq!(MerchantCategoryRange::from_code(0), None);
        assert_eq!(MerchantCategoryRange::from_code(10000), None);
    }

    #[test]
    fn test_range_codes() {
        assert_eq!(MerchantCategoryRange::Airlines.code(), 6299);
        assert_eq!(MerchantCategoryRange::from_code(3500), Some(MerchantCategoryRange::Lodging));
        let level = MerchantCategoryRange::GovernmentServices.level();
        assert_eq!(level.code, 18999);
        assert_eq!(level.label, "Government Services");
    }

    #[test]
    fn test_head_category_ordinals() {
        assert_eq!(HeadCategory::ALL.len(), 21);
        assert_eq!(HeadCategory::Airlines.code(), 0);
        assert_eq!(HeadCategory::VisaServices.code(), 20);
        for head in HeadCategory::ALL {
            assert_eq!(HeadCategory::from_name(head.name()), Some(*head));
        }
    }

    #[test]
    fn test_transaction_category_letters() {
        assert_eq!(TransactionCategoryCode::CashDisbursementAtm.code(), 'Z');
        assert_eq!(TransactionCategoryCode::Hospital.code(), 'O');
        assert_eq!(
            TransactionCategoryCode::from_name("X_RAILROAD"),
            Some(TransactionCategoryCode::Railroad)
        );
        assert_eq!(TransactionCategoryCode::Restaurant.to_string(), "(F) Restaurant");
    }

    #[test]
    fn test_visa_group_codes() {
        assert_eq!(VisaMerchantCategoryGroup::from_code(0), None);
        assert_eq!(
            VisaMerchantCategoryGroup::from_code(1),
            Some(VisaMerchantCategoryGroup::CommercialTravelAirlines)
        );
        assert_eq!(
            VisaMerchantCategoryGroup::from_code(11),
            Some(VisaMerchantCategoryGroup::Medical)
        );
        assert_eq!(VisaMerchantCategoryGroup::from_code(12), None);
        assert_eq!(VisaMerchantCategoryGroup::Atm.code(), 9);
    }
}
