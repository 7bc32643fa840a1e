#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! POI record types and the canonical three-tier functional taxonomy.
//!
//! This crate defines the normalized {domain, mid-function, subtype}
//! classification that every vendor POI category string is collapsed into,
//! plus the raw and classified POI record types passed between pipeline
//! stages.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A raw POI record as supplied by the vendor export.
///
/// Field names follow the vendor CSV columns (`type`, `wgslng`, `wgslat`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPoi {
    /// Stable vendor identifier.
    pub id: String,
    /// Display name. Records without one are discarded during normalization.
    pub name: String,
    /// Street address, used together with the name as the dedup key.
    #[serde(default)]
    pub address: String,
    /// Hierarchical vendor category string, up to three levels deep.
    #[serde(rename = "type")]
    pub category: String,
    /// WGS84 longitude.
    #[serde(rename = "wgslng")]
    pub longitude: f64,
    /// WGS84 latitude.
    #[serde(rename = "wgslat")]
    pub latitude: f64,
}

/// The three hierarchy levels split out of a vendor category string.
///
/// A missing deeper level is an empty string, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryLevels {
    /// Top-level vendor category.
    pub level1: String,
    /// Second-level vendor category.
    pub level2: String,
    /// Third-level vendor category.
    pub level3: String,
}

impl CategoryLevels {
    /// Splits a vendor category string on its first two separators
    /// (`;` or `|`).
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut parts = raw.splitn(3, [';', '|']);
        Self {
            level1: parts.next().unwrap_or_default().trim().to_string(),
            level2: parts.next().unwrap_or_default().trim().to_string(),
            level3: parts.next().unwrap_or_default().trim().to_string(),
        }
    }
}

/// Top-level functional domains.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FunctionDomain {
    /// Industrial and production activity
    Industrial,
    /// Commercial and consumer services
    Commercial,
    /// Public administration and services
    PublicService,
    /// Residential land use
    Residential,
}

/// Mid-level functions — the policy-relevant classification used for
/// location-quotient analysis.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MidFunction {
    /// Manufacturing, company offices, and industrial parks
    IndustrialProduction,
    /// Hotels, hostels, and other accommodation
    Lodging,
    /// Sports, cinema, and entertainment venues
    Leisure,
    /// Shops, markets, and malls
    Retail,
    /// Restaurants and beverage shops
    FoodBeverage,
    /// Daily-life services (logistics, maintenance, personal care, banking)
    LifeService,
    /// Government offices, courts, and enforcement
    Administration,
    /// Hospitals, clinics, and pharmacies
    Healthcare,
    /// Schools, media, museums, and research
    EducationCulture,
    /// Parks and public open space
    Recreation,
    /// Housing estates and dormitories
    Residential,
}

impl MidFunction {
    /// Returns the parent [`FunctionDomain`] for this mid-level function.
    #[must_use]
    pub const fn domain(self) -> FunctionDomain {
        match self {
            Self::IndustrialProduction => FunctionDomain::Industrial,
            Self::Lodging
            | Self::Leisure
            | Self::Retail
            | Self::FoodBeverage
            | Self::LifeService => FunctionDomain::Commercial,
            Self::Administration
            | Self::Healthcare
            | Self::EducationCulture
            | Self::Recreation => FunctionDomain::PublicService,
            Self::Residential => FunctionDomain::Residential,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::IndustrialProduction,
            Self::Lodging,
            Self::Leisure,
            Self::Retail,
            Self::FoodBeverage,
            Self::LifeService,
            Self::Administration,
            Self::Healthcare,
            Self::EducationCulture,
            Self::Recreation,
            Self::Residential,
        ]
    }
}

/// Specific subtypes within each [`MidFunction`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Subtype {
    // ── Industrial/production ───────────────────────────
    /// Registered company or enterprise office
    CompanyEnterprise,
    /// Manufacturing plant
    Factory,
    /// Named industrial park
    IndustrialPark,
    /// Technology, software, or creative park
    TechPark,
    /// Office tower or business/finance headquarters
    BusinessOffice,

    // ── Lodging ─────────────────────────────────────────
    /// Rated (starred) hotel
    StarHotel,
    /// Budget hotel or inn
    BudgetHotel,
    /// Hostel or guest house
    Hostel,

    // ── Leisure ─────────────────────────────────────────
    /// Gym, stadium, or other sports venue
    SportsVenue,
    /// Cinema or theater
    Cinema,
    /// KTV, arcade, or other entertainment venue
    EntertainmentVenue,

    // ── Healthcare ──────────────────────────────────────
    /// General or specialist hospital
    Hospital,
    /// Outpatient clinic
    Clinic,
    /// Disease prevention and control center
    DiseasePreventionCenter,
    /// Physical examination center
    HealthCheckupCenter,
    /// Community health station
    CommunityHealthStation,
    /// Pharmacy or drugstore
    Pharmacy,
    /// Veterinary clinic
    AnimalHospital,

    // ── Administration ──────────────────────────────────
    /// Government office or neighborhood committee
    GovernmentOffice,
    /// Police station or public security bureau
    PublicSecurity,
    /// Procuratorate
    Procuratorate,
    /// Court or arbitration body
    Court,
    /// Industry/commerce and taxation office
    TaxOffice,

    // ── Life services ───────────────────────────────────
    /// Post, courier, and parcel services
    LogisticsService,
    /// Moving, repair, and laundry services
    HomeMaintenance,
    /// Personal care and miscellaneous daily services
    OtherLifeService,
    /// Retail banking outlet
    FinancialService,

    // ── Education/culture ───────────────────────────────
    /// Press, broadcast, or publishing organization
    NewsMedia,
    /// Museum
    Museum,
    /// Library
    Library,
    /// School, kindergarten, or training provider
    School,
    /// Dedicated training institution
    TrainingCenter,
    /// Research institute or design academy
    ResearchInstitute,

    // ── Retail ──────────────────────────────────────────
    /// Shopping mall or commercial street
    Mall,
    /// Supermarket
    Supermarket,
    /// General/wet market
    GeneralMarket,
    /// Specialty market (electronics, furnishing, flowers)
    SpecialtyMarket,
    /// Convenience store
    ConvenienceStore,
    /// Brand or single-line specialty store
    SpecialtyStore,

    // ── Food & beverage ─────────────────────────────────
    /// Chinese restaurant
    ChineseRestaurant,
    /// Foreign-cuisine restaurant
    ForeignRestaurant,
    /// Fast-food outlet
    FastFood,
    /// Cafe, tea house, or dessert shop
    DessertBeverage,

    // ── Residential ─────────────────────────────────────
    /// Housing estate or dormitory compound
    ResidentialQuarter,

    // ── Recreation ──────────────────────────────────────
    /// Park or public square
    Park,
}

impl Subtype {
    /// Returns the parent [`MidFunction`] for this subtype.
    #[must_use]
    pub const fn mid_function(self) -> MidFunction {
        match self {
            Self::CompanyEnterprise
            | Self::Factory
            | Self::IndustrialPark
            | Self::TechPark
            | Self::BusinessOffice => MidFunction::IndustrialProduction,

            Self::StarHotel | Self::BudgetHotel | Self::Hostel => MidFunction::Lodging,

            Self::SportsVenue | Self::Cinema | Self::EntertainmentVenue => MidFunction::Leisure,

            Self::Hospital
            | Self::Clinic
            | Self::DiseasePreventionCenter
            | Self::HealthCheckupCenter
            | Self::CommunityHealthStation
            | Self::Pharmacy
            | Self::AnimalHospital => MidFunction::Healthcare,

            Self::GovernmentOffice
            | Self::PublicSecurity
            | Self::Procuratorate
            | Self::Court
            | Self::TaxOffice => MidFunction::Administration,

            Self::LogisticsService
            | Self::HomeMaintenance
            | Self::OtherLifeService
            | Self::FinancialService => MidFunction::LifeService,

            Self::NewsMedia
            | Self::Museum
            | Self::Library
            | Self::School
            | Self::TrainingCenter
            | Self::ResearchInstitute => MidFunction::EducationCulture,

            Self::Mall
            | Self::Supermarket
            | Self::GeneralMarket
            | Self::SpecialtyMarket
            | Self::ConvenienceStore
            | Self::SpecialtyStore => MidFunction::Retail,

            Self::ChineseRestaurant
            | Self::ForeignRestaurant
            | Self::FastFood
            | Self::DessertBeverage => MidFunction::FoodBeverage,

            Self::ResidentialQuarter => MidFunction::Residential,

            Self::Park => MidFunction::Recreation,
        }
    }
}

/// The mutable classification record the taxonomy rule engine writes into.
///
/// Rules assign the three fields independently; a later matching rule
/// overwrites an earlier one's output for the same field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// Assigned top-level domain, if any rule has set it.
    pub domain: Option<FunctionDomain>,
    /// Assigned mid-level function, if any rule has set it.
    pub mid: Option<MidFunction>,
    /// Assigned subtype. POIs whose subtype is never set are dropped.
    pub subtype: Option<Subtype>,
}

/// A normalized POI in the planar coordinate system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poi {
    /// Stable vendor identifier.
    pub id: String,
    /// Display name (non-empty after normalization).
    pub name: String,
    /// Street address.
    pub address: String,
    /// Split vendor category levels.
    pub levels: CategoryLevels,
    /// Rule-engine classification. Surviving POIs always have a subtype.
    pub class: Classification,
    /// Projected easting in meters.
    pub x: f64,
    /// Projected northing in meters.
    pub y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_three_levels() {
        let levels = CategoryLevels::parse("Shopping Service;Supermarket;Supermarket");
        assert_eq!(levels.level1, "Shopping Service");
        assert_eq!(levels.level2, "Supermarket");
        assert_eq!(levels.level3, "Supermarket");
    }

    #[test]
    fn category_parse_missing_levels() {
        let levels = CategoryLevels::parse("Enterprises");
        assert_eq!(levels.level1, "Enterprises");
        assert_eq!(levels.level2, "");
        assert_eq!(levels.level3, "");

        let levels = CategoryLevels::parse("Enterprises|Factory");
        assert_eq!(levels.level2, "Factory");
        assert_eq!(levels.level3, "");
    }

    #[test]
    fn category_parse_extra_separators_stay_in_level3() {
        let levels = CategoryLevels::parse("A;B;C;D");
        assert_eq!(levels.level3, "C;D");
    }

    #[test]
    fn mid_function_domain_consistency() {
        for mid in MidFunction::all() {
            // Every mid function resolves to a domain without panicking and
            // every subtype agrees with its mid function's domain.
            let _ = mid.domain();
        }
    }

    #[test]
    fn subtype_mid_function_covers_policy_list() {
        let mids: Vec<MidFunction> = [
            Subtype::CompanyEnterprise,
            Subtype::StarHotel,
            Subtype::SportsVenue,
            Subtype::Hospital,
            Subtype::GovernmentOffice,
            Subtype::LogisticsService,
            Subtype::NewsMedia,
            Subtype::Mall,
            Subtype::ChineseRestaurant,
            Subtype::ResidentialQuarter,
            Subtype::Park,
        ]
        .iter()
        .map(|s| s.mid_function())
        .collect();

        for mid in MidFunction::all() {
            assert!(mids.contains(mid), "{mid:?} has no subtype exemplar");
        }
    }
}
