//! Ordered taxonomy rule table.
//!
//! The classifier is a priority-ordered decision table, not a lookup: rules
//! are evaluated top to bottom against a mutable [`Classification`] record,
//! and a later matching rule overwrites whatever an earlier rule assigned to
//! the same field. Group headers assign {domain, mid}; refinement rules
//! assign the subtype from level-2/level-3 categories or case-sensitive
//! keyword search in the POI name. Rule order is load-bearing and must not
//! be reshuffled.

use center_map_poi_models::{
    CategoryLevels, Classification, FunctionDomain, MidFunction, Subtype,
};

/// A single predicate on one POI's category levels, name, or the
/// classification state written by earlier rules.
#[derive(Debug, Clone, Copy)]
pub enum Cond {
    /// Level-1 category equals the given string.
    Level1Is(&'static str),
    /// Level-2 category equals the given string.
    Level2Is(&'static str),
    /// Level-2 category contains any of the given substrings.
    Level2HasAny(&'static [&'static str]),
    /// Level-3 category contains any of the given substrings.
    Level3HasAny(&'static [&'static str]),
    /// Level-3 category contains none of the given substrings.
    Level3LacksAll(&'static [&'static str]),
    /// Name contains any of the given substrings (case-sensitive).
    NameHasAny(&'static [&'static str]),
    /// Name contains none of the given substrings (case-sensitive).
    NameLacksAll(&'static [&'static str]),
    /// Name ends with any of the given suffixes.
    NameEndsWithAny(&'static [&'static str]),
    /// No earlier rule has assigned a subtype yet.
    SubtypeUnset,
    /// An earlier rule assigned the given domain.
    DomainIs(FunctionDomain),
}

impl Cond {
    fn holds(self, levels: &CategoryLevels, name: &str, class: &Classification) -> bool {
        match self {
            Self::Level1Is(value) => levels.level1 == value,
            Self::Level2Is(value) => levels.level2 == value,
            Self::Level2HasAny(subs) => contains_any(&levels.level2, subs),
            Self::Level3HasAny(subs) => contains_any(&levels.level3, subs),
            Self::Level3LacksAll(subs) => !contains_any(&levels.level3, subs),
            Self::NameHasAny(subs) => contains_any(name, subs),
            Self::NameLacksAll(subs) => !contains_any(name, subs),
            Self::NameEndsWithAny(suffixes) => {
                suffixes.iter().any(|suffix| name.ends_with(suffix))
            }
            Self::SubtypeUnset => class.subtype.is_none(),
            Self::DomainIs(domain) => class.domain == Some(domain),
        }
    }
}

/// The field assignment a matching rule performs.
#[derive(Debug, Clone, Copy)]
pub enum Assign {
    /// Assign {domain, mid}, leaving the subtype untouched.
    Group(FunctionDomain, MidFunction),
    /// Assign only the subtype.
    Subtype(Subtype),
    /// Assign all three fields at once.
    Full(FunctionDomain, MidFunction, Subtype),
}

/// One (predicate, assignment) pair. The rule matches when all conditions
/// hold.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Conjunction of conditions.
    pub when: &'static [Cond],
    /// Fields written when the rule matches.
    pub assign: Assign,
}

impl Rule {
    fn matches(&self, levels: &CategoryLevels, name: &str, class: &Classification) -> bool {
        self.when.iter().all(|cond| cond.holds(levels, name, class))
    }

    fn apply(&self, class: &mut Classification) {
        match self.assign {
            Assign::Group(domain, mid) => {
                class.domain = Some(domain);
                class.mid = Some(mid);
            }
            Assign::Subtype(subtype) => class.subtype = Some(subtype),
            Assign::Full(domain, mid, subtype) => {
                class.domain = Some(domain);
                class.mid = Some(mid);
                class.subtype = Some(subtype);
            }
        }
    }
}

// ── Keyword vocabularies ─────────────────────────────────────────────

/// Budget hotel / inn keywords.
const HOTEL_WORDS: &[&str] = &["Hotel", "Inn"];
/// Hostel keywords.
const HOSTEL_WORDS: &[&str] = &["Hostel", "Guest House"];
/// Sports venue keywords.
const SPORTS_WORDS: &[&str] = &["Fitness", "Gym", "Ball", "Swim", "Taekwondo"];
/// Cinema keywords.
const CINEMA_WORDS: &[&str] = &["Cinema", "Film", "Theater"];
/// Tech/industry park keywords (industrial parks are matched separately).
const TECH_PARK_WORDS: &[&str] = &[
    "Base",
    "Software Park",
    "Industry Park",
    "Science Park",
    "Technology Park",
    "E-commerce Park",
    "Logistics Park",
    "Innovation Park",
    "Creative Park",
    "Smart Park",
    "Eco Park",
    "Business Park",
];
/// Housing estate keywords.
const RESIDENCE_WORDS: &[&str] = &[
    "Court",
    "Residence",
    "Mansion",
    "Villa",
    "Apartment",
    "Dormitory",
    "Community",
    "Estate",
    "Homes",
    "Block",
    "Unit",
    "Phase",
    "Village",
    "Manor",
];
/// Office tower keywords.
const OFFICE_WORDS: &[&str] = &["Business", "Commercial", "Tower", "International"];
/// Police keywords.
const POLICE_WORDS: &[&str] = &["Public Security", "Police"];
/// Court keywords.
const COURT_WORDS: &[&str] = &["Judicial", "Court", "Tribunal", "Arbitration"];
/// Government office keywords.
const GOVERNMENT_WORDS: &[&str] = &[
    "Neighborhood Committee",
    "Community Workstation",
    "Service Center",
    "Subdistrict Office",
    "Committee",
    "Office",
    "Bureau",
];
/// Parcel/courier keywords.
const LOGISTICS_WORDS: &[&str] = &[
    "Post",
    "Parcel",
    "Express",
    "Pickup",
    "Locker",
    "Courier",
    "Collection Point",
    "Agency Point",
];
/// Moving/repair/laundry keywords.
const MAINTENANCE_WORDS: &[&str] = &["Moving", "Repair", "Laundry", "Dry Clean"];
/// Personal-care and miscellaneous service keywords.
const PERSONAL_CARE_WORDS: &[&str] = &[
    "Lottery",
    "Travel",
    "Beauty",
    "Hairdress",
    "Nail",
    "Salon",
    "Barber",
    "Photo",
    "Studio",
    "Wellness",
    "Bath",
    "Foot",
    "Massage",
    "Sauna",
    "SPA",
    "Baby",
    "Parent-child",
];
/// Press/broadcast keywords.
const MEDIA_WORDS: &[&str] = &[
    "Media",
    "Press",
    "Film",
    "Broadcast",
    "Television",
    "TV",
    "News",
    "Journal",
    "Magazine",
    "Publishing",
    "Editorial",
];
/// School keywords.
const SCHOOL_WORDS: &[&str] = &[
    "School",
    "College",
    "Academy",
    "Campus",
    "Kindergarten",
    "University",
    "Education Group",
];
/// Training keywords (assigned to the school subtype, as the source does).
const TRAINING_WORDS: &[&str] = &[
    "Training",
    "Tutoring",
    "Coaching",
    "Exam",
    "Driving",
    "Piano",
    "Chess",
    "Calligraphy",
    "Painting",
    "Dance",
    "English",
];
/// Research keywords.
const RESEARCH_WORDS: &[&str] = &["Laboratory", "Research", "Design Institute", "R&D"];
/// Mall keywords.
const MALL_WORDS: &[&str] = &["Mall", "Shopping", "Plaza", "Street"];
/// Supermarket chain keywords.
const SUPERMARKET_WORDS: &[&str] = &[
    "Supermarket",
    "Walmart",
    "Carrefour",
    "Sam's Club",
    "Metro",
    "Vanguard",
    "Watsons",
    "Mannings",
];
/// Fresh produce / wholesale market keywords.
const MARKET_WORDS: &[&str] = &[
    "Fruit",
    "Vegetable",
    "Meat",
    "Poultry",
    "Egg",
    "Grain",
    "Seafood",
    "Aquatic",
    "Wholesale",
];
/// Convenience store keywords.
const CONVENIENCE_WORDS: &[&str] = &[
    "Convenience",
    "Grocery",
    "7-ELEVE",
    "FamilyMart",
    "General Store",
];
/// Specialty market keywords (electronics, furnishing, building materials).
const SPECIALTY_MARKET_WORDS: &[&str] = &[
    "Electric",
    "Mobile",
    "Telecom",
    "Digital",
    "Audio",
    "Air Conditioner",
    "Hardware",
    "Lighting",
    "Wallpaper",
    "Ceramic",
    "Bedding",
    "Building Material",
    "Decoration",
    "Sanitary",
    "Doors",
    "Furniture",
    "Glass",
    "Flower",
    "Aquarium",
];

// ── The rule table ───────────────────────────────────────────────────

/// The ordered taxonomy rule table. Evaluated in sequence, last writer wins
/// per field.
#[allow(clippy::too_many_lines)]
pub const RULES: &[Rule] = &[
    // ── Group 1: enterprises ────────────────────────────
    Rule {
        when: &[Cond::Level1Is("Enterprises")],
        assign: Assign::Group(FunctionDomain::Industrial, MidFunction::IndustrialProduction),
    },
    Rule {
        when: &[Cond::Level2HasAny(&[
            "Company",
            "Incorporated Company",
            "Well-known Enterprises",
        ])],
        assign: Assign::Subtype(Subtype::CompanyEnterprise),
    },
    Rule {
        when: &[Cond::Level2Is("Factory")],
        assign: Assign::Subtype(Subtype::Factory),
    },
    // ── Group 2: accommodation ──────────────────────────
    Rule {
        when: &[Cond::Level1Is("Accommodation Service")],
        assign: Assign::Group(FunctionDomain::Commercial, MidFunction::Lodging),
    },
    Rule {
        when: &[
            Cond::Level2Is("Accommodation Service Related"),
            Cond::NameHasAny(HOTEL_WORDS),
        ],
        assign: Assign::Subtype(Subtype::BudgetHotel),
    },
    Rule {
        when: &[
            Cond::Level2Is("Hotel"),
            Cond::Level3HasAny(&["Star"]),
        ],
        assign: Assign::Subtype(Subtype::StarHotel),
    },
    Rule {
        when: &[
            Cond::Level2Is("Hotel"),
            Cond::Level3LacksAll(&["Star"]),
        ],
        assign: Assign::Subtype(Subtype::BudgetHotel),
    },
    Rule {
        when: &[Cond::Level2Is("Hostel")],
        assign: Assign::Subtype(Subtype::Hostel),
    },
    Rule {
        when: &[
            Cond::Level1Is("Accommodation Service"),
            Cond::NameHasAny(HOSTEL_WORDS),
        ],
        assign: Assign::Subtype(Subtype::Hostel),
    },
    Rule {
        when: &[
            Cond::Level1Is("Accommodation Service"),
            Cond::SubtypeUnset,
        ],
        assign: Assign::Subtype(Subtype::Hostel),
    },
    // ── Group 3: sports & recreation ────────────────────
    Rule {
        when: &[Cond::Level1Is("Sports & Recreation")],
        assign: Assign::Group(FunctionDomain::Commercial, MidFunction::Leisure),
    },
    Rule {
        when: &[
            Cond::Level2Is("Sports & Recreation Places"),
            Cond::NameHasAny(SPORTS_WORDS),
        ],
        assign: Assign::Subtype(Subtype::SportsVenue),
    },
    Rule {
        when: &[
            Cond::Level2Is("Sports & Recreation Places"),
            Cond::NameHasAny(CINEMA_WORDS),
        ],
        assign: Assign::Subtype(Subtype::Cinema),
    },
    Rule {
        when: &[
            Cond::Level2Is("Sports & Recreation Places"),
            Cond::SubtypeUnset,
        ],
        assign: Assign::Subtype(Subtype::EntertainmentVenue),
    },
    Rule {
        when: &[Cond::Level2HasAny(&["Sports Stadium", "Golf"])],
        assign: Assign::Subtype(Subtype::SportsVenue),
    },
    Rule {
        when: &[Cond::Level2Is("Theatre & Cinema")],
        assign: Assign::Subtype(Subtype::Cinema),
    },
    Rule {
        when: &[Cond::Level2Is("Entertainment Place")],
        assign: Assign::Subtype(Subtype::EntertainmentVenue),
    },
    // ── Group 4: medical ────────────────────────────────
    Rule {
        when: &[Cond::Level1Is("Medical Service")],
        assign: Assign::Group(FunctionDomain::PublicService, MidFunction::Healthcare),
    },
    Rule {
        when: &[Cond::Level2HasAny(&["General Hospital", "Emergency Center"])],
        assign: Assign::Subtype(Subtype::Hospital),
    },
    Rule {
        when: &[
            Cond::Level2Is("Specialized Hospital"),
            Cond::Level3LacksAll(&["Clinic"]),
        ],
        assign: Assign::Subtype(Subtype::Hospital),
    },
    Rule {
        when: &[
            Cond::Level2Is("Specialized Hospital"),
            Cond::Level3HasAny(&["Clinic"]),
        ],
        assign: Assign::Subtype(Subtype::Clinic),
    },
    Rule {
        when: &[Cond::Level2Is("Clinic")],
        assign: Assign::Subtype(Subtype::Clinic),
    },
    Rule {
        when: &[Cond::Level2Is("Disease Prevention Institution")],
        assign: Assign::Subtype(Subtype::DiseasePreventionCenter),
    },
    Rule {
        when: &[
            Cond::Level2Is("Medical Service Place"),
            Cond::NameHasAny(&["Hospital"]),
        ],
        assign: Assign::Subtype(Subtype::Hospital),
    },
    Rule {
        when: &[
            Cond::Level2Is("Medical Service Place"),
            Cond::NameHasAny(&["Checkup", "Examination"]),
        ],
        assign: Assign::Subtype(Subtype::HealthCheckupCenter),
    },
    Rule {
        when: &[
            Cond::Level2Is("Medical Service Place"),
            Cond::NameHasAny(&["Community"]),
        ],
        assign: Assign::Subtype(Subtype::CommunityHealthStation),
    },
    Rule {
        when: &[
            Cond::Level2Is("Medical Service Place"),
            Cond::NameHasAny(&["Prevention"]),
        ],
        assign: Assign::Subtype(Subtype::DiseasePreventionCenter),
    },
    Rule {
        when: &[
            Cond::Level2Is("Medical Service Place"),
            Cond::NameHasAny(&["Clinic"]),
        ],
        assign: Assign::Subtype(Subtype::Clinic),
    },
    Rule {
        when: &[
            Cond::Level2Is("Medical Service Place"),
            Cond::NameHasAny(&["Pharmacy", "Drugstore"]),
        ],
        assign: Assign::Subtype(Subtype::Pharmacy),
    },
    Rule {
        when: &[
            Cond::Level2Is("Medical Service Place"),
            Cond::NameHasAny(&["Pet", "Animal"]),
        ],
        assign: Assign::Subtype(Subtype::AnimalHospital),
    },
    Rule {
        when: &[Cond::Level2Is("Medicine Sale Store")],
        assign: Assign::Subtype(Subtype::Pharmacy),
    },
    Rule {
        when: &[Cond::Level2Is("Veterinary Place")],
        assign: Assign::Subtype(Subtype::AnimalHospital),
    },
    Rule {
        when: &[Cond::Level1Is("Medical Service"), Cond::SubtypeUnset],
        assign: Assign::Subtype(Subtype::Clinic),
    },
    // ── Group 5: commercial house / parks ───────────────
    Rule {
        when: &[Cond::Level2Is("Industrial Park")],
        assign: Assign::Group(FunctionDomain::Industrial, MidFunction::IndustrialProduction),
    },
    Rule {
        when: &[
            Cond::DomainIs(FunctionDomain::Industrial),
            Cond::NameHasAny(&["Industrial"]),
        ],
        assign: Assign::Subtype(Subtype::IndustrialPark),
    },
    Rule {
        when: &[
            Cond::DomainIs(FunctionDomain::Industrial),
            Cond::NameLacksAll(&["Industrial"]),
        ],
        assign: Assign::Subtype(Subtype::TechPark),
    },
    Rule {
        when: &[Cond::Level2Is("Residential Area")],
        assign: Assign::Full(
            FunctionDomain::Residential,
            MidFunction::Residential,
            Subtype::ResidentialQuarter,
        ),
    },
    Rule {
        when: &[Cond::Level2Is("Building")],
        assign: Assign::Full(
            FunctionDomain::Industrial,
            MidFunction::IndustrialProduction,
            Subtype::BusinessOffice,
        ),
    },
    Rule {
        when: &[
            Cond::Level2Is("Commercial House Related"),
            Cond::NameHasAny(TECH_PARK_WORDS),
        ],
        assign: Assign::Full(
            FunctionDomain::Industrial,
            MidFunction::IndustrialProduction,
            Subtype::TechPark,
        ),
    },
    Rule {
        when: &[
            Cond::Level2Is("Commercial House Related"),
            Cond::NameHasAny(&["Industrial"]),
        ],
        assign: Assign::Full(
            FunctionDomain::Industrial,
            MidFunction::IndustrialProduction,
            Subtype::IndustrialPark,
        ),
    },
    Rule {
        when: &[
            Cond::Level2Is("Commercial House Related"),
            Cond::NameHasAny(RESIDENCE_WORDS),
        ],
        assign: Assign::Full(
            FunctionDomain::Residential,
            MidFunction::Residential,
            Subtype::ResidentialQuarter,
        ),
    },
    Rule {
        when: &[
            Cond::Level2Is("Commercial House Related"),
            Cond::NameHasAny(&["Garden"]),
            Cond::SubtypeUnset,
        ],
        assign: Assign::Full(
            FunctionDomain::Residential,
            MidFunction::Residential,
            Subtype::ResidentialQuarter,
        ),
    },
    Rule {
        when: &[
            Cond::Level2Is("Commercial House Related"),
            Cond::NameHasAny(OFFICE_WORDS),
        ],
        assign: Assign::Full(
            FunctionDomain::Industrial,
            MidFunction::IndustrialProduction,
            Subtype::BusinessOffice,
        ),
    },
    // ── Group 6: government ─────────────────────────────
    Rule {
        when: &[Cond::Level1Is("Governmental Organization & Social Group")],
        assign: Assign::Group(FunctionDomain::PublicService, MidFunction::Administration),
    },
    Rule {
        when: &[Cond::Level2Is("Governmental Organization")],
        assign: Assign::Subtype(Subtype::GovernmentOffice),
    },
    Rule {
        when: &[
            Cond::Level2Is("Public Security & Judicial Institution"),
            Cond::Level3HasAny(POLICE_WORDS),
        ],
        assign: Assign::Subtype(Subtype::PublicSecurity),
    },
    Rule {
        when: &[
            Cond::Level2Is("Public Security & Judicial Institution"),
            Cond::Level3HasAny(&["Procuratorate"]),
        ],
        assign: Assign::Subtype(Subtype::Procuratorate),
    },
    Rule {
        when: &[
            Cond::Level2Is("Public Security & Judicial Institution"),
            Cond::Level3HasAny(&["Court"]),
        ],
        assign: Assign::Subtype(Subtype::Court),
    },
    Rule {
        when: &[
            Cond::Level2Is("Public Security & Judicial Institution"),
            Cond::Level3HasAny(&["Judicial Organ"]),
            Cond::NameHasAny(POLICE_WORDS),
        ],
        assign: Assign::Subtype(Subtype::PublicSecurity),
    },
    Rule {
        when: &[
            Cond::Level2Is("Public Security & Judicial Institution"),
            Cond::Level3HasAny(&["Judicial Organ"]),
            Cond::NameHasAny(&["Procurator"]),
        ],
        assign: Assign::Subtype(Subtype::Procuratorate),
    },
    Rule {
        when: &[
            Cond::Level2Is("Public Security & Judicial Institution"),
            Cond::Level3HasAny(&["Judicial Organ"]),
            Cond::NameHasAny(COURT_WORDS),
        ],
        assign: Assign::Subtype(Subtype::Court),
    },
    Rule {
        when: &[Cond::Level2Is("Industrial & Commercial Tax Institution")],
        assign: Assign::Subtype(Subtype::TaxOffice),
    },
    Rule {
        when: &[
            Cond::Level2Is("Governmental & Social Group Related"),
            Cond::NameHasAny(GOVERNMENT_WORDS),
        ],
        assign: Assign::Subtype(Subtype::GovernmentOffice),
    },
    Rule {
        when: &[
            Cond::Level2Is("Governmental & Social Group Related"),
            Cond::NameHasAny(POLICE_WORDS),
        ],
        assign: Assign::Subtype(Subtype::PublicSecurity),
    },
    Rule {
        when: &[
            Cond::Level2Is("Governmental & Social Group Related"),
            Cond::NameHasAny(&["Procurator"]),
        ],
        assign: Assign::Subtype(Subtype::Procuratorate),
    },
    Rule {
        when: &[
            Cond::Level2Is("Governmental & Social Group Related"),
            Cond::NameHasAny(COURT_WORDS),
        ],
        assign: Assign::Subtype(Subtype::Court),
    },
    Rule {
        when: &[
            Cond::Level2Is("Governmental & Social Group Related"),
            Cond::NameHasAny(&["Industry & Commerce", "Tax"]),
        ],
        assign: Assign::Subtype(Subtype::TaxOffice),
    },
    // ── Group 7: daily life services ────────────────────
    Rule {
        when: &[Cond::Level1Is("Daily Life Service")],
        assign: Assign::Group(FunctionDomain::Commercial, MidFunction::LifeService),
    },
    Rule {
        when: &[Cond::Level2HasAny(&["Post Office", "Logistics & Express"])],
        assign: Assign::Subtype(Subtype::LogisticsService),
    },
    Rule {
        when: &[Cond::Level2HasAny(&[
            "Moving Company",
            "Repair Station",
            "Laundry",
        ])],
        assign: Assign::Subtype(Subtype::HomeMaintenance),
    },
    Rule {
        when: &[Cond::Level2HasAny(&[
            "Lottery",
            "Travel Agency",
            "Beauty & Hairdressing",
            "Photography",
            "Bath & Massage",
            "Baby Service",
        ])],
        assign: Assign::Subtype(Subtype::OtherLifeService),
    },
    Rule {
        when: &[
            Cond::Level2Is("Daily Life Service Place"),
            Cond::NameHasAny(LOGISTICS_WORDS),
        ],
        assign: Assign::Subtype(Subtype::LogisticsService),
    },
    Rule {
        when: &[
            Cond::Level2Is("Daily Life Service Place"),
            Cond::NameHasAny(MAINTENANCE_WORDS),
            Cond::NameLacksAll(&["Renovation"]),
        ],
        assign: Assign::Subtype(Subtype::HomeMaintenance),
    },
    Rule {
        when: &[
            Cond::Level2Is("Daily Life Service Place"),
            Cond::NameHasAny(PERSONAL_CARE_WORDS),
        ],
        assign: Assign::Subtype(Subtype::OtherLifeService),
    },
    // ── Group 8: science, culture & education ───────────
    Rule {
        when: &[Cond::Level1Is("Science/Culture & Education Service")],
        assign: Assign::Group(FunctionDomain::PublicService, MidFunction::EducationCulture),
    },
    Rule {
        when: &[Cond::Level2Is("Media Organization")],
        assign: Assign::Subtype(Subtype::NewsMedia),
    },
    Rule {
        when: &[Cond::Level2Is("Museum")],
        assign: Assign::Subtype(Subtype::Museum),
    },
    Rule {
        when: &[Cond::Level2Is("Library")],
        assign: Assign::Subtype(Subtype::Library),
    },
    Rule {
        when: &[Cond::Level2Is("School")],
        assign: Assign::Subtype(Subtype::School),
    },
    Rule {
        when: &[Cond::Level2Is("Training Institution")],
        assign: Assign::Subtype(Subtype::TrainingCenter),
    },
    Rule {
        when: &[Cond::Level2Is("Research Institution")],
        assign: Assign::Subtype(Subtype::ResearchInstitute),
    },
    Rule {
        when: &[
            Cond::Level2Is("Science & Education Place"),
            Cond::NameHasAny(MEDIA_WORDS),
        ],
        assign: Assign::Subtype(Subtype::NewsMedia),
    },
    Rule {
        when: &[
            Cond::Level2Is("Science & Education Place"),
            Cond::NameEndsWithAny(&["Daily", "Post"]),
        ],
        assign: Assign::Subtype(Subtype::NewsMedia),
    },
    Rule {
        when: &[
            Cond::Level2Is("Science & Education Place"),
            Cond::NameHasAny(&["Museum"]),
        ],
        assign: Assign::Subtype(Subtype::Museum),
    },
    Rule {
        when: &[
            Cond::Level2Is("Science & Education Place"),
            Cond::NameHasAny(&["Library"]),
        ],
        assign: Assign::Subtype(Subtype::Library),
    },
    Rule {
        when: &[
            Cond::Level2Is("Science & Education Place"),
            Cond::NameHasAny(SCHOOL_WORDS),
        ],
        assign: Assign::Subtype(Subtype::School),
    },
    Rule {
        when: &[
            Cond::Level2Is("Science & Education Place"),
            Cond::NameHasAny(TRAINING_WORDS),
        ],
        assign: Assign::Subtype(Subtype::School),
    },
    Rule {
        when: &[
            Cond::Level2Is("Science & Education Place"),
            Cond::SubtypeUnset,
            Cond::NameHasAny(&["Education"]),
        ],
        assign: Assign::Subtype(Subtype::School),
    },
    Rule {
        when: &[
            Cond::Level2Is("Science & Education Place"),
            Cond::NameHasAny(RESEARCH_WORDS),
        ],
        assign: Assign::Subtype(Subtype::ResearchInstitute),
    },
    // ── Group 9: shopping ───────────────────────────────
    Rule {
        when: &[Cond::Level1Is("Shopping Service")],
        assign: Assign::Group(FunctionDomain::Commercial, MidFunction::Retail),
    },
    Rule {
        when: &[Cond::Level2HasAny(&["Shopping Plaza", "Commercial Street"])],
        assign: Assign::Subtype(Subtype::Mall),
    },
    Rule {
        when: &[Cond::Level2Is("Supermarket")],
        assign: Assign::Subtype(Subtype::Supermarket),
    },
    Rule {
        when: &[Cond::Level2Is("Comprehensive Market")],
        assign: Assign::Subtype(Subtype::GeneralMarket),
    },
    Rule {
        when: &[Cond::Level2HasAny(&[
            "Electronics Store",
            "Home Building Materials Market",
            "Flowers & Pets Market",
        ])],
        assign: Assign::Subtype(Subtype::SpecialtyMarket),
    },
    Rule {
        when: &[Cond::Level2Is("Convenience Store")],
        assign: Assign::Subtype(Subtype::ConvenienceStore),
    },
    Rule {
        when: &[
            Cond::Level2Is("Shopping Related Places"),
            Cond::NameHasAny(MALL_WORDS),
            Cond::NameLacksAll(&["("]),
        ],
        assign: Assign::Subtype(Subtype::Mall),
    },
    Rule {
        when: &[
            Cond::Level2Is("Shopping Related Places"),
            Cond::NameHasAny(SUPERMARKET_WORDS),
        ],
        assign: Assign::Subtype(Subtype::Supermarket),
    },
    Rule {
        when: &[
            Cond::Level2Is("Shopping Related Places"),
            Cond::NameHasAny(MARKET_WORDS),
            Cond::SubtypeUnset,
        ],
        assign: Assign::Subtype(Subtype::GeneralMarket),
    },
    Rule {
        when: &[
            Cond::Level2Is("Shopping Related Places"),
            Cond::NameHasAny(CONVENIENCE_WORDS),
        ],
        assign: Assign::Subtype(Subtype::ConvenienceStore),
    },
    Rule {
        when: &[
            Cond::Level2Is("Shopping Related Places"),
            Cond::NameHasAny(SPECIALTY_MARKET_WORDS),
        ],
        assign: Assign::Subtype(Subtype::SpecialtyMarket),
    },
    Rule {
        when: &[Cond::Level2HasAny(&[
            "Clothing Store",
            "Personal Care Store",
            "Sports Store",
            "Culture Store",
            "Franchise Store",
            "Specialty Store",
        ])],
        assign: Assign::Subtype(Subtype::SpecialtyStore),
    },
    // ── Group 10: finance ───────────────────────────────
    Rule {
        when: &[Cond::Level2HasAny(&["Bank"])],
        assign: Assign::Full(
            FunctionDomain::Commercial,
            MidFunction::LifeService,
            Subtype::FinancialService,
        ),
    },
    Rule {
        when: &[Cond::Level2HasAny(&["Securities Company", "Insurance Company"])],
        assign: Assign::Full(
            FunctionDomain::Industrial,
            MidFunction::IndustrialProduction,
            Subtype::BusinessOffice,
        ),
    },
    Rule {
        when: &[
            Cond::Level2Is("Financial & Insurance Institution"),
            Cond::NameHasAny(&["Bank"]),
        ],
        assign: Assign::Full(
            FunctionDomain::Commercial,
            MidFunction::LifeService,
            Subtype::FinancialService,
        ),
    },
    Rule {
        when: &[
            Cond::Level2Is("Financial & Insurance Institution"),
            Cond::NameHasAny(&["Securities", "Insurance", "Life"]),
        ],
        assign: Assign::Full(
            FunctionDomain::Industrial,
            MidFunction::IndustrialProduction,
            Subtype::BusinessOffice,
        ),
    },
    // ── Group 11: food & beverages ──────────────────────
    Rule {
        when: &[Cond::Level1Is("Food & Beverages")],
        assign: Assign::Group(FunctionDomain::Commercial, MidFunction::FoodBeverage),
    },
    Rule {
        when: &[Cond::Level2Is("Chinese Food Restaurant")],
        assign: Assign::Subtype(Subtype::ChineseRestaurant),
    },
    Rule {
        when: &[Cond::Level2Is("Foreign Food Restaurant")],
        assign: Assign::Subtype(Subtype::ForeignRestaurant),
    },
    Rule {
        when: &[Cond::Level2Is("Fast Food Restaurant")],
        assign: Assign::Subtype(Subtype::FastFood),
    },
    Rule {
        when: &[Cond::Level2HasAny(&[
            "Coffee House",
            "Cold Drinks Store",
            "Dessert House",
            "Bakery",
            "Tea House",
        ])],
        assign: Assign::Subtype(Subtype::DessertBeverage),
    },
    // ── Group 12: parks ─────────────────────────────────
    Rule {
        when: &[
            Cond::Level1Is("Tourist Attraction"),
            Cond::Level2Is("Park & Square"),
        ],
        assign: Assign::Full(
            FunctionDomain::PublicService,
            MidFunction::Recreation,
            Subtype::Park,
        ),
    },
];

/// Runs the full rule table against one POI's category levels and name.
///
/// Starts from an empty classification; every matching rule applies its
/// assignment in order, so the final value of each field is the last
/// matching rule's output.
#[must_use]
pub fn classify(levels: &CategoryLevels, name: &str) -> Classification {
    let mut class = Classification::default();
    for rule in RULES {
        if rule.matches(levels, name, &class) {
            rule.apply(&mut class);
        }
    }
    class
}

/// Checks if `haystack` contains any of the given `needles`.
fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
