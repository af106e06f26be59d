//! Closed option vocabularies for the questionnaire
//!
//! Every selectable value in the questionnaire comes from one of the
//! enumerations below. They are fixed at compile time and shared by the
//! wizard, the CLI flags and the resolver; there is no runtime
//! configuration of the option sets.
//!
//! Each vocabulary provides:
//! - `ALL`: the complete option list in display order
//! - `label()`: the human-readable form shown in the UI and reports
//! - `token()`: the stable kebab-case form used on the command line and
//!   in exports, round-tripped by `FromStr`

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Parse error for any vocabulary token received from the command line.
#[derive(Debug, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct UnknownOption {
    kind: &'static str,
    value: String,
    expected: String,
}

impl UnknownOption {
    fn new(kind: &'static str, value: &str, tokens: &[&'static str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: tokens.join(", "),
        }
    }
}

// ============================================================================
// Countries
// ============================================================================

/// The selectable country set.
///
/// This is both the "where do you live" vocabulary and the destination
/// vocabulary; the catalog carries guidance content for every variant,
/// either as a dedicated entry or via the generic template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Country {
    Austria,
    Belgium,
    Czechia,
    Denmark,
    Finland,
    France,
    Germany,
    Greece,
    Ireland,
    Italy,
    Netherlands,
    Poland,
    Portugal,
    Spain,
    Sweden,
}

impl Country {
    pub const ALL: [Country; 15] = [
        Country::Austria,
        Country::Belgium,
        Country::Czechia,
        Country::Denmark,
        Country::Finland,
        Country::France,
        Country::Germany,
        Country::Greece,
        Country::Ireland,
        Country::Italy,
        Country::Netherlands,
        Country::Poland,
        Country::Portugal,
        Country::Spain,
        Country::Sweden,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Country::Austria => "Austria",
            Country::Belgium => "Belgium",
            Country::Czechia => "Czechia",
            Country::Denmark => "Denmark",
            Country::Finland => "Finland",
            Country::France => "France",
            Country::Germany => "Germany",
            Country::Greece => "Greece",
            Country::Ireland => "Ireland",
            Country::Italy => "Italy",
            Country::Netherlands => "Netherlands",
            Country::Poland => "Poland",
            Country::Portugal => "Portugal",
            Country::Spain => "Spain",
            Country::Sweden => "Sweden",
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Country::Austria => "austria",
            Country::Belgium => "belgium",
            Country::Czechia => "czechia",
            Country::Denmark => "denmark",
            Country::Finland => "finland",
            Country::France => "france",
            Country::Germany => "germany",
            Country::Greece => "greece",
            Country::Ireland => "ireland",
            Country::Italy => "italy",
            Country::Netherlands => "netherlands",
            Country::Poland => "poland",
            Country::Portugal => "portugal",
            Country::Spain => "spain",
            Country::Sweden => "sweden",
        }
    }

    const TOKENS: [&'static str; 15] = [
        "austria",
        "belgium",
        "czechia",
        "denmark",
        "finland",
        "france",
        "germany",
        "greece",
        "ireland",
        "italy",
        "netherlands",
        "poland",
        "portugal",
        "spain",
        "sweden",
    ];
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Country {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .iter()
            .find(|c| c.token() == s)
            .copied()
            .ok_or_else(|| UnknownOption::new("country", s, &Country::TOKENS))
    }
}

// ============================================================================
// Qualification levels (EQF bands)
// ============================================================================

/// Current qualification level, expressed as an EQF band.
///
/// Seven discrete bands from "below EQF level 2" up to EQF level 8.
/// EQF levels 4 and 5 are collected as one band; in practice the guidance
/// for short-cycle tertiary entrants does not differ between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum EqfBand {
    BelowEqf2,
    Eqf2,
    Eqf3,
    Eqf4To5,
    Eqf6,
    Eqf7,
    Eqf8,
}

impl EqfBand {
    pub const ALL: [EqfBand; 7] = [
        EqfBand::BelowEqf2,
        EqfBand::Eqf2,
        EqfBand::Eqf3,
        EqfBand::Eqf4To5,
        EqfBand::Eqf6,
        EqfBand::Eqf7,
        EqfBand::Eqf8,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EqfBand::BelowEqf2 => "Below EQF level 2",
            EqfBand::Eqf2 => "EQF level 2",
            EqfBand::Eqf3 => "EQF level 3",
            EqfBand::Eqf4To5 => "EQF levels 4-5",
            EqfBand::Eqf6 => "EQF level 6",
            EqfBand::Eqf7 => "EQF level 7",
            EqfBand::Eqf8 => "EQF level 8",
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            EqfBand::BelowEqf2 => "below-eqf2",
            EqfBand::Eqf2 => "eqf2",
            EqfBand::Eqf3 => "eqf3",
            EqfBand::Eqf4To5 => "eqf4-5",
            EqfBand::Eqf6 => "eqf6",
            EqfBand::Eqf7 => "eqf7",
            EqfBand::Eqf8 => "eqf8",
        }
    }

    const TOKENS: [&'static str; 7] = [
        "below-eqf2",
        "eqf2",
        "eqf3",
        "eqf4-5",
        "eqf6",
        "eqf7",
        "eqf8",
    ];
}

impl fmt::Display for EqfBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EqfBand {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EqfBand::ALL
            .iter()
            .find(|b| b.token() == s)
            .copied()
            .ok_or_else(|| UnknownOption::new("qualification level", s, &EqfBand::TOKENS))
    }
}

// ============================================================================
// Study modes
// ============================================================================

/// How the user intends to study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StudyMode {
    FullTimeCampus,
    PartTime,
    Online,
    Apprenticeship,
}

impl StudyMode {
    pub const ALL: [StudyMode; 4] = [
        StudyMode::FullTimeCampus,
        StudyMode::PartTime,
        StudyMode::Online,
        StudyMode::Apprenticeship,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StudyMode::FullTimeCampus => "Full-time on campus",
            StudyMode::PartTime => "Part-time alongside other commitments",
            StudyMode::Online => "Online or distance learning",
            StudyMode::Apprenticeship => "Apprenticeship or dual training",
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            StudyMode::FullTimeCampus => "full-time-campus",
            StudyMode::PartTime => "part-time",
            StudyMode::Online => "online",
            StudyMode::Apprenticeship => "apprenticeship",
        }
    }

    const TOKENS: [&'static str; 4] = ["full-time-campus", "part-time", "online", "apprenticeship"];
}

impl fmt::Display for StudyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for StudyMode {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StudyMode::ALL
            .iter()
            .find(|m| m.token() == s)
            .copied()
            .ok_or_else(|| UnknownOption::new("study mode", s, &StudyMode::TOKENS))
    }
}

// ============================================================================
// Funding profiles
// ============================================================================

/// Primary way the user expects to finance their studies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FundingProfile {
    SelfFunding,
    Grants,
    WorkAndStudy,
    AlreadyWorking,
}

impl FundingProfile {
    pub const ALL: [FundingProfile; 4] = [
        FundingProfile::SelfFunding,
        FundingProfile::Grants,
        FundingProfile::WorkAndStudy,
        FundingProfile::AlreadyWorking,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FundingProfile::SelfFunding => "Self-funded or family support",
            FundingProfile::Grants => "Grants and scholarships",
            FundingProfile::WorkAndStudy => "Working while studying",
            FundingProfile::AlreadyWorking => "Already working, employer may contribute",
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            FundingProfile::SelfFunding => "self-funding",
            FundingProfile::Grants => "grants",
            FundingProfile::WorkAndStudy => "work-and-study",
            FundingProfile::AlreadyWorking => "already-working",
        }
    }

    const TOKENS: [&'static str; 4] = ["self-funding", "grants", "work-and-study", "already-working"];
}

impl fmt::Display for FundingProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FundingProfile {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FundingProfile::ALL
            .iter()
            .find(|p| p.token() == s)
            .copied()
            .ok_or_else(|| UnknownOption::new("funding profile", s, &FundingProfile::TOKENS))
    }
}

// ============================================================================
// Support circumstance flags
// ============================================================================

/// Personal circumstance tags that unlock targeted support guidance.
/// An empty selection means "none of these apply".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SupportFlag {
    FirstGeneration,
    LowIncomeHousehold,
    Disability,
    CaringResponsibilities,
    RefugeeBackground,
}

impl SupportFlag {
    pub const ALL: [SupportFlag; 5] = [
        SupportFlag::FirstGeneration,
        SupportFlag::LowIncomeHousehold,
        SupportFlag::Disability,
        SupportFlag::CaringResponsibilities,
        SupportFlag::RefugeeBackground,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SupportFlag::FirstGeneration => "First in my family to study at this level",
            SupportFlag::LowIncomeHousehold => "Low-income household",
            SupportFlag::Disability => "Disability or long-term health condition",
            SupportFlag::CaringResponsibilities => "Caring responsibilities",
            SupportFlag::RefugeeBackground => "Refugee or displaced background",
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            SupportFlag::FirstGeneration => "first-generation",
            SupportFlag::LowIncomeHousehold => "low-income",
            SupportFlag::Disability => "disability",
            SupportFlag::CaringResponsibilities => "caring-responsibilities",
            SupportFlag::RefugeeBackground => "refugee-background",
        }
    }

    const TOKENS: [&'static str; 5] = [
        "first-generation",
        "low-income",
        "disability",
        "caring-responsibilities",
        "refugee-background",
    ];
}

impl fmt::Display for SupportFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SupportFlag {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SupportFlag::ALL
            .iter()
            .find(|t| t.token() == s)
            .copied()
            .ok_or_else(|| UnknownOption::new("support flag", s, &SupportFlag::TOKENS))
    }
}

// ============================================================================
// Accommodation options
// ============================================================================

/// Preferred kinds of student accommodation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AccommodationOption {
    StudentResidence,
    SharedFlat,
    Homestay,
    PrivateStudio,
}

impl AccommodationOption {
    pub const ALL: [AccommodationOption; 4] = [
        AccommodationOption::StudentResidence,
        AccommodationOption::SharedFlat,
        AccommodationOption::Homestay,
        AccommodationOption::PrivateStudio,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AccommodationOption::StudentResidence => "Student residence or halls",
            AccommodationOption::SharedFlat => "Shared flat with other students",
            AccommodationOption::Homestay => "Homestay with a local family",
            AccommodationOption::PrivateStudio => "Private studio or apartment",
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            AccommodationOption::StudentResidence => "student-residence",
            AccommodationOption::SharedFlat => "shared-flat",
            AccommodationOption::Homestay => "homestay",
            AccommodationOption::PrivateStudio => "private-studio",
        }
    }

    const TOKENS: [&'static str; 4] = ["student-residence", "shared-flat", "homestay", "private-studio"];
}

impl fmt::Display for AccommodationOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AccommodationOption {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccommodationOption::ALL
            .iter()
            .find(|o| o.token() == s)
            .copied()
            .ok_or_else(|| UnknownOption::new("accommodation option", s, &AccommodationOption::TOKENS))
    }
}

// ============================================================================
// Cost preferences
// ============================================================================

/// How the user weighs cost against opportunity when choosing a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CostPreference {
    LowerCost,
    Balanced,
    HighOpportunity,
}

impl CostPreference {
    pub const ALL: [CostPreference; 3] = [
        CostPreference::LowerCost,
        CostPreference::Balanced,
        CostPreference::HighOpportunity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CostPreference::LowerCost => "Keep costs as low as possible",
            CostPreference::Balanced => "Balance cost and opportunity",
            CostPreference::HighOpportunity => "Maximise opportunity, cost secondary",
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            CostPreference::LowerCost => "lower-cost",
            CostPreference::Balanced => "balanced",
            CostPreference::HighOpportunity => "high-opportunity",
        }
    }

    const TOKENS: [&'static str; 3] = ["lower-cost", "balanced", "high-opportunity"];
}

impl fmt::Display for CostPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CostPreference {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CostPreference::ALL
            .iter()
            .find(|p| p.token() == s)
            .copied()
            .ok_or_else(|| UnknownOption::new("cost preference", s, &CostPreference::TOKENS))
    }
}

// ============================================================================
// Sector interests
// ============================================================================

/// Career sectors the user can express interest in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Sector {
    Healthcare,
    Education,
    Technology,
    SocialServices,
    Environmental,
    Government,
    Business,
    CreativeArts,
}

impl Sector {
    pub const ALL: [Sector; 8] = [
        Sector::Healthcare,
        Sector::Education,
        Sector::Technology,
        Sector::SocialServices,
        Sector::Environmental,
        Sector::Government,
        Sector::Business,
        Sector::CreativeArts,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Sector::Healthcare => "Healthcare",
            Sector::Education => "Education",
            Sector::Technology => "Technology",
            Sector::SocialServices => "Social Services",
            Sector::Environmental => "Environmental",
            Sector::Government => "Government",
            Sector::Business => "Business",
            Sector::CreativeArts => "Creative Arts",
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Sector::Healthcare => "healthcare",
            Sector::Education => "education",
            Sector::Technology => "technology",
            Sector::SocialServices => "social-services",
            Sector::Environmental => "environmental",
            Sector::Government => "government",
            Sector::Business => "business",
            Sector::CreativeArts => "creative-arts",
        }
    }

    const TOKENS: [&'static str; 8] = [
        "healthcare",
        "education",
        "technology",
        "social-services",
        "environmental",
        "government",
        "business",
        "creative-arts",
    ];
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Sector {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::ALL
            .iter()
            .find(|x| x.token() == s)
            .copied()
            .ok_or_else(|| UnknownOption::new("sector", s, &Sector::TOKENS))
    }
}
