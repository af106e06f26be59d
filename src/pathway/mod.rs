//! Pathway module - questionnaire domain model and recommendation engine

pub mod answers;
pub mod catalog;
pub mod levels;
pub mod resolver;
pub mod vocab;

pub use answers::{Answers, Step};
pub use catalog::CountryPathwayConfig;
pub use resolver::{resolve, CountryBlock, Guidance, RecommendationView};
pub use vocab::{
    AccommodationOption, CostPreference, Country, EqfBand, FundingProfile, Sector, StudyMode,
    SupportFlag, UnknownOption,
};
