//! Shared test fixtures

use pathfinder::pathway::{
    Answers, CostPreference, Country, EqfBand, FundingProfile, Sector, StudyMode,
};

/// A fully answered questionnaire: the concrete profile used across the
/// resolver and export tests.
pub fn complete_answers() -> Answers {
    let mut answers = Answers::new();
    answers.set_home_country(Country::Germany);
    answers.set_current_level(EqfBand::Eqf6);
    answers.set_study_mode(StudyMode::FullTimeCampus);
    answers.toggle_destination(Country::France);
    answers.set_funding(FundingProfile::Grants);
    answers.set_cost(CostPreference::Balanced);
    answers.toggle_interest(Sector::Technology);
    answers
}
