//! Questionnaire step sequence and accumulated answers
//!
//! The step sequence is total and linear: eight states with only adjacent
//! forward/backward transitions. `intro` is initial, `results` is terminal,
//! and the six steps in between are the "active" question steps that count
//! towards the progress percentage.

use std::collections::BTreeSet;

use serde::Serialize;

use super::vocab::{
    AccommodationOption, CostPreference, Country, EqfBand, FundingProfile, Sector, StudyMode,
    SupportFlag,
};

/// One screen of the questionnaire, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Intro,
    CurrentCountry,
    CurrentLevel,
    StudyMode,
    Mobility,
    Finance,
    Interests,
    Results,
}

impl Step {
    /// The complete step order. No branching, no skips.
    pub const SEQUENCE: [Step; 8] = [
        Step::Intro,
        Step::CurrentCountry,
        Step::CurrentLevel,
        Step::StudyMode,
        Step::Mobility,
        Step::Finance,
        Step::Interests,
        Step::Results,
    ];

    /// Number of active question steps (everything except intro/results).
    pub const ACTIVE_COUNT: usize = 6;

    pub fn title(&self) -> &'static str {
        match self {
            Step::Intro => "Welcome",
            Step::CurrentCountry => "Home Country",
            Step::CurrentLevel => "Qualification Level",
            Step::StudyMode => "Study Mode",
            Step::Mobility => "Destinations & Living",
            Step::Finance => "Funding & Support",
            Step::Interests => "Sector Interests",
            Step::Results => "Your Profile",
        }
    }

    /// Position of this step in the fixed sequence.
    pub fn index(&self) -> usize {
        Step::SEQUENCE.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Zero-based position among the active question steps, if any.
    pub fn active_index(&self) -> Option<usize> {
        match self {
            Step::Intro | Step::Results => None,
            other => Some(other.index() - 1),
        }
    }
}

/// Answers accumulated across the questionnaire.
///
/// Single-select fields are replaced on each selection; multi-select fields
/// are sets with toggle semantics, so selecting an already-selected value
/// removes it. Created empty, mutated step by step, read once at the
/// results step, never persisted except through an explicit export.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Answers {
    pub home_country: Option<Country>,
    pub current_level: Option<EqfBand>,
    pub study_mode: Option<StudyMode>,
    pub destinations: BTreeSet<Country>,
    /// The "not sure yet" destination sentinel. May be set alongside
    /// explicit destinations; the resolver treats it as overriding them.
    pub not_sure_destination: bool,
    pub funding: Option<FundingProfile>,
    pub support: BTreeSet<SupportFlag>,
    pub accommodation: BTreeSet<AccommodationOption>,
    pub cost: Option<CostPreference>,
    pub interests: BTreeSet<Sector>,
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_home_country(&mut self, country: Country) {
        self.home_country = Some(country);
    }

    pub fn set_current_level(&mut self, band: EqfBand) {
        self.current_level = Some(band);
    }

    pub fn set_study_mode(&mut self, mode: StudyMode) {
        self.study_mode = Some(mode);
    }

    pub fn set_funding(&mut self, profile: FundingProfile) {
        self.funding = Some(profile);
    }

    pub fn set_cost(&mut self, preference: CostPreference) {
        self.cost = Some(preference);
    }

    pub fn toggle_destination(&mut self, country: Country) {
        toggle(&mut self.destinations, country);
    }

    pub fn toggle_not_sure(&mut self) {
        self.not_sure_destination = !self.not_sure_destination;
    }

    pub fn toggle_support(&mut self, flag: SupportFlag) {
        toggle(&mut self.support, flag);
    }

    /// The "none of these apply" action on the support list.
    pub fn clear_support(&mut self) {
        self.support.clear();
    }

    pub fn toggle_accommodation(&mut self, option: AccommodationOption) {
        toggle(&mut self.accommodation, option);
    }

    pub fn toggle_interest(&mut self, sector: Sector) {
        toggle(&mut self.interests, sector);
    }

    /// Completeness predicate gating forward navigation out of `step`.
    ///
    /// Mobility is deliberately ungated: an empty destination set is valid
    /// and triggers the resolver's default fallback. Intro and results have
    /// nothing to complete.
    pub fn step_complete(&self, step: Step) -> bool {
        match step {
            Step::Intro | Step::Mobility | Step::Results => true,
            Step::CurrentCountry => self.home_country.is_some(),
            Step::CurrentLevel => self.current_level.is_some(),
            Step::StudyMode => self.study_mode.is_some(),
            Step::Finance => self.funding.is_some() && self.cost.is_some(),
            Step::Interests => !self.interests.is_empty(),
        }
    }
}
