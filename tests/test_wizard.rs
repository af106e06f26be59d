//! Unit tests for the TUI wizard state machine
//!
//! These tests verify the wizard's pure logic components:
//! - Step sequencing and navigation
//! - Forward-navigation gating
//! - Progress percentage derivation
//!
//! DO NOT test TUI rendering or terminal operations here - those require
//! integration tests with mocked terminal interfaces.

mod common;

use pathfinder::cli::wizard::{WizardState, WizardStep};
use pathfinder::pathway::{
    CostPreference, Country, EqfBand, FundingProfile, Sector, Step, StudyMode,
};

// ============================================================================
// Step sequencing
// ============================================================================

#[test]
fn test_step_sequence_is_fixed_and_linear() {
    let wizard = WizardState::new();

    assert_eq!(wizard.steps.len(), 8, "Questionnaire should have 8 steps");
    assert!(matches!(wizard.steps[0], WizardStep::Intro));
    assert!(matches!(wizard.steps[1], WizardStep::CurrentCountry { .. }));
    assert!(matches!(wizard.steps[2], WizardStep::CurrentLevel { .. }));
    assert!(matches!(wizard.steps[3], WizardStep::StudyMode { .. }));
    assert!(matches!(wizard.steps[4], WizardStep::Mobility { .. }));
    assert!(matches!(wizard.steps[5], WizardStep::Finance { .. }));
    assert!(matches!(wizard.steps[6], WizardStep::Interests { .. }));
    assert!(matches!(wizard.steps[7], WizardStep::Results));

    // Screen order matches the domain step order exactly.
    for (screen, step) in wizard.steps.iter().zip(Step::SEQUENCE) {
        assert_eq!(screen.tag(), step, "Screen order diverges at {:?}", step);
    }
}

#[test]
fn test_new_wizard_starts_at_intro() {
    let wizard = WizardState::new();

    assert_eq!(wizard.current_index, 0, "New wizard should start at index 0");
    assert_eq!(wizard.step_tag(), Step::Intro);
    assert!(
        !wizard.show_quit_confirm,
        "Quit confirmation should not be shown initially"
    );
    assert_eq!(wizard.progress(), 0.0, "Progress should be 0 at intro");
}

// ============================================================================
// Forward navigation with a complete profile: strictly +1 per advance
// ============================================================================

#[test]
fn test_advance_is_strictly_monotonic_when_complete() {
    let mut wizard = WizardState::with_answers(common::complete_answers());

    for expected in 1..8 {
        wizard.advance();
        assert_eq!(
            wizard.current_index, expected,
            "advance() should move exactly one step forward"
        );
    }

    assert!(wizard.is_last_step());
    wizard.advance();
    assert_eq!(
        wizard.current_index, 7,
        "Should stay at results when trying to advance past end"
    );
}

// ============================================================================
// Backward navigation: always permitted, clamps at intro
// ============================================================================

#[test]
fn test_retreat_always_succeeds_and_clamps() {
    let mut wizard = WizardState::new();

    // Walk an empty profile backwards from every reachable position.
    wizard.current_index = 7;
    for expected in (0..7).rev() {
        wizard.retreat();
        assert_eq!(
            wizard.current_index, expected,
            "retreat() should move exactly one step back regardless of completeness"
        );
    }

    wizard.retreat();
    assert_eq!(wizard.current_index, 0, "Should not go below intro");
}

// ============================================================================
// Gating
// ============================================================================

#[test]
fn test_advance_blocked_until_country_selected() {
    let mut wizard = WizardState::new();

    wizard.advance(); // intro -> currentCountry, ungated
    assert_eq!(wizard.step_tag(), Step::CurrentCountry);

    wizard.advance();
    assert_eq!(
        wizard.step_tag(),
        Step::CurrentCountry,
        "advance() should be a no-op while no country is selected"
    );

    wizard.answers.set_home_country(Country::Ireland);
    wizard.advance();
    assert_eq!(
        wizard.step_tag(),
        Step::CurrentLevel,
        "advance() should be permitted the instant a country is selected"
    );
}

#[test]
fn test_gates_for_level_and_study_mode() {
    let mut wizard = WizardState::new();
    wizard.answers.set_home_country(Country::Spain);
    wizard.current_index = Step::CurrentLevel.index();

    wizard.advance();
    assert_eq!(wizard.step_tag(), Step::CurrentLevel, "Level gate should hold");
    wizard.answers.set_current_level(EqfBand::Eqf3);
    wizard.advance();
    assert_eq!(wizard.step_tag(), Step::StudyMode);

    wizard.advance();
    assert_eq!(wizard.step_tag(), Step::StudyMode, "Study mode gate should hold");
    wizard.answers.set_study_mode(StudyMode::Apprenticeship);
    wizard.advance();
    assert_eq!(wizard.step_tag(), Step::Mobility);
}

#[test]
fn test_mobility_has_no_gate() {
    let mut wizard = WizardState::new();
    wizard.current_index = Step::Mobility.index();

    assert!(wizard.answers.destinations.is_empty());
    wizard.advance();
    assert_eq!(
        wizard.step_tag(),
        Step::Finance,
        "Mobility must advance with an empty destination set"
    );
}

#[test]
fn test_finance_gate_requires_funding_and_cost() {
    let mut wizard = WizardState::new();
    wizard.current_index = Step::Finance.index();

    wizard.answers.set_funding(FundingProfile::WorkAndStudy);
    wizard.advance();
    assert_eq!(
        wizard.step_tag(),
        Step::Finance,
        "Funding alone should not satisfy the finance gate"
    );

    wizard.answers.set_cost(CostPreference::LowerCost);
    wizard.advance();
    assert_eq!(wizard.step_tag(), Step::Interests);
}

#[test]
fn test_interests_gate_requires_at_least_one() {
    let mut wizard = WizardState::new();
    wizard.current_index = Step::Interests.index();

    wizard.advance();
    assert_eq!(wizard.step_tag(), Step::Interests, "Interest gate should hold");

    wizard.answers.toggle_interest(Sector::Healthcare);
    wizard.advance();
    assert_eq!(wizard.step_tag(), Step::Results);

    // Toggling the only interest back off re-blocks at the interests step.
    wizard.retreat();
    wizard.answers.toggle_interest(Sector::Healthcare);
    wizard.advance();
    assert_eq!(wizard.step_tag(), Step::Interests);
}

// ============================================================================
// Progress percentage
// ============================================================================

#[test]
fn test_progress_over_active_steps() {
    let mut wizard = WizardState::with_answers(common::complete_answers());
    let expected = [
        0.0,
        100.0 / 6.0,
        200.0 / 6.0,
        300.0 / 6.0,
        400.0 / 6.0,
        500.0 / 6.0,
        100.0,
        0.0,
    ];

    for (i, want) in expected.iter().enumerate() {
        wizard.current_index = i;
        assert!(
            (wizard.progress() - want).abs() < 1e-9,
            "Progress at step {} should be {:.2}, got {:.2}",
            i,
            want,
            wizard.progress()
        );
    }
}

// ============================================================================
// Pre-population
// ============================================================================

#[test]
fn test_with_answers_keeps_prepopulated_profile() {
    let wizard = WizardState::with_answers(common::complete_answers());

    assert_eq!(wizard.answers.home_country, Some(Country::Germany));
    assert_eq!(wizard.current_index, 0, "Pre-population must not skip steps");
    assert!(wizard.answers.interests.contains(&Sector::Technology));
}
