//! Recommendation resolver
//!
//! Converts finalized answers into a renderable recommendation view. The
//! resolution is a pure, total function: any combination of populated and
//! empty answer fields resolves, worst case to placeholder text. Side
//! effects (export, rendering) live elsewhere.

use serde::Serialize;

use super::answers::Answers;
use super::catalog::{self, CountryPathwayConfig, DEFAULT_DESTINATIONS, HELPFUL_TIPS};
use super::levels::{coarse_equivalent, CoarseLevel};
use super::vocab::Country;

/// Placeholder used in headers when a field was never filled in.
pub const NOT_SPECIFIED: &str = "not specified yet";

/// Guidance for one destination country.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Guidance {
    /// Full six-category bundle (dedicated or templated).
    Bundle(CountryPathwayConfig),
    /// Safety net for countries with no content at all.
    Unavailable(String),
}

/// One per-country block of the recommendation output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryBlock {
    pub country: Country,
    pub guidance: Guidance,
    pub cost_of_living: &'static str,
}

/// The fully resolved recommendation, ready for rendering or export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationView {
    /// The user's EQF band label, or the "not specified" placeholder.
    pub level_label: String,
    /// Coarse-scheme equivalent label, or the "not specified" placeholder.
    pub equivalent_label: String,
    /// Composed header sentence referencing both labels.
    pub headline: String,
    /// Whether the destination list came from the default fallback.
    pub used_default_destinations: bool,
    pub blocks: Vec<CountryBlock>,
    pub tips: Vec<&'static str>,
}

/// Destinations the recommendation is produced for.
///
/// An empty selection, or any selection containing the "not sure yet"
/// sentinel, substitutes the fixed default list. The sentinel overrides
/// explicit picks rather than merging with them; see DESIGN.md.
pub fn effective_destinations(answers: &Answers) -> (Vec<Country>, bool) {
    if answers.not_sure_destination || answers.destinations.is_empty() {
        (DEFAULT_DESTINATIONS.to_vec(), true)
    } else {
        (answers.destinations.iter().copied().collect(), false)
    }
}

fn country_block(country: Country) -> CountryBlock {
    let guidance = match catalog::config_for(country) {
        Some(bundle) => Guidance::Bundle(bundle),
        None => Guidance::Unavailable(format!(
            "Detailed guidance for {country} is not yet available; see the EU-wide guidance on europa.eu in the meantime."
        )),
    };
    CountryBlock {
        country,
        guidance,
        cost_of_living: catalog::cost_of_living_hint(country),
    }
}

/// Resolve answers into a recommendation view.
pub fn resolve(answers: &Answers) -> RecommendationView {
    let (destinations, used_default) = effective_destinations(answers);

    let (level_label, equivalent_label) = match answers.current_level {
        Some(band) => (
            band.label().to_string(),
            coarse_equivalent(band).label().to_string(),
        ),
        None => (NOT_SPECIFIED.to_string(), NOT_SPECIFIED.to_string()),
    };

    let headline = match answers.current_level {
        Some(band) => {
            let coarse = coarse_equivalent(band);
            if coarse == CoarseLevel::None {
                format!(
                    "Based on your current level ({}), these routes start from no formal qualifications.",
                    band.label()
                )
            } else {
                format!(
                    "Based on your current level ({}, approximately {}), here are study routes for your destinations.",
                    band.label(),
                    coarse.label()
                )
            }
        }
        None => format!(
            "Your qualification level is {NOT_SPECIFIED}; the routes below assume you will confirm it later."
        ),
    };

    RecommendationView {
        level_label,
        equivalent_label,
        headline,
        used_default_destinations: used_default,
        blocks: destinations.into_iter().map(country_block).collect(),
        tips: HELPFUL_TIPS.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_answers_resolve_to_defaults_with_placeholders() {
        let view = resolve(&Answers::new());
        assert!(view.used_default_destinations);
        assert_eq!(
            view.blocks.iter().map(|b| b.country).collect::<Vec<_>>(),
            DEFAULT_DESTINATIONS.to_vec()
        );
        assert_eq!(view.level_label, NOT_SPECIFIED);
    }

    #[test]
    fn not_sure_overrides_explicit_destinations() {
        let mut answers = Answers::new();
        answers.toggle_destination(Country::Sweden);
        answers.toggle_not_sure();
        let (destinations, used_default) = effective_destinations(&answers);
        assert!(used_default);
        assert_eq!(destinations, DEFAULT_DESTINATIONS.to_vec());
    }
}
