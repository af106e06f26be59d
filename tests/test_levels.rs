//! Tests for the EQF to coarse-level display mapping and reference table

use pathfinder::pathway::levels::{coarse_equivalent, CoarseLevel, LEVEL_REFERENCE};
use pathfinder::pathway::EqfBand;

#[test]
fn test_mapping_is_total_over_the_seven_bands() {
    for band in EqfBand::ALL {
        // No panic, and only the lowest band hits the sentinel.
        let coarse = coarse_equivalent(band);
        assert_eq!(
            coarse == CoarseLevel::None,
            band == EqfBand::BelowEqf2,
            "Only below-eqf2 maps to the none sentinel"
        );
    }
}

#[test]
fn test_expected_equivalents() {
    assert_eq!(coarse_equivalent(EqfBand::BelowEqf2), CoarseLevel::None);
    assert_eq!(coarse_equivalent(EqfBand::Eqf2), CoarseLevel::Level1To2);
    assert_eq!(coarse_equivalent(EqfBand::Eqf3), CoarseLevel::Level3);
    assert_eq!(coarse_equivalent(EqfBand::Eqf4To5), CoarseLevel::Level4To5);
    assert_eq!(coarse_equivalent(EqfBand::Eqf6), CoarseLevel::Level6);
    assert_eq!(coarse_equivalent(EqfBand::Eqf7), CoarseLevel::Level7);
    assert_eq!(coarse_equivalent(EqfBand::Eqf8), CoarseLevel::Level8);
}

#[test]
fn test_coarse_scheme_has_eight_levels() {
    assert_eq!(CoarseLevel::ALL.len(), 8);
    // The entry rung exists in the scheme but is not the image of any band;
    // it appears only in the reference table.
    assert!(EqfBand::ALL
        .iter()
        .all(|b| coarse_equivalent(*b) != CoarseLevel::Entry));
}

#[test]
fn test_reference_table_covers_every_level_in_order() {
    assert_eq!(LEVEL_REFERENCE.len(), 8);
    for (entry, level) in LEVEL_REFERENCE.iter().zip(CoarseLevel::ALL) {
        assert_eq!(entry.level, level);
        assert!(!entry.description.is_empty());
        assert!(!entry.examples.is_empty());
    }
}

#[test]
fn test_bachelor_label_used_in_headers() {
    assert_eq!(CoarseLevel::Level6.label(), "Bachelor level or equivalent");
}
