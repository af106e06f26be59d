//! Tests for the option vocabularies: token round-trips and parse errors

use std::str::FromStr;

use pathfinder::pathway::{
    AccommodationOption, CostPreference, Country, EqfBand, FundingProfile, Sector, StudyMode,
    SupportFlag,
};

#[test]
fn test_country_tokens_round_trip() {
    for country in Country::ALL {
        assert_eq!(Country::from_str(country.token()).unwrap(), country);
    }
}

#[test]
fn test_eqf_band_tokens_round_trip() {
    for band in EqfBand::ALL {
        assert_eq!(EqfBand::from_str(band.token()).unwrap(), band);
    }
}

#[test]
fn test_study_mode_tokens_round_trip() {
    for mode in StudyMode::ALL {
        assert_eq!(StudyMode::from_str(mode.token()).unwrap(), mode);
    }
}

#[test]
fn test_remaining_vocabularies_round_trip() {
    for profile in FundingProfile::ALL {
        assert_eq!(FundingProfile::from_str(profile.token()).unwrap(), profile);
    }
    for flag in SupportFlag::ALL {
        assert_eq!(SupportFlag::from_str(flag.token()).unwrap(), flag);
    }
    for option in AccommodationOption::ALL {
        assert_eq!(AccommodationOption::from_str(option.token()).unwrap(), option);
    }
    for preference in CostPreference::ALL {
        assert_eq!(CostPreference::from_str(preference.token()).unwrap(), preference);
    }
    for sector in Sector::ALL {
        assert_eq!(Sector::from_str(sector.token()).unwrap(), sector);
    }
}

#[test]
fn test_unknown_tokens_produce_descriptive_errors() {
    let err = Country::from_str("atlantis").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("atlantis"), "Error should echo the bad value");
    assert!(message.contains("germany"), "Error should list valid tokens");

    let err = EqfBand::from_str("eqf9").unwrap_err();
    assert!(err.to_string().contains("eqf8"));
}

#[test]
fn test_labels_match_the_original_sector_list() {
    let labels: Vec<&str> = Sector::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Healthcare",
            "Education",
            "Technology",
            "Social Services",
            "Environmental",
            "Government",
            "Business",
            "Creative Arts",
        ]
    );
}

#[test]
fn test_eqf_band_count_and_bounds() {
    assert_eq!(EqfBand::ALL.len(), 7, "Seven discrete bands");
    assert_eq!(EqfBand::ALL[0], EqfBand::BelowEqf2);
    assert_eq!(EqfBand::ALL[6], EqfBand::Eqf8);
}
