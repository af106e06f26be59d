//! Display-only mapping between EQF bands and the coarser national scheme
//!
//! The questionnaire collects levels as EQF bands; reports additionally show
//! the approximate equivalent on the eight-rung national ladder familiar to
//! users from England, Wales and Northern Ireland. The mapping is fixed and
//! one-directional: it exists purely for display, never for logic.

use serde::Serialize;

use super::vocab::EqfBand;

/// One rung of the coarse national qualification ladder.
///
/// Eight levels. `None` is the sentinel for "no formal qualifications";
/// `Entry` has no EQF-band preimage and appears only in the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum CoarseLevel {
    None,
    Entry,
    Level1To2,
    Level3,
    Level4To5,
    Level6,
    Level7,
    Level8,
}

impl CoarseLevel {
    pub const ALL: [CoarseLevel; 8] = [
        CoarseLevel::None,
        CoarseLevel::Entry,
        CoarseLevel::Level1To2,
        CoarseLevel::Level3,
        CoarseLevel::Level4To5,
        CoarseLevel::Level6,
        CoarseLevel::Level7,
        CoarseLevel::Level8,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CoarseLevel::None => "No formal qualifications",
            CoarseLevel::Entry => "Entry level",
            CoarseLevel::Level1To2 => "Level 1-2 (GCSEs, O Levels)",
            CoarseLevel::Level3 => "Level 3 (A Levels, BTEC Nationals)",
            CoarseLevel::Level4To5 => "Level 4-5 (HNC, HND, Foundation Degree)",
            CoarseLevel::Level6 => "Bachelor level or equivalent",
            CoarseLevel::Level7 => "Master's level or equivalent",
            CoarseLevel::Level8 => "Doctoral level",
        }
    }
}

/// Map an EQF band to its approximate coarse-level equivalent.
///
/// Total over the seven bands; "below EQF 2" maps to the `None` sentinel.
pub fn coarse_equivalent(band: EqfBand) -> CoarseLevel {
    match band {
        EqfBand::BelowEqf2 => CoarseLevel::None,
        EqfBand::Eqf2 => CoarseLevel::Level1To2,
        EqfBand::Eqf3 => CoarseLevel::Level3,
        EqfBand::Eqf4To5 => CoarseLevel::Level4To5,
        EqfBand::Eqf6 => CoarseLevel::Level6,
        EqfBand::Eqf7 => CoarseLevel::Level7,
        EqfBand::Eqf8 => CoarseLevel::Level8,
    }
}

/// Reference-table entry for one coarse level.
pub struct LevelReference {
    pub level: CoarseLevel,
    pub title: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

/// The full qualification-levels reference table shown by `pathfinder levels`.
pub const LEVEL_REFERENCE: [LevelReference; 8] = [
    LevelReference {
        level: CoarseLevel::None,
        title: "No formal qualifications",
        description: "No completed formal qualifications yet. Entry-level and foundation routes are open from here.",
        examples: &["Skills for Life", "Taster and access courses"],
    },
    LevelReference {
        level: CoarseLevel::Entry,
        title: "Entry Level",
        description: "Entry level qualifications are the most basic, available at three sub-levels with entry level 3 the most difficult.",
        examples: &[
            "Entry level award, certificate or diploma",
            "Entry level functional skills",
            "Entry level ESOL",
        ],
    },
    LevelReference {
        level: CoarseLevel::Level1To2,
        title: "Level 1-2",
        description: "The GCSE band: level 1 covers grades D-G (3-1), level 2 covers grades A*-C (9-4) with more specialisation.",
        examples: &[
            "GCSEs and O Levels",
            "Level 1-2 NVQ",
            "Intermediate apprenticeship",
            "Level 1-2 functional skills",
        ],
    },
    LevelReference {
        level: CoarseLevel::Level3,
        title: "Level 3",
        description: "Equivalent to A levels, offering deeper knowledge in specific subject areas.",
        examples: &[
            "A and AS levels",
            "Access to higher education diploma",
            "Advanced apprenticeship",
            "International Baccalaureate diploma",
            "Level 3 national diploma",
        ],
    },
    LevelReference {
        level: CoarseLevel::Level4To5,
        title: "Level 4-5",
        description: "Equivalent to the first two years of an undergraduate degree.",
        examples: &[
            "Higher national certificate (HNC) and diploma (HND)",
            "Foundation degree",
            "Certificate or diploma of higher education",
            "Higher apprenticeship",
        ],
    },
    LevelReference {
        level: CoarseLevel::Level6,
        title: "Level 6",
        description: "Equivalent to bachelor's degrees, with or without honours.",
        examples: &[
            "Bachelor's degree (BA, BSc), with or without honours",
            "Degree apprenticeship",
            "Graduate certificate or diploma",
        ],
    },
    LevelReference {
        level: CoarseLevel::Level7,
        title: "Level 7",
        description: "Equivalent to master's degrees and postgraduate certificates or diplomas.",
        examples: &[
            "Master's degree (MA, MSc)",
            "Integrated master's degree (MEng)",
            "Postgraduate certificate or diploma",
            "PGCE",
        ],
    },
    LevelReference {
        level: CoarseLevel::Level8,
        title: "Level 8",
        description: "Doctorate level, the highest level of academic achievement.",
        examples: &["Doctorate (PhD or DPhil)", "Level 8 award, certificate or diploma"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_total_over_bands() {
        for band in EqfBand::ALL {
            // Every band resolves to some rung; the sentinel only for below-EQF-2.
            let coarse = coarse_equivalent(band);
            assert_eq!(coarse == CoarseLevel::None, band == EqfBand::BelowEqf2);
        }
    }

    #[test]
    fn reference_table_covers_every_rung() {
        for (entry, level) in LEVEL_REFERENCE.iter().zip(CoarseLevel::ALL) {
            assert_eq!(entry.level, level);
        }
    }
}
