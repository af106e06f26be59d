//! Command-line argument definitions using clap

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::pathway::{
    AccommodationOption, Answers, CostPreference, Country, EqfBand, FundingProfile, Sector,
    StudyMode, SupportFlag,
};

/// Pathfinder - Explore European education pathways from your qualifications and goals
#[derive(Parser, Debug)]
#[command(name = "pathfinder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Country where you currently live.
    /// If not provided, will be selected interactively in the wizard.
    #[arg(short, long)]
    pub country: Option<Country>,

    /// Highest qualification level you currently hold, as an EQF band
    /// (below-eqf2, eqf2, eqf3, eqf4-5, eqf6, eqf7, eqf8).
    #[arg(short, long)]
    pub level: Option<EqfBand>,

    /// How you intend to study (full-time-campus, part-time, online, apprenticeship).
    #[arg(short = 'm', long)]
    pub study_mode: Option<StudyMode>,

    /// Destination countries you are considering (comma-separated).
    /// Accepts country tokens or the sentinel 'not-sure'. Leaving this empty
    /// or including 'not-sure' falls back to the default destination set.
    #[arg(short = 'd', long, value_delimiter = ',')]
    pub destination: Vec<String>,

    /// How you expect to finance your studies
    /// (self-funding, grants, work-and-study, already-working).
    #[arg(short, long)]
    pub funding: Option<FundingProfile>,

    /// Personal circumstances that unlock targeted support guidance
    /// (comma-separated; first-generation, low-income, disability,
    /// caring-responsibilities, refugee-background).
    #[arg(long, value_delimiter = ',')]
    pub support: Vec<SupportFlag>,

    /// Preferred accommodation kinds (comma-separated; student-residence,
    /// shared-flat, homestay, private-studio).
    #[arg(long, value_delimiter = ',')]
    pub accommodation: Vec<AccommodationOption>,

    /// How you weigh cost against opportunity
    /// (lower-cost, balanced, high-opportunity).
    #[arg(long)]
    pub cost: Option<CostPreference>,

    /// Career sectors you are interested in (comma-separated).
    #[arg(short, long, value_delimiter = ',')]
    pub interest: Vec<Sector>,

    /// Skip the interactive wizard and resolve directly from the flags above.
    /// Requires --country, --level, --study-mode, --funding, --cost and at
    /// least one --interest.
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Save the text summary without asking first
    #[arg(long, default_value = "false")]
    pub export: bool,

    /// Also write a structured JSON summary next to the text one
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Directory exported summaries are written into
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the qualification-levels reference table
    Levels {
        /// Only show rows whose title or examples contain this term
        #[arg(long)]
        filter: Option<String>,
    },
}

impl Cli {
    /// Build an (possibly partial) answers record from the provided flags.
    /// Used to pre-populate the wizard and as the full profile in
    /// `--no-confirm` mode.
    pub fn answers(&self) -> Result<Answers> {
        let mut answers = Answers::new();
        answers.home_country = self.country;
        answers.current_level = self.level;
        answers.study_mode = self.study_mode;
        answers.funding = self.funding;
        answers.cost = self.cost;

        for token in &self.destination {
            if token == "not-sure" {
                answers.not_sure_destination = true;
            } else {
                let country = Country::from_str(token)
                    .with_context(|| format!("invalid --destination value '{token}'"))?;
                answers.destinations.insert(country);
            }
        }
        answers.support.extend(self.support.iter().copied());
        answers
            .accommodation
            .extend(self.accommodation.iter().copied());
        answers.interests.extend(self.interest.iter().copied());

        Ok(answers)
    }
}
