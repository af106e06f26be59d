//! Pathfinder: European Education Pathway CLI
//!
//! A command-line tool that walks users through a fixed questionnaire and
//! resolves per-country study guidance from a static catalog.

mod cli;
mod pathway;
mod report;
mod utils;

use anyhow::Result;
use clap::Parser;

use cli::{confirm_export, wizard, Cli, Commands};
use pathway::{resolver, Answers, Step};
use report::{display, export};
use utils::{print_banner, print_completion, print_success};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Levels { filter }) = &cli.command {
        display::render_levels_table(filter.as_deref());
        return Ok(());
    }

    let answers = if cli.no_confirm {
        let answers = cli.answers()?;
        require_complete(&answers)?;
        answers
    } else {
        match wizard::run_wizard(cli.answers()?)? {
            wizard::WizardResult::Complete(answers) => answers,
            wizard::WizardResult::Quit => {
                println!("Cancelled by user.");
                return Ok(());
            }
        }
    };

    print_banner(env!("CARGO_PKG_VERSION"));

    let view = resolver::resolve(&answers);
    display::render_report(&answers, &view);
    println!();

    let should_export = cli.export || (!cli.no_confirm && confirm_export(&cli.output_dir)?);
    if should_export {
        let path = export::write_text_summary(&answers, &view, &cli.output_dir)?;
        print_success(&format!("Summary saved to {}", path.display()));
    }
    if cli.json {
        let path = export::write_json_summary(&answers, &view, &cli.output_dir)?;
        print_success(&format!("JSON summary saved to {}", path.display()));
    }

    print_completion();

    Ok(())
}

/// In `--no-confirm` mode every gated questionnaire field must come from
/// flags; name the missing one instead of dropping into the wizard.
fn require_complete(answers: &Answers) -> Result<()> {
    for step in Step::SEQUENCE {
        if answers.step_complete(step) {
            continue;
        }
        let hint = match step {
            Step::CurrentCountry => "--country is required with --no-confirm",
            Step::CurrentLevel => "--level is required with --no-confirm",
            Step::StudyMode => "--study-mode is required with --no-confirm",
            Step::Finance => "--funding and --cost are required with --no-confirm",
            Step::Interests => "at least one --interest is required with --no-confirm",
            _ => continue,
        };
        anyhow::bail!("{hint}");
    }
    Ok(())
}
