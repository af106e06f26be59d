//! Interactive prompts using dialoguer

use std::path::Path;

use anyhow::Result;
use dialoguer::Confirm;

use crate::report::export::TEXT_FILENAME;

/// Ask whether to save a copy of the summary to the export file.
pub fn confirm_export(output_dir: &Path) -> Result<bool> {
    let target = output_dir.join(TEXT_FILENAME);
    let confirmed = Confirm::new()
        .with_prompt(format!("Save a copy of this summary to {}?", target.display()))
        .default(true)
        .interact()?;
    Ok(confirmed)
}
