use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use icaljson_core::config::Settings;
use icaljson_service::generate;
use icaljson_service::input::validate_input;
use icaljson_service::output::{default_output_path, validate_output_path};

use crate::cli::GenerateArgs;

/// Output path: `--output`, then the configured path, then
/// `<input stem>_parsed.json`.
#[must_use]
pub fn resolve_output_path(flag: Option<&Path>, settings: &Settings, ics_path: &Path) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| settings.output_path().map(PathBuf::from))
        .unwrap_or_else(|| default_output_path(ics_path))
}

/// ## Summary
/// Converts the ICS file named on the command line and reports where the JSON
/// went.
///
/// ## Errors
/// Returns an error if the input is not an existing calendar file, the
/// output path is not writable or the conversion fails.
pub fn run(args: &GenerateArgs, settings: &Settings) -> Result<()> {
    validate_input(&args.ics_path)?;

    let output_path = resolve_output_path(args.output.as_deref(), settings, &args.ics_path);
    validate_output_path(&output_path).context("invalid output path")?;

    println!("Generating JSON file for '{}'...", args.ics_path.display());
    let calendar = generate(&args.ics_path, Some(&output_path))
        .context("error generating JSON")?;

    println!(
        "✓ JSON file with {} events generated successfully and saved to: {}",
        calendar.events.len(),
        output_path.display()
    );
    Ok(())
}
