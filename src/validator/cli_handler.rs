//! CLI handlers for the `check` and `presets` commands.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use response_schemas::ProviderError;
use tracing::debug;

use super::{AnyResponse, OutputFormat, ResponseValidator};
use crate::cli::CheckArgs;
use crate::config::ValidationSettings;
use crate::expectations::{ExpectationSet, presets};
use crate::{Error, Result};

/// Exit code for unreadable or malformed input
const EXIT_INPUT_ERROR: u8 = 2;

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::Input(format!("Cannot read {}: {e}", path.display())))
}

/// Load an expectation set; YAML is a superset of JSON, so one parser covers both
fn load_expectations(path: &Path) -> Result<ExpectationSet> {
    let raw = read_file(path)?;
    Ok(serde_yaml::from_str(&raw)?)
}

fn load_error(path: &Path) -> Result<ProviderError> {
    let raw = read_file(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn resolve_expectations(args: &CheckArgs) -> Result<ExpectationSet> {
    let set = match (&args.expectations, &args.preset) {
        (Some(path), _) => load_expectations(path)?,
        (None, Some(name)) => presets::by_name(name)?,
        (None, None) => {
            return Err(Error::Input(
                "either --expectations or --preset is required".to_string(),
            ));
        }
    };

    Ok(match &args.provider {
        Some(provider) => set.adjusted_for_provider(provider),
        None => set,
    })
}

fn label_for(args: &CheckArgs) -> String {
    args.label.clone().unwrap_or_else(|| {
        args.response
            .as_deref()
            .and_then(Path::file_stem)
            .map_or_else(|| args.kind.to_string(), |s| s.to_string_lossy().into_owned())
    })
}

/// Load inputs, validate, and print the report
///
/// Returns `Ok(true)` when the response passed.
fn check(args: &CheckArgs, settings: &ValidationSettings) -> Result<bool> {
    let expectations = resolve_expectations(args)?;

    let response = args
        .response
        .as_deref()
        .map(|path| {
            let raw = read_file(path)?;
            AnyResponse::from_json(args.kind, &raw).map_err(|e| {
                Error::Input(format!(
                    "{} is not a valid {} response: {e}",
                    path.display(),
                    args.kind
                ))
            })
        })
        .transpose()?;

    let error = args.error.as_deref().map(load_error).transpose()?;
    let label = label_for(args);

    debug!(label = %label, kind = %args.kind, "Inputs loaded");

    let validator = ResponseValidator::with_settings(settings.clone());
    let outcome = validator.validate(
        response.as_ref().map(AnyResponse::as_response_ref),
        error.as_ref(),
        &expectations,
        &label,
    );

    match args.format {
        OutputFormat::Text => print!("{}", outcome.format_text(&label)),
        OutputFormat::Json => println!("{}", outcome.format_json()?),
    }

    Ok(outcome.passed())
}

/// Run the check command: 0 on pass, 1 on fail, 2 on input errors
pub fn run_check_command(args: &CheckArgs, settings: &ValidationSettings) -> ExitCode {
    match check(args, settings) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("❌ {e}");
            ExitCode::from(EXIT_INPUT_ERROR)
        }
    }
}

/// Print the built-in presets
pub fn run_presets_command() -> ExitCode {
    println!("Built-in expectation presets:\n");
    let width = presets::NAMES.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, description) in presets::NAMES {
        println!("  {name:<width$}  {description}");
    }
    println!("\n💡 Tip: Use `check --preset <name>` to validate against a preset");
    ExitCode::SUCCESS
}
