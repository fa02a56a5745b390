//! Compare command handler.
//!
//! Implements the default command: diff two documents, classify the changes
//! and report them.

use crate::config::{CompareConfig, Validatable};
use crate::pipeline::{
    compute_comparison, exit_codes, load_document_with_context, open_history_store,
    output_report, record_comparison, validate_documents, Comparison,
};
use anyhow::{bail, Result};

/// Run a comparison, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_compare(config: CompareConfig) -> Result<i32> {
    if let Some(error) = config.validate().into_iter().next() {
        bail!("Invalid option {error}");
    }
    let quiet = config.behavior.quiet;

    let old = load_document_with_context(&config.paths.file_a, quiet)?;
    let new = load_document_with_context(&config.paths.file_b, quiet)?;

    let comparison = compute_comparison(&config, &old, &new)?;

    let schema_results = match &config.schema {
        Some(schema) => validate_documents(schema, &[&old, &new], quiet)?,
        None => Vec::new(),
    };

    if let Some(name) = &config.save_as {
        let mut store = open_history_store(&config.history)?;
        record_comparison(&mut store, name, &config, &comparison)?;
    }

    output_report(&config, &comparison, &old, &new, schema_results)?;

    Ok(determine_exit_code(&config, &comparison))
}

/// Exit code for a finished comparison.
fn determine_exit_code(config: &CompareConfig, comparison: &Comparison) -> i32 {
    if comparison.fails(config) {
        if !config.behavior.quiet {
            if let (Some(threshold), Some(overall)) =
                (config.behavior.fail_on, comparison.risk.overall)
            {
                tracing::warn!("Overall risk {} meets --fail-on {}", overall, threshold);
            }
        }
        return exit_codes::RISK_THRESHOLD_EXCEEDED;
    }
    exit_codes::SUCCESS
}
