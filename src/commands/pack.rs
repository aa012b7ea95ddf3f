//! Pack command implementation
//!
//! The pack process:
//! 1. Resolve the configuration
//! 2. Prepare the linter unless verification is turned off
//! 3. Create the output file
//! 4. Run the pack operation
//! 5. Remove the output again if the run failed
//! 6. Print the discovered modules and a summary
//!
//! Under `--strict` the archive is kept but the command fails when any
//! problem was reported.

use std::fs::File;
use std::path::Path;

use super::load_config;
use crate::cli::PackArgs;
use crate::error::{Result, archive_write_failed, verification_failed};
use crate::operations::PackOperation;
use crate::ui::display::{print_diagnostic, print_modules, print_summary};
use crate::ui::{ProgressReporter, SilentProgressReporter, SpinnerReporter};
use crate::verify::LinterCommand;

/// Run pack command
pub fn run(args: PackArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let linter = if args.no_verify {
        None
    } else {
        Some(LinterCommand::new(&config.lint)?)
    };
    let sink = |location: &str, message: &str| print_diagnostic(location, message);

    let progress: Box<dyn ProgressReporter> = if args.quiet {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(SpinnerReporter::new())
    };

    let mut operation = PackOperation::new(&config).with_progress(progress.as_ref());
    if let Some(linter) = &linter {
        operation = operation.with_verification(&sink, linter);
    }

    let output = File::create(&args.output)
        .map_err(|e| archive_write_failed(args.output.display().to_string(), e.to_string()))?;

    let outcome = match operation.run(&args.roots, output) {
        Ok(outcome) => outcome,
        Err(e) => {
            discard_output(&args.output);
            return Err(e);
        }
    };

    if args.strict && outcome.diagnostics > 0 {
        return Err(verification_failed(outcome.diagnostics));
    }

    if !args.quiet {
        let bytes = outcome.output.metadata().map(|m| m.len()).unwrap_or_default();
        print_modules(&outcome.modules);
        println!();
        print_summary(
            &args.output.display().to_string(),
            bytes,
            outcome.modules.len(),
            outcome.entries.len(),
            outcome.diagnostics,
        );
    }

    Ok(())
}

/// Remove an output file that does not hold a complete archive
fn discard_output(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        tracing::warn!(path = %path.display(), error = %e, "could not remove partial archive");
    }
}
