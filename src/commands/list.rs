//! List command implementation
//!
//! Performs a dry run of the pack operation: every marker, bundle and asset
//! is discovered and streamed into a discarding sink. Scripts are not
//! verified.

use console::Style;

use super::load_config;
use crate::cli::ListArgs;
use crate::error::Result;
use crate::operations::PackOperation;
use crate::ui::display::print_modules;

/// Run list command
pub fn run(args: ListArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let outcome = PackOperation::new(&config).run(&args.roots, std::io::sink())?;

    print_modules(&outcome.modules);
    println!();
    println!(
        "{} {}",
        Style::new().bold().apply_to("Bundles:"),
        outcome.bundles
    );

    if args.entries {
        println!(
            "{} ({})",
            Style::new().bold().apply_to("Entries:"),
            outcome.entries.len()
        );
        for entry in &outcome.entries {
            println!("  {}", Style::new().dim().apply_to(entry));
        }
    }

    Ok(())
}
