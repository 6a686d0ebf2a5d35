//! Pretty-print helpers for CLI output

use crate::config::Config;
use crate::error::HarvestError;
use crate::harvest::HarvestReport;
use crate::idl::IdlSummary;
use colored::Colorize;
use std::path::Path;

/// Print a main header (command title)
pub fn print_header(title: &str) {
    println!();
    println!("{}", title.bold().cyan());
    println!("{}", "─".repeat(50).dimmed());
}

/// Print a key-value pair
pub fn print_field(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

/// Announce the start of a program ID
pub fn display_processing(program_id: &str) {
    println!("Processing program ID: {}", program_id.cyan());
}

/// Report a saved IDL
pub fn display_written(path: &Path, summary: &IdlSummary) {
    let detail = format_summary(summary);
    if detail.is_empty() {
        println!("  {} IDL written to {}", "✓".green(), path.display());
    } else {
        println!(
            "  {} IDL written to {} {}",
            "✓".green(),
            path.display(),
            detail.dimmed()
        );
    }
}

/// Report a program ID that failed
pub fn display_item_error(program_id: &str, error: &HarvestError) {
    eprintln!(
        "  {} Error processing {}: {}",
        "✗".red(),
        program_id.yellow(),
        error
    );
}

/// Print the end-of-run summary
pub fn display_complete(report: &HarvestReport) {
    println!();
    println!("{}", "Complete - all program IDs processed".bold().green());
    println!(
        "  {} written, {} failed, {} total",
        format!("{}", report.written.len()).green(),
        format!("{}", report.failed.len()).red(),
        report.attempted()
    );

    if !report.failed.is_empty() {
        println!();
        println!("{}", "Failed program IDs:".dimmed());
        for failed in &report.failed {
            println!("  - {}", failed.program_id.yellow());
        }
    }
    println!();
}

/// Display the effective configuration
pub fn display_config(config: &Config, config_path: &Path, exists: bool) {
    print_header("idl-harvest configuration");
    print_field("Config file", &config_path.display().to_string());
    print_field(
        "File exists",
        if exists { "yes" } else { "no (using defaults)" },
    );
    println!();
    print_field("RPC URL", &config.rpc_url);
    print_field("Commitment", &config.commitment);
    print_field("Input file", &config.input_file.display().to_string());
    print_field("Output dir", &config.output_dir.display().to_string());
    print_field("Delay (ms)", &config.delay_ms.to_string());
    println!();
}

/// Display an error message
pub fn display_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg);
}

/// Format name, version and instruction count as `(name v1.0.0, 3 instructions)`
pub fn format_summary(summary: &IdlSummary) -> String {
    let mut parts = Vec::new();

    match (&summary.name, &summary.version) {
        (Some(name), Some(version)) => parts.push(format!("{} v{}", name, version)),
        (Some(name), None) => parts.push(name.clone()),
        (None, Some(version)) => parts.push(format!("v{}", version)),
        (None, None) => {}
    }

    if summary.instructions > 0 {
        let noun = if summary.instructions == 1 {
            "instruction"
        } else {
            "instructions"
        };
        parts.push(format!("{} {}", summary.instructions, noun));
    }

    if parts.is_empty() {
        String::new()
    } else {
        format!("({})", parts.join(", "))
    }
}
