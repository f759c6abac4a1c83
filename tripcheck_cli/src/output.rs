use colored::*;
use serde_json::json;
use tripcheck_core::ValidationReport;

/// Prints the aggregate gate signal: a single boolean on stdout.
pub fn print_gate_result(report: &ValidationReport) {
    println!("{}", report.passed);
}

pub fn print_validation_report(report: &ValidationReport, format: &str) {
    match format {
        "json" => print_json_report(report),
        _ => print_text_report(report),
    }
}

fn print_text_report(report: &ValidationReport) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  TRIP DATA QUALITY REPORT".bold());
    println!("{}", "═".repeat(60));

    if report.passed {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    println!("\n{}", "Checks:".bold());
    for (kind, passed) in &report.checks {
        if *passed {
            println!("  {} {}", "✓".green(), kind.name());
        } else {
            println!("  {} {}", "✗".red(), kind.name().red());
        }
    }

    if !report.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for (i, error) in report.errors.iter().enumerate() {
            println!("  {}. {}", i + 1, error.red());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Rows validated: {}", report.stats.rows_validated);
    println!("  Checks run:     {}", report.stats.checks_run);
    println!("  Duration:       {} ms", report.stats.duration_ms);
    println!("{}", "═".repeat(60));
}

fn print_json_report(report: &ValidationReport) {
    let output = json!({
        "passed": report.passed,
        "checks": report.checks.iter().map(|(kind, passed)| json!({
            "name": kind.name(),
            "passed": passed,
        })).collect::<Vec<_>>(),
        "errors": report.errors,
        "stats": {
            "rows_validated": report.stats.rows_validated,
            "checks_run": report.stats.checks_run,
            "duration_ms": report.stats.duration_ms,
        }
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
