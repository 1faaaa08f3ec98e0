//! Shared output formatting for reports.

use anyhow::Result;
use serde_json::Value;

use super::options::OptionsReport;
use super::rules::RulesReport;
use crate::OutputFormat;

/// Print a rules report in the specified format.
pub fn print_rules(report: &RulesReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_rules_text(report),
        OutputFormat::Json => return print_json(report),
        OutputFormat::Compact => print_rules_compact(report),
    }
    Ok(())
}

/// Print an options report in the specified format.
pub fn print_options(report: &OptionsReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_options_text(report)?,
        OutputFormat::Json => return print_json(report),
        OutputFormat::Compact => println!("{}", serde_json::to_string(report)?),
    }
    Ok(())
}

fn print_rules_text(report: &RulesReport) {
    if report.sources.is_empty() {
        println!("No rule set found, using defaults");
    } else {
        for source in &report.sources {
            println!("Loaded {source}");
        }
    }
    println!("General: {}\n", report.general);

    println!("{:<12} {:<10} {:<8} Reported", "Rule", "Severity", "Style");
    println!("{}", "-".repeat(40));
    for rule in &report.rules {
        println!(
            "{:<12} {:<10} {:<8} {}",
            rule.id,
            rule.severity.as_str(),
            on_off(rule.enabled),
            if rule.diagnostic_enabled { "yes" } else { "no" },
        );
    }

    for issue in &report.issues {
        println!("\x1b[33mwarning\x1b[0m: {issue}");
    }
}

fn print_rules_compact(report: &RulesReport) {
    for rule in &report.rules {
        println!(
            "{}: {} style={} reported={}",
            rule.id,
            rule.severity,
            on_off(rule.enabled),
            rule.diagnostic_enabled,
        );
    }
}

fn print_options_text(report: &OptionsReport) -> Result<()> {
    if let Value::Object(groups) = serde_json::to_value(report)? {
        for (name, value) in groups {
            println!("{:<11} {}", format!("{name}:"), render(&value));
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(report: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

fn on_off(state: Option<bool>) -> &'static str {
    match state {
        Some(true) => "on",
        Some(false) => "off",
        None => "-",
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
