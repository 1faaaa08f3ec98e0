//! List rules command implementation.

use lintconf_core::{Severity, CODE_STYLE_RULES};

/// Runs the list-rules command.
pub fn run() {
    println!("Built-in code style rules:\n");
    println!("{:<10} {:<8} Title", "Id", "Default");
    println!("{}", "-".repeat(80));

    for rule in CODE_STYLE_RULES {
        println!(
            "{:<10} {:<8} {}",
            rule.id,
            if rule.enabled_by_default { "on" } else { "off" },
            rule.title
        );
    }

    let severities: Vec<&str> = Severity::ALL.iter().map(|s| s.as_str()).collect();
    println!("\nSeverities: {}", severities.join(", "));
    println!("Code style rules accept only `info` (on) or `suppress` (off).");

    println!("\nExample:");
    println!("  lintconf rules STYLE01 CS1001 --override STYLE01=suppress");
}
