//! Rendering of lint results for each output format.

use anyhow::Result;
use sqlint_core::{LintResult, Severity};
use std::io::IsTerminal;

use crate::OutputFormat;

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(result, std::io::stdout().is_terminal()),
        OutputFormat::Json => serde_json::to_string_pretty(result)?,
        OutputFormat::Compact => render_compact(result),
    };
    println!("{rendered}");
    Ok(())
}

fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31m",
        Severity::Warning => "\x1b[33m",
        Severity::Info => "\x1b[34m",
    }
}

fn paint(text: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Renders each violation block followed by the summary line.
fn render_text(result: &LintResult, color: bool) -> String {
    let mut out = String::new();
    for violation in &result.violations {
        let block = violation.format();
        out.push_str(&paint(
            block.trim_end(),
            severity_color(violation.severity),
            color,
        ));
        out.push_str("\n\n");
    }

    let summary_color = result
        .violations
        .iter()
        .map(|v| v.severity)
        .max()
        .map_or(GREEN, severity_color);
    out.push_str(&paint(&result.summary(), summary_color, color));
    out
}

fn render_compact(result: &LintResult) -> String {
    result
        .violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
