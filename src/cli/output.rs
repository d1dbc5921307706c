//! CLI output formatting

use crate::cli::commands::{DimensionResult, MatchReport};
use crate::core::{Condition, ConditionMap, Conditions, Dimension};
use console::Emoji;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");

/// Format a pattern list, or `*` when unset
fn format_patterns(patterns: &[String]) -> String {
    if patterns.is_empty() {
        style("*").dim().to_string()
    } else {
        patterns.join(", ")
    }
}

/// Format a single dimension's condition
pub fn format_condition(dimension: Dimension, condition: &Condition) -> String {
    let mut line = format!(
        "{:<9} include: {}",
        style(dimension).cyan(),
        format_patterns(&condition.include)
    );
    if !condition.exclude.is_empty() {
        line.push_str(&format!(
            "  exclude: {}",
            style(format_patterns(&condition.exclude)).red()
        ));
    }
    line
}

/// Format matrix axis filters
pub fn format_matrix(matrix: &ConditionMap) -> Vec<String> {
    let include = matrix
        .include
        .iter()
        .map(|(axis, pattern)| format!("{:<9} {} = {}", style("matrix").cyan(), axis, pattern));
    let exclude = matrix.exclude.iter().map(|(axis, pattern)| {
        format!(
            "{:<9} {} != {}",
            style("matrix").cyan(),
            axis,
            style(pattern).red()
        )
    });
    include.chain(exclude).collect()
}

/// Format every configured dimension of a conditions block
pub fn format_conditions(conditions: &Conditions) -> Vec<String> {
    let mut lines: Vec<String> = Dimension::ALL
        .iter()
        .filter(|d| !conditions.condition(**d).is_empty())
        .map(|d| format_condition(*d, conditions.condition(*d)))
        .collect();
    lines.extend(format_matrix(&conditions.matrix));
    lines
}

/// Format the outcome of one dimension check
pub fn format_dimension_result(result: &DimensionResult) -> String {
    let icon = if result.matched { CHECK } else { CROSS };
    format!(
        "{}{} = {}",
        icon,
        style(&result.dimension).cyan(),
        style(&result.value).bold()
    )
}

/// Format the overall verdict of a match report
pub fn format_verdict(report: &MatchReport) -> String {
    if report.matched {
        format!("{}{}", CHECK, style("conditions matched").green())
    } else {
        format!("{}{}", CROSS, style("conditions not matched").red())
    }
}
