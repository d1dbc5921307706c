//! CLI command definitions

use crate::core::{Conditions, Dimension};
use clap::Args;
use serde::Serialize;

/// Parse a conditions block and print its normalized form
#[derive(Debug, Args, Clone)]
pub struct ValidateCommand {
    /// Path to the conditions YAML file
    #[arg(short, long)]
    pub file: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Check event values against a conditions block
#[derive(Debug, Args, Clone)]
pub struct MatchCommand {
    /// Path to the conditions YAML file
    #[arg(short, long)]
    pub file: String,

    /// Event values to check (dimension=value)
    #[arg(long, required = true, value_parser = parse_dimension_value)]
    pub value: Vec<(Dimension, String)>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Outcome of checking one dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionResult {
    pub dimension: String,
    pub value: String,
    pub matched: bool,
}

/// Outcome of a match command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub results: Vec<DimensionResult>,

    /// True when every checked dimension matched
    pub matched: bool,
}

/// Check each value against its dimension's condition independently
pub fn evaluate(conditions: &Conditions, values: &[(Dimension, String)]) -> MatchReport {
    let results: Vec<DimensionResult> = values
        .iter()
        .map(|(dimension, value)| DimensionResult {
            dimension: dimension.to_string(),
            value: value.clone(),
            matched: conditions.condition(*dimension).matches(value),
        })
        .collect();

    let matched = results.iter().all(|r| r.matched);
    MatchReport { results, matched }
}

/// Parse key=value pairs
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let parts: Vec<&str> = s.splitn(2, '=').collect();
    if parts.len() != 2 {
        return Err(format!("Invalid key=value pair: {}", s));
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

/// Parse dimension=value pairs
pub fn parse_dimension_value(s: &str) -> Result<(Dimension, String), String> {
    let (key, value) = parse_key_value(s)?;
    let dimension = key.parse::<Dimension>().map_err(|e| e.to_string())?;
    Ok((dimension, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("ref=refs/heads/a=b").unwrap(),
            ("ref".to_string(), "refs/heads/a=b".to_string())
        );
        assert!(parse_key_value("branch").is_err());
    }

    #[test]
    fn test_parse_dimension_value() {
        assert_eq!(
            parse_dimension_value("event=push").unwrap(),
            (Dimension::Event, "push".to_string())
        );
        let err = parse_dimension_value("stage=build").unwrap_err();
        assert!(err.contains("stage"));
    }

    #[test]
    fn test_evaluate_checks_each_dimension() {
        let yaml = r#"
branch: [main, release/*]
event:
  exclude: [pull_request]
"#;
        let conditions = Conditions::from_yaml(yaml).unwrap();

        let report = evaluate(
            &conditions,
            &[
                (Dimension::Branch, "release/v2".to_string()),
                (Dimension::Event, "push".to_string()),
            ],
        );
        assert!(report.matched);
        assert_eq!(report.results.len(), 2);

        let report = evaluate(
            &conditions,
            &[
                (Dimension::Branch, "main".to_string()),
                (Dimension::Event, "pull_request".to_string()),
            ],
        );
        assert!(!report.matched);
        assert!(report.results[0].matched);
        assert!(!report.results[1].matched);
    }
}
