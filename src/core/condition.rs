//! Include/exclude pattern conditions

use crate::core::{error::ConditionError, glob, node::Node, shape};
use serde::Serialize;
use tracing::trace;

/// A runtime condition gating a single string value.
///
/// Accepted YAML shapes:
///
/// ```yaml
/// action: push                # scalar shorthand
/// branch: [main, release/*]   # list shorthand
/// ref:
///   include: [refs/heads/*]
///   exclude: [refs/heads/wip/*]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Condition {
    /// Patterns the value must match (empty = no constraint)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,

    /// Patterns that reject the value outright
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

impl Condition {
    /// Create a condition from include and exclude patterns
    pub fn new(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self { include, exclude }
    }

    /// Check whether a value passes the condition.
    ///
    /// Exclusion always wins; an empty include list admits anything not excluded.
    pub fn matches(&self, value: &str) -> bool {
        if self.excludes(value) {
            return false;
        }
        if self.includes(value) {
            return true;
        }
        self.include.is_empty()
    }

    /// Check whether a value matches any include pattern
    pub fn includes(&self, value: &str) -> bool {
        self.include.iter().any(|pattern| glob::matches(pattern, value))
    }

    /// Check whether a value matches any exclude pattern
    pub fn excludes(&self, value: &str) -> bool {
        self.exclude.iter().any(|pattern| glob::matches(pattern, value))
    }

    /// Whether neither include nor exclude patterns are set
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Parse a condition from YAML text; only YAML syntax errors fail
    pub fn from_yaml(yaml: &str) -> Result<Self, ConditionError> {
        Ok(Self::from_node(&Node::parse(yaml)?))
    }

    /// Build a condition from any accepted shape of a generic node.
    ///
    /// Never fails: null and unrecognized shapes produce an empty condition.
    pub fn from_node(node: &Node) -> Self {
        if let Some(single) = shape::scalar(node) {
            trace!("Condition given as scalar shorthand");
            return Self::new(vec![single], Vec::new());
        }

        let list = shape::string_list(node);
        let structured = Self::structured(node);
        Self::merge(structured, list)
    }

    /// Match the explicit `{include, exclude}` shape
    fn structured(node: &Node) -> Option<Self> {
        if !shape::is_mapping(node) {
            return None;
        }
        let patterns = |name: &str| {
            shape::field(node, name)
                .and_then(shape::string_list)
                .unwrap_or_default()
        };
        Some(Self::new(patterns("include"), patterns("exclude")))
    }

    /// Combine the structured and list shapes; list entries follow structured includes
    fn merge(structured: Option<Self>, list: Option<Vec<String>>) -> Self {
        let mut condition = structured.unwrap_or_default();
        condition.include.extend(list.unwrap_or_default());
        condition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn parse(yaml: &str) -> Condition {
        Condition::from_yaml(yaml).unwrap()
    }

    #[test]
    fn test_empty_condition_matches_everything() {
        let condition = Condition::default();
        assert!(condition.matches("main"));
        assert!(condition.matches(""));
        assert!(condition.matches("refs/heads/feature/x"));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let condition = Condition::new(patterns(&["release/*"]), patterns(&["release/v1"]));
        assert!(!condition.matches("release/v1"));
        assert!(condition.matches("release/v2"));
    }

    #[test]
    fn test_exclude_only_is_open_otherwise() {
        let condition = Condition::new(Vec::new(), patterns(&["pull_request"]));
        assert!(!condition.matches("pull_request"));
        assert!(condition.matches("push"));
    }

    #[test]
    fn test_include_without_match_rejects() {
        let condition = Condition::new(patterns(&["main", "release/*"]), Vec::new());
        assert!(condition.matches("main"));
        assert!(condition.matches("release/1.0"));
        assert!(!condition.matches("develop"));
    }

    #[test]
    fn test_invalid_include_pattern_never_matches() {
        let condition = Condition::new(patterns(&["[main"]), Vec::new());
        assert!(!condition.includes("[main"));
        assert!(!condition.includes("m"));
        // the include list is non-empty, so nothing gets through
        assert!(!condition.matches("main"));
    }

    #[test]
    fn test_invalid_exclude_pattern_does_not_veto() {
        let condition = Condition::new(Vec::new(), patterns(&["{push"]));
        assert!(!condition.excludes("push"));
        assert!(condition.matches("push"));
    }

    #[test]
    fn test_parse_scalar_shorthand() {
        let condition = parse("push");
        assert_eq!(condition.include, patterns(&["push"]));
        assert!(condition.exclude.is_empty());
    }

    #[test]
    fn test_scalar_and_list_shorthand_agree() {
        assert_eq!(parse("main"), parse("[main]"));
    }

    #[test]
    fn test_parse_list_shorthand() {
        let condition = parse("[main, 'release/*']");
        assert_eq!(condition.include, patterns(&["main", "release/*"]));
        assert!(condition.exclude.is_empty());
    }

    #[test]
    fn test_parse_structured() {
        let condition = parse(
            r#"
include: [refs/heads/*]
exclude: [refs/heads/wip/*]
"#,
        );
        assert_eq!(condition.include, patterns(&["refs/heads/*"]));
        assert_eq!(condition.exclude, patterns(&["refs/heads/wip/*"]));
        assert!(condition.matches("refs/heads/main"));
        assert!(!condition.matches("refs/heads/wip/x"));
    }

    #[test]
    fn test_parse_structured_exclude_only() {
        let condition = parse("exclude: [pull_request]");
        assert!(condition.include.is_empty());
        assert_eq!(condition.exclude, patterns(&["pull_request"]));
    }

    #[test]
    fn test_merge_appends_list_after_structured_include() {
        let structured = Condition::new(patterns(&["a"]), patterns(&["b"]));
        let merged = Condition::merge(Some(structured), Some(patterns(&["c"])));
        assert_eq!(merged.include, patterns(&["a", "c"]));
        assert_eq!(merged.exclude, patterns(&["b"]));
    }

    #[test]
    fn test_merge_with_nothing_is_empty() {
        assert!(Condition::merge(None, None).is_empty());
    }

    #[test]
    fn test_unrecognized_shapes_degrade_to_empty() {
        assert!(parse("~").is_empty());
        assert!(parse("{branches: [main]}").is_empty());
        assert!(parse("{include: main}").is_empty());
        assert!(parse("[[a], {b: c}]").is_empty());
    }

    #[test]
    fn test_number_like_scalars_keep_their_text() {
        assert_eq!(parse("True").include, patterns(&["True"]));
        assert_eq!(parse("1.20").include, patterns(&["1.20"]));
        assert_eq!(
            parse("[1.10, 0x1F, 1e3, True]").include,
            patterns(&["1.10", "0x1F", "1e3", "True"])
        );
        assert!(parse("1.20").matches("1.20"));
        assert!(!parse("1.20").matches("1.2"));
    }

    #[test]
    fn test_serialized_form_reparses_to_same_condition() {
        let original = parse("{include: [main, 'release/*', 1.10], exclude: ['release/old', 'null']}");
        let yaml = serde_yaml::to_string(&original).unwrap();
        let reparsed = parse(&yaml);
        assert_eq!(original, reparsed);
    }

    #[test]
    fn test_parse_from_json() {
        let condition = parse(r#"{"include": ["push"], "exclude": ["tag"]}"#);
        assert_eq!(condition.include, patterns(&["push"]));
        assert_eq!(condition.exclude, patterns(&["tag"]));
    }
}
