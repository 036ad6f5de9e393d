use crate::config::ConventionalCommitsConfig;
use crate::domain::{CommitRecord, ImpactFlags};
use crate::error::{RcAlignError, Result};
use regex::Regex;

/// Scans commit messages for breaking-change and feature markers
#[derive(Debug, Clone)]
pub struct ImpactClassifier {
    breaking: Option<Regex>,
    feature: Option<Regex>,
    indicators: Vec<String>,
}

/// Build `^(t1|t2)(\(scope\))?<suffix>:` anchored at any line start.
/// An empty type list yields no regex, so it never matches.
fn prefix_regex(types: &[String], suffix: &str) -> Result<Option<Regex>> {
    let alternatives: Vec<String> = types
        .iter()
        .filter(|t| !t.is_empty())
        .map(|t| regex::escape(t))
        .collect();
    if alternatives.is_empty() {
        return Ok(None);
    }

    let pattern = format!(
        r"(?m)^({})(\([^)\n]*\))?{}:",
        alternatives.join("|"),
        regex::escape(suffix)
    );
    Regex::new(&pattern)
        .map(Some)
        .map_err(|e| RcAlignError::config(format!("Invalid commit type pattern: {}", e)))
}

impl ImpactClassifier {
    pub fn new(config: &ConventionalCommitsConfig) -> Result<Self> {
        Ok(ImpactClassifier {
            breaking: prefix_regex(&config.breaking_types, "!")?,
            feature: prefix_regex(&config.feature_types, "")?,
            indicators: config
                .breaking_change_indicators
                .iter()
                .filter(|i| !i.is_empty())
                .cloned()
                .collect(),
        })
    }

    /// Whether a single commit message marks a breaking change
    pub fn is_breaking(&self, message: &str) -> bool {
        self.breaking.as_ref().is_some_and(|re| re.is_match(message))
            || self
                .indicators
                .iter()
                .any(|indicator| message.contains(indicator.as_str()))
    }

    /// Whether a single commit message marks a feature
    pub fn is_feature(&self, message: &str) -> bool {
        self.feature.as_ref().is_some_and(|re| re.is_match(message))
    }

    /// Classify a whole commit range.
    ///
    /// Works on the unfiltered range: automation commits carry no impact
    /// prefixes, so they cannot raise either flag.
    pub fn classify(&self, commits: &[CommitRecord]) -> ImpactFlags {
        commits
            .iter()
            .fold(ImpactFlags::default(), |flags, commit| ImpactFlags {
                breaking: flags.breaking || self.is_breaking(&commit.body),
                feature: flags.feature || self.is_feature(&commit.body),
            })
    }
}
