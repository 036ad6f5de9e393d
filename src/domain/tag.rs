use crate::error::{RcAlignError, Result};
use regex::Regex;

/// Glob selecting release-candidate tags (`v1.2.3-rc.4`)
pub const RC_TAG_GLOB: &str = "v*-rc*";

/// Glob selecting stable tags; used together with [`RC_EXCLUDE_GLOB`]
pub const STABLE_TAG_GLOB: &str = "v*";

/// Glob removing release-candidate tags from the stable search
pub const RC_EXCLUDE_GLOB: &str = "*-rc*";

/// Tag name glob with `git describe --match` semantics.
///
/// `*` matches any run of characters, `?` matches exactly one, everything
/// else is literal. The whole tag name must match.
#[derive(Debug, Clone)]
pub struct TagGlob {
    pattern: String,
    regex: Regex,
}

impl TagGlob {
    /// Compile a glob pattern
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(RcAlignError::config("Tag glob must not be empty"));
        }

        let escaped = regex::escape(&pattern);
        let regex_pattern = escaped.replace(r"\*", ".*").replace(r"\?", ".");

        let regex = Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| RcAlignError::config(format!("Invalid tag glob '{}': {}", pattern, e)))?;

        Ok(TagGlob { pattern, regex })
    }

    /// Glob for release-candidate tags
    pub fn release_candidate() -> Result<Self> {
        TagGlob::new(RC_TAG_GLOB)
    }

    /// Glob for stable tags (pair with [`TagGlob::rc_exclude`])
    pub fn stable() -> Result<Self> {
        TagGlob::new(STABLE_TAG_GLOB)
    }

    /// Glob excluding release-candidate tags
    pub fn rc_exclude() -> Result<Self> {
        TagGlob::new(RC_EXCLUDE_GLOB)
    }

    /// The glob as written
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Check whether a tag name matches this glob
    pub fn matches(&self, tag: &str) -> bool {
        self.regex.is_match(tag)
    }

    /// Check a tag against an include glob and an optional exclude glob
    pub fn selects(&self, exclude: Option<&TagGlob>, tag: &str) -> bool {
        self.matches(tag) && !exclude.is_some_and(|ex| ex.matches(tag))
    }
}

/// Pick the highest of several tag names pointing at the same commit.
///
/// Tags that parse as semantic versions (after dropping a leading `v`) win
/// over tags that don't; ties fall back to lexical order.
pub fn highest_tag<I, S>(tags: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|t| t.as_ref().to_string())
        .max_by(|a, b| {
            let va = semver::Version::parse(a.trim_start_matches('v')).ok();
            let vb = semver::Version::parse(b.trim_start_matches('v')).ok();
            va.cmp(&vb).then_with(|| a.cmp(b))
        })
}
