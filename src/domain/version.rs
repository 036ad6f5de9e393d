use crate::domain::baseline::{Baseline, BaselineKind};
use crate::error::{RcAlignError, Result};
use regex::Regex;
use std::fmt;

/// Semantic version with a release-candidate counter.
///
/// `rc == 0` means "no RC component" and only ever describes a stable
/// baseline; an RC tag always carries `rc >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemVer {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub rc: u64,
}

const RC_TAG_GRAMMAR: &str = r"^v(\d+)\.(\d+)\.(\d+)-rc\.(\d+)$";
const STABLE_TAG_GRAMMAR: &str = r"^v(\d+)\.(\d+)\.(\d+)$";

fn grammar(tag: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| RcAlignError::baseline(tag, e.to_string()))
}

fn component(tag: &str, captures: &regex::Captures<'_>, index: usize) -> Result<u64> {
    let raw = captures.get(index).map(|m| m.as_str()).unwrap_or_default();
    raw.parse::<u64>()
        .map_err(|e| RcAlignError::baseline(tag, format!("component '{}': {}", raw, e)))
}

impl SemVer {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64, rc: u64) -> Self {
        SemVer {
            major,
            minor,
            patch,
            rc,
        }
    }

    /// The implicit baseline of an untagged history
    pub fn zero() -> Self {
        SemVer::new(0, 0, 0, 0)
    }

    /// Parse an RC tag of the exact form `v{major}.{minor}.{patch}-rc.{rc}`
    pub fn parse_rc_tag(tag: &str) -> Result<Self> {
        let captures = grammar(tag, RC_TAG_GRAMMAR)?
            .captures(tag)
            .ok_or_else(|| RcAlignError::baseline(tag, "expected vX.Y.Z-rc.N"))?;

        let version = SemVer::new(
            component(tag, &captures, 1)?,
            component(tag, &captures, 2)?,
            component(tag, &captures, 3)?,
            component(tag, &captures, 4)?,
        );

        if version.rc == 0 {
            return Err(RcAlignError::baseline(tag, "RC number must be at least 1"));
        }

        Ok(version)
    }

    /// Parse a stable tag of the exact form `v{major}.{minor}.{patch}`
    pub fn parse_stable_tag(tag: &str) -> Result<Self> {
        let captures = grammar(tag, STABLE_TAG_GRAMMAR)?
            .captures(tag)
            .ok_or_else(|| RcAlignError::baseline(tag, "expected vX.Y.Z"))?;

        Ok(SemVer::new(
            component(tag, &captures, 1)?,
            component(tag, &captures, 2)?,
            component(tag, &captures, 3)?,
            0,
        ))
    }

    /// Derive the current version from a resolved baseline
    pub fn from_baseline(baseline: &Baseline) -> Result<Self> {
        match (&baseline.kind, baseline.tag.as_deref()) {
            (BaselineKind::Untagged, _) => Ok(SemVer::zero()),
            (BaselineKind::ReleaseCandidate, Some(tag)) => SemVer::parse_rc_tag(tag),
            (BaselineKind::Stable, Some(tag)) => SemVer::parse_stable_tag(tag),
            (kind, None) => Err(RcAlignError::baseline(
                "<none>",
                format!("{} baseline carries no tag", kind),
            )),
        }
    }

    /// Whether this version carries an RC component
    pub fn is_release_candidate(&self) -> bool {
        self.rc > 0
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.is_release_candidate() {
            write!(f, "-rc.{}", self.rc)?;
        }
        Ok(())
    }
}
