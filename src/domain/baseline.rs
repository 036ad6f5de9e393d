use std::fmt;

/// What kind of tag the calculation is measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineKind {
    /// A `vX.Y.Z` release tag
    Stable,
    /// A `vX.Y.Z-rc.N` tag
    ReleaseCandidate,
    /// No tag in history; the baseline is `0.0.0`
    Untagged,
}

impl fmt::Display for BaselineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaselineKind::Stable => write!(f, "stable"),
            BaselineKind::ReleaseCandidate => write!(f, "release-candidate"),
            BaselineKind::Untagged => write!(f, "untagged"),
        }
    }
}

/// The tag a calculation measures its commit range from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Baseline {
    pub tag: Option<String>,
    pub kind: BaselineKind,
}

impl Baseline {
    pub fn stable(tag: impl Into<String>) -> Self {
        Baseline {
            tag: Some(tag.into()),
            kind: BaselineKind::Stable,
        }
    }

    pub fn release_candidate(tag: impl Into<String>) -> Self {
        Baseline {
            tag: Some(tag.into()),
            kind: BaselineKind::ReleaseCandidate,
        }
    }

    pub fn untagged() -> Self {
        Baseline {
            tag: None,
            kind: BaselineKind::Untagged,
        }
    }

    /// The tag name, or `0.0.0` when untagged
    pub fn label(&self) -> &str {
        self.tag.as_deref().unwrap_or("0.0.0")
    }
}

impl fmt::Display for Baseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.kind)
    }
}
