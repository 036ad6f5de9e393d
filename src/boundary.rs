use std::fmt;

/// Terminal states that end a run without a version and without an error.
/// These are reported to the user but never block the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Every commit since the baseline was authored by the automation itself
    NoNewCommits {
        baseline: String,
        raw_commits: usize,
    },
    /// No tag of any kind exists and the configured policy is to defer
    UntaggedHistory,
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoNewCommits {
                baseline,
                raw_commits,
            } => {
                write!(f, "No new commits since '{}'", baseline)?;
                if *raw_commits > 0 {
                    write!(f, " ({} automation commits ignored)", raw_commits)?;
                }
                Ok(())
            }
            BoundaryWarning::UntaggedHistory => {
                write!(
                    f,
                    "No release tags found, handing control to native versioning"
                )
            }
        }
    }
}
