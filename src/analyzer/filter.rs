use crate::config::BotConfig;
use crate::domain::CommitRecord;

/// Count of real (non-automation) commits since the baseline
pub type Depth = usize;

/// Removes the automation's own commits from the commit count.
///
/// Without this, the version-bump commit the automation pushes would count
/// as new work on the next run and the RC number would climb on every
/// pipeline run with no human activity.
#[derive(Debug, Clone)]
pub struct CommitFilter {
    markers: Vec<String>,
}

impl CommitFilter {
    pub fn new(config: &BotConfig) -> Self {
        CommitFilter {
            markers: config
                .markers
                .iter()
                .filter(|m| !m.is_empty())
                .cloned()
                .collect(),
        }
    }

    /// Whether a commit was authored by the automation
    pub fn is_bot_commit(&self, commit: &CommitRecord) -> bool {
        self.markers
            .iter()
            .any(|marker| commit.subject.contains(marker.as_str()))
    }

    /// Number of commits surviving the filter
    pub fn filter(&self, commits: &[CommitRecord]) -> Depth {
        commits.iter().filter(|c| !self.is_bot_commit(c)).count()
    }
}

impl Default for CommitFilter {
    fn default() -> Self {
        CommitFilter::new(&BotConfig::default())
    }
}
