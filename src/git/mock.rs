use crate::domain::{highest_tag, CommitRecord, TagGlob};
use crate::error::{RcAlignError, Result};
use crate::git::TagHistory;
use std::collections::HashMap;

/// Mock repository with a linear history, for testing without git
///
/// Commits are appended oldest first; tags attach to the most recent commit
/// at the time they are added.
#[derive(Debug, Default)]
pub struct MockRepository {
    commits: Vec<CommitRecord>,
    tags: HashMap<String, usize>,
    failure: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository::default()
    }

    /// Append a commit on top of HEAD
    pub fn commit(&mut self, message: impl Into<String>) -> &mut Self {
        self.commits.push(CommitRecord::from_message(message));
        self
    }

    /// Tag the current HEAD commit
    ///
    /// Tagging an empty history tags a virtual root, so every later commit
    /// is in range.
    pub fn tag(&mut self, name: impl Into<String>) -> &mut Self {
        self.tags.insert(name.into(), self.commits.len());
        self
    }

    /// Make every query fail with `reason`
    pub fn fail_with(&mut self, reason: impl Into<String>) -> &mut Self {
        self.failure = Some(reason.into());
        self
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(reason) => Err(RcAlignError::history(reason.clone())),
            None => Ok(()),
        }
    }
}

impl TagHistory for MockRepository {
    fn find_latest_tag(
        &self,
        pattern: &TagGlob,
        exclude: Option<&TagGlob>,
    ) -> Result<Option<String>> {
        self.check()?;

        // position p means "tagged after p commits"; walk from HEAD backwards
        for position in (0..=self.commits.len()).rev() {
            let names = self
                .tags
                .iter()
                .filter(|(name, at)| **at == position && pattern.selects(exclude, name))
                .map(|(name, _)| name);
            if let Some(tag) = highest_tag(names) {
                return Ok(Some(tag));
            }
        }

        Ok(None)
    }

    fn commits_since(&self, baseline: Option<&str>) -> Result<Vec<CommitRecord>> {
        self.check()?;

        let start = match baseline {
            Some(tag) => *self
                .tags
                .get(tag)
                .ok_or_else(|| RcAlignError::history(format!("Cannot find tag '{}'", tag)))?,
            None => 0,
        };

        Ok(self.commits[start..].to_vec())
    }
}
