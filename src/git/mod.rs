//! Tag and commit history abstraction layer
//!
//! The core never talks to git directly. It asks a [TagHistory] for the
//! latest tag matching a glob and for the commits since a baseline.
//!
//! - [repository::Git2Repository]: real history read with the `git2` crate
//! - [mock::MockRepository]: linear in-memory history for testing
//!
//! ```rust
//! # use rc_align::git::TagHistory;
//! # use rc_align::domain::TagGlob;
//! # fn example<H: TagHistory>(history: &H) -> rc_align::Result<()> {
//! let rc = TagGlob::release_candidate()?;
//! let latest = history.find_latest_tag(&rc, None)?;
//! let commits = history.commits_since(latest.as_deref())?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::{CommitRecord, TagGlob};
use crate::error::Result;

/// Read-only view of a repository's tag and commit history
///
/// ## Error Handling
///
/// Implementations report unreachable or broken history as
/// [crate::error::RcAlignError::History] or [crate::error::RcAlignError::Git];
/// both classify as a history query failure.
pub trait TagHistory {
    /// Find the nearest tag reachable from HEAD matching `pattern`
    ///
    /// Mirrors `git describe --tags --match <pattern> --exclude <exclude>
    /// --abbrev=0`: among the tagged commits reachable from HEAD, the one
    /// with the fewest commits between it and HEAD wins. On a linear history
    /// that is simply the first tagged commit walking back from HEAD.
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - The tag name
    /// * `Ok(None)` - No reachable tag matches
    /// * `Err` - If history cannot be read
    fn find_latest_tag(&self, pattern: &TagGlob, exclude: Option<&TagGlob>)
        -> Result<Option<String>>;

    /// Commits reachable from HEAD but not from `baseline`, oldest first
    ///
    /// With `baseline = None` every commit reachable from HEAD is returned.
    fn commits_since(&self, baseline: Option<&str>) -> Result<Vec<CommitRecord>>;

    /// Subject lines of [TagHistory::commits_since]
    fn commit_subjects_since(&self, baseline: Option<&str>) -> Result<Vec<String>> {
        Ok(self
            .commits_since(baseline)?
            .into_iter()
            .map(|c| c.subject)
            .collect())
    }

    /// Full messages of [TagHistory::commits_since]
    fn commit_messages_since(&self, baseline: Option<&str>) -> Result<Vec<String>> {
        Ok(self
            .commits_since(baseline)?
            .into_iter()
            .map(|c| c.body)
            .collect())
    }
}
