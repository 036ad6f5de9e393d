use crate::domain::{Baseline, TagGlob};
use crate::error::Result;
use crate::git::TagHistory;
use tracing::{debug, info};

/// Decides which tag a calculation is measured from
pub struct BaselineResolver<'a, H: TagHistory> {
    history: &'a H,
}

impl<'a, H: TagHistory> BaselineResolver<'a, H> {
    pub fn new(history: &'a H) -> Self {
        BaselineResolver { history }
    }

    /// Resolve the baseline: nearest RC tag, else nearest stable tag, else none.
    ///
    /// An untagged history is a valid first-release state, not an error.
    pub fn resolve(&self) -> Result<Baseline> {
        let rc = TagGlob::release_candidate()?;
        if let Some(tag) = self.history.find_latest_tag(&rc, None)? {
            debug!(%tag, "release-candidate baseline");
            return Ok(Baseline::release_candidate(tag));
        }

        let stable = TagGlob::stable()?;
        let exclude = TagGlob::rc_exclude()?;
        if let Some(tag) = self.history.find_latest_tag(&stable, Some(&exclude))? {
            debug!(%tag, "stable baseline");
            return Ok(Baseline::stable(tag));
        }

        info!("no tags found, assuming baseline 0.0.0");
        Ok(Baseline::untagged())
    }
}
