use crate::domain::{highest_tag, CommitRecord, TagGlob};
use crate::error::{RcAlignError, Result};
use crate::git::TagHistory;
use git2::{Oid, Repository as Git2Repo, Sort};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, instrument};

/// Tagged commits considered before picking the nearest, as `git describe`
const DESCRIBE_CANDIDATES: usize = 10;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            RcAlignError::history(format!("Not in a git repository '{}': {}", path.display(), e))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Map each tagged commit to the selected tag names pointing at it
    fn tagged_commits(
        &self,
        pattern: &TagGlob,
        exclude: Option<&TagGlob>,
    ) -> Result<HashMap<Oid, Vec<String>>> {
        let mut tagged: HashMap<Oid, Vec<String>> = HashMap::new();
        let names = self.repo.tag_names(None)?;

        for name in names.iter().flatten() {
            if !pattern.selects(exclude, name) {
                continue;
            }

            let reference = match self.repo.find_reference(&format!("refs/tags/{}", name)) {
                Ok(reference) => reference,
                Err(e) => {
                    debug!(tag = name, error = %e, "skipping unreadable tag");
                    continue;
                }
            };

            // tags on trees or blobs can't be a baseline
            match reference.peel_to_commit() {
                Ok(commit) => tagged.entry(commit.id()).or_default().push(name.to_string()),
                Err(e) => debug!(tag = name, error = %e, "skipping tag not pointing at a commit"),
            }
        }

        Ok(tagged)
    }

    fn head_walk(&self) -> Result<git2::Revwalk<'_>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk
            .push_head()
            .map_err(|e| RcAlignError::history(format!("Cannot resolve HEAD: {}", e)))?;
        Ok(revwalk)
    }

    /// Number of commits reachable from HEAD but not from `oid`
    fn distance_from_head(&self, oid: Oid) -> Result<usize> {
        let mut revwalk = self.head_walk()?;
        revwalk.hide(oid)?;

        let mut distance = 0;
        for commit in revwalk {
            commit?;
            distance += 1;
        }
        Ok(distance)
    }
}

impl TagHistory for Git2Repository {
    #[instrument(skip(self, pattern, exclude), fields(pattern = pattern.as_str()))]
    fn find_latest_tag(
        &self,
        pattern: &TagGlob,
        exclude: Option<&TagGlob>,
    ) -> Result<Option<String>> {
        let tagged = self.tagged_commits(pattern, exclude)?;
        if tagged.is_empty() {
            debug!("no tags match");
            return Ok(None);
        }

        let mut candidates = Vec::new();
        for oid in self.head_walk()? {
            let oid = oid?;
            if let Some(names) = tagged.get(&oid) {
                candidates.push((oid, names));
                if candidates.len() == DESCRIBE_CANDIDATES {
                    break;
                }
            }
        }

        // fewest commits since the tag wins; ties keep walk order
        let mut nearest: Option<(usize, Oid, &Vec<String>)> = None;
        for (oid, names) in candidates {
            let distance = self.distance_from_head(oid)?;
            if nearest.map_or(true, |(best, _, _)| distance < best) {
                nearest = Some((distance, oid, names));
            }
        }

        match nearest {
            Some((distance, oid, names)) => {
                let tag = highest_tag(names);
                debug!(?tag, commit = %oid, distance, "nearest matching tag");
                Ok(tag)
            }
            None => {
                debug!("no matching tag reachable from HEAD");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self))]
    fn commits_since(&self, baseline: Option<&str>) -> Result<Vec<CommitRecord>> {
        let mut revwalk = self.head_walk()?;

        if let Some(tag) = baseline {
            let commit = self
                .repo
                .find_reference(&format!("refs/tags/{}", tag))
                .and_then(|reference| reference.peel_to_commit())
                .map_err(|e| RcAlignError::history(format!("Cannot find tag '{}': {}", tag, e)))?;
            revwalk.hide(commit.id())?;
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();
            commits.push(CommitRecord::from_message(message));
        }

        commits.reverse();
        debug!(count = commits.len(), "commits in range");
        Ok(commits)
    }
}
