#![allow(dead_code)]

use git2::{Commit, ObjectType, Oid, Repository, Signature, Time};
use tempfile::TempDir;

/// Throwaway git repository with helpers for building history
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        TestRepo { dir, repo }
    }

    fn signature(&self) -> Signature<'static> {
        Signature::now("Test Author", "test@example.com").unwrap()
    }

    fn write(&self, update_ref: Option<&str>, message: &str, parent: Option<Oid>) -> Oid {
        let sig = self.signature();
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let parent = parent.map(|oid| self.repo.find_commit(oid).unwrap());
        let parents: Vec<&Commit> = parent.iter().collect();
        self.repo
            .commit(update_ref, &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    fn head(&self) -> Option<Oid> {
        self.repo.head().ok().and_then(|h| h.target())
    }

    /// Commit on top of HEAD
    pub fn commit(&self, message: &str) -> Oid {
        self.write(Some("HEAD"), message, self.head())
    }

    /// Commit on top of HEAD without moving HEAD
    pub fn dangling_commit(&self, message: &str) -> Oid {
        self.write(None, message, self.head())
    }

    /// Commit with explicit parents and timestamp, leaving HEAD alone
    pub fn commit_at(&self, message: &str, parents: &[Oid], seconds: i64) -> Oid {
        let sig = Signature::new("Test Author", "test@example.com", &Time::new(seconds, 0)).unwrap();
        let tree_id = self.repo.index().unwrap().write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let parents: Vec<Commit> = parents
            .iter()
            .map(|oid| self.repo.find_commit(*oid).unwrap())
            .collect();
        let parents: Vec<&Commit> = parents.iter().collect();
        self.repo
            .commit(None, &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    /// Point a detached HEAD at `oid`
    pub fn checkout(&self, oid: Oid) {
        self.repo.set_head_detached(oid).unwrap();
    }

    /// Lightweight tag at HEAD
    pub fn tag(&self, name: &str) {
        let oid = self.head().unwrap();
        self.tag_at(name, oid);
    }

    pub fn tag_at(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, Some(ObjectType::Commit)).unwrap();
        self.repo.tag_lightweight(name, &object, false).unwrap();
    }

    /// Annotated tag at HEAD
    pub fn annotated_tag(&self, name: &str) {
        let object = self
            .repo
            .find_object(self.head().unwrap(), Some(ObjectType::Commit))
            .unwrap();
        self.repo
            .tag(name, &object, &self.signature(), "release", false)
            .unwrap();
    }
}
