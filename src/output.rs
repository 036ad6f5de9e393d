//! Destinations for the computed version
//!
//! A run emits at most one `key=value` pair and only when a version was
//! calculated. Consumers must treat a missing key as "use native versioning".

use crate::error::{RcAlignError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable GitHub Actions points at its step output file
pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Receives the computed version
pub trait OutputPort {
    fn emit(&mut self, key: &str, value: &str) -> Result<()>;
}

fn check_pair(key: &str, value: &str) -> Result<()> {
    if key.is_empty() || key.contains(['=', '\n', '\r']) {
        return Err(RcAlignError::output(format!("Invalid output key '{}'", key)));
    }
    if value.contains(['\n', '\r']) {
        return Err(RcAlignError::output(format!(
            "Output value for '{}' spans multiple lines",
            key
        )));
    }
    Ok(())
}

/// Appends `key=value` lines to a GitHub Actions output file
#[derive(Debug, Clone)]
pub struct GithubOutput {
    path: PathBuf,
}

impl GithubOutput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        GithubOutput { path: path.into() }
    }

    /// Use the file named by `GITHUB_OUTPUT`, if set and non-empty
    pub fn from_env() -> Option<Self> {
        std::env::var_os(GITHUB_OUTPUT_ENV)
            .filter(|p| !p.is_empty())
            .map(GithubOutput::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputPort for GithubOutput {
    fn emit(&mut self, key: &str, value: &str) -> Result<()> {
        check_pair(key, value)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                RcAlignError::output(format!("Cannot open '{}': {}", self.path.display(), e))
            })?;
        writeln!(file, "{}={}", key, value)?;
        Ok(())
    }
}

/// Prints `key=value` to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOutput;

impl OutputPort for StdoutOutput {
    fn emit(&mut self, key: &str, value: &str) -> Result<()> {
        check_pair(key, value)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}={}", key, value)?;
        Ok(())
    }
}

/// Records emitted pairs in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryOutput {
    entries: Vec<(String, String)>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        MemoryOutput::default()
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// The last value emitted under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl OutputPort for MemoryOutput {
    fn emit(&mut self, key: &str, value: &str) -> Result<()> {
        check_pair(key, value)?;
        self.entries.push((key.to_string(), value.to_string()));
        Ok(())
    }
}
