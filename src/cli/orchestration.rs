//! Main workflow orchestration logic
//!
//! Runs the calculation end to end against any [TagHistory] and
//! [OutputPort], decoupled from clap so it can be driven programmatically.
//! [settle] is the single place where failures are turned into "no output".

use std::num::NonZeroUsize;

use tracing::{debug, info, warn};

use crate::analyzer::{BaselineResolver, CommitFilter, ImpactClassifier, Transition};
use crate::boundary::BoundaryWarning;
use crate::config::{Config, UntaggedPolicy};
use crate::domain::{Baseline, BaselineKind, ImpactFlags, SemVer};
use crate::error::{RcAlignError, Result};
use crate::git::TagHistory;
use crate::output::OutputPort;

/// Arguments for the align workflow
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignWorkflowArgs {
    /// Calculate and log, but emit nothing
    pub dry_run: bool,
}

/// Everything that went into a successful calculation
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub baseline: Baseline,
    pub current: SemVer,
    /// Commits in range before automation commits were removed
    pub raw_commits: usize,
    pub depth: NonZeroUsize,
    pub impact: ImpactFlags,
    pub transition: Transition,
    pub next: SemVer,
}

/// How a run ended when it did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum AlignOutcome {
    Calculated(Calculation),
    Skipped(BoundaryWarning),
}

impl AlignOutcome {
    /// The calculated version string, if any
    pub fn next_version(&self) -> Option<String> {
        match self {
            AlignOutcome::Calculated(calc) => Some(calc.next.to_string()),
            AlignOutcome::Skipped(_) => None,
        }
    }
}

/// Calculate the next release candidate without emitting anything
///
/// 1. Resolve the baseline tag
/// 2. Load the commits since it
/// 3. Drop automation commits to get the depth; stop if nothing is left
/// 4. Parse the baseline version
/// 5. Classify impact and apply the transition rules
pub fn calculate<H: TagHistory>(history: &H, config: &Config) -> Result<AlignOutcome> {
    let baseline = BaselineResolver::new(history).resolve()?;
    info!(baseline = baseline.label(), kind = %baseline.kind, "baseline resolved");

    if baseline.kind == BaselineKind::Untagged && config.baseline.untagged == UntaggedPolicy::Defer
    {
        info!("untagged history and defer policy, handing control to native versioning");
        return Ok(AlignOutcome::Skipped(BoundaryWarning::UntaggedHistory));
    }

    let commits = history.commits_since(baseline.tag.as_deref())?;
    let raw_commits = commits.len();
    let filter = CommitFilter::new(&config.bot);
    let depth = filter.filter(&commits);
    info!(raw_commits, depth, "commits since baseline");

    let Some(depth) = NonZeroUsize::new(depth) else {
        return Ok(AlignOutcome::Skipped(BoundaryWarning::NoNewCommits {
            baseline: baseline.label().to_string(),
            raw_commits,
        }));
    };

    let current = SemVer::from_baseline(&baseline)?;
    let impact = ImpactClassifier::new(&config.conventional_commits)?.classify(&commits);
    info!(breaking = impact.breaking, feature = impact.feature, "impact detected");

    let transition = Transition::select(&current, baseline.kind, impact);
    let next = transition.apply(&current, depth)?;
    debug!(%current, %transition, "transition applied");
    info!(next_version = %next, "calculated next version");

    Ok(AlignOutcome::Calculated(Calculation {
        baseline,
        current,
        raw_commits,
        depth,
        impact,
        transition,
        next,
    }))
}

/// Calculate and, unless this is a dry run, emit the version once
pub fn run_align_workflow<H, O>(
    history: &H,
    output: &mut O,
    config: &Config,
    args: &AlignWorkflowArgs,
) -> Result<AlignOutcome>
where
    H: TagHistory,
    O: OutputPort + ?Sized,
{
    let outcome = calculate(history, config)?;

    match &outcome {
        AlignOutcome::Calculated(calc) if args.dry_run => {
            info!(next_version = %calc.next, "dry run, not emitting");
        }
        AlignOutcome::Calculated(calc) => {
            output.emit(&config.output.key, &calc.next.to_string())?;
        }
        AlignOutcome::Skipped(warning) => info!(%warning, "no version emitted"),
    }

    Ok(outcome)
}

/// Top-level handler: every failure becomes a warning and "no output".
///
/// Never propagates; the caller exits successfully either way.
pub fn settle(result: Result<AlignOutcome>) -> Option<AlignOutcome> {
    match result {
        Ok(outcome) => Some(outcome),
        Err(err) => {
            warn_failure(&err);
            None
        }
    }
}

fn warn_failure(err: &RcAlignError) {
    warn!(
        kind = ?err.kind(),
        error = %err,
        "version calculation aborted, falling back to native versioning"
    );
}
