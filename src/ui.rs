//! Human-readable run summary on stderr.
//!
//! stdout stays reserved for the `key=value` output line.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::{AlignOutcome, Calculation};

pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("!").yellow().bold(), warning);
}

/// Lines describing a calculation, unstyled
pub fn calculation_lines(calc: &Calculation) -> Vec<String> {
    vec![
        format!("Baseline: {}", calc.baseline),
        format!(
            "Commits: {} ({} ignored as automation)",
            calc.depth,
            calc.raw_commits - calc.depth.get()
        ),
        format!("Impact: {} ({} bump)", calc.impact, calc.transition),
    ]
}

/// Print the outcome of a run
pub fn display_outcome(outcome: &AlignOutcome) {
    match outcome {
        AlignOutcome::Calculated(calc) => {
            for line in calculation_lines(calc) {
                display_status(&line);
            }
            display_success(&format!(
                "Calculated next version: {}",
                style(calc.next).bold()
            ));
        }
        AlignOutcome::Skipped(warning) => display_boundary_warning(warning),
    }
}
