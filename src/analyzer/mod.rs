//! Version calculation pipeline: baseline, filter, classify, calculate

pub mod baseline;
pub mod calculator;
pub mod filter;
pub mod impact;

pub use baseline::BaselineResolver;
pub use calculator::{next_version, Transition};
pub use filter::{CommitFilter, Depth};
pub use impact::ImpactClassifier;
