//! Domain logic - pure value types independent of git operations

pub mod baseline;
pub mod commit;
pub mod tag;
pub mod version;

pub use baseline::{Baseline, BaselineKind};
pub use commit::{CommitRecord, ImpactFlags};
pub use tag::{highest_tag, TagGlob, RC_EXCLUDE_GLOB, RC_TAG_GLOB, STABLE_TAG_GLOB};
pub use version::SemVer;
