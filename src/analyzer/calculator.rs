//! Next-version transition rules.
//!
//! Rules are evaluated in priority order:
//!
//! 1. **Breaking**: bump major, reset minor and patch, RC restarts at `depth`.
//!    Applies to `0.x` the same as to any other major.
//! 2. **Feature**: on a stable baseline, or when the RC lineage sits on a
//!    patch-level version, bump minor and restart RC at `depth`. Otherwise the
//!    lineage is already minor-level and the RC accumulates.
//! 3. **Fix/other**: on a stable baseline bump patch and restart RC at `depth`;
//!    otherwise accumulate.
//!
//! The result is always a release candidate. An untagged baseline is treated
//! like a stable `0.0.0`. A component that would overflow `u64` fails the run
//! as an unparseable baseline rather than wrapping.

use crate::domain::{BaselineKind, ImpactFlags, SemVer};
use crate::error::{RcAlignError, Result};
use std::fmt;
use std::num::NonZeroUsize;

/// Which rule produced the next version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Major,
    Minor,
    Patch,
    /// Keep major/minor/patch, add `depth` to the RC counter
    Accumulate,
}

impl Transition {
    /// Pick the rule for the given inputs
    pub fn select(current: &SemVer, kind: BaselineKind, impact: ImpactFlags) -> Self {
        let fresh_lineage = matches!(kind, BaselineKind::Stable | BaselineKind::Untagged);

        if impact.breaking {
            Transition::Major
        } else if impact.feature {
            if fresh_lineage || current.patch > 0 {
                Transition::Minor
            } else {
                Transition::Accumulate
            }
        } else if fresh_lineage {
            Transition::Patch
        } else {
            Transition::Accumulate
        }
    }

    /// Apply this rule to `current`, producing a new version
    pub fn apply(self, current: &SemVer, depth: NonZeroUsize) -> Result<SemVer> {
        let depth = u64::try_from(depth.get()).map_err(|_| overflow(current))?;
        let bump = |component: u64, by: u64| {
            component
                .checked_add(by)
                .ok_or_else(|| overflow(current))
        };

        Ok(match self {
            Transition::Major => SemVer::new(bump(current.major, 1)?, 0, 0, depth),
            Transition::Minor => SemVer::new(current.major, bump(current.minor, 1)?, 0, depth),
            Transition::Patch => SemVer::new(
                current.major,
                current.minor,
                bump(current.patch, 1)?,
                depth,
            ),
            Transition::Accumulate => SemVer::new(
                current.major,
                current.minor,
                current.patch,
                bump(current.rc, depth)?,
            ),
        })
    }
}

fn overflow(current: &SemVer) -> RcAlignError {
    RcAlignError::baseline(format!("v{}", current), "version component overflow")
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Major => write!(f, "major"),
            Transition::Minor => write!(f, "minor"),
            Transition::Patch => write!(f, "patch"),
            Transition::Accumulate => write!(f, "accumulate"),
        }
    }
}

/// Compute the next release candidate.
///
/// `depth` is non-zero by construction: an empty range is a no-op the caller
/// handles before getting here.
pub fn next_version(
    current: &SemVer,
    kind: BaselineKind,
    depth: NonZeroUsize,
    impact: ImpactFlags,
) -> Result<SemVer> {
    Transition::select(current, kind, impact).apply(current, depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    const FIX: ImpactFlags = ImpactFlags {
        breaking: false,
        feature: false,
    };
    const FEATURE: ImpactFlags = ImpactFlags {
        breaking: false,
        feature: true,
    };
    const BREAKING: ImpactFlags = ImpactFlags {
        breaking: true,
        feature: false,
    };

    fn depth(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn next(current: SemVer, kind: BaselineKind, n: usize, impact: ImpactFlags) -> String {
        next_version(&current, kind, depth(n), impact)
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_fix_on_stable_bumps_patch() {
        let v = SemVer::new(0, 1, 0, 0);
        assert_eq!(next(v, BaselineKind::Stable, 1, FIX), "0.1.1-rc.1");
        assert_eq!(next(v, BaselineKind::Stable, 4, FIX), "0.1.1-rc.4");
    }

    #[test]
    fn test_fix_on_rc_accumulates() {
        let v = SemVer::new(1, 2, 3, 5);
        assert_eq!(
            next(v, BaselineKind::ReleaseCandidate, 3, FIX),
            "1.2.3-rc.8"
        );
    }

    #[test]
    fn test_feature_on_rc_patch_zero_accumulates() {
        let v = SemVer::new(0, 2, 0, 1);
        assert_eq!(
            next(v, BaselineKind::ReleaseCandidate, 1, FEATURE),
            "0.2.0-rc.2"
        );
    }

    #[test]
    fn test_feature_on_rc_patch_nonzero_bumps_minor() {
        let v = SemVer::new(0, 3, 1, 2);
        assert_eq!(
            next(v, BaselineKind::ReleaseCandidate, 2, FEATURE),
            "0.4.0-rc.2"
        );
    }

    #[test]
    fn test_feature_on_stable_bumps_minor() {
        let v = SemVer::new(1, 0, 0, 0);
        assert_eq!(next(v, BaselineKind::Stable, 3, FEATURE), "1.1.0-rc.3");
    }

    #[test]
    fn test_breaking_bumps_major_from_rc() {
        let v = SemVer::new(1, 4, 2, 3);
        assert_eq!(
            next(v, BaselineKind::ReleaseCandidate, 1, BREAKING),
            "2.0.0-rc.1"
        );
    }

    #[test]
    fn test_breaking_bumps_major_on_zero_major() {
        let v = SemVer::new(0, 9, 4, 7);
        assert_eq!(
            next(v, BaselineKind::ReleaseCandidate, 2, BREAKING),
            "1.0.0-rc.2"
        );
        assert_eq!(next(v, BaselineKind::Stable, 5, BREAKING), "1.0.0-rc.5");
    }

    #[test]
    fn test_breaking_beats_feature() {
        let both = ImpactFlags {
            breaking: true,
            feature: true,
        };
        let v = SemVer::new(0, 2, 0, 1);
        assert_eq!(
            Transition::select(&v, BaselineKind::ReleaseCandidate, both),
            Transition::Major
        );
    }

    #[test]
    fn test_untagged_behaves_like_stable_zero() {
        let zero = SemVer::zero();
        assert_eq!(next(zero, BaselineKind::Untagged, 1, FIX), "0.0.1-rc.1");
        assert_eq!(next(zero, BaselineKind::Untagged, 2, FEATURE), "0.1.0-rc.2");
        assert_eq!(next(zero, BaselineKind::Untagged, 3, BREAKING), "1.0.0-rc.3");
    }

    #[test]
    fn test_result_is_always_release_candidate() {
        let kinds = [
            BaselineKind::Stable,
            BaselineKind::ReleaseCandidate,
            BaselineKind::Untagged,
        ];
        for kind in kinds {
            for impact in [FIX, FEATURE, BREAKING] {
                let v = next_version(&SemVer::new(2, 1, 1, 1), kind, depth(1), impact).unwrap();
                assert!(v.is_release_candidate(), "{:?}/{:?} -> {}", kind, impact, v);
            }
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let v = SemVer::new(1, 2, 3, 4);
        let _ = next_version(&v, BaselineKind::ReleaseCandidate, depth(1), BREAKING);
        assert_eq!(v, SemVer::new(1, 2, 3, 4));
    }

    #[test]
    fn test_major_overflow_is_unparseable_baseline() {
        let v = SemVer::new(u64::MAX, 0, 0, 0);
        let err = next_version(&v, BaselineKind::Stable, depth(1), BREAKING).unwrap_err();
        assert_eq!(err.kind(), FailureKind::UnparseableBaseline);
        assert!(err.to_string().contains("overflow"));
    }

    #[test]
    fn test_rc_accumulate_overflow_is_unparseable_baseline() {
        let v = SemVer::new(1, 0, 0, u64::MAX);
        let err = next_version(&v, BaselineKind::ReleaseCandidate, depth(1), FIX).unwrap_err();
        assert_eq!(err.kind(), FailureKind::UnparseableBaseline);
    }

    #[test]
    fn test_largest_components_that_still_fit() {
        let v = SemVer::new(1, 0, 0, u64::MAX - 2);
        assert_eq!(
            next(v, BaselineKind::ReleaseCandidate, 2, FIX),
            format!("1.0.0-rc.{}", u64::MAX)
        );
        let v = SemVer::new(1, 0, u64::MAX, 0);
        assert!(next_version(&v, BaselineKind::Stable, depth(1), FIX).is_err());
        assert_eq!(next(v, BaselineKind::Stable, 1, FEATURE), "1.1.0-rc.1");
    }

    #[test]
    fn test_transition_display() {
        assert_eq!(Transition::Accumulate.to_string(), "accumulate");
        assert_eq!(Transition::Major.to_string(), "major");
    }
}
