// src/domain/version.rs
//! Host version compatibility rule.
//!
//! A host version is acceptable when it shares the major version of the
//! configured minimum and is not older than it (semantic versioning).
use semver::Version;
use tracing::debug;

use crate::domain::error::{DomainError, DomainResult};

/// Core comparison: same major, and observed >= minimum.
pub fn compare_against_minimum(minimum: &Version, observed: &Version) -> bool {
    observed.major == minimum.major && observed >= minimum
}

/// Parse both version strings and apply the rule.
///
/// An unparsable version never passes, it is reported as incompatible
/// rather than as an error.
pub fn compatible_with_minimum(minimum: &str, observed: &str) -> bool {
    match (parse_version(minimum), parse_version(observed)) {
        (Ok(min), Ok(obs)) => compare_against_minimum(&min, &obs),
        (min, obs) => {
            debug!(
                "Version comparison skipped, unparsable input: minimum={:?} observed={:?}",
                min.err(),
                obs.err()
            );
            false
        }
    }
}

pub fn parse_version(version: &str) -> DomainResult<Version> {
    Version::parse(version.trim())
        .map_err(|e| DomainError::InvalidVersion(format!("{}: {}", version, e)))
}
