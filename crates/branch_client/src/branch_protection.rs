//! Branch protection domain types.
//!
//! This module contains the types representing a branch's protection status
//! and the payloads sent to change it, plus the reconciliation applied to the
//! server's reply when a protection update clears the required status check
//! contexts.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "branch_protection_tests.rs"]
mod tests;

/// Protection status of a repository branch.
///
/// A branch either carries a fully-populated protection status or none at
/// all; the API never returns a partial one.
///
/// # Examples
///
/// ```rust
/// use branch_client::{EnforcementLevel, ProtectionStatus, RequiredStatusChecks};
///
/// let protection = ProtectionStatus {
///     enabled: true,
///     required_status_checks: RequiredStatusChecks {
///         enforcement_level: EnforcementLevel::Everyone,
///         contexts: vec!["ci/test".to_string()],
///     },
/// };
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProtectionStatus {
    /// Whether force push protection is enabled
    pub enabled: bool,
    /// The status check policy required before merging
    pub required_status_checks: RequiredStatusChecks,
}

/// The status check policy attached to a protected branch.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct RequiredStatusChecks {
    /// Who the status checks are enforced for
    pub enforcement_level: EnforcementLevel,
    /// Named checks that must report success before a merge is permitted
    pub contexts: Vec<String>,
}

/// Enforcement scope for required status checks.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EnforcementLevel {
    /// Status checks are not enforced
    Off,
    /// Everyone except repository administrators must pass the checks
    NonAdmins,
    /// Everyone, including repository administrators, must pass the checks
    Everyone,
}

/// Wire payload for a protection update.
///
/// The protection endpoints take the edit nested under a `protection` key on
/// the branch PATCH route rather than a dedicated protection route.
#[derive(Debug, Serialize)]
pub(crate) struct ProtectionPatch<'a> {
    pub protection: ProtectionUpdate<'a>,
}

/// The protection edit itself.
#[derive(Debug, Serialize)]
pub(crate) struct ProtectionUpdate<'a> {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_status_checks: Option<StatusChecksUpdate<'a>>,
}

/// Status check settings carried by an enabling protection edit.
#[derive(Debug, Serialize)]
pub(crate) struct StatusChecksUpdate<'a> {
    pub enforcement_level: EnforcementLevel,
    pub contexts: &'a [String],
}

/// Corrects the status check contexts echoed by the server after an update.
///
/// When an update clears `contexts`, GitHub's reply does not currently
/// reflect the value that was applied: the previous, non-empty list comes
/// back instead of the empty one. In exactly that case the reply is
/// overridden with the empty list; every other combination keeps the server's
/// answer.
pub(crate) fn reconcile_contexts(
    requested: &[String],
    previous: &[String],
    returned: Vec<String>,
) -> Vec<String> {
    if requested.is_empty() && !previous.is_empty() {
        return Vec::new();
    }
    returned
}
