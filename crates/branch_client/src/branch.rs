//! Branch domain types and protection operations.
//!
//! This module contains the branch resource as returned by the GitHub REST
//! API and the two state-changing operations on it: enabling and disabling
//! force push protection.

use std::collections::HashMap;
use std::fmt;

use http::header::ACCEPT;
use http::{HeaderMap, HeaderValue, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use url::Url;

use crate::branch_protection::{
    reconcile_contexts, EnforcementLevel, ProtectionPatch, ProtectionStatus, ProtectionUpdate,
    StatusChecksUpdate,
};
use crate::commit::BranchCommit;
use crate::errors::Error;
use crate::{RestClient, RestResponse};

#[cfg(test)]
#[path = "branch_tests.rs"]
mod tests;

/// Media type selecting the protection preview representation.
///
/// The Accept header should become unnecessary once the protection feature is
/// out of preview mode.
pub const PROTECTION_PREVIEW_MEDIA_TYPE: &str = "application/vnd.github.loki-preview+json";

/// Builds the header map selecting the protection preview representation.
pub(crate) fn preview_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(PROTECTION_PREVIEW_MEDIA_TYPE));
    headers
}

/// A branch on a GitHub repository.
///
/// Branches are constructed from the server's JSON payload, and every
/// successful update replaces the value wholesale from the response; no field
/// is mutated in place.
///
/// # Examples
///
/// ```rust
/// use branch_client::Branch;
///
/// let branch: Branch = serde_json::from_value(serde_json::json!({
///     "name": "main",
///     "_links": {
///         "self": "https://api.github.com/repos/acme/widgets/branches/main"
///     }
/// }))?;
///
/// assert_eq!(branch.name, "main");
/// assert!(branch.protection.is_none());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Branch {
    /// Name of the branch
    pub name: String,
    /// The branch's current head commit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<BranchCommit>,
    /// Relation name to URL mapping from the payload's `_links` object
    #[serde(rename = "_links", default, skip_serializing_if = "HashMap::is_empty")]
    pub links: HashMap<String, Url>,
    /// Protection status; absent when the server did not include one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protection: Option<ProtectionStatus>,
}

impl Branch {
    /// Returns the branch's own resource URL from the `_links` object.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingLink` if the payload the branch was built from
    /// carried no `self` link.
    pub fn self_link(&self) -> Result<&Url, Error> {
        self.links.get("self").ok_or(Error::MissingLink("self"))
    }

    /// Enables force push protection and configures status check enforcement.
    ///
    /// Sends the edit as a PATCH to the branch's `self` link and replaces the
    /// local state from the response. When the edit clears the status check
    /// contexts, the server's echoed contexts are reconciled against the
    /// request before the new state is committed.
    ///
    /// # Arguments
    ///
    /// * `rest` - The REST collaborator the request is sent through.
    /// * `enforcement` - The enforcement level of the status checks.
    /// * `status_checks` - Names of the status checks that must pass before
    ///   merging. May be empty.
    ///
    /// # Errors
    ///
    /// Returns `Error::Request` for any response status other than 200, and
    /// `Error::InvalidResponse` if a 200 reply carries no protection object.
    /// In both cases the branch's local state is left unchanged.
    #[instrument(skip(self, rest, status_checks), fields(branch = %self.name, enforcement = ?enforcement))]
    pub async fn protect<C>(
        &mut self,
        rest: &C,
        enforcement: EnforcementLevel,
        status_checks: Vec<String>,
    ) -> Result<ProtectionStatus, Error>
    where
        C: RestClient + ?Sized,
    {
        let edit = ProtectionPatch {
            protection: ProtectionUpdate {
                enabled: true,
                required_status_checks: Some(StatusChecksUpdate {
                    enforcement_level: enforcement,
                    contexts: &status_checks,
                }),
            },
        };
        let body = self.patch_self(rest, &edit).await?;

        let previous_contexts = self
            .protection
            .as_ref()
            .map(|protection| protection.required_status_checks.contexts.as_slice())
            .unwrap_or_default();

        let mut updated: Branch = serde_json::from_value(body)?;
        let Some(protection) = updated.protection.as_mut() else {
            return Err(Error::InvalidResponse);
        };
        let returned = std::mem::take(&mut protection.required_status_checks.contexts);
        protection.required_status_checks.contexts =
            reconcile_contexts(&status_checks, previous_contexts, returned);

        let applied = protection.clone();
        *self = updated;
        info!(
            contexts = applied.required_status_checks.contexts.len(),
            "Branch protection applied"
        );
        Ok(applied)
    }

    /// Disables force push protection on this branch.
    ///
    /// Sends `{"protection": {"enabled": false}}` to the branch's `self` link
    /// and replaces the local state from the response.
    ///
    /// # Errors
    ///
    /// Returns `Error::Request` for any response status other than 200; the
    /// branch's local state is left unchanged in that case.
    #[instrument(skip(self, rest), fields(branch = %self.name))]
    pub async fn unprotect<C>(&mut self, rest: &C) -> Result<(), Error>
    where
        C: RestClient + ?Sized,
    {
        let edit = ProtectionPatch {
            protection: ProtectionUpdate {
                enabled: false,
                required_status_checks: None,
            },
        };
        let body = self.patch_self(rest, &edit).await?;

        let updated: Branch = serde_json::from_value(body)?;
        *self = updated;
        info!("Branch protection disabled");
        Ok(())
    }

    /// Sends a protection edit to the branch's `self` link and returns the
    /// response body of a 200 reply.
    async fn patch_self<C>(
        &self,
        rest: &C,
        edit: &ProtectionPatch<'_>,
    ) -> Result<serde_json::Value, Error>
    where
        C: RestClient + ?Sized,
    {
        let url = self.self_link()?.to_string();
        let payload = serde_json::to_value(edit)?;
        let RestResponse { status, body } =
            rest.patch_json(&url, &payload, &preview_headers()).await?;
        if status != StatusCode::OK {
            return Err(Error::Request {
                status,
                body: body.to_string(),
            });
        }
        Ok(body)
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
