//! Commit domain types.
//!
//! This module contains the types for the head commit embedded in a branch
//! payload.

use serde::{Deserialize, Serialize};
use url::Url;

#[cfg(test)]
#[path = "commit_tests.rs"]
mod tests;

/// The head commit of a branch, built from the nested JSON object in the
/// branch payload.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct BranchCommit {
    /// SHA of the commit
    pub sha: String,
    /// API URL of the commit resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
    /// Browser URL of the commit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_url: Option<Url>,
    /// The underlying git commit data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<CommitDetail>,
}

/// The git commit data nested inside a commit resource.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct CommitDetail {
    /// Commit message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Author of the commit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<GitActor>,
    /// Committer of the commit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committer: Option<GitActor>,
}

/// The author or committer identity on a git commit.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct GitActor {
    /// Name recorded on the commit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email recorded on the commit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Timestamp of the action (ISO 8601)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}
