//! Error types for branch client operations.
//!
//! This module defines the error types that can occur when interacting with the
//! GitHub branch endpoints through the branch_client crate. It provides the
//! error context applications need for debugging and error handling.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during branch client operations.
///
/// Each variant provides specific context about what went wrong and relevant
/// details for debugging and error handling.
///
/// ## Examples
///
/// ```rust,ignore
/// use branch_client::Error;
///
/// match branch.protect(&client, level, checks).await {
///     Ok(protection) => println!("protection applied: {:?}", protection),
///     Err(Error::Request { status, .. }) => eprintln!("GitHub rejected the update: {}", status),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Authentication or GitHub client initialization failure.
    ///
    /// This error occurs when:
    /// - The credentials are invalid or cannot be parsed
    /// - The underlying client cannot be built
    ///
    /// The contained string provides specific details about the failure.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// Error deserializing a response from GitHub.
    ///
    /// This error occurs when the GitHub API returns a response that cannot be
    /// parsed into the expected data structure. This may indicate:
    /// - API version changes
    /// - Unexpected response format
    #[error("Failed to deserialize GitHub response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The GitHub API returned a 200 response without the expected structure.
    ///
    /// For protection updates this means the reply did not carry a
    /// `protection` object even though the request succeeded.
    #[error("Invalid response format")]
    InvalidResponse,

    /// A request URL could not be parsed.
    ///
    /// Branch link URLs come straight from the server's `_links` object, so
    /// this normally indicates a corrupted or truncated branch payload.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// The branch payload lacked a `_links` entry needed for the operation.
    ///
    /// Protection updates are sent to the branch's `self` link; a branch
    /// constructed from a partial payload (for example a list endpoint) may
    /// not carry one.
    #[error("Branch has no '{0}' link")]
    MissingLink(&'static str),

    /// The requested branch was not found.
    ///
    /// This error occurs when a branch lookup returns a 404 status code,
    /// indicating that the branch does not exist or is not accessible with
    /// the current authentication.
    #[error("Resource not found")]
    NotFound,

    /// The GitHub API answered with a status other than the expected 200.
    ///
    /// The raw response body is retained for diagnostics; GitHub error bodies
    /// carry a `message` field describing the rejection.
    #[error("Unexpected status {status} returned from GitHub")]
    Request {
        /// Status code of the response
        status: http::StatusCode,
        /// Raw response body
        body: String,
    },

    /// The request failed below the HTTP status line.
    ///
    /// Connection failures, TLS errors, and malformed response bodies from
    /// the underlying transport all surface here.
    #[error("GitHub request failed: {0}")]
    Transport(#[from] octocrab::Error),
}
