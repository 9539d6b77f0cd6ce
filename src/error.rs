//! Errors raised by the HTTP/wire layer
//!
//! Application code works in `anyhow::Result`; these variants exist so the
//! caller can tell a silently ignored transport failure apart from a
//! malformed payload that must be surfaced.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL or endpoint could not be parsed
    #[error("invalid server url '{0}'")]
    InvalidUrl(String),

    /// Connection refused, DNS failure, body read failure, ...
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with anything other than 200
    #[error("server returned status {0}")]
    Status(u16),

    /// Request could not be encoded or response was not valid JSON
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    /// A row key in the `d` map is not of the form `r<digits>`
    #[error("malformed row key '{0}'")]
    RowKey(String),

    /// Row keys are not a dense `r000..` sequence
    #[error("missing row '{0}' in result set")]
    MissingRow(String),
}

impl ClientError {
    /// Whether this error came from the payload rather than the transport.
    ///
    /// Payload errors are shown to the user; transport and status errors
    /// are only logged.
    pub fn is_payload_error(&self) -> bool {
        matches!(
            self,
            ClientError::Json(_) | ClientError::RowKey(_) | ClientError::MissingRow(_)
        )
    }
}
