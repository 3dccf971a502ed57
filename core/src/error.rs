//! Error types for the posts API harness.
//!
//! # Design
//! `NotFound` gets a dedicated variant because tests frequently distinguish
//! "the post does not exist" from "the server returned an unexpected
//! status." All other unexpected statuses land in `HttpError` with the raw
//! status code and body for debugging. Transport failures (DNS, refused
//! connection) are kept separate from assertion-level mismatches so they
//! surface as test errors rather than test failures.

use std::fmt;

/// Errors returned by `PostClient` parse methods and `Runner::execute`.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the requested post does not exist.
    NotFound,

    /// The server returned an unexpected status other than 404.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),

    /// The body decoded but did not have the expected shape.
    UnexpectedBody(String),

    /// The HTTP round-trip itself failed before a response was received.
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "post not found"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::UnexpectedBody(body) => {
                write!(f, "unexpected response body: {body}")
            }
            ApiError::Transport(msg) => {
                write!(f, "transport error: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
