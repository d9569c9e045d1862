// libfeig/src/error.rs

use thiserror::Error;

use crate::protocol::{Request, Response};
use crate::types::Status;

/// Crate-wide error type.
///
/// The last five variants are produced by [`Reader::execute`](crate::Reader::execute)
/// when it turns a [`TransferResult`](crate::TransferResult) into an error.
/// They carry the originating request, and the decoded response when one
/// exists, so callers can log the exact exchange that failed.
#[derive(Error, Debug)]
pub enum Error {
    #[error("transport is not connected")]
    NotConnected,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("timed out waiting for response to {}", .request.command)]
    Timeout { request: Box<Request> },

    #[error("transfer of {} was canceled", .request.command)]
    Canceled { request: Box<Request> },

    #[error("communication error during {}: malformed or corrupted frame", .request.command)]
    Communication {
        request: Box<Request>,
        response: Option<Box<Response>>,
    },

    #[error("unexpected response: sent {}, received {}", .request.command, .response.command)]
    UnexpectedResponse {
        request: Box<Request>,
        response: Box<Response>,
    },

    #[error("reader reported {} for {}", .response.status, .request.command)]
    Status {
        request: Box<Request>,
        response: Box<Response>,
    },
}

impl Error {
    /// Request that triggered a protocol-level failure, if any.
    pub fn request(&self) -> Option<&Request> {
        match self {
            Error::Timeout { request }
            | Error::Canceled { request }
            | Error::Communication { request, .. }
            | Error::UnexpectedResponse { request, .. }
            | Error::Status { request, .. } => Some(request),
            _ => None,
        }
    }

    /// Decoded response attached to the failure, if any.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::Communication { response, .. } => response.as_deref(),
            Error::UnexpectedResponse { response, .. } | Error::Status { response, .. } => {
                Some(response)
            }
            _ => None,
        }
    }

    /// Status byte reported by the reader for [`Error::Status`].
    pub fn status(&self) -> Option<Status> {
        match self {
            Error::Status { response, .. } => Some(response.status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, Error::Canceled { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
