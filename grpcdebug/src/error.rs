//! Error types for grpcdebug.

use crate::graph::EntityRef;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tonic::Code;

/// Error type for grpcdebug operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A point lookup found nothing for the identifier.
    ///
    /// Recoverable while walking children, fatal for the command's own target.
    #[error("{0} not found")]
    NotFound(EntityRef),

    /// No channel has the requested target string.
    #[error("no channel with target {0:?}")]
    TargetNotFound(String),

    /// A oneof carries no variant this client understands.
    #[error("unsupported {field}: {detail}")]
    UnsupportedVariant {
        /// The oneof being decoded.
        field: &'static str,
        /// What was found instead.
        detail: String,
    },

    /// A payload could not be decoded into its typed model.
    #[error("malformed {what}: {reason}")]
    Malformed {
        /// What was being decoded.
        what: String,
        /// Why decoding failed.
        reason: String,
    },

    /// A remote call exceeded its deadline.
    #[error("{operation} timed out after {timeout:?}")]
    Timeout {
        /// The remote operation, including the identifier it was called with.
        operation: String,
        /// The per-call deadline.
        timeout: Duration,
    },

    /// A remote call failed for any other reason.
    #[error("{operation} failed: {status}")]
    Unreachable {
        /// The remote operation, including the identifier it was called with.
        operation: String,
        /// The status returned by the server or the transport.
        status: tonic::Status,
    },

    /// The server returned a page that does not move the listing forward.
    #[error("{operation} stalled at start id {start_id}: page did not advance and end was not set")]
    StalledPagination {
        /// The paged operation.
        operation: String,
        /// The cursor of the offending request.
        start_id: i64,
    },

    /// The channel to the target could not be established.
    #[error("failed to connect to {target}")]
    Connect {
        /// The address that was dialed.
        target: String,
        /// The transport error.
        #[source]
        source: tonic::transport::Error,
    },

    /// A config file line could not be parsed.
    #[error("{}:{line}: {reason}", path.display())]
    Config {
        /// The config file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What is wrong with the line.
        reason: String,
    },

    /// The target descriptor cannot be turned into a connection.
    #[error("invalid target {target:?}: {reason}")]
    InvalidTarget {
        /// The target as given.
        target: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A credential file could not be read.
    #[error("failed to read credential file {}", path.display())]
    Credential {
        /// The credential file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// I/O error while reading config or writing output.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Structured output could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Maps a failed RPC to the error taxonomy.
    ///
    /// `NOT_FOUND` only becomes [`Error::NotFound`] for point lookups, where
    /// `entity` names what was looked up.
    pub(crate) fn from_status(
        operation: String,
        entity: Option<EntityRef>,
        timeout: Duration,
        status: tonic::Status,
    ) -> Self {
        match (status.code(), entity) {
            (Code::NotFound, Some(entity)) => Error::NotFound(entity),
            (Code::DeadlineExceeded, _) => Error::Timeout { operation, timeout },
            _ => Error::Unreachable { operation, status },
        }
    }

    /// Returns true when the error is a missing entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Result type alias for grpcdebug operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(15);

    #[test]
    fn not_found_maps_only_for_point_lookups() {
        let err = Error::from_status(
            "GetChannel(7)".into(),
            Some(EntityRef::Channel(7)),
            TIMEOUT,
            tonic::Status::not_found("gone"),
        );
        assert!(matches!(err, Error::NotFound(EntityRef::Channel(7))));

        let err = Error::from_status(
            "GetTopChannels".into(),
            None,
            TIMEOUT,
            tonic::Status::not_found("gone"),
        );
        assert!(matches!(err, Error::Unreachable { .. }));
    }

    #[test]
    fn deadline_exceeded_is_timeout() {
        let err = Error::from_status(
            "GetSocket(3)".into(),
            Some(EntityRef::Socket(3)),
            TIMEOUT,
            tonic::Status::deadline_exceeded("slow"),
        );
        assert_eq!(err.to_string(), "GetSocket(3) timed out after 15s");
    }

    #[test]
    fn other_codes_are_unreachable() {
        let err = Error::from_status(
            "GetServers".into(),
            None,
            TIMEOUT,
            tonic::Status::unavailable("connection refused"),
        );
        match err {
            Error::Unreachable { operation, status } => {
                assert_eq!(operation, "GetServers");
                assert_eq!(status.code(), Code::Unavailable);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
