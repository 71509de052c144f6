//! Report-level errors.
//!
//! Every failure that can reach the CLI or the web layer is a
//! [`ReportError`]. Callers branch on [`ReportError::kind`] rather than on
//! individual variants.

use crate::credentials::CredentialMissing;
use crate::domain::{Crs, InvalidCrs};
use crate::stations::StationError;
use crate::transport::TransportError;

/// Broad class of a report failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad station code, or a code the directory doesn't know.
    InvalidInput,
    /// No TransportAPI credentials available.
    CredentialMissing,
    /// Network failure, timeout or non-success status.
    Fetch,
    /// A response body didn't have the expected shape.
    Parse,
    /// The station directory couldn't be loaded.
    Io,
}

/// Errors from building a departure report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    InvalidCode(#[from] InvalidCrs),

    #[error("unknown station code {0}")]
    UnknownStation(Crs),

    #[error(transparent)]
    CredentialMissing(#[from] CredentialMissing),

    #[error("failed to fetch live departures: {0}")]
    Board(#[source] TransportError),

    #[error("failed to fetch timetable for train {train_uid}: {source}")]
    Timetable {
        train_uid: String,
        #[source]
        source: TransportError,
    },

    #[error(transparent)]
    Stations(#[from] StationError),
}

impl ReportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReportError::InvalidCode(_) | ReportError::UnknownStation(_) => ErrorKind::InvalidInput,
            ReportError::CredentialMissing(_) => ErrorKind::CredentialMissing,
            ReportError::Board(e) | ReportError::Timetable { source: e, .. } => {
                if e.is_parse() {
                    ErrorKind::Parse
                } else {
                    ErrorKind::Fetch
                }
            }
            ReportError::Stations(_) => ErrorKind::Io,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::InvalidInput => 2,
            ErrorKind::CredentialMissing => 3,
            ErrorKind::Fetch => 4,
            ErrorKind::Parse => 5,
            ErrorKind::Io => 1,
        }
    }
}
