//! Station directory error types.

/// Errors that can occur when loading the station directory.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// The directory file couldn't be opened
    #[error("failed to read station directory {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The CSV was malformed
    #[error("failed to parse station directory: {0}")]
    Csv(#[from] csv::Error),
}
