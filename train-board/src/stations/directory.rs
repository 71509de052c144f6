//! In-memory station directory.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::Crs;
use crate::error::ReportError;

use super::error::StationError;

/// One row of the station code CSV.
#[derive(Debug, Clone, Deserialize)]
struct StationRow {
    #[serde(rename = "Station Name")]
    name: String,
    #[serde(rename = "CRS Code")]
    crs_code: String,
}

/// CRS → station name lookup.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    names: HashMap<Crs, String>,
}

impl StationDirectory {
    /// Load the directory from a CSV file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| StationError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let directory = Self::from_reader(file)?;
        debug!(path = %path.display(), stations = directory.len(), "loaded station directory");
        Ok(directory)
    }

    /// Parse a CSV with `Station Name` and `CRS Code` headers.
    ///
    /// Rows with an empty name or a code that isn't three letters are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StationError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Fields)
            .from_reader(reader);

        let mut rows = Vec::new();
        for row in reader.deserialize::<StationRow>() {
            let row = row?;
            rows.push((row.crs_code, row.name));
        }

        Ok(Self::from_entries(rows))
    }

    /// Build a directory from `(code, name)` pairs.
    pub fn from_entries<I, C, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (C, N)>,
        C: AsRef<str>,
        N: Into<String>,
    {
        let names = entries
            .into_iter()
            .filter_map(|(code, name)| {
                let name = name.into();
                if name.is_empty() {
                    return None;
                }
                Crs::parse(code.as_ref()).ok().map(|crs| (crs, name))
            })
            .collect();

        Self { names }
    }

    /// Look up a station name by CRS code.
    pub fn name(&self, crs: &Crs) -> Option<&str> {
        self.names.get(crs).map(String::as_str)
    }

    /// Validate a raw code and resolve its display name.
    ///
    /// Both failure modes are input errors; no network access happens here.
    pub fn resolve(&self, code: &str) -> Result<(Crs, String), ReportError> {
        let crs = Crs::parse(code)?;
        let name = self
            .name(&crs)
            .ok_or(ReportError::UnknownStation(crs))?
            .to_string();
        Ok((crs, name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
