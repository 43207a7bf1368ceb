use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::RecordOrdinal;

/// Error type for dataset acquisition, parsing, sampling, and persistence failures.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("failed downloading archive from '{url}': {source}")]
    Download { url: String, source: reqwest::Error },
    #[error("failed extracting archive {}: {source}", .archive.display())]
    Extraction {
        archive: PathBuf,
        source: zip::result::ZipError,
    },
    #[error("expected file missing after extraction: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed parsing source table {}: {source}", .path.display())]
    Parse { path: PathBuf, source: csv::Error },
    #[error("record {record} in {} has {found} fields, expected {expected}", .path.display())]
    MalformedRow {
        path: PathBuf,
        record: RecordOrdinal,
        expected: usize,
        found: usize,
    },
    #[error("record {record} in {} has non-integer sentiment label '{value}'", .path.display())]
    Label {
        path: PathBuf,
        record: RecordOrdinal,
        value: String,
    },
    #[error("failed writing {}: {source}", .path.display())]
    IoWrite { path: PathBuf, source: io::Error },
    #[error("cannot sample {requested} rows from a table of {available} without replacement")]
    Sampling { requested: usize, available: usize },
}
