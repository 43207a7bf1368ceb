use std::fs::{self, File};
use std::io;
use std::path::Path;

use tracing::info;

use crate::data::LabeledTweet;
use crate::errors::PrepError;

/// Persist the sample as UTF-8 CSV with a `sentiment,text` header row.
///
/// Creates the parent directory when missing. Unlike the source table the
/// output is newly authored, so plain UTF-8 applies.
pub fn write_sample(path: &Path, rows: &[LabeledTweet]) -> Result<(), PrepError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| PrepError::IoWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let file = File::create(path).map_err(|source| PrepError::IoWrite {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::Writer::from_writer(file);
    for row in rows {
        writer
            .serialize(row)
            .map_err(|err| write_failure(path, err))?;
    }
    writer.flush().map_err(|source| PrepError::IoWrite {
        path: path.to_path_buf(),
        source,
    })?;

    info!(rows = rows.len(), path = %path.display(), "sample written");
    Ok(())
}

fn write_failure(path: &Path, err: csv::Error) -> PrepError {
    let source = match err.into_kind() {
        csv::ErrorKind::Io(err) => err,
        other => io::Error::other(format!("{other:?}")),
    };
    PrepError::IoWrite {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn rows() -> Vec<LabeledTweet> {
        vec![
            LabeledTweet {
                sentiment: 0,
                text: "plain".to_string(),
            },
            LabeledTweet {
                sentiment: 1,
                text: "quoted, with comma".to_string(),
            },
        ]
    }

    #[test]
    fn writes_header_and_creates_parent_dirs() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("derived").join("raw_tweets.csv");

        write_sample(&path, &rows()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(lines.next(), Some("sentiment,text"));
        assert_eq!(lines.next(), Some("0,plain"));
        assert_eq!(lines.next(), Some("1,\"quoted, with comma\""));
    }

    #[test]
    fn unwritable_target_reports_io_failure() {
        let temp = tempdir().unwrap();
        // The target's parent is a regular file, so directory creation fails.
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, b"file, not dir").unwrap();
        let path = blocker.join("raw_tweets.csv");

        let err = write_sample(&path, &rows()).unwrap_err();

        assert!(matches!(err, PrepError::IoWrite { .. }));
    }
}
