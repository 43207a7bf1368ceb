use std::fs::File;
use std::path::Path;

use tracing::{debug, info};

use crate::errors::PrepError;

/// Result of an extraction attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtractOutcome {
    /// The archive was opened and all entries were unpacked.
    Extracted,
    /// The expected file was already on disk; the archive was not opened.
    AlreadyPresent,
}

/// Ensure the expected member file exists, extracting the archive if needed.
///
/// When `expected` already exists this is a no-op even if the archive changed
/// since the last run (staleness is not detected). Otherwise every entry of
/// the archive is unpacked into `extract_dir`. An archive that unpacks cleanly
/// but does not contain `expected` is reported as `NotFound`, distinct from a
/// corrupt container.
pub fn ensure_extracted(
    archive: &Path,
    expected: &Path,
    extract_dir: &Path,
) -> Result<ExtractOutcome, PrepError> {
    if expected.exists() {
        debug!(path = %expected.display(), "target already extracted, skipping");
        return Ok(ExtractOutcome::AlreadyPresent);
    }

    println!("[tweetset:zip] extracting {}", archive.display());
    let file = File::open(archive).map_err(|err| PrepError::Extraction {
        archive: archive.to_path_buf(),
        source: err.into(),
    })?;
    let mut bundle = zip::ZipArchive::new(file).map_err(|source| PrepError::Extraction {
        archive: archive.to_path_buf(),
        source,
    })?;
    bundle
        .extract(extract_dir)
        .map_err(|source| PrepError::Extraction {
            archive: archive.to_path_buf(),
            source,
        })?;

    if !expected.exists() {
        return Err(PrepError::NotFound {
            path: expected.to_path_buf(),
        });
    }
    info!(entries = bundle.len(), dir = %extract_dir.display(), "archive extracted");
    println!("[tweetset:zip] extraction complete");
    Ok(ExtractOutcome::Extracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;
    use zip::write::SimpleFileOptions;

    fn write_archive(path: &Path, member: &str, bytes: &[u8]) {
        let file = File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        writer
            .start_file(member, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(bytes).unwrap();
        writer.finish().unwrap();
    }

    #[test]
    fn extracts_expected_member() {
        let temp = tempdir().unwrap();
        let archive = temp.path().join("bundle.zip");
        let expected = temp.path().join("table.csv");
        write_archive(&archive, "table.csv", b"0,row\n");

        let outcome = ensure_extracted(&archive, &expected, temp.path()).unwrap();

        assert_eq!(outcome, ExtractOutcome::Extracted);
        assert_eq!(fs::read(&expected).unwrap(), b"0,row\n");
    }

    #[test]
    fn present_target_skips_archive_entirely() {
        let temp = tempdir().unwrap();
        let archive = temp.path().join("bundle.zip");
        let expected = temp.path().join("table.csv");
        fs::write(&archive, b"not a zip at all").unwrap();
        fs::write(&expected, b"already here\n").unwrap();

        let outcome = ensure_extracted(&archive, &expected, temp.path()).unwrap();

        assert_eq!(outcome, ExtractOutcome::AlreadyPresent);
        assert_eq!(fs::read(&expected).unwrap(), b"already here\n");
    }

    #[test]
    fn corrupt_container_reports_extraction_failure() {
        let temp = tempdir().unwrap();
        let archive = temp.path().join("bundle.zip");
        let expected = temp.path().join("table.csv");
        fs::write(&archive, b"garbage bytes, no central directory").unwrap();

        let err = ensure_extracted(&archive, &expected, temp.path()).unwrap_err();

        assert!(matches!(err, PrepError::Extraction { .. }));
    }

    #[test]
    fn missing_member_reports_not_found() {
        let temp = tempdir().unwrap();
        let archive = temp.path().join("bundle.zip");
        let expected = temp.path().join("table.csv");
        write_archive(&archive, "testdata.csv", b"0,row\n");

        let err = ensure_extracted(&archive, &expected, temp.path()).unwrap_err();

        assert!(matches!(err, PrepError::NotFound { path } if path == expected));
    }
}
