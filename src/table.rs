use std::path::Path;

use encoding_rs::mem::decode_latin1;
use tracing::info;

use crate::constants::dataset::SOURCE_COLUMNS;
use crate::data::SourceRow;
use crate::errors::PrepError;
use crate::types::Sentiment;

/// Parse the header-less six-column source table into memory.
///
/// Every field is decoded as latin-1; the table predates UTF-8 cleanliness and
/// contains byte sequences that are invalid UTF-8. The whole file is
/// materialized at once (no streaming), one `SourceRow` per record in file
/// order. The sentiment field is parsed to an integer here so downstream
/// transformation is total.
pub fn load_source_table(path: &Path) -> Result<Vec<SourceRow>, PrepError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|source| PrepError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = Vec::new();
    let mut record = csv::ByteRecord::new();
    loop {
        let more = reader
            .read_byte_record(&mut record)
            .map_err(|source| PrepError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        if !more {
            break;
        }
        rows.push(source_row(path, &record)?);
    }

    info!(rows = rows.len(), path = %path.display(), "source table loaded");
    Ok(rows)
}

fn source_row(path: &Path, record: &csv::ByteRecord) -> Result<SourceRow, PrepError> {
    let ordinal = record
        .position()
        .map(|position| position.record())
        .unwrap_or_default();

    if record.len() != SOURCE_COLUMNS.len() {
        return Err(PrepError::MalformedRow {
            path: path.to_path_buf(),
            record: ordinal,
            expected: SOURCE_COLUMNS.len(),
            found: record.len(),
        });
    }

    let raw_label = decode_latin1(&record[0]);
    let sentiment = raw_label
        .trim()
        .parse::<Sentiment>()
        .map_err(|_| PrepError::Label {
            path: path.to_path_buf(),
            record: ordinal,
            value: raw_label.trim().to_string(),
        })?;

    Ok(SourceRow {
        sentiment,
        id: decode_latin1(&record[1]).into_owned(),
        date: decode_latin1(&record[2]).into_owned(),
        query: decode_latin1(&record[3]).into_owned(),
        user: decode_latin1(&record[4]).into_owned(),
        text: decode_latin1(&record[5]).into_owned(),
    })
}
