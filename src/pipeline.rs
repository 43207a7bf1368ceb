use crate::archive::ensure_extracted;
use crate::config::PrepConfig;
use crate::data::LabeledTweet;
use crate::download::ensure_archive;
use crate::errors::PrepError;
use crate::table::load_source_table;
use crate::transform::project_labeled;

/// Run fetch, extract, load, and transform, returning the working table.
///
/// When the extracted source table is already on disk, neither the network
/// nor the archive is touched: the presence check wraps both acquisition
/// stages, and each stage also gates on its own artifact. Whatever partial
/// artifacts a failed run leaves behind are picked up by the next run.
pub fn load_and_prepare(config: &PrepConfig) -> Result<Vec<LabeledTweet>, PrepError> {
    let table_path = config.table_path();
    if !table_path.exists() {
        ensure_archive(&config.url, &config.archive_path(), config.fetch_timeout)?;
        ensure_extracted(&config.archive_path(), &table_path, &config.data_dir)?;
    }

    let rows = load_source_table(&table_path)?;
    let labeled = project_labeled(rows);
    println!(
        "[tweetset:prep] preparation complete ({} rows)",
        labeled.len()
    );
    Ok(labeled)
}
