use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{dataset, fetch, sampler};

/// Top-level pipeline configuration.
///
/// Defaults carry the production literals; tests and library consumers inject
/// temporary directories, local fixtures, and alternate draw parameters
/// through the `with_*` overrides.
#[derive(Clone, Debug)]
pub struct PrepConfig {
    /// URL of the compressed source archive.
    pub url: String,
    /// Directory holding downloaded and derived files.
    pub data_dir: PathBuf,
    /// Filename of the local archive copy inside `data_dir`.
    pub archive_name: String,
    /// Filename of the extracted source table inside `data_dir`.
    pub table_name: String,
    /// Filename of the persisted sample inside `data_dir`.
    pub sample_name: String,
    /// Number of rows drawn for the reduced sample.
    pub sample_size: usize,
    /// RNG seed that controls the deterministic sample draw.
    pub seed: u64,
    /// Timeout applied to the blocking archive download.
    pub fetch_timeout: Duration,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            url: dataset::ARCHIVE_URL.to_string(),
            data_dir: PathBuf::from(dataset::DATA_DIR),
            archive_name: dataset::ARCHIVE_FILENAME.to_string(),
            table_name: dataset::TABLE_FILENAME.to_string(),
            sample_name: sampler::SAMPLE_FILENAME.to_string(),
            sample_size: sampler::SAMPLE_SIZE,
            seed: sampler::SAMPLE_SEED,
            fetch_timeout: Duration::from_secs(fetch::TIMEOUT_SECS),
        }
    }
}

impl PrepConfig {
    /// Override the archive URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Override the directory for downloaded and derived files.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Override the number of rows drawn for the sample.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Override the deterministic draw seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Override the download timeout.
    pub fn with_fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    /// Full path of the local archive copy.
    pub fn archive_path(&self) -> PathBuf {
        self.data_dir.join(&self.archive_name)
    }

    /// Full path of the extracted source table.
    pub fn table_path(&self) -> PathBuf {
        self.data_dir.join(&self.table_name)
    }

    /// Full path of the persisted sample.
    pub fn sample_path(&self) -> PathBuf {
        self.data_dir.join(&self.sample_name)
    }
}
