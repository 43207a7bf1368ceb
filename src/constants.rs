use crate::types::Sentiment;

/// Constants describing the upstream Sentiment140 distribution.
pub mod dataset {
    /// URL of the compressed training/test archive.
    pub const ARCHIVE_URL: &str = "http://cs.stanford.edu/people/alecmgo/trainingandtestdata.zip";
    /// Local filename for the downloaded archive.
    pub const ARCHIVE_FILENAME: &str = "sentiment140.zip";
    /// Archive member holding the full training table.
    pub const TABLE_FILENAME: &str = "training.1600000.processed.noemoticon.csv";
    /// Default directory for downloaded and derived files.
    pub const DATA_DIR: &str = "data";
    /// Column ordering of the header-less source table.
    pub const SOURCE_COLUMNS: [&str; 6] = ["sentiment", "id", "date", "query", "user", "text"];
}

/// Constants controlling archive acquisition.
pub mod fetch {
    /// Timeout applied to the blocking archive download, in seconds.
    pub const TIMEOUT_SECS: u64 = 120;
}

/// Constants describing the sentiment label domains.
pub mod labels {
    use super::Sentiment;

    /// Raw source value for negative tweets.
    pub const RAW_NEGATIVE: Sentiment = 0;
    /// Raw source value for positive tweets.
    pub const RAW_POSITIVE: Sentiment = 4;
    /// Binary value for negative tweets.
    pub const BINARY_NEGATIVE: Sentiment = 0;
    /// Binary value for positive tweets.
    pub const BINARY_POSITIVE: Sentiment = 1;
}

/// Constants controlling the reduced-sample draw.
pub mod sampler {
    /// Number of rows drawn for the reduced sample.
    pub const SAMPLE_SIZE: usize = 50_000;
    /// RNG seed that makes the draw reproducible across runs.
    pub const SAMPLE_SEED: u64 = 42;
    /// Default filename for the persisted sample.
    pub const SAMPLE_FILENAME: &str = "raw_tweets.csv";
}
