use serde::{Deserialize, Serialize};

pub use crate::types::{Sentiment, TweetText};

/// One raw record from the extracted six-column source table.
///
/// Field order matches the on-disk column order. Only `sentiment` and `text`
/// survive projection; the other four fields exist so a loaded table mirrors
/// the source file record for record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceRow {
    /// Raw sentiment label (`0` negative, `4` positive in well-formed data).
    pub sentiment: Sentiment,
    /// Tweet identifier.
    pub id: String,
    /// Timestamp string as published upstream.
    pub date: String,
    /// Query string used during collection (`NO_QUERY` for the training set).
    pub query: String,
    /// Author handle.
    pub user: String,
    /// Tweet body.
    pub text: TweetText,
}

/// One row of the two-column working table produced by projection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledTweet {
    /// Binary sentiment label after remapping (`0` negative, `1` positive).
    pub sentiment: Sentiment,
    /// Tweet body.
    pub text: TweetText,
}
