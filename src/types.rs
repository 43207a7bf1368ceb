/// Sentiment label value.
/// Raw source domain: `0` (negative), `4` (positive); binary domain after
/// remapping: `0` (negative), `1` (positive).
pub type Sentiment = i64;
/// Free-form tweet text.
/// Example: `@stellargirl I loooooooovvvvvveee my Kindle2.`
pub type TweetText = String;
/// Zero-based ordinal of a record within the source table.
/// Example: `1599999`
pub type RecordOrdinal = u64;
