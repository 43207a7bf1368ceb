use crate::constants::labels::{BINARY_POSITIVE, RAW_POSITIVE};
use crate::data::{LabeledTweet, SourceRow};
use crate::types::Sentiment;

/// Total remap from the raw label domain to the binary domain.
///
/// `4` maps to `1`; every other value — including out-of-domain labels — is
/// passed through unchanged. Unexpected upstream labels therefore survive as
/// out-of-range integers rather than being rejected here.
pub fn remap_sentiment(raw: Sentiment) -> Sentiment {
    match raw {
        RAW_POSITIVE => BINARY_POSITIVE,
        other => other,
    }
}

/// Project the source table down to `(sentiment, text)` with remapped labels.
///
/// Output has the same row count and order as the input; the id, date, query,
/// and user fields are dropped.
pub fn project_labeled(rows: Vec<SourceRow>) -> Vec<LabeledTweet> {
    rows.into_iter()
        .map(|row| LabeledTweet {
            sentiment: remap_sentiment(row.sentiment),
            text: row.text,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sentiment: Sentiment, text: &str) -> SourceRow {
        SourceRow {
            sentiment,
            id: "1".to_string(),
            date: "Mon Apr 06 22:19:45 PDT 2009".to_string(),
            query: "NO_QUERY".to_string(),
            user: "someone".to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn remaps_known_domain_to_binary() {
        assert_eq!(remap_sentiment(0), 0);
        assert_eq!(remap_sentiment(4), 1);
    }

    #[test]
    fn out_of_domain_labels_pass_through() {
        assert_eq!(remap_sentiment(2), 2);
        assert_eq!(remap_sentiment(-1), -1);
    }

    #[test]
    fn projection_preserves_count_and_order() {
        let rows = vec![row(0, "bad"), row(4, "good"), row(0, "meh")];

        let labeled = project_labeled(rows);

        assert_eq!(
            labeled,
            vec![
                LabeledTweet {
                    sentiment: 0,
                    text: "bad".to_string()
                },
                LabeledTweet {
                    sentiment: 1,
                    text: "good".to_string()
                },
                LabeledTweet {
                    sentiment: 0,
                    text: "meh".to_string()
                },
            ]
        );
    }
}
