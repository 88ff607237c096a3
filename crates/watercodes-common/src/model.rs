use serde::{Deserialize, Serialize};

/// One entry of the dataset: a day-log post and the URL it was published at.
///
/// Field names on the wire follow the bundled asset (`Tweet`, `Link`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Tweet")]
    pub text: String,
    #[serde(rename = "Link")]
    pub link: String,
}

impl Record {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// Display form of a record, derived per request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordView {
    /// `None` when the text carries no `Day N of ML:` header.
    pub day: Option<String>,
    pub bullets: Vec<String>,
    pub link: String,
}

/// A post as emitted by the collector, newest first.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectedPost {
    #[serde(rename = "tweetContent")]
    pub content: String,
    #[serde(rename = "tweetLink")]
    pub link: String,
}
