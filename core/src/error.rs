use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaqError {
    #[error("faq corpus is empty: nothing to match against")]
    EmptyCorpus,
    #[error("faq entry {index} is missing its {field}")]
    MalformedEntry { index: usize, field: &'static str },
    #[error("cannot read faq source {path}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("faq source {path} is not a valid corpus")]
    InvalidSource {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
