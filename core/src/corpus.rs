use crate::error::FaqError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One question/answer pair. Identity is the entry's position in the
/// loaded sequence; entries are never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    question: Option<String>,
    answer: Option<String>,
}

/// The ordered, write-once set of FAQ pairs. `answer(i)` is the response
/// for `question(i)` for every index.
#[derive(Debug, Clone)]
pub struct Corpus {
    entries: Vec<FaqEntry>,
}

impl Corpus {
    /// Load a JSON array of `{"question": ..., "answer": ...}` records.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, FaqError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| FaqError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: Vec<RawEntry> =
            serde_json::from_str(&text).map_err(|source| FaqError::InvalidSource {
                path: path.to_path_buf(),
                source,
            })?;

        let mut entries = Vec::with_capacity(raw.len());
        for (index, record) in raw.into_iter().enumerate() {
            let question = record
                .question
                .ok_or(FaqError::MalformedEntry { index, field: "question" })?;
            let answer = record
                .answer
                .ok_or(FaqError::MalformedEntry { index, field: "answer" })?;
            entries.push(FaqEntry { question, answer });
        }
        tracing::debug!(entries = entries.len(), path = %path.display(), "faq corpus loaded");
        Ok(Self::from_entries(entries))
    }

    pub fn from_entries(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&FaqEntry> {
        self.entries.get(index)
    }

    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.question.as_str())
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.answer.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_rejects_missing_fields() {
        let dir = std::env::temp_dir().join("faq_corpus_missing_field_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("faqs.json");
        fs::write(&path, r#"[{"question": "Where?", "answer": "Here"}, {"question": "When?"}]"#)
            .unwrap();
        match Corpus::load(&path) {
            Err(FaqError::MalformedEntry { index, field }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "answer");
            }
            other => panic!("expected MalformedEntry, got {other:?}"),
        }
    }

    #[test]
    fn load_reports_unreadable_source() {
        let err = Corpus::load("/definitely/not/a/real/faqs.json").unwrap_err();
        assert!(matches!(err, FaqError::SourceUnavailable { .. }));
    }
}
