use crate::error::FaqError;
use std::collections::{HashMap, HashSet};

pub type TermId = u32;

/// TF-IDF weighting model fitted once over the normalized corpus
/// questions. Term ids are assigned in first-encounter order over the
/// documents in corpus order, so fitting the same corpus always yields
/// the same vocabulary and the same vectors.
#[derive(Debug, Clone)]
pub struct VectorSpaceModel {
    vocabulary: HashMap<String, TermId>,
    idf: Vec<f32>,
}

impl VectorSpaceModel {
    /// Fit the model and transform the fit set in one pass. The returned
    /// vectors are index-aligned with `documents`. Documents are
    /// normalized-token strings; tokens are whitespace-separated.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Result<(Self, Vec<Vec<f32>>), FaqError> {
        if documents.is_empty() {
            return Err(FaqError::EmptyCorpus);
        }

        let mut vocabulary: HashMap<String, TermId> = HashMap::new();
        let mut df: Vec<u32> = Vec::new();
        for doc in documents {
            let mut seen: HashSet<TermId> = HashSet::new();
            for token in doc.as_ref().split_whitespace() {
                let next = vocabulary.len() as TermId;
                let id = *vocabulary.entry(token.to_string()).or_insert(next);
                if id as usize == df.len() {
                    df.push(0);
                }
                if seen.insert(id) {
                    df[id as usize] += 1;
                }
            }
        }

        // Smoothed idf: ln((1 + n) / (1 + df)) + 1. Stays positive for
        // every observed term, so a question always matches itself.
        let n = documents.len() as f32;
        let idf: Vec<f32> = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f32)).ln() + 1.0)
            .collect();

        let model = Self { vocabulary, idf };
        let vectors = documents
            .iter()
            .map(|d| model.transform(d.as_ref()))
            .collect();
        tracing::debug!(documents = documents.len(), terms = model.dimensions(), "vector space fitted");
        Ok((model, vectors))
    }

    /// Project a normalized document into the fitted space. Weight per
    /// term = occurrence count x idf. Out-of-vocabulary tokens contribute
    /// nothing; the vocabulary never grows here.
    pub fn transform(&self, document: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.idf.len()];
        for token in document.split_whitespace() {
            if let Some(&id) = self.vocabulary.get(token) {
                vector[id as usize] += self.idf[id as usize];
            }
        }
        vector
    }

    pub fn dimensions(&self) -> usize {
        self.idf.len()
    }

    pub fn term_id(&self, token: &str) -> Option<TermId> {
        self.vocabulary.get(token).copied()
    }
}
