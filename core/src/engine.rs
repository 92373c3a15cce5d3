use crate::corpus::Corpus;
use crate::error::FaqError;
use crate::matcher::{self, MatchResult, DEFAULT_THRESHOLD};
use crate::tokenizer::{Normalizer, Stopwords};
use crate::vectorizer::VectorSpaceModel;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub threshold: f32,
    pub stopwords: Stopwords,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            stopwords: Stopwords::English,
        }
    }
}

/// The whole serving context in one immutable object: corpus, normalizer,
/// fitted model and question vectors. Built once at startup and handed by
/// shared reference to every query site; nothing here mutates after
/// construction, so concurrent readers need no locking.
#[derive(Debug)]
pub struct FaqEngine {
    corpus: Corpus,
    normalizer: Normalizer,
    model: VectorSpaceModel,
    question_vectors: Vec<Vec<f32>>,
    threshold: f32,
}

impl FaqEngine {
    pub fn from_path<P: AsRef<Path>>(path: P, options: EngineOptions) -> Result<Self, FaqError> {
        let corpus = Corpus::load(path)?;
        Self::new(corpus, options)
    }

    pub fn new(corpus: Corpus, options: EngineOptions) -> Result<Self, FaqError> {
        let normalizer = Normalizer::new(options.stopwords);
        let normalized: Vec<String> = corpus.questions().map(|q| normalizer.normalize(q)).collect();
        let (model, question_vectors) = VectorSpaceModel::fit(&normalized)?;
        tracing::info!(
            entries = corpus.len(),
            vocabulary = model.dimensions(),
            threshold = options.threshold,
            "faq engine ready"
        );
        Ok(Self {
            corpus,
            normalizer,
            model,
            question_vectors,
            threshold: options.threshold,
        })
    }

    /// Answer one query. Read-only; the transient query vector is the only
    /// per-call allocation.
    pub fn answer(&self, query: &str) -> MatchResult {
        matcher::match_query(
            &self.normalizer,
            &self.model,
            &self.question_vectors,
            &self.corpus,
            self.threshold,
            query,
        )
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn dimensions(&self) -> usize {
        self.model.dimensions()
    }
}
