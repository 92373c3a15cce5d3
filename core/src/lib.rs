pub mod corpus;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod tokenizer;
pub mod vectorizer;

pub use corpus::{Corpus, FaqEntry};
pub use engine::{EngineOptions, FaqEngine};
pub use error::FaqError;
pub use matcher::{MatchResult, DEFAULT_THRESHOLD, FALLBACK_REPLY};
pub use tokenizer::{Normalizer, Stopwords};
pub use vectorizer::{TermId, VectorSpaceModel};
