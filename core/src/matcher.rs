use crate::corpus::Corpus;
use crate::tokenizer::Normalizer;
use crate::vectorizer::VectorSpaceModel;

/// Best-match score below this is rejected. Exposed so callers can tune
/// precision/recall without touching the algorithm.
pub const DEFAULT_THRESHOLD: f32 = 0.2;

/// Reply rendered verbatim by every interaction surface on `NoMatch`.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't understand your question.";

#[derive(Debug, Clone, PartialEq)]
pub enum MatchResult {
    Match {
        index: usize,
        score: f32,
        answer: String,
    },
    NoMatch,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }
}

/// Cosine of the angle between two vectors; 0.0 whenever either side is
/// the zero vector, so degenerate queries never divide by zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let (dot, na, nb) = a
        .iter()
        .zip(b.iter())
        .fold((0.0f32, 0.0f32, 0.0f32), |(d, aa, bb), (x, y)| {
            (d + x * y, aa + x * x, bb + y * y)
        });
    if na == 0.0 || nb == 0.0 {
        0.0
    } else {
        dot / (na.sqrt() * nb.sqrt())
    }
}

/// Explicit linear argmax; strict `>` keeps the first index among ties,
/// so ranking is stable across runs.
pub fn best_index(scores: &[f32]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &score) in scores.iter().enumerate() {
        let improved = match best {
            Some(j) => score > scores[j],
            None => true,
        };
        if improved {
            best = Some(i);
        }
    }
    best
}

/// Match one live query against the fitted corpus. Total over its input:
/// any string, including empty or all-stopword text, resolves to a
/// `MatchResult` and never an error. Rejection is strict: a best score
/// exactly at the threshold is still a match.
pub fn match_query(
    normalizer: &Normalizer,
    model: &VectorSpaceModel,
    question_vectors: &[Vec<f32>],
    corpus: &Corpus,
    threshold: f32,
    query: &str,
) -> MatchResult {
    let normalized = normalizer.normalize(query);
    let query_vector = model.transform(&normalized);
    if query_vector.iter().all(|w| *w == 0.0) {
        // Nothing to rank by: empty, all-stopword, or fully out-of-vocabulary.
        return MatchResult::NoMatch;
    }

    let scores: Vec<f32> = question_vectors
        .iter()
        .map(|qv| cosine_similarity(&query_vector, qv))
        .collect();
    let best = match best_index(&scores) {
        Some(i) => i,
        None => return MatchResult::NoMatch,
    };
    let score = scores[best];
    tracing::debug!(%normalized, best, score, "query scored");
    if score < threshold {
        return MatchResult::NoMatch;
    }
    match corpus.answer(best) {
        Some(answer) => MatchResult::Match {
            index: best,
            score,
            answer: answer.to_string(),
        },
        None => MatchResult::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cosine_handles_unit_and_zero_vectors() {
        let a = [1.0, 0.0];
        let b = [0.0, 1.0];
        let z = [0.0, 0.0];
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-6);
        assert!((cosine_similarity(&a, &b)).abs() < 1e-6);
        assert_eq!(cosine_similarity(&a, &z), 0.0);
        assert_eq!(cosine_similarity(&z, &z), 0.0);
    }

    #[test]
    fn argmax_takes_first_index_on_ties() {
        assert_eq!(best_index(&[0.3, 0.7, 0.7, 0.1]), Some(1));
        assert_eq!(best_index(&[]), None);
    }
}
