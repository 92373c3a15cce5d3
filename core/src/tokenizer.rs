use crate::error::FaqError;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref WORD_RE: Regex =
        Regex::new(r"(?u)[\p{L}\p{N}][\p{L}\p{N}_']*").expect("valid regex");
    static ref ENGLISH_STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

/// Which tokens the normalizer discards. Defaults to the built-in English
/// list; a custom set can be loaded from a one-word-per-line file.
#[derive(Debug, Clone, Default)]
pub enum Stopwords {
    #[default]
    English,
    Custom(HashSet<String>),
    None,
}

impl Stopwords {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FaqError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| FaqError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let words = text
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        Ok(Self::Custom(words))
    }

    fn contains(&self, token: &str) -> bool {
        match self {
            Self::English => ENGLISH_STOPWORDS.contains(token),
            Self::Custom(words) => words.contains(token),
            Self::None => false,
        }
    }
}

/// Lowercases, tokenizes on Unicode word boundaries, and strips stopwords
/// and punctuation. The same normalizer instance is applied to corpus
/// questions at load time and to live queries, so both sides of a match
/// see identical token streams.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    stopwords: Stopwords,
}

impl Normalizer {
    pub fn new(stopwords: Stopwords) -> Self {
        Self { stopwords }
    }

    pub fn english() -> Self {
        Self::new(Stopwords::English)
    }

    /// Surviving word tokens, in input order. NFKC-folds and lowercases
    /// first; the word regex never emits pure punctuation.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let folded = text.nfkc().collect::<String>().to_lowercase();
        WORD_RE
            .find_iter(&folded)
            .map(|m| m.as_str().to_string())
            .filter(|t| !self.stopwords.contains(t))
            .collect()
    }

    /// Canonical normalized form: surviving tokens joined by single spaces.
    /// Empty output is valid and means the input carried no content words.
    pub fn normalize(&self, text: &str) -> String {
        self.tokenize(text).join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        let n = Normalizer::english();
        assert_eq!(n.normalize("Hello, WORLD!!!"), "hello world");
    }

    #[test]
    fn drops_stopwords() {
        let n = Normalizer::english();
        assert_eq!(n.normalize("What are your hours?"), "hours");
    }

    #[test]
    fn custom_stopword_set_is_honored() {
        let words = ["hours".to_string()].into_iter().collect();
        let n = Normalizer::new(Stopwords::Custom(words));
        assert_eq!(n.normalize("opening hours today"), "opening today");
    }

    #[test]
    fn no_stopword_filtering_keeps_everything() {
        let n = Normalizer::new(Stopwords::None);
        assert_eq!(n.normalize("What are your hours?"), "what are your hours");
    }

    #[test]
    fn folds_unicode_compatibility_forms() {
        let n = Normalizer::english();
        // NFKC maps the ligature to plain "fi"
        assert_eq!(n.normalize("ofﬁce"), "office");
    }
}
