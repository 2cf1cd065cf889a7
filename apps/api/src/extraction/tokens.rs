//! Token pipeline: tokenize → keep alphabetic → drop stopwords → lemmatize.
//!
//! The tokenizer, stopword set and lemmatizer are bundled as `LanguageResources` and
//! validated once when the pipeline is built. After that, tokenizing cannot fail.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::errors::PipelineError;
use crate::extraction::lexicon::{ENGLISH_STOPWORDS, INVARIANT_NOUNS, IRREGULAR_PLURALS};

/// Splits text into word-level tokens, preserving source order.
pub trait Tokenizer: Send + Sync {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Maps an inflected word to its dictionary base form.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, word: &str) -> String;
}

static WORD_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+|[^\w\s]+").expect("valid word token regex"));

/// Word runs and punctuation runs, the same split a word-boundary tokenizer produces.
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        WORD_TOKEN.find_iter(text).map(|m| m.as_str()).collect()
    }
}

/// Noun lemmatizer driven by plural suffix rules and an irregular-form table.
pub struct SuffixLemmatizer {
    irregular: HashMap<&'static str, &'static str>,
    invariant: HashSet<&'static str>,
}

impl Default for SuffixLemmatizer {
    fn default() -> Self {
        Self {
            irregular: IRREGULAR_PLURALS.iter().copied().collect(),
            invariant: INVARIANT_NOUNS.iter().copied().collect(),
        }
    }
}

impl Lemmatizer for SuffixLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some(base) = self.irregular.get(word) {
            return base.to_string();
        }
        if word.len() <= 3 || self.invariant.contains(word) {
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{stem}y");
        }
        if word.ends_with("sses")
            || word.ends_with("ches")
            || word.ends_with("shes")
            || word.ends_with("xes")
            || word.ends_with("zes")
        {
            return word[..word.len() - 2].to_string();
        }
        if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
            return word.to_string();
        }
        match word.strip_suffix('s') {
            Some(stem) => stem.to_string(),
            None => word.to_string(),
        }
    }
}

/// Tokenizer, stopword set and lemmatizer, loaded once and shared read-only.
pub struct LanguageResources {
    pub tokenizer: Box<dyn Tokenizer>,
    pub stopwords: HashSet<String>,
    pub lemmatizer: Box<dyn Lemmatizer>,
}

impl LanguageResources {
    /// Built-in English bundle.
    pub fn english() -> Self {
        Self {
            tokenizer: Box::new(WordTokenizer),
            stopwords: ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            lemmatizer: Box::new(SuffixLemmatizer::default()),
        }
    }

    /// English bundle with the stopword list read from a file, one word per line.
    pub fn english_with_stopwords(path: &Path) -> Result<Self, PipelineError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::ResourceUnavailable(format!(
                "cannot read stopword list {}: {e}",
                path.display()
            ))
        })?;
        let stopwords: HashSet<String> = contents
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .collect();
        info!("Loaded {} stopwords from {}", stopwords.len(), path.display());

        Ok(Self {
            stopwords,
            ..Self::english()
        })
    }
}

/// Produces the ordered normalized token sequence for a piece of text.
pub struct TokenPipeline {
    resources: LanguageResources,
}

impl TokenPipeline {
    /// Fails with `ResourceUnavailable` when the bundle is unusable (empty stopword set).
    pub fn new(resources: LanguageResources) -> Result<Self, PipelineError> {
        if resources.stopwords.is_empty() {
            return Err(PipelineError::ResourceUnavailable(
                "stopword set is empty".to_string(),
            ));
        }
        Ok(Self { resources })
    }

    /// Order follows the source text; duplicates are kept.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.resources
            .tokenizer
            .tokenize(text)
            .into_iter()
            .filter(|tok| is_alphabetic(tok))
            .filter(|tok| !self.resources.stopwords.contains(*tok))
            .map(|tok| self.resources.lemmatizer.lemmatize(tok))
            .collect()
    }

    pub fn stopword_count(&self) -> usize {
        self.resources.stopwords.len()
    }
}

fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}
