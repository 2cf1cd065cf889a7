//! Skills extraction: pluggable, trait-based strategies over the skills-section tokens.
//!
//! `VocabularyMatcher` reports curated phrases only. `PhraseReconstructor` surfaces every
//! one- and two-word candidate for downstream review. The parser holds exactly one.

use std::collections::BTreeSet;

use crate::extraction::models::{SkillStrategy, SkillVocabulary};

/// A skills extractor. Input is the normalized token sequence of the skills section.
pub trait SkillExtractor: Send + Sync {
    fn extract(&self, tokens: &[String]) -> BTreeSet<String>;

    fn strategy(&self) -> SkillStrategy;
}

/// Matches vocabulary phrases as contiguous substrings of the space-joined tokens.
pub struct VocabularyMatcher {
    vocabulary: SkillVocabulary,
}

impl VocabularyMatcher {
    pub fn new(vocabulary: SkillVocabulary) -> Self {
        Self { vocabulary }
    }
}

impl SkillExtractor for VocabularyMatcher {
    fn extract(&self, tokens: &[String]) -> BTreeSet<String> {
        if tokens.is_empty() {
            return BTreeSet::new();
        }
        let joined = tokens.join(" ");
        self.vocabulary
            .phrases()
            .iter()
            .filter(|phrase| joined.contains(phrase.as_str()))
            .cloned()
            .collect()
    }

    fn strategy(&self) -> SkillStrategy {
        SkillStrategy::Vocabulary
    }
}

/// Emits every token and every adjacent-token bigram, unfiltered.
pub struct PhraseReconstructor;

impl SkillExtractor for PhraseReconstructor {
    fn extract(&self, tokens: &[String]) -> BTreeSet<String> {
        let mut phrases: BTreeSet<String> = tokens.iter().cloned().collect();
        phrases.extend(tokens.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
        phrases
    }

    fn strategy(&self) -> SkillStrategy {
        SkillStrategy::Phrases
    }
}

/// Builds the extractor named by `strategy`.
pub fn build_skill_extractor(
    strategy: SkillStrategy,
    vocabulary: &SkillVocabulary,
) -> Box<dyn SkillExtractor> {
    match strategy {
        SkillStrategy::Vocabulary => Box::new(VocabularyMatcher::new(vocabulary.clone())),
        SkillStrategy::Phrases => Box::new(PhraseReconstructor),
    }
}
