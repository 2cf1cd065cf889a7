use std::collections::BTreeSet;
use std::str::FromStr;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::extraction::lexicon::{
    CANONICAL_REWRITES, DEFAULT_EDUCATION_KEYWORDS, DEFAULT_SKILLS, FOLLOWING_SECTION_HEADINGS,
    SKILLS_HEADINGS,
};

/// A résumé as handed to the pipeline: raw bytes plus the filename they arrived under.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Bytes,
    pub filename: String,
}

impl RawDocument {
    pub fn new(bytes: impl Into<Bytes>, filename: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            filename: filename.into(),
        }
    }

    /// Suffix match is case-sensitive: `resume.PDF` is read as plain text.
    pub fn is_pdf(&self) -> bool {
        self.filename.ends_with(".pdf")
    }
}

/// Which skills extractor the parser runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillStrategy {
    /// Report only phrases from the curated vocabulary.
    #[default]
    Vocabulary,
    /// Report every token and adjacent-token bigram from the skills section.
    Phrases,
}

impl SkillStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillStrategy::Vocabulary => "vocabulary",
            SkillStrategy::Phrases => "phrases",
        }
    }
}

impl FromStr for SkillStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vocabulary" => Ok(SkillStrategy::Vocabulary),
            "phrases" => Ok(SkillStrategy::Phrases),
            other => Err(format!(
                "unknown skill strategy '{other}' (expected 'vocabulary' or 'phrases')"
            )),
        }
    }
}

/// Canonical skill phrases, lowercase, possibly multi-word.
#[derive(Debug, Clone, Serialize)]
pub struct SkillVocabulary {
    phrases: Vec<String>,
}

impl SkillVocabulary {
    /// Lowercases, trims and drops blank or repeated entries. First occurrence wins.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            phrases: normalize_entries(phrases),
        }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS)
    }
}

/// Keywords whose presence anywhere in the text marks an education signal.
#[derive(Debug, Clone, Serialize)]
pub struct EducationKeywords {
    keywords: Vec<String>,
}

impl EducationKeywords {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: normalize_entries(keywords),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for EducationKeywords {
    fn default() -> Self {
        Self::new(DEFAULT_EDUCATION_KEYWORDS)
    }
}

/// Heading words that open and close the skills section.
#[derive(Debug, Clone, Serialize)]
pub struct SectionHeadings {
    pub skills: Vec<String>,
    pub following: Vec<String>,
}

impl Default for SectionHeadings {
    fn default() -> Self {
        Self {
            skills: normalize_entries(SKILLS_HEADINGS),
            following: normalize_entries(FOLLOWING_SECTION_HEADINGS),
        }
    }
}

/// Immutable reference data injected into the parser at construction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionProfile {
    pub skill_strategy: SkillStrategy,
    pub vocabulary: SkillVocabulary,
    pub education_keywords: EducationKeywords,
    pub headings: SectionHeadings,
    pub rewrites: Vec<(String, String)>,
}

impl Default for ExtractionProfile {
    fn default() -> Self {
        Self {
            skill_strategy: SkillStrategy::default(),
            vocabulary: SkillVocabulary::default(),
            education_keywords: EducationKeywords::default(),
            headings: SectionHeadings::default(),
            rewrites: CANONICAL_REWRITES
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }
}

/// Structured facts extracted from one résumé.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Sorted and deduplicated.
    pub skills: BTreeSet<String>,
    pub education: BTreeSet<String>,
    pub experience: u64,
    pub skill_strategy: SkillStrategy,
    /// Full normalized text, kept for audit.
    pub raw_text: String,
}

fn normalize_entries<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry.as_ref().trim().to_lowercase();
        if !entry.is_empty() && !out.contains(&entry) {
            out.push(entry);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_suffix_is_case_sensitive() {
        assert!(RawDocument::new(Vec::<u8>::new(), "cv.pdf").is_pdf());
        assert!(!RawDocument::new(Vec::<u8>::new(), "cv.PDF").is_pdf());
        assert!(!RawDocument::new(Vec::<u8>::new(), "cv.pdf.txt").is_pdf());
    }

    #[test]
    fn test_skill_strategy_parses_known_values() {
        assert_eq!("vocabulary".parse::<SkillStrategy>().unwrap(), SkillStrategy::Vocabulary);
        assert_eq!(" Phrases ".parse::<SkillStrategy>().unwrap(), SkillStrategy::Phrases);
        assert!("fuzzy".parse::<SkillStrategy>().is_err());
    }

    #[test]
    fn test_vocabulary_normalizes_and_dedups() {
        let vocab = SkillVocabulary::new(["  Typography ", "typography", "", "Graphic Design"]);
        assert_eq!(vocab.phrases(), &["typography", "graphic design"]);
    }

    #[test]
    fn test_default_profile_has_curated_lists() {
        let profile = ExtractionProfile::default();
        assert_eq!(profile.skill_strategy, SkillStrategy::Vocabulary);
        assert!(profile.vocabulary.phrases().contains(&"ui ux design".to_string()));
        assert_eq!(profile.education_keywords.keywords().len(), 7);
        assert!(profile.headings.following.contains(&"work experience".to_string()));
    }

    #[test]
    fn test_record_serializes_skills_sorted() {
        let record = ResumeRecord {
            skills: ["typography", "graphic design"].iter().map(|s| s.to_string()).collect(),
            education: BTreeSet::new(),
            experience: 0,
            skill_strategy: SkillStrategy::Vocabulary,
            raw_text: String::new(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["skills"][0], "graphic design");
        assert_eq!(json["skills"][1], "typography");
        assert_eq!(json["skill_strategy"], "vocabulary");
    }
}
