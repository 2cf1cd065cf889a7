use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::extraction::models::{EducationKeywords, ExtractionProfile, SkillStrategy, SkillVocabulary};
use crate::extraction::tokens::LanguageResources;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if a value is malformed or a configured word list is unusable.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub skill_strategy: SkillStrategy,
    pub skills_vocabulary_path: Option<PathBuf>,
    pub education_keywords_path: Option<PathBuf>,
    pub stopwords_path: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            skill_strategy: match std::env::var("SKILL_STRATEGY") {
                Ok(value) => value
                    .parse::<SkillStrategy>()
                    .map_err(anyhow::Error::msg)
                    .context("SKILL_STRATEGY is invalid")?,
                Err(_) => SkillStrategy::default(),
            },
            skills_vocabulary_path: optional_path("SKILLS_VOCABULARY_PATH"),
            education_keywords_path: optional_path("EDUCATION_KEYWORDS_PATH"),
            stopwords_path: optional_path("STOPWORDS_PATH"),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(value) => value
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }

    /// Builds the extraction profile, reading vocabulary overrides from disk.
    pub fn extraction_profile(&self) -> Result<ExtractionProfile> {
        let mut profile = ExtractionProfile {
            skill_strategy: self.skill_strategy,
            ..ExtractionProfile::default()
        };
        if let Some(path) = &self.skills_vocabulary_path {
            profile.vocabulary = SkillVocabulary::new(read_word_list(path)?);
        }
        if let Some(path) = &self.education_keywords_path {
            profile.education_keywords = EducationKeywords::new(read_word_list(path)?);
        }
        Ok(profile)
    }

    pub fn language_resources(&self) -> Result<LanguageResources> {
        match &self.stopwords_path {
            Some(path) => Ok(LanguageResources::english_with_stopwords(path)?),
            None => Ok(LanguageResources::english()),
        }
    }
}

fn optional_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

/// One entry per line; blank lines and `#` comments are skipped. An empty list is an error.
fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read word list '{}'", path.display()))?;
    let entries: Vec<String> = contents
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect();
    if entries.is_empty() {
        bail!("Word list '{}' has no entries", path.display());
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            skill_strategy: SkillStrategy::Phrases,
            skills_vocabulary_path: None,
            education_keywords_path: None,
            stopwords_path: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "resume_parser_{}_{}",
            std::process::id(),
            name
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_profile_keeps_strategy() {
        let profile = base_config().extraction_profile().unwrap();
        assert_eq!(profile.skill_strategy, SkillStrategy::Phrases);
        assert!(!profile.vocabulary.is_empty());
    }

    #[test]
    fn test_vocabulary_file_overrides_defaults() {
        let path = write_temp("vocab.txt", "# curated\nFigma\n\nMotion Graphics\n");
        let config = Config {
            skills_vocabulary_path: Some(path.clone()),
            ..base_config()
        };
        let profile = config.extraction_profile().unwrap();
        assert_eq!(profile.vocabulary.phrases(), &["figma", "motion graphics"]);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_empty_word_list_is_error() {
        let path = write_temp("empty.txt", "# nothing here\n\n");
        let config = Config {
            education_keywords_path: Some(path.clone()),
            ..base_config()
        };
        assert!(config.extraction_profile().is_err());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_stopword_file_is_error() {
        let config = Config {
            stopwords_path: Some(PathBuf::from("/nonexistent/stopwords.txt")),
            ..base_config()
        };
        assert!(config.language_resources().is_err());
    }
}
