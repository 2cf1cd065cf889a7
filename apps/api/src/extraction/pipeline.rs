//! Pipeline orchestrator: source → normalize → skills section → fields → `ResumeRecord`.

use tracing::{debug, info};

use crate::errors::PipelineError;
use crate::extraction::fields::{extract_education, extract_experience_years};
use crate::extraction::models::{ExtractionProfile, RawDocument, ResumeRecord};
use crate::extraction::normalize::normalize;
use crate::extraction::section::extract_skills_section;
use crate::extraction::skills::{build_skill_extractor, SkillExtractor};
use crate::extraction::source::{extract_text, PdfDecoder, PdfExtractDecoder};
use crate::extraction::tokens::{LanguageResources, TokenPipeline};

/// Reusable résumé parser. Holds only read-only data, so one instance can serve
/// concurrent calls without locking.
pub struct ResumeParser {
    profile: ExtractionProfile,
    tokens: TokenPipeline,
    skills: Box<dyn SkillExtractor>,
    pdf: Box<dyn PdfDecoder>,
}

impl ResumeParser {
    /// Validates the language resources up front; a missing resource is a startup error.
    pub fn new(
        profile: ExtractionProfile,
        resources: LanguageResources,
    ) -> Result<Self, PipelineError> {
        Self::with_pdf_decoder(profile, resources, Box::new(PdfExtractDecoder))
    }

    pub fn with_pdf_decoder(
        profile: ExtractionProfile,
        resources: LanguageResources,
        pdf: Box<dyn PdfDecoder>,
    ) -> Result<Self, PipelineError> {
        let tokens = TokenPipeline::new(resources)?;
        let skills = build_skill_extractor(profile.skill_strategy, &profile.vocabulary);
        info!(
            "Resume parser ready: strategy={} vocabulary={} education_keywords={} stopwords={}",
            profile.skill_strategy.as_str(),
            profile.vocabulary.phrases().len(),
            profile.education_keywords.keywords().len(),
            tokens.stopword_count()
        );
        Ok(Self {
            profile,
            tokens,
            skills,
            pdf,
        })
    }

    pub fn profile(&self) -> &ExtractionProfile {
        &self.profile
    }

    /// Parses one document. Only decoding can fail; every extractor degrades to empty.
    pub fn parse(&self, doc: &RawDocument) -> Result<ResumeRecord, PipelineError> {
        let extracted = extract_text(doc, self.pdf.as_ref())?;
        // Letter-spacing and slash compounds are PDF extraction artifacts.
        let text = if doc.is_pdf() {
            normalize(&extracted, &self.profile.rewrites)
        } else {
            extracted
        };

        let section = extract_skills_section(&text, &self.profile.headings);
        let section_tokens = self.tokens.tokenize(section);
        let skills = self.skills.extract(&section_tokens);
        let education = extract_education(&text, &self.profile.education_keywords);
        let experience = extract_experience_years(&text);

        debug!(
            "Parsed '{}': section_tokens={} skills={} education={} experience={}",
            doc.filename,
            section_tokens.len(),
            skills.len(),
            education.len(),
            experience
        );

        Ok(ResumeRecord {
            skills,
            education,
            experience,
            skill_strategy: self.skills.strategy(),
            raw_text: text,
        })
    }
}

/// Parses `bytes` under `filename` with a freshly built default parser.
///
/// Long-running callers should build one `ResumeParser` and reuse it instead.
pub fn parse_resume(bytes: &[u8], filename: &str) -> Result<ResumeRecord, PipelineError> {
    let parser = ResumeParser::new(ExtractionProfile::default(), LanguageResources::english())?;
    parser.parse(&RawDocument::new(bytes.to_vec(), filename))
}
