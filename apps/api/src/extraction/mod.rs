// Résumé extraction pipeline.
// Implements: text source, normalization, token pipeline, skills section, field extractors.
// Pure and synchronous; the HTTP handlers run it on a blocking thread.

pub mod fields;
pub mod handlers;
pub mod lexicon;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod section;
pub mod skills;
pub mod source;
pub mod tokens;

pub use models::{ExtractionProfile, RawDocument, ResumeRecord, SkillStrategy};
pub use pipeline::{parse_resume, ResumeParser};
