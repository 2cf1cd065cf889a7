//! Résumé parser: extracts skills, education and years of experience from résumé
//! documents, with a thin HTTP shell around the pipeline.

pub mod config;
pub mod errors;
pub mod extraction;
pub mod routes;
pub mod state;
