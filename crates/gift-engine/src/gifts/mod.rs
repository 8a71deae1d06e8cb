//! Motivational gift scoring: catalog, answer scoring, classification,
//! description lookup, and ministry role suggestions.

pub mod catalog;
pub mod classification;
pub mod descriptions;
pub mod domain;
pub mod engine;
pub mod error;
pub mod roles;
pub mod router;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use catalog::{strip_alias, CatalogError, GiftCatalog, GiftProfile};
pub use classification::{classify, GiftClassification, RankedGift, ThresholdFactor};
pub use descriptions::{describe, describe_one, GiftDescription, GiftDescriptions};
pub use domain::{Answer, GiftScores, KeyPolicy, MAX_RATING, MIN_RATING};
pub use engine::{GiftAssessmentEngine, GiftResult};
pub use error::{AnswerViolation, AssessmentError};
pub use roles::{MinistryRoleDirectory, RecommendedRoles, RoleMapping};
pub use router::{assessment_router, AssessmentRequest, CatalogEntryView};
pub use scoring::compute_scores;
