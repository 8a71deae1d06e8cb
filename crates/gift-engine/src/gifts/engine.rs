use super::catalog::GiftCatalog;
use super::classification::{classify, ThresholdFactor};
use super::descriptions::{describe, GiftDescriptions};
use super::domain::{Answer, GiftScores, KeyPolicy};
use super::error::AssessmentError;
use super::roles::{MinistryRoleDirectory, RecommendedRoles};
use super::scoring::compute_scores;
use crate::config::ScoringConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Combined outcome of one assessment submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftResult {
    pub scores: GiftScores,
    pub primary_gift: String,
    pub secondary_gifts: Vec<String>,
    pub descriptions: GiftDescriptions,
    pub recommended_roles: RecommendedRoles,
}

/// Stateless engine that turns answers into a classified, described result.
#[derive(Debug, Clone)]
pub struct GiftAssessmentEngine<'c> {
    catalog: &'c GiftCatalog,
    roles: &'c MinistryRoleDirectory,
    config: ScoringConfig,
}

impl GiftAssessmentEngine<'static> {
    /// Engine over the built-in motivational catalog and role directory.
    pub fn motivational(config: ScoringConfig) -> Self {
        Self::new(
            GiftCatalog::motivational(),
            MinistryRoleDirectory::standard(),
            config,
        )
    }
}

impl<'c> GiftAssessmentEngine<'c> {
    pub fn new(
        catalog: &'c GiftCatalog,
        roles: &'c MinistryRoleDirectory,
        config: ScoringConfig,
    ) -> Self {
        Self {
            catalog,
            roles,
            config,
        }
    }

    pub fn catalog(&self) -> &'c GiftCatalog {
        self.catalog
    }

    pub fn threshold_factor(&self) -> ThresholdFactor {
        self.config.threshold_factor
    }

    pub fn key_policy(&self) -> KeyPolicy {
        self.config.key_policy
    }

    pub fn assess(&self, answers: &[Answer]) -> Result<GiftResult, AssessmentError> {
        self.assess_with_threshold(answers, None)
    }

    /// Runs an assessment, overriding the configured threshold factor when given.
    pub fn assess_with_threshold(
        &self,
        answers: &[Answer],
        threshold_factor: Option<ThresholdFactor>,
    ) -> Result<GiftResult, AssessmentError> {
        let threshold_factor = threshold_factor.unwrap_or(self.config.threshold_factor);
        info!(
            answers = answers.len(),
            threshold_factor = threshold_factor.value(),
            key_policy = ?self.config.key_policy,
            "scoring gift assessment"
        );

        let scores = compute_scores(self.catalog, answers, self.config.key_policy)?;
        let classification = classify(self.catalog, &scores, threshold_factor)?;
        debug!(
            primary = %classification.primary.key,
            primary_score = classification.primary.score,
            threshold = classification.threshold,
            "primary gift selected"
        );

        let primary_gift = classification.primary_gift().to_string();
        let secondary_gifts = classification.secondary_gifts();
        let descriptions = describe(self.catalog, &primary_gift, &secondary_gifts)?;
        let recommended_roles = self.roles.recommend(&primary_gift, &secondary_gifts);

        info!(
            primary = %primary_gift,
            secondary = ?secondary_gifts,
            "gift assessment complete"
        );

        Ok(GiftResult {
            scores,
            primary_gift,
            secondary_gifts,
            descriptions,
            recommended_roles,
        })
    }
}
