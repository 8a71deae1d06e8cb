use super::catalog::GiftCatalog;
use super::domain::GiftScores;
use super::error::AssessmentError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Ranks after the primary that may qualify as secondary gifts.
const SECONDARY_WINDOW: usize = 2;
const MAX_SECONDARY: usize = 2;

/// Fraction of the primary score a contender must reach to count as secondary.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ThresholdFactor(f64);

impl ThresholdFactor {
    pub const DEFAULT: f64 = 0.80;

    pub fn new(value: f64) -> Result<Self, AssessmentError> {
        if value.is_finite() && value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(AssessmentError::InvalidThreshold(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for ThresholdFactor {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl<'de> Deserialize<'de> for ThresholdFactor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        ThresholdFactor::new(value).map_err(serde::de::Error::custom)
    }
}

/// A category placed in the ranking, named without its alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedGift {
    pub key: String,
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftClassification {
    pub primary: RankedGift,
    pub secondary: Vec<RankedGift>,
    pub threshold: f64,
}

impl GiftClassification {
    pub fn primary_gift(&self) -> &str {
        &self.primary.name
    }

    pub fn secondary_gifts(&self) -> Vec<String> {
        self.secondary.iter().map(|gift| gift.name.clone()).collect()
    }
}

/// Picks the primary gift and up to two secondaries scoring within
/// `threshold_factor` of it. At least one secondary is returned whenever the
/// scores cover two or more categories.
pub fn classify(
    catalog: &GiftCatalog,
    scores: &GiftScores,
    threshold_factor: ThresholdFactor,
) -> Result<GiftClassification, AssessmentError> {
    let mut ranked = scores
        .iter()
        .map(|(key, score)| {
            let gift = catalog
                .by_key(key)
                .ok_or_else(|| AssessmentError::UnknownCategory(key.to_string()))?;
            Ok(RankedGift {
                key: gift.key.clone(),
                name: gift.canonical_name().to_string(),
                score,
            })
        })
        .collect::<Result<Vec<_>, AssessmentError>>()?;

    ranked.sort_by(|a, b| match b.score.total_cmp(&a.score) {
        Ordering::Equal => a.key.cmp(&b.key),
        other => other,
    });

    let mut ranked = ranked.into_iter();
    let primary = ranked.next().ok_or(AssessmentError::EmptyScores)?;
    let threshold = primary.score * threshold_factor.value();

    let contenders: Vec<RankedGift> = ranked.take(SECONDARY_WINDOW).collect();
    let mut secondary: Vec<RankedGift> = contenders
        .iter()
        .filter(|gift| gift.score >= threshold)
        .take(MAX_SECONDARY)
        .cloned()
        .collect();

    if secondary.is_empty() {
        if let Some(runner_up) = contenders.into_iter().next() {
            secondary.push(runner_up);
        }
    }

    Ok(GiftClassification {
        primary,
        secondary,
        threshold,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_factor_accepts_half_open_unit_interval() {
        assert!(ThresholdFactor::new(1.0).is_ok());
        assert!(ThresholdFactor::new(0.01).is_ok());
        assert_eq!(
            ThresholdFactor::new(0.0),
            Err(AssessmentError::InvalidThreshold(0.0))
        );
        assert!(ThresholdFactor::new(1.0001).is_err());
        assert!(ThresholdFactor::new(f64::NAN).is_err());
    }

    #[test]
    fn threshold_factor_deserialization_validates() {
        let parsed: ThresholdFactor = serde_json::from_str("0.95").expect("valid factor");
        assert_eq!(parsed.value(), 0.95);
        assert!(serde_json::from_str::<ThresholdFactor>("-0.5").is_err());
    }

    #[test]
    fn default_threshold_is_eighty_percent() {
        assert_eq!(ThresholdFactor::default().value(), 0.80);
    }
}
