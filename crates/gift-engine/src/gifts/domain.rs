use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// One rated assessment statement and how strongly it bears on each category.
///
/// Serialized with the field names existing clients send (`answer`,
/// `gift_correlation`); `rating` and `correlation` are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<u32>,
    #[serde(rename = "answer", alias = "rating")]
    pub rating: i32,
    #[serde(rename = "gift_correlation", alias = "correlation", default)]
    pub correlation: BTreeMap<String, f64>,
}

impl Answer {
    pub fn new<K, I>(rating: i32, correlation: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        Self {
            question_id: None,
            rating,
            correlation: correlation
                .into_iter()
                .map(|(key, weight)| (key.into(), weight))
                .collect(),
        }
    }

    pub fn with_question(mut self, question_id: u32) -> Self {
        self.question_id = Some(question_id);
        self
    }
}

/// How correlation keys that match no catalog category are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyPolicy {
    /// Unknown keys are skipped.
    #[default]
    Lenient,
    /// Unknown keys reject the answer.
    Strict,
}

/// Category key to share of the overall profile. Keys use catalog spelling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GiftScores(BTreeMap<String, f64>);

impl GiftScores {
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(key, score)| (key.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, score: f64) {
        self.0.insert(key.into(), score);
    }

    pub fn into_inner(self) -> BTreeMap<String, f64> {
        self.0
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for GiftScores {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, score)| (key.into(), score))
                .collect(),
        )
    }
}
