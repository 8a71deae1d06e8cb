use super::catalog::{GiftCatalog, GiftProfile};
use super::error::AssessmentError;
use serde::{Deserialize, Serialize};

/// Catalog text for one gift; `gift` carries the full display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftDescription {
    pub gift: String,
    pub description: String,
    pub details: String,
}

impl From<&GiftProfile> for GiftDescription {
    fn from(profile: &GiftProfile) -> Self {
        Self {
            gift: profile.name.clone(),
            description: profile.description.clone(),
            details: profile.details.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftDescriptions {
    pub primary: GiftDescription,
    pub secondary: Vec<GiftDescription>,
}

/// Resolves catalog text for a classification by case-insensitive name, exact
/// names first, then prefixes.
pub fn describe<S: AsRef<str>>(
    catalog: &GiftCatalog,
    primary: &str,
    secondary: &[S],
) -> Result<GiftDescriptions, AssessmentError> {
    let primary = describe_one(catalog, primary)?;
    let secondary = secondary
        .iter()
        .map(|name| describe_one(catalog, name.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GiftDescriptions { primary, secondary })
}

pub fn describe_one(catalog: &GiftCatalog, name: &str) -> Result<GiftDescription, AssessmentError> {
    catalog
        .by_name_prefix(name)
        .map(GiftDescription::from)
        .ok_or_else(|| AssessmentError::UnknownCategory(name.to_string()))
}
