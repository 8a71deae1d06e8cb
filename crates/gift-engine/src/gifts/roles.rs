use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

static MINISTRY_DIRECTORY: OnceLock<MinistryRoleDirectory> = OnceLock::new();

/// Secondary gifts contribute only their leading roles.
const SECONDARY_ROLES_PER_GIFT: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleMapping {
    pub gift: String,
    pub roles: Vec<String>,
    pub areas: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedRoles {
    pub primary_roles: Vec<String>,
    pub secondary_roles: Vec<String>,
    pub ministry_areas: Vec<String>,
}

/// Maps canonical gift names to suggested ministry roles and areas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinistryRoleDirectory {
    mappings: Vec<RoleMapping>,
}

impl MinistryRoleDirectory {
    pub fn new(mappings: Vec<RoleMapping>) -> Self {
        Self { mappings }
    }

    pub fn standard() -> &'static MinistryRoleDirectory {
        MINISTRY_DIRECTORY.get_or_init(|| Self::new(standard_mappings()))
    }

    pub fn mapping(&self, gift: &str) -> Option<&RoleMapping> {
        self.mappings
            .iter()
            .find(|mapping| mapping.gift.eq_ignore_ascii_case(gift.trim()))
    }

    /// Gifts without a mapping contribute nothing.
    pub fn recommend<S: AsRef<str>>(&self, primary: &str, secondary: &[S]) -> RecommendedRoles {
        let mut primary_roles = Vec::new();
        let mut secondary_roles = Vec::new();
        let mut areas = BTreeSet::new();

        if let Some(mapping) = self.mapping(primary) {
            primary_roles.extend(mapping.roles.iter().cloned());
            areas.extend(mapping.areas.iter().cloned());
        }

        for gift in secondary {
            if let Some(mapping) = self.mapping(gift.as_ref()) {
                secondary_roles.extend(
                    mapping
                        .roles
                        .iter()
                        .take(SECONDARY_ROLES_PER_GIFT)
                        .cloned(),
                );
                areas.extend(mapping.areas.iter().cloned());
            }
        }

        RecommendedRoles {
            primary_roles: dedup_preserving_order(primary_roles),
            secondary_roles: dedup_preserving_order(secondary_roles),
            ministry_areas: areas.into_iter().collect(),
        }
    }
}

fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|value| seen.insert(value.clone()))
        .collect()
}

fn mapping(gift: &str, roles: &[&str], areas: &[&str]) -> RoleMapping {
    RoleMapping {
        gift: gift.to_string(),
        roles: roles.iter().map(|role| role.to_string()).collect(),
        areas: areas.iter().map(|area| area.to_string()).collect(),
    }
}

fn standard_mappings() -> Vec<RoleMapping> {
    vec![
        mapping(
            "Perception",
            &[
                "Prayer Ministry Leader",
                "Intercessory Prayer Coordinator",
                "Deliverance Team Member",
                "Spiritual Direction Mentor",
            ],
            &["Counseling Ministry", "Educational Ministry", "Outreach Ministry"],
        ),
        mapping(
            "Teaching",
            &[
                "Bible Teacher",
                "Workshop Leader",
                "Discipleship Coordinator",
                "New Believers Instructor",
                "Church Library Keeper",
            ],
            &["Leadership Ministry", "Educational Ministry"],
        ),
        mapping(
            "Service",
            &[
                "Church Office Assistant",
                "Maintenance Coordinator",
                "Hospitality Team Member",
                "Usher",
                "Information Desk Coordinator",
            ],
            &["Practical Ministry", "Caring Ministry"],
        ),
        mapping(
            "Exhortation",
            &[
                "Marriage Counselor",
                "Teen Counselor",
                "Home Visitation Coordinator",
                "Follow-up Team Leader",
                "Small Group Leader",
            ],
            &["Counseling Ministry", "Leadership Ministry"],
        ),
        mapping(
            "Giving",
            &[
                "Outreach Coordinator",
                "Missions Support Coordinator",
                "Evangelism Team Leader",
                "Resource Distribution Coordinator",
            ],
            &["Practical Ministry", "Caring Ministry", "Outreach Ministry"],
        ),
        mapping(
            "Administration",
            &[
                "Church Administrator",
                "Ministry Department Head",
                "Event Coordinator",
                "Sunday School Superintendent",
                "Home Group Network Leader",
            ],
            &["Leadership Ministry", "Educational Ministry"],
        ),
        mapping(
            "Compassion",
            &[
                "Hospital Visitation Coordinator",
                "Prison Ministry Leader",
                "Elderly Care Coordinator",
                "Crisis Response Team Leader",
                "Prayer Help Line Coordinator",
            ],
            &["Caring Ministry", "Practical Ministry"],
        ),
    ]
}
