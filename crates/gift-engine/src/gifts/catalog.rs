use std::collections::HashSet;
use std::sync::OnceLock;

static MOTIVATIONAL_CATALOG: OnceLock<GiftCatalog> = OnceLock::new();

/// A single scoreable category together with the text shown to respondents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftProfile {
    pub key: String,
    pub name: String,
    pub description: String,
    pub details: String,
}

impl GiftProfile {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: description.into(),
            details: details.into(),
        }
    }

    /// Display name without any parenthetical alias, e.g. `Perception`.
    pub fn canonical_name(&self) -> &str {
        strip_alias(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("a gift catalog needs at least one category")]
    Empty,
    #[error("category key '{0}' appears more than once")]
    DuplicateKey(String),
    #[error("display name '{0}' collides with another category once aliases are stripped")]
    DuplicateName(String),
    #[error("category key must not be blank")]
    BlankKey,
}

/// Immutable, ordered set of categories every assessment is scored against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftCatalog {
    gifts: Vec<GiftProfile>,
}

impl GiftCatalog {
    pub fn new(gifts: Vec<GiftProfile>) -> Result<Self, CatalogError> {
        if gifts.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut keys = HashSet::new();
        let mut names = HashSet::new();
        for gift in &gifts {
            if gift.key.trim().is_empty() {
                return Err(CatalogError::BlankKey);
            }
            if !keys.insert(gift.key.to_ascii_uppercase()) {
                return Err(CatalogError::DuplicateKey(gift.key.clone()));
            }
            if !names.insert(gift.canonical_name().to_uppercase()) {
                return Err(CatalogError::DuplicateName(gift.name.clone()));
            }
        }

        Ok(Self { gifts })
    }

    /// The seven motivational gifts of Romans 12:6-8, built once per process.
    pub fn motivational() -> &'static GiftCatalog {
        MOTIVATIONAL_CATALOG.get_or_init(|| GiftCatalog {
            gifts: motivational_profiles(),
        })
    }

    pub fn gifts(&self) -> &[GiftProfile] {
        &self.gifts
    }

    pub fn len(&self) -> usize {
        self.gifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gifts.is_empty()
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.gifts
            .iter()
            .position(|gift| gift.key.eq_ignore_ascii_case(key))
    }

    pub fn by_key(&self, key: &str) -> Option<&GiftProfile> {
        self.position(key).map(|index| &self.gifts[index])
    }

    /// Case-insensitive name lookup. An exact match on the full or
    /// alias-stripped name wins, otherwise the first prefix match.
    pub fn by_name_prefix(&self, name: &str) -> Option<&GiftProfile> {
        let needle = name.trim().to_uppercase();
        if needle.is_empty() {
            return None;
        }
        self.gifts
            .iter()
            .find(|gift| {
                gift.name.trim().to_uppercase() == needle
                    || gift.canonical_name().to_uppercase() == needle
            })
            .or_else(|| {
                self.gifts
                    .iter()
                    .find(|gift| gift.name.to_uppercase().starts_with(&needle))
            })
    }
}

/// Drops everything from the first `(` onward and trims the remainder.
pub fn strip_alias(name: &str) -> &str {
    match name.find('(') {
        Some(index) => name[..index].trim(),
        None => name.trim(),
    }
}

fn motivational_profiles() -> Vec<GiftProfile> {
    vec![
        GiftProfile::new(
            "PERCEPTION",
            "Perception (Prophecy)",
            "The perceiver is one who easily notices or understands and declares the will of God /the will of authority in an organization.",
            "The perceiver meets spiritual needs of others; individuals or group of people and keeps the \
church or organization centered on spiritual or Godly principles. Key characteristics include:\n\
• Easily and quickly sees what is good or bad and hates doing wrong\n\
• Has strong convictions about right and wrong\n\
• Can easily discern character in others\n\
• Encourages others to admit when they do wrong\n\
• Believes problems and difficulties bring about spiritual growth\n\
• Has few but close relationships with others\n\
• Believes the Bible contains truth for all areas of life\n\
• Lives boldly directed by spiritual rules\n\
• Speaks truth without seeking to please others\n\
• Has strong influence when speaking\n\
• Feels deeply about wrongdoing and sin",
        ),
        GiftProfile::new(
            "SERVICE",
            "Service",
            "The server renders practical service to others and keeps the work of ministry or an organization moving.",
            "The server conscientiously helps, assists, carries out instructions and gives of themselves to be of use \
in a wide variety of ways. They receive joy in helping, assisting and carrying out instructions. \
Key characteristics include:\n\
• Able to identify and quickly meet needs of others\n\
• Enjoys hands-on work\n\
• Keeps things neat and orderly\n\
• Easily remembers details and past events\n\
• Enjoys having people around, especially at home\n\
• Completes what they start\n\
• Finds it difficult to turn down requests for help\n\
• Puts others' needs before their own\n\
• Enjoys short-term tasks\n\
• Shows love through actions more than words\n\
• Does more than asked",
        ),
        GiftProfile::new(
            "TEACHING",
            "Teaching",
            "The teacher researches and teaches what they know; they ascertain the truth of things that happen.",
            "The teacher meets the mental needs of others and keeps them studying and learning. They may teach \
through writing rather than in person. Key characteristics include:\n\
• Presents information in an orderly way\n\
• Verifies accuracy of information\n\
• Enjoys studying and research\n\
• Values proper use of words\n\
• Uses Biblical examples in teaching\n\
• Concerned about correct use of Scripture\n\
• Prioritizes truth and facts over feelings\n\
• Searches for truth before accepting\n\
• Focuses on helping others grow in faith\n\
• Believes teaching is foundation for strong Christian life\n\
• Solves problems through Biblical teaching",
        ),
        GiftProfile::new(
            "EXHORTATION",
            "Exhortation",
            "The exhorter is devoted to making people live life effectively by encouraging personal progress.",
            "While teachers aim for the head, exhorters aim for the heart. They meet psychological needs and \
help apply spiritual truths. Key characteristics include:\n\
• Loves encouraging others to live fully\n\
• Values seeing response when teaching\n\
• Emphasizes practical application of truth\n\
• Prefers practical learning\n\
• Guides others in spiritual growth\n\
• Enjoys working with people\n\
• Encourages development of helping abilities\n\
• Learns through experience\n\
• Gives constructive advice\n\
• Communicates effectively\n\
• Accepts people without judgment\n\
• Maintains positive outlook",
        ),
        GiftProfile::new(
            "GIVING",
            "Giving",
            "The giver has an inner motivation and desire to share in love and concern for the needy.",
            "Givers share themselves, material goods and money to meet specific needs. They share traits with \
servers and love God's Word. Key characteristics include:\n\
• Gives freely of money and resources\n\
• Prefers to give anonymously\n\
• Wants to be part of work they support\n\
• Prays for others' needs and salvation\n\
• Finds joy in meeting important needs\n\
• Values quality in giving\n\
• Gives as directed by inner prompting\n\
• Supports both individual and ministry needs\n\
• Views hospitality as giving opportunity\n\
• Manages money wisely\n\
• Quick to volunteer help\n\
• Prays about giving decisions",
        ),
        GiftProfile::new(
            "ADMINISTRATION",
            "Administration",
            "The administrator finds leadership work easy and is highly motivated to give direction.",
            "Administrators are facilitators, organizers, rulers and leaders who meet functional needs and raise \
vision. Key characteristics include:\n\
• Loves organizing events and programs\n\
• Communicates effectively\n\
• Values learning under leadership\n\
• Takes leadership when called\n\
• Steps in when leadership is needed\n\
• Works well on long-term projects\n\
• Sees big picture clearly\n\
• Skilled at selecting and equipping people\n\
• Enjoys supervising others\n\
• Accepts constructive criticism\n\
• Finds joy in work\n\
• Aims for success in all endeavors\n\
• Shares credit with team members",
        ),
        GiftProfile::new(
            "COMPASSION",
            "Compassion",
            "The compassionate person cheerfully demonstrates mercy for those who are suffering physically or spiritually.",
            "They provide personal and emotional support while maintaining right attitudes and relationships. \
Key characteristics include:\n\
• Shows consistent love\n\
• Sees and emphasizes good in others\n\
• Senses needs through atmosphere\n\
• Drawn to people with problems\n\
• Helps overcome difficulties\n\
• Cares for hidden hurts\n\
• Facilitates good relationships\n\
• Gives best opportunities to others\n\
• Avoids causing hurt\n\
• Discerns wrong motives\n\
• Drawn to other compassionate people\n\
• Does unexpected kind acts\n\
• Trustworthy and trusting\n\
• Avoids conflict\n\
• Takes time with tasks",
        ),
    ]
}
