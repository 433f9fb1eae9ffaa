//! Stored user preferences, one document per content category.
//!
//! Preferences are represented as a tagged union per category rather than an
//! untyped map, so each feed's vocabulary mapper receives a typed list of
//! strings instead of probing arbitrary keys. Documents are read fresh on
//! every aggregation call; absence of a document is never a failure, each
//! category carries documented defaults instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::UserId;

/// Content category a preference document applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    Movies,
    News,
    Videos,
    Social,
    Jobs,
}

impl Category {
    /// Stable lowercase name used in URLs and storage keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Movies => "movies",
            Self::News => "news",
            Self::Videos => "videos",
            Self::Social => "social",
            Self::Jobs => "jobs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "movies" => Ok(Self::Movies),
            "news" => Ok(Self::News),
            "videos" => Ok(Self::Videos),
            "social" => Ok(Self::Social),
            "jobs" => Ok(Self::Jobs),
            _ => Err(UnknownCategory(s.to_owned())),
        }
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preference category: {0}")]
pub struct UnknownCategory(pub String);

/// Per-category preference payload.
///
/// The serialised form is tagged with the category name so a document is
/// self-describing:
///
/// ```json
/// { "category": "food", "cuisines": ["italian"], "dietary": ["vegetarian"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum CategoryPreferences {
    Food {
        #[serde(default)]
        cuisines: Vec<String>,
        #[serde(default)]
        dietary: Vec<String>,
    },
    Movies {
        #[serde(default)]
        genres: Vec<String>,
        #[serde(default)]
        languages: Vec<String>,
    },
    News {
        #[serde(default)]
        categories: Vec<String>,
    },
    Videos {
        #[serde(default)]
        topics: Vec<String>,
    },
    Social {
        #[serde(default)]
        subreddits: Vec<String>,
    },
    Jobs {
        #[serde(default)]
        categories: Vec<String>,
    },
}

impl CategoryPreferences {
    /// The category this payload belongs to.
    pub fn category(&self) -> Category {
        match self {
            Self::Food { .. } => Category::Food,
            Self::Movies { .. } => Category::Movies,
            Self::News { .. } => Category::News,
            Self::Videos { .. } => Category::Videos,
            Self::Social { .. } => Category::Social,
            Self::Jobs { .. } => Category::Jobs,
        }
    }

    /// Documented defaults used when no document exists for a category or
    /// when the caller presented no identity.
    pub fn default_for(category: Category) -> Self {
        match category {
            Category::Food => Self::Food {
                cuisines: vec!["italian".to_owned(), "american".to_owned()],
                dietary: Vec::new(),
            },
            Category::Movies => Self::Movies {
                genres: vec!["action".to_owned(), "comedy".to_owned()],
                languages: vec!["english".to_owned()],
            },
            Category::News => Self::News {
                categories: vec!["general".to_owned()],
            },
            Category::Videos => Self::Videos {
                topics: vec!["technology".to_owned()],
            },
            Category::Social => Self::Social {
                subreddits: vec!["technology".to_owned()],
            },
            Category::Jobs => Self::Jobs {
                categories: vec!["technology".to_owned()],
            },
        }
    }
}

/// A user's stored preferences for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceDocument {
    pub user_id: UserId,
    #[serde(flatten)]
    pub preferences: CategoryPreferences,
}

impl PreferenceDocument {
    /// Construct a document for a user and payload.
    pub fn new(user_id: UserId, preferences: CategoryPreferences) -> Self {
        Self {
            user_id,
            preferences,
        }
    }

    /// The category the document applies to.
    pub fn category(&self) -> Category {
        self.preferences.category()
    }
}
