use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rating::CategoryRatings;

/// Store-assigned identifier of a game. Opaque to everything but the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A game as stored in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub name: String,
    pub image_url: String, // http(s) URL or data:image URI
    pub ratings: CategoryRatings,
    pub total_rating: f64, // Always ratings.total()
    pub created_at: DateTime<Utc>,
    pub usage_hours: Option<f64>,
    pub added_by: String,
}

impl GameRecord {
    /// Combines a validated submission with the identity the store assigned to it
    pub fn from_new(id: GameId, game: NewGame, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: game.name,
            image_url: game.image_url,
            ratings: game.ratings,
            total_rating: game.total_rating,
            created_at,
            usage_hours: game.usage_hours,
            added_by: game.added_by,
        }
    }
}

/// A game that has passed validation but has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewGame {
    pub name: String,
    pub image_url: String,
    pub ratings: CategoryRatings,
    pub total_rating: f64,
    pub usage_hours: Option<f64>,
    pub added_by: String,
}

impl NewGame {
    /// Creates a submission, deriving the total from the category ratings
    pub fn new(
        name: String,
        image_url: String,
        ratings: CategoryRatings,
        usage_hours: Option<f64>,
        added_by: String,
    ) -> Self {
        Self {
            name,
            image_url,
            total_rating: ratings.total(),
            ratings,
            usage_hours,
            added_by,
        }
    }
}

/// Where a game image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource<'a> {
    Url(&'a str),
    DataUri(&'a str),
}

impl<'a> ImageSource<'a> {
    pub fn classify(image: &'a str) -> Self {
        if image.starts_with("data:") {
            ImageSource::DataUri(image)
        } else {
            ImageSource::Url(image)
        }
    }

    /// Data URIs must carry an image media type; URLs are taken as-is
    pub fn is_image(&self) -> bool {
        match self {
            ImageSource::Url(_) => true,
            ImageSource::DataUri(uri) => uri.starts_with("data:image/"),
        }
    }
}
