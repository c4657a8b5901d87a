use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::EnumIter;

/// Highest score a single category can receive.
pub const MAX_RATING: f64 = 5.0;

/// The fixed evaluation axes every game is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Gameplay,
    Graphics,
    Audio,
    Atmosphere,
    Satisfaction,
}

impl Category {
    /// Key used in rating maps and JSON payloads
    pub fn key(self) -> &'static str {
        match self {
            Category::Gameplay => "gameplay",
            Category::Graphics => "graphics",
            Category::Audio => "audio",
            Category::Atmosphere => "atmosphere",
            Category::Satisfaction => "satisfaction",
        }
    }

    /// Human readable label shown on cards
    pub fn label(self) -> &'static str {
        match self {
            Category::Gameplay => "Gameplay",
            Category::Graphics => "Graphics",
            Category::Audio => "Audio",
            Category::Atmosphere => "Atmosphere",
            Category::Satisfaction => "Satisfaction",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl TryFrom<&str> for Category {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "gameplay" => Ok(Category::Gameplay),
            "graphics" => Ok(Category::Graphics),
            "audio" => Ok(Category::Audio),
            "atmosphere" => Ok(Category::Atmosphere),
            "satisfaction" => Ok(Category::Satisfaction),
            _ => Err(s.to_string()),
        }
    }
}

/// A category score between 0 and 5 in half-point steps.
///
/// Stored as a count of half points so that sums stay exact.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(u8);

impl Rating {
    pub const ZERO: Rating = Rating(0);
    pub const MAX: Rating = Rating(10);

    /// Returns `None` unless `value` is one of 0, 0.5, ..., 5
    pub fn new(value: f64) -> Option<Self> {
        if !value.is_finite() || !(0.0..=MAX_RATING).contains(&value) {
            return None;
        }

        let doubled = value * 2.0;
        if doubled.fract() != 0.0 {
            return None;
        }

        Some(Self(doubled as u8))
    }

    /// Like [`Rating::new`] but falls back to zero for anything invalid
    pub fn or_zero(value: f64) -> Self {
        Self::new(value).unwrap_or_default()
    }

    pub fn half_steps(self) -> u8 {
        self.0
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

impl TryFrom<f64> for Rating {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Rating::new(value).ok_or_else(|| {
            format!(
                "{} is not a rating between 0 and {} in steps of 0.5",
                value, MAX_RATING
            )
        })
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
