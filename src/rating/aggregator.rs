use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::IntoEnumIterator;
use tracing::debug;

use super::category::{Category, Rating, MAX_RATING};

/// Highest total a game can reach (five categories at full marks).
pub const MAX_TOTAL_RATING: f64 = MAX_RATING * 5.0;

/// One rating per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRatings {
    pub gameplay: Rating,
    pub graphics: Rating,
    pub audio: Rating,
    pub atmosphere: Rating,
    pub satisfaction: Rating,
}

impl CategoryRatings {
    /// Every category gets the same rating
    pub fn uniform(rating: Rating) -> Self {
        Self {
            gameplay: rating,
            graphics: rating,
            audio: rating,
            atmosphere: rating,
            satisfaction: rating,
        }
    }

    pub fn get(&self, category: Category) -> Rating {
        match category {
            Category::Gameplay => self.gameplay,
            Category::Graphics => self.graphics,
            Category::Audio => self.audio,
            Category::Atmosphere => self.atmosphere,
            Category::Satisfaction => self.satisfaction,
        }
    }

    pub fn set(&mut self, category: Category, rating: Rating) {
        match category {
            Category::Gameplay => self.gameplay = rating,
            Category::Graphics => self.graphics = rating,
            Category::Audio => self.audio = rating,
            Category::Atmosphere => self.atmosphere = rating,
            Category::Satisfaction => self.satisfaction = rating,
        }
    }

    /// Iterates in the fixed category order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Rating)> {
        let ratings = *self;
        Category::iter().map(move |category| (category, ratings.get(category)))
    }

    /// Builds ratings from a loosely typed map keyed by category name.
    ///
    /// Missing categories and values that are not valid ratings score 0.
    /// Keys that don't name a category are ignored.
    pub fn from_map(values: &HashMap<String, f64>) -> Self {
        let mut ratings = Self::default();

        for category in Category::iter() {
            let rating = match values.get(category.key()) {
                Some(&value) => Rating::new(value).unwrap_or_else(|| {
                    debug!(category = %category, value, "Invalid rating, scoring as 0");
                    Rating::ZERO
                }),
                None => {
                    debug!(category = %category, "Missing rating, scoring as 0");
                    Rating::ZERO
                }
            };
            ratings.set(category, rating);
        }

        ratings
    }

    /// Sum of all five categories, between 0 and 25
    pub fn total(&self) -> f64 {
        let half_steps: u16 = self
            .iter()
            .map(|(_, rating)| u16::from(rating.half_steps()))
            .sum();
        f64::from(half_steps) / 2.0
    }
}

/// Sums the five category ratings found in `ratings`.
pub fn aggregate(ratings: &HashMap<String, f64>) -> f64 {
    CategoryRatings::from_map(ratings).total()
}
