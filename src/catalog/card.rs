use serde::{Deserialize, Serialize};

use super::models::{GameId, GameRecord};
use crate::rating::{render, Category, StarState};

/// Shown by the presentation layer when a game image fails to load
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMzAwIiBoZWlnaHQ9IjIwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMTAwJSIgaGVpZ2h0PSIxMDAlIiBmaWxsPSIjZjBmMGYwIi8+PHRleHQgeD0iNTAlIiB5PSI1MCUiIGZvbnQtZmFtaWx5PSJBcmlhbCIgZm9udC1zaXplPSIxNCIgZmlsbD0iIzk5OSIgdGV4dC1hbmNob3I9Im1pZGRsZSIgZHk9Ii4zZW0iPk5vIEltYWdlPC90ZXh0Pjwvc3ZnPg==";

pub const CATEGORY_STARS: u32 = 1;
pub const TOTAL_STARS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardImage {
    pub src: String,
    pub fallback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCard {
    pub category: Category,
    pub label: String,
    pub value: f64,
    pub stars: Vec<StarState>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteAction {
    pub game_id: GameId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageBadge {
    pub hours: f64,
    pub label: String,
}

/// Everything the presentation layer needs to draw one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardDescription {
    pub id: GameId,
    pub name: String,
    pub image: CardImage,
    pub categories: Vec<CategoryCard>,
    pub total_rating: f64,
    pub total_stars: Vec<StarState>,
    pub delete_action: Option<DeleteAction>,
    pub usage_badge: Option<UsageBadge>,
}

pub fn format(game: &GameRecord, is_admin: bool) -> CardDescription {
    let categories = game
        .ratings
        .iter()
        .map(|(category, rating)| CategoryCard {
            category,
            label: category.label().to_string(),
            value: rating.value(),
            stars: render(rating.value(), CATEGORY_STARS, true),
        })
        .collect();

    let delete_action = is_admin.then(|| DeleteAction {
        game_id: game.id.clone(),
        title: "Delete Game".to_string(),
    });

    let usage_badge = game
        .usage_hours
        .filter(|hours| *hours > 0.0)
        .map(|hours| UsageBadge {
            hours,
            label: format!("{} h played", hours),
        });

    CardDescription {
        id: game.id.clone(),
        name: game.name.clone(),
        image: CardImage {
            src: game.image_url.clone(),
            fallback: PLACEHOLDER_IMAGE.to_string(),
        },
        categories,
        total_rating: game.total_rating,
        total_stars: render(game.total_rating, TOTAL_STARS, true),
        delete_action,
        usage_badge,
    }
}
