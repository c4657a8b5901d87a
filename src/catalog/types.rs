use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use super::{
    card::CardDescription,
    notice::Notice,
    view::{SearchQuery, SortKey},
};

/// Request payload for adding a game
///
/// Ratings are keyed by category name; see `CategoryRatings::from_map` for
/// how missing or invalid entries are scored. Form fields often arrive as
/// strings or `null`, so rating values are read leniently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddGameRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: Option<String>, // URL or data:image URI
    #[serde(default, deserialize_with = "lenient_ratings")]
    pub ratings: HashMap<String, f64>,
    #[serde(default)]
    pub usage_hours: Option<f64>,
}

/// Numbers pass through, numeric strings are parsed, anything else becomes NaN
/// and later scores 0
fn lenient_ratings<'de, D>(deserializer: D) -> Result<HashMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<HashMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();

    Ok(raw
        .into_iter()
        .map(|(category, value)| (category, rating_value(&value)))
        .collect())
}

fn rating_value(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => text.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Query string for listing the catalog
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub sort: Option<SortKey>,
    pub q: Option<String>,
}

/// Query string for deleting a game
#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirm: bool,
}

/// The rendered catalog as the presentation layer sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogView {
    pub cards: Vec<CardDescription>,
    pub is_empty: bool, // No games in the catalog at all, regardless of the query
    pub sort: SortKey,
    pub query: SearchQuery,
    pub is_admin: bool,
}

/// Response for every catalog endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub view: CatalogView,
    pub notice: Option<Notice>,
}
