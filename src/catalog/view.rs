use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use super::models::GameRecord;

/// Order in which the catalog is displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Alphabetical,
    RatingHigh,
    RatingLow,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortKey::Alphabetical => "alphabetical",
                SortKey::RatingHigh => "rating-high",
                SortKey::RatingLow => "rating-low",
            }
        )
    }
}

impl TryFrom<&str> for SortKey {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "alphabetical" => Ok(SortKey::Alphabetical),
            "rating-high" => Ok(SortKey::RatingHigh),
            "rating-low" => Ok(SortKey::RatingLow),
            _ => Err(s.to_string()),
        }
    }
}

/// Case-insensitive name filter. The empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn matches(&self, name: &str) -> bool {
        self.is_empty() || name.to_lowercase().contains(&self.0.to_lowercase())
    }
}

/// Primary sort key for a name: accents stripped, compatibility forms folded, lowercased
fn collation_key(name: &str) -> String {
    name.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Compares names the way a reader expects.
///
/// Letters compare by their base form, so accents and case only break ties.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Filters and orders the games for display without touching the input.
///
/// All orderings are stable, so games with equal totals keep the order the
/// store returned them in.
pub fn view<'a>(games: &'a [GameRecord], sort: SortKey, query: &SearchQuery) -> Vec<&'a GameRecord> {
    let mut visible: Vec<&GameRecord> = games
        .iter()
        .filter(|game| query.matches(&game.name))
        .collect();

    match sort {
        SortKey::Alphabetical => visible.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::RatingHigh => visible.sort_by(|a, b| b.total_rating.total_cmp(&a.total_rating)),
        SortKey::RatingLow => visible.sort_by(|a, b| a.total_rating.total_cmp(&b.total_rating)),
    }

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::{GameId, NewGame};
    use crate::rating::CategoryRatings;
    use chrono::Utc;
    use rstest::rstest;

    fn game(name: &str, total: f64) -> GameRecord {
        let mut record = GameRecord::from_new(
            GameId::new(name),
            NewGame::new(
                name.to_string(),
                "https://example.com/a.png".to_string(),
                CategoryRatings::default(),
                None,
                "admin@fernle.com".to_string(),
            ),
            Utc::now(),
        );
        record.total_rating = total;
        record
    }

    fn names(games: &[&GameRecord]) -> Vec<String> {
        games.iter().map(|g| g.name.clone()).collect()
    }

    fn sample() -> Vec<GameRecord> {
        vec![
            game("Zelda", 22.0),
            game("celeste", 18.5),
            game("Braid", 18.5),
            game("Anno", 9.0),
        ]
    }

    #[rstest]
    #[case(SortKey::Alphabetical)]
    #[case(SortKey::RatingHigh)]
    #[case(SortKey::RatingLow)]
    fn test_view_without_query_is_permutation(#[case] sort: SortKey) {
        let games = sample();
        let result = view(&games, sort, &SearchQuery::default());

        assert_eq!(result.len(), games.len());
        for game in &games {
            assert_eq!(result.iter().filter(|g| g.id == game.id).count(), 1);
        }
    }

    #[test]
    fn test_rating_sorts_are_stable() {
        let games = vec![game("A", 10.0), game("B", 10.0), game("C", 5.0)];

        let high = view(&games, SortKey::RatingHigh, &SearchQuery::default());
        assert_eq!(names(&high), vec!["A", "B", "C"]);

        let low = view(&games, SortKey::RatingLow, &SearchQuery::default());
        assert_eq!(names(&low), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_alphabetical_ignores_case() {
        let games = sample();
        let result = view(&games, SortKey::Alphabetical, &SearchQuery::default());
        assert_eq!(names(&result), vec!["Anno", "Braid", "celeste", "Zelda"]);
    }

    #[test]
    fn test_alphabetical_sorts_accented_names_by_base_letter() {
        let games = vec![game("Zelda", 1.0), game("Éclair", 1.0), game("Ori", 1.0)];
        let result = view(&games, SortKey::Alphabetical, &SearchQuery::default());
        assert_eq!(names(&result), vec!["Éclair", "Ori", "Zelda"]);
    }

    #[rstest]
    #[case("eclair", "Éclair", Ordering::Less)]
    #[case("Éclair", "eclair", Ordering::Greater)]
    #[case("Ökami", "Okami", Ordering::Greater)]
    #[case("Ökami", "Portal", Ordering::Less)]
    #[case("ﬁnal fantasy", "Fez", Ordering::Greater)]
    fn test_compare_names(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(compare_names(a, b), expected);
    }

    #[test]
    fn test_query_filters_case_insensitively() {
        let games = sample();
        let result = view(&games, SortKey::RatingHigh, &SearchQuery::new("EL"));
        assert_eq!(names(&result), vec!["Zelda", "celeste"]);
    }

    #[test]
    fn test_query_without_match_is_empty() {
        let games = sample();
        let result = view(&games, SortKey::Alphabetical, &SearchQuery::new("zz"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_view_is_idempotent_and_leaves_input_untouched() {
        let games = sample();
        let original = games.clone();
        let query = SearchQuery::new("a");

        let first: Vec<GameId> = view(&games, SortKey::RatingLow, &query)
            .iter()
            .map(|g| g.id.clone())
            .collect();
        let second: Vec<GameId> = view(&games, SortKey::RatingLow, &query)
            .iter()
            .map(|g| g.id.clone())
            .collect();

        assert_eq!(first, second);
        assert_eq!(games, original);
    }

    #[test]
    fn test_view_borrows_records_from_input() {
        let games = sample();
        let result = view(&games, SortKey::Alphabetical, &SearchQuery::default());
        assert!(result
            .iter()
            .all(|record| games.iter().any(|g| std::ptr::eq(g, *record))));
    }

    #[rstest]
    #[case("alphabetical", SortKey::Alphabetical)]
    #[case("rating-high", SortKey::RatingHigh)]
    #[case("rating-low", SortKey::RatingLow)]
    fn test_sort_key_wire_names(#[case] wire: &str, #[case] key: SortKey) {
        assert_eq!(SortKey::try_from(wire), Ok(key));
        assert_eq!(key.to_string(), wire);
        assert_eq!(serde_json::to_string(&key).unwrap(), format!("\"{}\"", wire));
    }
}
