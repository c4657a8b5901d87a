pub mod aggregator;
pub mod category;
pub mod stars;

pub use aggregator::{aggregate, CategoryRatings, MAX_TOTAL_RATING};
pub use category::{Category, Rating, MAX_RATING};
pub use stars::{render, StarState};
