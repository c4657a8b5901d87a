use serde::{Deserialize, Serialize};

/// Display state of a single star glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarState {
    Filled,
    Half,
    Empty,
}

/// Turns a score into a row of star glyphs.
///
/// Whole points become filled stars, a remainder of at least 0.5 becomes a
/// half star when `allow_half` is set, and the row is padded with empty stars
/// up to `max_stars`. Scores above `max_stars` saturate at a full row; negative
/// or non-finite scores render as 0.
pub fn render(score: f64, max_stars: u32, allow_half: bool) -> Vec<StarState> {
    let score = if score.is_finite() && score > 0.0 {
        score
    } else {
        0.0
    };

    let whole = score.floor();
    let full_stars = if whole >= f64::from(max_stars) {
        max_stars
    } else {
        whole as u32
    };
    let has_half = allow_half && score.fract() >= 0.5 && full_stars < max_stars;
    let empty_stars = max_stars.saturating_sub(full_stars + u32::from(has_half));

    let mut stars = Vec::with_capacity(max_stars as usize);
    stars.extend(std::iter::repeat(StarState::Filled).take(full_stars as usize));
    if has_half {
        stars.push(StarState::Half);
    }
    stars.extend(std::iter::repeat(StarState::Empty).take(empty_stars as usize));
    stars
}
