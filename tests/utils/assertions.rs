//! Fluent checks for the notices and cards the controller produces
#![allow(dead_code)] // Not every helper is used by every test file

use gamer_catalog::{
    catalog::notice::{Notice, NoticeKind},
    rating::StarState,
    CardDescription,
};

// ============================================================================
// Assertion Helpers
// ============================================================================

pub struct NoticeAssertion {
    notice: Notice,
}

impl NoticeAssertion {
    pub fn of(notice: Notice) -> Self {
        Self { notice }
    }

    pub fn is_success(self, message: &str) -> Self {
        self.has(NoticeKind::Success, message)
    }

    pub fn is_error(self, message: &str) -> Self {
        self.has(NoticeKind::Error, message)
    }

    pub fn has(self, kind: NoticeKind, message: &str) -> Self {
        assert_eq!(self.notice.kind, kind, "unexpected notice: {:?}", self.notice);
        assert_eq!(self.notice.message, message);
        self
    }

    /// Every notice is shown for 3 seconds with a 300 ms transition
    pub fn uses_standard_timing(self) -> Self {
        assert_eq!(self.notice.dismiss_after_ms, 3000);
        assert_eq!(self.notice.transition_ms, 300);
        self
    }
}

pub fn count_stars(stars: &[StarState], state: StarState) -> usize {
    stars.iter().filter(|star| **star == state).count()
}

pub fn assert_total_stars(card: &CardDescription, filled: usize, half: usize, empty: usize) {
    assert_eq!(card.total_stars.len(), filled + half + empty);
    assert_eq!(count_stars(&card.total_stars, StarState::Filled), filled);
    assert_eq!(count_stars(&card.total_stars, StarState::Half), half);
    assert_eq!(count_stars(&card.total_stars, StarState::Empty), empty);
}
