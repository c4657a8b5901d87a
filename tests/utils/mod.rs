pub mod assertions;
pub mod mocks;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use assertions::{assert_total_stars, NoticeAssertion};
#[allow(unused_imports)]
pub use mocks::MockGameRepository;
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder, ADMIN_PASSWORD};
