//! Fixture-backed content helpers
//!
//! Stands in for the content platform: user meta, post meta, archive facts,
//! permalinks and avatars are read from a JSON document.

/// Fixture document and the helper implementations over it
pub mod fixture;

pub use fixture::{ContentFixture, FixtureContentStore, PostFixture, UserFixture};
