//! Use cases

/// Indexable build orchestration
pub mod build_manager;

pub use build_manager::{BuildReport, BuildState, BuilderFailure, IndexableBuildManager};
