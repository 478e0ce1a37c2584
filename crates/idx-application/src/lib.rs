//! # Application Layer
//!
//! Builder variants, the build manager that orchestrates them, and the
//! component registration contract the injection pass operates on.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`builders`] | Author and primary term builders, social image helper |
//! | [`use_cases`] | `IndexableBuildManager` |
//! | [`ports`] | Component registry contract (`COMPONENTS` slice) |

pub mod builders;
pub mod ports;
pub mod use_cases;

pub use builders::{AuthorBuilder, PrimaryTermBuilder, SocialImageHelper};
pub use use_cases::{BuildReport, BuildState, BuilderFailure, IndexableBuildManager};
