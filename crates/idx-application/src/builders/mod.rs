//! Indexable builders
//!
//! | Builder | Understands | Priority |
//! |---------|-------------|----------|
//! | [`PrimaryTermBuilder`] | post | 1 |
//! | [`AuthorBuilder`] | user, post | 2 |
//!
//! Both register into the component registry; the build manager receives
//! them through its variadic `builders` parameter.

pub mod author;
pub mod primary_term;
pub mod social_image;

pub use author::AuthorBuilder;
pub use primary_term::PrimaryTermBuilder;
pub use social_image::SocialImageHelper;
