//! JSON content fixture
//!
//! ```json
//! {
//!   "site_url": "https://example.com",
//!   "users": {
//!     "42": {
//!       "nicename": "ada",
//!       "meta": { "wpseo_title": "Ada's posts" },
//!       "has_public_posts": true,
//!       "avatar_url": "https://avatars.example.com/ada.png"
//!     }
//!   },
//!   "posts": {
//!     "7": {
//!       "primary_term_taxonomies": ["category"],
//!       "meta": { "primary_category": "0" }
//!     }
//!   }
//! }
//! ```

use idx_domain::error::{Error, Result};
use idx_domain::ports::{
    AuthorArchiveHelper, AuthorMetaHelper, AvatarHelper, MetaHelper, PermalinkHelper,
    PrimaryTermHelper,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// A user of the fixture site
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFixture {
    /// URL slug of the user
    pub nicename: Option<String>,
    /// User meta values
    pub meta: BTreeMap<String, String>,
    /// Whether the user authored posts of a public post type
    pub has_public_posts: Option<bool>,
    /// Avatar URL; `{size}` is replaced by the requested pixel size
    pub avatar_url: Option<String>,
}

/// A post of the fixture site
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostFixture {
    /// Post meta values
    pub meta: BTreeMap<String, String>,
    /// Taxonomies supporting a primary term for this post
    pub primary_term_taxonomies: Vec<String>,
}

/// Site content used by the helpers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentFixture {
    /// Home URL of the site, without trailing slash
    pub site_url: String,
    /// Users by id
    pub users: BTreeMap<u64, UserFixture>,
    /// Posts by id
    pub posts: BTreeMap<u64, PostFixture>,
}

/// Content helpers answering from a [`ContentFixture`]
#[derive(Debug, Clone, Default)]
pub struct FixtureContentStore {
    fixture: ContentFixture,
}

impl FixtureContentStore {
    /// Wrap a fixture
    pub fn new(fixture: ContentFixture) -> Self {
        Self { fixture }
    }

    /// Parse a fixture from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a fixture file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration_with_source(
                format!("Failed to read content fixture {}", path.display()),
                e,
            )
        })?;
        let store = Self::from_json(&content)?;
        debug!(
            path = %path.display(),
            users = store.fixture.users.len(),
            posts = store.fixture.posts.len(),
            "Loaded content fixture"
        );
        Ok(store)
    }

    /// The wrapped fixture
    pub fn fixture(&self) -> &ContentFixture {
        &self.fixture
    }

    fn user(&self, user_id: u64) -> Option<&UserFixture> {
        self.fixture.users.get(&user_id)
    }
}

impl MetaHelper for FixtureContentStore {
    fn get_value(&self, key: &str, object_id: u64) -> Option<String> {
        self.fixture.posts.get(&object_id)?.meta.get(key).cloned()
    }
}

impl AuthorMetaHelper for FixtureContentStore {
    fn get_author_meta(&self, user_id: u64, key: &str) -> Option<String> {
        self.user(user_id)?.meta.get(key).cloned()
    }
}

impl AuthorArchiveHelper for FixtureContentStore {
    fn author_has_public_posts(&self, user_id: u64) -> Option<bool> {
        self.user(user_id)?.has_public_posts
    }
}

impl PrimaryTermHelper for FixtureContentStore {
    fn primary_term_taxonomies(&self, post_id: u64) -> Vec<String> {
        self.fixture
            .posts
            .get(&post_id)
            .map(|post| post.primary_term_taxonomies.clone())
            .unwrap_or_default()
    }
}

impl PermalinkHelper for FixtureContentStore {
    fn author_posts_url(&self, user_id: u64) -> Option<String> {
        let slug = self.user(user_id)?.nicename.as_deref()?;
        Some(format!(
            "{}/author/{}/",
            self.fixture.site_url.trim_end_matches('/'),
            slug
        ))
    }
}

impl AvatarHelper for FixtureContentStore {
    fn avatar_url(&self, user_id: u64, size: u32) -> Option<String> {
        let url = self.user(user_id)?.avatar_url.as_deref()?;
        Some(url.replace("{size}", &size.to_string()))
    }
}
