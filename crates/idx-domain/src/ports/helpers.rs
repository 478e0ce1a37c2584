//! Content helper ports
//!
//! Simple getters over platform content. Absent values are `None`.

/// Post and term meta access
pub trait MetaHelper: Send + Sync {
    /// Value of a meta key for an object
    fn get_value(&self, key: &str, object_id: u64) -> Option<String>;
}

/// User meta access
pub trait AuthorMetaHelper: Send + Sync {
    /// Value of a user meta key
    fn get_author_meta(&self, user_id: u64, key: &str) -> Option<String>;
}

/// Author archive facts
pub trait AuthorArchiveHelper: Send + Sync {
    /// Whether the author has posts of a public post type
    fn author_has_public_posts(&self, user_id: u64) -> Option<bool>;
}

/// Primary term taxonomies of posts
pub trait PrimaryTermHelper: Send + Sync {
    /// Names of the taxonomies that support a primary term for the post
    fn primary_term_taxonomies(&self, post_id: u64) -> Vec<String>;
}

/// URL generation
pub trait PermalinkHelper: Send + Sync {
    /// URL of an author's post archive
    fn author_posts_url(&self, user_id: u64) -> Option<String>;
}

/// Avatar lookup
pub trait AvatarHelper: Send + Sync {
    /// HTTPS avatar URL of a user at the given pixel size
    fn avatar_url(&self, user_id: u64, size: u32) -> Option<String>;
}
