//! Domain constants

/// Post status given to the fallback record when no builder produced a result
pub const UNINDEXED_STATUS: &str = "unindexed";

/// Name of the event emitted right before an indexable is persisted
pub const INDEXABLE_SAVED_EVENT: &str = "indexable_saved";

/// Author meta key holding the custom SEO title
pub const AUTHOR_META_TITLE: &str = "wpseo_title";

/// Author meta key holding the custom meta description
pub const AUTHOR_META_DESCRIPTION: &str = "wpseo_metadesc";

/// Author meta key holding the noindex switch (`"on"` when set)
pub const AUTHOR_META_NOINDEX: &str = "wpseo_noindex_author";

/// Value of [`AUTHOR_META_NOINDEX`] that marks an author archive noindex
pub const AUTHOR_NOINDEX_ON: &str = "on";

/// Prefix of the post meta key storing the primary term of a taxonomy
pub const PRIMARY_TERM_META_PREFIX: &str = "primary_";

/// Avatar size requested for the author social image fallback
pub const AUTHOR_AVATAR_SIZE: u32 = 500;

/// Image source recorded when the author avatar is used as social image
pub const GRAVATAR_IMAGE_SOURCE: &str = "gravatar-image";
