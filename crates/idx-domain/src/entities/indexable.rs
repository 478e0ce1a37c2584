use serde::{Deserialize, Serialize};

use crate::constants::UNINDEXED_STATUS;
use crate::value_objects::{ObjectType, SocialImage};

/// Derived SEO metadata of one content object
///
/// Robots flags and `is_public` are tri-state: `None` means "no explicit
/// signal", leaving the decision to site-wide defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Indexable {
    /// Storage id, assigned on first save
    pub id: Option<u64>,
    /// Id of the described object (absent for singletons like the home page)
    pub object_id: Option<u64>,
    /// Kind of the described object
    pub object_type: Option<ObjectType>,
    /// Sub kind (post type, taxonomy, system page kind)
    pub object_sub_type: Option<String>,
    /// Author of the object, when it has one
    pub author_id: Option<u64>,
    /// Parent object, when it has one
    pub post_parent: Option<u64>,

    /// Canonical URL
    pub permalink: Option<String>,
    /// Custom SEO title
    pub title: Option<String>,
    /// Custom meta description
    pub description: Option<String>,
    /// Publication status of the object (`unindexed` for fallbacks)
    pub post_status: Option<String>,

    /// Whether the object is public, `None` when undecided
    pub is_public: Option<bool>,
    /// Whether the object is cornerstone content
    pub is_cornerstone: bool,
    /// Whether an author has public posts
    pub has_public_posts: Option<bool>,
    /// Robots `noindex`
    pub is_robots_noindex: Option<bool>,
    /// Robots `nofollow`
    pub is_robots_nofollow: Option<bool>,
    /// Robots `noarchive`
    pub is_robots_noarchive: Option<bool>,
    /// Robots `noimageindex`
    pub is_robots_noimageindex: Option<bool>,
    /// Robots `nosnippet`
    pub is_robots_nosnippet: Option<bool>,

    /// Open graph image URL
    pub open_graph_image: Option<String>,
    /// Open graph image attachment id
    pub open_graph_image_id: Option<u64>,
    /// Where the open graph image came from
    pub open_graph_image_source: Option<String>,
    /// Serialized open graph image metadata
    pub open_graph_image_meta: Option<String>,
    /// Twitter image URL
    pub twitter_image: Option<String>,
    /// Twitter image attachment id
    pub twitter_image_id: Option<u64>,
    /// Where the twitter image came from
    pub twitter_image_source: Option<String>,

    /// Blog the indexable belongs to
    pub blog_id: Option<u64>,
}

/// Identity of an at-rest indexable
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexableKey {
    /// Kind of the described object
    pub object_type: ObjectType,
    /// Id of the described object
    pub object_id: Option<u64>,
    /// Sub kind of the described object
    pub object_sub_type: Option<String>,
}

impl Indexable {
    /// Create an empty indexable for an object
    pub fn for_object(object_id: u64, object_type: ObjectType) -> Self {
        Self {
            object_id: Some(object_id),
            object_type: Some(object_type),
            ..Self::default()
        }
    }

    /// Minimal record used when no builder produced a result
    pub fn unindexed(object_id: u64, object_type: ObjectType) -> Self {
        Self {
            post_status: Some(UNINDEXED_STATUS.to_string()),
            ..Self::for_object(object_id, object_type)
        }
    }

    /// Whether this is the fallback record
    pub fn is_unindexed(&self) -> bool {
        self.post_status.as_deref() == Some(UNINDEXED_STATUS)
    }

    /// Storage identity, `None` until an object type is known
    pub fn key(&self) -> Option<IndexableKey> {
        self.object_type.map(|object_type| IndexableKey {
            object_type,
            object_id: self.object_id,
            object_sub_type: self.object_sub_type.clone(),
        })
    }

    /// Public flag implied by the robots flags
    ///
    /// `Some(false)` for noindex objects, `None` otherwise.
    pub fn derived_public_flag(&self) -> Option<bool> {
        if self.is_robots_noindex == Some(true) {
            Some(false)
        } else {
            None
        }
    }

    /// Clear every social image field
    pub fn clear_social_images(&mut self) {
        self.open_graph_image = None;
        self.open_graph_image_id = None;
        self.open_graph_image_source = None;
        self.open_graph_image_meta = None;
        self.twitter_image = None;
        self.twitter_image_id = None;
        self.twitter_image_source = None;
    }

    /// Set the open graph image from a candidate
    pub fn set_open_graph_image(&mut self, image: &SocialImage) {
        self.open_graph_image = Some(image.image.clone());
        self.open_graph_image_id = image.id;
        self.open_graph_image_source = Some(image.source.clone());
    }

    /// Set the twitter image from a candidate
    pub fn set_twitter_image(&mut self, image: &SocialImage) {
        self.twitter_image = Some(image.image.clone());
        self.twitter_image_id = image.id;
        self.twitter_image_source = Some(image.source.clone());
    }

    /// Take a read-only copy of the current field values
    pub fn snapshot(&self) -> IndexableSnapshot {
        IndexableSnapshot(self.clone())
    }
}

/// Read-only copy of an indexable taken before a build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexableSnapshot(Indexable);

impl IndexableSnapshot {
    /// Field values at snapshot time
    pub fn fields(&self) -> &Indexable {
        &self.0
    }

    /// Names of the fields whose values differ in `after`
    pub fn changed_fields(&self, after: &Indexable) -> Vec<String> {
        let before = serde_json::to_value(&self.0).unwrap_or_default();
        let after = serde_json::to_value(after).unwrap_or_default();
        match (before, after) {
            (serde_json::Value::Object(before), serde_json::Value::Object(after)) => after
                .iter()
                .filter(|(name, value)| before.get(name.as_str()) != Some(*value))
                .map(|(name, _)| name.clone())
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl From<Indexable> for IndexableSnapshot {
    fn from(indexable: Indexable) -> Self {
        Self(indexable)
    }
}
