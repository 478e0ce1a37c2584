use serde::{Deserialize, Serialize};

/// A social image candidate with the source it was found in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialImage {
    /// Absolute image URL
    pub image: String,
    /// Where the image came from (e.g. `gravatar-image`)
    pub source: String,
    /// Attachment id when the image is a media library item
    pub id: Option<u64>,
}

impl SocialImage {
    /// Create an image candidate without attachment id
    pub fn new(image: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            source: source.into(),
            id: None,
        }
    }
}
