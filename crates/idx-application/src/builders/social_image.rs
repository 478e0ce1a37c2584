//! Social image handling shared by builders

use idx_domain::{Indexable, SocialImage};

/// Derives the social image fields of an indexable
///
/// Injected into builders by composition.
#[derive(Debug, Clone, Copy, Default)]
pub struct SocialImageHelper;

impl SocialImageHelper {
    /// Create the helper
    pub fn new() -> Self {
        Self
    }

    /// Clear every social image field before a rebuild
    pub fn reset(&self, indexable: &mut Indexable) {
        indexable.clear_social_images();
    }

    /// Fill missing social images
    ///
    /// The open graph image falls back to `alternative`; the twitter image
    /// falls back to the open graph image.
    pub fn apply(&self, indexable: &mut Indexable, alternative: Option<&SocialImage>) {
        if indexable.open_graph_image.is_none() {
            if let Some(image) = alternative {
                indexable.set_open_graph_image(image);
            }
        }

        if indexable.twitter_image.is_none() {
            if let (Some(image), Some(source)) = (
                indexable.open_graph_image.clone(),
                indexable.open_graph_image_source.clone(),
            ) {
                let mirrored = SocialImage {
                    image,
                    source,
                    id: indexable.open_graph_image_id,
                };
                indexable.set_twitter_image(&mirrored);
            }
        }
    }
}
