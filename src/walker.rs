//! Thread traversal
//!
//! Walks a reply chain backwards from a given tail status toward the thread
//! root, downloading and decoding every photo attachment on the way.

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::StatusId;
use image::DynamicImage;

/// Walks a reply chain from its deepest reply toward the root, collecting
/// decoded photo attachments
///
/// The walker holds no state across invocations; it borrows an injected
/// [`ApiClient`] and performs one strictly sequential pass per call.
pub struct ThreadWalker<'a> {
    client: &'a ApiClient,
}

impl<'a> ThreadWalker<'a> {
    /// Create a walker over the given API client.
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Collect the photos of every status strictly between `tail_id` and the
    /// thread root.
    ///
    /// Traversal starts at the status referenced by `tail_id` and repeatedly
    /// follows parent references. A status's attachments are scanned only
    /// while a parent reference exists, so the root's own photos are never
    /// collected; the tail's are, provided the tail is not itself the root.
    ///
    /// Images are returned in collection order: leaf-to-root across statuses,
    /// attachment order within one status. Any failed lookup, download, or
    /// decode aborts the whole traversal; there are no retries and no
    /// partial results.
    pub async fn collect(&self, tail_id: &StatusId) -> Result<Vec<DynamicImage>> {
        let mut images = Vec::new();
        let mut status = self.client.get_status(tail_id).await?;

        while let Some(parent_id) = status.in_reply_to.clone() {
            for attachment in status.photos() {
                let bytes = self.client.get_media_bytes(&attachment.media_url).await?;
                let image = image::load_from_memory(&bytes)?;
                tracing::debug!(
                    url = %attachment.media_url,
                    width = image.width(),
                    height = image.height(),
                    "decoded photo"
                );
                images.push(image);
            }

            status = self.client.get_status(&parent_id).await?;
        }

        tracing::info!(count = images.len(), "thread traversal complete");
        Ok(images)
    }
}
