pub mod config;
pub mod query;
pub mod store;

mod raw;

/// The module for unit testing, only available in dev env.
#[cfg(test)]
mod tests;

pub use viaggio_shared::post::{Folder, GeoPoint, Location, Media, Post};

use store::PostStore;
use viaggio_shared::post::handle::{EditPostDescriptor, PostDescriptor};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("effort rating {0} out of range (1 to 5)")]
    EffortOutOfRange(u8),
}

/// A handle to the remote journal API and the local post store.
///
/// Operations never retry and are not coordinated with each other: two
/// racing mutations both refresh, and the last refresh to complete
/// wins.
pub struct Context {
    pub(crate) req_client: reqwest::Client,
    pub(crate) url_prefix: String,
    store: PostStore,
}

impl Context {
    /// Creates a context pointing at the configured API base url.
    pub fn new() -> Self {
        Self::with_base_url(config::INSTANCE.api.base_url.clone())
    }

    pub fn with_base_url(url_prefix: impl Into<String>) -> Self {
        Self {
            req_client: reqwest::Client::new(),
            url_prefix: url_prefix.into(),
            store: PostStore::new(),
        }
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    /// Replaces the store with the server's post collection, leaving
    /// the previous collection untouched on failure.
    pub async fn load_posts(&self) {
        if let Err(err) = self.try_load_posts().await {
            tracing::error!("failed to load posts: {}", err);
        }
    }

    pub async fn try_load_posts(&self) -> anyhow::Result<()> {
        let posts = raw::call(raw::post::ListPosts, self).await?;
        self.store.replace_all(posts);
        Ok(())
    }

    /// Fetches a single post for detail display, or [`None`] if the
    /// request errored.
    pub async fn show_post(&self, id: u64) -> Option<Post> {
        match self.try_show_post(id).await {
            Ok(post) => Some(post),
            Err(err) => {
                tracing::error!("failed to load post {}: {}", id, err);
                None
            }
        }
    }

    pub async fn try_show_post(&self, id: u64) -> anyhow::Result<Post> {
        raw::call(raw::post::GetPost { id }, self).await
    }

    /// Creates a post, then refreshes the whole collection so the store
    /// reflects server-assigned fields such as the id.
    pub async fn add_new_post(&self, descriptor: PostDescriptor) {
        if let Err(err) = self.try_add_new_post(descriptor).await {
            tracing::error!("failed to create post: {}", err);
        }
    }

    pub async fn try_add_new_post(&self, descriptor: PostDescriptor) -> anyhow::Result<()> {
        check_effort(descriptor.physical_effort)?;
        check_effort(descriptor.economic_effort)?;

        raw::call(raw::post::CreatePost { descriptor }, self).await?;
        self.try_load_posts().await
    }

    /// Applies a partial edit, refreshes the collection, then patches
    /// the returned record in place by id lookup.
    pub async fn update_post(&self, id: u64, descriptor: EditPostDescriptor) {
        if let Err(err) = self.try_update_post(id, descriptor).await {
            tracing::error!("failed to update post {}: {}", id, err);
        }
    }

    pub async fn try_update_post(
        &self,
        id: u64,
        descriptor: EditPostDescriptor,
    ) -> anyhow::Result<()> {
        if let Some(effort) = descriptor.physical_effort {
            check_effort(effort)?;
        }
        if let Some(effort) = descriptor.economic_effort {
            check_effort(effort)?;
        }

        let updated = raw::call(raw::post::EditPost { id, descriptor }, self).await?;
        self.try_load_posts().await?;
        self.store.replace(updated);
        Ok(())
    }

    /// Deletes a post, refreshes the collection, then removes the item
    /// locally by id.
    pub async fn delete_post(&self, id: u64) {
        if let Err(err) = self.try_delete_post(id).await {
            tracing::error!("failed to delete post {}: {}", id, err);
        }
    }

    pub async fn try_delete_post(&self, id: u64) -> anyhow::Result<()> {
        raw::call(raw::post::DeletePost { id }, self).await?;
        self.try_load_posts().await?;
        self.store.remove(id);
        Ok(())
    }

    /// Flips the favorite flag of a post.
    ///
    /// Server-confirmed: the flag goes through [`Context::update_post`],
    /// so the local value only changes once the edit round-trips.
    pub async fn toggle_special(&self, id: u64) {
        if let Some(post) = self.store.get(id) {
            self.update_post(
                id,
                EditPostDescriptor {
                    special: Some(!post.special),
                    ..Default::default()
                },
            )
            .await
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

fn check_effort(effort: u8) -> Result<(), Error> {
    if (1..=5).contains(&effort) {
        Ok(())
    } else {
        Err(Error::EffortOutOfRange(effort))
    }
}
