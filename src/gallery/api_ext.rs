use crate::{
    api::{Api, Credentials},
    error::Error as PhotoQuestError,
    gallery::{GalleryPost, GalleryPostDetails, MyPhoto},
};
use anyhow::{Context, bail};
use serde_derive::{Deserialize, Serialize};

#[derive(Serialize)]
struct PostActionParams<'a> {
    post_id: &'a str,
    email: &'a str,
}

#[derive(Deserialize)]
struct MessageResponse {
    #[serde(default)]
    message: String,
}

/// API to browse the gallery and manage user's own photos.
pub struct GalleryApi<'a> {
    api: &'a Api,
}

impl<'a> GalleryApi<'a> {
    /// Creates Gallery API.
    pub fn new(api: &'a Api) -> Self {
        Self { api }
    }

    /// Retrieves all gallery posts.
    pub async fn posts(&self) -> anyhow::Result<Vec<GalleryPost>> {
        Ok(self
            .api
            .execute_json::<Option<Vec<GalleryPost>>>(
                self.api
                    .network
                    .retrying_http_client
                    .get(self.api.endpoint("gallery/posts")),
                Credentials::Session,
            )
            .await
            .context("Cannot retrieve gallery posts.")?
            .unwrap_or_default())
    }

    /// Retrieves the gallery post with the specified ID.
    pub async fn post(&self, id: &str) -> anyhow::Result<GalleryPostDetails> {
        self.api
            .execute_json(
                self.api
                    .network
                    .retrying_http_client
                    .get(self.api.endpoint(&format!("gallery/post/{}", urlencoding::encode(id)))),
                Credentials::Session,
            )
            .await
            .with_context(|| format!("Cannot retrieve gallery post ({id})."))
    }

    /// Likes the post, or removes the like if the user has already liked it.
    pub async fn toggle_like(&self, post_id: &str) -> anyhow::Result<String> {
        self.post_action("gallery/like", post_id)
            .await
            .with_context(|| format!("Cannot toggle like ({post_id})."))
    }

    /// Sends the link to the post to the user's email.
    pub async fn share(&self, post_id: &str) -> anyhow::Result<String> {
        self.post_action("gallery/share", post_id)
            .await
            .with_context(|| format!("Cannot share gallery post ({post_id})."))
    }

    /// Retrieves photos published by the signed in user.
    pub async fn my_photos(&self) -> anyhow::Result<Vec<MyPhoto>> {
        Ok(self
            .api
            .execute_json::<Option<Vec<MyPhoto>>>(
                self.api
                    .network
                    .retrying_http_client
                    .get(self.api.endpoint("my-photos")),
                Credentials::Session,
            )
            .await
            .context("Cannot retrieve user photos.")?
            .unwrap_or_default())
    }

    /// Deletes the photo published by the signed in user.
    pub async fn delete_my_photo(&self, id: &str) -> anyhow::Result<()> {
        self.api
            .execute(
                self.api
                    .network
                    .http_client
                    .delete(self.api.endpoint(&format!("my-photos/{}", urlencoding::encode(id)))),
                Credentials::Session,
            )
            .await
            .with_context(|| format!("Cannot delete photo ({id})."))?;

        Ok(())
    }

    async fn post_action(&self, path: &str, post_id: &str) -> anyhow::Result<String> {
        let Some(user) = self.api.session.user().await else {
            bail!(PhotoQuestError::unauthorized());
        };

        let MessageResponse { message } = self
            .api
            .execute_json(
                self.api
                    .network
                    .http_client
                    .post(self.api.endpoint(path))
                    .json(&PostActionParams {
                        post_id,
                        email: &user.email,
                    }),
                Credentials::Session,
            )
            .await?;

        Ok(message)
    }
}

impl Api {
    /// Returns an API to browse the gallery and manage user's own photos.
    pub fn gallery(&self) -> GalleryApi<'_> {
        GalleryApi::new(self)
    }
}
