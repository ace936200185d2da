use crate::{
    api::{Api, Credentials},
    uploads::PhotoUpload,
    users::{ProfileUpdateParams, User},
};
use anyhow::Context;
use reqwest::multipart::Form;
use serde_derive::Deserialize;

#[derive(Deserialize)]
struct UserResponse {
    user: User,
}

/// API to work with the profile of the signed in user.
pub struct ProfileApi<'a> {
    api: &'a Api,
}

impl<'a> ProfileApi<'a> {
    /// Creates Profile API.
    pub fn new(api: &'a Api) -> Self {
        Self { api }
    }

    /// Retrieves the profile of the signed in user.
    pub async fn get(&self) -> anyhow::Result<User> {
        self.api
            .execute_json(
                self.api
                    .network
                    .retrying_http_client
                    .get(self.api.endpoint("profile")),
                Credentials::Session,
            )
            .await
            .context("Cannot retrieve profile.")
    }

    /// Updates the profile and the cached user.
    pub async fn update(&self, params: ProfileUpdateParams) -> anyhow::Result<User> {
        let params = params.normalize()?;

        let UserResponse { user } = self
            .api
            .execute_json(
                self.api
                    .network
                    .http_client
                    .put(self.api.endpoint("profile"))
                    .json(&params),
                Credentials::Session,
            )
            .await
            .context("Cannot update profile.")?;

        self.api.session.set_user(user.clone()).await?;
        Ok(user)
    }

    /// Replaces the avatar and updates the cached user.
    pub async fn upload_avatar(&self, avatar: PhotoUpload) -> anyhow::Result<User> {
        avatar.validate()?;

        let UserResponse { user } = self
            .api
            .execute_json(
                self.api
                    .network
                    .http_client
                    .post(self.api.endpoint("profile/upload"))
                    .multipart(Form::new().part("avatar", avatar.into_part()?)),
                Credentials::Session,
            )
            .await
            .context("Cannot upload avatar.")?;

        self.api.session.set_user(user.clone()).await?;
        Ok(user)
    }

    /// Permanently deletes the account and ends the session.
    pub async fn delete(&self) -> anyhow::Result<()> {
        self.api
            .execute(
                self.api
                    .network
                    .http_client
                    .delete(self.api.endpoint("profile")),
                Credentials::Session,
            )
            .await
            .context("Cannot delete account.")?;

        self.api.session.sign_out().await
    }
}

impl Api {
    /// Returns an API to work with the profile of the signed in user.
    pub fn profile(&self) -> ProfileApi<'_> {
        ProfileApi::new(self)
    }
}
