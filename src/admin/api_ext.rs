use crate::{
    admin::{AdminUser, AdminUserUpdateParams, PhotographyTask, PhotographyTaskParams},
    api::{Api, Credentials},
};
use anyhow::Context;
use serde_derive::Deserialize;

#[derive(Deserialize)]
struct CreatedTaskResponse {
    task: PhotographyTask,
}

/// API for the admin dashboard, the API rejects requests of non-admin users.
pub struct AdminApi<'a> {
    api: &'a Api,
}

impl<'a> AdminApi<'a> {
    /// Creates Admin API.
    pub fn new(api: &'a Api) -> Self {
        Self { api }
    }

    /// Retrieves all users.
    pub async fn users(&self) -> anyhow::Result<Vec<AdminUser>> {
        Ok(self
            .api
            .execute_json::<Option<Vec<AdminUser>>>(
                self.api
                    .network
                    .retrying_http_client
                    .get(self.api.endpoint("admin/users")),
                Credentials::Session,
            )
            .await
            .context("Cannot retrieve users.")?
            .unwrap_or_default())
    }

    /// Updates the user with the specified ID.
    pub async fn update_user(&self, id: &str, params: &AdminUserUpdateParams) -> anyhow::Result<()> {
        params.validate()?;

        self.api
            .execute(
                self.api
                    .network
                    .http_client
                    .put(self.api.endpoint(&format!("admin/users/{}", urlencoding::encode(id))))
                    .json(params),
                Credentials::Session,
            )
            .await
            .with_context(|| format!("Cannot update user ({id})."))?;

        Ok(())
    }

    /// Deletes the user with the specified ID.
    pub async fn delete_user(&self, id: &str) -> anyhow::Result<()> {
        self.api
            .execute(
                self.api
                    .network
                    .http_client
                    .delete(self.api.endpoint(&format!("admin/users/{}", urlencoding::encode(id)))),
                Credentials::Session,
            )
            .await
            .with_context(|| format!("Cannot delete user ({id})."))?;

        Ok(())
    }

    /// Retrieves all photography tasks.
    pub async fn tasks(&self) -> anyhow::Result<Vec<PhotographyTask>> {
        Ok(self
            .api
            .execute_json::<Option<Vec<PhotographyTask>>>(
                self.api
                    .network
                    .retrying_http_client
                    .get(self.api.endpoint("admin/tasks")),
                Credentials::Session,
            )
            .await
            .context("Cannot retrieve photography tasks.")?
            .unwrap_or_default())
    }

    /// Creates a new photography task.
    pub async fn create_task(&self, params: &PhotographyTaskParams) -> anyhow::Result<PhotographyTask> {
        params.validate()?;

        let CreatedTaskResponse { task } = self
            .api
            .execute_json(
                self.api
                    .network
                    .http_client
                    .post(self.api.endpoint("admin/tasks"))
                    .json(params),
                Credentials::Session,
            )
            .await
            .with_context(|| format!("Cannot create photography task ({}).", params.prompt))?;

        Ok(task)
    }

    /// Updates the photography task with the specified ID.
    pub async fn update_task(&self, id: &str, params: &PhotographyTaskParams) -> anyhow::Result<()> {
        params.validate()?;

        self.api
            .execute(
                self.api
                    .network
                    .http_client
                    .put(self.api.endpoint(&format!("admin/tasks/{}", urlencoding::encode(id))))
                    .json(params),
                Credentials::Session,
            )
            .await
            .with_context(|| format!("Cannot update photography task ({id})."))?;

        Ok(())
    }

    /// Deletes the photography task with the specified ID.
    pub async fn delete_task(&self, id: &str) -> anyhow::Result<()> {
        self.api
            .execute(
                self.api
                    .network
                    .http_client
                    .delete(self.api.endpoint(&format!("admin/tasks/{}", urlencoding::encode(id)))),
                Credentials::Session,
            )
            .await
            .with_context(|| format!("Cannot delete photography task ({id})."))?;

        Ok(())
    }
}

impl Api {
    /// Returns an API for the admin dashboard.
    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }
}
