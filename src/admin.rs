mod admin_user;
mod api_ext;
mod photography_task;

pub use self::{
    admin_user::{AdminUser, AdminUserUpdateParams},
    api_ext::AdminApi,
    photography_task::{PhotographyTask, PhotographyTaskParams},
};
