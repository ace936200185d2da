mod api_ext;
mod profile_update_params;
mod user;
mod user_role;
mod user_stats;

pub use self::{
    api_ext::ProfileApi, profile_update_params::ProfileUpdateParams, user::User,
    user_role::UserRole, user_stats::UserStats,
};
