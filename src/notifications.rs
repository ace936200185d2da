mod notification;
mod notification_level;

pub use self::{notification::Notification, notification_level::NotificationLevel};
