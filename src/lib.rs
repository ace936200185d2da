pub mod admin;
pub mod api;
pub mod auth;
pub mod challenges;
pub mod config;
pub mod directories;
pub mod error;
pub mod gallery;
pub mod leaderboard;
pub mod logging;
pub mod navigation;
pub mod network;
pub mod notifications;
pub mod otp;
pub mod session;
pub mod uploads;
pub mod users;
