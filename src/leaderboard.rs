mod api_ext;
mod leaderboard_entry;

pub use self::{api_ext::LeaderboardApi, leaderboard_entry::LeaderboardEntry};
