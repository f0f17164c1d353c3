//! Persistence collaborators: leaderboard records and user settings.
//!
//! The core never reads these back; failures here are logged and never
//! surfaced to gameplay.

pub mod leaderboard;
pub mod settings;

pub use leaderboard::{Leaderboard, LeaderboardEntry, DEFAULT_LEADERBOARD_FILE};
pub use settings::{Settings, DEFAULT_SETTINGS_FILE};
