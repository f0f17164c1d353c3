//! Core types shared across the application
//! This module contains pure data types and tuning constants with no
//! external dependencies

/// Frame tick for the host event loop (in milliseconds)
pub const TICK_MS: u32 = 16;

/// One countdown tick of the level clock (in milliseconds)
pub const CLOCK_TICK_MS: u32 = 1000;

/// How long mismatched cards stay face-up before flipping back
pub const FLIP_BACK_MS: u32 = 800;

/// How long the match-result banner is shown (the level clock is paused
/// while it is up)
pub const MATCH_PAUSE_MS: u32 = 1200;

/// Base points awarded for every resolved match
pub const BASE_MATCH_POINTS: u32 = 100;

/// Streak multiplier, expressed in tenths to keep scoring in integer math:
/// multiplier = (10 + STREAK_STEP_TENTHS * streak) / 10, with streak clamped
/// at STREAK_CLAMP so the multiplier tops out at 3.0.
pub const STREAK_STEP_TENTHS: u32 = 2;
pub const STREAK_CLAMP: u32 = 10;

/// Index of a card on the board (its position in the dealt deck)
pub type CardId = usize;

/// Player-driven actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    /// Flip the card under the cursor, or confirm on an end-of-level screen.
    Select,
    Pause,
    RestartLevel,
    NewGame,
    ToggleLeaderboard,
    /// Flip the auto-show-leaderboard setting (leaderboard screen only).
    ToggleAutoShow,
    /// Clear the stored leaderboard (leaderboard screen only, needs a
    /// confirming second press).
    ResetLeaderboard,
}

impl GameAction {
    /// Convert to string (for logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::Select => "select",
            GameAction::Pause => "pause",
            GameAction::RestartLevel => "restartLevel",
            GameAction::NewGame => "newGame",
            GameAction::ToggleLeaderboard => "toggleLeaderboard",
            GameAction::ToggleAutoShow => "toggleAutoShow",
            GameAction::ResetLeaderboard => "resetLeaderboard",
        }
    }
}
