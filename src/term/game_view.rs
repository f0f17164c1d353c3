//! GameView: maps `core::Session` into terminal lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::session::{Phase, Session};
use crate::persist::LeaderboardEntry;
use crate::types::CardId;

/// Columns in the card grid for a board of `total` cards (square-ish layout).
pub fn board_columns(total: usize) -> usize {
    if total == 0 {
        return 1;
    }
    (total as f64).sqrt().ceil() as usize
}

/// Format seconds as mm:ss.
pub fn format_time(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// A lightweight terminal view for the memory board.
pub struct GameView {
    /// Card cell width in terminal columns (identifier text is truncated to
    /// fit).
    cell_w: usize,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 16 }
    }
}

impl GameView {
    /// Cell widths below 3 leave no room for the card frame and are clamped.
    pub fn new(cell_w: usize) -> Self {
        Self {
            cell_w: cell_w.max(3),
        }
    }

    /// Render the board screen: status line, card grid, banner, key hints.
    pub fn render(
        &self,
        session: &Session,
        player: &str,
        cursor: CardId,
        banner: Option<&str>,
    ) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push(self.status_line(session, player));
        lines.push(String::new());

        let cols = board_columns(session.cards().len());
        let mut row = String::new();
        for card in session.cards() {
            let id = card.position();
            let label = if card.is_matched() {
                format!("({})", center(card.identifier(), self.cell_w - 2))
            } else if card.is_face_up() {
                format!("[{}]", center(card.identifier(), self.cell_w - 2))
            } else {
                format!("[{}]", "-".repeat(self.cell_w - 2))
            };

            if id == cursor && session.phase() == Phase::AwaitingPick {
                row.push('>');
                row.push_str(&label);
                row.push('<');
            } else {
                row.push(' ');
                row.push_str(&label);
                row.push(' ');
            }

            if (id + 1) % cols == 0 {
                lines.push(std::mem::take(&mut row));
            }
        }
        if !row.is_empty() {
            lines.push(row);
        }

        lines.push(String::new());
        if session.paused() {
            lines.push("PAUSED - press p to resume".to_string());
        } else if let Some(banner) = banner {
            lines.push(banner.to_string());
        } else {
            lines.push(String::new());
        }
        lines.push(String::new());
        lines.push(self.hint_line(session));

        lines
    }

    /// Render the leaderboard screen, best score first.
    pub fn render_leaderboard(
        &self,
        entries: &[LeaderboardEntry],
        auto_show: bool,
        confirm_reset: bool,
    ) -> Vec<String> {
        let mut lines = vec![
            "LEADERBOARD".to_string(),
            String::new(),
            format!(
                "{:<5} {:<16} {:>7} {:>6} {:>6} {:>8} {:>6}  {}",
                "Rank", "Name", "Score", "Level", "Lives", "Matches", "Time", "Date"
            ),
        ];

        if entries.is_empty() {
            lines.push("  (no finished games yet)".to_string());
        }
        for (i, entry) in entries.iter().enumerate() {
            lines.push(format!(
                "{:<5} {:<16} {:>7} {:>6} {:>6} {:>8} {:>5}s  {}",
                i + 1,
                truncate(&entry.player_name, 16),
                entry.score,
                entry.level_reached,
                entry.lives_left,
                entry.matches_found,
                entry.time_used_secs,
                entry.date
            ));
        }

        lines.push(String::new());
        lines.push(format!(
            "Auto-show after game: {}",
            if auto_show { "on" } else { "off" }
        ));
        if confirm_reset {
            lines.push("Press x again to clear the leaderboard".to_string());
        } else {
            lines.push(String::new());
        }
        lines.push("[t] auto-show  [x] reset  [b] back  [q] quit".to_string());
        lines
    }

    fn status_line(&self, session: &Session, player: &str) -> String {
        let time = match session.time_remaining_secs() {
            Some(secs) => format_time(secs),
            None => "--:--".to_string(),
        };
        format!(
            "Player: {}  |  Level {}/{} - Pairs: {}  Attempts: {}  Matches: {}  |  Lives: {}  Score: {}  Time: {}",
            player,
            session.level_index(),
            session.level_count(),
            session.level().pairs(),
            session.attempts(),
            session.matches_found(),
            session.lives(),
            session.score(),
            time
        )
    }

    fn hint_line(&self, session: &Session) -> String {
        match session.phase() {
            Phase::AwaitingPick => {
                "[arrows] move  [space] flip  [p] pause  [r] restart  [b] leaderboard  [q] quit"
                    .to_string()
            }
            Phase::LevelComplete => format!(
                "Level {} complete! Score: {}  -  [enter] next level  [r] replay  [q] quit",
                session.level_index(),
                session.score()
            ),
            Phase::GameWon => format!(
                "YOU WIN! Final score: {}  -  [n] new game  [b] leaderboard  [q] quit",
                session.score()
            ),
            Phase::GameLost => format!(
                "GAME OVER at level {}. Final score: {}  -  [n] new game  [b] leaderboard  [q] quit",
                session.level_index(),
                session.score()
            ),
        }
    }
}

fn truncate(s: &str, w: usize) -> String {
    if s.chars().count() <= w {
        s.to_string()
    } else {
        s.chars().take(w.saturating_sub(1)).collect::<String>() + "…"
    }
}

fn center(s: &str, w: usize) -> String {
    let s = truncate(s, w);
    let len = s.chars().count();
    let pad = w.saturating_sub(len);
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
}
