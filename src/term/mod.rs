//! Terminal presentation: pure view building plus a crossterm renderer.

pub mod game_view;
pub mod renderer;

pub use game_view::{board_columns, format_time, GameView};
pub use renderer::TerminalRenderer;
