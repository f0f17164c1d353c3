//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI, persistence, or I/O.

pub mod card;
pub mod catalog;
pub mod clock;
pub mod deck;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use card::Card;
pub use catalog::{CatalogError, LevelDefinition};
pub use clock::Countdown;
pub use deck::{build_deck, DeckRng};
pub use session::{GameEvent, Phase, Session};
