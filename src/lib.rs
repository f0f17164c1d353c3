//! tui-memory: a terminal memory card game.
//!
//! The crate splits into a pure core (`core`: catalog, deck, cards, session
//! state machine, scoring, clock), persistence collaborators (`persist`), and
//! a crossterm presentation layer (`term`, `input`) driven by the binary.

pub mod core;
pub mod input;
pub mod persist;
pub mod term;
pub mod types;
