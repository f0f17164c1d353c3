//! A single board cell: identity, face state, match state.
//!
//! Cards are plain data; rendering (icon vs. text fallback) belongs to the
//! presentation layer, which only reads the accessors here.

/// One card on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    identifier: String,
    position: usize,
    face_up: bool,
    matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card at the given board position
    pub fn new(identifier: String, position: usize) -> Self {
        Self {
            identifier,
            position,
            face_up: false,
            matched: false,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub fn is_matched(&self) -> bool {
        self.matched
    }

    pub(crate) fn flip_up(&mut self) {
        self.face_up = true;
    }

    pub(crate) fn flip_down(&mut self) {
        self.face_up = false;
    }

    /// Mark the card matched. Matched cards stay face-up.
    pub(crate) fn mark_matched(&mut self) {
        self.matched = true;
        self.face_up = true;
    }
}
