//! Deck builder - turns a level's identifier list into a shuffled board.
//!
//! Shuffling uses a small seeded LCG so a whole session is reproducible from
//! one seed: the same seed deals the same boards, which the tests and the
//! restart flow rely on.

use crate::core::card::Card;
use crate::core::catalog::{CatalogError, LevelDefinition};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct DeckRng {
    state: u32,
}

impl DeckRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Deal a level's board: two cards per identifier, uniformly shuffled,
/// with distinct positions `0..2k`.
///
/// Fails only on malformed level data (empty or duplicate identifier lists).
pub fn build_deck(level: &LevelDefinition, rng: &mut DeckRng) -> Result<Vec<Card>, CatalogError> {
    let items = level.items();
    if items.is_empty() {
        return Err(CatalogError::EmptyLevel(level.index()));
    }
    for (i, item) in items.iter().enumerate() {
        if items[..i].contains(item) {
            return Err(CatalogError::DuplicateIdentifier {
                level: level.index(),
                identifier: item.clone(),
            });
        }
    }

    let mut contents: Vec<&str> = Vec::with_capacity(items.len() * 2);
    for item in items {
        contents.push(item);
        contents.push(item);
    }
    rng.shuffle(&mut contents);

    Ok(contents
        .into_iter()
        .enumerate()
        .map(|(position, identifier)| Card::new(identifier.to_string(), position))
        .collect())
}
