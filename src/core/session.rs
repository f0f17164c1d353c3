//! Session state machine - ties together catalog, deck, clock, and scoring.
//!
//! A `Session` owns all mutable game state and is the sole mutator of it.
//! The host loop drives it with three kinds of calls, all synchronous:
//! player operations (`select_card`, `restart_level`, ...), the per-frame
//! time pump (`advance`), and event draining (`drain_events`). The mismatch
//! flip-back window and the match-result pause are millisecond accumulators
//! inside the session, so starting a new level cancels them by construction
//! and a stale timer can never touch a fresh board.

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::core::card::Card;
use crate::core::catalog::{CatalogError, LevelDefinition};
use crate::core::clock::Countdown;
use crate::core::deck::{build_deck, DeckRng};
use crate::core::scoring::default_points_for_match;
use crate::types::{CardId, FLIP_BACK_MS, MATCH_PAUSE_MS};

/// Where the session currently is between player decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting picks. Whether it is the first or second pick of a round is
    /// given by how many cards are pending.
    AwaitingPick,
    /// All pairs found on a non-final level; waiting for advance/restart.
    LevelComplete,
    GameLost,
    GameWon,
}

/// Outcome notifications for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A card changed face (flipped up on selection, or back down after a
    /// mismatch window).
    CardFlipped(CardId),
    MatchResolved {
        identifier: String,
        points: u32,
        streak: u32,
    },
    MismatchResolved {
        lives: u32,
    },
    LevelCompleted {
        level: usize,
        score: u32,
    },
    GameLost {
        level: usize,
        score: u32,
        lives: u32,
        matches_found: u32,
        time_used_secs: u32,
    },
    GameWon {
        score: u32,
    },
}

/// Complete game session state
#[derive(Debug, Clone)]
pub struct Session {
    levels: Vec<LevelDefinition>,
    /// 1-based index into `levels`
    level_index: usize,
    cards: Vec<Card>,
    /// Face-up, unresolved picks of the current round
    pending: ArrayVec<CardId, 2>,
    score: u32,
    lives: u32,
    matches_found: u32,
    attempts: u32,
    streak: u32,
    clock: Countdown,
    phase: Phase,
    paused: bool,
    /// Remaining mismatch flip-back window (0 = none outstanding)
    flip_back_ms: u32,
    /// Remaining match-result pause; the clock is stopped while > 0
    match_pause_ms: u32,
    rng: DeckRng,
    events: Vec<GameEvent>,
}

impl Session {
    /// Create a session over the given level set. No level is started yet;
    /// call [`Session::start_level`] (normally with index 1).
    pub fn new(levels: Vec<LevelDefinition>, seed: u32) -> Self {
        Self {
            levels,
            level_index: 0,
            cards: Vec::new(),
            pending: ArrayVec::new(),
            score: 0,
            lives: 0,
            matches_found: 0,
            attempts: 0,
            streak: 0,
            clock: Countdown::new(0),
            phase: Phase::GameLost,
            paused: false,
            flip_back_ms: 0,
            match_pause_ms: 0,
            rng: DeckRng::new(seed),
            events: Vec::new(),
        }
    }

    /// Set up a level: fresh deck, fresh per-level counters, clock armed iff
    /// the level is timed. Cancels any outstanding flip-back or match pause.
    ///
    /// Score carries over; it is the caller's job to zero it for a new game
    /// (see [`Session::new_game`]).
    pub fn start_level(&mut self, level_index: usize) -> Result<(), CatalogError> {
        let level = self
            .levels
            .get(level_index.wrapping_sub(1))
            .ok_or(CatalogError::UnknownLevel(level_index))?
            .clone();

        self.cards = build_deck(&level, &mut self.rng)?;
        self.level_index = level_index;
        self.lives = level.lives();
        self.matches_found = 0;
        self.attempts = 0;
        self.streak = 0;
        self.pending.clear();
        self.flip_back_ms = 0;
        self.match_pause_ms = 0;
        self.paused = false;
        self.clock = Countdown::new(level.time_limit_secs());
        if level.is_timed() {
            self.clock.start();
        }
        self.phase = Phase::AwaitingPick;

        info!(
            "level {} started: {} pairs, {} lives, time limit {}s",
            level_index,
            level.pairs(),
            level.lives(),
            level.time_limit_secs()
        );
        Ok(())
    }

    /// Restart the current level, discarding its progress but keeping score.
    pub fn restart_level(&mut self) -> Result<(), CatalogError> {
        self.start_level(self.level_index)
    }

    /// Leave `LevelComplete`: next level if one remains, otherwise the game
    /// is won.
    pub fn advance_level(&mut self) -> Result<(), CatalogError> {
        if self.phase != Phase::LevelComplete {
            return Ok(());
        }
        if self.level_index < self.levels.len() {
            self.start_level(self.level_index + 1)
        } else {
            self.phase = Phase::GameWon;
            self.events.push(GameEvent::GameWon { score: self.score });
            Ok(())
        }
    }

    /// Reset to level 1 with a zero score.
    pub fn new_game(&mut self) -> Result<(), CatalogError> {
        self.score = 0;
        self.start_level(1)
    }

    /// Handle a player pick.
    ///
    /// Ignored (not an error) while a resolution window is outstanding, while
    /// paused, outside the picking phase, for unknown ids, and for cards that
    /// are already matched or already face-up (which covers picking the same
    /// card twice in a row).
    pub fn select_card(&mut self, id: CardId) {
        if self.phase != Phase::AwaitingPick || self.paused || self.is_resolving() {
            return;
        }
        let Some(card) = self.cards.get(id) else {
            return;
        };
        if card.is_matched() || card.is_face_up() {
            return;
        }

        self.cards[id].flip_up();
        self.events.push(GameEvent::CardFlipped(id));

        if self.pending.is_empty() {
            self.pending.push(id);
            return;
        }

        let first = self.pending[0];
        self.pending.push(id);
        self.attempts += 1;

        if self.cards[first].identifier() == self.cards[id].identifier() {
            self.resolve_match(first, id);
        } else {
            self.resolve_mismatch();
        }
    }

    fn resolve_match(&mut self, first: CardId, second: CardId) {
        let identifier = self.cards[first].identifier().to_string();
        self.cards[first].mark_matched();
        self.cards[second].mark_matched();
        self.pending.clear();
        self.matches_found += 1;

        let streak_before = self.streak;
        self.streak += 1;

        let timed = self.level().is_timed();
        let points = default_points_for_match(self.clock.remaining_secs(), timed, streak_before);
        self.score += points;

        // Pause the clock for the result banner; advance() resumes it once
        // the banner window elapses, provided time remains.
        self.clock.stop();
        self.match_pause_ms = MATCH_PAUSE_MS;

        debug!(
            "match {:?}: +{} points (streak {}), {}/{} pairs",
            identifier,
            points,
            self.streak,
            self.matches_found,
            self.level().pairs()
        );
        self.events.push(GameEvent::MatchResolved {
            identifier,
            points,
            streak: self.streak,
        });

        if self.matches_found as usize == self.level().pairs() {
            self.match_pause_ms = 0;
            if self.level_index == self.levels.len() {
                // The final level's last pair wins the game outright.
                self.phase = Phase::GameWon;
                self.events.push(GameEvent::GameWon { score: self.score });
            } else {
                self.phase = Phase::LevelComplete;
                self.events.push(GameEvent::LevelCompleted {
                    level: self.level_index,
                    score: self.score,
                });
            }
        }
    }

    fn resolve_mismatch(&mut self) {
        self.streak = 0;
        self.lives -= 1;

        debug!("mismatch: {} lives left", self.lives);
        self.events
            .push(GameEvent::MismatchResolved { lives: self.lives });

        if self.lives == 0 {
            // Evaluated at the mismatch itself; the flip-back is moot.
            self.finish_lost();
        } else {
            self.flip_back_ms = FLIP_BACK_MS;
        }
    }

    fn finish_lost(&mut self) {
        self.clock.stop();
        self.phase = Phase::GameLost;
        self.events.push(GameEvent::GameLost {
            level: self.level_index,
            score: self.score,
            lives: self.lives,
            matches_found: self.matches_found,
            time_used_secs: self.clock.used_secs(),
        });
    }

    /// Per-frame time pump: counts down the resolution windows and converts
    /// elapsed time into clock ticks. Time expiry forces lives to zero and
    /// loses the game without requiring a mismatch.
    pub fn advance(&mut self, mut elapsed_ms: u32) {
        if self.paused || self.is_over() {
            return;
        }

        if self.match_pause_ms > 0 {
            // The banner window eats the elapsed time first; only the
            // remainder reaches the clock below.
            let consumed = elapsed_ms.min(self.match_pause_ms);
            self.match_pause_ms -= consumed;
            elapsed_ms -= consumed;
            if self.match_pause_ms == 0 && self.phase == Phase::AwaitingPick {
                // start() is a no-op for untimed or expired clocks.
                self.clock.start();
            }
        }

        if self.flip_back_ms > 0 {
            self.flip_back_ms = self.flip_back_ms.saturating_sub(elapsed_ms);
            if self.flip_back_ms == 0 {
                for id in self.pending.drain(..) {
                    self.cards[id].flip_down();
                    self.events.push(GameEvent::CardFlipped(id));
                }
            }
        }

        let ticks = self.clock.advance(elapsed_ms);
        if ticks > 0 && self.clock.expired() {
            debug!("time expired on level {}", self.level_index);
            self.lives = 0;
            self.finish_lost();
        }
    }

    /// Toggle pause. Pausing stops the clock; resuming restarts it when time
    /// remains and no match banner is holding it.
    pub fn toggle_pause(&mut self) {
        if self.phase != Phase::AwaitingPick {
            return;
        }
        self.paused = !self.paused;
        if self.paused {
            self.clock.stop();
        } else if self.match_pause_ms == 0 {
            self.clock.start();
        }
    }

    /// Drain events emitted since the last call, in order.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameLost | Phase::GameWon)
    }

    /// Whether a flip-back or match-result window is outstanding (selections
    /// are ignored meanwhile).
    pub fn is_resolving(&self) -> bool {
        self.flip_back_ms > 0 || self.match_pause_ms > 0
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    pub fn pending(&self) -> &[CardId] {
        &self.pending
    }

    /// The active level definition.
    ///
    /// Valid only after a successful `start_level`; the session always holds
    /// one from then on.
    pub fn level(&self) -> &LevelDefinition {
        &self.levels[self.level_index - 1]
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn matches_found(&self) -> u32 {
        self.matches_found
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Remaining seconds on timed levels, `None` on untimed ones.
    pub fn time_remaining_secs(&self) -> Option<u32> {
        if self.level().is_timed() {
            Some(self.clock.remaining_secs())
        } else {
            None
        }
    }

    /// Seconds consumed on timed levels, 0 otherwise.
    pub fn time_used_secs(&self) -> u32 {
        self.clock.used_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(index: usize, ids: &[&str], lives: u32, time_limit: u32) -> LevelDefinition {
        LevelDefinition::new(
            index,
            ids.iter().map(|s| s.to_string()).collect(),
            lives,
            time_limit,
        )
        .unwrap()
    }

    fn untimed_session(ids: &[&str], lives: u32) -> Session {
        let mut session = Session::new(vec![level(1, ids, lives, 0)], 12345);
        session.start_level(1).unwrap();
        session
    }

    /// Positions of the two cards bearing `id`.
    fn pair_of(session: &Session, id: &str) -> (CardId, CardId) {
        let mut it = session
            .cards()
            .iter()
            .filter(|c| c.identifier() == id)
            .map(|c| c.position());
        (it.next().unwrap(), it.next().unwrap())
    }

    /// Positions of two unmatched cards with different identifiers.
    fn mismatched_pair(session: &Session) -> (CardId, CardId) {
        let first = session
            .cards()
            .iter()
            .find(|c| !c.is_matched())
            .unwrap();
        let second = session
            .cards()
            .iter()
            .find(|c| !c.is_matched() && c.identifier() != first.identifier())
            .unwrap();
        (first.position(), second.position())
    }

    #[test]
    fn test_start_level_fresh_state() {
        let session = untimed_session(&["SIT", "JPCS", "SOE", "SOA"], 5);

        assert_eq!(session.phase(), Phase::AwaitingPick);
        assert_eq!(session.cards().len(), 8);
        assert_eq!(session.lives(), 5);
        assert_eq!(session.score(), 0);
        assert_eq!(session.matches_found(), 0);
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.streak(), 0);
        assert!(session.pending().is_empty());
        assert_eq!(session.time_remaining_secs(), None);
    }

    #[test]
    fn test_unknown_level_is_a_config_error() {
        let mut session = Session::new(vec![level(1, &["SIT"], 5, 0)], 1);
        assert_eq!(
            session.start_level(9).unwrap_err(),
            CatalogError::UnknownLevel(9)
        );
    }

    #[test]
    fn test_first_pick_flips_and_waits() {
        let mut session = untimed_session(&["SIT", "JPCS", "SOE", "SOA"], 5);
        let (a, _) = pair_of(&session, "SIT");

        session.select_card(a);
        assert!(session.card(a).unwrap().is_face_up());
        assert_eq!(session.pending(), &[a]);
        assert_eq!(session.attempts(), 0);
        assert_eq!(
            session.drain_events(),
            vec![GameEvent::CardFlipped(a)]
        );
    }

    #[test]
    fn test_selecting_same_card_twice_is_noop() {
        let mut session = untimed_session(&["SIT", "JPCS", "SOE", "SOA"], 5);
        let (a, _) = pair_of(&session, "SIT");

        session.select_card(a);
        session.drain_events();
        session.select_card(a);

        assert_eq!(session.pending(), &[a]);
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.streak(), 0);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_unknown_card_id_is_noop() {
        let mut session = untimed_session(&["SIT", "JPCS"], 5);
        session.select_card(999);
        assert!(session.pending().is_empty());
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_match_awards_points_and_streak() {
        let mut session = untimed_session(&["SIT", "JPCS", "SOE", "SOA"], 5);
        let (a, b) = pair_of(&session, "SIT");

        session.select_card(a);
        session.select_card(b);

        assert_eq!(session.matches_found(), 1);
        assert_eq!(session.attempts(), 1);
        assert_eq!(session.streak(), 1);
        assert_eq!(session.score(), 100);
        assert!(session.card(a).unwrap().is_matched());
        assert!(session.card(b).unwrap().is_matched());
        assert!(session.pending().is_empty());

        let events = session.drain_events();
        assert!(events.contains(&GameEvent::MatchResolved {
            identifier: "SIT".to_string(),
            points: 100,
            streak: 1,
        }));
    }

    #[test]
    fn test_mismatch_costs_a_life_and_flips_back() {
        let mut session = untimed_session(&["SIT", "JPCS", "SOE", "SOA"], 5);
        let (a, b) = mismatched_pair(&session);

        session.select_card(a);
        session.select_card(b);

        assert_eq!(session.lives(), 4);
        assert_eq!(session.streak(), 0);
        assert!(session.is_resolving());
        assert!(session
            .drain_events()
            .contains(&GameEvent::MismatchResolved { lives: 4 }));

        // Picks during the flip-back window are ignored entirely.
        let (c, _) = mismatched_pair(&session);
        let before = session.attempts();
        session.select_card(c);
        assert_eq!(session.attempts(), before);
        assert_eq!(session.pending().len(), 2);

        // After the window both cards are face-down again.
        session.advance(FLIP_BACK_MS);
        assert!(!session.is_resolving());
        assert!(!session.card(a).unwrap().is_face_up());
        assert!(!session.card(b).unwrap().is_face_up());
        assert!(session.pending().is_empty());
        let events = session.drain_events();
        assert!(events.contains(&GameEvent::CardFlipped(a)));
        assert!(events.contains(&GameEvent::CardFlipped(b)));
    }

    #[test]
    fn test_streak_resets_on_mismatch() {
        let mut session = untimed_session(&["SIT", "JPCS", "SOE", "SOA"], 5);

        let (a, b) = pair_of(&session, "SIT");
        session.select_card(a);
        session.select_card(b);
        session.advance(MATCH_PAUSE_MS);
        assert_eq!(session.streak(), 1);

        let (c, d) = mismatched_pair(&session);
        session.select_card(c);
        session.select_card(d);
        assert_eq!(session.streak(), 0);
    }

    #[test]
    fn test_last_life_mismatch_loses_immediately() {
        let mut session = untimed_session(&["SIT", "JPCS", "SOE", "SOA"], 1);
        let (a, b) = mismatched_pair(&session);

        session.select_card(a);
        session.select_card(b);

        assert_eq!(session.phase(), Phase::GameLost);
        assert_eq!(session.lives(), 0);
        let events = session.drain_events();
        assert!(events.contains(&GameEvent::GameLost {
            level: 1,
            score: 0,
            lives: 0,
            matches_found: 0,
            time_used_secs: 0,
        }));

        // No further selection is accepted.
        let (c, _) = mismatched_pair(&session);
        session.select_card(c);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_selections_ignored_during_match_banner() {
        let mut session = untimed_session(&["SIT", "JPCS", "SOE", "SOA"], 5);
        let (a, b) = pair_of(&session, "SIT");
        session.select_card(a);
        session.select_card(b);
        assert!(session.is_resolving());

        let (c, _) = pair_of(&session, "JPCS");
        session.select_card(c);
        assert!(!session.card(c).unwrap().is_face_up());

        session.advance(MATCH_PAUSE_MS);
        assert!(!session.is_resolving());
        session.select_card(c);
        assert!(session.card(c).unwrap().is_face_up());
    }

    #[test]
    fn test_level_complete_then_advance() {
        let mut session = Session::new(
            vec![level(1, &["SIT", "JPCS"], 5, 0), level(2, &["SOE", "SOA"], 5, 0)],
            7,
        );
        session.start_level(1).unwrap();

        for id in ["SIT", "JPCS"] {
            let (a, b) = pair_of(&session, id);
            session.select_card(a);
            session.select_card(b);
            session.advance(MATCH_PAUSE_MS);
        }

        assert_eq!(session.phase(), Phase::LevelComplete);
        let score_after_level1 = session.score();
        assert!(session
            .drain_events()
            .contains(&GameEvent::LevelCompleted {
                level: 1,
                score: score_after_level1,
            }));

        session.advance_level().unwrap();
        assert_eq!(session.phase(), Phase::AwaitingPick);
        assert_eq!(session.level_index(), 2);
        assert_eq!(session.score(), score_after_level1);
        assert_eq!(session.matches_found(), 0);
        assert_eq!(session.lives(), 5);
    }

    #[test]
    fn test_final_level_last_pair_wins_directly() {
        let mut session = Session::new(vec![level(1, &["SIT", "JPCS"], 5, 0)], 3);
        session.start_level(1).unwrap();

        for id in ["SIT", "JPCS"] {
            let (a, b) = pair_of(&session, id);
            session.select_card(a);
            session.select_card(b);
            session.advance(MATCH_PAUSE_MS);
        }

        assert_eq!(session.phase(), Phase::GameWon);
        let events = session.drain_events();
        assert!(events.iter().any(|e| matches!(e, GameEvent::GameWon { .. })));
        assert!(!events
            .iter()
            .any(|e| matches!(e, GameEvent::LevelCompleted { .. })));
    }

    #[test]
    fn test_restart_level_keeps_score() {
        let mut session = untimed_session(&["SIT", "JPCS", "SOE", "SOA"], 5);
        let (a, b) = pair_of(&session, "SIT");
        session.select_card(a);
        session.select_card(b);
        session.advance(MATCH_PAUSE_MS);
        assert_eq!(session.score(), 100);

        session.restart_level().unwrap();
        assert_eq!(session.score(), 100);
        assert_eq!(session.matches_found(), 0);
        assert_eq!(session.lives(), 5);
        assert!(session.cards().iter().all(|c| !c.is_face_up()));
    }

    #[test]
    fn test_new_game_resets_score() {
        let mut session = untimed_session(&["SIT", "JPCS"], 5);
        let (a, b) = pair_of(&session, "SIT");
        session.select_card(a);
        session.select_card(b);
        assert!(session.score() > 0);

        session.new_game().unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.level_index(), 1);
        assert_eq!(session.phase(), Phase::AwaitingPick);
    }

    #[test]
    fn test_time_expiry_loses_without_a_mismatch() {
        let mut session = Session::new(vec![level(1, &["SIT", "JPCS"], 5, 60)], 1);
        session.start_level(1).unwrap();
        assert_eq!(session.time_remaining_secs(), Some(60));

        // Tick the full limit away, one second at a time.
        for _ in 0..60 {
            session.advance(1000);
        }

        assert_eq!(session.phase(), Phase::GameLost);
        assert_eq!(session.lives(), 0);
        let events = session.drain_events();
        assert!(events.contains(&GameEvent::GameLost {
            level: 1,
            score: 0,
            lives: 0,
            matches_found: 0,
            time_used_secs: 60,
        }));
    }

    #[test]
    fn test_match_banner_pauses_the_clock() {
        let mut session = Session::new(vec![level(1, &["SIT", "JPCS"], 5, 60)], 1);
        session.start_level(1).unwrap();
        session.advance(2000);
        assert_eq!(session.time_remaining_secs(), Some(58));

        let (a, b) = pair_of(&session, "SIT");
        session.select_card(a);
        session.select_card(b);

        // Time does not run while the result banner is up.
        session.advance(1000);
        assert_eq!(session.time_remaining_secs(), Some(58));

        // The next call finishes the banner's remaining 200ms; the leftover
        // 1000ms reaches the resumed countdown.
        session.advance(MATCH_PAUSE_MS);
        assert_eq!(session.time_remaining_secs(), Some(57));
        session.advance(1000);
        assert_eq!(session.time_remaining_secs(), Some(56));
    }

    #[test]
    fn test_pause_stops_clock_and_selections() {
        let mut session = Session::new(vec![level(1, &["SIT", "JPCS"], 5, 60)], 1);
        session.start_level(1).unwrap();

        session.toggle_pause();
        assert!(session.paused());
        session.advance(5000);
        assert_eq!(session.time_remaining_secs(), Some(60));

        let (a, _) = pair_of(&session, "SIT");
        session.select_card(a);
        assert!(!session.card(a).unwrap().is_face_up());

        session.toggle_pause();
        assert!(!session.paused());
        session.advance(1000);
        assert_eq!(session.time_remaining_secs(), Some(59));
    }

    #[test]
    fn test_timed_match_includes_time_bonus() {
        let mut session = Session::new(vec![level(1, &["SIT", "JPCS"], 5, 60)], 1);
        session.start_level(1).unwrap();

        let (a, b) = pair_of(&session, "SIT");
        session.select_card(a);
        session.select_card(b);

        // base 100 + 60 seconds remaining, no streak multiplier yet.
        assert_eq!(session.score(), 160);
    }

    #[test]
    fn test_consecutive_match_points_increase() {
        let mut session = untimed_session(&["SIT", "JPCS", "SOE", "SOA"], 5);
        let mut awards = Vec::new();

        for id in ["SIT", "JPCS", "SOE"] {
            let (a, b) = pair_of(&session, id);
            session.select_card(a);
            session.select_card(b);
            session.advance(MATCH_PAUSE_MS);
            for event in session.drain_events() {
                if let GameEvent::MatchResolved { points, .. } = event {
                    awards.push(points);
                }
            }
        }

        assert_eq!(awards, vec![100, 120, 140]);
    }

    #[test]
    fn test_score_is_monotonic_across_rounds() {
        let mut session = untimed_session(&["SIT", "JPCS", "SOE", "SOA"], 10);
        let mut last_score = 0;

        // Alternate matches and mismatches; the score never decreases.
        for id in ["SIT", "JPCS"] {
            let (a, b) = pair_of(&session, id);
            session.select_card(a);
            session.select_card(b);
            session.advance(MATCH_PAUSE_MS);
            assert!(session.score() >= last_score);
            last_score = session.score();

            let (c, d) = mismatched_pair(&session);
            session.select_card(c);
            session.select_card(d);
            session.advance(FLIP_BACK_MS);
            assert!(session.score() >= last_score);
            last_score = session.score();
        }
    }
}
