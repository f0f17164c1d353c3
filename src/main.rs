//! Terminal memory game runner (default binary).
//!
//! Hosts the single-threaded event loop: crossterm input, the per-frame time
//! pump into the session, and the persistence hand-off on finished games.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use chrono::Local;
use crossterm::event::{self, Event, KeyEventKind};
use log::warn;

use tui_memory::core::{catalog, GameEvent, Phase, Session};
use tui_memory::input::{handle_key_event, should_quit};
use tui_memory::persist::{
    Leaderboard, LeaderboardEntry, Settings, DEFAULT_LEADERBOARD_FILE, DEFAULT_SETTINGS_FILE,
};
use tui_memory::term::{board_columns, GameView, TerminalRenderer};
use tui_memory::types::{CardId, GameAction, TICK_MS};

struct CliOptions {
    player: String,
    seed: u32,
}

fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut player = String::from("Player");
    let mut seed: u32 = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1);

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--name" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --name"))?;
                if !v.trim().is_empty() {
                    player = v.trim().to_string();
                }
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(CliOptions { player, seed })
}

/// Everything the event loop mutates besides the terminal itself: the
/// session, the persistence collaborators, and the screen-level UI state.
struct App {
    session: Session,
    settings: Settings,
    settings_path: PathBuf,
    leaderboard: Leaderboard,
    player: String,
    cursor: CardId,
    banner: Option<String>,
    show_leaderboard: bool,
    confirm_reset: bool,
}

impl App {
    fn new(
        player: String,
        seed: u32,
        settings_path: impl Into<PathBuf>,
        leaderboard_path: impl Into<PathBuf>,
    ) -> Result<Self> {
        let settings_path = settings_path.into();
        let settings = Settings::load(&settings_path);
        let mut session = Session::new(catalog::standard_levels()?, seed);
        session.start_level(1)?;

        Ok(Self {
            session,
            settings,
            settings_path,
            leaderboard: Leaderboard::new(leaderboard_path.into()),
            player,
            cursor: 0,
            banner: None,
            show_leaderboard: false,
            confirm_reset: false,
        })
    }

    fn apply_action(&mut self, action: GameAction) -> Result<()> {
        if self.show_leaderboard {
            self.apply_leaderboard_action(action);
            return Ok(());
        }

        let total = self.session.cards().len();
        let cols = board_columns(total);

        match action {
            GameAction::MoveLeft => self.cursor = self.cursor.saturating_sub(1),
            GameAction::MoveRight => {
                if self.cursor + 1 < total {
                    self.cursor += 1;
                }
            }
            GameAction::MoveUp => self.cursor = self.cursor.saturating_sub(cols),
            GameAction::MoveDown => {
                if self.cursor + cols < total {
                    self.cursor += cols;
                }
            }
            GameAction::Select => match self.session.phase() {
                Phase::AwaitingPick => self.session.select_card(self.cursor),
                Phase::LevelComplete => {
                    self.session.advance_level()?;
                    self.cursor = 0;
                    self.banner = None;
                }
                Phase::GameLost | Phase::GameWon => {
                    self.session.new_game()?;
                    self.cursor = 0;
                    self.banner = None;
                }
            },
            GameAction::Pause => self.session.toggle_pause(),
            GameAction::RestartLevel => {
                if !self.session.is_over() {
                    self.session.restart_level()?;
                    self.cursor = 0;
                    self.banner = None;
                }
            }
            GameAction::NewGame => {
                self.session.new_game()?;
                self.cursor = 0;
                self.banner = None;
            }
            GameAction::ToggleLeaderboard => self.show_leaderboard = true,
            // Meaningful only on the leaderboard screen.
            GameAction::ToggleAutoShow | GameAction::ResetLeaderboard => {}
        }
        Ok(())
    }

    /// Actions while the leaderboard screen is up. Clearing the board takes
    /// two presses; anything else in between cancels the pending reset.
    fn apply_leaderboard_action(&mut self, action: GameAction) {
        match action {
            GameAction::ToggleLeaderboard | GameAction::Select => {
                self.show_leaderboard = false;
                self.confirm_reset = false;
            }
            GameAction::ToggleAutoShow => {
                self.confirm_reset = false;
                self.settings.show_leaderboard_after_game =
                    !self.settings.show_leaderboard_after_game;
                if let Err(e) = self.settings.save(&self.settings_path) {
                    warn!("settings write failed: {e:#}");
                }
            }
            GameAction::ResetLeaderboard => {
                if self.confirm_reset {
                    self.confirm_reset = false;
                    if let Err(e) = self.leaderboard.reset() {
                        warn!("leaderboard reset failed: {e:#}");
                    }
                } else {
                    self.confirm_reset = true;
                }
            }
            _ => self.confirm_reset = false,
        }
    }

    fn note_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::CardFlipped(_) => {}
            GameEvent::MatchResolved {
                identifier,
                points,
                streak,
            } => {
                self.banner = Some(format!(
                    "Match! {} - {}  (+{} points, streak {})",
                    identifier,
                    catalog::description(&identifier),
                    points,
                    streak
                ));
            }
            GameEvent::MismatchResolved { lives } => {
                self.banner = Some(format!("No match. Lives left: {lives}"));
            }
            GameEvent::LevelCompleted { .. } => {
                self.banner = None;
            }
            GameEvent::GameLost {
                level,
                score,
                lives,
                matches_found,
                time_used_secs,
            } => {
                self.leaderboard.record(&LeaderboardEntry {
                    player_name: self.player.clone(),
                    score,
                    level_reached: level,
                    lives_left: lives,
                    matches_found,
                    time_used_secs,
                    date: Local::now().date_naive(),
                });
                self.banner = None;
                if self.settings.show_leaderboard_after_game {
                    self.show_leaderboard = true;
                }
            }
            GameEvent::GameWon { score } => {
                self.leaderboard.record(&LeaderboardEntry {
                    player_name: self.player.clone(),
                    score,
                    level_reached: self.session.level_index(),
                    lives_left: self.session.lives(),
                    matches_found: self.session.matches_found(),
                    time_used_secs: self.session.time_used_secs(),
                    date: Local::now().date_naive(),
                });
                self.banner = None;
                if self.settings.show_leaderboard_after_game {
                    self.show_leaderboard = true;
                }
            }
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = parse_args(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &opts);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, opts: &CliOptions) -> Result<()> {
    let mut app = App::new(
        opts.player.clone(),
        opts.seed,
        DEFAULT_SETTINGS_FILE,
        DEFAULT_LEADERBOARD_FILE,
    )?;

    let view = GameView::default();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let lines = if app.show_leaderboard {
            view.render_leaderboard(
                &app.leaderboard.load_sorted(),
                app.settings.show_leaderboard_after_game,
                app.confirm_reset,
            )
        } else {
            view.render(&app.session, &app.player, app.cursor, app.banner.as_deref())
        };
        term.draw(&lines)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        app.apply_action(action)?;
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.session.advance(TICK_MS);
        }

        for event in app.session.drain_events() {
            app.note_event(event);
        }
    }
}
