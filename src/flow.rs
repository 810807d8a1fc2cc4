//! Screen state machine and run progress.
//!
//! The core only simulates while [`Screen::Gameplay`] is active. Menus are
//! drawn by the embedding application; this module only decides which screen
//! is current and keeps score.

use log::{info, warn};
use serde::Serialize;

use crate::input::InputSnapshot;
use crate::pickup::PickupKind;
use crate::session::{FrameEvent, FrameReport, RespawnCause, Session};
use crate::{COINS_PER_LIFE, STARTING_LIVES};

const STAR_POINTS: u32 = 1000;
const COIN_POINTS: u32 = 100;
/// Number of save slots on the file-select screen.
pub const FILE_SLOTS: u8 = 4;

/// Which screen the application shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Press-start screen.
    #[default]
    Title,
    /// Save slot picker.
    FileSelect,
    /// The session is running.
    Gameplay,
    /// The session is frozen mid-run.
    Paused,
}

/// Menu navigation requests from the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Press start / accept.
    Confirm,
    /// Pick a save slot on the file-select screen.
    SelectFile(u8),
    /// Leave the current screen.
    Back,
    /// Pause or resume gameplay.
    TogglePause,
}

/// Something worth celebrating, or mourning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Milestone {
    /// A life was earned.
    ExtraLife,
    /// The last life was lost.
    GameOver,
}

/// Lives, coins, stars and score for the current run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// Remaining lives.
    pub lives: u8,
    /// Coins towards the next extra life.
    pub coins: u32,
    /// Stars collected this run.
    pub stars: u32,
    /// Points from stars and coins.
    pub score: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            lives: STARTING_LIVES,
            coins: 0,
            stars: 0,
            score: 0,
        }
    }
}

impl Progress {
    /// Folds one frame event into the run.
    ///
    /// Falling into the void costs a life; a manual respawn is free.
    pub fn record(&mut self, event: FrameEvent) -> Option<Milestone> {
        match event {
            FrameEvent::Collected {
                kind: PickupKind::Star,
            } => {
                self.stars += 1;
                self.score = self.score.saturating_add(STAR_POINTS);
                None
            }
            FrameEvent::Collected {
                kind: PickupKind::Coin,
            } => {
                self.coins += 1;
                self.score = self.score.saturating_add(COIN_POINTS);
                if self.coins < COINS_PER_LIFE {
                    return None;
                }
                self.coins -= COINS_PER_LIFE;
                self.lives = self.lives.saturating_add(1);
                info!("extra life, now {}", self.lives);
                Some(Milestone::ExtraLife)
            }
            FrameEvent::Respawned {
                cause: RespawnCause::Void,
            } => {
                self.lives = self.lives.saturating_sub(1);
                if self.lives > 0 {
                    return None;
                }
                warn!("game over with score {}", self.score);
                Some(Milestone::GameOver)
            }
            FrameEvent::Respawned {
                cause: RespawnCause::Manual,
            } => None,
        }
    }
}

/// Current screen plus the run it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameFlow {
    screen: Screen,
    file: Option<u8>,
    progress: Progress,
}

impl GameFlow {
    /// Starts on the title screen with a fresh run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current screen.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// The save slot picked on the file-select screen.
    #[must_use]
    pub const fn file(&self) -> Option<u8> {
        self.file
    }

    /// Lives, coins, stars and score so far.
    #[must_use]
    pub const fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Applies a menu command and returns the resulting screen. Commands that
    /// mean nothing on the current screen are ignored.
    ///
    /// # Examples
    /// ```
    /// use lakitu::flow::{GameFlow, MenuCommand, Screen};
    ///
    /// let mut flow = GameFlow::new();
    /// flow.handle(MenuCommand::Confirm);
    /// assert_eq!(flow.handle(MenuCommand::SelectFile(0)), Screen::Gameplay);
    /// assert_eq!(flow.handle(MenuCommand::TogglePause), Screen::Paused);
    /// ```
    pub fn handle(&mut self, command: MenuCommand) -> Screen {
        let next = match (self.screen, command) {
            (Screen::Title, MenuCommand::Confirm) => Screen::FileSelect,
            (Screen::FileSelect, MenuCommand::SelectFile(slot)) if slot < FILE_SLOTS => {
                self.file = Some(slot);
                self.progress = Progress::default();
                Screen::Gameplay
            }
            (Screen::FileSelect, MenuCommand::SelectFile(slot)) => {
                warn!("ignoring unknown file slot {slot}");
                Screen::FileSelect
            }
            (Screen::FileSelect, MenuCommand::Back) => Screen::Title,
            (Screen::Gameplay, MenuCommand::TogglePause) => Screen::Paused,
            (Screen::Paused, MenuCommand::TogglePause | MenuCommand::Confirm) => Screen::Gameplay,
            (Screen::Paused, MenuCommand::Back) => Screen::FileSelect,
            (screen, _) => screen,
        };
        if next != self.screen {
            info!("screen {:?} -> {next:?}", self.screen);
            self.screen = next;
        }
        next
    }

    /// Runs one frame of `session` if gameplay is active.
    ///
    /// A pause edge in `input` toggles pausing instead of simulating. A game
    /// over restarts the level and the run.
    pub fn frame(&mut self, session: &mut Session, input: &InputSnapshot) -> Option<FrameReport> {
        if input.pause_pressed {
            self.handle(MenuCommand::TogglePause);
            return None;
        }
        if self.screen != Screen::Gameplay {
            return None;
        }

        let report = session.tick(input);
        let game_over = report
            .events
            .iter()
            .filter_map(|&event| self.progress.record(event))
            .fold(false, |over, milestone| over || milestone == Milestone::GameOver);
        if game_over {
            self.progress = Progress::default();
            session.reset_level();
        }
        Some(report)
    }
}
