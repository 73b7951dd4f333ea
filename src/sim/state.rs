//! Session state and core simulation types
//!
//! Everything the original kept in process-wide statics lives here as one
//! owned state struct, threaded through the tick function by reference.

use std::path::PathBuf;
use std::time::Duration;

use glam::Vec2;

use crate::consts::{LEVEL_TIME_LIMIT_SECS, PLAYER_SIZE};
use crate::level::{Level, LevelError};
use crate::stats::Stats;
use crate::timer::Timer;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Last level exited in time
    Win,
    /// Clock ran out
    Lose,
}

/// Current phase of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Constructing a level; left on success, kept on a failed load
    Loading,
    /// Active gameplay
    Playing,
    /// An exit fired; the next tick loads the following level
    LevelAdvance,
    /// Run ended
    GameOver(Outcome),
    /// Player backed out to the menu
    ReturnToMenu,
}

/// The single moving body
#[derive(Debug, Clone)]
pub struct PlayerBody {
    pub position: Vec2,
    /// Hitbox size
    pub size: Vec2,
    /// Change in position per tick
    pub velocity: Vec2,
    /// Jumps left before the next ground contact refills the pool
    pub jump_charges: u32,
}

impl PlayerBody {
    pub fn new(start: Vec2) -> Self {
        Self {
            position: start,
            size: PLAYER_SIZE,
            velocity: Vec2::ZERO,
            jump_charges: 0,
        }
    }

    /// Put the body at a level's start with transient state cleared
    pub fn reset(&mut self, start: Vec2) {
        self.position = start;
        self.velocity = Vec2::ZERO;
    }
}

/// The game's overall state for one play session
#[derive(Debug)]
pub struct SessionState {
    /// Ordered level files making up the campaign
    pub campaign: Vec<PathBuf>,
    /// Index of the current level within the campaign
    pub level_index: usize,
    /// The level currently being played, replaced wholesale on advance
    pub level: Level,
    pub player: PlayerBody,
    pub timer: Timer,
    /// Dollars collected this session
    pub score: u32,
    pub phase: SessionPhase,
    /// The driving loop should stop calling tick once false
    pub running: bool,
    /// Persisted statistics, folded into on win, loss, or quit
    pub stats: Stats,
}

impl SessionState {
    /// Load the first level of a campaign and start the clock
    pub fn new(campaign: Vec<PathBuf>, stats: Stats) -> Result<Self, LevelError> {
        let first = campaign.first().ok_or(LevelError::EmptyCampaign)?;
        let level = Level::load(first)?;
        let player = PlayerBody::new(level.starting_position);

        Ok(Self {
            campaign,
            level_index: 0,
            level,
            player,
            timer: Timer::new(Duration::from_secs(LEVEL_TIME_LIMIT_SECS)),
            score: 0,
            phase: SessionPhase::Playing,
            running: true,
            stats,
        })
    }

    /// Swap in the next campaign level, or end the run with a win.
    ///
    /// A failed load leaves the session stopped in `Loading` and hands the
    /// error back to whoever requested the transition.
    pub(crate) fn advance_level(&mut self) -> Result<(), LevelError> {
        if self.level_index + 1 >= self.campaign.len() {
            self.game_over(Outcome::Win);
            return Ok(());
        }

        self.level_index += 1;
        self.phase = SessionPhase::Loading;
        let next = match Level::load(&self.campaign[self.level_index]) {
            Ok(level) => level,
            Err(err) => {
                self.running = false;
                return Err(err);
            }
        };

        log::info!("advancing to level {} ({})", self.level_index + 1, next.name);
        self.player.reset(next.starting_position);
        self.level = next;
        self.phase = SessionPhase::Playing;
        Ok(())
    }

    /// Soft retry after hazard contact: the body goes back to the start;
    /// collected dollars, score, and the clock are untouched.
    pub(crate) fn restart_level(&mut self) {
        log::debug!("hazard contact, restarting {}", self.level.name);
        self.player.reset(self.level.starting_position);
    }

    /// End the run and fold it into the persisted stats
    pub(crate) fn game_over(&mut self, outcome: Outcome) {
        self.phase = SessionPhase::GameOver(outcome);
        self.running = false;

        match outcome {
            Outcome::Win => {
                let seconds_left = self.timer.remaining().max(0.0) as u32;
                self.stats.record_win(self.score, seconds_left);
                log::info!("campaign complete with {seconds_left}s to spare");
            }
            Outcome::Lose => {
                self.stats.record_loss(self.score);
                log::info!("time's up on level {}", self.level.name);
            }
        }
    }

    /// Back out to the menu. A still-running run is folded in without a
    /// time bonus; a finished one was already recorded.
    pub fn quit_to_menu(&mut self) {
        if self.running {
            self.stats.record_loss(self.score);
        }
        self.phase = SessionPhase::ReturnToMenu;
        self.running = false;
    }

    /// Freeze the countdown while the driving loop is paused
    pub fn pause(&mut self) {
        self.timer.pause();
    }

    pub fn resume(&mut self) {
        self.timer.play();
    }
}
