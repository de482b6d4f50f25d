//! Session controller and tick driver
//!
//! Owns the configuration, the game state, and the power-up spawn timer.
//! Any configuration change goes through a full reset: cancel the timer,
//! clear power-ups, rebuild the grid and balls, re-arm the timer. The caller
//! drives [`SessionController::frame`] once per rendered frame with a
//! wall-clock timestamp in seconds.

use crate::settings::{ConfigError, GameConfig};
use crate::sim::powerup::SpawnTimer;
use crate::sim::state::{GameEvent, GameState, Snapshot};
use crate::sim::tick::tick;

/// Drives the simulation under one configuration at a time
#[derive(Debug)]
pub struct SessionController {
    config: GameConfig,
    state: GameState,
    spawn_timer: SpawnTimer,
    base_seed: u64,
    resets: u64,
}

impl SessionController {
    /// Start a session. The configuration is validated before anything is
    /// built; an invalid one leaves nothing behind.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "session start: {:?}, power-ups {}",
            config.topology,
            if config.powerups_enabled { "on" } else { "off" }
        );
        Ok(Self {
            config,
            state: GameState::new(config.topology, seed),
            spawn_timer: SpawnTimer::new(config.powerup_interval_secs),
            base_seed: seed,
            resets: 0,
        })
    }

    /// Rebuild everything from the current configuration. The grid partition
    /// is deterministic, so back-to-back resets produce identical ownership;
    /// ball velocities re-roll their random jitter.
    pub fn reset(&mut self) {
        self.resets += 1;
        // Cancel before teardown so no stale spawn fires into the new state
        self.spawn_timer = SpawnTimer::new(self.config.powerup_interval_secs);
        let seed = self.base_seed.wrapping_add(self.resets);
        self.state = GameState::new(self.config.topology, seed);
        log::info!("session reset #{}", self.resets);
    }

    /// Validate and apply a new configuration. On success the session is
    /// fully rebuilt; on failure the running state is untouched.
    pub fn apply_config(&mut self, config: GameConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.reset();
        Ok(())
    }

    /// One frame: poll the spawn timer, then run one simulation tick.
    /// Returns the side-channel events fired during the tick, for the
    /// external audio collaborator.
    pub fn frame(&mut self, now_secs: f64) -> Vec<GameEvent> {
        if self.config.powerups_enabled {
            if self.spawn_timer.poll(now_secs) {
                self.state.spawn_powerup();
            }
        } else {
            self.spawn_timer.cancel();
        }

        tick(&mut self.state);
        self.state.drain_events()
    }

    /// Read-only view for the presentation layer
    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Direct state access, read-only
    pub fn state(&self) -> &GameState {
        &self.state
    }
}
