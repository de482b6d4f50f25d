//! Session configuration
//!
//! Everything the control surface (checkboxes, sliders, reset button) can set.
//! A configuration change always goes through a full session reset; nothing
//! here is applied incrementally.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MAX_TEAMS, MIN_TEAMS};

/// How the grid is initially partitioned among teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Topology {
    /// Two teams, left/right halves, one edge-owned ball each
    #[default]
    TwoSide,
    /// Four teams, one quadrant and one edge-owned ball each
    FourQuadrant,
    /// N teams in angular sectors around the grid center; every ball
    /// bounces off all four walls
    Sectors(u8),
}

impl Topology {
    /// Number of teams this topology partitions the grid into
    pub fn team_count(&self) -> usize {
        match self {
            Topology::TwoSide => 2,
            Topology::FourQuadrant => 4,
            Topology::Sectors(n) => *n as usize,
        }
    }
}

/// Configuration rejected before any state is touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unsupported team count {0} (expected {MIN_TEAMS}-{MAX_TEAMS})")]
    TeamCount(u8),
    #[error("power-up interval must be a positive number of seconds")]
    Interval,
}

/// Session configuration, owned by the [`SessionController`](crate::SessionController)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Team topology selector
    pub topology: Topology,
    /// Whether the periodic power-up spawner runs
    pub powerups_enabled: bool,
    /// Seconds between power-up spawns
    pub powerup_interval_secs: u32,
    /// Pass-through for the external audio collaborator
    pub sound_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            topology: Topology::TwoSide,
            powerups_enabled: false,
            powerup_interval_secs: 5,
            sound_enabled: true,
        }
    }
}

impl GameConfig {
    /// Validate without applying. A failed validation must leave the running
    /// session untouched, so this is checked before any reset begins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Topology::Sectors(n) = self.topology
            && !(MIN_TEAMS..=MAX_TEAMS).contains(&n)
        {
            return Err(ConfigError::TeamCount(n));
        }
        if self.powerup_interval_secs == 0 {
            return Err(ConfigError::Interval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_sector_count_bounds() {
        let mut config = GameConfig {
            topology: Topology::Sectors(1),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TeamCount(1)));

        config.topology = Topology::Sectors(9);
        assert_eq!(config.validate(), Err(ConfigError::TeamCount(9)));

        for n in 2..=8 {
            config.topology = Topology::Sectors(n);
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = GameConfig {
            powerup_interval_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Interval));
    }

    #[test]
    fn test_config_roundtrips_through_json() {
        let config = GameConfig {
            topology: Topology::Sectors(6),
            powerups_enabled: true,
            powerup_interval_secs: 3,
            sound_enabled: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
