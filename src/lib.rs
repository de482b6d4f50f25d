//! Turf Wars - a territory-conquest arena simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid ownership, ball physics, power-ups)
//! - `settings`: Session configuration and validation
//! - `session`: Tick driver that owns the game state and the power-up timer
//!
//! Rendering, audio, and UI controls are external collaborators. The engine
//! evolves the authoritative state one tick at a time and hands out read-only
//! snapshots; nothing in here knows how a cell or a ball is drawn.

pub mod session;
pub mod settings;
pub mod sim;

pub use session::SessionController;
pub use settings::{ConfigError, GameConfig, Topology};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena edge length in world units (the arena is square)
    pub const ARENA_SIZE: f32 = 600.0;
    /// Number of cells along one edge of the ownership grid
    pub const GRID_SIZE: usize = 20;
    /// Edge length of one grid cell in world units
    pub const CELL_SIZE: f32 = ARENA_SIZE / GRID_SIZE as f32;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Constant ball speed; velocity is renormalized to this after every
    /// territory-conversion bounce
    pub const BALL_SPEED: f32 = 4.0;
    /// Per-axis velocity perturbation applied on a conversion bounce
    pub const BOUNCE_JITTER: f32 = 0.25;
    /// Distance from the arena edge at which initial balls are seated
    pub const EDGE_INSET: f32 = 10.0;

    /// Supported team count range
    pub const MIN_TEAMS: u8 = 2;
    pub const MAX_TEAMS: u8 = 8;
}

/// Grid cell containing a world position (may be out of range near walls)
#[inline]
pub fn cell_of(pos: Vec2) -> (i32, i32) {
    (
        (pos.x / consts::CELL_SIZE).floor() as i32,
        (pos.y / consts::CELL_SIZE).floor() as i32,
    )
}

/// World position of the center of cell (x, y)
#[inline]
pub fn cell_center(x: usize, y: usize) -> Vec2 {
    Vec2::new(
        x as f32 * consts::CELL_SIZE + consts::CELL_SIZE / 2.0,
        y as f32 * consts::CELL_SIZE + consts::CELL_SIZE / 2.0,
    )
}
