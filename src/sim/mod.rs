//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed unit timestep only
//! - Seeded RNG only
//! - Stable iteration order (balls by spawn order, cells row-major)
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod grid;
pub mod powerup;
pub mod score;
pub mod state;
pub mod tick;

pub use ball::{Ball, BounceRule, Edge};
pub use collision::{CellContact, first_foreign_contact, resolve_penetration};
pub use grid::{Grid, TeamId};
pub use powerup::{PowerUp, PowerUpRegistry, SpawnTimer};
pub use score::{Scoreboard, aggregate};
pub use state::{BallView, GameEvent, GameState, Snapshot};
pub use tick::tick;
