//! Score aggregation
//!
//! Pure derivation from the instant-of-call grid and ball list; nothing here
//! is stored between ticks.

use serde::Serialize;

use crate::sim::ball::Ball;
use crate::sim::grid::Grid;

/// Per-team standings, recomputed every tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    /// Grid cells owned by each team
    pub cells: Vec<u32>,
    /// Live balls belonging to each team
    pub balls: Vec<u32>,
}

/// Count cells and balls per team
pub fn aggregate(grid: &Grid, balls: &[Ball]) -> Scoreboard {
    let mut ball_counts = vec![0u32; grid.team_count()];
    for ball in balls {
        ball_counts[ball.team as usize] += 1;
    }
    Scoreboard {
        cells: grid.team_cell_counts(),
        balls: ball_counts,
    }
}
