//! Game state and core simulation types
//!
//! One [`GameState`] owns everything a tick mutates: the grid, the ball
//! list, the power-up registry, and the session RNG. Presentation reads it
//! only through [`Snapshot`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::GRID_SIZE;
use crate::settings::Topology;
use crate::sim::ball::{Ball, Edge};
use crate::sim::grid::{Grid, TeamId};
use crate::sim::powerup::PowerUpRegistry;
use crate::sim::score::Scoreboard;

/// Side-channel notifications for external collaborators (audio). Fired
/// synchronously during the tick, drained by the session driver; payload-free
/// by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A grid cell changed hands
    CellConverted,
    /// A ball consumed a power-up
    PowerUpCollected,
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed, for reproducing a run under one configuration
    pub seed: u64,
    pub topology: Topology,
    pub grid: Grid,
    /// Live balls; append-only until reset
    pub balls: Vec<Ball>,
    pub powerups: PowerUpRegistry,
    /// Standings as of the end of the last tick
    pub scores: Scoreboard,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events emitted since the last drain
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Build a fresh session: partitioned grid, one ball per team seated at
    /// its edge or sector periphery, empty power-up registry.
    pub fn new(topology: Topology, seed: u64) -> Self {
        let grid = Grid::new(topology);
        let mut state = Self {
            seed,
            topology,
            grid,
            balls: Vec::new(),
            powerups: PowerUpRegistry::default(),
            scores: Scoreboard::default(),
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };
        state.spawn_initial_balls();
        state.scores = super::score::aggregate(&state.grid, &state.balls);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn spawn_initial_balls(&mut self) {
        match self.topology {
            Topology::TwoSide => {
                for (team, edge) in [(0, Edge::Left), (1, Edge::Right)] {
                    let id = self.next_entity_id();
                    let ball = Ball::new_edge(id, team, edge, &mut self.rng);
                    self.balls.push(ball);
                }
            }
            Topology::FourQuadrant => {
                let edges = [
                    (0, Edge::Left),
                    (1, Edge::Right),
                    (2, Edge::Top),
                    (3, Edge::Bottom),
                ];
                for (team, edge) in edges {
                    let id = self.next_entity_id();
                    let ball = Ball::new_edge(id, team, edge, &mut self.rng);
                    self.balls.push(ball);
                }
            }
            Topology::Sectors(n) => {
                for team in 0..n {
                    let id = self.next_entity_id();
                    let ball = Ball::new_sector(id, team, n, &mut self.rng);
                    self.balls.push(ball);
                }
            }
        }
    }

    /// Spawn one power-up at a uniformly random cell, regardless of who owns
    /// it. Called by the session driver when the spawn timer fires.
    pub fn spawn_powerup(&mut self) {
        let x = self.rng.random_range(0..GRID_SIZE);
        let y = self.rng.random_range(0..GRID_SIZE);
        self.powerups.spawn((x, y), self.time_ticks);
        log::debug!("power-up spawned at cell ({x}, {y})");
    }

    /// Hand out accumulated side-channel events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view for the presentation layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.time_ticks,
            grid_size: self.grid.size(),
            cells: self.grid.cells().to_vec(),
            balls: self
                .balls
                .iter()
                .map(|b| BallView {
                    pos: b.pos,
                    team: b.team,
                })
                .collect(),
            powerups: self.powerups.cells(),
            scores: self.scores.clone(),
        }
    }
}

/// A ball as the presentation layer sees it
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub team: TeamId,
}

/// Immutable per-tick view of the whole simulation
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub grid_size: usize,
    /// Row-major cell ownership
    pub cells: Vec<TeamId>,
    pub balls: Vec<BallView>,
    /// Cells of live power-ups
    pub powerups: Vec<(usize, usize)>,
    pub scores: Scoreboard,
}
