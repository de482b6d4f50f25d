//! The ownership grid
//!
//! An N×N matrix of team ids. Every cell always belongs to exactly one team;
//! there is no unowned state. Partitioning is deterministic per topology, so
//! two resets with the same configuration produce identical grids.

use std::f32::consts::TAU;

use crate::consts::GRID_SIZE;
use crate::settings::Topology;

/// Team identifier, always in `[0, team_count)`
pub type TeamId = u8;

/// N×N team-ownership matrix, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    team_count: usize,
    cells: Vec<TeamId>,
}

impl Grid {
    /// Build a freshly partitioned grid for the given topology.
    ///
    /// The topology is validated at configuration time; by the time a grid is
    /// built the team count is known to be in range.
    pub fn new(topology: Topology) -> Self {
        let size = GRID_SIZE;
        let mut cells = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                cells.push(partition_team(topology, x, y, size));
            }
        }
        Self {
            size,
            team_count: topology.team_count(),
            cells,
        }
    }

    /// Cells along one edge
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of teams the grid was partitioned for
    pub fn team_count(&self) -> usize {
        self.team_count
    }

    /// Owner of cell (x, y). Panics out of range; the neighborhood scan goes
    /// through [`Grid::cell`] instead.
    pub fn get(&self, x: usize, y: usize) -> TeamId {
        self.cells[y * self.size + x]
    }

    /// Bounds-checked lookup for signed cell indices (neighborhood scans near
    /// the walls produce out-of-range offsets, which are skipped)
    pub fn cell(&self, x: i32, y: i32) -> Option<TeamId> {
        if x < 0 || y < 0 || x as usize >= self.size || y as usize >= self.size {
            return None;
        }
        Some(self.get(x as usize, y as usize))
    }

    /// Overwrite ownership of cell (x, y)
    pub fn set(&mut self, x: usize, y: usize, team: TeamId) {
        self.cells[y * self.size + x] = team;
    }

    /// Row-major view of all cells, for snapshots
    pub fn cells(&self) -> &[TeamId] {
        &self.cells
    }

    /// Count of cells owned by each team
    pub fn team_cell_counts(&self) -> Vec<u32> {
        let mut counts = vec![0u32; self.team_count];
        for &team in &self.cells {
            counts[team as usize] += 1;
        }
        counts
    }
}

/// Deterministic initial owner of cell (x, y) under the given topology
fn partition_team(topology: Topology, x: usize, y: usize, size: usize) -> TeamId {
    let half = size / 2;
    match topology {
        Topology::TwoSide => {
            if x < half {
                0
            } else {
                1
            }
        }
        Topology::FourQuadrant => {
            let is_left = x < half;
            let is_top = y < half;
            match (is_left, is_top) {
                (true, true) => 0,
                (false, true) => 2,
                (true, false) => 3,
                (false, false) => 1,
            }
        }
        Topology::Sectors(n) => {
            // Angular sector around the grid center, measured from the
            // cell center so the partition is symmetric.
            let center = size as f32 / 2.0;
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let theta = dy.atan2(dx).rem_euclid(TAU);
            let sector = (theta / TAU * n as f32) as usize % n as usize;
            sector as TeamId
        }
    }
}
