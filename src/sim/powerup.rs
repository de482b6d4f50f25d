//! Power-up lifecycle
//!
//! Power-ups are timed pickups sitting on a grid cell. A wall-clock timer
//! spawns one per interval while enabled; any ball whose circle penetrates
//! the cell consumes it and earns its team an extra ball. Disabling power-ups
//! or resetting the session clears the registry and cancels the timer before
//! the rebuilt state can see a stale spawn.

use glam::Vec2;

use crate::sim::collision::ball_overlaps_cell;

/// A live power-up pickup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerUp {
    /// Grid cell the pickup occupies
    pub cell: (usize, usize),
    /// Tick at which it was spawned
    pub spawned_tick: u64,
}

/// The set of live power-ups
#[derive(Debug, Clone, Default)]
pub struct PowerUpRegistry {
    live: Vec<PowerUp>,
}

impl PowerUpRegistry {
    /// Add a pickup at the given cell. Duplicate spawns on one cell are
    /// allowed; each is consumed independently.
    pub fn spawn(&mut self, cell: (usize, usize), tick: u64) {
        self.live.push(PowerUp {
            cell,
            spawned_tick: tick,
        });
    }

    /// Remove and return every pickup the ball at `pos` penetrates
    pub fn consume_overlapping(&mut self, pos: Vec2) -> Vec<PowerUp> {
        let mut taken = Vec::new();
        self.live.retain(|p| {
            if ball_overlaps_cell(pos, p.cell) {
                taken.push(*p);
                false
            } else {
                true
            }
        });
        taken
    }

    /// Drop every live pickup
    pub fn clear(&mut self) {
        self.live.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Cells of all live pickups, for snapshots
    pub fn cells(&self) -> Vec<(usize, usize)> {
        self.live.iter().map(|p| p.cell).collect()
    }
}

/// Wall-clock spawn timer
///
/// Runs logically alongside the tick loop but only ever fires through
/// [`SpawnTimer::poll`], so its effect on shared state is append-only and
/// serialized with the tick. Cancellation is synchronous: after [`cancel`]
/// (or a disabled poll) no pending fire survives into a rebuilt session.
///
/// [`cancel`]: SpawnTimer::cancel
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval_secs: f64,
    next_due: Option<f64>,
}

impl SpawnTimer {
    pub fn new(interval_secs: u32) -> Self {
        Self {
            interval_secs: interval_secs as f64,
            next_due: None,
        }
    }

    /// Drop any pending fire
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Poll at wall-clock time `now`. Returns true at most once per interval;
    /// the first poll after arming never fires. Polling while disarmed arms
    /// the timer, so a reset implicitly restarts the cadence.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.next_due {
            None => {
                self.next_due = Some(now + self.interval_secs);
                false
            }
            Some(due) if now >= due => {
                // Re-arm from now, not from the missed deadline: a stalled
                // frame loop must not burst-spawn to catch up
                self.next_due = Some(now + self.interval_secs);
                true
            }
            Some(_) => false,
        }
    }
}
