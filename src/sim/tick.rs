//! The simulation tick
//!
//! One tick advances every ball, resolves wall and territory collisions,
//! resolves power-up pickups, and recomputes the scoreboard. Balls appended
//! mid-tick by pickups are not processed until the next tick: the loop runs
//! over the list length captured at tick start.

use crate::cell_center;
use crate::sim::ball::{Ball, BounceRule};
use crate::sim::collision::{first_foreign_contact, resolve_penetration};
use crate::sim::grid::TeamId;
use crate::sim::score;
use crate::sim::state::{GameEvent, GameState};

/// Advance the simulation by one tick
pub fn tick(state: &mut GameState) {
    state.time_ticks += 1;

    // Fixed-length snapshot of the ball list; pickups append past it
    let live = state.balls.len();
    let mut spawn_requests: Vec<(TeamId, BounceRule, (usize, usize))> = Vec::new();

    for i in 0..live {
        {
            let ball = &mut state.balls[i];
            ball.integrate();
            ball.bounce_walls();
        }

        // Territory conversion: at most one cell per ball per tick
        if let Some(contact) = first_foreign_contact(&state.grid, &state.balls[i]) {
            let (cx, cy) = contact.cell;
            let team = state.balls[i].team;
            state.grid.set(cx, cy, team);
            state.events.push(GameEvent::CellConverted);
            log::trace!("team {team} converted cell ({cx}, {cy})");

            let ball = &mut state.balls[i];
            resolve_penetration(ball, contact.offset);
            ball.perturb_and_renormalize(&mut state.rng);
        }

        // Power-up pickups; spawning is deferred so balls added here are
        // not re-processed within this tick
        let ball = &state.balls[i];
        for pickup in state.powerups.consume_overlapping(ball.pos) {
            spawn_requests.push((ball.team, ball.bounce, pickup.cell));
            state.events.push(GameEvent::PowerUpCollected);
        }
    }

    for (team, bounce, cell) in spawn_requests {
        let id = state.next_entity_id();
        let pos = cell_center(cell.0, cell.1);
        let ball = Ball::new_from_pickup(id, team, bounce, pos, &mut state.rng);
        log::debug!("power-up collected: spawned ball {id} for team {team}");
        state.balls.push(ball);
    }

    state.scores = score::aggregate(&state.grid, &state.balls);
}
