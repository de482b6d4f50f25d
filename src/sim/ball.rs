//! Ball kinematics and wall bouncing
//!
//! Each ball moves ballistically (Euler integration, one unit step per tick)
//! and reflects off a subset of the arena walls determined by its
//! [`BounceRule`]. Speed is only re-fixed after territory-conversion bounces;
//! wall reflections are lossless sign flips.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::{ARENA_SIZE, BALL_RADIUS, BALL_SPEED, BOUNCE_JITTER, EDGE_INSET};
use crate::sim::grid::TeamId;

/// An arena edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Which arena walls reflect a given ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceRule {
    /// All four walls reflect (sector topologies)
    AllWalls,
    /// The ball owns one edge: that edge reflects, the perpendicular pair
    /// reflects, the opposing colinear edge does not
    EdgeOwned(Edge),
}

impl BounceRule {
    /// Which walls reflect under this rule, as (left, right, top, bottom)
    fn reflecting_walls(self) -> (bool, bool, bool, bool) {
        match self {
            BounceRule::AllWalls => (true, true, true, true),
            BounceRule::EdgeOwned(Edge::Left) => (true, false, true, true),
            BounceRule::EdgeOwned(Edge::Right) => (false, true, true, true),
            BounceRule::EdgeOwned(Edge::Top) => (true, true, true, false),
            BounceRule::EdgeOwned(Edge::Bottom) => (true, true, false, true),
        }
    }
}

/// A ball entity
#[derive(Debug, Clone)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub team: TeamId,
    pub bounce: BounceRule,
}

impl Ball {
    /// Spawn an edge-owned ball seated a short inset from its edge, moving
    /// inward with a random lateral component
    pub fn new_edge(id: u32, team: TeamId, edge: Edge, rng: &mut Pcg32) -> Self {
        let seat = BALL_RADIUS + EDGE_INSET;
        let mid = ARENA_SIZE / 2.0;
        let lateral = BALL_SPEED * (rng.random::<f32>() - 0.5) * 2.0;
        let (pos, vel) = match edge {
            Edge::Left => (Vec2::new(seat, mid), Vec2::new(BALL_SPEED, lateral)),
            Edge::Right => (
                Vec2::new(ARENA_SIZE - seat, mid),
                Vec2::new(-BALL_SPEED, lateral),
            ),
            Edge::Top => (Vec2::new(mid, seat), Vec2::new(lateral, BALL_SPEED)),
            Edge::Bottom => (
                Vec2::new(mid, ARENA_SIZE - seat),
                Vec2::new(lateral, -BALL_SPEED),
            ),
        };
        Self {
            id,
            pos,
            vel,
            team,
            bounce: BounceRule::EdgeOwned(edge),
        }
    }

    /// Spawn an all-walls ball at the periphery of its angular sector, aimed
    /// inward with a random lateral bias
    pub fn new_sector(id: u32, team: TeamId, sector_count: u8, rng: &mut Pcg32) -> Self {
        let theta = (team as f32 + 0.5) / sector_count as f32 * TAU;
        let dir = Vec2::new(theta.cos(), theta.sin());
        let center = Vec2::splat(ARENA_SIZE / 2.0);
        let pos = center + dir * (ARENA_SIZE / 2.0 - EDGE_INSET - BALL_RADIUS);

        let lateral = Vec2::new(rng.random::<f32>() - 0.5, rng.random::<f32>() - 0.5);
        let vel = (-dir + lateral).normalize_or(-dir) * BALL_SPEED;
        Self {
            id,
            pos,
            vel,
            team,
            bounce: BounceRule::AllWalls,
        }
    }

    /// Spawn a ball from a power-up pickup: seated at the pickup's cell
    /// center, uniform random direction, inheriting the collector's rule
    pub fn new_from_pickup(
        id: u32,
        team: TeamId,
        bounce: BounceRule,
        pos: Vec2,
        rng: &mut Pcg32,
    ) -> Self {
        let angle = rng.random::<f32>() * TAU;
        let vel = Vec2::new(angle.cos(), angle.sin()) * BALL_SPEED;
        Self {
            id,
            pos,
            vel,
            team,
            bounce,
        }
    }

    /// Advance position by one tick (fixed unit step, no dt scaling)
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// Reflect off whichever arena walls this ball's rule allows. Position is
    /// clamped to radius distance from the wall so the ball never tunnels out.
    pub fn bounce_walls(&mut self) {
        let (left, right, top, bottom) = self.bounce.reflecting_walls();

        if left && self.pos.x - BALL_RADIUS < 0.0 {
            self.pos.x = BALL_RADIUS;
            self.vel.x = self.vel.x.abs();
        }
        if right && self.pos.x + BALL_RADIUS > ARENA_SIZE {
            self.pos.x = ARENA_SIZE - BALL_RADIUS;
            self.vel.x = -self.vel.x.abs();
        }
        if top && self.pos.y - BALL_RADIUS < 0.0 {
            self.pos.y = BALL_RADIUS;
            self.vel.y = self.vel.y.abs();
        }
        if bottom && self.pos.y + BALL_RADIUS > ARENA_SIZE {
            self.pos.y = ARENA_SIZE - BALL_RADIUS;
            self.vel.y = -self.vel.y.abs();
        }
    }

    /// Jitter the velocity after a conversion bounce and re-fix its magnitude
    /// to [`BALL_SPEED`]. A degenerate zero-length velocity falls back to a
    /// rightward direction rather than dividing by zero.
    pub fn perturb_and_renormalize(&mut self, rng: &mut Pcg32) {
        self.vel.x += (rng.random::<f32>() - 0.5) * 2.0 * BOUNCE_JITTER;
        self.vel.y += (rng.random::<f32>() - 0.5) * 2.0 * BOUNCE_JITTER;
        self.vel = self.vel.normalize_or(Vec2::X) * BALL_SPEED;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_owned_wall_reflects_and_clamps() {
        // Speed-4 ball about to cross its own left wall
        let mut ball = Ball {
            id: 1,
            pos: Vec2::new(9.0, 300.0),
            vel: Vec2::new(-4.0, 2.0),
            team: 0,
            bounce: BounceRule::EdgeOwned(Edge::Left),
        };
        ball.integrate();
        ball.bounce_walls();

        // Perpendicular component flipped, parallel unchanged, no tunneling
        assert_eq!(ball.vel, Vec2::new(4.0, 2.0));
        assert_eq!(ball.pos.x, BALL_RADIUS);
        assert_eq!(ball.pos.y, 302.0);
    }

    #[test]
    fn test_non_owned_colinear_wall_does_not_reflect() {
        // A left-owned ball conceptually passes through the right wall
        let mut ball = Ball {
            id: 1,
            pos: Vec2::new(ARENA_SIZE - 5.0, 300.0),
            vel: Vec2::new(4.0, 0.0),
            team: 0,
            bounce: BounceRule::EdgeOwned(Edge::Left),
        };
        ball.integrate();
        ball.bounce_walls();
        assert_eq!(ball.vel.x, 4.0);
        assert!(ball.pos.x > ARENA_SIZE - BALL_RADIUS);
    }

    #[test]
    fn test_edge_owned_reflects_perpendicular_pair() {
        let mut ball = Ball {
            id: 1,
            pos: Vec2::new(300.0, 6.0),
            vel: Vec2::new(1.0, -4.0),
            team: 0,
            bounce: BounceRule::EdgeOwned(Edge::Left),
        };
        ball.integrate();
        ball.bounce_walls();
        assert_eq!(ball.vel.y, 4.0);
        assert_eq!(ball.pos.y, BALL_RADIUS);
    }

    #[test]
    fn test_all_walls_reflects_everywhere() {
        for (pos, vel, expect_vel) in [
            (Vec2::new(4.0, 300.0), Vec2::new(-4.0, 0.0), Vec2::new(4.0, 0.0)),
            (
                Vec2::new(ARENA_SIZE - 4.0, 300.0),
                Vec2::new(4.0, 0.0),
                Vec2::new(-4.0, 0.0),
            ),
            (Vec2::new(300.0, 4.0), Vec2::new(0.0, -4.0), Vec2::new(0.0, 4.0)),
            (
                Vec2::new(300.0, ARENA_SIZE - 4.0),
                Vec2::new(0.0, 4.0),
                Vec2::new(0.0, -4.0),
            ),
        ] {
            let mut ball = Ball {
                id: 1,
                pos,
                vel,
                team: 0,
                bounce: BounceRule::AllWalls,
            };
            ball.bounce_walls();
            assert_eq!(ball.vel, expect_vel);
        }
    }

    #[test]
    fn test_zero_velocity_renormalizes_to_full_speed() {
        let mut ball = Ball {
            id: 1,
            pos: Vec2::new(300.0, 300.0),
            vel: Vec2::ZERO,
            team: 0,
            bounce: BounceRule::AllWalls,
        };
        // Jitter may still produce a near-zero vector; the fallback direction
        // guarantees full speed either way
        ball.perturb_and_renormalize(&mut rng());
        assert!((ball.vel.length() - BALL_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_pickup_ball_has_full_speed_and_inherits_rule() {
        let ball = Ball::new_from_pickup(
            7,
            2,
            BounceRule::EdgeOwned(Edge::Top),
            Vec2::new(105.0, 105.0),
            &mut rng(),
        );
        assert!((ball.vel.length() - BALL_SPEED).abs() < 1e-4);
        assert_eq!(ball.bounce, BounceRule::EdgeOwned(Edge::Top));
        assert_eq!(ball.team, 2);
    }

    #[test]
    fn test_sector_ball_spawns_inside_arena() {
        let mut r = rng();
        for n in 2u8..=8 {
            for team in 0..n {
                let ball = Ball::new_sector(1, team, n, &mut r);
                assert!(ball.pos.x >= BALL_RADIUS && ball.pos.x <= ARENA_SIZE - BALL_RADIUS);
                assert!(ball.pos.y >= BALL_RADIUS && ball.pos.y <= ARENA_SIZE - BALL_RADIUS);
                assert!((ball.vel.length() - BALL_SPEED).abs() < 1e-3);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_perturb_always_renormalizes(vx in -10.0f32..10.0, vy in -10.0f32..10.0, seed in 0u64..1000) {
            let mut ball = Ball {
                id: 1,
                pos: Vec2::new(300.0, 300.0),
                vel: Vec2::new(vx, vy),
                team: 0,
                bounce: BounceRule::AllWalls,
            };
            let mut rng = Pcg32::seed_from_u64(seed);
            ball.perturb_and_renormalize(&mut rng);
            prop_assert!((ball.vel.length() - BALL_SPEED).abs() < 1e-3);
        }
    }
}
