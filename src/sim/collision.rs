//! Collision detection between balls and grid cells
//!
//! Cells are axis-aligned boxes, balls are circles: everything reduces to the
//! clamped closest-point test. Detection lives here; the tick loop decides
//! what a contact means (territory conversion or power-up pickup).

use glam::Vec2;

use crate::cell_of;
use crate::consts::{BALL_RADIUS, CELL_SIZE};
use crate::sim::ball::Ball;
use crate::sim::grid::Grid;

/// A ball/cell contact
#[derive(Debug, Clone, Copy)]
pub struct CellContact {
    /// The contacted cell
    pub cell: (usize, usize),
    /// Ball center minus the closest point on the cell box
    pub offset: Vec2,
}

/// Vector from the closest point on cell (x, y)'s box to `pos`, if the ball
/// strictly penetrates the cell. An exact touch (distance == radius) is not a
/// contact.
pub fn ball_cell_offset(pos: Vec2, radius: f32, cell_x: usize, cell_y: usize) -> Option<Vec2> {
    let min = Vec2::new(cell_x as f32 * CELL_SIZE, cell_y as f32 * CELL_SIZE);
    let max = min + Vec2::splat(CELL_SIZE);
    let closest = pos.clamp(min, max);
    let offset = pos - closest;
    if offset.length() < radius {
        Some(offset)
    } else {
        None
    }
}

/// First foreign cell the ball's circle penetrates, scanning the 3×3
/// neighborhood around the ball's cell in row-major (dy, dx) order.
///
/// Scan order is the tie-break when the circle overlaps several foreign cells
/// at once: the first match wins and the rest are left for later ticks.
pub fn first_foreign_contact(grid: &Grid, ball: &Ball) -> Option<CellContact> {
    let (cx, cy) = cell_of(ball.pos);
    for dy in -1..=1 {
        for dx in -1..=1 {
            let x = cx + dx;
            let y = cy + dy;
            let Some(owner) = grid.cell(x, y) else {
                continue;
            };
            if owner == ball.team {
                continue;
            }
            if let Some(offset) = ball_cell_offset(ball.pos, BALL_RADIUS, x as usize, y as usize) {
                return Some(CellContact {
                    cell: (x as usize, y as usize),
                    offset,
                });
            }
        }
    }
    None
}

/// Push the ball out of a contacted cell along the axis of minimum overlap
/// and invert its velocity on that axis
pub fn resolve_penetration(ball: &mut Ball, offset: Vec2) {
    let overlap_x = BALL_RADIUS - offset.x.abs();
    let overlap_y = BALL_RADIUS - offset.y.abs();

    if overlap_x < overlap_y {
        ball.vel.x = -ball.vel.x;
        ball.pos.x += if offset.x > 0.0 { overlap_x } else { -overlap_x };
    } else {
        ball.vel.y = -ball.vel.y;
        ball.pos.y += if offset.y > 0.0 { overlap_y } else { -overlap_y };
    }
}

/// Whether the ball's circle penetrates the given cell (power-up pickup test)
pub fn ball_overlaps_cell(pos: Vec2, cell: (usize, usize)) -> bool {
    ball_cell_offset(pos, BALL_RADIUS, cell.0, cell.1).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell_center;
    use crate::sim::ball::BounceRule;
    use crate::settings::Topology;

    fn ball_at(pos: Vec2, vel: Vec2, team: u8) -> Ball {
        Ball {
            id: 1,
            pos,
            vel,
            team,
            bounce: BounceRule::AllWalls,
        }
    }

    #[test]
    fn test_offset_inside_cell_is_zero() {
        let offset = ball_cell_offset(cell_center(5, 5), BALL_RADIUS, 5, 5).unwrap();
        assert_eq!(offset, Vec2::ZERO);
    }

    #[test]
    fn test_exact_touch_is_not_a_contact() {
        // Cell (10, 5) spans x in [300, 330); ball exactly radius away
        let pos = Vec2::new(300.0 - BALL_RADIUS, 165.0);
        assert!(ball_cell_offset(pos, BALL_RADIUS, 10, 5).is_none());
    }

    #[test]
    fn test_just_inside_radius_is_a_contact() {
        let pos = Vec2::new(300.0 - BALL_RADIUS + 0.01, 165.0);
        assert!(ball_cell_offset(pos, BALL_RADIUS, 10, 5).is_some());
    }

    #[test]
    fn test_first_contact_skips_own_cells() {
        let grid = Grid::new(Topology::TwoSide);
        // Team-0 ball deep in its own half: no foreign cell in reach
        let ball = ball_at(cell_center(5, 5), Vec2::new(4.0, 0.0), 0);
        assert!(first_foreign_contact(&grid, &ball).is_none());
    }

    #[test]
    fn test_first_contact_respects_scan_order() {
        let mut grid = Grid::new(Topology::TwoSide);
        // Ball near the top-left corner of its cell, penetrating two foreign
        // neighbors at once; the (dy=-1) row wins
        grid.set(5, 4, 1);
        grid.set(4, 5, 1);
        let ball = ball_at(Vec2::new(152.0, 153.0), Vec2::ZERO, 0);
        let contact = first_foreign_contact(&grid, &ball).unwrap();
        assert_eq!(contact.cell, (5, 4));
    }

    #[test]
    fn test_scan_skips_out_of_range_cells() {
        let grid = Grid::new(Topology::TwoSide);
        // Ball in the corner cell: neighborhood reaches outside the grid
        let ball = ball_at(Vec2::new(10.0, 10.0), Vec2::new(-4.0, -4.0), 0);
        assert!(first_foreign_contact(&grid, &ball).is_none());
    }

    #[test]
    fn test_penetration_resolves_on_min_overlap_axis() {
        // Ball nearly flush with a cell's left face: X overlap is smallest
        let mut ball = ball_at(Vec2::new(300.0 - 2.0, 165.0), Vec2::new(4.0, 1.0), 0);
        let offset = ball_cell_offset(ball.pos, BALL_RADIUS, 10, 5).unwrap();
        resolve_penetration(&mut ball, offset);

        assert_eq!(ball.vel, Vec2::new(-4.0, 1.0));
        // Pushed left by the 6-unit X overlap, back to an exact touch
        assert_eq!(ball.pos.x, 292.0);
    }

    #[test]
    fn test_powerup_overlap_uses_same_threshold() {
        assert!(ball_overlaps_cell(cell_center(3, 3), (3, 3)));
        let touching = Vec2::new(3.0 * CELL_SIZE - BALL_RADIUS, cell_center(3, 3).y);
        assert!(!ball_overlaps_cell(touching, (3, 3)));
    }
}
