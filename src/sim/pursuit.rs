//! Pursuit rule and toroidal integration
//!
//! Both are total functions over in-bounds positions.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Board dimensions; positions live in `[0, width) x [0, height)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn contains(&self, position: IVec2) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }

    /// Wrap `position + offset` onto the board. Computed in `i64` so large
    /// offsets wrap exactly instead of overflowing.
    #[inline]
    pub fn wrap_offset(&self, position: IVec2, offset: IVec2) -> IVec2 {
        let x = (position.x as i64 + offset.x as i64).rem_euclid(self.width as i64);
        let y = (position.y as i64 + offset.y as i64).rem_euclid(self.height as i64);
        IVec2::new(x as i32, y as i32)
    }
}

/// Unit step toward the leader on each axis: -1, 0, or 1
#[inline]
pub fn pursuit_velocity(position: IVec2, leader_position: IVec2) -> IVec2 {
    (leader_position - position).signum()
}

/// Advance a position by a velocity, re-entering from the opposite edge
#[inline]
pub fn integrate_position(position: IVec2, velocity: IVec2, board: Board) -> IVec2 {
    board.wrap_offset(position, velocity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pursuit_velocity_signs() {
        let v = pursuit_velocity(IVec2::new(10, 10), IVec2::new(13, 2));
        assert_eq!(v, IVec2::new(1, -1));

        let v = pursuit_velocity(IVec2::new(10, 10), IVec2::new(10, 50));
        assert_eq!(v, IVec2::new(0, 1));

        let v = pursuit_velocity(IVec2::new(5, 5), IVec2::new(5, 5));
        assert_eq!(v, IVec2::ZERO);
    }

    #[test]
    fn test_wrap_right_edge() {
        let board = Board::new(400, 400);
        let p = integrate_position(IVec2::new(399, 5), IVec2::new(1, 0), board);
        assert_eq!(p, IVec2::new(0, 5));
    }

    #[test]
    fn test_wrap_left_and_top_edges() {
        let board = Board::new(400, 300);
        let p = integrate_position(IVec2::new(0, 0), IVec2::new(-1, -1), board);
        assert_eq!(p, IVec2::new(399, 299));
    }

    #[test]
    fn test_wrap_large_velocity() {
        let board = Board::new(10, 10);
        let p = integrate_position(IVec2::new(3, 3), IVec2::new(-25, 27), board);
        assert_eq!(p, IVec2::new(8, 0));

        let p = integrate_position(IVec2::new(9, 9), IVec2::new(i32::MAX, i32::MIN), board);
        assert!(board.contains(p));
    }

    proptest! {
        #[test]
        fn prop_integration_stays_on_board(
            width in 1i32..2000,
            height in 1i32..2000,
            px in 0i32..2000,
            py in 0i32..2000,
            vx in -5000i32..5000,
            vy in -5000i32..5000,
        ) {
            let board = Board::new(width, height);
            let start = IVec2::new(px % width, py % height);
            let p = integrate_position(start, IVec2::new(vx, vy), board);
            prop_assert!(board.contains(p));
            prop_assert_eq!((p.x as i64 - start.x as i64 - vx as i64).rem_euclid(width as i64), 0);
            prop_assert_eq!((p.y as i64 - start.y as i64 - vy as i64).rem_euclid(height as i64), 0);
        }

        #[test]
        fn prop_pursuit_matches_delta_sign(
            ax in 0i32..1000, ay in 0i32..1000,
            bx in 0i32..1000, by in 0i32..1000,
        ) {
            let a = IVec2::new(ax, ay);
            let b = IVec2::new(bx, by);
            let v = pursuit_velocity(a, b);
            prop_assert_eq!(v.x, (bx - ax).signum());
            prop_assert_eq!(v.y, (by - ay).signum());
            prop_assert!(v.x.abs() <= 1 && v.y.abs() <= 1);
            // Same inputs, same answer
            prop_assert_eq!(pursuit_velocity(a, b), v);
        }
    }
}
