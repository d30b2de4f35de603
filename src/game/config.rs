use serde::{Deserialize, Serialize};

use super::state::{Board, Point};

/// Configuration for the game surface and rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid cell size in surface pixels; every position is a multiple of it
    pub cell: i32,
    /// Preferred starting point for the snake head
    pub start_x: i32,
    pub start_y: i32,
    /// Half-extents of the centered rectangle food must stay out of
    pub safe_zone_half_width: i32,
    pub safe_zone_half_height: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell: 20,
            start_x: 200,
            start_y: 200,
            safe_zone_half_width: 200,
            safe_zone_half_height: 100,
        }
    }
}

impl GameConfig {
    /// The food-exclusion rectangle centered on the given surface
    pub fn safe_zone(&self, board: Board) -> SafeZone {
        let cx = board.width / 2;
        let cy = board.height / 2;
        SafeZone {
            x_min: cx - self.safe_zone_half_width,
            x_max: cx + self.safe_zone_half_width,
            y_min: cy - self.safe_zone_half_height,
            y_max: cy + self.safe_zone_half_height,
        }
    }

    /// Starting head position, snapped to the grid and clamped into bounds
    pub fn start_point(&self, board: Board) -> Point {
        let max_x = (board.width - self.cell).max(0);
        let max_y = (board.height - self.cell).max(0);
        let snap = |v: i32, max: i32| (v.clamp(0, max) / self.cell) * self.cell;
        Point::new(snap(self.start_x, max_x), snap(self.start_y, max_y))
    }
}

/// Fixed rectangle at the surface center where food may never spawn.
/// Bounds are inclusive on all four sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeZone {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl SafeZone {
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }
}
