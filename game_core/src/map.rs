use glam::Vec2;

use crate::params::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from a top-left corner and a size (canvas coordinates, y down)
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap: boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The playing field. Origin is the top-left corner, y grows downwards.
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl Default for GameMap {
    fn default() -> Self {
        Self {
            width: Params::ARENA_WIDTH,
            height: Params::ARENA_HEIGHT,
        }
    }
}

impl GameMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Top-left corner that centers a box of `size` in the arena
    pub fn centered(&self, size: Vec2) -> Vec2 {
        (self.size() - size) * 0.5
    }

    /// Largest top-left coordinate that keeps a box of `size` inside the arena
    pub fn max_pos(&self, size: Vec2) -> Vec2 {
        self.size() - size
    }

    /// Clamp a top edge so a box of `height` stays inside the arena
    pub fn clamp_y(&self, y: f32, height: f32) -> f32 {
        y.clamp(0.0, self.height - height)
    }
}
