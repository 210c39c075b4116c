use glam::Vec2;

use crate::host::SoundEffect;
use crate::map::{Aabb, GameMap};
use crate::resources::Events;

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Who moves a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Ai,
}

/// Paddle component. `pos` is the top-left corner; x never changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    pub max_speed: f32,
}

impl Paddle {
    /// Paddle flush against its side of the arena, vertically centered
    pub fn new(side: Side, map: &GameMap, size: Vec2, max_speed: f32) -> Self {
        let x = match side {
            Side::Left => 0.0,
            Side::Right => map.width - size.x,
        };
        Self {
            side,
            pos: Vec2::new(x, map.centered(size).y),
            size,
            max_speed,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Move with a requested speed (positive = up), capped at `max_speed`
    pub fn move_at(&mut self, requested_speed: f32, dt: f32, map: &GameMap) {
        let speed = requested_speed.max(-self.max_speed).min(self.max_speed);
        self.pos.y -= speed * dt;
        self.pos.y = map.clamp_y(self.pos.y, self.size.y);

        debug_assert!(
            self.pos.y >= 0.0 && self.pos.y <= map.height - self.size.y,
            "paddle left the arena: y = {}",
            self.pos.y
        );
    }
}

/// Distinguishes the live ball from the AI's prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallKind {
    Real,
    /// Stops dead on the goal lines and bounces silently off the top and bottom
    Ghost,
}

/// Ball component. `pos` is the top-left corner.
///
/// `max_speed` caps each axis only while integrating; `vel` itself may grow past it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub kind: BallKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub max_speed: f32,
}

impl Ball {
    pub fn new(kind: BallKind, pos: Vec2, size: Vec2, vel: Vec2, max_speed: f32) -> Self {
        Self {
            kind,
            pos,
            size,
            vel,
            max_speed,
        }
    }

    /// Fresh ball in the middle of the arena heading right at `start_speed`
    pub fn serve(map: &GameMap, size: Vec2, start_speed: f32) -> Self {
        Self::new(
            BallKind::Real,
            map.centered(size),
            size,
            Vec2::new(start_speed, 0.0),
            start_speed,
        )
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn is_ghost(&self) -> bool {
        self.kind == BallKind::Ghost
    }

    /// Horizontal reflection
    pub fn x_reflect(&mut self, events: &mut Events) {
        match self.kind {
            BallKind::Real => {
                self.vel.x = -self.vel.x;
                events.sounds.push(SoundEffect::Hit);
            }
            BallKind::Ghost => self.vel = Vec2::ZERO,
        }
    }

    /// Vertical reflection
    pub fn y_reflect(&mut self, events: &mut Events) {
        self.vel.y = -self.vel.y;
        if self.kind == BallKind::Real {
            events.sounds.push(SoundEffect::Hit);
        }
    }

    /// Integrate one frame and resolve the arena walls.
    ///
    /// Returns how many boundaries were crossed. Each crossing reflects once and
    /// clamps the position onto that boundary.
    pub fn integrate(&mut self, dt: f32, map: &GameMap, events: &mut Events) -> u32 {
        let cap = |v: f32| v.max(-self.max_speed).min(self.max_speed);
        self.pos += Vec2::new(cap(self.vel.x), cap(self.vel.y)) * dt;

        let max = map.max_pos(self.size);
        let mut crossings = 0;

        if self.pos.x < 0.0 {
            self.x_reflect(events);
            self.pos.x = 0.0;
            crossings += 1;
        }
        if self.pos.x > max.x {
            self.x_reflect(events);
            self.pos.x = max.x;
            crossings += 1;
        }
        if self.pos.y < 0.0 {
            self.y_reflect(events);
            self.pos.y = 0.0;
            crossings += 1;
        }
        if self.pos.y > max.y {
            self.y_reflect(events);
            self.pos.y = max.y;
            crossings += 1;
        }

        debug_assert!(
            (0.0..=max.x).contains(&self.pos.x) && (0.0..=max.y).contains(&self.pos.y),
            "ball left the arena: {:?}",
            self.pos
        );

        crossings
    }
}
