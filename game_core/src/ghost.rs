//! Ghost ball
//!
//! A phantom copy of the ball that flies ahead of it at `lookahead` times its
//! velocity. The AI paddle aims at it. It never touches paddles, bounces silently
//! off the top and bottom walls, and freezes once it reaches either goal line.

use hecs::{Entity, World};

use crate::components::{Ball, BallKind};

impl Ball {
    /// Build a ghost from `source` with velocity and speed cap scaled by `lookahead`
    pub fn ghost_of(source: &Ball, lookahead: f32) -> Ball {
        Ball::new(
            BallKind::Ghost,
            source.pos,
            source.size,
            source.vel * lookahead,
            source.max_speed * lookahead,
        )
    }
}

/// Replace the ghost ball with a fresh one derived from `source`.
///
/// The ghost always starts where the live ball is now, even if `source` is an
/// older copy; only its size and velocity come from `source`.
pub fn make_ghost_ball(world: &mut World, source: &Ball, lookahead: f32) -> Entity {
    let live_pos = real_ball(world).map(|(_e, ball)| ball.pos);

    let stale: Vec<Entity> = world
        .query::<&Ball>()
        .iter()
        .filter(|(_e, ball)| ball.is_ghost())
        .map(|(e, _)| e)
        .collect();
    for entity in stale {
        let _ = world.despawn(entity);
    }

    let mut ghost = Ball::ghost_of(source, lookahead);
    if let Some(pos) = live_pos {
        ghost.pos = pos;
    }
    world.spawn((ghost,))
}

/// The live ball, if one exists
pub fn real_ball(world: &World) -> Option<(Entity, Ball)> {
    world
        .query::<&Ball>()
        .iter()
        .find(|(_e, ball)| ball.kind == BallKind::Real)
        .map(|(e, ball)| (e, *ball))
}

/// The current ghost ball, if one exists
pub fn ghost_ball(world: &World) -> Option<(Entity, Ball)> {
    world
        .query::<&Ball>()
        .iter()
        .find(|(_e, ball)| ball.is_ghost())
        .map(|(e, ball)| (e, *ball))
}
