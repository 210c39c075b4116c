use crate::{Ball, BallKind, Controller, Controls, Events, GameMap, Paddle, Time};
use hecs::World;

/// Move the live ball and bounce it off the arena walls
pub fn move_ball(world: &mut World, time: &Time, map: &GameMap, events: &mut Events) {
    move_balls_of_kind(world, BallKind::Real, time, map, events);
}

/// Move the ghost ball. Ghost walls are silent, so `events` only sees real hits.
pub fn move_ghost(world: &mut World, time: &Time, map: &GameMap, events: &mut Events) {
    move_balls_of_kind(world, BallKind::Ghost, time, map, events);
}

fn move_balls_of_kind(
    world: &mut World,
    kind: BallKind,
    time: &Time,
    map: &GameMap,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.kind == kind {
            ball.integrate(time.dt, map, events);
        }
    }
}

/// Apply held keys to human-controlled paddles
pub fn move_paddles(world: &mut World, time: &Time, map: &GameMap, controls: &Controls) {
    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        if *controller != Controller::Human {
            continue;
        }
        let input = controls.for_side(paddle.side);
        // Both keys held cancel out, but each move still clamps on its own
        if input.up {
            paddle.move_at(paddle.max_speed, time.dt, map);
        }
        if input.down {
            paddle.move_at(-paddle.max_speed, time.dt, map);
        }
    }
}
