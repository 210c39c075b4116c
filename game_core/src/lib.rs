pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod ghost;
pub mod host;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use host::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation.
///
/// One variable step per presented frame; the caller has already clamped `time.dt`.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &Time,
    map: &GameMap,
    config: &Config,
    props: &AiProps,
    score: &mut Score,
    events: &mut Events,
    controls: &Controls,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Move ball, then the ghost ahead of it
    move_ball(world, time, map, events);
    move_ghost(world, time, map, events);

    // 2. Human paddles, then AI paddles chasing the ghost
    move_paddles(world, time, map, controls);
    drive_ai_paddles(world, time, map);

    // 3. Paddle hits (may regenerate the ghost)
    check_collisions(world, map, config, props, events);

    // 4. Goals (ball resting on a goal line)
    check_goals(world, map, config, props, score, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, paddle: Paddle, controller: Controller) -> hecs::Entity {
    world.spawn((paddle, controller))
}

/// Helper to create a ball entity (live or ghost)
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
