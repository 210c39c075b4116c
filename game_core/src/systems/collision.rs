use crate::ghost::{make_ghost_ball, real_ball};
use crate::{AiProps, Ball, Config, Events, GameMap, Paddle, Side};
use hecs::World;

/// Paddle-ball collision response.
///
/// Snaps the ball out of the paddle, reflects it, steers it by where it struck the
/// paddle and speeds it up. The steering scales with the ball's current max speed,
/// so it grows stronger as a rally goes on. `vel.x` is boosted without regard to
/// `max_speed`; only integration is capped.
pub fn paddle_hit(
    ball: &mut Ball,
    paddle: &Paddle,
    map: &GameMap,
    config: &Config,
    events: &mut Events,
) {
    ball.pos.x = match paddle.side {
        Side::Left => paddle.pos.x + paddle.size.x,
        Side::Right => map.width - paddle.size.x - ball.size.x,
    };
    ball.x_reflect(events);

    let point_dist = ball.center().y - paddle.center_y();
    ball.vel.y = ball.max_speed * point_dist * config.deflection_factor;

    ball.max_speed += config.ball_speed_increment;
    ball.vel.x *= config.ball_x_boost;
}

/// Check the live ball against both paddles, left first.
///
/// Every hit writes the ball back and regenerates the ghost ball from it.
pub fn check_collisions(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    props: &AiProps,
    events: &mut Events,
) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side == Side::Right);

    for paddle in paddles {
        let Some((entity, mut ball)) = real_ball(world) else {
            return; // No ball in world
        };
        if !paddle.bounds().intersects(&ball.bounds()) {
            continue;
        }

        paddle_hit(&mut ball, &paddle, map, config, events);
        log::debug!(
            "{:?} paddle hit: vel = {:?}, max_speed = {}",
            paddle.side,
            ball.vel,
            ball.max_speed
        );

        if let Ok(mut live) = world.get::<&mut Ball>(entity) {
            *live = ball;
        }
        make_ghost_ball(world, &ball, props.ghost_ball_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ghost::ghost_ball;
    use crate::{create_ball, create_paddle, BallKind, Controller, SoundEffect};
    use glam::Vec2;

    fn setup_world() -> (World, Config, GameMap, Events, AiProps) {
        let world = World::new();
        let config = Config::new();
        let map = GameMap::new();
        let events = Events::new();
        let props = AiProps::new(100.0, 1.15, 200.0);
        (world, config, map, events, props)
    }

    fn paddle(side: Side, map: &GameMap, config: &Config) -> Paddle {
        Paddle::new(
            side,
            map,
            Vec2::new(config.paddle_width, config.paddle_height),
            600.0,
        )
    }

    /// Ball whose center sits `offset` below the paddle center, overlapping the paddle face
    fn ball_against(paddle: &Paddle, offset: f32, vel: Vec2, max_speed: f32) -> Ball {
        let x = match paddle.side {
            Side::Left => paddle.pos.x + paddle.size.x - 5.0,
            Side::Right => paddle.pos.x - 15.0,
        };
        let y = paddle.center_y() + offset - 10.0;
        Ball::new(BallKind::Real, Vec2::new(x, y), Vec2::splat(20.0), vel, max_speed)
    }

    #[test]
    fn test_center_hit_is_flat() {
        let (_world, config, map, mut events, _props) = setup_world();
        let left = paddle(Side::Left, &map, &config);
        let mut ball = ball_against(&left, 0.0, Vec2::new(-200.0, 35.0), 200.0);

        paddle_hit(&mut ball, &left, &map, &config, &mut events);

        assert_eq!(ball.vel.y, 0.0, "Center hit should leave no vertical speed");
    }

    #[test]
    fn test_offset_hit_deflects_proportionally() {
        let (_world, config, map, mut events, _props) = setup_world();
        let left = paddle(Side::Left, &map, &config);
        let mut ball = ball_against(&left, 50.0, Vec2::new(-200.0, 0.0), 200.0);

        paddle_hit(&mut ball, &left, &map, &config, &mut events);

        assert!(
            (ball.vel.y - 100.0).abs() < 1e-3,
            "Expected y speed 100, got {}",
            ball.vel.y
        );
    }

    #[test]
    fn test_hit_above_center_deflects_up() {
        let (_world, config, map, mut events, _props) = setup_world();
        let right = paddle(Side::Right, &map, &config);
        let mut ball = ball_against(&right, -80.0, Vec2::new(200.0, 0.0), 200.0);

        paddle_hit(&mut ball, &right, &map, &config, &mut events);

        assert!(ball.vel.y < 0.0, "Ball should deflect upward");
    }

    #[test]
    fn test_hit_speeds_up_ball() {
        let (_world, config, map, mut events, _props) = setup_world();
        let left = paddle(Side::Left, &map, &config);
        let mut ball = ball_against(&left, 0.0, Vec2::new(-200.0, 0.0), 200.0);

        paddle_hit(&mut ball, &left, &map, &config, &mut events);

        assert_eq!(ball.max_speed, 210.0);
        assert!((ball.vel.x - 260.0).abs() < 1e-3, "x speed should flip and grow by 1.3");
        assert_eq!(events.sounds, vec![SoundEffect::Hit]);
    }

    #[test]
    fn test_stored_speed_outgrows_max_speed() {
        let (_world, config, map, mut events, _props) = setup_world();
        let left = paddle(Side::Left, &map, &config);
        let right = paddle(Side::Right, &map, &config);
        let mut ball = ball_against(&left, 0.0, Vec2::new(-200.0, 0.0), 200.0);

        for i in 0..6 {
            let target = if i % 2 == 0 { &left } else { &right };
            paddle_hit(&mut ball, target, &map, &config, &mut events);
        }

        assert_eq!(ball.max_speed, 260.0);
        assert!(
            ball.vel.x.abs() > ball.max_speed,
            "Stored x speed ({}) should exceed max speed ({})",
            ball.vel.x,
            ball.max_speed
        );
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, map, mut events, props) = setup_world();
        let left = paddle(Side::Left, &map, &config);
        create_paddle(&mut world, left, Controller::Human);
        create_ball(
            &mut world,
            ball_against(&left, 0.0, Vec2::new(-200.0, 0.0), 200.0),
        );

        check_collisions(&mut world, &map, &config, &props, &mut events);

        let (_e, ball) = real_ball(&world).unwrap();
        assert_eq!(ball.pos.x, config.paddle_width, "Ball should be pushed out of paddle");
        assert!(ball.vel.x > 0.0, "Ball should bounce right");
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, map, mut events, props) = setup_world();
        let right = paddle(Side::Right, &map, &config);
        create_paddle(&mut world, right, Controller::Ai);
        create_ball(
            &mut world,
            ball_against(&right, 0.0, Vec2::new(200.0, 0.0), 200.0),
        );

        check_collisions(&mut world, &map, &config, &props, &mut events);

        let (_e, ball) = real_ball(&world).unwrap();
        assert_eq!(ball.pos.x, 1230.0);
        assert!(ball.vel.x < 0.0, "Ball should bounce left");
    }

    #[test]
    fn test_hit_regenerates_ghost() {
        let (mut world, config, map, mut events, props) = setup_world();
        let left = paddle(Side::Left, &map, &config);
        create_paddle(&mut world, left, Controller::Human);
        let ball = ball_against(&left, 20.0, Vec2::new(-200.0, 0.0), 200.0);
        create_ball(&mut world, ball);
        create_ball(&mut world, Ball::ghost_of(&ball, props.ghost_ball_speed));

        check_collisions(&mut world, &map, &config, &props, &mut events);

        let (_e, live) = real_ball(&world).unwrap();
        let (_e, ghost) = ghost_ball(&world).unwrap();
        assert_eq!(ghost.pos, live.pos);
        assert_eq!(ghost.vel, live.vel * props.ghost_ball_speed);
    }

    #[test]
    fn test_no_collision_when_apart() {
        let (mut world, config, map, mut events, props) = setup_world();
        create_paddle(&mut world, paddle(Side::Left, &map, &config), Controller::Human);
        create_ball(&mut world, Ball::serve(&map, Vec2::splat(20.0), 200.0));

        check_collisions(&mut world, &map, &config, &props, &mut events);

        assert!(events.sounds.is_empty(), "No hit, no sound");
        assert!(ghost_ball(&world).is_none(), "No hit, no new ghost");
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, map, mut events, props) = setup_world();
        create_paddle(&mut world, paddle(Side::Left, &map, &config), Controller::Human);

        check_collisions(&mut world, &map, &config, &props, &mut events);

        assert!(events.sounds.is_empty());
    }
}
