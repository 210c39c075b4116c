use crate::ghost::ghost_ball;
use crate::{Ball, Controller, GameMap, Paddle, Time};
use hecs::World;

/// Requested paddle speed toward the ghost ball.
///
/// Proportional to the vertical gap; `Paddle::move_at` caps it at the paddle's
/// max speed, which is the only thing limiting how fast the AI reacts.
pub fn ai_speed(paddle: &Paddle, ghost: &Ball) -> f32 {
    paddle.center_y() - ghost.center().y
}

/// Steer AI paddles toward the ghost ball
pub fn drive_ai_paddles(world: &mut World, time: &Time, map: &GameMap) {
    let Some((_entity, ghost)) = ghost_ball(world) else {
        return;
    };

    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        if *controller == Controller::Ai {
            let speed = ai_speed(paddle, &ghost);
            paddle.move_at(speed, time.dt, map);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, BallKind, Side};
    use glam::Vec2;

    fn ghost_at(y: f32) -> Ball {
        Ball::new(
            BallKind::Ghost,
            Vec2::new(900.0, y),
            Vec2::splat(20.0),
            Vec2::new(230.0, 0.0),
            230.0,
        )
    }

    fn right_paddle_y(world: &World) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == Side::Right)
            .map(|(_e, p)| p.pos.y)
            .unwrap()
    }

    #[test]
    fn test_ai_speed_sign() {
        let map = GameMap::new();
        let paddle = Paddle::new(Side::Right, &map, Vec2::new(30.0, 200.0), 100.0);
        // Paddle center is 360, ghost center 110: move up (positive)
        assert_eq!(ai_speed(&paddle, &ghost_at(100.0)), 250.0);
        assert_eq!(ai_speed(&paddle, &ghost_at(350.0)), 0.0);
        assert!(ai_speed(&paddle, &ghost_at(600.0)) < 0.0);
    }

    #[test]
    fn test_ai_paddle_speed_is_capped() {
        let map = GameMap::new();
        let mut world = World::new();
        let time = Time::new(0.1);
        create_paddle(
            &mut world,
            Paddle::new(Side::Right, &map, Vec2::new(30.0, 200.0), 100.0),
            Controller::Ai,
        );
        create_ball(&mut world, ghost_at(0.0));

        drive_ai_paddles(&mut world, &time, &map);

        assert_eq!(right_paddle_y(&world), 250.0, "AI is limited to its paddle speed");
    }

    #[test]
    fn test_ai_paddle_small_gap_moves_proportionally() {
        let map = GameMap::new();
        let mut world = World::new();
        let time = Time::new(0.5);
        create_paddle(
            &mut world,
            Paddle::new(Side::Right, &map, Vec2::new(30.0, 200.0), 400.0),
            Controller::Ai,
        );
        // Ghost center 380, paddle center 360: request -20, moves down 10
        create_ball(&mut world, ghost_at(370.0));

        drive_ai_paddles(&mut world, &time, &map);

        assert_eq!(right_paddle_y(&world), 270.0);
    }

    #[test]
    fn test_human_paddle_not_driven() {
        let map = GameMap::new();
        let mut world = World::new();
        let time = Time::new(0.1);
        create_paddle(
            &mut world,
            Paddle::new(Side::Right, &map, Vec2::new(30.0, 200.0), 600.0),
            Controller::Human,
        );
        create_ball(&mut world, ghost_at(0.0));

        drive_ai_paddles(&mut world, &time, &map);

        assert_eq!(right_paddle_y(&world), 260.0);
    }

    #[test]
    fn test_no_ghost_no_movement() {
        let map = GameMap::new();
        let mut world = World::new();
        let time = Time::new(0.1);
        create_paddle(
            &mut world,
            Paddle::new(Side::Right, &map, Vec2::new(30.0, 200.0), 100.0),
            Controller::Ai,
        );

        drive_ai_paddles(&mut world, &time, &map);

        assert_eq!(right_paddle_y(&world), 260.0);
    }
}
