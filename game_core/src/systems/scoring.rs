use crate::ghost::{make_ghost_ball, real_ball};
use crate::{AiProps, Ball, Config, Events, GameMap, Score, Side, SoundEffect};
use glam::Vec2;
use hecs::{Entity, World};

/// Award a goal if the live ball sits exactly on a goal line.
///
/// Wall clamping in `Ball::integrate` puts the ball exactly on the line on the
/// frame it arrives, and paddle collisions run before this and move it off the
/// line on a save. This must run after both.
pub fn check_goals(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    props: &AiProps,
    score: &mut Score,
    events: &mut Events,
) -> Option<Side> {
    let (_entity, ball) = real_ball(world)?;

    let scorer = if ball.pos.x == 0.0 {
        Side::Right
    } else if ball.pos.x == map.max_pos(ball.size).x {
        Side::Left
    } else {
        return None;
    };

    reset_balls(world, map, config, props);
    score.increment(scorer);
    events.sounds.push(SoundEffect::Goal);
    log::debug!("{:?} scored: {} - {}", scorer, score.left, score.right);

    Some(scorer)
}

/// Replace the ball and ghost ball with fresh ones at the start speed
pub fn reset_balls(world: &mut World, map: &GameMap, config: &Config, props: &AiProps) -> Entity {
    let balls: Vec<Entity> = world.query::<&Ball>().iter().map(|(e, _)| e).collect();
    for entity in balls {
        let _ = world.despawn(entity);
    }

    let ball = Ball::serve(map, Vec2::splat(config.ball_size), props.ball_start_speed);
    let entity = world.spawn((ball,));
    make_ghost_ball(world, &ball, props.ghost_ball_speed);
    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ghost::ghost_ball;
    use crate::{create_ball, BallKind};

    fn setup_world() -> (World, Config, GameMap, Score, Events, AiProps) {
        (
            World::new(),
            Config::new(),
            GameMap::new(),
            Score::new(),
            Events::new(),
            AiProps::new(200.0, 1.15, 250.0),
        )
    }

    fn ball_at_x(x: f32) -> Ball {
        Ball::new(
            BallKind::Real,
            Vec2::new(x, 300.0),
            Vec2::splat(20.0),
            Vec2::new(-480.0, 90.0),
            290.0,
        )
    }

    #[test]
    fn test_right_player_scores_at_left_line() {
        let (mut world, config, map, mut score, mut events, props) = setup_world();
        create_ball(&mut world, ball_at_x(0.0));

        let scorer = check_goals(&mut world, &map, &config, &props, &mut score, &mut events);

        assert_eq!(scorer, Some(Side::Right));
        assert_eq!(score, Score { left: 0, right: 1 });
        assert_eq!(events.sounds, vec![SoundEffect::Goal]);
    }

    #[test]
    fn test_left_player_scores_at_right_line() {
        let (mut world, config, map, mut score, mut events, props) = setup_world();
        create_ball(&mut world, ball_at_x(1260.0));

        let scorer = check_goals(&mut world, &map, &config, &props, &mut score, &mut events);

        assert_eq!(scorer, Some(Side::Left));
        assert_eq!(score, Score { left: 1, right: 0 });
        assert_eq!(events.sounds, vec![SoundEffect::Goal]);
    }

    #[test]
    fn test_near_line_is_not_a_goal() {
        let (mut world, config, map, mut score, mut events, props) = setup_world();
        create_ball(&mut world, ball_at_x(0.5));

        let scorer = check_goals(&mut world, &map, &config, &props, &mut score, &mut events);

        assert_eq!(scorer, None);
        assert_eq!(score, Score::new());
        assert!(events.sounds.is_empty());
    }

    #[test]
    fn test_goal_replaces_ball_at_base_speed() {
        let (mut world, config, map, mut score, mut events, props) = setup_world();
        create_ball(&mut world, ball_at_x(0.0));

        check_goals(&mut world, &map, &config, &props, &mut score, &mut events);

        let (_e, ball) = real_ball(&world).unwrap();
        assert_eq!(ball.pos, Vec2::new(630.0, 350.0));
        assert_eq!(ball.vel, Vec2::new(250.0, 0.0));
        assert_eq!(ball.max_speed, 250.0, "Rally speed-ups are discarded");

        let (_e, ghost) = ghost_ball(&world).unwrap();
        assert_eq!(ghost.pos, ball.pos);
        assert_eq!(ghost.vel, ball.vel * 1.15);
    }

    #[test]
    fn test_reset_leaves_one_ball_and_one_ghost() {
        let (mut world, config, map, _score, _events, props) = setup_world();
        create_ball(&mut world, ball_at_x(100.0));
        create_ball(&mut world, Ball::ghost_of(&ball_at_x(100.0), 1.15));

        reset_balls(&mut world, &map, &config, &props);

        assert_eq!(world.query::<&Ball>().iter().count(), 2);
        assert!(real_ball(&world).is_some());
        assert!(ghost_ball(&world).is_some());
    }
}
