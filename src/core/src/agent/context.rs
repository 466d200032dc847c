use crate::agent::targeting::{
    ShotWindow, blended_ball_path, nearest_big_boost, nearest_small_boost, potential_goal_against,
    shot_window,
};
use crate::arena::{
    ArenaGeometry, BALL_AIRBORNE_Z, BALL_GROUNDED_Z, CAR_GROUNDED_Z, FieldInfo, GoalGeometry,
    Team, far_sentinel,
};
use crate::input::{Rotator, WorldSnapshot};
use crate::maths::{Orientation, relative_location};
use crate::prediction::BallPredictor;
use nalgebra::Vector3;

/// Everything the selector, resolver and composer read for one tick, derived
/// once from the snapshot. Owns plain values only; nothing survives the tick.
#[derive(Debug, Clone)]
pub struct TickContext {
    pub team: Team,
    pub team_sign: f32,
    pub seconds_elapsed: f32,
    pub kickoff_pause: bool,

    pub car_location: Vector3<f32>,
    pub car_velocity: Vector3<f32>,
    pub speed: f32,
    pub car_rotation: Rotator,
    pub car_orientation: Orientation,
    pub car_to_ball: Vector3<f32>,
    pub car_on_wheels: bool,
    pub car_grounded: bool,
    pub boost: f32,

    pub ball_location: Vector3<f32>,
    pub ball_velocity: Vector3<f32>,
    pub ball_grounded: bool,
    pub ball_airborne: bool,

    pub opponent_location: Vector3<f32>,
    pub defense_location: Vector3<f32>,
    pub nearest_big_boost: Vector3<f32>,
    pub nearest_small_boost: Vector3<f32>,

    pub ball_path: Vector3<f32>,
    pub ball_path_grounded: Vector3<f32>,
    pub potential_goal: bool,
    pub shot: ShotWindow,
    /// Shot window toward the own goal. Diagnostic only: its feasibility
    /// flag is surfaced in telemetry but gates nothing.
    pub own_goal_shot: ShotWindow,

    pub own_goal: GoalGeometry,
    pub opponent_goal: GoalGeometry,
}

impl TickContext {
    pub fn derive(
        index: usize,
        team: Team,
        geometry: &ArenaGeometry,
        field: &FieldInfo,
        snapshot: &WorldSnapshot,
        predictor: &dyn BallPredictor,
    ) -> Self {
        let car = &snapshot.cars[index];
        let ball = &snapshot.ball;

        let car_orientation = Orientation::from_rotator(&car.rotation);
        let car_to_ball = relative_location(car.location, &car_orientation, ball.location);

        // nearest opponent to the ball by straight-line distance
        let mut opponent_location = far_sentinel();
        for (i, other) in snapshot.cars.iter().enumerate() {
            if i == index || other.team == team {
                continue;
            }
            if (other.location - ball.location).norm()
                < (opponent_location - ball.location).norm()
            {
                opponent_location = other.location;
            }
        }

        let defense_x = if car.location.x > 0.0 { 700.0 } else { -700.0 };
        let defense_location = Vector3::new(defense_x, team.sign() * 5000.0, 0.0);

        let nearest_big_boost = nearest_big_boost(
            &field.boost_pads,
            &snapshot.pads_active,
            car.location,
            &car_orientation,
        );
        let nearest_small_boost = nearest_small_boost(
            &field.boost_pads,
            &snapshot.pads_active,
            car.location,
            &car_orientation,
        );

        let ball_path = blended_ball_path(
            car.location,
            car.velocity,
            ball.location,
            snapshot.seconds_elapsed,
            predictor,
        );
        let ball_path_grounded = Vector3::new(ball_path.x, ball_path.y, 0.0);
        let potential_goal = potential_goal_against(predictor, ball_path, team.sign());

        let shot = shot_window(
            &geometry.opponent_goal,
            ball_path,
            ball.velocity,
            car.location,
        );
        let own_goal_shot = shot_window(&geometry.own_goal, ball_path, ball.velocity, car.location);

        TickContext {
            team,
            team_sign: team.sign(),
            seconds_elapsed: snapshot.seconds_elapsed,
            kickoff_pause: snapshot.is_kickoff_pause,
            car_location: car.location,
            car_velocity: car.velocity,
            speed: car.velocity.norm(),
            car_rotation: car.rotation,
            car_orientation,
            car_to_ball,
            car_on_wheels: car.has_wheel_contact,
            car_grounded: car.location.z <= CAR_GROUNDED_Z,
            boost: car.boost,
            ball_location: ball.location,
            ball_velocity: ball.velocity,
            ball_grounded: ball.location.z <= BALL_GROUNDED_Z,
            ball_airborne: ball.location.z > BALL_AIRBORNE_Z,
            opponent_location,
            defense_location,
            nearest_big_boost,
            nearest_small_boost,
            ball_path,
            ball_path_grounded,
            potential_goal,
            shot,
            own_goal_shot,
            own_goal: geometry.own_goal,
            opponent_goal: geometry.opponent_goal,
        }
    }
}

/// Neutral blue-team context for unit tests: grounded car at midfield pace,
/// ball resting at center, every search returning its sentinel.
#[cfg(test)]
pub(crate) fn test_context() -> TickContext {
    let rotation = Rotator {
        pitch: 0.0,
        yaw: std::f32::consts::FRAC_PI_2,
        roll: 0.0,
    };
    let car_orientation = Orientation::from_rotator(&rotation);
    let car_location = Vector3::new(0.0, -4000.0, 17.0);
    let ball_location = Vector3::new(0.0, 0.0, 92.0);
    let own_goal = GoalGeometry::at(Vector3::new(0.0, -5120.0, 0.0));
    let opponent_goal = GoalGeometry::at(Vector3::new(0.0, 5120.0, 0.0));

    TickContext {
        team: Team::Blue,
        team_sign: -1.0,
        seconds_elapsed: 30.0,
        kickoff_pause: false,
        car_location,
        car_velocity: Vector3::new(0.0, 500.0, 0.0),
        speed: 500.0,
        car_rotation: rotation,
        car_orientation,
        car_to_ball: relative_location(car_location, &car_orientation, ball_location),
        car_on_wheels: true,
        car_grounded: true,
        boost: 100.0,
        ball_location,
        ball_velocity: Vector3::zeros(),
        ball_grounded: true,
        ball_airborne: false,
        opponent_location: far_sentinel(),
        defense_location: Vector3::new(-700.0, -5000.0, 0.0),
        nearest_big_boost: far_sentinel(),
        nearest_small_boost: far_sentinel(),
        ball_path: ball_location,
        ball_path_grounded: Vector3::new(0.0, 0.0, 0.0),
        potential_goal: false,
        shot: shot_window(&opponent_goal, ball_location, Vector3::zeros(), car_location),
        own_goal_shot: shot_window(&own_goal, ball_location, Vector3::zeros(), car_location),
        own_goal,
        opponent_goal,
    }
}
