//! Geometric targeting: the blended ball aim point, shot-window geometry and
//! forward-cone boost pad searches.

use crate::arena::{BoostPad, GoalGeometry, LAYUP_CLAMP_X, far_sentinel};
use crate::maths::{Orientation, relative_location};
use crate::prediction::BallPredictor;
use nalgebra::Vector3;

/// Trust in the forecast saturates at this distance to the ball.
const BLEND_SATURATION_DISTANCE: f32 = 5000.0;
/// How far ahead the forecast is sampled while the car is moving.
const LOOKAHEAD_SECONDS: f32 = 2.0;
/// Divisor turning ball speed into the lay-up stretch factor.
const LAYUP_STRETCH_DIVISOR: f32 = 15000.0;

/// Half-angle of the eligibility cone for full-charge pads, degrees.
const BIG_PAD_CONE: f32 = 60.0;
/// Half-angle of the eligibility cone for small pads, degrees.
const SMALL_PAD_CONE: f32 = 30.0;

/// Aim point for this tick: the live ball location blended toward the
/// forecast location. Trust in the forecast grows linearly with the current
/// distance to the ball and saturates at 5000 units; with no forecast slice
/// available the live location is used as-is.
pub fn blended_ball_path(
    car_location: Vector3<f32>,
    car_velocity: Vector3<f32>,
    ball_location: Vector3<f32>,
    seconds_elapsed: f32,
    predictor: &dyn BallPredictor,
) -> Vector3<f32> {
    let to_ball = (car_location - ball_location).norm();

    let query_time = if car_velocity.norm() == 0.0 {
        seconds_elapsed + to_ball
    } else {
        seconds_elapsed + LOOKAHEAD_SECONDS
    };

    let distance = to_ball.min(BLEND_SATURATION_DISTANCE);
    let trust = distance / BLEND_SATURATION_DISTANCE;

    match predictor.slice_at(query_time) {
        Some(slice) => slice.location * trust + ball_location * (1.0 - trust),
        None => ball_location,
    }
}

/// True when the forecast crosses a goal line and the aim point lies on this
/// team's defensive half.
pub fn potential_goal_against(
    predictor: &dyn BallPredictor,
    ball_path: Vector3<f32>,
    team_sign: f32,
) -> bool {
    predictor.next_goal_slice().is_some() && team_sign * ball_path.y > 0.0
}

/// Shot geometry toward one goal, recomputed per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShotWindow {
    /// Angle from the car to the goal's left post, radians.
    pub car_angle_to_left: f32,
    /// Angle from the car to the goal's right post, radians.
    pub car_angle_to_right: f32,
    /// Velocity-compensated point behind the ball to line a shot up from.
    pub layup: Vector3<f32>,
    /// The ball sits between car and goal and the aim line passes between
    /// the posts.
    pub feasible: bool,
}

/// Computes the shot window for a goal: the goal-to-ball hypotenuse is
/// stretched by a ball-speed factor and projected back through the goal
/// center, which puts the lay-up point beyond the ball on the shot line.
pub fn shot_window(
    goal: &GoalGeometry,
    ball_path: Vector3<f32>,
    ball_velocity: Vector3<f32>,
    car_location: Vector3<f32>,
) -> ShotWindow {
    let length = goal.center.y - ball_path.y;
    let width = goal.center.x - ball_path.x;
    let path_angle = length.atan2(width);
    let stretched = length.hypot(width) * (1.0 + ball_velocity.norm() / LAYUP_STRETCH_DIVISOR);

    let layup = Vector3::new(
        (goal.center.x - stretched * path_angle.cos()).clamp(-LAYUP_CLAMP_X, LAYUP_CLAMP_X),
        goal.center.y - stretched * path_angle.sin(),
        0.0,
    );

    let car_length = goal.center.y - car_location.y;
    let car_angle_to_left = car_length.atan2(goal.left_post.x - car_location.x);
    let car_angle_to_right = car_length.atan2(goal.right_post.x - car_location.x);
    let car_to_ball_angle = (ball_path.y - car_location.y).atan2(ball_path.x - car_location.x);

    let ball_is_closer = (ball_path - goal.center).norm() < (car_location - goal.center).norm();
    let aims_between_posts = (car_angle_to_left < car_to_ball_angle
        && car_to_ball_angle < car_angle_to_right)
        || (car_angle_to_right < car_to_ball_angle && car_to_ball_angle < car_angle_to_left);

    ShotWindow {
        car_angle_to_left,
        car_angle_to_right,
        layup,
        feasible: ball_is_closer && aims_between_posts,
    }
}

fn nearest_pad(
    pads: &[BoostPad],
    active: &[bool],
    car_location: Vector3<f32>,
    car_orientation: &Orientation,
    full_boost: bool,
    cone_half_angle: f32,
) -> Vector3<f32> {
    let mut nearest = far_sentinel();

    for (pad, active) in pads.iter().zip(active) {
        if pad.is_full_boost != full_boost || !active {
            continue;
        }

        let relative = relative_location(car_location, car_orientation, pad.location);
        // substitute exact zeros so the bearing is always defined
        let ahead = if relative.x == 0.0 { 0.01 } else { relative.x };
        let bearing = (relative.y / ahead).atan().to_degrees();

        if ahead <= 0.0 || bearing.abs() >= cone_half_angle {
            continue;
        }

        if (car_location - pad.location).norm() < (car_location - nearest).norm() {
            nearest = pad.location;
        }
    }

    nearest
}

/// Nearest active full-charge pad inside the 60° forward cone, or the far
/// sentinel when none qualifies.
pub fn nearest_big_boost(
    pads: &[BoostPad],
    active: &[bool],
    car_location: Vector3<f32>,
    car_orientation: &Orientation,
) -> Vector3<f32> {
    nearest_pad(pads, active, car_location, car_orientation, true, BIG_PAD_CONE)
}

/// Nearest active small pad inside the 30° forward cone, or the far sentinel.
pub fn nearest_small_boost(
    pads: &[BoostPad],
    active: &[bool],
    car_location: Vector3<f32>,
    car_orientation: &Orientation,
) -> Vector3<f32> {
    nearest_pad(
        pads,
        active,
        car_location,
        car_orientation,
        false,
        SMALL_PAD_CONE,
    )
}
