//! Turns the selected behaviour and its target point into a controller frame,
//! or hands back a scripted maneuver to take over for the next second or so.

use crate::agent::behaviour::BehaviourKind;
use crate::agent::context::TickContext;
use crate::agent::sequences::{Sequence, front_flip, half_flip, opener, smart_flip};
use crate::arena::{MAX_CAR_SPEED, match_kickoff_spawn};
use crate::controls::ControllerOutput;
use crate::maths::{relative_location, steer_toward_target, yaw_toward_target};
use nalgebra::Vector3;

/// Result of one composition pass. When `sequence` is set the controls are
/// the point-in-time frame and the sequence takes over from the next tick.
#[derive(Debug, Clone)]
pub struct TickOutput {
    pub controls: ControllerOutput,
    pub sequence: Option<Sequence>,
}

impl TickOutput {
    fn frame(controls: ControllerOutput) -> Self {
        TickOutput {
            controls,
            sequence: None,
        }
    }

    fn scripted(controls: ControllerOutput, sequence: Sequence) -> Self {
        TickOutput {
            controls,
            sequence: Some(sequence),
        }
    }
}

/// Builds this tick's controls: proportional steering toward the target with
/// full throttle, then a fixed list of situational overrides applied in
/// order. Later overrides win. A few situations abandon the frame entirely
/// and start a scripted maneuver instead.
pub fn compose(ctx: &TickContext, behaviour: BehaviourKind, target: Vector3<f32>) -> TickOutput {
    let mut controls = ControllerOutput {
        steer: steer_toward_target(ctx.car_location, &ctx.car_orientation, target),
        throttle: 1.0,
        ..Default::default()
    };

    // ease off on the approach to a lay-up point so the shot lines up
    let laying_up = behaviour == BehaviourKind::Ballchase && !ctx.shot.feasible;
    if (ctx.car_location - ctx.ball_path).norm() < 1000.0 && laying_up {
        controls.boost = false;
        controls.throttle = 0.5;
    }

    let steering_hard = controls.steer.abs() >= 0.3;

    if behaviour == BehaviourKind::Kickoff {
        if let Some(spawn) = match_kickoff_spawn(ctx.car_location, ctx.team) {
            return TickOutput::scripted(controls, opener(spawn));
        }

        // unrecognized spawn: powerslide-boost straight at the ball and
        // dodge into it at close range
        controls.handbrake = true;
        controls.boost = true;
        if (ctx.car_location - ctx.ball_location).norm() <= 500.0 {
            return TickOutput::scripted(controls, smart_flip(ctx.car_to_ball));
        }
    }

    // hold position instead of overshooting the goal line
    if behaviour == BehaviourKind::Defense && (ctx.car_location - target).norm() < 100.0 {
        controls.boost = false;
        controls.throttle = if ctx.speed > 300.0 { -0.3 } else { 0.3 };
    }

    if behaviour == BehaviourKind::Reposition && ctx.team_sign * ctx.car_location.y > 5000.0 {
        controls.boost = false;
        controls.throttle = if ctx.speed > 300.0 { -0.3 } else { 0.3 };
    }

    // dodge into a grounded ball at point-blank range
    if (ctx.car_location - ctx.ball_location).norm() < 300.0 && ctx.ball_grounded && ctx.car_grounded
    {
        return TickOutput::scripted(controls, smart_flip(ctx.car_to_ball));
    }

    // front flip for speed through the mid-range band
    if (1400.0 < ctx.speed && ctx.speed < 1450.0)
        && ctx.car_grounded
        && !steering_hard
        && (ctx.car_location - target).norm() > 2750.0
    {
        return TickOutput::scripted(controls, front_flip());
    }

    // half flip when the target is well behind a slow car
    let car_to_target = relative_location(ctx.car_location, &ctx.car_orientation, target);
    let car_to_target_angle = car_to_target.y.atan2(car_to_target.x).to_degrees();
    if ctx.speed < 1000.0
        && ctx.car_grounded
        && car_to_target.x < -500.0
        && (ctx.car_location - target).norm() > 1500.0
        && car_to_target_angle.abs() < 60.0
    {
        let side_sign = if ctx.car_location.x > 0.0 { 1.0 } else { -1.0 };
        let yaw_sign = if ctx.car_rotation.yaw > 0.0 { 1.0 } else { -1.0 };
        return TickOutput::scripted(controls, half_flip(side_sign, yaw_sign));
    }

    if ctx.speed != MAX_CAR_SPEED && ctx.car_on_wheels && !steering_hard {
        controls.boost = true;
    }

    // powerslide through saturated-steer turns at speed
    if controls.steer.abs() >= 1.0
        && ctx.car_grounded
        && ctx.speed >= 1000.0
        && (ctx.car_location - target).norm() < 1500.0
    {
        controls.throttle = 0.5;
        controls.handbrake = true;
    }

    // level out for a clean landing
    if !ctx.car_on_wheels {
        if ctx.car_rotation.roll < -0.2 {
            controls.roll = 1.0;
        } else if ctx.car_rotation.roll > 0.2 {
            controls.roll = -1.0;
        }
        if ctx.car_rotation.pitch < -0.2 {
            controls.pitch = 0.5;
        } else if ctx.car_rotation.pitch > 0.2 {
            controls.pitch = -0.5;
        }
        controls.yaw = yaw_toward_target(ctx.car_location, &ctx.car_orientation, target);
    }

    // wait under a high ball rather than driving past it
    if !ctx.ball_grounded && (ctx.car_location - ctx.ball_location).norm() < 1000.0 {
        controls.throttle = 0.5;
    }

    TickOutput::frame(controls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::behaviour::{resolve_target, select};
    use crate::agent::context::test_context;

    fn compose_for(ctx: &TickContext) -> TickOutput {
        let behaviour = select(ctx);
        let target = resolve_target(ctx, behaviour);
        compose(ctx, behaviour, target)
    }

    #[test]
    fn plain_chase_boosts_down_the_middle() {
        let ctx = test_context();

        let output = compose_for(&ctx);

        assert!(output.sequence.is_none());
        assert_eq!(output.controls.throttle, 1.0);
        assert!(output.controls.boost);
        assert!(!output.controls.handbrake);
        assert!(output.controls.steer.abs() < 0.3);
    }

    #[test]
    fn recognized_kickoff_spawn_starts_its_opener() {
        let mut ctx = test_context();
        ctx.kickoff_pause = true;
        ctx.car_location = Vector3::new(0.0, -4608.0, 17.0);

        let behaviour = select(&ctx);
        assert_eq!(behaviour, BehaviourKind::Kickoff);

        let output = compose(&ctx, behaviour, resolve_target(&ctx, behaviour));

        assert!(output.sequence.is_some());
    }

    #[test]
    fn unrecognized_kickoff_spawn_powerslides_at_the_ball() {
        let mut ctx = test_context();
        ctx.kickoff_pause = true;
        ctx.car_location = Vector3::new(900.0, -3000.0, 17.0);

        let output = compose_for(&ctx);

        assert!(output.sequence.is_none());
        assert!(output.controls.handbrake);
        assert!(output.controls.boost);
    }

    #[test]
    fn unrecognized_kickoff_dodges_at_close_range() {
        let mut ctx = test_context();
        ctx.kickoff_pause = true;
        ctx.car_location = Vector3::new(300.0, -300.0, 17.0);

        let output = compose_for(&ctx);

        assert!(output.sequence.is_some());
    }

    #[test]
    fn dodges_into_a_grounded_ball_at_point_blank_range() {
        let mut ctx = test_context();
        ctx.car_location = Vector3::new(0.0, -250.0, 17.0);

        let output = compose_for(&ctx);

        assert!(output.sequence.is_some());
    }

    #[test]
    fn no_dodge_when_the_ball_is_off_the_ground() {
        let mut ctx = test_context();
        ctx.car_location = Vector3::new(0.0, -250.0, 17.0);
        ctx.ball_location = Vector3::new(0.0, 0.0, 600.0);
        ctx.ball_grounded = false;
        ctx.ball_airborne = true;

        let output = compose_for(&ctx);

        assert!(output.sequence.is_none());
        // creeping under a high ball
        assert_eq!(output.controls.throttle, 0.5);
    }

    #[test]
    fn front_flips_in_the_speed_band_on_a_long_straight() {
        let mut ctx = test_context();
        ctx.speed = 1420.0;
        ctx.car_velocity = Vector3::new(0.0, 1420.0, 0.0);

        let output = compose_for(&ctx);

        let sequence = output.sequence.unwrap();
        assert!(!sequence.is_done());
    }

    #[test]
    fn no_speed_flip_outside_the_band() {
        let mut ctx = test_context();
        ctx.speed = 1600.0;
        ctx.car_velocity = Vector3::new(0.0, 1600.0, 0.0);

        let output = compose_for(&ctx);

        assert!(output.sequence.is_none());
    }

    #[test]
    fn boost_cuts_out_at_terminal_speed() {
        let mut ctx = test_context();
        ctx.speed = MAX_CAR_SPEED;
        ctx.car_velocity = Vector3::new(0.0, MAX_CAR_SPEED, 0.0);

        let output = compose_for(&ctx);

        assert!(!output.controls.boost);
    }

    #[test]
    fn powerslides_through_a_tight_turn_at_speed() {
        let mut ctx = test_context();
        // target behind the car at close range forces saturated steer
        ctx.car_location = Vector3::new(0.0, 500.0, 17.0);
        ctx.speed = 1200.0;
        ctx.car_velocity = Vector3::new(0.0, 1200.0, 0.0);

        let output = compose(&ctx, BehaviourKind::Ballchase, Vector3::new(800.0, 0.0, 0.0));

        assert_eq!(output.controls.steer.abs(), 1.0);
        assert!(output.controls.handbrake);
        assert_eq!(output.controls.throttle, 0.5);
    }

    #[test]
    fn levels_out_while_airborne() {
        let mut ctx = test_context();
        ctx.car_on_wheels = false;
        ctx.car_grounded = false;
        ctx.car_location.z = 300.0;
        ctx.car_rotation.roll = 0.8;
        ctx.car_rotation.pitch = -0.5;

        let output = compose_for(&ctx);

        assert_eq!(output.controls.roll, -1.0);
        assert_eq!(output.controls.pitch, 0.5);
    }

    #[test]
    fn defense_holds_station_at_the_goal_line() {
        let mut ctx = test_context();
        ctx.ball_location = Vector3::new(0.0, -4200.0, 92.0);
        ctx.ball_path = ctx.ball_location;
        ctx.car_location = Vector3::new(0.0, -4800.0, 17.0);
        ctx.opponent_location = Vector3::new(200.0, -4300.0, 17.0);
        assert_eq!(select(&ctx), BehaviourKind::Defense);

        // parked on the target, still rolling
        ctx.car_location = Vector3::new(0.0, -5090.0, 17.0);
        ctx.speed = 400.0;
        ctx.car_velocity = Vector3::new(0.0, -400.0, 0.0);

        let target = Vector3::new(ctx.ball_path.x, -5100.0, 0.0);
        let output = compose(&ctx, BehaviourKind::Defense, target);

        assert!(!output.controls.boost);
        assert_eq!(output.controls.throttle, -0.3);
    }

    #[test]
    fn reposition_brakes_past_the_defensive_line() {
        let mut ctx = test_context();
        ctx.car_location = Vector3::new(0.0, -5050.0, 17.0);
        ctx.speed = 200.0;
        ctx.car_velocity = Vector3::new(0.0, -200.0, 0.0);

        let output = compose(&ctx, BehaviourKind::Reposition, ctx.defense_location);

        assert!(!output.controls.boost);
        assert_eq!(output.controls.throttle, 0.3);
    }

    #[test]
    fn layup_approach_eases_off() {
        let mut ctx = test_context();
        // infeasible shot with the car closing on the aim point
        ctx.shot.feasible = false;
        ctx.car_location = Vector3::new(0.0, -800.0, 17.0);
        ctx.shot.layup = Vector3::new(0.0, -900.0, 0.0);

        let output = compose(&ctx, BehaviourKind::Ballchase, ctx.shot.layup);

        assert_eq!(output.controls.throttle, 0.5);
    }
}
