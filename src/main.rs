use core::{
    Agent, BallState, CarState, ControllerOutput, FieldInfo, LinearBallPredictor, LogRenderer,
    Rotator, Team, WorldSnapshot,
};
use env_logger::Env;
use log::info;
use nalgebra::Vector3;
use rand::{Rng, RngExt};
use std::time::Instant;

const TICK_RATE: f32 = 1.0 / 60.0;
const TICKS: u32 = 600;

const FIELD_HALF_WIDTH: f32 = 4096.0;
const FIELD_HALF_LENGTH: f32 = 5120.0;

fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let field = FieldInfo::standard_arena();
    let pad_count = field.boost_pads.len();

    let mut blue = Agent::new(0, Team::Blue, field.clone()).with_renderer(Box::new(LogRenderer));
    let mut orange = Agent::new(1, Team::Orange, field);

    let mut snapshot = kickoff_snapshot(pad_count);
    let mut rng = rand::rng();

    let started = Instant::now();

    for tick in 0..TICKS {
        snapshot.seconds_elapsed = tick as f32 * TICK_RATE;
        snapshot.is_kickoff_pause = tick < 60;

        let predictor = LinearBallPredictor::from_snapshot(&snapshot);

        let blue_controls = blue.tick(&snapshot, &predictor);
        let orange_controls = orange.tick(&snapshot, &predictor);

        advance_car(&mut snapshot.cars[0], &blue_controls);
        advance_car(&mut snapshot.cars[1], &orange_controls);
        advance_ball(&mut snapshot, &mut rng);

        if tick % 60 == 0 {
            info!(
                "t={:.1}s ball=({:.0}, {:.0}) blue=({:.0}, {:.0}) orange=({:.0}, {:.0})",
                snapshot.seconds_elapsed,
                snapshot.ball.location.x,
                snapshot.ball.location.y,
                snapshot.cars[0].location.x,
                snapshot.cars[0].location.y,
                snapshot.cars[1].location.x,
                snapshot.cars[1].location.y,
            );
        }
    }

    info!(
        "simulated {} ticks in {} ms",
        TICKS,
        started.elapsed().as_millis()
    );
}

fn kickoff_snapshot(pad_count: usize) -> WorldSnapshot {
    WorldSnapshot {
        cars: vec![
            CarState {
                location: Vector3::new(0.0, -4608.0, 17.0),
                velocity: Vector3::zeros(),
                rotation: Rotator {
                    pitch: 0.0,
                    yaw: std::f32::consts::FRAC_PI_2,
                    roll: 0.0,
                },
                has_wheel_contact: true,
                boost: 33.0,
                team: Team::Blue,
            },
            CarState {
                location: Vector3::new(0.0, 4608.0, 17.0),
                velocity: Vector3::zeros(),
                rotation: Rotator {
                    pitch: 0.0,
                    yaw: -std::f32::consts::FRAC_PI_2,
                    roll: 0.0,
                },
                has_wheel_contact: true,
                boost: 33.0,
                team: Team::Orange,
            },
        ],
        ball: BallState {
            location: Vector3::new(0.0, 0.0, 92.0),
            velocity: Vector3::zeros(),
        },
        seconds_elapsed: 0.0,
        is_kickoff_pause: true,
        pads_active: vec![true; pad_count],
    }
}

/// Crude planar kinematics, just enough to drive the decision loop: yaw
/// follows steer, speed follows throttle and boost, the car never leaves
/// the ground.
fn advance_car(car: &mut CarState, controls: &ControllerOutput) {
    let top_speed = if controls.boost { 2300.0 } else { 1410.0 };
    let current = car.velocity.norm();
    let desired = controls.throttle.abs() * top_speed;
    let speed = current + (desired - current).clamp(-1800.0 * TICK_RATE, 990.0 * TICK_RATE);

    car.rotation.yaw += controls.steer * 2.0 * TICK_RATE * controls.throttle.signum();

    let forward = Vector3::new(car.rotation.yaw.cos(), car.rotation.yaw.sin(), 0.0);
    car.velocity = forward * speed * controls.throttle.signum();
    car.location += car.velocity * TICK_RATE;

    car.location.x = car.location.x.clamp(-FIELD_HALF_WIDTH, FIELD_HALF_WIDTH);
    car.location.y = car
        .location
        .y
        .clamp(-FIELD_HALF_LENGTH - 880.0, FIELD_HALF_LENGTH + 880.0);
}

/// Rolls the ball with light drag and hard wall bounces. Cars that reach the
/// ball knock it onward with a jittered kick.
fn advance_ball(snapshot: &mut WorldSnapshot, rng: &mut impl Rng) {
    for car in &snapshot.cars {
        if (car.location - snapshot.ball.location).norm() < 200.0 {
            let direction = (snapshot.ball.location - car.location).normalize();
            let kick = car.velocity.norm() + rng.random_range(0.0..300.0);
            snapshot.ball.velocity = direction * kick;
        }
    }

    snapshot.ball.velocity *= 0.995;
    snapshot.ball.location += snapshot.ball.velocity * TICK_RATE;

    let ball = &mut snapshot.ball;
    if ball.location.x.abs() > FIELD_HALF_WIDTH {
        ball.location.x = ball.location.x.signum() * FIELD_HALF_WIDTH;
        ball.velocity.x = -ball.velocity.x;
    }
    if ball.location.y.abs() > FIELD_HALF_LENGTH {
        if ball.location.x.abs() < 800.0 {
            info!(
                "goal on the {} side, resetting to center",
                if ball.location.y < 0.0 { "blue" } else { "orange" }
            );
            ball.location = Vector3::new(0.0, 0.0, 92.0);
            ball.velocity = Vector3::zeros();
        } else {
            ball.location.y = ball.location.y.signum() * FIELD_HALF_LENGTH;
            ball.velocity.y = -ball.velocity.y;
        }
    }
}
