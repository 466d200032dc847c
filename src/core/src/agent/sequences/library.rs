//! Hand-tuned scripted maneuvers. Each is pure data: a fixed list of timed
//! control steps fed to the [`Sequence`] engine with no feedback correction,
//! so timings and control values can be tuned and tested on their own.

use crate::agent::sequences::{ControlStep, Sequence};
use crate::controls::ControllerOutput;
use nalgebra::Vector3;

fn step(duration: f32, controls: ControllerOutput) -> ControlStep {
    ControlStep { duration, controls }
}

fn jump() -> ControllerOutput {
    ControllerOutput {
        jump: true,
        ..Default::default()
    }
}

fn neutral() -> ControllerOutput {
    ControllerOutput::default()
}

fn flip(pitch: f32, yaw: f32) -> ControllerOutput {
    ControllerOutput {
        jump: true,
        pitch,
        yaw,
        ..Default::default()
    }
}

pub fn front_flip() -> Sequence {
    Sequence::new(vec![
        step(0.10, jump()),
        step(0.05, neutral()),
        step(0.2, flip(-1.0, 0.0)),
        step(0.5, neutral()),
    ])
}

pub fn back_flip() -> Sequence {
    Sequence::new(vec![
        step(0.10, jump()),
        step(0.05, neutral()),
        step(0.2, flip(1.0, 0.0)),
        step(0.5, neutral()),
    ])
}

pub fn left_flip() -> Sequence {
    Sequence::new(vec![
        step(0.10, jump()),
        step(0.01, neutral()),
        step(0.2, flip(0.0, -1.0)),
        step(0.5, neutral()),
    ])
}

pub fn right_flip() -> Sequence {
    Sequence::new(vec![
        step(0.10, jump()),
        step(0.01, neutral()),
        step(0.2, flip(0.0, 1.0)),
        step(0.5, neutral()),
    ])
}

pub fn diagonal_left_flip() -> Sequence {
    Sequence::new(vec![
        step(0.10, jump()),
        step(0.05, neutral()),
        step(0.2, flip(-1.0, -1.0)),
        step(0.5, neutral()),
    ])
}

pub fn diagonal_right_flip() -> Sequence {
    Sequence::new(vec![
        step(0.10, jump()),
        step(0.05, neutral()),
        step(0.2, flip(-1.0, 1.0)),
        step(0.5, neutral()),
    ])
}

pub fn double_jump() -> Sequence {
    Sequence::new(vec![
        step(0.10, jump()),
        step(0.05, neutral()),
        step(0.30, jump()),
        step(0.5, neutral()),
    ])
}

/// Flip aimed at the ball. Pitch and yaw are the car-local ball offset
/// normalized by its L1 length, so the dodge direction points at the ball
/// with inputs in [-1, 1].
pub fn smart_flip(car_to_ball: Vector3<f32>) -> Sequence {
    // substitute exact zeros so the ratio is always defined
    let x = if car_to_ball.x == 0.0 {
        0.01
    } else {
        car_to_ball.x
    };
    let y = if car_to_ball.y == 0.0 {
        0.01
    } else {
        car_to_ball.y
    };

    let yaw = y / (x.abs() + y.abs());
    let pitch = -x / (y.abs() + x.abs());

    Sequence::new(vec![
        step(0.10, jump()),
        step(0.05, neutral()),
        step(0.2, flip(pitch, yaw)),
        step(0.5, neutral()),
    ])
}

/// Backflip into a rolling recovery that leaves the car facing the way it
/// came. The recovery roll sign is the product of the car's side of the
/// field and its yaw sign, so the turn finishes in the same direction.
pub fn half_flip(side_sign: f32, yaw_sign: f32) -> Sequence {
    Sequence::new(vec![
        step(0.10, jump()),
        step(0.05, neutral()),
        step(0.3, flip(1.0, 0.0)),
        step(
            0.5,
            ControllerOutput {
                pitch: -1.0,
                roll: side_sign * yaw_sign,
                ..Default::default()
            },
        ),
    ])
}

pub fn speed_flip_left() -> Sequence {
    Sequence::new(vec![
        step(
            0.02,
            ControllerOutput {
                throttle: 1.0,
                ..Default::default()
            },
        ),
        step(
            0.05,
            ControllerOutput {
                throttle: 1.0,
                jump: true,
                boost: true,
                ..Default::default()
            },
        ),
        step(
            0.01,
            ControllerOutput {
                throttle: 1.0,
                boost: true,
                ..Default::default()
            },
        ),
        step(
            0.01,
            ControllerOutput {
                throttle: 1.0,
                jump: true,
                boost: true,
                pitch: -1.0,
                yaw: -1.0,
                ..Default::default()
            },
        ),
        step(
            0.79,
            ControllerOutput {
                throttle: 1.0,
                boost: true,
                pitch: 1.0,
                roll: -1.0,
                yaw: -0.5,
                ..Default::default()
            },
        ),
        step(
            0.25,
            ControllerOutput {
                throttle: 1.0,
                handbrake: true,
                boost: true,
                ..Default::default()
            },
        ),
    ])
}

pub fn speed_flip_right() -> Sequence {
    Sequence::new(vec![
        step(
            0.02,
            ControllerOutput {
                throttle: 1.0,
                ..Default::default()
            },
        ),
        step(
            0.05,
            ControllerOutput {
                throttle: 1.0,
                jump: true,
                boost: true,
                ..Default::default()
            },
        ),
        step(
            0.01,
            ControllerOutput {
                throttle: 1.0,
                boost: true,
                ..Default::default()
            },
        ),
        step(
            0.01,
            ControllerOutput {
                throttle: 1.0,
                jump: true,
                boost: true,
                pitch: -1.0,
                yaw: 1.0,
                ..Default::default()
            },
        ),
        step(
            0.79,
            ControllerOutput {
                throttle: 1.0,
                boost: true,
                pitch: 1.0,
                roll: 1.0,
                yaw: 0.5,
                ..Default::default()
            },
        ),
        step(
            0.25,
            ControllerOutput {
                throttle: 1.0,
                handbrake: true,
                boost: true,
                ..Default::default()
            },
        ),
    ])
}

/// Jump-and-boost launch for an aerial attempt. Kept in the library for
/// tuning; no trigger starts it yet.
pub fn aerial_start() -> Sequence {
    Sequence::new(vec![
        step(0.02, neutral()),
        step(0.01, jump()),
        step(0.14, flip(1.0, 0.0)),
        step(
            0.15,
            ControllerOutput {
                pitch: 0.75,
                boost: true,
                ..Default::default()
            },
        ),
        step(
            0.20,
            ControllerOutput {
                jump: true,
                boost: true,
                ..Default::default()
            },
        ),
    ])
}
