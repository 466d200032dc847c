//! Scripted kickoff openers, one per recognized spawn layout: a boosted
//! approach followed by a diagonal-flip finish into the ball. Timings and
//! steering values are hand-tuned per spawn.

use crate::agent::sequences::{ControlStep, Sequence};
use crate::arena::KickoffSpawn;
use crate::controls::ControllerOutput;

fn step(duration: f32, controls: ControllerOutput) -> ControlStep {
    ControlStep { duration, controls }
}

fn drive(steer: f32) -> ControllerOutput {
    ControllerOutput {
        throttle: 1.0,
        boost: true,
        steer,
        ..Default::default()
    }
}

fn jump_pulse() -> ControllerOutput {
    ControllerOutput {
        throttle: 1.0,
        jump: true,
        boost: true,
        ..Default::default()
    }
}

fn jump_release() -> ControllerOutput {
    ControllerOutput {
        throttle: 1.0,
        boost: true,
        ..Default::default()
    }
}

fn dodge(yaw: f32) -> ControllerOutput {
    ControllerOutput {
        throttle: 1.0,
        jump: true,
        boost: true,
        pitch: -1.0,
        yaw,
        ..Default::default()
    }
}

fn recovery(roll: f32, yaw: f32) -> ControllerOutput {
    ControllerOutput {
        throttle: 1.0,
        boost: true,
        pitch: 1.0,
        roll,
        yaw,
        ..Default::default()
    }
}

fn slide(steer: f32) -> ControllerOutput {
    ControllerOutput {
        throttle: 1.0,
        handbrake: true,
        boost: true,
        steer,
        ..Default::default()
    }
}

pub fn back_center_kickoff() -> Sequence {
    Sequence::new(vec![
        step(0.3, drive(0.0)),
        step(0.26, drive(-0.30)),
        step(0.05, jump_pulse()),
        step(0.01, jump_release()),
        step(0.01, dodge(1.0)),
        step(0.79, recovery(1.0, 0.5)),
        step(0.25, slide(0.25)),
    ])
}

pub fn back_right_kickoff() -> Sequence {
    Sequence::new(vec![
        step(0.49, drive(-0.3)),
        step(
            0.02,
            ControllerOutput {
                throttle: 1.0,
                ..Default::default()
            },
        ),
        step(0.05, jump_pulse()),
        step(0.01, jump_release()),
        step(0.01, dodge(1.0)),
        step(0.79, recovery(1.0, 1.0)),
        step(0.20, slide(0.05)),
    ])
}

pub fn back_left_kickoff() -> Sequence {
    Sequence::new(vec![
        step(0.49, drive(0.3)),
        step(
            0.02,
            ControllerOutput {
                throttle: 1.0,
                ..Default::default()
            },
        ),
        step(0.05, jump_pulse()),
        step(0.01, jump_release()),
        step(0.01, dodge(-1.0)),
        step(0.79, recovery(-1.0, -1.0)),
        step(0.20, slide(-0.05)),
    ])
}

pub fn diagonal_right_kickoff() -> Sequence {
    Sequence::new(vec![
        step(0.42, drive(0.35)),
        step(0.05, jump_pulse()),
        step(0.01, jump_release()),
        step(0.01, dodge(-1.0)),
        step(0.79, recovery(-1.0, -0.5)),
        step(0.10, slide(0.0)),
    ])
}

pub fn diagonal_left_kickoff() -> Sequence {
    Sequence::new(vec![
        step(0.42, drive(-0.35)),
        step(0.05, jump_pulse()),
        step(0.01, jump_release()),
        step(0.01, dodge(1.0)),
        step(0.79, recovery(1.0, 0.5)),
        step(0.10, slide(0.0)),
    ])
}

/// The opener scripted for a given spawn layout.
pub fn opener(spawn: KickoffSpawn) -> Sequence {
    match spawn {
        KickoffSpawn::BackCenter => back_center_kickoff(),
        KickoffSpawn::BackRight => back_right_kickoff(),
        KickoffSpawn::BackLeft => back_left_kickoff(),
        KickoffSpawn::DiagonalRight => diagonal_right_kickoff(),
        KickoffSpawn::DiagonalLeft => diagonal_left_kickoff(),
    }
}
