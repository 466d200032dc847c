use crate::arena::Team;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Euler rotation as reported by the host, radians.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Rotator {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarState {
    pub location: Vector3<f32>,
    pub velocity: Vector3<f32>,
    pub rotation: Rotator,
    pub has_wheel_contact: bool,
    pub boost: f32,
    pub team: Team,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallState {
    pub location: Vector3<f32>,
    pub velocity: Vector3<f32>,
}

/// Read-only view of the world for one tick. The agent holds no copy of it
/// across ticks; every derived quantity is recomputed from a fresh snapshot.
///
/// `pads_active` is indexed in lockstep with the static boost pad table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub cars: Vec<CarState>,
    pub ball: BallState,
    pub seconds_elapsed: f32,
    pub is_kickoff_pause: bool,
    pub pads_active: Vec<bool>,
}
