use serde::{Deserialize, Serialize};

/// Full control vector handed back to the host every tick.
///
/// Axes are in [-1, 1]. A default value is all-neutral: the output composer
/// raises throttle to 1.0 itself before applying overrides, and scripted
/// sequence steps spell out every non-neutral input they need.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControllerOutput {
    pub steer: f32,
    pub throttle: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
    pub jump: bool,
    pub boost: bool,
    pub handbrake: bool,
}
