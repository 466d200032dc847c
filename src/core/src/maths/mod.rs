use crate::input::Rotator;
use nalgebra::Vector3;

/// Car-local basis vectors derived from the host's Euler rotation.
#[derive(Debug, Clone, Copy)]
pub struct Orientation {
    pub forward: Vector3<f32>,
    pub right: Vector3<f32>,
    pub up: Vector3<f32>,
}

impl Orientation {
    pub fn from_rotator(rotation: &Rotator) -> Self {
        let (sp, cp) = rotation.pitch.sin_cos();
        let (sy, cy) = rotation.yaw.sin_cos();
        let (sr, cr) = rotation.roll.sin_cos();

        Orientation {
            forward: Vector3::new(cp * cy, cp * sy, sp),
            right: Vector3::new(cy * sp * sr - cr * sy, sy * sp * sr + cr * cy, -cp * sr),
            up: Vector3::new(-cr * cy * sp - sr * sy, -cr * sy * sp + sr * cy, cp * cr),
        }
    }
}

/// Expresses `target` in the local frame anchored at `anchor`: x forward,
/// y right, z up.
pub fn relative_location(
    anchor: Vector3<f32>,
    orientation: &Orientation,
    target: Vector3<f32>,
) -> Vector3<f32> {
    let diff = target - anchor;

    Vector3::new(
        diff.dot(&orientation.forward),
        diff.dot(&orientation.right),
        diff.dot(&orientation.up),
    )
}

/// Proportional steering toward a target point, clamped to [-1, 1].
pub fn steer_toward_target(
    car_location: Vector3<f32>,
    orientation: &Orientation,
    target: Vector3<f32>,
) -> f32 {
    let relative = relative_location(car_location, orientation, target);
    let angle = relative.y.atan2(relative.x);

    (angle * 5.0).clamp(-1.0, 1.0)
}

/// Airborne yaw input toward a target point, same controller as steering.
pub fn yaw_toward_target(
    car_location: Vector3<f32>,
    orientation: &Orientation,
    target: Vector3<f32>,
) -> f32 {
    steer_toward_target(car_location, orientation, target)
}
