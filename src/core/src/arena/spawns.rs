use crate::arena::Team;
use nalgebra::Vector3;

/// The five recognized kickoff spawn layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickoffSpawn {
    BackCenter,
    BackRight,
    BackLeft,
    DiagonalRight,
    DiagonalLeft,
}

/// Spawn coordinates from blue's perspective. Diagonal spawns are matched on
/// x alone. New layouts are added here, not in code.
const KICKOFF_SPAWNS: [(i32, Option<i32>, KickoffSpawn); 5] = [
    (0, Some(-4608), KickoffSpawn::BackCenter),
    (-256, Some(-3840), KickoffSpawn::BackRight),
    (256, Some(-3840), KickoffSpawn::BackLeft),
    (-2048, None, KickoffSpawn::DiagonalRight),
    (2048, None, KickoffSpawn::DiagonalLeft),
];

/// Looks up the spawn layout matching the car's rounded position, mirrored
/// across the halfway line for orange.
pub fn match_kickoff_spawn(car_location: Vector3<f32>, team: Team) -> Option<KickoffSpawn> {
    // blue spawns on negative y, so the mirror coefficient is -sign
    let mirror = -team.sign() as i32;
    let x = car_location.x.round() as i32;
    let y = car_location.y.round() as i32;

    KICKOFF_SPAWNS
        .iter()
        .find(|(spawn_x, spawn_y, _)| {
            x == mirror * spawn_x && spawn_y.is_none_or(|spawn_y| y == mirror * spawn_y)
        })
        .map(|(_, _, spawn)| *spawn)
}
