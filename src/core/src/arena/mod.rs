use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

pub mod spawns;

pub use spawns::*;

/// Distance from field center to the back wall; the goal line sits on it.
pub const BACK_WALL_Y: f32 = 5120.0;
/// Absolute x of both goal posts.
pub const GOAL_POST_X: f32 = 800.0;
/// Hard cap on car speed, boosting included.
pub const MAX_CAR_SPEED: f32 = 2300.0;
/// Lay-up points are clamped to this x range so they stay reachable.
pub const LAYUP_CLAMP_X: f32 = 5100.0;

/// Resting car height; at or below it the car counts as grounded.
pub const CAR_GROUNDED_Z: f32 = 17.1;
/// Ball center height below which the ball counts as grounded.
pub const BALL_GROUNDED_Z: f32 = 150.0;
/// Ball center height above which the ball counts as airborne.
pub const BALL_AIRBORNE_Z: f32 = 500.0;

/// Sentinel location used when a search finds nothing eligible. Far enough
/// away that it loses every distance comparison naturally.
pub fn far_sentinel() -> Vector3<f32> {
    Vector3::new(0.0, 0.0, 999_999.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    Blue,
    Orange,
}

impl Team {
    /// ±1 coefficient pointing at this team's own half. Blue defends
    /// negative y.
    pub fn sign(&self) -> f32 {
        match self {
            Team::Blue => -1.0,
            Team::Orange => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GoalGeometry {
    pub center: Vector3<f32>,
    pub left_post: Vector3<f32>,
    pub right_post: Vector3<f32>,
}

impl GoalGeometry {
    pub fn at(center: Vector3<f32>) -> Self {
        let line_y = center.y.signum() * BACK_WALL_Y;

        GoalGeometry {
            center,
            left_post: Vector3::new(-GOAL_POST_X, line_y, 0.0),
            right_post: Vector3::new(GOAL_POST_X, line_y, 0.0),
        }
    }
}

/// Both goals as seen from one team, computed once at match start and
/// immutable afterwards.
#[derive(Debug, Clone, Copy)]
pub struct ArenaGeometry {
    pub own_goal: GoalGeometry,
    pub opponent_goal: GoalGeometry,
}

impl ArenaGeometry {
    pub fn for_team(team: Team, field: &FieldInfo) -> Self {
        let (own_center, opponent_center) = match team {
            Team::Blue => (field.blue_goal_center, field.orange_goal_center),
            Team::Orange => (field.orange_goal_center, field.blue_goal_center),
        };

        ArenaGeometry {
            own_goal: GoalGeometry::at(own_center),
            opponent_goal: GoalGeometry::at(opponent_center),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoostPad {
    pub location: Vector3<f32>,
    pub is_full_boost: bool,
}

/// Static field description handed over once at match start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldInfo {
    pub blue_goal_center: Vector3<f32>,
    pub orange_goal_center: Vector3<f32>,
    pub boost_pads: Vec<BoostPad>,
}

impl FieldInfo {
    /// The standard arena layout: six full-charge pads plus the small pad
    /// grid, goals centered on the back walls.
    pub fn standard_arena() -> Self {
        let big = [
            (3584.0, 0.0),
            (-3584.0, 0.0),
            (3072.0, 4096.0),
            (-3072.0, 4096.0),
            (3072.0, -4096.0),
            (-3072.0, -4096.0),
        ];

        let small = [
            (0.0, -4240.0),
            (-1792.0, -4184.0),
            (1792.0, -4184.0),
            (-940.0, -3308.0),
            (940.0, -3308.0),
            (0.0, -2816.0),
            (-3584.0, -2484.0),
            (3584.0, -2484.0),
            (-1788.0, -2300.0),
            (1788.0, -2300.0),
            (-2048.0, -1036.0),
            (0.0, -1024.0),
            (2048.0, -1036.0),
            (-1024.0, 0.0),
            (1024.0, 0.0),
            (-2048.0, 1036.0),
            (0.0, 1024.0),
            (2048.0, 1036.0),
            (-1788.0, 2300.0),
            (1788.0, 2300.0),
            (-3584.0, 2484.0),
            (3584.0, 2484.0),
            (-940.0, 3308.0),
            (940.0, 3308.0),
            (0.0, 2816.0),
            (-1792.0, 4184.0),
            (1792.0, 4184.0),
            (0.0, 4240.0),
        ];

        let mut boost_pads = Vec::with_capacity(big.len() + small.len());

        for (x, y) in big {
            boost_pads.push(BoostPad {
                location: Vector3::new(x, y, 73.0),
                is_full_boost: true,
            });
        }

        for (x, y) in small {
            boost_pads.push(BoostPad {
                location: Vector3::new(x, y, 70.0),
                is_full_boost: false,
            });
        }

        FieldInfo {
            blue_goal_center: Vector3::new(0.0, -BACK_WALL_Y, 0.0),
            orange_goal_center: Vector3::new(0.0, BACK_WALL_Y, 0.0),
            boost_pads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_signs_point_at_own_half() {
        assert_eq!(Team::Blue.sign(), -1.0);
        assert_eq!(Team::Orange.sign(), 1.0);
    }

    #[test]
    fn goal_posts_sit_on_the_goal_line() {
        let field = FieldInfo::standard_arena();
        let geometry = ArenaGeometry::for_team(Team::Blue, &field);

        assert_eq!(geometry.own_goal.center.y, -BACK_WALL_Y);
        assert_eq!(geometry.own_goal.left_post.x, -GOAL_POST_X);
        assert_eq!(geometry.own_goal.right_post.x, GOAL_POST_X);
        assert_eq!(geometry.own_goal.left_post.y, -BACK_WALL_Y);
        assert_eq!(geometry.opponent_goal.left_post.y, BACK_WALL_Y);
    }

    #[test]
    fn standard_arena_has_six_full_charge_pads() {
        let field = FieldInfo::standard_arena();
        let full = field.boost_pads.iter().filter(|p| p.is_full_boost).count();

        assert_eq!(full, 6);
        assert_eq!(field.boost_pads.len(), 34);
    }
}
