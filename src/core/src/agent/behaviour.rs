use crate::agent::context::TickContext;
use crate::arena::{BACK_WALL_Y, GOAL_POST_X};
use nalgebra::Vector3;
use std::fmt::{Display, Formatter};

/// Discrete behaviour picked each tick. Pure function of the tick's derived
/// quantities; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviourKind {
    Ballchase,
    GetBigBoost,
    GetSmallBoost,
    Defense,
    Reposition,
    LeaveNet,
    Save,
    Kickoff,
}

impl Display for BehaviourKind {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            BehaviourKind::Ballchase => write!(f, "Ballchase"),
            BehaviourKind::GetBigBoost => write!(f, "Get big boost"),
            BehaviourKind::GetSmallBoost => write!(f, "Get small boost"),
            BehaviourKind::Defense => write!(f, "Defense"),
            BehaviourKind::Reposition => write!(f, "Reposition"),
            BehaviourKind::LeaveNet => write!(f, "Leave net"),
            BehaviourKind::Save => write!(f, "Save"),
            BehaviourKind::Kickoff => write!(f, "Kickoff"),
        }
    }
}

type BehaviourPredicate = fn(&TickContext, BehaviourKind) -> bool;

/// The decision cascade, evaluated top to bottom every tick. Each true
/// predicate unconditionally overwrites the running choice, so the last true
/// one wins. Order is load-bearing: swapping rows changes behaviour.
const CASCADE: [(BehaviourPredicate, BehaviourKind); 8] = [
    (wants_big_boost, BehaviourKind::GetBigBoost),
    (wants_small_boost, BehaviourKind::GetSmallBoost),
    (outnumbered_near_own_goal, BehaviourKind::Defense),
    (ball_behind_defensive_line, BehaviourKind::Reposition),
    (car_behind_goal_line, BehaviourKind::LeaveNet),
    (goal_threatened, BehaviourKind::Save),
    (kickoff_pending, BehaviourKind::Kickoff),
    (chasing_into_offensive_corner, BehaviourKind::Reposition),
];

pub fn select(ctx: &TickContext) -> BehaviourKind {
    let mut behaviour = BehaviourKind::Ballchase;

    for (predicate, result) in CASCADE {
        if predicate(ctx, behaviour) {
            behaviour = result;
        }
    }

    behaviour
}

fn wants_big_boost(ctx: &TickContext, _current: BehaviourKind) -> bool {
    let own_goal = ctx.own_goal.center;

    (ctx.car_location - ctx.nearest_big_boost).norm()
        < (ctx.car_location - ctx.ball_location).norm()
        && ctx.boost < 50.0
        && (ctx.car_location - own_goal).norm() < (ctx.ball_location - own_goal).norm()
        && (ctx.ball_location - own_goal).norm() > (ctx.nearest_big_boost - own_goal).norm()
}

fn wants_small_boost(ctx: &TickContext, _current: BehaviourKind) -> bool {
    (ctx.car_location - ctx.nearest_small_boost).norm() < 500.0 && ctx.boost < 75.0
}

fn outnumbered_near_own_goal(ctx: &TickContext, _current: BehaviourKind) -> bool {
    (ctx.opponent_location - ctx.ball_path).norm() < (ctx.car_location - ctx.ball_path).norm()
        && (ctx.ball_path - ctx.own_goal.center).norm() < 2000.0
}

fn ball_behind_defensive_line(ctx: &TickContext, _current: BehaviourKind) -> bool {
    (ctx.defense_location.y - ctx.ball_path.y).abs()
        < (ctx.defense_location.y - ctx.car_location.y).abs()
}

fn car_behind_goal_line(ctx: &TickContext, _current: BehaviourKind) -> bool {
    ctx.car_location.y.abs() > BACK_WALL_Y
}

fn goal_threatened(ctx: &TickContext, _current: BehaviourKind) -> bool {
    ctx.potential_goal
}

fn kickoff_pending(ctx: &TickContext, _current: BehaviourKind) -> bool {
    ctx.kickoff_pause
}

/// Keeps a plain ballchase from following the ball deep into the offensive
/// corners.
fn chasing_into_offensive_corner(ctx: &TickContext, current: BehaviourKind) -> bool {
    current == BehaviourKind::Ballchase
        && ctx.ball_location.x.abs() > 900.0
        && ctx.ball_path.y.abs() > 4900.0
        && (ctx.ball_path - ctx.opponent_goal.center).norm()
            < (ctx.ball_path - ctx.own_goal.center).norm()
}

/// Maps the selected behaviour to this tick's 3D target point.
pub fn resolve_target(ctx: &TickContext, behaviour: BehaviourKind) -> Vector3<f32> {
    match behaviour {
        BehaviourKind::Kickoff | BehaviourKind::Save => ctx.ball_path,
        BehaviourKind::LeaveNet => leave_net_target(ctx),
        BehaviourKind::Reposition => ctx.defense_location,
        BehaviourKind::GetBigBoost => ctx.nearest_big_boost,
        BehaviourKind::GetSmallBoost => ctx.nearest_small_boost,
        BehaviourKind::Defense => {
            Vector3::new(ctx.ball_path.x, ctx.team_sign * (BACK_WALL_Y - 20.0), 0.0)
        }
        BehaviourKind::Ballchase => {
            if ctx.shot.feasible {
                ctx.ball_path_grounded
            } else {
                ctx.shot.layup
            }
        }
    }
}

/// A point on the own goal line just inside the field, aligned with the ball
/// when it is near the goal mouth and with the car otherwise.
fn leave_net_target(ctx: &TickContext) -> Vector3<f32> {
    let x = if ctx.ball_path.x.abs() < GOAL_POST_X {
        ctx.ball_path.x
    } else {
        ctx.car_location.x
    };

    Vector3::new(x, ctx.team_sign * (BACK_WALL_Y - 1.0), 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::context::test_context;

    #[test]
    fn neutral_context_ballchases() {
        let ctx = test_context();

        assert_eq!(select(&ctx), BehaviourKind::Ballchase);
    }

    #[test]
    fn selection_is_deterministic() {
        let mut ctx = test_context();
        ctx.kickoff_pause = true;
        ctx.potential_goal = true;

        let first = select(&ctx);

        for _ in 0..10 {
            assert_eq!(select(&ctx), first);
        }
    }

    #[test]
    fn fetches_big_boost_when_safe_side_of_the_ball() {
        let mut ctx = test_context();
        // car 2000 from own goal, ball 3000, eligible pad 500 ahead of the car
        ctx.car_location = Vector3::new(0.0, -3120.0, 17.0);
        ctx.ball_location = Vector3::new(0.0, -2120.0, 92.0);
        ctx.ball_path = ctx.ball_location;
        ctx.ball_path_grounded = Vector3::new(0.0, -2120.0, 0.0);
        ctx.boost = 40.0;
        ctx.nearest_big_boost = Vector3::new(0.0, -2620.0, 73.0);

        assert_eq!(select(&ctx), BehaviourKind::GetBigBoost);
    }

    #[test]
    fn skips_big_boost_when_ball_is_goal_side() {
        let mut ctx = test_context();
        ctx.car_location = Vector3::new(0.0, -1000.0, 17.0);
        ctx.ball_location = Vector3::new(0.0, -3000.0, 92.0);
        ctx.ball_path = ctx.ball_location;
        ctx.boost = 40.0;
        ctx.nearest_big_boost = Vector3::new(0.0, -1500.0, 73.0);

        assert_ne!(select(&ctx), BehaviourKind::GetBigBoost);
    }

    #[test]
    fn small_boost_overrides_big_boost() {
        let mut ctx = test_context();
        ctx.car_location = Vector3::new(0.0, -3120.0, 17.0);
        ctx.ball_location = Vector3::new(0.0, -2120.0, 92.0);
        ctx.ball_path = ctx.ball_location;
        ctx.boost = 40.0;
        ctx.nearest_big_boost = Vector3::new(0.0, -2620.0, 73.0);
        ctx.nearest_small_boost = Vector3::new(100.0, -3000.0, 70.0);

        assert_eq!(select(&ctx), BehaviourKind::GetSmallBoost);
    }

    #[test]
    fn defends_when_beaten_to_a_ball_near_own_goal() {
        let mut ctx = test_context();
        // car already goal side of the ball, opponent first to it anyway
        ctx.ball_location = Vector3::new(0.0, -4200.0, 92.0);
        ctx.ball_path = ctx.ball_location;
        ctx.car_location = Vector3::new(0.0, -4800.0, 17.0);
        ctx.opponent_location = Vector3::new(200.0, -4300.0, 17.0);

        assert_eq!(select(&ctx), BehaviourKind::Defense);
    }

    #[test]
    fn saves_over_everything_but_kickoff() {
        let mut ctx = test_context();
        ctx.potential_goal = true;

        assert_eq!(select(&ctx), BehaviourKind::Save);

        ctx.kickoff_pause = true;

        assert_eq!(select(&ctx), BehaviourKind::Kickoff);
    }

    #[test]
    fn leaves_the_net_when_parked_behind_the_goal_line() {
        let mut ctx = test_context();
        ctx.car_location = Vector3::new(0.0, -5200.0, 17.0);

        assert_eq!(select(&ctx), BehaviourKind::LeaveNet);
    }

    #[test]
    fn corner_guard_only_reroutes_a_plain_ballchase() {
        let mut ctx = test_context();
        ctx.ball_location = Vector3::new(2000.0, 5000.0, 92.0);
        ctx.ball_path = ctx.ball_location;
        ctx.ball_path_grounded = Vector3::new(2000.0, 5000.0, 0.0);
        ctx.car_location = Vector3::new(0.0, 2000.0, 17.0);

        assert_eq!(select(&ctx), BehaviourKind::Reposition);

        // an active save is not rerouted
        ctx.potential_goal = true;
        ctx.ball_path.y = -5000.0;
        ctx.ball_location.y = -5000.0;
        ctx.car_location = Vector3::new(0.0, -2000.0, 17.0);

        assert_eq!(select(&ctx), BehaviourKind::Save);
    }

    #[test]
    fn defense_target_sits_on_the_own_goal_line() {
        let mut ctx = test_context();
        ctx.ball_path = Vector3::new(800.0, -4500.0, 0.0);

        let target = resolve_target(&ctx, BehaviourKind::Defense);

        assert_eq!(target, Vector3::new(800.0, -5100.0, 0.0));
    }

    #[test]
    fn leave_net_tracks_the_ball_near_the_goal_mouth() {
        let mut ctx = test_context();
        ctx.ball_path = Vector3::new(300.0, -4800.0, 0.0);
        ctx.car_location = Vector3::new(1500.0, -5300.0, 17.0);

        let near = resolve_target(&ctx, BehaviourKind::LeaveNet);
        assert_eq!(near.x, 300.0);
        assert_eq!(near.y, -5119.0);

        ctx.ball_path = Vector3::new(2500.0, -4800.0, 0.0);

        let wide = resolve_target(&ctx, BehaviourKind::LeaveNet);
        assert_eq!(wide.x, 1500.0);
    }

    #[test]
    fn ballchase_targets_ground_ball_on_a_feasible_shot() {
        let mut ctx = test_context();
        ctx.shot.feasible = true;

        assert_eq!(
            resolve_target(&ctx, BehaviourKind::Ballchase),
            ctx.ball_path_grounded
        );

        ctx.shot.feasible = false;

        assert_eq!(resolve_target(&ctx, BehaviourKind::Ballchase), ctx.shot.layup);
    }
}
