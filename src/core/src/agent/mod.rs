//! The per-tick decision core: derive a context from the snapshot, pick a
//! behaviour, resolve its target and compose controls, unless a scripted
//! maneuver is mid-flight, in which case it owns the output.

use itertools::Itertools;
use log::{debug, info};

use crate::arena::{ArenaGeometry, FieldInfo, Team};
use crate::controls::ControllerOutput;
use crate::input::WorldSnapshot;
use crate::prediction::BallPredictor;
use crate::render::{DebugColor, DebugRenderer, NullRenderer};
use nalgebra::Vector3;

pub mod behaviour;
pub mod context;
pub mod output;
pub mod sequences;
pub mod targeting;

pub use behaviour::BehaviourKind;
pub use context::TickContext;
pub use output::TickOutput;
pub use sequences::{ControlStep, Sequence};
pub use targeting::ShotWindow;

/// One car's controller. Holds only what must survive between ticks: the
/// static arena description and the scripted maneuver in flight, if any.
pub struct Agent {
    index: usize,
    team: Team,
    geometry: ArenaGeometry,
    field: FieldInfo,
    active_sequence: Option<Sequence>,
    renderer: Box<dyn DebugRenderer>,
}

impl Agent {
    pub fn new(index: usize, team: Team, field: FieldInfo) -> Self {
        let geometry = ArenaGeometry::for_team(team, &field);

        info!(
            "car {index} ({team:?}) defending goal at ({:.0}, {:.0}), {} pads tracked",
            geometry.own_goal.center.x,
            geometry.own_goal.center.y,
            field.boost_pads.len()
        );

        Agent {
            index,
            team,
            geometry,
            field,
            active_sequence: None,
            renderer: Box::new(NullRenderer),
        }
    }

    pub fn with_renderer(mut self, renderer: Box<dyn DebugRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn team(&self) -> Team {
        self.team
    }

    /// True while a scripted maneuver owns the controls.
    pub fn is_scripted(&self) -> bool {
        self.active_sequence.as_ref().is_some_and(|s| !s.is_done())
    }

    /// Produces one controller frame for the snapshot. An unfinished scripted
    /// maneuver preempts everything; otherwise the full decision pass runs
    /// and may itself start a new maneuver.
    pub fn tick(
        &mut self,
        snapshot: &WorldSnapshot,
        predictor: &dyn BallPredictor,
    ) -> ControllerOutput {
        if let Some(sequence) = self.active_sequence.as_mut() {
            if let Some(frame) = sequence.tick(snapshot.seconds_elapsed) {
                return frame;
            }
            self.active_sequence = None;
        }

        let ctx = TickContext::derive(
            self.index,
            self.team,
            &self.geometry,
            &self.field,
            snapshot,
            predictor,
        );

        let behaviour = behaviour::select(&ctx);
        let target = behaviour::resolve_target(&ctx, behaviour);

        self.draw_diagnostics(&ctx, behaviour, target);

        let output = output::compose(&ctx, behaviour, target);

        match output.sequence {
            Some(mut sequence) => {
                debug!("car {} starting scripted maneuver ({behaviour})", self.index);
                let frame = sequence
                    .tick(snapshot.seconds_elapsed)
                    .unwrap_or(output.controls);
                self.active_sequence = Some(sequence);
                frame
            }
            None => output.controls,
        }
    }

    fn draw_diagnostics(&mut self, ctx: &TickContext, behaviour: BehaviourKind, target: Vector3<f32>) {
        self.renderer.draw_line(
            ctx.car_location,
            self.geometry.opponent_goal.left_post,
            DebugColor::Red,
        );
        self.renderer.draw_line(
            ctx.car_location,
            self.geometry.opponent_goal.right_post,
            DebugColor::Red,
        );

        if matches!(behaviour, BehaviourKind::Ballchase | BehaviourKind::Kickoff) {
            self.renderer
                .draw_line(ctx.ball_location, target, DebugColor::Cyan);
        }

        self.renderer
            .draw_line(ctx.car_location, target, DebugColor::White);
        self.renderer.draw_rect(target, 8.0, 8.0, DebugColor::Cyan);

        let text = [
            format!("Speed: {:.1}", ctx.speed),
            format!("Behavior: {behaviour}"),
            format!("Shooting Angle: {}", ctx.shot.feasible),
            format!("Own Goal Angle: {}", ctx.own_goal_shot.feasible),
        ]
        .iter()
        .join("\n");

        self.renderer.draw_string(ctx.car_location, &text);
    }
}
