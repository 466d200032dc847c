pub mod agent;
pub mod arena;
pub mod controls;
pub mod input;
pub mod maths;
pub mod prediction;
pub mod render;

pub use agent::{
    Agent, BehaviourKind, ControlStep, Sequence, ShotWindow, TickContext, TickOutput,
};
pub use arena::{
    ArenaGeometry, BoostPad, FieldInfo, GoalGeometry, KickoffSpawn, Team,
    match_kickoff_spawn,
};
pub use controls::ControllerOutput;
pub use input::{BallState, CarState, Rotator, WorldSnapshot};
pub use maths::{Orientation, relative_location, steer_toward_target, yaw_toward_target};
pub use prediction::{BallPredictor, BallSlice, LinearBallPredictor};
pub use render::{DebugColor, DebugRenderer, LogRenderer, NullRenderer};
