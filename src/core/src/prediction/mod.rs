use crate::arena::{BACK_WALL_Y, GOAL_POST_X};
use crate::input::WorldSnapshot;
use nalgebra::Vector3;

/// One forecast sample of ball physics.
#[derive(Debug, Clone, Copy)]
pub struct BallSlice {
    pub time: f32,
    pub location: Vector3<f32>,
    pub velocity: Vector3<f32>,
}

/// Ball trajectory forecaster supplied by the host.
///
/// Both operations may come up empty (horizon exceeded, no goal crossing);
/// callers fall back to live ball state in that case.
pub trait BallPredictor {
    /// Slice nearest the requested absolute time.
    fn slice_at(&self, time: f32) -> Option<BallSlice>;

    /// First future slice that crosses either goal line.
    fn next_goal_slice(&self) -> Option<BallSlice>;
}

/// Straight-line extrapolation of the current ball velocity. Good enough for
/// the offline harness and tests; a real host supplies its own forecaster.
#[derive(Debug, Clone, Copy)]
pub struct LinearBallPredictor {
    pub now: f32,
    pub location: Vector3<f32>,
    pub velocity: Vector3<f32>,
    pub horizon: f32,
}

const DEFAULT_HORIZON: f32 = 6.0;

impl LinearBallPredictor {
    pub fn from_snapshot(snapshot: &WorldSnapshot) -> Self {
        LinearBallPredictor {
            now: snapshot.seconds_elapsed,
            location: snapshot.ball.location,
            velocity: snapshot.ball.velocity,
            horizon: DEFAULT_HORIZON,
        }
    }
}

impl BallPredictor for LinearBallPredictor {
    fn slice_at(&self, time: f32) -> Option<BallSlice> {
        let dt = time - self.now;

        if dt < 0.0 || dt > self.horizon {
            return None;
        }

        Some(BallSlice {
            time,
            location: self.location + self.velocity * dt,
            velocity: self.velocity,
        })
    }

    fn next_goal_slice(&self) -> Option<BallSlice> {
        if self.velocity.y.abs() < f32::EPSILON {
            return None;
        }

        let goal_line = self.velocity.y.signum() * BACK_WALL_Y;
        let dt = (goal_line - self.location.y) / self.velocity.y;

        if dt < 0.0 || dt > self.horizon {
            return None;
        }

        let crossing_x = self.location.x + self.velocity.x * dt;

        if crossing_x.abs() >= GOAL_POST_X {
            return None;
        }

        self.slice_at(self.now + dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rolling(location: Vector3<f32>, velocity: Vector3<f32>) -> LinearBallPredictor {
        LinearBallPredictor {
            now: 10.0,
            location,
            velocity,
            horizon: 6.0,
        }
    }

    #[test]
    fn slice_extrapolates_along_velocity() {
        let predictor = rolling(Vector3::zeros(), Vector3::new(0.0, 1000.0, 0.0));

        let slice = predictor.slice_at(12.0).unwrap();

        assert!((slice.location.y - 2000.0).abs() < 1e-3);
    }

    #[test]
    fn slice_outside_horizon_is_none() {
        let predictor = rolling(Vector3::zeros(), Vector3::new(0.0, 1000.0, 0.0));

        assert!(predictor.slice_at(30.0).is_none());
        assert!(predictor.slice_at(9.0).is_none());
    }

    #[test]
    fn goal_crossing_detected_inside_the_mouth() {
        let predictor = rolling(Vector3::new(0.0, 3000.0, 92.0), Vector3::new(0.0, 1500.0, 0.0));

        let slice = predictor.next_goal_slice().unwrap();

        assert!((slice.location.y - BACK_WALL_Y).abs() < 1.0);
    }

    #[test]
    fn wide_shot_is_not_a_goal_crossing() {
        let predictor = rolling(
            Vector3::new(2000.0, 3000.0, 92.0),
            Vector3::new(0.0, 1500.0, 0.0),
        );

        assert!(predictor.next_goal_slice().is_none());
    }

    #[test]
    fn stationary_ball_never_crosses() {
        let predictor = rolling(Vector3::zeros(), Vector3::zeros());

        assert!(predictor.next_goal_slice().is_none());
    }
}
