use crate::controls::ControllerOutput;

pub mod kickoffs;
pub mod library;

pub use kickoffs::*;
pub use library::*;

/// One timed slot of a scripted maneuver. While the cursor is inside its
/// window the step's controls are returned verbatim, replacing the whole
/// output vector.
#[derive(Debug, Clone, Copy)]
pub struct ControlStep {
    pub duration: f32,
    pub controls: ControllerOutput,
}

/// A non-interruptible scripted maneuver. Once started it runs to its total
/// duration; the agent takes no other decision until it completes.
#[derive(Debug, Clone)]
pub struct Sequence {
    steps: Vec<ControlStep>,
    total: f32,
    cursor: f32,
    previous_time: Option<f32>,
    done: bool,
}

impl Sequence {
    pub fn new(steps: Vec<ControlStep>) -> Self {
        let total = steps.iter().map(|step| step.duration).sum();

        Sequence {
            steps,
            total,
            cursor: 0.0,
            previous_time: None,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advances the cursor by the wall-clock delta since the previous call
    /// and returns the controls of the step whose window contains it. A
    /// cursor sitting exactly on a window boundary resolves to the later
    /// step. Returns `None` once the cumulative elapsed time reaches the
    /// total duration; a stalled host tick simply lands further into the
    /// schedule on the next call.
    pub fn tick(&mut self, time: f32) -> Option<ControllerOutput> {
        if self.done {
            return None;
        }

        if let Some(previous) = self.previous_time {
            self.cursor += time - previous;
        }
        self.previous_time = Some(time);

        if self.cursor >= self.total {
            self.done = true;
            return None;
        }

        let located = self
            .steps
            .iter()
            .scan(0.0f32, |window_end, step| {
                *window_end += step.duration;
                Some((*window_end, step))
            })
            .find(|(window_end, _)| self.cursor < *window_end)
            .map(|(_, step)| step.controls);

        if located.is_none() {
            self.done = true;
        }

        located
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn throttle_step(duration: f32, throttle: f32) -> ControlStep {
        ControlStep {
            duration,
            controls: ControllerOutput {
                throttle,
                ..Default::default()
            },
        }
    }

    fn two_step() -> Sequence {
        Sequence::new(vec![throttle_step(0.1, 0.25), throttle_step(0.2, 0.75)])
    }

    #[test]
    fn first_tick_returns_first_step() {
        let mut sequence = two_step();

        let frame = sequence.tick(100.0).unwrap();

        assert_eq!(frame.throttle, 0.25);
        assert!(!sequence.is_done());
    }

    #[test]
    fn steps_advance_with_wall_clock_deltas() {
        let mut sequence = two_step();

        // deltas 0.05, 0.08, 0.20 between successive ticks
        let frame_1 = sequence.tick(10.00).unwrap();
        let frame_2 = sequence.tick(10.05).unwrap();
        let frame_3 = sequence.tick(10.13).unwrap();

        assert_eq!(frame_1.throttle, 0.25);
        assert_eq!(frame_2.throttle, 0.25);
        assert_eq!(frame_3.throttle, 0.75);
        assert!(!sequence.is_done());

        assert!(sequence.tick(10.33).is_none());
        assert!(sequence.is_done());
    }

    #[test]
    fn boundary_cursor_resolves_to_the_later_step() {
        let mut sequence = two_step();

        sequence.tick(0.0);
        let frame = sequence.tick(0.1).unwrap();

        assert_eq!(frame.throttle, 0.75);
    }

    #[test]
    fn completes_exactly_at_total_duration() {
        let mut sequence = two_step();

        sequence.tick(0.0);
        assert!(sequence.tick(0.3).is_none());
        assert!(sequence.is_done());
        assert!(sequence.tick(0.31).is_none());
    }

    #[test]
    fn step_controls_are_returned_unmodified() {
        let controls = ControllerOutput {
            throttle: 1.0,
            pitch: -1.0,
            jump: true,
            boost: true,
            ..Default::default()
        };
        let mut sequence = Sequence::new(vec![ControlStep {
            duration: 0.5,
            controls,
        }]);

        assert_eq!(sequence.tick(0.0), Some(controls));
    }
}
