use log::debug;
use nalgebra::Vector3;

#[derive(Debug, Clone, Copy)]
pub enum DebugColor {
    White,
    Cyan,
    Red,
}

/// Optional telemetry sink. Pure side channel: nothing drawn here ever feeds
/// back into a decision.
pub trait DebugRenderer {
    fn draw_line(&mut self, from: Vector3<f32>, to: Vector3<f32>, color: DebugColor);
    fn draw_string(&mut self, anchor: Vector3<f32>, text: &str);
    fn draw_rect(&mut self, anchor: Vector3<f32>, width: f32, height: f32, color: DebugColor);
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl DebugRenderer for NullRenderer {
    fn draw_line(&mut self, _from: Vector3<f32>, _to: Vector3<f32>, _color: DebugColor) {}
    fn draw_string(&mut self, _anchor: Vector3<f32>, _text: &str) {}
    fn draw_rect(&mut self, _anchor: Vector3<f32>, _width: f32, _height: f32, _color: DebugColor) {}
}

/// Forwards text telemetry to the log; line and rect draws are dropped.
#[derive(Debug, Default)]
pub struct LogRenderer;

impl DebugRenderer for LogRenderer {
    fn draw_line(&mut self, _from: Vector3<f32>, _to: Vector3<f32>, _color: DebugColor) {}

    fn draw_string(&mut self, _anchor: Vector3<f32>, text: &str) {
        debug!("{}", text);
    }

    fn draw_rect(&mut self, _anchor: Vector3<f32>, _width: f32, _height: f32, _color: DebugColor) {}
}
