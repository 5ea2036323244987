use glam::{Mat4, Vec3};

use crate::camera::OrbitCamera;
use crate::input::{Command, Keymap};
use crate::resources::RoundSummary;
use crate::scene::Scene;

/// What the web client needs from a demo to drive it frame by frame.
///
/// `scene()` must return the same number of items in the same order on every call;
/// the renderer builds one mesh per item at start-up and only updates transforms,
/// materials and visibility afterwards.
pub trait Demo {
    fn name(&self) -> &'static str;

    fn keymap(&self) -> Keymap;

    fn handle(&mut self, command: Command, now_ms: f64);

    /// Advance one frame; returns a summary when a round just ended
    fn tick(&mut self, now_ms: f64) -> Option<RoundSummary>;

    fn scene(&self) -> Scene;

    fn view(&self) -> Mat4;

    fn eye(&self) -> Vec3;

    fn wireframe(&self) -> bool {
        false
    }

    /// Mouse-driven camera, if the demo has one
    fn orbit_mut(&mut self) -> Option<&mut OrbitCamera> {
        None
    }

    /// Frames per second the demo wants; `None` means every display refresh
    fn tick_rate(&self) -> Option<f64> {
        None
    }
}
