mod session;

pub use session::SessionHost;

/// The panel's only view of the surrounding scene application: read the
/// current selection and playhead, write them back on demand. Injected at
/// `App` construction so tests can install their own scene.
pub trait SceneHost {
    /// All selectable objects in the scene, in scene order.
    fn scene_objects(&self) -> Vec<String>;

    /// The ordered selection as the host currently holds it. May be empty.
    fn current_selection(&self) -> Vec<String>;

    /// Current playhead position.
    fn current_frame(&self) -> f64;

    /// Replace the selection with the given names.
    fn set_selection(&mut self, names: &[String]);

    /// Empty the selection.
    fn clear_selection(&mut self);

    /// Move the playhead.
    fn set_frame(&mut self, frame: f64);

    /// Playback range, for display only.
    fn frame_range(&self) -> (f64, f64);
}
