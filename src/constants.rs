use ratatui::style::Color;

/// Frame text color for records the user has marked.
pub const MARKED_FRAME_COLOR: Color = Color::Rgb(255, 0, 0);
/// Frame text color for unmarked records.
pub const UNMARKED_FRAME_COLOR: Color = Color::Rgb(200, 200, 200);

/// Upper bound for frame values accepted by the edit dialog and goto.
pub const MAX_FRAME: f64 = 100_000.0;

/// Playhead step size for the timeline keys in normal mode.
pub const FRAME_STEP: f64 = 1.0;
