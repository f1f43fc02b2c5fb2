pub fn scene_list_width() -> u16 {
    24
}

// The marked/unmarked pair the original panel used for frame text.
pub fn marked_frame_color() -> String {
    "#ff0000".to_string()
}

pub fn unmarked_frame_color() -> String {
    "#c8c8c8".to_string()
}
