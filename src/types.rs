use crate::parsers::object_ref;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum AppMode {
    #[default]
    Normal,
    Command,
    Edit,
    Finder,
}

/// Which panel receives navigation keys in normal mode.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum PanelFocus {
    #[default]
    Bookmarks,
    Scene,
}

/// One saved (frame, object-reference) pair shown as a table record.
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct Bookmark {
    /// Timeline position, kept as decimal text.
    pub frame: String,
    /// Empty string, a single name literal, or an encoded name list.
    pub object_ref: String,
    /// Explicit marked flag; the alert color is derived from this at render.
    pub marked: bool,
}

impl Bookmark {
    pub fn new(frame: String, object_ref: String) -> Self {
        Self {
            frame,
            object_ref,
            marked: false,
        }
    }

    /// Table cell text for the object reference. A list reference abbreviates
    /// to "..<firstName>"; anything undecodable falls back to the raw text.
    pub fn display_ref(&self) -> String {
        if !self.object_ref.starts_with('[') {
            return self.object_ref.clone();
        }
        match object_ref::decode(&self.object_ref) {
            Ok(names) if !names.is_empty() => format!("..{}", names[0]),
            _ => self.object_ref.clone(),
        }
    }
}

/// Render a playhead value the way records store it: always with a decimal
/// part, so `24` round-trips as `"24.0"`.
pub fn frame_text(frame: f64) -> String {
    if frame.fract() == 0.0 {
        format!("{:.1}", frame)
    } else {
        format!("{}", frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_text_whole_numbers_keep_a_decimal() {
        assert_eq!(frame_text(24.0), "24.0");
        assert_eq!(frame_text(0.0), "0.0");
    }

    #[test]
    fn test_frame_text_fractional_values_unchanged() {
        assert_eq!(frame_text(12.5), "12.5");
        assert_eq!(frame_text(1.25), "1.25");
    }

    #[test]
    fn test_display_ref_single_literal() {
        let record = Bookmark::new("1.0".to_string(), "pCube1".to_string());
        assert_eq!(record.display_ref(), "pCube1");
    }

    #[test]
    fn test_display_ref_abbreviates_lists() {
        let record = Bookmark::new("1.0".to_string(), r#"["A", "B"]"#.to_string());
        assert_eq!(record.display_ref(), "..A");
    }

    #[test]
    fn test_display_ref_empty() {
        let record = Bookmark::new("1.0".to_string(), String::new());
        assert_eq!(record.display_ref(), "");
    }

    #[test]
    fn test_display_ref_malformed_list_falls_back_to_raw() {
        let record = Bookmark::new("1.0".to_string(), "[not a list".to_string());
        assert_eq!(record.display_ref(), "[not a list");
    }
}
