//! Parser for scene session files.
//!
//! A session file describes the host scene the panel is driving: one
//! `object <name>` line per scene object, an optional `range <start> <end>`
//! playback range, and an optional `frame <value>` initial playhead. Blank
//! lines and `#` comments are skipped.

use nom::{
    bytes::complete::{tag, take_till1},
    character::complete::multispace1,
    number::complete::double,
    IResult,
};
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct SceneDescription {
    pub objects: Vec<String>,
    pub range: (f64, f64),
    pub frame: f64,
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self {
            objects: Vec::new(),
            range: (1.0, 120.0),
            frame: 1.0,
        }
    }
}

pub fn parse_scene_file<P: AsRef<Path>>(path: P) -> io::Result<SceneDescription> {
    let content = fs::read_to_string(path)?;
    parse_scene(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

pub fn parse_scene(content: &str) -> Result<SceneDescription, String> {
    let mut scene = SceneDescription::default();

    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line_no = index + 1;
        if line.starts_with("object") {
            match object_line(line) {
                Ok((rest, name)) if rest.trim().is_empty() => {
                    scene.objects.push(name.to_string())
                }
                _ => return Err(format!("line {}: bad object directive", line_no)),
            }
        } else if line.starts_with("range") {
            match range_line(line) {
                Ok((rest, (start, end))) if rest.trim().is_empty() => {
                    if start > end {
                        return Err(format!("line {}: range start after end", line_no));
                    }
                    scene.range = (start, end);
                }
                _ => return Err(format!("line {}: bad range directive", line_no)),
            }
        } else if line.starts_with("frame") {
            match frame_line(line) {
                Ok((rest, frame)) if rest.trim().is_empty() => scene.frame = frame,
                _ => return Err(format!("line {}: bad frame directive", line_no)),
            }
        } else {
            return Err(format!("line {}: unknown directive", line_no));
        }
    }

    Ok(scene)
}

fn object_line(input: &str) -> IResult<&str, &str> {
    let (input, _) = tag("object")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, name) = take_till1(|c: char| c.is_whitespace())(input)?;
    Ok((input, name))
}

fn range_line(input: &str) -> IResult<&str, (f64, f64)> {
    let (input, _) = tag("range")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, start) = double(input)?;
    let (input, _) = multispace1(input)?;
    let (input, end) = double(input)?;
    Ok((input, (start, end)))
}

fn frame_line(input: &str) -> IResult<&str, f64> {
    let (input, _) = tag("frame")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, frame) = double(input)?;
    Ok((input, frame))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_session() {
        let content = "\
# demo rig
range 1 240
frame 12.5

object root_ctrl
object arm_L_ctrl
object arm_R_ctrl
";
        let scene = parse_scene(content).unwrap();
        assert_eq!(
            scene.objects,
            vec!["root_ctrl", "arm_L_ctrl", "arm_R_ctrl"]
        );
        assert_eq!(scene.range, (1.0, 240.0));
        assert_eq!(scene.frame, 12.5);
    }

    #[test]
    fn test_parse_empty_content_gives_defaults() {
        let scene = parse_scene("").unwrap();
        assert!(scene.objects.is_empty());
        assert_eq!(scene.range, (1.0, 120.0));
        assert_eq!(scene.frame, 1.0);
    }

    #[test]
    fn test_unknown_directive_is_err() {
        let err = parse_scene("camera persp1").unwrap_err();
        assert!(err.contains("line 1"));
    }

    #[test]
    fn test_bad_range_is_err() {
        assert!(parse_scene("range 10").is_err());
        assert!(parse_scene("range ten twenty").is_err());
    }

    #[test]
    fn test_inverted_range_is_err() {
        let err = parse_scene("range 100 1").unwrap_err();
        assert!(err.contains("start after end"));
    }

    #[test]
    fn test_object_with_trailing_text_is_err() {
        assert!(parse_scene("object a b").is_err());
    }

    #[test]
    fn test_missing_object_name_is_err() {
        assert!(parse_scene("object").is_err());
    }
}
