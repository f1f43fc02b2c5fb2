use super::SceneHost;
use crate::parsers::scene::{self, SceneDescription};
use indexmap::IndexSet;
use std::io;
use std::path::Path;

/// In-process scene session. Stands in for the animation package the panel
/// would normally dock into: a roster of named objects, an ordered selection,
/// and a playhead.
pub struct SessionHost {
    objects: IndexSet<String>,
    selection: Vec<String>,
    frame: f64,
    range: (f64, f64),
}

impl Default for SessionHost {
    fn default() -> Self {
        Self::from_scene(SceneDescription::default())
    }
}

impl SessionHost {
    pub fn from_scene(scene: SceneDescription) -> Self {
        Self {
            objects: scene.objects.into_iter().collect(),
            selection: Vec::new(),
            frame: scene.frame,
            range: scene.range,
        }
    }

    pub fn from_scene_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::from_scene(scene::parse_scene_file(path)?))
    }

    /// Built-in demo rig used when no session file is given.
    pub fn sample() -> Self {
        let scene = SceneDescription {
            objects: [
                "root_ctrl",
                "spine_ctrl",
                "head_ctrl",
                "arm_L_ctrl",
                "arm_R_ctrl",
                "leg_L_ctrl",
                "leg_R_ctrl",
                "prop_sword",
                "camera1",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            range: (1.0, 240.0),
            frame: 1.0,
        };
        Self::from_scene(scene)
    }
}

impl SceneHost for SessionHost {
    fn scene_objects(&self) -> Vec<String> {
        self.objects.iter().cloned().collect()
    }

    fn current_selection(&self) -> Vec<String> {
        self.selection.clone()
    }

    fn current_frame(&self) -> f64 {
        self.frame
    }

    fn set_selection(&mut self, names: &[String]) {
        // Names no longer in the roster are dropped, and a name selected
        // twice stays selected once. The requested order is kept.
        self.selection.clear();
        for name in names {
            if self.objects.contains(name) && !self.selection.contains(name) {
                self.selection.push(name.clone());
            }
        }
    }

    fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn set_frame(&mut self, frame: f64) {
        self.frame = frame;
    }

    fn frame_range(&self) -> (f64, f64) {
        self.range
    }
}
