use crate::{
    console::{state::ConsoleState, ConsoleStateAccess, Message},
    constants::MAX_FRAME,
    edit_dialog::{state::EditDialogState, EditDialogStateAccess},
    finder::{state::FinderState, FinderStateAccess},
    host::{SceneHost, SessionHost},
    parsers::object_ref,
    types::{frame_text, AppMode, Bookmark, PanelFocus},
};
use std::collections::BTreeSet;

pub struct AppState {
    /// Flag indicating whether the application should exit.
    pub exit: bool,

    /// The mode the application is currently in.
    pub mode: AppMode,

    /// Which panel navigation keys act on in normal mode.
    pub focus: PanelFocus,

    /// Handle to the scene being driven. Injected at construction; tests
    /// install their own sessions here.
    pub host: Box<dyn SceneHost>,

    /// The bookmark records, in creation order.
    pub bookmarks: Vec<Bookmark>,

    /// Record under the table cursor.
    pub table_cursor: usize,

    /// Records checked for the next bulk removal.
    pub checked: BTreeSet<usize>,

    /// Roster entry under the scene-panel cursor.
    pub scene_cursor: usize,

    /// Flag indicating that the help overlay is currently being displayed.
    pub show_help: bool,

    console_state: ConsoleState,
    edit_dialog_state: EditDialogState,
    finder_state: FinderState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_host(Box::new(SessionHost::default()))
    }
}

impl ConsoleStateAccess for AppState {
    fn console_state(&self) -> &ConsoleState {
        &self.console_state
    }

    fn console_state_mut(&mut self) -> &mut ConsoleState {
        &mut self.console_state
    }
}

impl EditDialogStateAccess for AppState {
    fn edit_dialog_state(&self) -> &EditDialogState {
        &self.edit_dialog_state
    }

    fn edit_dialog_state_mut(&mut self) -> &mut EditDialogState {
        &mut self.edit_dialog_state
    }
}

impl FinderStateAccess for AppState {
    fn finder_state(&self) -> &FinderState {
        &self.finder_state
    }

    fn finder_state_mut(&mut self) -> &mut FinderState {
        &mut self.finder_state
    }
}

impl AppState {
    pub fn with_host(host: Box<dyn SceneHost>) -> Self {
        Self {
            exit: false,
            mode: AppMode::default(),
            focus: PanelFocus::default(),
            host,
            bookmarks: Vec::new(),
            table_cursor: 0,
            checked: BTreeSet::new(),
            scene_cursor: 0,
            show_help: false,
            console_state: ConsoleState::new(),
            edit_dialog_state: EditDialogState::default(),
            finder_state: FinderState::default(),
        }
    }

    /// Route an operation outcome to the status line.
    pub fn report(&mut self, outcome: Result<Message, String>) {
        self.console_state.report(outcome);
    }

    // ---- bookmark table operations ----

    /// Snapshot the host's playhead and selection into a new record at the
    /// end of the table. An empty selection still creates the record, with
    /// an empty reference and a warning.
    pub fn add_bookmark(&mut self) -> Result<Message, String> {
        let frame = frame_text(self.host.current_frame());
        let selection = self.host.current_selection();
        let object_ref = object_ref::encode(&selection);
        self.bookmarks.push(Bookmark::new(frame.clone(), object_ref));
        self.table_cursor = self.bookmarks.len() - 1;

        if selection.is_empty() {
            Ok(Message::warning(
                "No object in the selection; stored an empty reference. Edit the record to add objects.",
            ))
        } else {
            Ok(Message::info(format!(
                "Added bookmark {} at frame {}",
                self.bookmarks.len(),
                frame
            )))
        }
    }

    /// Remove every checked record. Errors without touching the table when
    /// nothing is checked.
    pub fn remove_checked(&mut self) -> Result<Message, String> {
        if self.checked.is_empty() {
            return Err("No record has been selected.".to_string());
        }
        let indices: Vec<usize> = self.checked.iter().copied().collect();
        self.remove_records(&indices)
    }

    pub fn remove_records(&mut self, indices: &[usize]) -> Result<Message, String> {
        let mut targets: Vec<usize> = indices.to_vec();
        targets.sort_unstable();
        targets.dedup();
        if targets.is_empty() {
            return Err("No record has been selected.".to_string());
        }
        if let Some(&highest) = targets.last() {
            if highest >= self.bookmarks.len() {
                return Err(format!("No bookmark {}", highest + 1));
            }
        }

        // Back-to-front so lower positions stay valid while removing.
        for index in targets.iter().rev() {
            self.bookmarks.remove(*index);
        }
        self.checked.clear();
        if self.table_cursor >= self.bookmarks.len() {
            self.table_cursor = self.bookmarks.len().saturating_sub(1);
        }
        Ok(Message::info(format!("Removed {} bookmark(s)", targets.len())))
    }

    /// Apply a record back to the host: replace the selection with the
    /// decoded names (just clearing it when the reference is empty), then
    /// move the playhead to the stored frame.
    pub fn recall_bookmark(&mut self, index: usize) -> Result<Message, String> {
        let record = self
            .bookmarks
            .get(index)
            .ok_or_else(|| format!("No bookmark {}", index + 1))?;
        let names = object_ref::decode(&record.object_ref)?;
        let frame: f64 = record
            .frame
            .trim()
            .parse()
            .map_err(|_| format!("Stored frame {:?} is not a number", record.frame))?;

        self.host.clear_selection();
        if !names.is_empty() {
            self.host.set_selection(&names);
        }
        self.host.set_frame(frame);
        Ok(Message::info(format!(
            "Recalled bookmark {} at frame {}",
            index + 1,
            record.frame
        )))
    }

    pub fn toggle_mark(&mut self, index: usize) -> Result<Message, String> {
        let record = self
            .bookmarks
            .get_mut(index)
            .ok_or_else(|| format!("No bookmark {}", index + 1))?;
        record.marked = !record.marked;
        Ok(Message::info(format!(
            "{} bookmark {}",
            if record.marked { "Marked" } else { "Unmarked" },
            index + 1
        )))
    }

    // ---- edit dialog flow ----

    /// Open the modal editor pre-loaded with the record's fields. A stored
    /// reference that no longer decodes fails here, keeping the record as is.
    pub fn open_edit_dialog(&mut self, index: usize) -> Result<Message, String> {
        let record = self
            .bookmarks
            .get(index)
            .ok_or_else(|| format!("No bookmark {}", index + 1))?;
        let names = object_ref::decode(&record.object_ref)?;
        self.edit_dialog_state.load(index, &record.frame, names);
        self.mode = AppMode::Edit;
        Ok(Message::info(format!("Editing bookmark {}", index + 1)))
    }

    /// Overwrite the edited record from the dialog. Validation failures
    /// leave the dialog open and the record untouched.
    pub fn commit_edit_dialog(&mut self) -> Result<Message, String> {
        let Some(target) = self.edit_dialog_state.target else {
            return Err("No record is being edited".to_string());
        };
        let frame: f64 = self
            .edit_dialog_state
            .frame_input
            .trim()
            .parse()
            .map_err(|_| "Invalid frame value".to_string())?;
        if !(0.0..=MAX_FRAME).contains(&frame) {
            return Err(format!("Frame out of range (0-{})", MAX_FRAME));
        }

        let object_ref = self.edit_dialog_state.encoded_ref();
        let record = self
            .bookmarks
            .get_mut(target)
            .ok_or_else(|| format!("No bookmark {}", target + 1))?;
        record.frame = frame_text(frame);
        record.object_ref = object_ref;

        self.edit_dialog_state.clear();
        self.mode = AppMode::Normal;
        Ok(Message::info(format!("Updated bookmark {}", target + 1)))
    }

    /// Close the dialog without committing. The record stays untouched but
    /// the transient list is still cleared.
    pub fn cancel_edit_dialog(&mut self) {
        self.edit_dialog_state.clear();
        self.mode = AppMode::Normal;
    }

    /// The dialog's add button: append the host's current selection to the
    /// object list.
    pub fn add_selection_to_dialog(&mut self) -> Result<Message, String> {
        let selection = self.host.current_selection();
        if selection.is_empty() {
            return Ok(Message::warning("No object in the selection to add."));
        }
        self.edit_dialog_state.add_names(&selection);
        Ok(Message::info(format!("Added {} object(s)", selection.len())))
    }

    /// The dialog's capture button: copy the playhead into the frame field.
    pub fn capture_dialog_frame(&mut self) -> Result<Message, String> {
        let frame = frame_text(self.host.current_frame());
        self.edit_dialog_state.frame_input = frame.clone();
        Ok(Message::info(format!("Captured frame {}", frame)))
    }

    // ---- host selection and playhead ----

    pub fn select_objects(&mut self, names: &[String]) -> Result<Message, String> {
        let roster = self.host.scene_objects();
        let unknown: Vec<&str> = names
            .iter()
            .filter(|name| !roster.contains(name))
            .map(|name| name.as_str())
            .collect();
        if !unknown.is_empty() {
            return Err(format!("Unknown object(s): {}", unknown.join(", ")));
        }
        self.host.set_selection(names);
        Ok(Message::info(format!(
            "Selection: {} object(s)",
            self.host.current_selection().len()
        )))
    }

    pub fn deselect_all(&mut self) -> Result<Message, String> {
        self.host.clear_selection();
        Ok(Message::info("Cleared selection"))
    }

    pub fn goto_frame(&mut self, frame: f64) -> Result<Message, String> {
        if !(0.0..=MAX_FRAME).contains(&frame) {
            return Err(format!("Frame out of range (0-{})", MAX_FRAME));
        }
        self.host.set_frame(frame);
        Ok(Message::info(format!("Moved to frame {}", frame_text(frame))))
    }

    pub fn step_frame(&mut self, delta: f64) {
        let next = (self.host.current_frame() + delta).max(0.0);
        self.host.set_frame(next);
    }

    // ---- normal-mode navigation ----

    pub fn table_cursor_next(&mut self) {
        if !self.bookmarks.is_empty() {
            self.table_cursor = (self.table_cursor + 1) % self.bookmarks.len();
        }
    }

    pub fn table_cursor_previous(&mut self) {
        if !self.bookmarks.is_empty() {
            self.table_cursor = if self.table_cursor == 0 {
                self.bookmarks.len() - 1
            } else {
                self.table_cursor - 1
            };
        }
    }

    pub fn toggle_checked(&mut self) {
        if self.bookmarks.is_empty() {
            return;
        }
        let index = self.table_cursor;
        if !self.checked.remove(&index) {
            self.checked.insert(index);
        }
    }

    pub fn scene_cursor_next(&mut self) {
        let count = self.host.scene_objects().len();
        if count > 0 {
            self.scene_cursor = (self.scene_cursor + 1) % count;
        }
    }

    pub fn scene_cursor_previous(&mut self) {
        let count = self.host.scene_objects().len();
        if count > 0 {
            self.scene_cursor = if self.scene_cursor == 0 {
                count - 1
            } else {
                self.scene_cursor - 1
            };
        }
    }

    /// Toggle the roster object under the cursor in and out of the host
    /// selection.
    pub fn toggle_scene_object(&mut self) -> Result<Message, String> {
        let objects = self.host.scene_objects();
        let name = objects
            .get(self.scene_cursor)
            .ok_or_else(|| "No scene object under the cursor".to_string())?;
        let mut selection = self.host.current_selection();
        if let Some(position) = selection.iter().position(|n| n == name) {
            selection.remove(position);
        } else {
            selection.push(name.clone());
        }
        self.host.set_selection(&selection);
        Ok(Message::info(format!(
            "Selection: {} object(s)",
            self.host.current_selection().len()
        )))
    }

    /// Replace the host selection with just the object under the cursor.
    pub fn isolate_scene_object(&mut self) -> Result<Message, String> {
        let objects = self.host.scene_objects();
        let name = objects
            .get(self.scene_cursor)
            .ok_or_else(|| "No scene object under the cursor".to_string())?
            .clone();
        self.host.set_selection(std::slice::from_ref(&name));
        Ok(Message::info(format!("Selected {}", name)))
    }

    // ---- modal transitions ----

    pub fn open_console(&mut self) {
        self.console_state.reset_input();
        self.console_state.message = None;
        self.mode = AppMode::Command;
    }

    pub fn close_console(&mut self) {
        self.console_state.reset_input();
        self.mode = AppMode::Normal;
    }

    pub fn open_finder(&mut self) {
        let objects = self.host.scene_objects();
        let selection = self.host.current_selection();
        self.finder_state.open(objects, &selection);
        self.mode = AppMode::Finder;
    }

    pub fn accept_finder(&mut self) -> Result<Message, String> {
        let picks = self.finder_state.picked_in_scene_order();
        let count = picks.len();
        if picks.is_empty() {
            self.host.clear_selection();
        } else {
            self.host.set_selection(&picks);
        }
        self.finder_state.clear();
        self.mode = AppMode::Normal;
        Ok(Message::info(format!("Selection: {} object(s)", count)))
    }

    pub fn cancel_finder(&mut self) {
        self.finder_state.clear();
        self.mode = AppMode::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MessageLevel;
    use crate::parsers::scene::SceneDescription;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn scene_state() -> AppState {
        let scene = SceneDescription {
            objects: names(&["A", "B", "C", "D"]),
            range: (0.0, 100.0),
            frame: 1.0,
        };
        AppState::with_host(Box::new(SessionHost::from_scene(scene)))
    }

    #[test]
    fn test_add_bookmark_snapshots_selection_and_frame() {
        let mut state = scene_state();
        state.host.set_frame(24.0);
        state.host.set_selection(&names(&["A", "B"]));

        let message = state.add_bookmark().unwrap();
        assert_eq!(message.level, MessageLevel::Info);

        let record = &state.bookmarks[0];
        assert_eq!(record.frame, "24.0");
        assert_eq!(
            object_ref::decode(&record.object_ref).unwrap(),
            names(&["A", "B"])
        );
        assert_eq!(record.display_ref(), "..A");
    }

    #[test]
    fn test_add_bookmark_single_object_stores_literal() {
        let mut state = scene_state();
        state.host.set_selection(&names(&["C"]));
        state.add_bookmark().unwrap();
        assert_eq!(state.bookmarks[0].object_ref, "C");
    }

    #[test]
    fn test_add_bookmark_empty_selection_warns_but_creates() {
        let mut state = scene_state();
        let message = state.add_bookmark().unwrap();
        assert_eq!(message.level, MessageLevel::Warning);
        assert_eq!(state.bookmarks.len(), 1);
        assert_eq!(state.bookmarks[0].object_ref, "");
    }

    #[test]
    fn test_remove_with_nothing_checked_is_err() {
        let mut state = scene_state();
        state.add_bookmark().unwrap();
        let result = state.remove_checked();
        assert_eq!(result.unwrap_err(), "No record has been selected.");
        assert_eq!(state.bookmarks.len(), 1);
    }

    #[test]
    fn test_remove_two_checked_keeps_relative_order() {
        let mut state = scene_state();
        for frame in [1.0, 2.0, 3.0, 4.0, 5.0] {
            state.host.set_frame(frame);
            state.host.set_selection(&names(&["A"]));
            state.add_bookmark().unwrap();
        }
        state.checked.insert(1);
        state.checked.insert(3);

        state.remove_checked().unwrap();
        let remaining: Vec<&str> = state
            .bookmarks
            .iter()
            .map(|record| record.frame.as_str())
            .collect();
        assert_eq!(remaining, vec!["1.0", "3.0", "5.0"]);
        assert!(state.checked.is_empty());
    }

    #[test]
    fn test_remove_records_out_of_range_is_err() {
        let mut state = scene_state();
        state.add_bookmark().unwrap();
        assert!(state.remove_records(&[5]).is_err());
        assert_eq!(state.bookmarks.len(), 1);
    }

    #[test]
    fn test_recall_applies_selection_then_frame() {
        let mut state = scene_state();
        state.host.set_frame(24.0);
        state.host.set_selection(&names(&["A", "B"]));
        state.add_bookmark().unwrap();

        state.host.set_frame(99.0);
        state.host.set_selection(&names(&["D"]));

        state.recall_bookmark(0).unwrap();
        assert_eq!(state.host.current_selection(), names(&["A", "B"]));
        assert_eq!(state.host.current_frame(), 24.0);
    }

    #[test]
    fn test_recall_empty_ref_clears_selection() {
        let mut state = scene_state();
        state.host.set_frame(10.0);
        state.add_bookmark().unwrap();

        state.host.set_selection(&names(&["D"]));
        state.host.set_frame(50.0);

        state.recall_bookmark(0).unwrap();
        assert!(state.host.current_selection().is_empty());
        assert_eq!(state.host.current_frame(), 10.0);
    }

    #[test]
    fn test_recall_malformed_ref_leaves_host_untouched() {
        let mut state = scene_state();
        state.host.set_selection(&names(&["A"]));
        state.add_bookmark().unwrap();
        state.bookmarks[0].object_ref = "[broken".to_string();

        state.host.set_frame(77.0);
        let result = state.recall_bookmark(0);
        assert!(result.is_err());
        assert_eq!(state.host.current_frame(), 77.0);
        assert_eq!(state.host.current_selection(), names(&["A"]));
    }

    #[test]
    fn test_toggle_mark_twice_restores_state() {
        let mut state = scene_state();
        state.add_bookmark().unwrap();
        assert!(!state.bookmarks[0].marked);

        state.toggle_mark(0).unwrap();
        assert!(state.bookmarks[0].marked);

        state.toggle_mark(0).unwrap();
        assert!(!state.bookmarks[0].marked);
    }

    #[test]
    fn test_toggle_mark_unknown_index_is_err() {
        let mut state = scene_state();
        assert_eq!(state.toggle_mark(3).unwrap_err(), "No bookmark 4");
    }

    #[test]
    fn test_edit_commit_overwrites_record() {
        let mut state = scene_state();
        state.host.set_frame(24.0);
        state.host.set_selection(&names(&["A", "B"]));
        state.add_bookmark().unwrap();

        state.open_edit_dialog(0).unwrap();
        assert_eq!(state.mode, AppMode::Edit);
        assert_eq!(
            state.edit_dialog_state().names(),
            names(&["A", "B"]).as_slice()
        );

        // Reduce the list to ["C"] and move the frame.
        state.edit_dialog_state_mut().objects = names(&["C"]);
        state.edit_dialog_state_mut().frame_input = "30.0".to_string();
        state.commit_edit_dialog().unwrap();

        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.bookmarks[0].object_ref, "C");
        assert_eq!(state.bookmarks[0].frame, "30.0");
        assert!(state.edit_dialog_state().names().is_empty());
    }

    #[test]
    fn test_edit_cancel_leaves_record_and_clears_list() {
        let mut state = scene_state();
        state.host.set_selection(&names(&["A", "B"]));
        state.add_bookmark().unwrap();
        let before = state.bookmarks[0].clone();

        state.open_edit_dialog(0).unwrap();
        state.edit_dialog_state_mut().objects = names(&["C"]);
        state.cancel_edit_dialog();

        assert_eq!(state.bookmarks[0], before);
        assert!(state.edit_dialog_state().names().is_empty());
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn test_edit_commit_invalid_frame_keeps_dialog_open() {
        let mut state = scene_state();
        state.host.set_selection(&names(&["A"]));
        state.add_bookmark().unwrap();

        state.open_edit_dialog(0).unwrap();
        state.edit_dialog_state_mut().frame_input = "not_a_frame".to_string();
        assert!(state.commit_edit_dialog().is_err());
        assert_eq!(state.mode, AppMode::Edit);
        assert_eq!(state.bookmarks[0].object_ref, "A");
    }

    #[test]
    fn test_edit_commit_frame_out_of_range_is_err() {
        let mut state = scene_state();
        state.host.set_selection(&names(&["A"]));
        state.add_bookmark().unwrap();

        state.open_edit_dialog(0).unwrap();
        state.edit_dialog_state_mut().frame_input = "100001".to_string();
        assert!(state.commit_edit_dialog().is_err());
    }

    #[test]
    fn test_open_edit_dialog_malformed_ref_is_err() {
        let mut state = scene_state();
        state.add_bookmark().unwrap();
        state.bookmarks[0].object_ref = "[broken".to_string();
        assert!(state.open_edit_dialog(0).is_err());
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn test_select_objects_rejects_unknown_names() {
        let mut state = scene_state();
        let result = state.select_objects(&names(&["A", "ghost"]));
        assert_eq!(result.unwrap_err(), "Unknown object(s): ghost");
        assert!(state.host.current_selection().is_empty());
    }

    #[test]
    fn test_goto_frame_bounds() {
        let mut state = scene_state();
        assert!(state.goto_frame(-1.0).is_err());
        assert!(state.goto_frame(100_001.0).is_err());
        state.goto_frame(48.0).unwrap();
        assert_eq!(state.host.current_frame(), 48.0);
    }

    #[test]
    fn test_step_frame_clamps_at_zero() {
        let mut state = scene_state();
        state.host.set_frame(0.5);
        state.step_frame(-1.0);
        assert_eq!(state.host.current_frame(), 0.0);
    }

    #[test]
    fn test_toggle_scene_object_round_trip() {
        let mut state = scene_state();
        state.scene_cursor = 1;
        state.toggle_scene_object().unwrap();
        assert_eq!(state.host.current_selection(), names(&["B"]));
        state.toggle_scene_object().unwrap();
        assert!(state.host.current_selection().is_empty());
    }

    #[test]
    fn test_finder_accept_rewrites_selection() {
        let mut state = scene_state();
        state.open_finder();
        assert_eq!(state.mode, AppMode::Finder);
        state.finder_state_mut().toggle_picked();
        state.accept_finder().unwrap();
        assert_eq!(state.host.current_selection(), names(&["A"]));
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn test_table_cursor_wraps() {
        let mut state = scene_state();
        state.add_bookmark().unwrap();
        state.add_bookmark().unwrap();
        state.table_cursor = 1;
        state.table_cursor_next();
        assert_eq!(state.table_cursor, 0);
        state.table_cursor_previous();
        assert_eq!(state.table_cursor, 1);
    }
}
