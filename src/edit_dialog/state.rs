use crate::parsers::object_ref;

/// Which dialog field receives keys.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum EditFocus {
    #[default]
    Frame,
    Objects,
}

/// Transient state of the modal bookmark editor: a frame text field and the
/// ordered object-name list being edited. Rebuilt when the dialog opens and
/// cleared when it closes, whatever the outcome.
#[derive(Default)]
pub struct EditDialogState {
    /// Index of the record being edited, None while the dialog is closed.
    pub target: Option<usize>,
    pub frame_input: String,
    pub objects: Vec<String>,
    /// Cursor into `objects`, None when the list is empty.
    pub selected: Option<usize>,
    pub focus: EditFocus,
}

impl EditDialogState {
    /// Open the dialog for one record: the stored frame text goes to the
    /// field verbatim, the decoded names rebuild the list.
    pub fn load(&mut self, target: usize, frame: &str, names: Vec<String>) {
        self.target = Some(target);
        self.frame_input = frame.to_string();
        self.selected = if names.is_empty() { None } else { Some(0) };
        self.objects = names;
        self.focus = EditFocus::Frame;
    }

    /// Append names as-is. No uniqueness check: adding the same reference
    /// twice keeps both entries.
    pub fn add_names(&mut self, names: &[String]) {
        self.objects.extend(names.iter().cloned());
        if self.selected.is_none() && !self.objects.is_empty() {
            self.selected = Some(0);
        }
    }

    /// Remove the entry under the cursor; no-op when the list is empty.
    pub fn remove_selected(&mut self) {
        if let Some(index) = self.selected {
            if index < self.objects.len() {
                self.objects.remove(index);
            }
            self.selected = if self.objects.is_empty() {
                None
            } else {
                Some(index.min(self.objects.len() - 1))
            };
        }
    }

    pub fn select_next(&mut self) {
        if let Some(index) = self.selected {
            let last = self.objects.len().saturating_sub(1);
            self.selected = Some(if index >= last { 0 } else { index + 1 });
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(index) = self.selected {
            let last = self.objects.len().saturating_sub(1);
            self.selected = Some(if index == 0 { last } else { index - 1 });
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            EditFocus::Frame => EditFocus::Objects,
            EditFocus::Objects => EditFocus::Frame,
        };
    }

    /// Frame field editing: digits and one decimal point only.
    pub fn frame_input_char(&mut self, c: char) {
        if c.is_ascii_digit() || (c == '.' && !self.frame_input.contains('.')) {
            self.frame_input.push(c);
        }
    }

    pub fn frame_input_backspace(&mut self) {
        self.frame_input.pop();
    }

    /// The list contents in order, unmodified.
    pub fn names(&self) -> &[String] {
        &self.objects
    }

    /// Re-encode the list for storage, mirroring the decode rule.
    pub fn encoded_ref(&self) -> String {
        object_ref::encode(&self.objects)
    }

    /// Drop everything the dialog holds.
    pub fn clear(&mut self) {
        self.target = None;
        self.frame_input.clear();
        self.objects.clear();
        self.selected = None;
        self.focus = EditFocus::Frame;
    }
}
