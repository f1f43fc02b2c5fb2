/// Severity of a status-line message. Warnings cover the non-fatal cases
/// (e.g. adding a bookmark while nothing is selected); errors abort the
/// operation that produced them.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum MessageLevel {
    #[default]
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Message {
    pub level: MessageLevel,
    pub text: String,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            text: text.into(),
        }
    }
}

/// Editing state of the `:` command line, plus the last status message shown
/// on it. The message persists after the console closes so key-driven
/// operations can report through the same line.
#[derive(Default)]
pub struct ConsoleState {
    pub input_buffer: String,
    pub cursor_position: usize,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
    pub message: Option<Message>,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, c: char) {
        self.input_buffer.insert(self.cursor_position, c);
        self.cursor_position += 1;
    }

    pub fn delete(&mut self) {
        if self.cursor_position < self.input_buffer.len() {
            self.input_buffer.remove(self.cursor_position);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            self.input_buffer.remove(self.cursor_position);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input_buffer.len() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_start(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.input_buffer.len();
    }

    /// Reset the input line, keeping history and the last message.
    pub fn reset_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.history_index = None;
    }

    /// Route an operation outcome to the status line.
    pub fn report(&mut self, outcome: Result<Message, String>) {
        self.message = Some(match outcome {
            Ok(message) => message,
            Err(text) => Message::error(text),
        });
    }

    pub fn add_to_history(&mut self) {
        if !self.input_buffer.is_empty() {
            self.history.push(self.input_buffer.clone());
            self.history_index = None;
        }
    }

    pub fn previous_history(&mut self) {
        if let Some(index) = self.history_index {
            if index > 0 {
                self.history_index = Some(index - 1);
                self.input_buffer = self.history[index - 1].clone();
                self.cursor_position = self.input_buffer.len();
            }
        } else if !self.history.is_empty() {
            self.history_index = Some(self.history.len() - 1);
            self.input_buffer = self.history[self.history.len() - 1].clone();
            self.cursor_position = self.input_buffer.len();
        }
    }

    pub fn next_history(&mut self) {
        if let Some(index) = self.history_index {
            if index + 1 < self.history.len() {
                self.history_index = Some(index + 1);
                self.input_buffer = self.history[index + 1].clone();
                self.cursor_position = self.input_buffer.len();
            } else {
                self.history_index = None;
                self.input_buffer.clear();
                self.cursor_position = 0;
            }
        } else if !self.history.is_empty() {
            self.history_index = Some(0);
            self.input_buffer = self.history[0].clone();
            self.cursor_position = self.input_buffer.len();
        }
    }
}
