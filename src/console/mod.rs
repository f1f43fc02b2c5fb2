pub mod builder;
pub mod registry;
pub mod state;

use crossterm::event::KeyCode;
use registry::{Command, CommandRegistry};
use state::ConsoleState;
use std::rc::Rc;

pub use state::{Message, MessageLevel};

/// Lets the console reach its slice of a larger app state without owning it.
pub trait ConsoleStateAccess {
    fn console_state(&self) -> &ConsoleState;
    fn console_state_mut(&mut self) -> &mut ConsoleState;
}

/// The `:` command line: an editing buffer plus the registry of commands a
/// submitted line dispatches into.
pub struct ConsoleWidget<S> {
    registry: CommandRegistry<S>,
}

impl<S> ConsoleWidget<S> {
    pub fn new() -> Self {
        Self {
            registry: CommandRegistry::new(),
        }
    }

    pub fn register(&mut self, command: Rc<Box<dyn Command<S>>>) {
        self.registry.register(command);
    }

    pub fn registry(&self) -> &CommandRegistry<S> {
        &self.registry
    }

    pub fn handle_input(&mut self, key: KeyCode, app_state: &mut S)
    where
        S: ConsoleStateAccess,
    {
        let console = app_state.console_state_mut();
        match key {
            KeyCode::Left => console.move_cursor_left(),
            KeyCode::Right => console.move_cursor_right(),
            KeyCode::Home => console.move_cursor_start(),
            KeyCode::End => console.move_cursor_end(),
            KeyCode::Backspace => console.backspace(),
            KeyCode::Delete => console.delete(),
            KeyCode::Char(c) => console.insert(c),
            KeyCode::Up => console.previous_history(),
            KeyCode::Down => console.next_history(),
            _ => {}
        }
    }

    /// Dispatch the current input line. Returns false when the line was
    /// empty and there was nothing to run.
    pub fn execute(&mut self, app_state: &mut S) -> bool
    where
        S: ConsoleStateAccess + 'static,
    {
        let line = app_state.console_state().input_buffer.clone();
        if line.is_empty() {
            return false;
        }

        app_state.console_state_mut().add_to_history();
        let outcome = self.registry.dispatch(&line, app_state);

        let console = app_state.console_state_mut();
        console.report(outcome);
        console.reset_input();
        true
    }
}
