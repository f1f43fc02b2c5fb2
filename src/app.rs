use crate::{commands, console::ConsoleWidget, host::SceneHost, input, state::AppState, ui};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::io;
use std::time::Duration;

/// Event-loop tick rate. The panel is purely reactive, so this only bounds
/// how quickly an exit request is noticed.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct App {
    pub state: AppState,
    pub console: ConsoleWidget<AppState>,
}

impl App {
    /// Wire the panel to a scene. The host handle is the only way the panel
    /// touches the outside world.
    pub fn new(host: Box<dyn SceneHost>) -> Self {
        let mut console = ConsoleWidget::new();
        commands::register_all(&mut console);
        Self {
            state: AppState::with_host(host),
            console,
        }
    }

    pub fn run(&mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| ui::draw(&mut self.state, frame))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        input::handler::handle_key(self, key.code);
                    }
                }
            }
        }
        Ok(())
    }
}
