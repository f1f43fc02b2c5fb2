use crate::{
    console::{ConsoleStateAccess, MessageLevel},
    state::AppState,
    types::AppMode,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

/// Bottom line of the panel: the `:` input while the console is open,
/// otherwise the last status message, otherwise a usage hint.
#[derive(Default, Copy, Clone)]
pub struct StatusBarWidget {}

impl StatefulWidget for StatusBarWidget {
    type State = AppState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .title(format!("{:?}", state.mode))
            .borders(Borders::TOP);
        let inner_area = block.inner(area);
        block.render(area, buf);

        let (text, style) = if state.mode == AppMode::Command {
            (
                format!(":{}", state.console_state().input_buffer),
                Style::default().fg(Color::Yellow),
            )
        } else if let Some(message) = &state.console_state().message {
            let color = match message.level {
                MessageLevel::Info => Color::Green,
                MessageLevel::Warning => Color::Yellow,
                MessageLevel::Error => Color::Red,
            };
            (message.text.clone(), Style::default().fg(color))
        } else {
            (
                " ':' for commands. :q <Enter> to quit, '?' for help.".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        };

        Paragraph::new(text).style(style).render(inner_area, buf);

        // While the console is open, paint a block cursor at the insertion
        // point.
        if state.mode == AppMode::Command {
            let cursor_x = inner_area.x + 1 + state.console_state().cursor_position as u16;
            let cursor_y = inner_area.y;
            if cursor_x < inner_area.right() && cursor_y < buf.area().height {
                let cell = &mut buf[(cursor_x, cursor_y)];
                cell.set_bg(Color::Yellow);
                cell.set_fg(Color::Black);
            }
        }
    }
}
