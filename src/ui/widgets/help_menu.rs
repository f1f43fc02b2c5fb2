use crate::{config, state::AppState};
use crossterm::event::KeyCode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, StatefulWidget, Widget},
};

#[derive(Default, Copy, Clone)]
pub struct HelpMenuWidget {}

impl HelpMenuWidget {
    fn key_to_string(self, key: &KeyCode) -> String {
        match key {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => format!("'{}'", c),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", key),
        }
    }
}

impl StatefulWidget for HelpMenuWidget {
    type State = AppState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if !state.show_help {
            return;
        }

        // Clear the whole screen so only the help text is visible.
        Clear.render(area, buf);

        let keybinds = config::read_config().keybindings;
        let help_text = format!(
            "FrameMark Keyboard Controls\n\n\
            {} - Show this reference (any key closes it)\n\
            {} - Quit\n\
            {} - Open the command console\n\
            {}/{} - Move the cursor in the focused panel\n\
            {} - Switch between bookmarks and scene panels\n\
            {} - Bookmark the current selection and frame\n\
            {} - Check/uncheck the record (or toggle the scene object)\n\
            {} - Remove the checked records\n\
            {} - Recall the record under the cursor\n\
            {} - Toggle the record's mark\n\
            {} - Edit the record under the cursor\n\
            {} - Open the object finder\n\
            {}/{} - Step the playhead back/forward",
            self.key_to_string(&keybinds.help),
            self.key_to_string(&keybinds.quit),
            self.key_to_string(&keybinds.enter_command_mode),
            self.key_to_string(&keybinds.up),
            self.key_to_string(&keybinds.down),
            self.key_to_string(&keybinds.switch_panel),
            self.key_to_string(&keybinds.add_bookmark),
            self.key_to_string(&keybinds.toggle_checked),
            self.key_to_string(&keybinds.remove_checked),
            self.key_to_string(&keybinds.recall),
            self.key_to_string(&keybinds.toggle_mark),
            self.key_to_string(&keybinds.edit_bookmark),
            self.key_to_string(&keybinds.open_finder),
            self.key_to_string(&keybinds.step_back),
            self.key_to_string(&keybinds.step_forward)
        );

        Paragraph::new(help_text)
            .block(Block::default().title("Help").borders(Borders::ALL))
            .style(Style::default())
            .render(area, buf);
    }
}
