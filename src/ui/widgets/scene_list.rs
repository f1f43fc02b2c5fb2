use crate::{host::SceneHost, state::AppState, types::PanelFocus};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, StatefulWidget, Widget},
};

/// The stand-in viewport: every object the host scene knows about, with the
/// host's live selection called out.
#[derive(Default, Copy, Clone)]
pub struct SceneListWidget {}

impl StatefulWidget for SceneListWidget {
    type State = AppState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let focused = state.focus == PanelFocus::Scene;
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title("Scene")
            .borders(Borders::ALL)
            .border_style(border_style);

        let objects = state.host.scene_objects();
        if state.scene_cursor >= objects.len() {
            state.scene_cursor = objects.len().saturating_sub(1);
        }
        let selection = state.host.current_selection();

        let items: Vec<ListItem> = objects
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let selected = selection.contains(name);
                let prefix = if selected { "* " } else { "  " };
                let mut style = if selected {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                };
                if focused && index == state.scene_cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                ListItem::new(format!("{}{}", prefix, name)).style(style)
            })
            .collect();

        Widget::render(List::new(items).block(block), area, buf);
    }
}
