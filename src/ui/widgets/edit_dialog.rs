use crate::{
    edit_dialog::{state::EditFocus, EditDialogStateAccess},
    state::AppState,
    ui::layout::create_centered_rect,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

/// Modal editor for one record: a frame field on top, the object list under
/// it, and a key legend at the bottom.
#[derive(Default, Copy, Clone)]
pub struct EditDialogWidget {}

impl StatefulWidget for EditDialogWidget {
    type State = AppState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let popup_area = create_centered_rect(48, 16, area);
        Clear.render(popup_area, buf);

        let block = Block::default().title("Edit Bookmark").borders(Borders::ALL);
        let inner_area = block.inner(popup_area);
        block.render(popup_area, buf);

        let dialog = state.edit_dialog_state();
        let frame_focused = dialog.focus == EditFocus::Frame;

        // Frame field.
        let frame_style = if frame_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let frame_line = format!("Frame:   {}", dialog.frame_input);
        Paragraph::new(Span::styled(frame_line.clone(), frame_style)).render(
            Rect::new(inner_area.x, inner_area.y, inner_area.width, 1),
            buf,
        );
        if frame_focused {
            let cursor_x = inner_area.x + frame_line.len() as u16;
            if cursor_x < inner_area.right() {
                let cell = &mut buf[(cursor_x, inner_area.y)];
                cell.set_bg(Color::Yellow);
                cell.set_fg(Color::Black);
            }
        }

        // Object list.
        let objects_title_style = if frame_focused {
            Style::default()
        } else {
            Style::default().fg(Color::Yellow)
        };
        Paragraph::new(Span::styled("Objects:", objects_title_style)).render(
            Rect::new(inner_area.x, inner_area.y + 1, inner_area.width, 1),
            buf,
        );

        let list_area = Rect::new(
            inner_area.x,
            inner_area.y + 2,
            inner_area.width,
            inner_area.height.saturating_sub(3),
        );
        let items: Vec<ListItem> = dialog
            .objects
            .iter()
            .map(|name| ListItem::new(name.as_str()))
            .collect();
        let highlight_style = if frame_focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        };
        let list = List::new(items).highlight_style(highlight_style);
        let mut list_state = ListState::default();
        list_state.select(dialog.selected);
        StatefulWidget::render(list, list_area, buf, &mut list_state);

        // Key legend.
        let legend =
            "Tab: Field | a: Add Selection | d: Remove | c: Capture Frame | Enter: OK | Esc: Cancel";
        Paragraph::new(Span::styled(legend, Style::default().fg(Color::DarkGray))).render(
            Rect::new(
                inner_area.x,
                inner_area.bottom().saturating_sub(1),
                inner_area.width,
                1,
            ),
            buf,
        );
    }
}
