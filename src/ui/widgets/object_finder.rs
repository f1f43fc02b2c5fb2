use crate::{finder::FinderStateAccess, state::AppState, ui::layout::create_centered_rect};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, StatefulWidget, Widget},
};

/// Fuzzy-search popup over the scene roster; accepted picks replace the host
/// selection.
#[derive(Default, Copy, Clone)]
pub struct ObjectFinderWidget {}

impl StatefulWidget for &mut ObjectFinderWidget {
    type State = AppState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let popup_area = create_centered_rect(area.width.min(70), area.height.min(24), area);
        Clear.render(popup_area, buf);

        let block = Block::default().title("Object Finder").borders(Borders::ALL);
        let inner_area = block.inner(popup_area);
        block.render(popup_area, buf);

        // Query line.
        let query_text = format!("> {}", state.finder_state().query);
        Paragraph::new(Span::styled(query_text, Style::default().fg(Color::Yellow))).render(
            Rect::new(inner_area.x, inner_area.y, inner_area.width, 1),
            buf,
        );

        // Pick count.
        let info_text = format!(
            "Picked: {}/{}",
            state.finder_state().picked.len(),
            state.finder_state().all_objects.len()
        );
        Paragraph::new(Span::styled(info_text, Style::default().fg(Color::Cyan))).render(
            Rect::new(inner_area.x, inner_area.y + 1, inner_area.width, 1),
            buf,
        );

        // Filtered roster.
        let list_area = Rect::new(
            inner_area.x,
            inner_area.y + 2,
            inner_area.width,
            inner_area.height.saturating_sub(3),
        );
        let items: Vec<ListItem> = state
            .finder_state()
            .filtered_objects
            .iter()
            .map(|name| {
                let prefix = if state.finder_state().picked.contains(name) {
                    "[x] "
                } else {
                    "[ ] "
                };
                ListItem::new(format!("{}{}", prefix, name))
            })
            .collect();
        let list = List::new(items).highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let mut list_state = state.finder_state_mut().list_state.clone();
        StatefulWidget::render(list, list_area, buf, &mut list_state);
        state.finder_state_mut().list_state = list_state;

        // Key legend.
        let legend = "Up/Down: Navigate | Tab: Toggle | Enter: Apply | Esc: Cancel";
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
