use crate::{config, state::AppState, types::PanelFocus};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, StatefulWidget, Table, Widget},
};

/// The bookmark records as a table, one row per record: check state, record
/// number, frame, and the (possibly abbreviated) object reference. Marked
/// records take the alert color on their frame cell.
#[derive(Default, Copy, Clone)]
pub struct BookmarkTableWidget {}

impl StatefulWidget for BookmarkTableWidget {
    type State = AppState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let ui = config::read_config().ui;
        let focused = state.focus == PanelFocus::Bookmarks;
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        if !state.bookmarks.is_empty() && state.table_cursor >= state.bookmarks.len() {
            state.table_cursor = state.bookmarks.len() - 1;
        }

        let rows: Vec<Row> = state
            .bookmarks
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let check = if state.checked.contains(&index) {
                    "[x]"
                } else {
                    "[ ]"
                };
                let frame_color = if record.marked {
                    ui.marked_color()
                } else {
                    ui.unmarked_color()
                };
                let mut row = Row::new(vec![
                    Cell::from(check),
                    Cell::from(format!("{}", index + 1)),
                    Cell::from(record.frame.clone())
                        .style(Style::default().fg(frame_color)),
                    Cell::from(record.display_ref()),
                ]);
                if focused && index == state.table_cursor {
                    row = row.style(Style::default().add_modifier(Modifier::REVERSED));
                }
                row
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(10),
                Constraint::Min(10),
            ],
        )
        .header(
            Row::new(vec!["", "#", "frame", "objects"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .title("Bookmarks")
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        Widget::render(table, area, buf);
    }
}
