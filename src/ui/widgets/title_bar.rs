use crate::{host::SceneHost, state::AppState, types::frame_text};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

#[derive(Default, Copy, Clone)]
pub struct TitleBarWidget {}

impl StatefulWidget for TitleBarWidget {
    type State = AppState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let (start, end) = state.host.frame_range();
        let title = format!(
            "FrameMark | Frame: {} [{}-{}] | Selected: {} | Bookmarks: {}",
            frame_text(state.host.current_frame()),
            frame_text(start),
            frame_text(end),
            state.host.current_selection().len(),
            state.bookmarks.len()
        );

        Paragraph::new(title)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White))
            .render(area, buf);
    }
}
