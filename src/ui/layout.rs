use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Default)]
pub struct AppLayout {
    pub title: Rect,
    pub scene_list: Rect,
    pub bookmark_table: Rect,
    pub status: Rect,
}

pub fn create_layout(area: Rect, scene_list_width: u16) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(area);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(scene_list_width), Constraint::Min(0)].as_ref())
        .split(main_chunks[1]);

    AppLayout {
        title: main_chunks[0],
        scene_list: content_chunks[0],
        bookmark_table: content_chunks[1],
        status: main_chunks[2],
    }
}

// For modal popups: a fixed-size rect centered in `r`, clamped to fit.
pub fn create_centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
