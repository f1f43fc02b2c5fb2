pub mod layout;
mod widgets;

use crate::{config, state::AppState, types::AppMode};
use layout::create_layout;
use widgets::*;

// Main draw function that coordinates all UI components.
pub fn draw(state: &mut AppState, frame: &mut ratatui::Frame<'_>) {
    let area = frame.area();

    if state.show_help {
        frame.render_stateful_widget(HelpMenuWidget::default(), area, state);
        return;
    }

    let scene_list_width = config::read_config().ui.scene_list_width;
    let layout = create_layout(area, scene_list_width);

    frame.render_stateful_widget(TitleBarWidget::default(), layout.title, state);
    frame.render_stateful_widget(SceneListWidget::default(), layout.scene_list, state);
    frame.render_stateful_widget(BookmarkTableWidget::default(), layout.bookmark_table, state);
    frame.render_stateful_widget(StatusBarWidget::default(), layout.status, state);

    match state.mode {
        AppMode::Edit => frame.render_stateful_widget(EditDialogWidget::default(), area, state),
        AppMode::Finder => {
            frame.render_stateful_widget(&mut ObjectFinderWidget::default(), area, state)
        }
        _ => {}
    }
}
