use crate::app::App;
use crate::config::{self, KeybindingsConfig};
use crate::constants::FRAME_STEP;
use crate::edit_dialog::{state::EditFocus, EditDialogStateAccess};
use crate::finder::FinderStateAccess;
use crate::types::{AppMode, PanelFocus};
use crossterm::event::KeyCode;

pub fn handle_key(app: &mut App, key: KeyCode) {
    let keybinds = config::read_config().keybindings;
    match app.state.mode {
        AppMode::Normal => handle_normal_mode(app, key, &keybinds),
        AppMode::Command => handle_command_mode(app, key, &keybinds),
        AppMode::Edit => handle_edit_mode(app, key, &keybinds),
        AppMode::Finder => handle_finder_mode(app, key, &keybinds),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyCode, keybinds: &KeybindingsConfig) {
    let state = &mut app.state;

    if state.show_help {
        if key == keybinds.quit {
            state.exit = true;
        } else {
            state.show_help = false;
        }
        return;
    }

    match key {
        k if k == keybinds.quit => state.exit = true,
        k if k == keybinds.help => state.show_help = true,
        k if k == keybinds.enter_command_mode => state.open_console(),
        k if k == keybinds.open_finder => state.open_finder(),
        k if k == keybinds.switch_panel => {
            state.focus = match state.focus {
                PanelFocus::Bookmarks => PanelFocus::Scene,
                PanelFocus::Scene => PanelFocus::Bookmarks,
            };
        }
        k if k == keybinds.add_bookmark => {
            let outcome = state.add_bookmark();
            state.report(outcome);
        }
        k if k == keybinds.remove_checked => {
            let outcome = state.remove_checked();
            state.report(outcome);
        }
        k if k == keybinds.toggle_mark => {
            let cursor = state.table_cursor;
            let outcome = state.toggle_mark(cursor);
            state.report(outcome);
        }
        k if k == keybinds.edit_bookmark => {
            let cursor = state.table_cursor;
            let outcome = state.open_edit_dialog(cursor);
            state.report(outcome);
        }
        k if k == keybinds.step_back => state.step_frame(-FRAME_STEP),
        k if k == keybinds.step_forward => state.step_frame(FRAME_STEP),
        k if k == keybinds.up => match state.focus {
            PanelFocus::Bookmarks => state.table_cursor_previous(),
            PanelFocus::Scene => state.scene_cursor_previous(),
        },
        k if k == keybinds.down => match state.focus {
            PanelFocus::Bookmarks => state.table_cursor_next(),
            PanelFocus::Scene => state.scene_cursor_next(),
        },
        k if k == keybinds.toggle_checked => match state.focus {
            PanelFocus::Bookmarks => state.toggle_checked(),
            PanelFocus::Scene => {
                let outcome = state.toggle_scene_object();
                state.report(outcome);
            }
        },
        k if k == keybinds.recall => match state.focus {
            PanelFocus::Bookmarks => {
                let cursor = state.table_cursor;
                let outcome = state.recall_bookmark(cursor);
                state.report(outcome);
            }
            PanelFocus::Scene => {
                let outcome = state.isolate_scene_object();
                state.report(outcome);
            }
        },
        _ => {}
    }
}

fn handle_command_mode(app: &mut App, key: KeyCode, keybinds: &KeybindingsConfig) {
    match key {
        k if k == keybinds.enter_normal_mode => app.state.close_console(),
        k if k == keybinds.execute_command => {
            app.console.execute(&mut app.state);
            // A command may have opened a modal; only drop back to normal
            // mode when none did.
            if app.state.mode == AppMode::Command {
                app.state.mode = AppMode::Normal;
            }
        }
        _ => app.console.handle_input(key, &mut app.state),
    }
}

fn handle_edit_mode(app: &mut App, key: KeyCode, keybinds: &KeybindingsConfig) {
    let state = &mut app.state;
    match key {
        k if k == keybinds.enter_normal_mode => state.cancel_edit_dialog(),
        k if k == keybinds.execute_command => {
            let outcome = state.commit_edit_dialog();
            state.report(outcome);
        }
        k if k == keybinds.switch_panel => state.edit_dialog_state_mut().toggle_focus(),
        _ => match state.edit_dialog_state().focus {
            EditFocus::Frame => match key {
                KeyCode::Char(c) => state.edit_dialog_state_mut().frame_input_char(c),
                KeyCode::Backspace => state.edit_dialog_state_mut().frame_input_backspace(),
                _ => {}
            },
            EditFocus::Objects => match key {
                k if k == keybinds.up => state.edit_dialog_state_mut().select_previous(),
                k if k == keybinds.down => state.edit_dialog_state_mut().select_next(),
                KeyCode::Char('a') => {
                    let outcome = state.add_selection_to_dialog();
                    state.report(outcome);
                }
                KeyCode::Char('d') | KeyCode::Delete => {
                    state.edit_dialog_state_mut().remove_selected()
                }
                KeyCode::Char('c') => {
                    let outcome = state.capture_dialog_frame();
                    state.report(outcome);
                }
                _ => {}
            },
        },
    }
}

fn handle_finder_mode(app: &mut App, key: KeyCode, keybinds: &KeybindingsConfig) {
    let state = &mut app.state;
    match key {
        k if k == keybinds.enter_normal_mode => state.cancel_finder(),
        k if k == keybinds.execute_command => {
            let outcome = state.accept_finder();
            state.report(outcome);
        }
        k if k == keybinds.up => state.finder_state_mut().select_previous(),
        k if k == keybinds.down => state.finder_state_mut().select_next(),
        k if k == keybinds.switch_panel => state.finder_state_mut().toggle_picked(),
        KeyCode::Backspace => state.finder_state_mut().backspace(),
        KeyCode::Char(c) => state.finder_state_mut().input_char(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{ConsoleStateAccess, MessageLevel};
    use crate::host::{SceneHost, SessionHost};

    fn get_app() -> App {
        App::new(Box::new(SessionHost::sample()))
    }

    fn press(app: &mut App, key: KeyCode) {
        handle_key(app, key);
    }

    fn type_line(app: &mut App, line: &str) {
        for c in line.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_add_key_creates_bookmark() {
        let mut app = get_app();
        app.state.host.set_frame(24.0);
        app.state.host.set_selection(&["root_ctrl".to_string()]);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.state.bookmarks.len(), 1);
        assert_eq!(app.state.bookmarks[0].frame, "24.0");
    }

    #[test]
    fn test_console_round_trip_executes_command() {
        let mut app = get_app();
        press(&mut app, KeyCode::Char(':'));
        assert_eq!(app.state.mode, AppMode::Command);

        type_line(&mut app, "add");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.mode, AppMode::Normal);
        assert_eq!(app.state.bookmarks.len(), 1);
        // Empty selection: the add is reported as a warning.
        assert_eq!(
            app.state.console_state().message.as_ref().unwrap().level,
            MessageLevel::Warning
        );
    }

    #[test]
    fn test_escape_leaves_console_without_running() {
        let mut app = get_app();
        press(&mut app, KeyCode::Char(':'));
        type_line(&mut app, "add");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.mode, AppMode::Normal);
        assert!(app.state.bookmarks.is_empty());
    }

    #[test]
    fn test_edit_console_command_opens_dialog() {
        let mut app = get_app();
        app.state.host.set_selection(&["root_ctrl".to_string()]);
        press(&mut app, KeyCode::Char('a'));

        press(&mut app, KeyCode::Char(':'));
        type_line(&mut app, "edit 1");
        press(&mut app, KeyCode::Enter);
        // The command switched modes; the handler must not drop it back.
        assert_eq!(app.state.mode, AppMode::Edit);
    }

    #[test]
    fn test_edit_dialog_commit_from_keys() {
        let mut app = get_app();
        app.state.host.set_frame(10.0);
        app.state.host.set_selection(&["root_ctrl".to_string()]);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.state.mode, AppMode::Edit);

        // Retype the frame as 48.0 and confirm.
        for _ in 0..4 {
            press(&mut app, KeyCode::Backspace);
        }
        type_line(&mut app, "48.0");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state.mode, AppMode::Normal);
        assert_eq!(app.state.bookmarks[0].frame, "48.0");
    }

    #[test]
    fn test_edit_dialog_escape_cancels() {
        let mut app = get_app();
        app.state.host.set_selection(&["root_ctrl".to_string()]);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('e'));
        type_line(&mut app, "99");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.mode, AppMode::Normal);
        assert_eq!(app.state.bookmarks[0].frame, "1.0");
    }

    #[test]
    fn test_scene_panel_space_toggles_host_selection() {
        let mut app = get_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state.focus, PanelFocus::Scene);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(
            app.state.host.current_selection(),
            vec!["root_ctrl".to_string()]
        );

        press(&mut app, KeyCode::Char(' '));
        assert!(app.state.host.current_selection().is_empty());
    }

    #[test]
    fn test_quit_key_exits() {
        let mut app = get_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.state.exit);
    }

    #[test]
    fn test_help_overlay_opens_and_any_key_closes() {
        let mut app = get_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.state.show_help);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.state.show_help);
    }

    #[test]
    fn test_step_keys_move_playhead() {
        let mut app = get_app();
        app.state.host.set_frame(10.0);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state.host.current_frame(), 11.0);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.state.host.current_frame(), 9.0);
    }
}
