use crossterm::event::KeyCode;

pub fn enter_command_mode() -> KeyCode {
    KeyCode::Char(':')
}

pub fn enter_normal_mode() -> KeyCode {
    KeyCode::Esc
}

pub fn execute_command() -> KeyCode {
    KeyCode::Enter
}

pub fn up() -> KeyCode {
    KeyCode::Up
}

pub fn down() -> KeyCode {
    KeyCode::Down
}

pub fn step_back() -> KeyCode {
    KeyCode::Left
}

pub fn step_forward() -> KeyCode {
    KeyCode::Right
}

pub fn switch_panel() -> KeyCode {
    KeyCode::Tab
}

pub fn add_bookmark() -> KeyCode {
    KeyCode::Char('a')
}

pub fn remove_checked() -> KeyCode {
    KeyCode::Char('d')
}

pub fn toggle_checked() -> KeyCode {
    KeyCode::Char(' ')
}

pub fn toggle_mark() -> KeyCode {
    KeyCode::Char('m')
}

pub fn edit_bookmark() -> KeyCode {
    KeyCode::Char('e')
}

pub fn recall() -> KeyCode {
    KeyCode::Enter
}

pub fn open_finder() -> KeyCode {
    KeyCode::Char('f')
}

pub fn help() -> KeyCode {
    KeyCode::Char('?')
}

pub fn quit() -> KeyCode {
    KeyCode::Char('q')
}
