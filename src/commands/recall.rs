use super::parse_record_number;
use crate::{
    console::{builder::CommandBuilder, registry::Command},
    state::AppState,
};
use std::rc::Rc;

pub fn create() -> Rc<Box<dyn Command<AppState>>> {
    CommandBuilder::new(
        "recall",
        "Re-select a record's objects and jump to its frame",
        |args, state: &mut AppState| match args {
            [number] => state.recall_bookmark(parse_record_number(number)?),
            _ => Err("Usage: recall <record>".to_string()),
        },
    )
    .alias("r")
    .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{SceneHost, SessionHost};

    fn get_state() -> AppState {
        let mut state = AppState::with_host(Box::new(SessionHost::sample()));
        state.host.set_frame(24.0);
        state.host.set_selection(&["head_ctrl".to_string()]);
        state.add_bookmark().unwrap();
        state
    }

    #[test]
    fn test_recall_missing_arg_is_err() {
        let command = create();
        let mut state = get_state();
        let result = command.execute(&[], &mut state);
        assert_eq!(result.unwrap_err(), "Usage: recall <record>".to_string());
    }

    #[test]
    fn test_recall_applies_record() {
        let command = create();
        let mut state = get_state();
        state.host.set_frame(1.0);
        state.host.clear_selection();

        let result = command.execute(&["1"], &mut state);
        assert!(result.is_ok());
        assert_eq!(state.host.current_frame(), 24.0);
        assert_eq!(state.host.current_selection(), vec!["head_ctrl".to_string()]);
    }

    #[test]
    fn test_recall_unknown_record_is_err() {
        let command = create();
        let mut state = get_state();
        let result = command.execute(&["9"], &mut state);
        assert_eq!(result.unwrap_err(), "No bookmark 9".to_string());
    }
}
