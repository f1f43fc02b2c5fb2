use crate::{
    console::{builder::CommandBuilder, registry::Command},
    state::AppState,
};
use std::rc::Rc;

pub fn create() -> Rc<Box<dyn Command<AppState>>> {
    CommandBuilder::new(
        "select",
        "Replace the scene selection, or clear it",
        |args, state: &mut AppState| {
            if args.is_empty() {
                return Err("Usage: select <name...> or select clear".to_string());
            }
            if let ["clear"] = args {
                return state.deselect_all();
            }
            let names: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
            state.select_objects(&names)
        },
    )
    .alias("sel")
    .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{SceneHost, SessionHost};

    fn get_state() -> AppState {
        AppState::with_host(Box::new(SessionHost::sample()))
    }

    #[test]
    fn test_select_usage_err() {
        let command = create();
        let mut state = get_state();
        assert!(command.execute(&[], &mut state).is_err());
    }

    #[test]
    fn test_select_sets_selection() {
        let command = create();
        let mut state = get_state();
        let result = command.execute(&["root_ctrl", "camera1"], &mut state);
        assert_eq!(result.unwrap().text, "Selection: 2 object(s)");
        assert_eq!(
            state.host.current_selection(),
            vec!["root_ctrl".to_string(), "camera1".to_string()]
        );
    }

    #[test]
    fn test_select_unknown_object_is_err() {
        let command = create();
        let mut state = get_state();
        let result = command.execute(&["ghost_node"], &mut state);
        assert_eq!(
            result.unwrap_err(),
            "Unknown object(s): ghost_node".to_string()
        );
    }

    #[test]
    fn test_select_clear() {
        let command = create();
        let mut state = get_state();
        command.execute(&["root_ctrl"], &mut state).unwrap();
        let result = command.execute(&["clear"], &mut state);
        assert!(result.is_ok());
        assert!(state.host.current_selection().is_empty());
    }
}
