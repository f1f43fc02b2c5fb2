use crate::{
    console::{builder::CommandBuilder, registry::Command},
    state::AppState,
};
use std::rc::Rc;

pub fn create() -> Rc<Box<dyn Command<AppState>>> {
    CommandBuilder::new(
        "add",
        "Bookmark the current selection at the current frame",
        |args, state: &mut AppState| {
            if !args.is_empty() {
                return Err("Usage: add".to_string());
            }
            state.add_bookmark()
        },
    )
    .alias("a")
    .build()
}
