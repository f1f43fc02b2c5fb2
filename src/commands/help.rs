use crate::{
    console::{builder::CommandBuilder, registry::Command, Message},
    state::AppState,
};
use std::rc::Rc;

pub fn create() -> Rc<Box<dyn Command<AppState>>> {
    CommandBuilder::new(
        "help",
        "Show the keybinding reference",
        |_args, state: &mut AppState| {
            state.show_help = !state.show_help;
            Ok(Message::info("help"))
        },
    )
    .alias("h")
    .build()
}
