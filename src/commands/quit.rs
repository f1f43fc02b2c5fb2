use crate::{
    console::{builder::CommandBuilder, registry::Command, Message},
    state::AppState,
};
use std::rc::Rc;

pub fn create() -> Rc<Box<dyn Command<AppState>>> {
    CommandBuilder::new("quit", "Quit framemark", |_args, state: &mut AppState| {
        state.exit = true;
        Ok(Message::info("Exiting framemark..."))
    })
    .alias("q")
    .build()
}
