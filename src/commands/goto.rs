use crate::{
    console::{builder::CommandBuilder, registry::Command},
    state::AppState,
};
use std::rc::Rc;

pub fn create() -> Rc<Box<dyn Command<AppState>>> {
    CommandBuilder::new(
        "goto",
        "Move the playhead to a specific frame",
        |args, state: &mut AppState| match args {
            [frame] => match frame.parse::<f64>() {
                Ok(frame) => state.goto_frame(frame),
                Err(_) => Err("Invalid frame format".to_string()),
            },
            _ => Err("Usage: goto <frame>".to_string()),
        },
    )
    .alias("g")
    .build()
}
