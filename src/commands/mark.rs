use super::parse_record_number;
use crate::{
    console::{builder::CommandBuilder, registry::Command},
    state::AppState,
};
use std::rc::Rc;

pub fn create() -> Rc<Box<dyn Command<AppState>>> {
    CommandBuilder::new(
        "mark",
        "Toggle a record's marked state",
        |args, state: &mut AppState| match args {
            [number] => state.toggle_mark(parse_record_number(number)?),
            _ => Err("Usage: mark <record>".to_string()),
        },
    )
    .alias("m")
    .build()
}
