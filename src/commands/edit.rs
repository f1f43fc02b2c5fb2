use super::parse_record_number;
use crate::{
    console::{builder::CommandBuilder, registry::Command},
    state::AppState,
};
use std::rc::Rc;

pub fn create() -> Rc<Box<dyn Command<AppState>>> {
    CommandBuilder::new(
        "edit",
        "Open the edit dialog for a record",
        |args, state: &mut AppState| match args {
            [number] => state.open_edit_dialog(parse_record_number(number)?),
            _ => Err("Usage: edit <record>".to_string()),
        },
    )
    .alias("e")
    .build()
}
