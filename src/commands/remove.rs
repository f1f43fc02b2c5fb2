use super::parse_record_number;
use crate::{
    console::{builder::CommandBuilder, registry::Command},
    state::AppState,
};
use std::rc::Rc;

pub fn create() -> Rc<Box<dyn Command<AppState>>> {
    CommandBuilder::new(
        "remove",
        "Remove the checked records, or the given record numbers",
        |args, state: &mut AppState| {
            if args.is_empty() {
                return state.remove_checked();
            }
            let indices = args
                .iter()
                .map(|arg| parse_record_number(arg))
                .collect::<Result<Vec<usize>, String>>()?;
            state.remove_records(&indices)
        },
    )
    .alias("rm")
    .build()
}
