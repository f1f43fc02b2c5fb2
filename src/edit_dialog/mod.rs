pub mod state;

use state::EditDialogState;

pub trait EditDialogStateAccess {
    fn edit_dialog_state(&self) -> &EditDialogState;
    fn edit_dialog_state_mut(&mut self) -> &mut EditDialogState;
}
