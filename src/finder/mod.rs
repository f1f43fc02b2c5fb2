pub mod state;

use state::FinderState;

pub trait FinderStateAccess {
    fn finder_state(&self) -> &FinderState;
    fn finder_state_mut(&mut self) -> &mut FinderState;
}
