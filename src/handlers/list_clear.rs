use tracing::info;

use crate::{
    events::command::CommandOutcome,
    models::list_state::ListStore,
    storage::{ItemRepository, KeyValueStore},
};

/// Wipes the in-memory list and the saved copy.
pub fn handle_list_clear<S: KeyValueStore>(
    list: &mut ListStore,
    repo: &ItemRepository<S>,
) -> CommandOutcome {
    let count = list.len();
    list.clear_all();
    repo.clear();
    info!("Cleared {count} items");
    CommandOutcome::Cleared
}
