use tracing::info;

use crate::{
    events::command::{CommandError, CommandOutcome},
    models::list_state::ListStore,
    storage::{ItemRepository, KeyValueStore},
};

pub fn handle_item_delete<S: KeyValueStore>(
    list: &mut ListStore,
    repo: &ItemRepository<S>,
    index: usize,
) -> Result<CommandOutcome, CommandError> {
    let item = list.remove_at(index)?;
    repo.save(list.items());
    info!("Deleted item {index} ({})", item.name);
    Ok(CommandOutcome::Deleted { index, item })
}
