use tracing::{info, warn};

use crate::{
    events::command::{CommandError, CommandOutcome},
    models::{item::ItemDraft, list_state::ListStore},
    storage::{ItemRepository, KeyValueStore},
    utils::price::price_item,
};

/// Prices the draft and commits it: replaces the item under the edit cursor
/// if one is set, appends otherwise.
pub fn handle_item_submit<S: KeyValueStore>(
    list: &mut ListStore,
    repo: &ItemRepository<S>,
    draft: &ItemDraft,
) -> Result<CommandOutcome, CommandError> {
    let item = price_item(draft).inspect_err(|e| warn!("Rejected item submission: {e}"))?;
    let total = item.total;

    let outcome = match list.edit_cursor() {
        Some(index) => {
            list.replace_at(index, item)?;
            CommandOutcome::Replaced { index }
        }
        None => {
            list.add(item);
            CommandOutcome::Added {
                index: list.len() - 1,
            }
        }
    };

    repo.save(list.items());
    info!("Item committed ({:?}), line total {:.2}", outcome, total);

    Ok(outcome)
}
