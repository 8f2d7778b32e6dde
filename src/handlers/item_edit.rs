use tracing::info;

use crate::{
    events::command::{CommandError, CommandOutcome},
    models::list_state::ListStore,
};

pub fn handle_edit_begin(
    list: &mut ListStore,
    index: usize,
) -> Result<CommandOutcome, CommandError> {
    list.begin_edit(index)?;
    info!("Editing item {index}");
    Ok(CommandOutcome::EditStarted { index })
}

pub fn handle_edit_cancel(list: &mut ListStore) -> CommandOutcome {
    if let Some(index) = list.edit_cursor() {
        info!("Edit of item {index} cancelled");
    }
    list.cancel_edit();
    CommandOutcome::EditCancelled
}
