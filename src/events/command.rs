use thiserror::Error;
use tracing::debug;

use crate::{
    handlers::{
        item_delete::handle_item_delete,
        item_edit::{handle_edit_begin, handle_edit_cancel},
        item_submit::handle_item_submit,
        list_clear::handle_list_clear,
    },
    models::{
        item::{Item, ItemDraft},
        list_state::{ListError, ListStore},
    },
    storage::{ItemRepository, KeyValueStore},
    utils::price::ValidationError,
};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    List(#[from] ListError),
}

/// Everything a presentation layer can ask of the list.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Submit(ItemDraft),
    BeginEdit(usize),
    CancelEdit,
    Delete(usize),
    ClearAll,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Added { index: usize },
    Replaced { index: usize },
    EditStarted { index: usize },
    EditCancelled,
    Deleted { index: usize, item: Item },
    Cleared,
}

/// Applies `command` to `list`, saving the result before returning.
pub fn dispatch<S: KeyValueStore>(
    list: &mut ListStore,
    repo: &ItemRepository<S>,
    command: Command,
) -> Result<CommandOutcome, CommandError> {
    debug!("Dispatching {:?}", command);

    match command {
        Command::Submit(draft) => handle_item_submit(list, repo, &draft),
        Command::BeginEdit(index) => handle_edit_begin(list, index),
        Command::CancelEdit => Ok(handle_edit_cancel(list)),
        Command::Delete(index) => handle_item_delete(list, repo, index),
        Command::ClearAll => Ok(handle_list_clear(list, repo)),
    }
}
