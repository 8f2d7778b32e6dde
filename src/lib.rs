//! Shopping-list billing: quantities normalized to a base unit per
//! dimension, priced against a per-quantity basis, and kept in an ordered
//! list with a single edit cursor.

pub mod config;
pub mod events;
pub mod handlers;
pub mod models;
pub mod storage;
pub mod utils;

/// Storage key of the saved item list.
pub const ITEMS_KEY: &str = "shoplistbill.items.v1";

pub use events::command::{Command, CommandError, CommandOutcome, dispatch};
pub use models::{
    bill::Bill,
    item::{DraftQuantity, Item, ItemDraft, ItemForm, PriceBasis, Quantity},
    list_state::{ListError, ListStore},
};
pub use utils::{
    price::{ValidationError, price_item},
    unit::{Dimension, Unit},
};
