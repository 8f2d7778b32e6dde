pub mod bill;
pub mod item;
pub mod list_state;
