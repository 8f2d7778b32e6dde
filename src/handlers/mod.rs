pub mod item_delete;
pub mod item_edit;
pub mod item_submit;
pub mod list_clear;
