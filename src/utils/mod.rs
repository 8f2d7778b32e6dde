pub mod format;
pub mod message;
pub mod price;
pub mod unit;
