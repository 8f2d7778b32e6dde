use std::fmt;

use super::list_state::ListStore;
use crate::utils::format::{currency, format_item_quantity, format_price_basis};

/// Display-ready row of the bill.
#[derive(Debug, Clone, PartialEq)]
pub struct BillLine {
    pub number: usize,
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub total: String,
    pub editing: bool,
}

/// Read-only rendering of a list, built from the stored item totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Bill {
    pub lines: Vec<BillLine>,
    pub total: String,
}

impl Bill {
    pub fn from_list(list: &ListStore, symbol: &str) -> Self {
        let cursor = list.edit_cursor();
        let lines = list
            .items()
            .iter()
            .enumerate()
            .map(|(idx, item)| BillLine {
                number: idx + 1,
                name: item.name.clone(),
                quantity: format_item_quantity(item),
                price: format_price_basis(symbol, &item.price),
                total: currency(symbol, item.total),
                editing: cursor == Some(idx),
            })
            .collect();

        Self {
            lines,
            total: currency(symbol, list.total()),
        }
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lines.is_empty() {
            writeln!(f, "(no items)")?;
        }
        for line in &self.lines {
            let marker = if line.editing { "*" } else { " " };
            writeln!(
                f,
                "{marker}{:>3}  {:<20} {:<18} {:<22} {:>10}",
                line.number, line.name, line.quantity, line.price, line.total
            )?;
        }
        write!(f, "Total: {}", self.total)
    }
}
