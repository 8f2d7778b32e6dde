use std::fmt::Write;

use super::format::{currency, strip_trailing_zeros};
use crate::models::item::Item;

const NAME_WIDTH: usize = 10;
const UNIT_WIDTH: usize = 2;

/// Plain-text bill summary laid out in fixed-width columns for sharing.
///
/// Rows carry the stored totals; nothing is re-priced here. A secondary
/// quantity is folded into the main unit so the row shows what was priced.
pub fn share_message(title: &str, items: &[Item], symbol: &str) -> String {
    let mut message = String::new();
    let _ = writeln!(message, "{title}");
    let _ = writeln!(message);
    let _ = writeln!(message, "No   Item        Qty    Price");

    let mut sum = 0.0;
    for (idx, item) in items.iter().enumerate() {
        sum += item.total;
        let name: String = item.name.chars().take(NAME_WIDTH).collect();
        let unit: String = item.quantity.unit.to_string().chars().take(UNIT_WIDTH).collect();
        let _ = writeln!(
            message,
            "{:02} {:<NAME_WIDTH$} {:>4} {:<UNIT_WIDTH$} {:>8}",
            idx + 1,
            name,
            strip_trailing_zeros(item.base_quantity() / item.quantity.unit.to_base_factor()),
            unit,
            currency(symbol, item.total),
        );
    }

    let _ = writeln!(message);
    let _ = write!(message, "Total: {}", currency(symbol, sum));
    message
}
