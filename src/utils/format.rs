use super::unit::Unit;
use crate::models::item::{Item, PriceBasis, Quantity};

/// Formats with at most three decimals, dropping trailing zeros.
pub fn strip_trailing_zeros(n: f64) -> String {
    let s = format!("{:.3}", n);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

pub fn label_unit(unit: Unit, amount: f64) -> &'static str {
    match unit {
        Unit::Kg => "Kg",
        Unit::G => "Gram",
        Unit::L => "Liter",
        Unit::Ml => "ML",
        Unit::Unit if amount == 1.0 => "Unit",
        Unit::Unit => "Units",
    }
}

pub fn currency(symbol: &str, amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    format!("{symbol}{amount:.2}")
}

/// Returns `None` for a zero or negative quantity.
pub fn format_quantity(quantity: &Quantity) -> Option<String> {
    if !quantity.is_present() {
        return None;
    }
    Some(format!(
        "{} {}",
        strip_trailing_zeros(quantity.amount),
        label_unit(quantity.unit, quantity.amount)
    ))
}

pub fn format_item_quantity(item: &Item) -> String {
    std::iter::once(&item.quantity)
        .chain(item.secondary.as_ref())
        .filter_map(format_quantity)
        .collect::<Vec<_>>()
        .join(" + ")
}

pub fn format_price_basis(symbol: &str, price: &PriceBasis) -> String {
    format!(
        "{} / {} {}",
        currency(symbol, price.amount),
        strip_trailing_zeros(price.quantity.amount),
        label_unit(price.quantity.unit, price.quantity.amount)
    )
}
