use thiserror::Error;

use super::unit::{Unit, same_dimension};
use crate::models::item::{DraftQuantity, Item, ItemDraft, PriceBasis, Quantity};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Enter item name")]
    EmptyName,

    #[error("Enter a valid price")]
    InvalidPrice,

    #[error("Enter quantity")]
    MissingQuantity,

    #[error("Price basis unit must match item unit type")]
    DimensionMismatch,
}

/// Rounds half away from zero to two decimal places.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn calculate_total_price(
    quantity_base: f64,
    price_amount: f64,
    price_quantity_base: f64,
) -> f64 {
    let price_quantity_base = if price_quantity_base > 0.0 {
        price_quantity_base
    } else {
        1.0
    };
    let price_per_base = price_amount / price_quantity_base;
    round_to_cents(price_per_base * quantity_base)
}

pub fn price_item(draft: &ItemDraft) -> Result<Item, ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if !draft.price_amount.is_finite() || draft.price_amount <= 0.0 {
        return Err(ValidationError::InvalidPrice);
    }

    let secondary = draft.secondary.filter(|q| q.to_base() > 0.0);
    let main_base = draft.quantity.to_base();
    let secondary_base = secondary.map_or(0.0, |q| q.to_base());
    let total_base = main_base + secondary_base;
    if total_base <= 0.0 {
        return Err(ValidationError::MissingQuantity);
    }

    let main_unit = checked_unit(draft.quantity.unit, draft.price_quantity.unit)?;
    let price_unit = checked_unit(draft.price_quantity.unit, draft.quantity.unit)?;
    let secondary = secondary
        .map(|q| checked_unit(q.unit, Some(main_unit)).map(|unit| Quantity::new(q.amount, unit)))
        .transpose()?;

    let price_quantity = Quantity::new(basis_amount(draft.price_quantity), price_unit);
    let total = calculate_total_price(total_base, draft.price_amount, price_quantity.to_base());
    if !total.is_finite() {
        return Err(ValidationError::InvalidPrice);
    }

    Ok(Item {
        name: name.to_string(),
        quantity: Quantity::new(draft.quantity.amount.max(0.0), main_unit),
        secondary,
        price: PriceBasis {
            amount: draft.price_amount,
            quantity: price_quantity,
        },
        total,
    })
}

fn checked_unit(unit: Option<Unit>, other: Option<Unit>) -> Result<Unit, ValidationError> {
    match unit {
        Some(unit) if same_dimension(Some(unit), other) => Ok(unit),
        _ => Err(ValidationError::DimensionMismatch),
    }
}

fn basis_amount(quantity: DraftQuantity) -> f64 {
    if quantity.amount.is_finite() && quantity.amount > 0.0 {
        quantity.amount
    } else {
        1.0
    }
}
