use crate::utils::unit::{Unit, to_base};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub amount: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(amount: f64, unit: Unit) -> Self {
        Self { amount, unit }
    }

    pub fn to_base(&self) -> f64 {
        self.unit.amount_in_base(self.amount)
    }

    pub fn is_present(&self) -> bool {
        self.to_base() > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBasis {
    pub amount: f64,
    pub quantity: Quantity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub quantity: Quantity,
    pub secondary: Option<Quantity>,
    pub price: PriceBasis,
    pub total: f64,
}

impl Item {
    /// Combined main and secondary quantity in the dimension's base unit.
    pub fn base_quantity(&self) -> f64 {
        self.quantity.to_base() + self.secondary.map_or(0.0, |q| q.to_base())
    }
}

/// A quantity as entered, before its unit has been checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraftQuantity {
    pub amount: f64,
    pub unit: Option<Unit>,
}

impl DraftQuantity {
    pub fn new(amount: f64, unit: Option<Unit>) -> Self {
        Self { amount, unit }
    }

    pub fn to_base(&self) -> f64 {
        to_base(self.amount, self.unit)
    }
}

impl From<Quantity> for DraftQuantity {
    fn from(q: Quantity) -> Self {
        Self::new(q.amount, Some(q.unit))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: DraftQuantity,
    pub secondary: Option<DraftQuantity>,
    pub price_amount: f64,
    pub price_quantity: DraftQuantity,
}

impl ItemDraft {
    pub fn new(
        name: impl Into<String>,
        quantity: DraftQuantity,
        price_amount: f64,
        price_quantity: DraftQuantity,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            secondary: None,
            price_amount,
            price_quantity,
        }
    }

    pub fn with_secondary(mut self, secondary: DraftQuantity) -> Self {
        self.secondary = Some(secondary);
        self
    }
}

impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.into(),
            secondary: item.secondary.map(Into::into),
            price_amount: item.price.amount,
            price_quantity: item.price.quantity.into(),
        }
    }
}

/// Raw text fields of an item submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemForm {
    pub name: String,
    pub qty_main: String,
    pub unit_main: String,
    pub qty_sub: String,
    pub unit_sub: String,
    pub price_amount: String,
    pub price_basis_qty: String,
    pub price_basis_unit: String,
}

impl ItemForm {
    /// Coerces the text fields into a draft. Unparseable numbers become 0
    /// and unknown unit tags become no unit, so bad input surfaces through
    /// pricing validation rather than here.
    pub fn into_draft(self) -> ItemDraft {
        let secondary = Unit::from_tag(&self.unit_sub)
            .map(|unit| DraftQuantity::new(parse_amount(&self.qty_sub), Some(unit)));

        ItemDraft {
            name: self.name,
            quantity: DraftQuantity::new(
                parse_amount(&self.qty_main),
                Unit::from_tag(&self.unit_main),
            ),
            secondary,
            price_amount: parse_amount(&self.price_amount),
            price_quantity: DraftQuantity::new(
                parse_amount(&self.price_basis_qty),
                Unit::from_tag(&self.price_basis_unit),
            ),
        }
    }
}

pub fn parse_amount(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
