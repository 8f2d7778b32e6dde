use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{StorageError, kv::KeyValueStore};
use crate::{
    ITEMS_KEY,
    models::item::{Item, PriceBasis, Quantity},
    utils::unit::Unit,
};

/// Stored shape of an item. Field names match the list format written by
/// earlier releases of the browser app.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub name: String,
    pub qty_main: f64,
    pub unit_main: Unit,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty_sub: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_sub: Option<Unit>,
    pub price_amount: f64,
    pub price_basis_qty: f64,
    pub price_basis_unit: Unit,
    pub total: f64,
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            qty_main: item.quantity.amount,
            unit_main: item.quantity.unit,
            qty_sub: item.secondary.map(|q| q.amount),
            unit_sub: item.secondary.map(|q| q.unit),
            price_amount: item.price.amount,
            price_basis_qty: item.price.quantity.amount,
            price_basis_unit: item.price.quantity.unit,
            total: item.total,
        }
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        let secondary = match (record.qty_sub, record.unit_sub) {
            (Some(amount), Some(unit)) => Some(Quantity::new(amount, unit)),
            _ => None,
        };

        Self {
            name: record.name,
            quantity: Quantity::new(record.qty_main, record.unit_main),
            secondary,
            price: PriceBasis {
                amount: record.price_amount,
                quantity: Quantity::new(record.price_basis_qty, record.price_basis_unit),
            },
            total: record.total,
        }
    }
}

/// Persists the item list as JSON under a single key.
pub struct ItemRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ItemRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, ITEMS_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn try_load(&self) -> Result<Vec<Item>, StorageError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };
        let records: Option<Vec<ItemRecord>> = serde_json::from_str(&raw)?;
        Ok(records
            .unwrap_or_default()
            .into_iter()
            .map(Item::from)
            .collect())
    }

    pub fn try_save(&self, items: &[Item]) -> Result<(), StorageError> {
        let records: Vec<ItemRecord> = items.iter().map(ItemRecord::from).collect();
        let raw = serde_json::to_string(&records)?;
        self.store.set(&self.key, &raw)
    }

    pub fn try_clear(&self) -> Result<(), StorageError> {
        self.store.delete(&self.key)
    }

    /// Loads the saved list, falling back to an empty one if it is missing
    /// or unreadable.
    pub fn load(&self) -> Vec<Item> {
        match self.try_load() {
            Ok(items) => {
                debug!("Loaded {} items from {}", items.len(), self.key);
                items
            }
            Err(e) => {
                warn!("Could not load saved list: {e}. Starting empty.");
                Vec::new()
            }
        }
    }

    /// Best-effort save. Failures are logged and otherwise ignored.
    pub fn save(&self, items: &[Item]) {
        if let Err(e) = self.try_save(items) {
            warn!("Could not save list: {e}");
        }
    }

    /// Best-effort removal of the saved list.
    pub fn clear(&self) {
        if let Err(e) = self.try_clear() {
            warn!("Could not clear saved list: {e}");
        }
    }
}
