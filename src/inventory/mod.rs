use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Counter decremented when a medication run is delivered
pub const MEDICATION_COUNTER: &str = "Medication A";

/// Counter decremented when a supplies run is delivered
pub const SUPPLIES_COUNTER: &str = "Medical Supplies";

const HOSPITAL_STOCK: &[(&str, u32)] = &[
    ("Surgical Masks", 500),
    ("Disposable Gloves", 1200),
    ("Syringes (10ml)", 300),
    ("IV Bags (Saline)", 85),
    ("Blood Collection Tubes", 450),
    ("Gauze Bandages", 200),
    ("Antiseptic Wipes", 350),
    ("Thermometer Covers", 180),
    ("Oxygen Masks", 75),
    ("Medication Vials", 120),
    ("Lab Test Kits", 95),
    ("Surgical Instruments", 45),
    (MEDICATION_COUNTER, 150),
    (SUPPLIES_COUNTER, 400),
];

/// Decrement applied to the ledger when a delivery completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryAdjustment {
    pub item: String,
    pub amount: u32,
}

impl InventoryAdjustment {
    /// Adjustment triggered by delivering a task with this name.
    ///
    /// "Medication" wins over "Supplies" when a name contains both.
    pub fn for_delivery(task_name: &str) -> Option<Self> {
        if task_name.contains("Medication") {
            Some(Self {
                item: MEDICATION_COUNTER.to_string(),
                amount: 1,
            })
        } else if task_name.contains("Supplies") {
            Some(Self {
                item: SUPPLIES_COUNTER.to_string(),
                amount: 5,
            })
        } else {
            None
        }
    }
}

/// Item name -> remaining quantity. Quantities never go below zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryLedger {
    items: BTreeMap<String, u32>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ledger seeded with the hospital supply list
    pub fn hospital_default() -> Self {
        Self {
            items: HOSPITAL_STOCK
                .iter()
                .map(|(name, qty)| (name.to_string(), *qty))
                .collect(),
        }
    }

    pub fn set(&mut self, item: impl Into<String>, quantity: u32) {
        self.items.insert(item.into(), quantity);
    }

    pub fn quantity(&self, item: &str) -> Option<u32> {
        self.items.get(item).copied()
    }

    pub fn items(&self) -> &BTreeMap<String, u32> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Apply a decrement, floored at zero. Returns the new quantity.
    ///
    /// An untracked item starts at zero, so it is recorded as empty stock.
    pub fn apply(&mut self, adjustment: &InventoryAdjustment) -> u32 {
        let entry = self.items.entry(adjustment.item.clone()).or_insert_with(|| {
            debug!(item = %adjustment.item, "Adjusting untracked inventory item");
            0
        });

        let before = *entry;
        *entry = before.saturating_sub(adjustment.amount);

        info!(
            item = %adjustment.item,
            before = before,
            after = *entry,
            "Inventory adjusted"
        );

        *entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medication_adjustment() {
        let adj = InventoryAdjustment::for_delivery("Medication Delivery").unwrap();
        assert_eq!(adj.item, MEDICATION_COUNTER);
        assert_eq!(adj.amount, 1);
    }

    #[test]
    fn test_supplies_adjustment() {
        let adj = InventoryAdjustment::for_delivery("Medical Supplies Restock").unwrap();
        assert_eq!(adj.item, SUPPLIES_COUNTER);
        assert_eq!(adj.amount, 5);
    }

    #[test]
    fn test_medication_takes_precedence() {
        let adj = InventoryAdjustment::for_delivery("Medication and Supplies").unwrap();
        assert_eq!(adj.item, MEDICATION_COUNTER);
    }

    #[test]
    fn test_no_adjustment_for_other_names() {
        assert!(InventoryAdjustment::for_delivery("Lab Sample Transport").is_none());
        // Match is case-sensitive
        assert!(InventoryAdjustment::for_delivery("medication run").is_none());
    }

    #[test]
    fn test_apply_floors_at_zero() {
        let mut ledger = InventoryLedger::new();
        ledger.set(SUPPLIES_COUNTER, 3);

        let adj = InventoryAdjustment::for_delivery("Supplies").unwrap();
        assert_eq!(ledger.apply(&adj), 0);
        assert_eq!(ledger.apply(&adj), 0);
        assert_eq!(ledger.quantity(SUPPLIES_COUNTER), Some(0));
    }

    #[test]
    fn test_apply_untracked_item_records_zero() {
        let mut ledger = InventoryLedger::new();
        let adj = InventoryAdjustment::for_delivery("Medication Delivery").unwrap();

        assert_eq!(ledger.apply(&adj), 0);
        assert_eq!(ledger.quantity(MEDICATION_COUNTER), Some(0));
    }

    #[test]
    fn test_hospital_default_seeds_counters() {
        let ledger = InventoryLedger::hospital_default();
        assert_eq!(ledger.len(), 14);
        assert_eq!(ledger.quantity("Surgical Masks"), Some(500));
        assert_eq!(ledger.quantity(MEDICATION_COUNTER), Some(150));
        assert_eq!(ledger.quantity(SUPPLIES_COUNTER), Some(400));
    }
}
