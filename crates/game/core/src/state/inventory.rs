//! Collected items.

use arrayvec::ArrayVec;

use crate::config::GameConfig;

use super::StateError;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl InventoryItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
        }
    }
}

/// Item list with unique ids. Items do not stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: ArrayVec<InventoryItem, { GameConfig::MAX_INVENTORY_SLOTS }>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: InventoryItem) -> Result<(), StateError> {
        if self.contains(&item.id) {
            return Err(StateError::DuplicateItem { id: item.id });
        }
        self.items
            .try_push(item)
            .map_err(|_| StateError::InventoryFull {
                max: GameConfig::MAX_INVENTORY_SLOTS,
            })
    }

    pub fn remove(&mut self, id: &str) -> Option<InventoryItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut inventory = Inventory::new();
        inventory.add(InventoryItem::new("ticket", "Ticket")).unwrap();
        assert_eq!(
            inventory.add(InventoryItem::new("ticket", "Another")),
            Err(StateError::DuplicateItem {
                id: "ticket".into()
            })
        );
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.remove("ticket").map(|i| i.name), Some("Ticket".into()));
        assert!(inventory.is_empty());
    }

    #[test]
    fn full_inventory_rejects_items() {
        let mut inventory = Inventory::new();
        for i in 0..GameConfig::MAX_INVENTORY_SLOTS {
            inventory.add(InventoryItem::new(format!("item{i}"), "x")).unwrap();
        }
        assert!(matches!(
            inventory.add(InventoryItem::new("extra", "x")),
            Err(StateError::InventoryFull { .. })
        ));
    }
}
