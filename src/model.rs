use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A purchasable entry in a shopping list. Ids are unique within the owning
/// list only, never across lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: u32,
    pub name: String,
    pub quantity: f64,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub purchased: bool,
}

impl ShoppingItem {
    /// Unsaved item with the add-form defaults: one of it, free, not yet
    /// purchased. The id stays 0 until insertion assigns a real one.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            quantity: 1.0,
            price: 0.0,
            description: None,
            purchased: false,
        }
    }
}

/// A named, timestamped list of items. `date_created` is fixed at creation;
/// the name may be edited later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub id: u32,
    pub name: String,
    pub date_created: DateTime<Utc>,
    pub items: Vec<ShoppingItem>,
}

impl ShoppingList {
    /// Unsaved empty list stamped with the current time, id assigned at
    /// insertion.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            date_created: Utc::now(),
            items: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_defaults() {
        let item = ShoppingItem::new("Milk");
        assert_eq!(item.id, 0);
        assert_eq!(item.name, "Milk");
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.price, 0.0);
        assert!(item.description.is_none());
        assert!(!item.purchased);
    }

    #[test]
    fn new_list_is_empty() {
        let list = ShoppingList::new("Groceries");
        assert_eq!(list.id, 0);
        assert_eq!(list.name, "Groceries");
        assert!(list.items.is_empty());
    }

    #[test]
    fn item_description_none_skipped_in_json() {
        let item = ShoppingItem::new("Bread");
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("description"));
    }

    #[test]
    fn item_description_round_trip() {
        let mut item = ShoppingItem::new("Eggs");
        item.description = Some("free range".to_string());
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("free range"));
        let restored: ShoppingItem = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, item);
    }

    #[test]
    fn list_date_created_uses_camel_case_key() {
        let list = ShoppingList::new("Groceries");
        let json = serde_json::to_string(&list).unwrap();
        assert!(json.contains("\"dateCreated\""));
        assert!(!json.contains("date_created"));
    }

    #[test]
    fn deserializes_legacy_blob() {
        // Legacy blob: camelCase date key, empty-string description,
        // millisecond timestamps.
        let json = r#"[{"id":1,"name":"Groceries","dateCreated":"2024-01-01T00:00:00.000Z",
            "items":[{"id":1,"name":"Milk","quantity":2,"price":1.5,"description":"","purchased":false}]}]"#;
        let lists: Vec<ShoppingList> = serde_json::from_str(json).unwrap();
        assert_eq!(lists.len(), 1);
        let list = &lists[0];
        assert_eq!(list.id, 1);
        assert_eq!(list.name, "Groceries");
        assert_eq!(list.items.len(), 1);
        let item = &list.items[0];
        assert_eq!(item.name, "Milk");
        assert_eq!(item.quantity, 2.0);
        assert_eq!(item.price, 1.5);
        assert_eq!(item.description.as_deref(), Some(""));
        assert!(!item.purchased);
    }

    #[test]
    fn list_serde_round_trip() {
        let mut list = ShoppingList::new("Hardware");
        list.id = 3;
        let mut item = ShoppingItem::new("Nails");
        item.id = 1;
        item.price = 2.5;
        item.quantity = 4.0;
        item.purchased = true;
        list.items.push(item);

        let json = serde_json::to_string(&list).unwrap();
        let restored: ShoppingList = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, list);
    }
}
