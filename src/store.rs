//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. The item
//! mutations are plain functions over the collection so they stay testable
//! outside the browser; `context::AppContext` wraps them with persistence.

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Category, GroceryItem, Priority, Theme, Unit, ViewMode};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All grocery items, in insertion order
    pub items: Vec<GroceryItem>,
    /// Current search term, matched case-insensitively against item names
    pub search_term: String,
    /// Current category filter (None = all categories)
    pub filter_category: Option<Category>,
    /// Flat list or grouped-by-category view
    pub view_mode: ViewMode,
    /// Dark/light theme
    pub theme: Theme,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Item Store Operations
// ========================

/// Allocate the next item id from the clock, keeping ids unique and
/// strictly increasing even when two items are added within the same
/// millisecond.
fn next_id(items: &[GroceryItem], now: DateTime<Utc>) -> u64 {
    let candidate = now.timestamp_millis().max(0) as u64;
    match items.iter().map(|item| item.id).max() {
        Some(max_id) if candidate <= max_id => max_id + 1,
        _ => candidate,
    }
}

/// Append a new item with `completed = false`.
///
/// Returns the new id, or None when the submission is rejected: an empty
/// trimmed name or a zero quantity leaves the collection unchanged.
#[allow(clippy::too_many_arguments)]
pub fn add_item(
    items: &mut Vec<GroceryItem>,
    name: &str,
    category: Category,
    quantity: u32,
    unit: Unit,
    priority: Priority,
    estimated_price: Option<f64>,
    now: DateTime<Utc>,
) -> Option<u64> {
    let name = name.trim();
    if name.is_empty() || quantity < 1 {
        return None;
    }
    let id = next_id(items, now);
    let mut item = GroceryItem::new(id, name.to_string(), category, quantity, unit, priority, now);
    item.estimated_price = estimated_price;
    items.push(item);
    Some(id)
}

/// Flip completion for the item with this id. No-op when the id is absent.
pub fn toggle_completed(items: &mut [GroceryItem], id: u64) -> bool {
    match items.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.completed = !item.completed;
            true
        }
        None => false,
    }
}

/// Set an item's quantity. Values below 1 are rejected, not clamped.
pub fn set_quantity(items: &mut [GroceryItem], id: u64, new_quantity: u32) -> bool {
    if new_quantity < 1 {
        return false;
    }
    match items.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.quantity = new_quantity;
            true
        }
        None => false,
    }
}

/// Remove the item with this id. No-op when absent.
pub fn remove_item(items: &mut Vec<GroceryItem>, id: u64) -> bool {
    let before = items.len();
    items.retain(|item| item.id != id);
    items.len() != before
}

/// Remove every completed item, returning how many were dropped.
pub fn clear_completed(items: &mut Vec<GroceryItem>) -> usize {
    let before = items.len();
    items.retain(|item| !item.completed);
    before - items.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 9, 30, 0).unwrap()
    }

    fn add(items: &mut Vec<GroceryItem>, name: &str) -> Option<u64> {
        add_item(
            items,
            name,
            Category::Produce,
            1,
            Unit::Piece,
            Priority::Medium,
            None,
            fixed_now(),
        )
    }

    #[test]
    fn test_add_appends_incomplete_item() {
        let mut items = Vec::new();
        let id = add(&mut items, "Apples").expect("item should be added");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id);
        assert!(!items[0].completed);
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn test_add_trims_name() {
        let mut items = Vec::new();
        add(&mut items, "  Bananas  ");
        assert_eq!(items[0].name, "Bananas");
    }

    #[test]
    fn test_add_rejects_blank_names() {
        let mut items = Vec::new();
        assert_eq!(add(&mut items, ""), None);
        assert_eq!(add(&mut items, "   "), None);
        assert!(items.is_empty());
    }

    #[test]
    fn test_add_rejects_zero_quantity() {
        let mut items = Vec::new();
        let id = add_item(
            &mut items,
            "Eggs",
            Category::Dairy,
            0,
            Unit::Pack,
            Priority::High,
            None,
            fixed_now(),
        );
        assert_eq!(id, None);
        assert!(items.is_empty());
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut items = Vec::new();
        let a = add(&mut items, "Milk").unwrap();
        let b = add(&mut items, "Bread").unwrap();
        let c = add(&mut items, "Butter").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_toggle_completed_is_involution() {
        let mut items = Vec::new();
        let id = add(&mut items, "Cheese").unwrap();
        assert!(toggle_completed(&mut items, id));
        assert!(items[0].completed);
        assert!(toggle_completed(&mut items, id));
        assert!(!items[0].completed);
    }

    #[test]
    fn test_toggle_completed_missing_id_is_noop() {
        let mut items = Vec::new();
        add(&mut items, "Cheese");
        assert!(!toggle_completed(&mut items, 999));
        assert!(!items[0].completed);
    }

    #[test]
    fn test_set_quantity_rejects_below_one() {
        let mut items = Vec::new();
        let id = add(&mut items, "Rice").unwrap();
        set_quantity(&mut items, id, 5);
        assert_eq!(items[0].quantity, 5);
        assert!(!set_quantity(&mut items, id, 0));
        assert_eq!(items[0].quantity, 5);
    }

    #[test]
    fn test_set_quantity_missing_id_is_noop() {
        let mut items = Vec::new();
        add(&mut items, "Rice");
        assert!(!set_quantity(&mut items, 999, 3));
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn test_remove_item() {
        let mut items = Vec::new();
        let id = add(&mut items, "Soap").unwrap();
        add(&mut items, "Sponge");
        assert!(remove_item(&mut items, id));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Sponge");
        assert!(!remove_item(&mut items, id));
    }

    #[test]
    fn test_clear_completed_is_idempotent() {
        let mut items = Vec::new();
        let a = add(&mut items, "Milk").unwrap();
        add(&mut items, "Bread");
        let c = add(&mut items, "Jam").unwrap();
        toggle_completed(&mut items, a);
        toggle_completed(&mut items, c);

        assert_eq!(clear_completed(&mut items), 2);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Bread");
        // nothing newly completed, second call changes nothing
        assert_eq!(clear_completed(&mut items), 0);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut items = Vec::new();
        add(&mut items, "First");
        add(&mut items, "Second");
        add(&mut items, "Third");
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }
}
