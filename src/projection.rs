//! View Projection
//!
//! Pure derivation of the rendered view from the raw item collection:
//! filter, group, aggregate. No signals, no browser state.

use crate::models::{Category, CategoryInfo, GroceryItem, ViewMode, CATEGORIES};

/// A displayable run of items. `info` is None for the flat (ungrouped) view.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemGroup {
    pub info: Option<&'static CategoryInfo>,
    pub items: Vec<GroceryItem>,
}

/// Aggregate counters, computed over the whole collection (not the
/// filtered view).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ListStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
    /// completed / total * 100; 0.0 for an empty collection
    pub completion_percentage: f64,
    /// Sum of estimated prices over items still to buy
    pub estimated_total: f64,
}

/// The filtered/grouped/aggregated view handed to the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedView {
    pub groups: Vec<ItemGroup>,
    pub stats: ListStats,
}

impl ProjectedView {
    /// Number of items that survived filtering
    pub fn matched_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}

/// Derive the presentation view.
///
/// Filtering keeps items whose name contains `search_term`
/// case-insensitively and whose category matches `filter_category` (None =
/// all). Grouping follows the canonical `CATEGORIES` order and omits empty
/// categories; within a group items keep their insertion order.
pub fn project(
    items: &[GroceryItem],
    search_term: &str,
    filter_category: Option<Category>,
    view_mode: ViewMode,
) -> ProjectedView {
    let term = search_term.to_lowercase();
    let filtered: Vec<&GroceryItem> = items
        .iter()
        .filter(|item| {
            (term.is_empty() || item.name.to_lowercase().contains(&term))
                && filter_category.is_none_or(|category| item.category == category)
        })
        .collect();

    let groups = match view_mode {
        ViewMode::All => vec![ItemGroup {
            info: None,
            items: filtered.iter().map(|item| (*item).clone()).collect(),
        }],
        ViewMode::Category => CATEGORIES
            .iter()
            .filter_map(|info| {
                let members: Vec<GroceryItem> = filtered
                    .iter()
                    .filter(|item| item.category == info.category)
                    .map(|item| (*item).clone())
                    .collect();
                if members.is_empty() {
                    None
                } else {
                    Some(ItemGroup { info: Some(info), items: members })
                }
            })
            .collect(),
    };

    ProjectedView { groups, stats: stats_for(items) }
}

/// Aggregate counters for the stats footer.
pub fn stats_for(items: &[GroceryItem]) -> ListStats {
    let total = items.len();
    let completed = items.iter().filter(|item| item.completed).count();
    let completion_percentage = if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    };
    let estimated_total = items
        .iter()
        .filter(|item| !item.completed)
        .filter_map(|item| item.estimated_price)
        .sum();

    ListStats {
        total,
        completed,
        remaining: total - completed,
        completion_percentage,
        estimated_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Priority, Unit};
    use chrono::{TimeZone, Utc};

    fn item(id: u64, name: &str, category: Category) -> GroceryItem {
        GroceryItem::new(
            id,
            name.to_string(),
            category,
            1,
            Unit::Piece,
            Priority::Medium,
            Utc.with_ymd_and_hms(2026, 8, 1, 8, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = vec![item(1, "Milk", Category::Dairy), item(2, "Bread", Category::Bakery)];
        for term in ["mil", "MIL", "mIl"] {
            let view = project(&items, term, None, ViewMode::All);
            assert_eq!(view.matched_count(), 1, "term {term:?}");
            assert_eq!(view.groups[0].items[0].name, "Milk");
        }
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let items = vec![item(1, "Milk", Category::Dairy), item(2, "Bread", Category::Bakery)];
        let view = project(&items, "", None, ViewMode::All);
        assert_eq!(view.matched_count(), 2);
    }

    #[test]
    fn test_category_filter_combines_with_search() {
        let items = vec![
            item(1, "Milk", Category::Dairy),
            item(2, "Milk chocolate", Category::Pantry),
            item(3, "Bread", Category::Bakery),
        ];
        let view = project(&items, "milk", Some(Category::Pantry), ViewMode::All);
        assert_eq!(view.matched_count(), 1);
        assert_eq!(view.groups[0].items[0].name, "Milk chocolate");
    }

    #[test]
    fn test_flat_view_is_one_unlabeled_group_in_insertion_order() {
        let items = vec![
            item(1, "Bread", Category::Bakery),
            item(2, "Milk", Category::Dairy),
            item(3, "Rolls", Category::Bakery),
        ];
        let view = project(&items, "", None, ViewMode::All);
        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].info, None);
        let names: Vec<_> = view.groups[0].items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Bread", "Milk", "Rolls"]);
    }

    #[test]
    fn test_grouping_follows_canonical_category_order() {
        // dairy precedes bakery in the canonical order even though the
        // bakery item was added first
        let items = vec![item(1, "Bread", Category::Bakery), item(2, "Milk", Category::Dairy)];
        let view = project(&items, "", None, ViewMode::Category);
        assert_eq!(view.groups.len(), 2);
        assert_eq!(view.groups[0].info.unwrap().category, Category::Dairy);
        assert_eq!(view.groups[1].info.unwrap().category, Category::Bakery);
    }

    #[test]
    fn test_grouping_omits_empty_categories() {
        let items = vec![item(1, "Milk", Category::Dairy)];
        let view = project(&items, "", None, ViewMode::Category);
        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].info.unwrap().category, Category::Dairy);
    }

    #[test]
    fn test_group_keeps_relative_item_order() {
        let items = vec![
            item(1, "Apples", Category::Produce),
            item(2, "Milk", Category::Dairy),
            item(3, "Pears", Category::Produce),
        ];
        let view = project(&items, "", None, ViewMode::Category);
        let produce = &view.groups[0];
        let names: Vec<_> = produce.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Apples", "Pears"]);
    }

    #[test]
    fn test_stats_empty_collection_is_zero_percent() {
        let stats = stats_for(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completed, 0);
        assert_eq!(stats.remaining, 0);
        assert_eq!(stats.completion_percentage, 0.0);
    }

    #[test]
    fn test_stats_counts_and_percentage() {
        let mut items = vec![
            item(1, "Milk", Category::Dairy),
            item(2, "Bread", Category::Bakery),
            item(3, "Eggs", Category::Dairy),
            item(4, "Soap", Category::Household),
        ];
        items[0].completed = true;
        let stats = stats_for(&items);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.remaining, 3);
        assert_eq!(stats.completion_percentage, 25.0);
    }

    #[test]
    fn test_stats_ignore_the_active_filter() {
        let items = vec![item(1, "Milk", Category::Dairy), item(2, "Bread", Category::Bakery)];
        let view = project(&items, "milk", None, ViewMode::All);
        assert_eq!(view.matched_count(), 1);
        assert_eq!(view.stats.total, 2);
    }

    #[test]
    fn test_estimated_total_sums_remaining_items_only() {
        let mut items = vec![
            item(1, "Milk", Category::Dairy),
            item(2, "Bread", Category::Bakery),
            item(3, "Eggs", Category::Dairy),
        ];
        items[0].estimated_price = Some(1.5);
        items[1].estimated_price = Some(2.25);
        items[1].completed = true;
        let stats = stats_for(&items);
        assert_eq!(stats.estimated_total, 1.5);
    }
}
