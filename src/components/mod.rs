//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod filter_bar;
mod grocery_list;
mod item_row;
mod new_item_form;
mod stats_bar;
mod theme_toggle;

pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use grocery_list::GroceryList;
pub use item_row::ItemRow;
pub use new_item_form::NewItemForm;
pub use stats_bar::StatsBar;
pub use theme_toggle::ThemeToggle;
