//! Local Persistence
//!
//! Mirrors the item collection and the theme preference into
//! `localStorage` as two independent entries. Every item mutation writes a
//! full snapshot of the collection; there is no incremental format.
//! Serialization is kept separate from the browser I/O so round-trips stay
//! testable off-wasm.

use crate::models::{GroceryItem, Theme};

/// localStorage key for the serialized item collection
pub const ITEMS_KEY: &str = "cartall_items";
/// localStorage key for the theme preference
pub const THEME_KEY: &str = "cartall_theme";

/// Persistence-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// localStorage is missing or blocked by the browser
    Unavailable,
    Serialize(String),
    Deserialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "localStorage unavailable"),
            StorageError::Serialize(msg) => write!(f, "serialize failed: {}", msg),
            StorageError::Deserialize(msg) => write!(f, "deserialize failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// ========================
// Stored Form
// ========================

/// Serialize the full collection to its stored JSON form.
pub fn items_to_json(items: &[GroceryItem]) -> Result<String, StorageError> {
    serde_json::to_string(items).map_err(|e| StorageError::Serialize(e.to_string()))
}

/// Parse the stored JSON form back into a collection.
pub fn items_from_json(json: &str) -> Result<Vec<GroceryItem>, StorageError> {
    serde_json::from_str(json).map_err(|e| StorageError::Deserialize(e.to_string()))
}

// ========================
// Browser I/O
// ========================

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

/// Load the persisted collection.
///
/// A missing entry is an empty list. Malformed data is an error the caller
/// degrades to an empty list instead of crashing.
pub fn load_items() -> Result<Vec<GroceryItem>, StorageError> {
    let storage = local_storage()?;
    match storage.get_item(ITEMS_KEY).map_err(|_| StorageError::Unavailable)? {
        Some(json) => items_from_json(&json),
        None => Ok(Vec::new()),
    }
}

/// Overwrite the stored collection with a full snapshot.
pub fn save_items(items: &[GroceryItem]) -> Result<(), StorageError> {
    let json = items_to_json(items)?;
    local_storage()?
        .set_item(ITEMS_KEY, &json)
        .map_err(|_| StorageError::Unavailable)
}

/// Load the theme preference, defaulting to light when the entry is
/// missing or storage is unavailable.
pub fn load_theme() -> Theme {
    local_storage()
        .ok()
        .and_then(|storage| storage.get_item(THEME_KEY).ok().flatten())
        .map(|value| Theme::from_str(&value))
        .unwrap_or_default()
}

/// Overwrite the stored theme preference.
pub fn save_theme(theme: Theme) -> Result<(), StorageError> {
    local_storage()?
        .set_item(THEME_KEY, theme.as_str())
        .map_err(|_| StorageError::Unavailable)
}
