//! Application Context
//!
//! The intent surface shared via Leptos Context. Components dispatch user
//! intents through these methods; item mutations mirror the full
//! collection to localStorage before returning, so state is durable after
//! every user-visible action.

use chrono::Utc;
use leptos::prelude::*;

use crate::models::{Category, Priority, Theme, Unit, ViewMode};
use crate::storage;
use crate::store::{self, AppStateStoreFields, AppStore};

/// Payload of the add-item intent, gathered by the form
#[derive(Debug, Clone)]
pub struct NewItemInput {
    pub name: String,
    pub category: Category,
    pub quantity: u32,
    pub unit: Unit,
    pub priority: Priority,
    pub estimated_price: Option<f64>,
}

/// App-wide intent handlers around the state store
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Add a new item. Returns false when the submission was rejected
    /// (blank name or zero quantity) so the form keeps its contents.
    pub fn add_item(&self, input: &NewItemInput) -> bool {
        let added = store::add_item(
            &mut self.store.items().write(),
            &input.name,
            input.category,
            input.quantity,
            input.unit,
            input.priority,
            input.estimated_price,
            Utc::now(),
        );
        if added.is_some() {
            self.persist_items();
        }
        added.is_some()
    }

    pub fn toggle_completed(&self, id: u64) {
        if store::toggle_completed(&mut self.store.items().write(), id) {
            self.persist_items();
        }
    }

    /// Apply a +1/-1 step from the row buttons. The store rejects targets
    /// below 1, so decrementing at quantity 1 is a no-op.
    pub fn adjust_quantity(&self, id: u64, delta: i32) {
        let current = self
            .store
            .items()
            .read()
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.quantity);
        let Some(current) = current else { return };
        let target = (i64::from(current) + i64::from(delta)).max(0) as u32;
        if store::set_quantity(&mut self.store.items().write(), id, target) {
            self.persist_items();
        }
    }

    pub fn remove_item(&self, id: u64) {
        if store::remove_item(&mut self.store.items().write(), id) {
            self.persist_items();
        }
    }

    pub fn clear_completed(&self) {
        let removed = store::clear_completed(&mut self.store.items().write());
        if removed > 0 {
            web_sys::console::log_1(&format!("[APP] cleared {} completed items", removed).into());
            self.persist_items();
        }
    }

    pub fn set_search_term(&self, term: String) {
        self.store.search_term().set(term);
    }

    pub fn set_filter_category(&self, filter: Option<Category>) {
        self.store.filter_category().set(filter);
    }

    pub fn set_view_mode(&self, mode: ViewMode) {
        self.store.view_mode().set(mode);
    }

    /// Switch the theme, re-style the document and persist the choice.
    pub fn set_theme(&self, theme: Theme) {
        self.store.theme().set(theme);
        apply_theme(theme);
        if let Err(err) = storage::save_theme(theme) {
            web_sys::console::warn_1(&format!("[STORAGE] theme not saved: {}", err).into());
        }
    }

    /// Mirror the current collection to localStorage (full snapshot).
    /// Write failures leave the in-memory state authoritative.
    fn persist_items(&self) {
        if let Err(err) = storage::save_items(&self.store.items().read()) {
            web_sys::console::warn_1(&format!("[STORAGE] items not saved: {}", err).into());
        }
    }
}

/// Get the app context from Leptos context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Set the `data-theme` attribute on `<html>` so the stylesheet switches
/// its variables.
pub fn apply_theme(theme: Theme) {
    if let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    {
        let _ = element.set_attribute("data-theme", theme.as_str());
    }
}
