//! Application Root
//!
//! Rehydrates persisted state into the store and lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterBar, GroceryList, NewItemForm, StatsBar, ThemeToggle};
use crate::context::{apply_theme, AppContext};
use crate::storage;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Load persisted state once, before the first render. Anything
    // malformed degrades to an empty list rather than crashing.
    let items = match storage::load_items() {
        Ok(items) => items,
        Err(err) => {
            web_sys::console::warn_1(&format!("[STORAGE] starting empty: {}", err).into());
            Vec::new()
        }
    };
    web_sys::console::log_1(&format!("[APP] loaded {} items", items.len()).into());
    let theme = storage::load_theme();
    apply_theme(theme);

    let store = Store::new(AppState {
        items,
        theme,
        ..Default::default()
    });
    let ctx = AppContext::new(store);
    provide_context(ctx);
    provide_context(store);

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Cartall"</h1>
                <ThemeToggle />
            </header>

            <main class="main-content">
                <NewItemForm />
                <FilterBar />
                <GroceryList />
                <StatsBar />
            </main>
        </div>
    }
}
