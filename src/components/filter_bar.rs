//! Filter Bar Component
//!
//! Search input, category filter chips and the view mode toggle.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::models::{ViewMode, CATEGORIES};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <div class="filter-bar">
            <input
                type="text"
                class="search-input"
                placeholder="Search items..."
                prop:value=move || store.search_term().get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    ctx.set_search_term(input.value());
                }
            />

            <div class="category-chips">
                <button
                    class=move || if store.filter_category().get().is_none() {
                        "chip active"
                    } else {
                        "chip"
                    }
                    on:click=move |_| ctx.set_filter_category(None)
                >
                    "All"
                </button>
                {CATEGORIES.iter().map(|info| {
                    let value = info.category;
                    let is_selected = move || store.filter_category().get() == Some(value);
                    view! {
                        <button
                            class=move || if is_selected() {
                                format!("chip active {}", info.color)
                            } else {
                                format!("chip {}", info.color)
                            }
                            on:click=move |_| ctx.set_filter_category(Some(value))
                        >
                            {info.icon} " " {info.label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="view-mode-toggle">
                <button
                    class=move || if store.view_mode().get() == ViewMode::All {
                        "view-btn active"
                    } else {
                        "view-btn"
                    }
                    on:click=move |_| ctx.set_view_mode(ViewMode::All)
                >
                    "List"
                </button>
                <button
                    class=move || if store.view_mode().get() == ViewMode::Category {
                        "view-btn active"
                    } else {
                        "view-btn"
                    }
                    on:click=move |_| ctx.set_view_mode(ViewMode::Category)
                >
                    "By category"
                </button>
            </div>
        </div>
    }
}
