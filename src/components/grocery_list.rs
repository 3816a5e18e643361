//! Grocery List Component
//!
//! Renders the projected view: one flat run of rows, or one section per
//! non-empty category in canonical order.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::projection::project;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn GroceryList() -> impl IntoView {
    let store = use_app_store();

    let projected = move || {
        project(
            &store.items().read(),
            &store.search_term().read(),
            store.filter_category().get(),
            store.view_mode().get(),
        )
    };

    view! {
        <div class="grocery-list">
            <Show when=move || projected().matched_count() == 0>
                <p class="empty-state">
                    {move || if store.items().read().is_empty() {
                        "Your grocery list is empty. Add your first item above."
                    } else {
                        "Nothing matches the current search or filter."
                    }}
                </p>
            </Show>

            {move || projected().groups.into_iter().map(|group| {
                let items = group.items;
                let count = items.len();
                view! {
                    <section class="item-group">
                        {group.info.map(|info| view! {
                            <h2 class=format!("group-header {}", info.color)>
                                <span class="group-icon">{info.icon}</span>
                                <span class="group-label">{info.label}</span>
                                <span class="group-count">{count}</span>
                            </h2>
                        })}
                        <For
                            each=move || items.clone()
                            key=|item| {
                                // Only these fields change after creation;
                                // keying on them forces a re-render when
                                // the row's data moves under it
                                (item.id, item.completed, item.quantity)
                            }
                            children=move |item| view! { <ItemRow item=item /> }
                        />
                    </section>
                }
            }).collect_view()}
        </div>
    }
}
