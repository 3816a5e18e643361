//! Stats Bar Component
//!
//! Footer with aggregate counters and the bulk clear-completed action.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::projection::stats_for;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatsBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let stats = move || stats_for(&store.items().read());

    view! {
        <footer class="stats-bar">
            <p class="item-count">
                {move || {
                    let s = stats();
                    format!(
                        "{} items, {} to buy, {} done ({:.0}%)",
                        s.total, s.remaining, s.completed, s.completion_percentage
                    )
                }}
            </p>

            <Show when=move || { stats().estimated_total > 0.0 }>
                <p class="estimated-total">
                    {move || format!("~${:.2} left to buy", stats().estimated_total)}
                </p>
            </Show>

            <Show when=move || { stats().completed > 0 }>
                <DeleteConfirmButton
                    button_class="clear-completed-btn"
                    label="Clear completed"
                    on_confirm=Callback::new(move |_| ctx.clear_completed())
                />
            </Show>
        </footer>
    }
}
