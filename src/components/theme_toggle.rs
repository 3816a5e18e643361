//! Theme Toggle Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Theme;
use crate::store::{use_app_store, AppStateStoreFields};

/// Header button switching between the light and dark theme
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <button
            class="theme-toggle"
            title=move || match store.theme().get() {
                Theme::Light => "Switch to dark theme",
                Theme::Dark => "Switch to light theme",
            }
            on:click=move |_| ctx.set_theme(store.theme().get().toggled())
        >
            {move || match store.theme().get() {
                Theme::Light => "🌙",
                Theme::Dark => "☀️",
            }}
        </button>
    }
}
