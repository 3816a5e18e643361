//! New Item Form Component
//!
//! Form for adding grocery items: name, category, quantity, unit,
//! priority and an optional price estimate.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::{use_app_context, NewItemInput};
use crate::models::{Category, Priority, Unit, CATEGORIES};

#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (category, set_category) = signal(Category::Produce);
    let (quantity, set_quantity) = signal(1u32);
    let (unit, set_unit) = signal(Unit::Piece);
    let (priority, set_priority) = signal(Priority::Medium);
    let (price, set_price) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = NewItemInput {
            name: name.get(),
            category: category.get(),
            quantity: quantity.get(),
            unit: unit.get(),
            priority: priority.get(),
            estimated_price: price.get().trim().parse::<f64>().ok().filter(|p| *p >= 0.0),
        };
        // Blank names are ignored by the store; keep the form as typed then
        if ctx.add_item(&input) {
            set_name.set(String::new());
            set_quantity.set(1);
            set_price.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=submit>
            <div class="new-item-row">
                <input
                    type="text"
                    class="name-input"
                    placeholder="Add an item..."
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />
                <input
                    type="number"
                    class="quantity-input"
                    min="1"
                    prop:value=move || quantity.get().to_string()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_quantity.set(input.value().parse().unwrap_or(1));
                    }
                />
                <select
                    class="unit-select"
                    on:change=move |ev| {
                        let target = ev.target().unwrap();
                        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                        set_unit.set(Unit::from_str(&select.value()));
                    }
                >
                    {Unit::ALL.iter().map(|u| {
                        let u = *u;
                        view! {
                            <option value=u.as_str() selected=move || unit.get() == u>
                                {u.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <button type="submit">"Add"</button>
            </div>

            <div class="new-item-row">
                <select
                    class="category-select"
                    on:change=move |ev| {
                        let target = ev.target().unwrap();
                        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                        set_category.set(Category::from_str(&select.value()));
                    }
                >
                    {CATEGORIES.iter().map(|info| {
                        let value = info.category;
                        view! {
                            <option value=value.as_str() selected=move || category.get() == value>
                                {info.icon} " " {info.label}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <input
                    type="number"
                    class="price-input"
                    min="0"
                    step="0.01"
                    placeholder="Est. price (optional)"
                    prop:value=move || price.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_price.set(input.value());
                    }
                />
            </div>

            <div class="priority-selector-row">
                {Priority::ALL.iter().map(|p| {
                    let p = *p;
                    let is_selected = move || priority.get() == p;
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() {
                                "priority-btn active"
                            } else {
                                "priority-btn"
                            }
                            on:click=move |_| set_priority.set(p)
                        >
                            {p.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </form>
    }
}
