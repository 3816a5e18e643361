//! Item Row Component
//!
//! A single grocery item: checkbox, name, priority badge, quantity
//! stepper and inline delete.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::models::GroceryItem;

#[component]
pub fn ItemRow(item: GroceryItem) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id;
    let completed = item.completed;
    let quantity = item.quantity;
    let unit = item.unit;
    let priority = item.priority;
    let category = item.category.info();

    view! {
        <div class=move || if completed { "item-row completed" } else { "item-row" }>
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| ctx.toggle_completed(id)
            />

            <span class="item-category" title=category.label>{category.icon}</span>
            <span class="item-name">{item.name.clone()}</span>
            <span class=format!("priority-badge {}", priority.as_str())>
                {priority.label()}
            </span>

            <span class="quantity-stepper">
                // Decrementing at quantity 1 is silently rejected by the store
                <button class="qty-btn" on:click=move |_| ctx.adjust_quantity(id, -1)>
                    "−"
                </button>
                <span class="qty-value">{quantity} " " {unit.label()}</span>
                <button class="qty-btn" on:click=move |_| ctx.adjust_quantity(id, 1)>
                    "+"
                </button>
            </span>

            {item.estimated_price.map(|price| view! {
                <span class="item-price">{format!("~${:.2}", price)}</span>
            })}

            <DeleteConfirmButton
                button_class="delete-btn"
                label="×"
                on_confirm=Callback::new(move |_| ctx.remove_item(id))
            />
        </div>
    }
}
