//! Filter Bar Component
//!
//! Category and date-range filters narrowing the visible expense set.

use leptos::prelude::*;

use crate::models::EXPENSE_CATEGORIES;
use crate::store::{use_expense_store, ExpenseStateStoreFields};

#[component]
pub fn ExpenseFilterBar() -> impl IntoView {
    let store = use_expense_store();

    view! {
        <div class="card filter-card">
            <h2 class="card-title">"Filter Expenses"</h2>

            <div class="filter-grid">
                <label class="form-field">
                    "Category"
                    <select
                        prop:value=move || store.filters().read().category.clone()
                        on:change=move |ev| {
                            store.filters().write().category = event_target_value(&ev);
                        }
                    >
                        <option value="all">"All categories"</option>
                        {EXPENSE_CATEGORIES
                            .iter()
                            .map(|cat| view! { <option value=*cat>{*cat}</option> })
                            .collect_view()}
                    </select>
                </label>

                <label class="form-field">
                    "Start Date"
                    <input
                        type="date"
                        prop:value=move || store.filters().read().start_date.clone()
                        on:input=move |ev| {
                            store.filters().write().start_date = event_target_value(&ev);
                        }
                    />
                </label>

                <label class="form-field">
                    "End Date"
                    <input
                        type="date"
                        prop:value=move || store.filters().read().end_date.clone()
                        on:input=move |ev| {
                            store.filters().write().end_date = event_target_value(&ev);
                        }
                    />
                </label>
            </div>
        </div>
    }
}
