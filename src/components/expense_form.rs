//! Expense Form Component
//!
//! Creates new expense records after basic validation.

use chrono::Local;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::models::{Expense, EXPENSE_CATEGORIES};
use crate::store::{store_add_expense, use_expense_store};

fn today_iso() -> String {
    Local::now().date_naive().to_string()
}

#[component]
pub fn ExpenseForm() -> impl IntoView {
    let store = use_expense_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (date, set_date) = signal(today_iso());

    let input_value = |ev: &web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        input.value()
    };

    let add_expense = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let title_value = title.get();
        let amount_value = amount.get();
        let category_value = category.get();
        let date_value = date.get();

        if title_value.is_empty()
            || amount_value.is_empty()
            || category_value.is_empty()
            || date_value.is_empty()
        {
            ctx.toast_error("Missing fields", "Fill in title, amount, category and date.");
            return;
        }
        let parsed_amount = match amount_value.parse::<f64>() {
            Ok(value) if value >= 0.0 => value,
            _ => {
                ctx.toast_error("Invalid amount", "Amount must be a non-negative number.");
                return;
            }
        };

        let expense = Expense::new(title_value, parsed_amount, category_value, date_value);
        web_sys::console::log_1(
            &format!(
                "[Expenses] Added {}",
                serde_json::to_string(&expense).unwrap_or_default()
            )
            .into(),
        );
        store_add_expense(&store, expense);

        // Reset form
        set_title.set(String::new());
        set_amount.set(String::new());
        set_category.set(String::new());
        set_date.set(today_iso());
    };

    view! {
        <form class="card expense-form" on:submit=add_expense>
            <h2 class="card-title">"Add New Expense"</h2>

            <div class="form-grid">
                <label class="form-field">
                    "Title"
                    <input
                        type="text"
                        placeholder="Enter expense title"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(input_value(&ev))
                    />
                </label>

                <label class="form-field">
                    "Amount"
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        placeholder="0.00"
                        prop:value=move || amount.get()
                        on:input=move |ev| set_amount.set(input_value(&ev))
                    />
                </label>

                <label class="form-field">
                    "Category"
                    <select
                        prop:value=move || category.get()
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                    >
                        <option value="">"Select category"</option>
                        {EXPENSE_CATEGORIES
                            .iter()
                            .map(|cat| view! { <option value=*cat>{*cat}</option> })
                            .collect_view()}
                    </select>
                </label>

                <label class="form-field">
                    "Date"
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(input_value(&ev))
                    />
                </label>
            </div>

            <button type="submit" class="primary">"Add Expense"</button>
        </form>
    }
}
