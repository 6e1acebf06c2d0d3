//! Expense List Component
//!
//! Filtered expense records with inline edit and delete.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::models::{Expense, EXPENSE_CATEGORIES};
use crate::store::{store_remove_expense, store_update_expense, use_expense_store};

/// "Jan 3, 2024" display form; unparseable dates pass through as-is
fn format_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// CSS hook for the category badge
fn category_class(category: &str) -> &'static str {
    match category {
        "Food & Dining" => "badge-food",
        "Transportation" => "badge-transport",
        "Shopping" => "badge-shopping",
        "Entertainment" => "badge-entertainment",
        "Bills & Utilities" => "badge-bills",
        "Healthcare" => "badge-health",
        "Travel" => "badge-travel",
        "Education" => "badge-education",
        _ => "badge-other",
    }
}

#[component]
pub fn ExpenseList(expenses: Memo<Vec<Expense>>) -> impl IntoView {
    let store = use_expense_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // Record currently in the edit dialog, plus its field drafts
    let (editing, set_editing) = signal(None::<Expense>);
    let (edit_title, set_edit_title) = signal(String::new());
    let (edit_amount, set_edit_amount) = signal(String::new());
    let (edit_category, set_edit_category) = signal(String::new());
    let (edit_date, set_edit_date) = signal(String::new());

    let open_edit = move |expense: Expense| {
        set_edit_title.set(expense.title.clone());
        set_edit_amount.set(expense.amount.to_string());
        set_edit_category.set(expense.category.clone());
        set_edit_date.set(expense.date.clone());
        set_editing.set(Some(expense));
    };

    let submit_edit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(expense) = editing.get_untracked() else {
            return;
        };

        let title = edit_title.get();
        let amount = edit_amount.get();
        let category = edit_category.get();
        let date = edit_date.get();
        if title.is_empty() || amount.is_empty() || category.is_empty() || date.is_empty() {
            ctx.toast_error("Missing fields", "Fill in title, amount, category and date.");
            return;
        }
        let parsed_amount = match amount.parse::<f64>() {
            Ok(value) if value >= 0.0 => value,
            _ => {
                ctx.toast_error("Invalid amount", "Amount must be a non-negative number.");
                return;
            }
        };

        store_update_expense(&store, &expense.id, title, parsed_amount, category, date);
        set_editing.set(None);
    };

    view! {
        <Show when=move || expenses.get().is_empty()>
            <div class="card empty-card">
                <h3>"No expenses yet"</h3>
                <p class="muted">"Start tracking your expenses by adding your first one above."</p>
            </div>
        </Show>

        <Show when=move || !expenses.get().is_empty()>
            <div class="card expense-list">
                <h2 class="card-title">
                    {move || format!("Recent Expenses ({})", expenses.get().len())}
                </h2>

                <For
                    each=move || expenses.get()
                    key=|expense| expense.id.clone()
                    children=move |expense| {
                        let id = expense.id.clone();
                        let edit_copy = expense.clone();
                        view! {
                            <div class="expense-row">
                                <div class="expense-main">
                                    <h4 class="expense-title">{expense.title.clone()}</h4>
                                    <div class="expense-meta">
                                        <span class=format!("badge {}", category_class(&expense.category))>
                                            {expense.category.clone()}
                                        </span>
                                        <span class="expense-date">{format_date(&expense.date)}</span>
                                    </div>
                                </div>

                                <div class="expense-actions">
                                    <span class="expense-amount">
                                        {format!("${:.2}", expense.amount)}
                                    </span>
                                    <button
                                        class="edit-btn"
                                        on:click=move |_| open_edit(edit_copy.clone())
                                    >
                                        "Edit"
                                    </button>
                                    <DeleteConfirmButton
                                        button_class="delete-btn"
                                        on_confirm=Callback::new(move |_| {
                                            store_remove_expense(&store, &id);
                                        })
                                    />
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </Show>

        // Edit dialog
        {move || {
            editing.get().map(|_| {
                view! {
                    <div class="modal-backdrop" on:click=move |_| set_editing.set(None)>
                        <div class="modal" on:click=move |ev| ev.stop_propagation()>
                            <h3 class="modal-title">"Edit Expense"</h3>
                            <form on:submit=submit_edit>
                                <label class="form-field">
                                    "Title"
                                    <input
                                        type="text"
                                        prop:value=move || edit_title.get()
                                        on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="form-field">
                                    "Amount"
                                    <input
                                        type="number"
                                        step="0.01"
                                        min="0"
                                        prop:value=move || edit_amount.get()
                                        on:input=move |ev| set_edit_amount.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="form-field">
                                    "Category"
                                    <select
                                        prop:value=move || edit_category.get()
                                        on:change=move |ev| set_edit_category.set(event_target_value(&ev))
                                    >
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
                                        prop:value=move || edit_date.get()
                                        on:input=move |ev| set_edit_date.set(event_target_value(&ev))
                                    />
                                </label>
                                <button type="submit" class="primary">"Update Expense"</button>
                            </form>
                        </div>
                    </div>
                }
            })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-03"), "Jan 3, 2024");
        assert_eq!(format_date("2023-12-25"), "Dec 25, 2023");
        assert_eq!(format_date("garbage"), "garbage");
    }

    #[test]
    fn test_every_category_has_a_badge_class() {
        for &category in EXPENSE_CATEGORIES {
            assert_ne!(category_class(category), "");
        }
        assert_eq!(category_class("Unknown"), "badge-other");
    }
}
