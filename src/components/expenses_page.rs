//! Expense Tracker Page
//!
//! Composes the form, filters, stats, chart and list over the expense
//! store. List, stats and chart all derive from the same filtered set.

use leptos::prelude::*;

use crate::components::{ExpenseChart, ExpenseFilterBar, ExpenseForm, ExpenseList, ExpenseStats};
use crate::models::Expense;
use crate::store::{use_expense_store, ExpenseStateStoreFields};

#[component]
pub fn ExpensesPage() -> impl IntoView {
    let store = use_expense_store();

    // Filters applied once here; every derived view reads the result
    let filtered = Memo::new(move |_| {
        let filters = store.filters().get();
        store
            .expenses()
            .get()
            .into_iter()
            .filter(|expense| filters.matches(expense))
            .collect::<Vec<Expense>>()
    });

    view! {
        <div class="expenses-page">
            <ExpenseStats expenses=filtered />
            <ExpenseForm />
            <ExpenseFilterBar />

            <div class="expenses-grid">
                <ExpenseList expenses=filtered />
                <ExpenseChart expenses=filtered />
            </div>
        </div>
    }
}
