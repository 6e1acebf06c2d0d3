//! Expense Stats Component
//!
//! Four summary cards derived from the filtered set. The "current month"
//! comes from the viewer's local clock.

use chrono::{Datelike, Local};
use leptos::prelude::*;

use crate::models::Expense;
use crate::stats;

#[derive(Debug, Clone, PartialEq)]
struct Summary {
    total: f64,
    this_month: f64,
    change: f64,
    average: f64,
    count: usize,
}

#[component]
pub fn ExpenseStats(expenses: Memo<Vec<Expense>>) -> impl IntoView {
    let summary = Memo::new(move |_| {
        let expenses = expenses.get();
        let today = Local::now().date_naive();
        let this_month = stats::month_total(&expenses, today.year(), today.month());
        let (prev_year, prev_month) = stats::previous_month(today);
        let last_month = stats::month_total(&expenses, prev_year, prev_month);
        Summary {
            total: stats::grand_total(&expenses),
            this_month,
            change: stats::monthly_change(this_month, last_month),
            average: stats::average(&expenses),
            count: expenses.len(),
        }
    });

    // For expenses, spending less than last month is the good direction
    let change_label = move || {
        let change = summary.get().change;
        if change == 0.0 {
            "No change".to_string()
        } else {
            format!("{:.1}% vs last month", change.abs())
        }
    };
    let change_class = move || {
        if summary.get().change < 0.0 {
            "stat-change trend-good"
        } else {
            "stat-change trend-bad"
        }
    };

    view! {
        <div class="stats-grid">
            <div class="card stat-card">
                <div class="stat-label">"Total Expenses"</div>
                <div class="stat-value">{move || format!("${:.2}", summary.get().total)}</div>
            </div>

            <div class="card stat-card">
                <div class="stat-label">"This Month"</div>
                <div class="stat-value">{move || format!("${:.2}", summary.get().this_month)}</div>
                <p class=change_class>{change_label}</p>
            </div>

            <div class="card stat-card">
                <div class="stat-label">"Average Expense"</div>
                <div class="stat-value">{move || format!("${:.2}", summary.get().average)}</div>
            </div>

            <div class="card stat-card">
                <div class="stat-label">"Total Transactions"</div>
                <div class="stat-value">{move || summary.get().count.to_string()}</div>
            </div>
        </div>
    }
}
