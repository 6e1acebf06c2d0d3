//! Global Expense Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use crate::models::{Expense, ExpenseFilters};
use leptos::prelude::*;
use reactive_stores::Store;

/// Expense module state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ExpenseState {
    /// All expense records, newest first
    pub expenses: Vec<Expense>,
    /// Filters narrowing the visible set
    pub filters: ExpenseFilters,
}

/// Type alias for the store
pub type ExpenseStore = Store<ExpenseState>;

/// Get the expense store from context
pub fn use_expense_store() -> ExpenseStore {
    expect_context::<ExpenseStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Prepend a newly created expense
pub fn store_add_expense(store: &ExpenseStore, expense: Expense) {
    store.expenses().write().insert(0, expense);
}

/// Replace an expense's fields by id, keeping id and created_at
pub fn store_update_expense(
    store: &ExpenseStore,
    id: &str,
    title: String,
    amount: f64,
    category: String,
    date: String,
) {
    store
        .expenses()
        .write()
        .iter_mut()
        .find(|expense| expense.id == id)
        .map(|expense| {
            expense.title = title;
            expense.amount = amount;
            expense.category = category;
            expense.date = date;
        });
}

/// Remove an expense from the store by id
pub fn store_remove_expense(store: &ExpenseStore, id: &str) {
    store.expenses().write().retain(|expense| expense.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_expense(title: &str, amount: f64) -> Expense {
        Expense::new(
            title.to_string(),
            amount,
            "Other".to_string(),
            "2024-01-01".to_string(),
        )
    }

    #[test]
    fn test_add_prepends() {
        let store = Store::new(ExpenseState::default());
        store_add_expense(&store, make_expense("Coffee", 4.5));
        store_add_expense(&store, make_expense("Lunch", 12.0));

        let expenses = store.expenses().read_untracked();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].title, "Lunch");
        assert_eq!(expenses[1].title, "Coffee");
    }

    #[test]
    fn test_remove_deletes_exactly_one_and_keeps_order() {
        let store = Store::new(ExpenseState::default());
        store_add_expense(&store, make_expense("a", 1.0));
        store_add_expense(&store, make_expense("b", 2.0));
        store_add_expense(&store, make_expense("c", 3.0));

        let middle_id = store.expenses().read_untracked()[1].id.clone();
        store_remove_expense(&store, &middle_id);

        let titles: Vec<String> = store
            .expenses()
            .read_untracked()
            .iter()
            .map(|e| e.title.clone())
            .collect();
        assert_eq!(titles, vec!["c", "a"]);
    }

    #[test]
    fn test_update_replaces_fields_but_keeps_identity() {
        let store = Store::new(ExpenseState::default());
        store_add_expense(&store, make_expense("Lunch", 12.0));
        let original = store.expenses().read_untracked()[0].clone();

        store_update_expense(
            &store,
            &original.id,
            "Dinner".to_string(),
            20.0,
            "Travel".to_string(),
            "2024-02-02".to_string(),
        );

        let updated = store.expenses().read_untracked()[0].clone();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.title, "Dinner");
        assert_eq!(updated.amount, 20.0);
        assert_eq!(updated.category, "Travel");
    }
}
