//! Frontend Models
//!
//! Expense records and the filters applied to them.

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed set of expense categories
pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Travel",
    "Education",
    "Other",
];

/// A single expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub category: String,
    /// ISO "YYYY-MM-DD"
    pub date: String,
    pub created_at: Option<String>,
}

impl Expense {
    /// Build a new record with a fresh id and creation timestamp
    pub fn new(title: String, amount: f64, category: String, date: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            amount,
            category,
            date,
            created_at: Some(Local::now().to_rfc3339()),
        }
    }
}

/// Active list filters; an empty date string means "no bound"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseFilters {
    /// "all" or one of EXPENSE_CATEGORIES
    pub category: String,
    pub start_date: String,
    pub end_date: String,
}

impl Default for ExpenseFilters {
    fn default() -> Self {
        Self {
            category: "all".to_string(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

impl ExpenseFilters {
    /// Category test and the two date bounds, combined with AND.
    /// ISO dates are lexically ordered, so plain string comparison works;
    /// bounds are inclusive.
    pub fn matches(&self, expense: &Expense) -> bool {
        if self.category != "all" && expense.category != self.category {
            return false;
        }
        if !self.start_date.is_empty() && expense.date < self.start_date {
            return false;
        }
        if !self.end_date.is_empty() && expense.date > self.end_date {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_expense(title: &str, amount: f64, category: &str, date: &str) -> Expense {
        Expense::new(
            title.to_string(),
            amount,
            category.to_string(),
            date.to_string(),
        )
    }

    fn seed() -> Vec<Expense> {
        vec![
            make_expense("Coffee", 4.5, "Food & Dining", "2024-01-01"),
            make_expense("Gas Station", 38.0, "Transportation", "2024-01-15"),
            make_expense("Cinema", 12.0, "Entertainment", "2024-02-03"),
        ]
    }

    #[test]
    fn test_new_assigns_fresh_ids() {
        let a = make_expense("Coffee", 4.5, "Food & Dining", "2024-01-01");
        let b = make_expense("Coffee", 4.5, "Food & Dining", "2024-01-01");
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert!(a.created_at.is_some());
    }

    #[test]
    fn test_default_filters_pass_everything() {
        let filters = ExpenseFilters::default();
        assert!(seed().iter().all(|e| filters.matches(e)));
    }

    #[test]
    fn test_category_filter() {
        let filters = ExpenseFilters {
            category: "Transportation".to_string(),
            ..Default::default()
        };
        let matching: Vec<_> = seed().into_iter().filter(|e| filters.matches(e)).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].title, "Gas Station");
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let filters = ExpenseFilters {
            category: "all".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: "2024-01-15".to_string(),
        };
        let matching: Vec<_> = seed().into_iter().filter(|e| filters.matches(e)).collect();
        assert_eq!(matching.len(), 2);
        assert!(matching.iter().all(|e| e.date <= "2024-01-15".to_string()));
    }

    #[test]
    fn test_start_date_alone() {
        let filters = ExpenseFilters {
            start_date: "2024-02-01".to_string(),
            ..Default::default()
        };
        let matching: Vec<_> = seed().into_iter().filter(|e| filters.matches(e)).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].title, "Cinema");
    }
}
