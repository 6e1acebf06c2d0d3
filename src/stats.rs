//! Expense Aggregation
//!
//! Pure helpers behind the stat cards and the category chart. Everything
//! is recomputed from the full filtered set on each change.

use crate::models::Expense;
use chrono::{Datelike, NaiveDate};

/// One slice of the category breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub category: String,
    pub amount: f64,
    /// Share of the grand total, formatted to one decimal
    pub percentage: String,
}

pub fn grand_total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

pub fn average(expenses: &[Expense]) -> f64 {
    if expenses.is_empty() {
        0.0
    } else {
        grand_total(expenses) / expenses.len() as f64
    }
}

/// Sum of expenses whose date falls in (year, month). Dates that fail to
/// parse as ISO are skipped.
pub fn month_total(expenses: &[Expense], year: i32, month: u32) -> f64 {
    expenses
        .iter()
        .filter_map(|e| {
            NaiveDate::parse_from_str(&e.date, "%Y-%m-%d")
                .ok()
                .map(|d| (d, e.amount))
        })
        .filter(|(d, _)| d.year() == year && d.month() == month)
        .map(|(_, amount)| amount)
        .sum()
}

/// (year, month) of the month before `today`
pub fn previous_month(today: NaiveDate) -> (i32, u32) {
    if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    }
}

/// Month-over-month change in percent; 0 when last month had no expenses
pub fn monthly_change(this_month: f64, last_month: f64) -> f64 {
    if last_month > 0.0 {
        (this_month - last_month) / last_month * 100.0
    } else {
        0.0
    }
}

/// Per-category sums in first-occurrence order, with percentage share of
/// the grand total
pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategorySlice> {
    let total = grand_total(expenses);
    let mut sums: Vec<(String, f64)> = Vec::new();
    for expense in expenses {
        match sums.iter_mut().find(|(c, _)| *c == expense.category) {
            Some((_, amount)) => *amount += expense.amount,
            None => sums.push((expense.category.clone(), expense.amount)),
        }
    }
    sums.into_iter()
        .map(|(category, amount)| {
            let share = if total > 0.0 { amount / total * 100.0 } else { 0.0 };
            CategorySlice {
                category,
                amount,
                percentage: format!("{:.1}", share),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_expense(amount: f64, category: &str, date: &str) -> Expense {
        Expense {
            id: format!("{}-{}", category, date),
            title: category.to_string(),
            amount,
            category: category.to_string(),
            date: date.to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_grand_total_and_average() {
        let expenses = vec![
            make_expense(10.0, "Travel", "2024-03-01"),
            make_expense(20.0, "Other", "2024-03-02"),
        ];
        assert_eq!(grand_total(&expenses), 30.0);
        assert_eq!(average(&expenses), 15.0);
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn test_month_total_buckets_by_year_and_month() {
        let expenses = vec![
            make_expense(5.0, "Other", "2024-03-01"),
            make_expense(7.0, "Other", "2024-03-30"),
            make_expense(100.0, "Other", "2023-03-15"),
            make_expense(100.0, "Other", "2024-04-01"),
        ];
        assert_eq!(month_total(&expenses, 2024, 3), 12.0);
    }

    #[test]
    fn test_month_total_skips_unparseable_dates() {
        let expenses = vec![
            make_expense(5.0, "Other", "2024-03-01"),
            make_expense(9.0, "Other", "not-a-date"),
        ];
        assert_eq!(month_total(&expenses, 2024, 3), 5.0);
    }

    #[test]
    fn test_previous_month_wraps_january() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        assert_eq!(previous_month(jan), (2023, 12));
        let jul = NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
        assert_eq!(previous_month(jul), (2024, 6));
    }

    #[test]
    fn test_monthly_change_zero_when_no_prior_spend() {
        assert_eq!(monthly_change(250.0, 0.0), 0.0);
        assert_eq!(monthly_change(150.0, 100.0), 50.0);
        assert_eq!(monthly_change(50.0, 100.0), -50.0);
    }

    #[test]
    fn test_category_sums_add_up_to_grand_total() {
        let expenses = vec![
            make_expense(4.5, "Food & Dining", "2024-01-01"),
            make_expense(38.0, "Transportation", "2024-01-15"),
            make_expense(12.3, "Food & Dining", "2024-01-20"),
            make_expense(99.99, "Travel", "2024-02-01"),
        ];
        let breakdown = category_breakdown(&expenses);
        assert_eq!(breakdown.len(), 3);
        let sum: f64 = breakdown.iter().map(|s| s.amount).sum();
        assert!((sum - grand_total(&expenses)).abs() < 1e-9);
    }

    #[test]
    fn test_breakdown_order_and_percentage_format() {
        let expenses = vec![
            make_expense(75.0, "Shopping", "2024-01-01"),
            make_expense(25.0, "Travel", "2024-01-02"),
        ];
        let breakdown = category_breakdown(&expenses);
        assert_eq!(breakdown[0].category, "Shopping");
        assert_eq!(breakdown[0].percentage, "75.0");
        assert_eq!(breakdown[1].percentage, "25.0");
    }

    #[test]
    fn test_breakdown_of_empty_set() {
        assert!(category_breakdown(&[]).is_empty());
    }
}
