use super::{fixture, june_20};
use crate::core::services::{ExpenseFilter, NewExpense, ServiceError};
use crate::domain::{Budget, Category, Identifiable};
use crate::errors::TrackerError;

fn add(fx: &super::Fixture, description: &str, amount: f64, category: &str) {
    fx.expense_service
        .add(NewExpense {
            description,
            amount,
            category,
        })
        .unwrap();
}

#[test]
fn add_without_budget_reports_no_remaining() {
    let fx = fixture(june_20());
    let added = fx
        .expense_service
        .add(NewExpense {
            description: "Lunch",
            amount: 12.0,
            category: "food",
        })
        .unwrap();
    assert_eq!(added.expense.id(), 1);
    assert_eq!(added.expense.created_at(), june_20());
    assert_eq!(added.remaining, None);
    assert_eq!(added.overspent(), None);
}

#[test]
fn add_reports_remaining_monthly_budget() {
    let fx = fixture(june_20());
    fx.budgets.save(Budget::new(1000.0, 6, 2025)).unwrap();
    add(&fx, "Groceries", 400.0, "FOOD");
    let added = fx
        .expense_service
        .add(NewExpense {
            description: "Fiber",
            amount: 100.0,
            category: "internet_bill",
        })
        .unwrap();
    assert_eq!(added.remaining, Some(500.0));
    assert_eq!(added.overspent(), None);
}

#[test]
fn add_flags_overspending() {
    let fx = fixture(june_20());
    fx.budgets.save(Budget::new(100.0, 6, 2025)).unwrap();
    let added = fx
        .expense_service
        .add(NewExpense {
            description: "Debt payment",
            amount: 150.0,
            category: "debts",
        })
        .unwrap();
    assert_eq!(added.overspent(), Some(50.0));
}

#[test]
fn spending_the_budget_exactly_counts_as_exhausted() {
    let fx = fixture(june_20());
    fx.budgets.save(Budget::new(100.0, 6, 2025)).unwrap();
    add(&fx, "Groceries", 60.0, "food");
    let added = fx
        .expense_service
        .add(NewExpense {
            description: "Fruit",
            amount: 40.0,
            category: "fruits",
        })
        .unwrap();
    assert_eq!(added.remaining, Some(0.0));
    assert_eq!(added.overspent(), Some(0.0));
}

#[test]
fn invalid_category_fails_before_any_write() {
    let fx = fixture(june_20());
    let err = fx
        .expense_service
        .add(NewExpense {
            description: "Mystery",
            amount: 5.0,
            category: "toys",
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Core(TrackerError::CategoryNotFound(_))
    ));
    assert_eq!(fx.expenses.count().unwrap(), 0);
    assert_eq!(fx.expenses.high_water_mark(), 0);
}

#[test]
fn rejects_non_positive_amount_and_blank_description() {
    let fx = fixture(june_20());
    for (description, amount) in [("Lunch", 0.0), ("Lunch", -3.0), ("   ", 4.0), ("Lunch", f64::NAN)] {
        let err = fx
            .expense_service
            .add(NewExpense {
                description,
                amount,
                category: "food",
            })
            .unwrap_err();
        assert!(matches!(err, ServiceError::Invalid(_)));
    }
    assert_eq!(fx.expenses.count().unwrap(), 0);
}

#[test]
fn list_and_summary_dispatch_on_filter() {
    let fx = fixture(june_20());
    add(&fx, "Groceries", 500.3, "FOOD");
    add(&fx, "Fiber", 200.0, "INTERNET_BILL");

    let all = fx.expense_service.list(ExpenseFilter::all()).unwrap();
    assert_eq!(all.len(), 2);

    let food = ExpenseFilter::parse(None, Some("food")).unwrap();
    assert_eq!(fx.expense_service.list(food).unwrap().len(), 1);
    assert!((fx.expense_service.summary(food).unwrap() - 500.3).abs() < 1e-9);
    assert!((fx.expense_service.summary(ExpenseFilter::all()).unwrap() - 700.3).abs() < 1e-9);

    let june_food = ExpenseFilter::parse(Some(6), Some("FOOD")).unwrap();
    assert_eq!(june_food.category, Some(Category::Food));
    assert_eq!(fx.expense_service.list(june_food).unwrap().len(), 1);

    let july = ExpenseFilter::parse(Some(7), None).unwrap();
    assert!(fx.expense_service.list(july).unwrap().is_empty());
    assert_eq!(fx.expense_service.summary(july).unwrap(), 0.0);
}

#[test]
fn filter_parse_validates() {
    assert!(matches!(
        ExpenseFilter::parse(Some(13), None),
        Err(ServiceError::Invalid(_))
    ));
    assert!(matches!(
        ExpenseFilter::parse(None, Some("snacks")),
        Err(ServiceError::Core(TrackerError::CategoryNotFound(_)))
    ));
    assert!(ExpenseFilter::parse(None, None).unwrap().is_empty());
}

#[test]
fn delete_reports_whether_anything_was_removed() {
    let fx = fixture(june_20());
    add(&fx, "Groceries", 50.0, "FOOD");
    assert!(fx.expense_service.delete(1).unwrap());
    assert!(!fx.expense_service.delete(1).unwrap());
    assert!(matches!(
        fx.expense_service.delete(0),
        Err(ServiceError::Invalid(_))
    ));
}
