pub mod budget_repository;
pub mod expense_repository;

pub use budget_repository::BudgetRepository;
pub use expense_repository::ExpenseRepository;
