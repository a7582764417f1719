//! Expense management for the tracking application.
//!
//! This module contains everything related to expense records:
//! - The `Expense` model and the `NewExpense` input shape
//! - Database functions for storing, listing, and deleting expenses
//! - Route handlers for the expense endpoints

mod core;
mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;

pub use core::{Expense, NewExpense, create_expense, create_expense_table, map_expense_row};
pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use list_endpoint::get_expenses_endpoint;

#[cfg(test)]
pub use core::get_expense;
