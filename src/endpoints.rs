//! The API endpoint URIs.

/// The route to create and list expenses.
pub const EXPENSES: &str = "/expenses/";
/// The route to delete a single expense.
pub const EXPENSE: &str = "/expenses/{expense_id}";
/// The route for the monthly expense total.
pub const MONTHLY_SUMMARY: &str = "/expenses/summary/monthly";
/// The route for the weekly expense total.
pub const WEEKLY_SUMMARY: &str = "/expenses/summary/weekly";
/// The route for last month's per-category expense totals.
pub const LAST_MONTH_CATEGORY_SUMMARY: &str = "/expenses/summary/last-month-category";
