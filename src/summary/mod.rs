//! Aggregate summaries over the expense table.
//!
//! This module contains the monthly and weekly bucketed totals, last month's
//! per-category totals, and the date-window derivation they share.

mod category_endpoint;
mod monthly_endpoint;
mod weekly_endpoint;
mod window;

pub use category_endpoint::get_last_month_category_summary_endpoint;
pub use monthly_endpoint::get_monthly_summary_endpoint;
pub use weekly_endpoint::get_weekly_summary_endpoint;

/// Round a summed total to two decimal places, half away from zero.
pub(crate) fn round_to_cents(total: f64) -> f64 {
    (total * 100.0).round() / 100.0
}
