//! Expense forecasting pipeline
//!
//! Projects next month's total spend from a user's expense history in three
//! steps:
//! - `aggregate` - groups raw expense records into monthly buckets
//! - `trend` - fits a quadratic trend over the bucketed series
//! - `service` - orchestrates both behind the [`ExpenseStore`] seam
//!
//! The pipeline is pure request/response: buckets and fitted coefficients are
//! recomputed on every call and never cached or shared across users.

pub mod aggregate;
pub mod service;
pub mod trend;

pub use aggregate::{monthly_buckets, PeriodBucket};
pub use service::{forecast, ExpenseStore, ForecastResult};
pub use trend::TrendModel;
