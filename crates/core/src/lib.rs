//! # CVL Core
//!
//! Core business logic for the CVL clinic visit log.
//!
//! This crate contains pure data operations over visit records:
//! - `Visit` construction with field validation
//! - the in-memory, append-only `VisitStore`
//! - aggregation and reporting (grouped counts, dashboard, text charts)
//!
//! **No I/O concerns**: prompting, screen handling and CSV persistence belong
//! in `cvl-cli` and `cvl_storage`. Everything here is synchronous and
//! single-threaded; the store is an ordinary owned value passed by reference
//! to whichever component needs it.

pub mod charts;
pub mod error;
pub mod reports;
pub mod store;
pub mod visit;

pub use charts::render_charts;
pub use error::{ReportError, StoreError, ValidationError};
pub use reports::{dashboard, Dashboard, DashboardSummary};
pub use store::VisitStore;
pub use visit::{validate_entry_date, Visit};
