//! Launch dataset loading.
//!
//! The dataset is read from CSV once at startup into a [`DataContext`], which
//! is then shared read-only by every request:
//!
//! ```text
//! ┌──────────────────────┐     ┌──────────────────────────────────┐
//! │  loader (CSV → rows) │ ──▶ │  DataContext                     │
//! └──────────────────────┘     │  - records, distinct sites       │
//!                              │  - global payload bounds         │
//!                              │  - cached per-site outcome counts│
//!                              └──────────────────────────────────┘
//! ```

pub mod context;
pub mod error;
pub mod loader;

pub use context::DataContext;
pub use error::{DatasetError, DatasetResult};
pub use loader::{load_launch_records, parse_launch_records};
