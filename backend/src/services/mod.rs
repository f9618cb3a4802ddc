//! Service layer for business logic.
//!
//! Services are pure functions over the loaded dataset: they aggregate,
//! filter, and shape data into chart specs and control declarations. They
//! never fail at request time; unmatched input yields empty output.

pub mod aggregation;

pub mod dashboard;

pub mod filtering;

pub mod pie_chart;
pub mod scatter_chart;

pub use aggregation::aggregate;
pub use dashboard::build_dashboard_layout;
pub use filtering::filter;
pub use pie_chart::build_pie_view;
pub use scatter_chart::build_scatter_view;
