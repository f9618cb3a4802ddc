//! # Launch Records Dashboard
//!
//! Backend for an interactive dashboard over a small dataset of rocket
//! launches. A launch-site dropdown and a payload-mass range slider drive two
//! charts: a success pie chart and a payload/outcome scatter chart.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`dataset`]: CSV loading and the read-only [`dataset::DataContext`]
//! - [`models`]: Launch records, filter criteria and chart specs
//! - [`services`]: Aggregation, filtering and chart/layout builders
//! - [`routes`]: Control ids, layout types and per-chart callbacks
//! - [`api`]: DTO re-exports for the HTTP API
//! - [`config`]: TOML + environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Chart rendering is left to the browser: the API returns renderer-neutral
//! [`models::ChartSpec`] values and the bundled page draws them with Plotly.

pub mod api;
pub mod config;
pub mod dataset;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
