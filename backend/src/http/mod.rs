//! HTTP server module for the dashboard.
//!
//! This module provides an axum-based HTTP server that exposes the dashboard
//! page and its chart callbacks as a REST API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Query parsing into control values                      │
//! │  - JSON serialization of chart specs                      │
//! │  - CORS, compression, request tracing                     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Route callbacks + Service Layer                          │
//! │  - Filtering, aggregation, chart shaping                  │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  DataContext (read-only, loaded once at startup)          │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
