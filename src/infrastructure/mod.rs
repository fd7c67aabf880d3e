//! # Infrastructure Layer
//!
//! External implementations: the PostgreSQL connection pool, the sqlx
//! repository implementations, and Prometheus metrics.

pub mod database;
pub mod metrics;
pub mod repositories;
