//! folio-core: record aggregation, summary statistics, chart datasets, and
//! the filter/table model behind the folio dashboard.
//!
//! # Conventions
//!
//! - **Errors**: [`error::FolioError`] at the library boundary; `anyhow` is
//!   reserved for the CLI layer.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `error!`, `debug!`).

pub mod aggregate;
pub mod chart;
pub mod collate;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod palette;
pub mod record;
pub mod store;
pub mod summary;
pub mod table;
