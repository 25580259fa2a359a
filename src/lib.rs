pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::app::session::{SearchState, Session};
pub use crate::config::ClientConfig;
pub use crate::core::client::ApiClient;
pub use crate::core::timeseries::{fetch_recent_series, fetch_series, to_chart_points};
pub use crate::domain::model::{EbitdaResponse, FsDiv, Query, ReportCode, TimeSeriesPoint, Warning};
pub use crate::domain::ports::EbitdaSource;
pub use crate::utils::error::{EbitdaError, Result};
