pub mod client;
pub mod settle;
pub mod timeseries;
pub mod warnings;

pub use crate::domain::model::{EbitdaResponse, Query, TimeSeriesPoint};
pub use crate::domain::ports::{ConfigProvider, EbitdaSource};
pub use crate::utils::error::Result;
