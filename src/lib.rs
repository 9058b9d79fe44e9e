pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod output;
pub mod scanner;

pub use config::AppConfig;
pub use engine::{plan, BatchPlan, BatchSummary, PackageResult, SortEngine, SortResult};
pub use error::Error;
