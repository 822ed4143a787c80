pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use config::AppConfig;
pub use core::extract::Extractor;
pub use core::pipeline::AtisPipeline;
pub use core::source::HttpAtisSource;
pub use domain::model::{AtisSnapshot, RawAtis};
pub use domain::ports::AtisSource;
pub use utils::error::{AtisError, Result};
