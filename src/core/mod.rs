pub mod extract;
pub mod pipeline;
pub mod present;
pub mod source;
pub mod translate;

pub use crate::domain::model::{AtisSnapshot, RawAtis};
pub use crate::domain::ports::AtisSource;
pub use crate::utils::error::Result;
