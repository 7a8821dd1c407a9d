pub mod etl;
pub mod filter;
pub mod reader;
pub mod writer;

pub use crate::domain::model::{NormalizedRecord, RawRecord};
pub use crate::domain::ports::{ConfigProvider, RowTransformer};
pub use crate::utils::error::Result;
