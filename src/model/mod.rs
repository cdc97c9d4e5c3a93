// File: ./src/model/mod.rs
pub mod catalog;
pub mod envelope;
pub mod filters;
pub mod normalize;
pub mod raw;
pub mod record;
pub mod status;

pub use filters::{RecordKind, SearchFilters};
pub use raw::RawRecord;
pub use record::{DeadlineStatus, UnifiedRecord};
