// Crate root library declaration and module exports.
pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod finder;
pub mod model;
pub mod pager;
pub mod query;
pub mod sample;
pub mod session;

pub use error::FinderError;
pub use finder::{DataSource, Fetched, Finder};
