pub mod filter;
pub mod generator;
pub mod handlers;
pub mod models;

pub use filter::{filter, ArchiveFilter};
pub use generator::{generate, DEFAULT_WINDOW_DAYS, PLACEHOLDER_PAGE_COUNT};
pub use models::ArchiveEntry;
