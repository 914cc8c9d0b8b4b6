pub mod handlers;
pub mod state;

pub use state::{page_width, PageButton, RenderFailure, ViewerAction, ViewerState};

#[cfg(test)]
mod mod_tests;
