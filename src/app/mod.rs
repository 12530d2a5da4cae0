pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod logging;
mod reporter;

pub use context::AppContext;
pub use reporter::{Reporter, Verbosity};
