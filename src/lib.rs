//! wb-lookup - Fast, stateless Wildberries product card lookup CLI
//!
//! Fetches one product card with browser-like request headers and prints
//! a summary or a single field.

pub mod args;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod wildberries;

pub use args::Invocation;
pub use config::Config;
pub use error::{LookupError, UsageError};
pub use format::Field;
pub use wildberries::{LookupResult, Product};
