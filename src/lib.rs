//! Folio - Portfolio Site as a CLI
//!
//! A personal portfolio rendered as a command-line tool:
//! - Task manager and expense tracker demos with JSON persistence
//! - Weather lookup and recipe search against public APIs, with demo
//!   datasets when no key is configured
//! - A validated contact form that builds a prefilled Gmail compose URL
//! - Static profile content (about, projects, FAQ, resume)
//!
//! # Example
//!
//! ```ignore
//! use folio::tasks::{TaskBook, TaskFilter};
//!
//! let mut book = TaskBook::default();
//! book.add("Buy milk");
//! assert_eq!(book.stats().remaining, 1);
//! ```

// Core modules
pub mod store;
pub mod records;
pub mod forms;
pub mod fetch;
pub mod config;
pub mod cli;

// Widget modules
pub mod tasks;
pub mod expenses;
pub mod weather;
pub mod recipes;
pub mod contact;
pub mod profile;

// Re-export commonly used types for convenience
pub use config::Config;
pub use fetch::{FetchError, FetchSession, FetchState};
pub use store::JsonStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get the library info
pub fn info() -> String {
    format!("{} v{} - Portfolio Site as a CLI", NAME, VERSION)
}
