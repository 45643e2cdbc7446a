//! Store compliance command line
//!
//! Wraps the compliance engine for test runners and manual checks: store
//! fixtures in TOML, ad-hoc single-fact comparisons, console or JSON
//! reports, and an exit status that reflects the overall verdict.

pub mod cli;
pub mod config;
pub mod reporter;

pub use cli::{run, Cli};
pub use config::{Config, ConfigError};
pub use reporter::{OutputFormat, Reporter};
