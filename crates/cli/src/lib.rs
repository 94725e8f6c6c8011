pub mod cli;
pub mod cmd_init;
pub mod config;
pub mod env;
pub mod error;
pub mod filter;
pub mod git;
pub mod invoke;
pub mod mapping;
pub mod resolve;
pub mod verbose;

pub use cli::{Cli, Command, InitArgs, RunArgs};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use filter::{BASELINE_TAG, FilterOptions, MATCH_ALL, compose_filter};
pub use mapping::{MappingCache, MappingSource, MappingTable};
pub use resolve::resolve_tags;
pub use verbose::VerboseLogger;
