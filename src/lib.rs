//! Native backend for exporting and importing prompt logs.
//!
//! [`app::App`] is the facade the front end calls. It reaches the outside
//! world only through the ports in [`ports`], bundled in a
//! [`context::ServiceContext`] that is injected once at construction.

pub mod adapters;
pub mod app;
pub mod bridge;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod ports;
pub mod pretty;

pub use app::App;
pub use error::AppError;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli)
}
