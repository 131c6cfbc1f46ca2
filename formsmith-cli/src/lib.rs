//! formsmith command-line interface.
//!
//! The binary loads configuration once, then dispatches to one of the
//! commands in [`commands`]. Form generation asks its questions through the
//! [`dialog::Dialog`] trait when a terminal is attached.

pub mod cli;
pub mod commands;
pub mod dialog;
pub mod error;

pub use cli::{Cli, Commands, GenerateCommands, GenerateFormArgs, GenerateProfileFormArgs};
pub use error::{CliError, CliResult};

use formsmith_config::{ConfigProvider, FormsmithConfig};

/// Load configuration honouring the global `--config` and `--label-strategy`
/// options
///
/// `strategy` takes precedence over `--label-strategy` when given.
pub fn load_config(cli: &Cli, strategy: Option<&str>) -> CliResult<FormsmithConfig> {
    let override_key = strategy
        .map(str::to_string)
        .or_else(|| cli.label_strategy.clone());

    let mut provider = ConfigProvider::new().with_label_strategy(override_key);
    if let Some(path) = &cli.config {
        provider = provider.with_file(path);
    }
    Ok(provider.load()?)
}
