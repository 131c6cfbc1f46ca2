//! Error type for CLI commands

use formsmith::GeneratorError;
use formsmith_config::ConfigurationError;
use thiserror::Error;

/// CLI-specific result type
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigurationError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(
        "missing required option {0} (it is only asked for in interactive mode)"
    )]
    MissingOption(&'static str),

    #[error("Command aborted")]
    Aborted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(CliError::Aborted.to_string(), "Command aborted");
        assert_eq!(
            CliError::MissingOption("--entity").to_string(),
            "missing required option --entity (it is only asked for in interactive mode)"
        );

        let err: CliError = GeneratorError::InvalidField("nickname".into()).into();
        assert_eq!(err.to_string(), "Field \"nickname\" doesn't exist");
    }
}
