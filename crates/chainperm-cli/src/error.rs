use clap::error::ErrorKind;
use thiserror::Error;

/// Hint printed when a credential flag is missing.
pub const USAGE_HINT: &str = "Please input username, password, and clientid parameters";

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Run(#[from] chainperm_core::ClientError),
}

impl CliError {
    /// Every aborted run, including a bad invocation, exits with status 1.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) | Self::Run(_) => 1,
        }
    }

    /// Usage error for a rejected command line.
    pub fn from_parse_kind(kind: ErrorKind) -> Self {
        let hint = if kind == ErrorKind::MissingRequiredArgument {
            USAGE_HINT
        } else {
            "invalid arguments"
        };
        Self::Usage(String::from(hint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chainperm_core::ClientError;

    #[test]
    fn run_failures_exit_with_one() {
        let error = CliError::from(ClientError::LimitExceeded {
            limit: 12,
            available: 10,
        });
        assert_eq!(error.exit_code(), 1);
        assert_eq!(
            error.to_string(),
            "input limit (12) is higher than number of chain constituents (10)"
        );
    }

    #[test]
    fn render_io_failures_arrive_as_run_errors() {
        let error = CliError::from(ClientError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        )));
        assert!(matches!(error, CliError::Run(ClientError::Render(_))));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn missing_flags_map_to_credential_hint() {
        let error = CliError::from_parse_kind(ErrorKind::MissingRequiredArgument);
        assert_eq!(
            error.to_string(),
            "Please input username, password, and clientid parameters"
        );
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn other_parse_failures_map_to_generic_usage() {
        let error = CliError::from_parse_kind(ErrorKind::ValueValidation);
        assert_eq!(error.to_string(), "invalid arguments");
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn usage_errors_exit_with_one() {
        let error = CliError::Usage(String::from("missing --username"));
        assert_eq!(error.exit_code(), 1);
    }
}
