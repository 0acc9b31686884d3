use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Every way a single invocation can fail.
///
/// None of these are recovered from; `main` reports the chain and exits 1.
#[derive(Debug, Error)]
pub enum SwitchError {
    #[error("cannot read config file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse config file {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("account {0} not found")]
    UnknownAccount(String),

    #[error("invalid repo format: {0} (expected owner/repo)")]
    InvalidRepoFormat(String),

    #[error("cannot write marker file {}", path.display())]
    MarkerWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read marker file {}", path.display())]
    MarkerRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` {reason}")]
    CommandExecution { command: String, reason: CommandFailure },
}

/// Why an external command did not succeed.
#[derive(Debug)]
pub enum CommandFailure {
    Launch(io::Error),
    Exit(ExitStatus),
}

impl std::fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandFailure::Launch(e) => write!(f, "could not be started: {}", e),
            CommandFailure::Exit(status) => match status.code() {
                Some(code) => write!(f, "exited with status {}", code),
                None => write!(f, "was terminated by a signal"),
            },
        }
    }
}

pub type SwitchResult<T> = std::result::Result<T, SwitchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_account_message() {
        let err = SwitchError::UnknownAccount("school".into());
        assert_eq!(err.to_string(), "account school not found");
    }

    #[test]
    fn test_config_read_keeps_source() {
        let err = SwitchError::ConfigRead {
            path: PathBuf::from("/nowhere/config.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let message = err.to_string();
        assert!(message.contains("/nowhere/config.json"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(!message.contains("missing"));
    }

    #[test]
    fn test_cause_printed_once_in_chain() {
        let err = anyhow::Error::new(SwitchError::MarkerRead {
            path: PathBuf::from("/nowhere/marker.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        })
        .context("Error reading info");

        let rendered = format!("{:#}", err);
        assert_eq!(
            rendered,
            "Error reading info: cannot read marker file /nowhere/marker.txt: no such file"
        );
        assert_eq!(rendered.matches("no such file").count(), 1);
    }

    #[test]
    fn test_launch_failure_message() {
        let err = SwitchError::CommandExecution {
            command: "git clone x".into(),
            reason: CommandFailure::Launch(io::Error::new(io::ErrorKind::NotFound, "no git")),
        };
        assert_eq!(err.to_string(), "`git clone x` could not be started: no git");
    }
}
