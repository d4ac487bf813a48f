use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnippetsError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid database id {0}")]
    InvalidDatabaseId(String),

    #[error("Deadline exceeded")]
    DeadlineExceeded,

    /// Failure reported by the database admin API, message kept verbatim.
    #[error("{0}")]
    Admin(String),

    /// Failure reported by the data API, message kept verbatim.
    #[error("{0}")]
    Data(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SnippetsError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownCommand(_) => 2,
            Self::InvalidDatabaseId(_)
            | Self::DeadlineExceeded
            | Self::Admin(_)
            | Self::Data(_)
            | Self::Config(_)
            | Self::Io(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, SnippetsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_is_usage_error() {
        assert_eq!(SnippetsError::UnknownCommand("bogus".into()).exit_code(), 2);
    }

    #[test]
    fn test_handler_failures_exit_one() {
        assert_eq!(SnippetsError::Data("boom".into()).exit_code(), 1);
        assert_eq!(SnippetsError::DeadlineExceeded.exit_code(), 1);
        assert_eq!(SnippetsError::InvalidDatabaseId("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_sdk_messages_are_verbatim() {
        let err = SnippetsError::Admin("status: AlreadyExists".into());
        assert_eq!(err.to_string(), "status: AlreadyExists");
    }
}
