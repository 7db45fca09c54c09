use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShellError {
    #[error("Mount point not found in host document: #{0}")]
    MountPointMissing(String),

    #[error("Navigation sequence is empty")]
    EmptyNavigation,

    #[error("Duplicate navigation label: {0}")]
    DuplicateLabel(String),

    #[error("Navigation entry is not configured: {0}")]
    UnknownEntry(String),

    #[error("Path does not match any route: {0}")]
    UnroutablePath(String),

    #[error("Invalid booking: {0}")]
    InvalidBooking(String),
}

pub type Result<T> = std::result::Result<T, ShellError>;
