//! Crate-level error types.

use std::fmt;

/// Errors produced by the shellrig crate.
#[derive(Debug)]
pub enum ShellRigError {
    /// Invalid shell/layer configuration (fatal at initialization).
    Config(String),
    /// Lifecycle misuse, e.g. initializing a disposed rig.
    Lifecycle(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for ShellRigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
            Self::Lifecycle(msg) => write!(f, "lifecycle error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ShellRigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ShellRigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
