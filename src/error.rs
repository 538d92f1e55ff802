//! Crate-level error types.

use std::fmt;

/// Errors and diagnostics produced by the camera rig.
///
/// `MissingReference` and `InvalidConfiguration` are also used as
/// non-fatal runtime diagnostics: the rig logs them, skips the affected
/// operation and keeps ticking.
#[derive(Debug)]
pub enum RigError {
    /// A pivot or pose the operation depends on is not set.
    MissingReference(&'static str),
    /// Options or a requested mode cannot be honoured.
    InvalidConfiguration(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options/session parsing or serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for RigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingReference(what) => {
                write!(f, "missing reference: {what}")
            }
            Self::InvalidConfiguration(msg) => {
                write!(f, "invalid configuration: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for RigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl PartialEq for RigError {
    /// Diagnostics compare by kind and message so repeated warnings can be
    /// collapsed; I/O errors compare by kind only.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MissingReference(a), Self::MissingReference(b)) => a == b,
            (Self::InvalidConfiguration(a), Self::InvalidConfiguration(b))
            | (Self::OptionsParse(a), Self::OptionsParse(b))
            | (Self::Viewer(a), Self::Viewer(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}
