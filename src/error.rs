//! Error types.

use std::fmt;

/// Result type with crate Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Server error.
#[derive(Debug)]
pub enum Error {
    /// IO error.
    Io(std::io::Error),
    /// Custom error.
    Custom(String),
}

impl Error {
    /// True if this is a failed bind because the address is occupied.
    ///
    /// Startup uses this to print the port-conflict diagnostic instead
    /// of the generic error text.
    pub fn is_addr_in_use(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::AddrInUse)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addr_in_use_detection() {
        let busy = Error::Io(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address in use",
        ));
        assert!(busy.is_addr_in_use());

        let other = Error::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert!(!other.is_addr_in_use());
        assert!(!Error::Custom("nope".into()).is_addr_in_use());
    }
}
