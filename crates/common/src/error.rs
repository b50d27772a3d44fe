use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Structural precondition violation, raised by the network constructor.
    /// Carries a human-readable description of the offending edge.
    InvalidNetwork(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidNetwork(reason) => write!(f, "invalid network: {}", reason),
        }
    }
}

impl std::error::Error for Error {}
