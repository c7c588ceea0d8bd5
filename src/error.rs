use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum NucleoviewError {
    /// Programmer error at the API boundary, eg a zero start on a 1-based
    /// coordinate. Distinct from "no data", which is never an error.
    InvalidArgument(String),
    Io(std::io::Error),
    Serde(serde_json::Error),
}

impl Error for NucleoviewError {}

impl fmt::Display for NucleoviewError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NucleoviewError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            NucleoviewError::Io(e) => write!(f, "{e}"),
            NucleoviewError::Serde(e) => write!(f, "{e}"),
        }
    }
}

impl From<std::io::Error> for NucleoviewError {
    fn from(err: std::io::Error) -> Self {
        NucleoviewError::Io(err)
    }
}

impl From<serde_json::Error> for NucleoviewError {
    fn from(err: serde_json::Error) -> Self {
        NucleoviewError::Serde(err)
    }
}
