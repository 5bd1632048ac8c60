use std::fmt;

#[derive(Debug)]
pub enum Error {
    Provider(String),
    Credential(String),
    ZoneFile(String),
    Io(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Provider(msg) => write!(f, "Provider error: {msg}"),
            Error::Credential(msg) => write!(f, "Credential error: {msg}"),
            Error::ZoneFile(msg) => write!(f, "Zone file error: {msg}"),
            Error::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}
