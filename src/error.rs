use std::fmt;
use std::io;
use std::result;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    String(String),

    /// Errors due to IO, such as failures in file operations.
    IOError(String, io::Error),

    /// Errors related to handling of raw data, such as parsing files.
    DataError(String),

    /// No cipher is known for the etype of the ticket enc-part.
    UnsupportedEncryptionType(i32),

    /// The cipher rejected the ciphertext, usually a wrong key.
    DecryptionFailed(String),

    /// The decrypted bytes are not a valid EncTicketPart.
    MalformedTicketBody,

    /// The decrypted ticket carries no authorization data at all.
    NoAuthorizationData,

    /// The first authorization data element does not follow the
    /// expected nesting that wraps the PAC.
    MalformedAuthData(String),

    /// The PAC blob itself could not be split into info buffers.
    MalformedPacContainer(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::String(s) => write!(f, "{}", s),
            Error::DataError(s) => write!(f, "{}", s),
            Error::IOError(desc, io_error) => {
                write!(f, "{}: {}", desc, io_error)
            }
            Error::UnsupportedEncryptionType(etype) => {
                write!(f, "Unsupported encryption type {}", etype)
            }
            Error::DecryptionFailed(s) => {
                write!(f, "Unable to decrypt the ticket: {}", s)
            }
            Error::MalformedTicketBody => {
                write!(f, "Error parsing the decrypted EncTicketPart")
            }
            Error::NoAuthorizationData => {
                write!(f, "The ticket does not include authorization data")
            }
            Error::MalformedAuthData(s) => {
                write!(f, "Unexpected authorization data shape: {}", s)
            }
            Error::MalformedPacContainer(s) => {
                write!(f, "Error parsing PAC: {}", s)
            }
        }
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        return Self::String(error);
    }
}

impl From<&str> for Error {
    fn from(error: &str) -> Self {
        return Self::String(error.to_string());
    }
}

impl From<(String, io::Error)> for Error {
    fn from(error: (String, io::Error)) -> Self {
        return Self::IOError(error.0, error.1);
    }
}
