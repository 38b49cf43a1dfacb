//! Error types for email-dump

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The server could not be reached over TCP.
    #[error("connection error: {0}")]
    Connection(String),

    /// The TLS handshake failed.
    #[error("TLS error: {0}")]
    Tls(String),

    /// The server rejected the login credentials.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// An IMAP command failed after login.
    #[error("IMAP error: {0}")]
    Imap(String),

    /// A fetched message could not be parsed as MIME.
    #[error("message parsing error: {0}")]
    Parse(#[from] mailparse::MailParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
