//! Dump emails from a given sender to disk
//!
//! Connects to an IMAP server over implicit TLS, searches one folder
//! for messages whose `From` header matches a sender address, and
//! writes each match into its own directory: one file per attachment
//! plus a text file holding the subject and body.
//!
//! The [`MailSession`] owns the connection for the whole run; MIME
//! decomposition is delegated to [`mailparse`].

mod client;
mod config;
mod connection;
mod credentials;
mod error;
mod folder;
mod message;
mod persist;

pub use client::MailSession;
pub use config::ImapConfig;
pub use credentials::{CredentialSource, Credentials};
pub use error::{Error, Result};
pub use folder::Folder;
pub use message::{Attachment, MessageBody, MessageRecord};
pub use persist::persist;
