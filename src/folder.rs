//! IMAP folder names
//!
//! A small typed layer over raw folder strings. Well-known folders
//! get dedicated variants; anything else is `Custom`.

use std::fmt;

/// An IMAP mailbox folder.
///
/// # Examples
///
/// ```
/// use email_dump::Folder;
///
/// assert_eq!(Folder::Inbox.as_str(), "INBOX");
/// assert_eq!(Folder::from("Receipts").as_str(), "Receipts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Folder {
    /// The INBOX folder (RFC 3501 required, case-insensitive).
    Inbox,
    /// Sent messages.
    Sent,
    /// Spam / junk messages.
    Spam,
    /// Deleted messages.
    Trash,
    /// Archived messages.
    Archive,
    /// A user-defined or server-specific folder.
    Custom(String),
}

impl Folder {
    /// The IMAP folder name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Inbox => "INBOX",
            Self::Sent => "Sent",
            Self::Spam => "Spam",
            Self::Trash => "Trash",
            Self::Archive => "Archive",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Folder {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("inbox") {
            Self::Inbox
        } else {
            match s {
                "Sent" => Self::Sent,
                "Spam" => Self::Spam,
                "Trash" => Self::Trash,
                "Archive" => Self::Archive,
                other => Self::Custom(other.to_string()),
            }
        }
    }
}

impl From<String> for Folder {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}
