//! Authenticated mailbox session
//!
//! One [`MailSession`] per run: opened once, used for one search, then
//! logged out. Dropping the session closes the underlying TCP
//! connection, so the connection is released whether the run finishes,
//! fails, or is cut short -- [`MailSession::logout`] is a courtesy to
//! the server, not the release mechanism.

use crate::config::ImapConfig;
use crate::connection::{self, ImapSession};
use crate::error::{Error, Result};
use crate::folder::Folder;
use crate::message::{MessageRecord, parse_message};
use futures::StreamExt;
use tracing::{info, warn};

/// An authenticated IMAP session.
pub struct MailSession {
    session: ImapSession,
}

impl MailSession {
    /// Open the connection and authenticate.
    ///
    /// # Errors
    ///
    /// [`Error::Connection`], [`Error::Tls`], or [`Error::Auth`]
    /// depending on where the handshake fails.
    pub async fn connect(config: &ImapConfig) -> Result<Self> {
        let session = connection::connect(config).await?;
        Ok(Self { session })
    }

    /// Fetch every message in `folder` whose `From` header matches
    /// `sender`.
    ///
    /// Issues one `UID SEARCH FROM "<sender>"`; matching and case
    /// semantics are the server's. Messages that fail to fetch or
    /// parse are logged and skipped; the rest of the run continues.
    ///
    /// # Errors
    ///
    /// Returns an error if the SELECT or SEARCH command fails.
    pub async fn search_from(
        &mut self,
        folder: &Folder,
        sender: &str,
    ) -> Result<Vec<MessageRecord>> {
        self.session
            .select(folder.as_str())
            .await
            .map_err(|e| Error::Imap(format!("Failed to select {folder}: {e}")))?;

        let query = format!("FROM \"{sender}\"");
        let uids = self
            .session
            .uid_search(&query)
            .await
            .map_err(|e| Error::Imap(format!("Search failed: {e}")))?;

        let mut uid_list: Vec<u32> = uids.into_iter().collect();
        uid_list.sort_unstable();

        if uid_list.is_empty() {
            return Ok(vec![]);
        }

        info!("Found {} messages from '{}'", uid_list.len(), sender);

        let mut records = Vec::new();
        for uid in uid_list {
            match self.fetch_single(uid).await {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!("Failed to fetch UID {}: {}", uid, e);
                }
            }
        }

        Ok(records)
    }

    /// Log out and drop the connection.
    ///
    /// A failed LOGOUT is ignored; the socket closes either way.
    pub async fn logout(mut self) {
        self.session.logout().await.ok();
    }

    async fn fetch_single(&mut self, uid: u32) -> Result<MessageRecord> {
        let uid_set = format!("{uid}");
        let mut messages = self
            .session
            .uid_fetch(&uid_set, "(BODY.PEEK[])")
            .await
            .map_err(|e| Error::Imap(format!("Fetch failed: {e}")))?;

        if let Some(msg_result) = messages.next().await {
            let msg = msg_result.map_err(|e| Error::Imap(format!("Fetch error: {e}")))?;
            if let Some(body) = msg.body() {
                return parse_message(msg.uid, body);
            }
        }

        Err(Error::Imap(format!("No body found for UID {uid}")))
    }
}
