//! LOGIN command handler.
//!
//! Credentials travel in plaintext over the (already encrypted)
//! connection. When the mailbox configures an expected pair, anything
//! else gets a tagged NO; with no configured pair, any login is
//! accepted.

use crate::fake_imap::io::send;
use crate::fake_imap::mailbox::Mailbox;
use tokio::io::{AsyncRead, AsyncWrite, BufReader};

/// Handle the LOGIN command. Returns `false` when the connection
/// should be dropped.
pub async fn handle_login<S: AsyncRead + AsyncWrite + Unpin>(
    tag: &str,
    username: &str,
    password: &str,
    mailbox: &Mailbox,
    stream: &mut BufReader<S>,
) -> bool {
    let accepted = match &mailbox.credentials {
        Some((expected_user, expected_pass)) => {
            username == expected_user && password == expected_pass
        }
        None => true,
    };

    let resp = if accepted {
        format!("{tag} OK LOGIN completed\r\n")
    } else {
        format!("{tag} NO [AUTHENTICATIONFAILED] Invalid credentials\r\n")
    };
    send(stream, &resp).await.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake_imap::mailbox::MailboxBuilder;
    use tokio::io::BufReader;

    async fn run(tag: &str, username: &str, password: &str, mailbox: &Mailbox) -> (String, bool) {
        let (client, server) = tokio::io::duplex(1024);
        let mut stream = BufReader::new(server);

        let ok = handle_login(tag, username, password, mailbox, &mut stream).await;
        drop(stream);

        let mut buf = Vec::new();
        tokio::io::AsyncReadExt::read_to_end(&mut BufReader::new(client), &mut buf)
            .await
            .unwrap();
        (String::from_utf8(buf).unwrap(), ok)
    }

    #[tokio::test]
    async fn accepts_anything_without_configured_credentials() {
        let mailbox = MailboxBuilder::new().folder("INBOX").build();
        let (output, ok) = run("A1", "whoever", "whatever", &mailbox).await;
        assert!(ok);
        assert_eq!(output, "A1 OK LOGIN completed\r\n");
    }

    #[tokio::test]
    async fn accepts_matching_credentials() {
        let mailbox = MailboxBuilder::new()
            .credentials("user", "pass")
            .folder("INBOX")
            .build();
        let (output, _) = run("A1", "user", "pass", &mailbox).await;
        assert!(output.contains("A1 OK LOGIN completed"));
    }

    #[tokio::test]
    async fn rejects_wrong_password() {
        let mailbox = MailboxBuilder::new()
            .credentials("user", "pass")
            .folder("INBOX")
            .build();
        let (output, ok) = run("A1", "user", "wrong", &mailbox).await;
        // Connection stays up (write succeeded); the response is NO.
        assert!(ok);
        assert!(output.contains("A1 NO"));
    }

    #[tokio::test]
    async fn echoes_client_tag() {
        let mailbox = MailboxBuilder::new().folder("INBOX").build();
        let (output, _) = run("TAG42", "u", "p", &mailbox).await;
        assert!(output.starts_with("TAG42 "));
    }
}
