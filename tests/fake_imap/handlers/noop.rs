//! NOOP command handler.
//!
//! RFC 3501 Section 6.1.2 requires this command. Clients use it for
//! keepalive and polling.

use crate::fake_imap::io::send;
use tokio::io::{AsyncRead, AsyncWrite, BufReader};

/// Handle the NOOP command.
pub async fn handle_noop<S: AsyncRead + AsyncWrite + Unpin>(tag: &str, stream: &mut BufReader<S>) {
    let resp = format!("{tag} OK NOOP completed\r\n");
    let _ = send(stream, &resp).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    #[tokio::test]
    async fn sends_ok() {
        let (client, server) = tokio::io::duplex(1024);
        let mut stream = BufReader::new(server);

        handle_noop("A1", &mut stream).await;
        drop(stream);

        let mut buf = Vec::new();
        tokio::io::AsyncReadExt::read_to_end(&mut BufReader::new(client), &mut buf)
            .await
            .unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("A1 OK NOOP completed"));
    }
}
