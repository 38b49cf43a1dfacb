//! Fetched message model and MIME decomposition
//!
//! A raw RFC 2822 message becomes a [`MessageRecord`]: subject, body
//! text, and the attachment parts worth writing to disk. The walk over
//! MIME parts is a plain depth-first recursion -- multipart containers
//! are descended into, never emitted themselves.

use crate::error::Result;
use mailparse::{DispositionType, MailHeaderMap, ParsedMail};

/// One fetched email.
///
/// `uid` is the server-assigned identifier from the FETCH response. A
/// FETCH response is not required to carry one; a record without a UID
/// cannot be persisted and is skipped by [`persist`](crate::persist).
#[derive(Debug, Clone)]
pub struct MessageRecord {
    pub uid: Option<u32>,
    pub subject: String,
    pub body: MessageBody,
    pub attachments: Vec<Attachment>,
}

/// Body text of a message, by MIME type.
#[derive(Debug, Clone, Default)]
pub struct MessageBody {
    pub plain: Option<String>,
    pub html: Option<String>,
}

impl MessageBody {
    /// The best text rendition available: plain text if the message
    /// has any, otherwise raw HTML source, otherwise empty.
    #[must_use]
    pub fn best_text(&self) -> &str {
        self.plain
            .as_deref()
            .or(self.html.as_deref())
            .unwrap_or_default()
    }
}

/// A file-like MIME part: declared filename plus decoded payload.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// Parse a raw RFC 2822 message into a [`MessageRecord`].
///
/// A part counts as an attachment only when it carries an explicit
/// `Content-Disposition: attachment` *and* declares a filename; a
/// disposition without a filename leaves nothing to name the file by,
/// so the part is dropped (inline parts and unnamed binaries never
/// produce files). The first non-attachment `text/plain` and
/// `text/html` parts fill the body slots.
///
/// # Errors
///
/// Returns [`Error::Parse`](crate::Error::Parse) if the message is not
/// valid MIME or a part's transfer encoding cannot be decoded.
pub fn parse_message(uid: Option<u32>, raw: &[u8]) -> Result<MessageRecord> {
    let mail = mailparse::parse_mail(raw)?;

    let subject = mail
        .headers
        .get_first_value("Subject")
        .unwrap_or_default();

    let mut body = MessageBody::default();
    let mut attachments = Vec::new();
    collect_parts(&mail, &mut body, &mut attachments)?;

    Ok(MessageRecord {
        uid,
        subject,
        body,
        attachments,
    })
}

fn collect_parts(
    part: &ParsedMail<'_>,
    body: &mut MessageBody,
    attachments: &mut Vec<Attachment>,
) -> Result<()> {
    if part.ctype.mimetype.starts_with("multipart/") {
        for sub in &part.subparts {
            collect_parts(sub, body, attachments)?;
        }
        return Ok(());
    }

    let disposition = part.get_content_disposition();
    if disposition.disposition == DispositionType::Attachment {
        if let Some(file_name) = disposition.params.get("filename") {
            attachments.push(Attachment {
                file_name: file_name.clone(),
                data: part.get_body_raw()?,
            });
        }
        return Ok(());
    }

    match part.ctype.mimetype.to_ascii_lowercase().as_str() {
        "text/plain" if body.plain.is_none() => body.plain = Some(part.get_body()?),
        "text/html" if body.html.is_none() => body.html = Some(part.get_body()?),
        _ => {}
    }
    Ok(())
}
