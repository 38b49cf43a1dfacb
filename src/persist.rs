//! On-disk persistence of fetched messages
//!
//! Layout per message: `destRoot/<uid>/<attachment>` for every
//! attachment part, plus `destRoot/<uid>/<uid>.txt` holding the
//! subject line and body text. Writes are whole-buffer and
//! non-atomic; a crash mid-write can leave a partial file.

use crate::error::Result;
use crate::message::MessageRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Write one message's files under `dest_root`.
///
/// Creates `dest_root/<uid>` if absent (an existing directory is
/// reused, so re-runs overwrite in place). A record without a UID has
/// nowhere unique to go and is skipped silently, returning `Ok(None)`.
/// On success returns the message directory.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the directory or any
/// file cannot be written.
pub fn persist(record: &MessageRecord, dest_root: &Path) -> Result<Option<PathBuf>> {
    let Some(uid) = record.uid else {
        debug!("Skipping message without a UID");
        return Ok(None);
    };

    let dir = dest_root.join(uid.to_string());
    fs::create_dir_all(&dir)?;

    for attachment in &record.attachments {
        let Some(name) = flatten_name(&attachment.file_name) else {
            warn!(
                "Skipping attachment with unusable name {:?}",
                attachment.file_name
            );
            continue;
        };
        fs::write(dir.join(name), &attachment.data)?;
    }

    let body = record.body.best_text();
    // A body of exactly one CRLF is an empty message, not content.
    let body = if body == "\r\n" { "" } else { body };
    let text = format!("{}\n{}", record.subject, body);
    fs::write(dir.join(format!("{uid}.txt")), text)?;

    Ok(Some(dir))
}

/// Reduce a declared attachment filename to a plain file name.
///
/// Declared names are payload-controlled; anything resembling a path
/// is cut down to its final component so no attachment can escape the
/// message directory.
fn flatten_name(declared: &str) -> Option<&str> {
    let base = declared
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(declared)
        .trim();
    match base {
        "" | "." | ".." => None,
        _ => Some(base),
    }
}
