#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! CLI for dumping all emails from a specific sender

use clap::Parser;
use email_dump::{CredentialSource, Folder, ImapConfig, MailSession, persist};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXAMPLE_USE: &str = "\
Examples:
    email-dump --from sender@example.com --dir dir/to/dump
    email-dump --from sender@example.com
    email-dump --from sender@example.com --email you@example.com --password secret";

#[derive(Parser)]
#[command(name = "email-dump")]
#[command(about = "Dump all the emails sent by a specific sender")]
#[command(after_help = EXAMPLE_USE)]
struct Args {
    /// Sender address to search for
    #[arg(long, short = 'f')]
    from: String,

    /// Destination root directory (must already exist)
    #[arg(long, short = 'd', default_value = ".", value_parser = parse_dest_dir)]
    dir: PathBuf,

    /// Account used to log in (prompted for when omitted)
    #[arg(long)]
    email: Option<String>,

    /// Password used to log in (prompted for when omitted)
    #[arg(long)]
    password: Option<String>,

    /// Folder to search in
    #[arg(long, default_value = "INBOX")]
    folder: String,

    /// IMAP server host
    #[arg(long, default_value = ImapConfig::DEFAULT_HOST)]
    host: String,

    /// IMAP server port (implicit TLS)
    #[arg(long, default_value_t = ImapConfig::DEFAULT_PORT)]
    port: u16,

    /// Accept self-signed TLS certificates (local bridges only)
    #[arg(long)]
    accept_invalid_certs: bool,
}

/// The destination must exist before any network activity happens.
fn parse_dest_dir(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("'{s}' is not a directory"))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let credentials = CredentialSource::from_args(args.email, args.password).resolve()?;

    let config = ImapConfig {
        host: args.host,
        port: args.port,
        username: credentials.email,
        password: credentials.password,
        accept_invalid_certs: args.accept_invalid_certs,
    };

    let folder = Folder::from(args.folder);

    let mut session = MailSession::connect(&config).await?;
    let records = session.search_from(&folder, &args.from).await?;

    let mut saved = 0usize;
    for record in &records {
        if let Some(dir) = persist(record, &args.dir)? {
            println!(
                "{}: {} attachment(s)",
                dir.display(),
                record.attachments.len()
            );
            saved += 1;
        }
    }

    session.logout().await;

    println!("Dumped {saved} message(s) from {}", args.from);
    Ok(())
}
