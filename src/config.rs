//! IMAP connection configuration

/// Connection settings for one run.
///
/// The defaults target Gmail's IMAP endpoint (`imap.gmail.com:993`,
/// implicit TLS, certificates verified against the bundled Mozilla
/// roots). `host`, `port` and `accept_invalid_certs` stay overridable
/// for local bridges and the in-process test server.
#[derive(Debug, Clone)]
pub struct ImapConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Skip certificate verification. Only sensible for servers with
    /// self-signed certificates, never for a public provider.
    pub accept_invalid_certs: bool,
}

impl ImapConfig {
    /// Default IMAP host, a fixed well-known provider.
    pub const DEFAULT_HOST: &'static str = "imap.gmail.com";

    /// Standard IMAPS port (implicit TLS).
    pub const DEFAULT_PORT: u16 = 993;

    /// Configuration for the default provider with the given login.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT,
            username: username.into(),
            password: password.into(),
            accept_invalid_certs: false,
        }
    }
}
