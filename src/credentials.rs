//! Login credential resolution
//!
//! Credentials arrive either complete on the command line or through
//! an interactive prompt. Both paths converge on [`Credentials`]; the
//! choice is made once, by presence of the flags, in
//! [`CredentialSource::from_args`].

use crate::error::Result;
use std::io::{self, BufRead, Write};

/// An (account identifier, secret) pair. Used once per run, never
/// persisted.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Where the login credentials come from.
#[derive(Debug)]
pub enum CredentialSource {
    /// Both values were supplied on the command line.
    Provided(Credentials),
    /// At least one value was missing; ask on the terminal.
    Prompt,
}

impl CredentialSource {
    /// Pick a source from optional flag values. Partial flags fall
    /// back to prompting for both, so the pair always comes from one
    /// place.
    #[must_use]
    pub fn from_args(email: Option<String>, password: Option<String>) -> Self {
        match (email, password) {
            (Some(email), Some(password)) => Self::Provided(Credentials { email, password }),
            _ => Self::Prompt,
        }
    }

    /// Resolve to a usable pair, prompting if necessary.
    ///
    /// The account identifier is read with normal echo; the secret is
    /// read with echo suppressed. Neither value is validated here --
    /// bad credentials surface as [`Error::Auth`](crate::Error::Auth)
    /// at login.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn resolve(self) -> Result<Credentials> {
        match self {
            Self::Provided(credentials) => Ok(credentials),
            Self::Prompt => prompt(),
        }
    }
}

fn prompt() -> Result<Credentials> {
    print!("Email: ");
    io::stdout().flush()?;

    let mut email = String::new();
    io::stdin().lock().read_line(&mut email)?;
    let email = email.trim().to_string();

    let password = rpassword::prompt_password("Password: ")?;

    Ok(Credentials { email, password })
}
