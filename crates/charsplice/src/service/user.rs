use alloc::{
    format,
    string::{String, ToString},
};
use core::{fmt, str::FromStr};

use super::ServiceError;

/// A mailbox owner parsed from `login:password@domain`.
///
/// ```rust
/// use charsplice::service::MailUser;
///
/// let user: MailUser = " joe:secret@example.com ".parse().unwrap();
/// assert_eq!(user.login, "joe");
/// assert_eq!(user.email(), "joe@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailUser {
    /// Login name.
    pub login: String,
    /// Plain-text password.
    pub password: String,
    /// Mail domain.
    pub domain: String,
}

impl MailUser {
    /// `login@domain`.
    #[must_use]
    pub fn email(&self) -> String {
        format!("{}@{}", self.login, self.domain)
    }
}

impl FromStr for MailUser {
    type Err = ServiceError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let spec = spec.trim();
        let invalid = |reason| ServiceError::InvalidUser {
            spec: spec.to_string(),
            reason,
        };
        let colon = spec.find(':').ok_or_else(|| invalid("missing ':'"))?;
        let at = spec.find('@').ok_or_else(|| invalid("missing '@'"))?;
        if at < colon {
            return Err(invalid("'@' before ':'"));
        }
        let login = &spec[..colon];
        if login.is_empty() {
            return Err(invalid("empty login"));
        }
        let domain = &spec[at + 1..];
        if domain.is_empty() {
            return Err(invalid("empty domain"));
        }
        Ok(Self {
            login: login.to_string(),
            password: spec[colon + 1..at].to_string(),
            domain: domain.to_string(),
        })
    }
}

impl fmt::Display for MailUser {
    // Passwords stay out of logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.login, self.domain)
    }
}
