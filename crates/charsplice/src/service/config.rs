#![allow(clippy::struct_excessive_bools)]

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use super::{MailUser, ServiceError, ServiceProtocol};

/// Address the services bind to unless configured otherwise.
pub const DEFAULT_HOSTNAME: &str = "127.0.0.1";

/// Added to every protocol's well-known port unless configured otherwise.
pub const DEFAULT_PORT_OFFSET: u16 = 3000;

/// Where one protocol server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServerSetup {
    /// Listening port, offset already applied.
    pub port: u16,
    /// Hostname or address to bind.
    pub bind_address: String,
    /// Protocol spoken on the port.
    pub protocol: ServiceProtocol,
}

/// Configuration of a [`ServiceSupervisor`](super::ServiceSupervisor).
///
/// Changes take effect on the next
/// [`start`](super::ServiceSupervisor::start).
///
/// # Examples
///
/// ```rust
/// use charsplice::service::{ServiceConfig, ServiceProtocol};
///
/// let config = ServiceConfig {
///     imaps: true,
///     port_offset: 10_000,
///     ..Default::default()
/// };
/// let setup = config.server_setup(ServiceProtocol::Imaps).unwrap();
/// assert_eq!(setup.port, 10_993);
/// ```
///
/// # Default
///
/// SMTP, POP3 and IMAP enabled on [`DEFAULT_HOSTNAME`] with
/// [`DEFAULT_PORT_OFFSET`]; no users.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ServiceConfig {
    /// Hostname or address every service binds to.
    pub hostname: String,
    /// Added to each protocol's well-known port.
    pub port_offset: u16,
    /// Run plain SMTP.
    pub smtp: bool,
    /// Run SMTP over TLS.
    pub smtps: bool,
    /// Run plain POP3.
    pub pop3: bool,
    /// Run POP3 over TLS.
    pub pop3s: bool,
    /// Run plain IMAP.
    pub imap: bool,
    /// Run IMAP over TLS.
    pub imaps: bool,
    /// User entries of the form `login:password@domain`.
    pub users: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            port_offset: DEFAULT_PORT_OFFSET,
            smtp: true,
            smtps: false,
            pop3: true,
            pop3s: false,
            imap: true,
            imaps: false,
            users: Vec::new(),
        }
    }
}

impl ServiceConfig {
    /// Whether `protocol` is switched on.
    #[must_use]
    pub fn is_enabled(&self, protocol: ServiceProtocol) -> bool {
        match protocol {
            ServiceProtocol::Smtp => self.smtp,
            ServiceProtocol::Smtps => self.smtps,
            ServiceProtocol::Pop3 => self.pop3,
            ServiceProtocol::Pop3s => self.pop3s,
            ServiceProtocol::Imap => self.imap,
            ServiceProtocol::Imaps => self.imaps,
        }
    }

    /// Switch `protocol` on or off.
    pub fn set_enabled(&mut self, protocol: ServiceProtocol, enabled: bool) {
        let flag = match protocol {
            ServiceProtocol::Smtp => &mut self.smtp,
            ServiceProtocol::Smtps => &mut self.smtps,
            ServiceProtocol::Pop3 => &mut self.pop3,
            ServiceProtocol::Pop3s => &mut self.pop3s,
            ServiceProtocol::Imap => &mut self.imap,
            ServiceProtocol::Imaps => &mut self.imaps,
        };
        *flag = enabled;
    }

    /// Enabled protocols in start order.
    pub fn enabled_protocols(&self) -> impl Iterator<Item = ServiceProtocol> + '_ {
        ServiceProtocol::ALL
            .into_iter()
            .filter(|protocol| self.is_enabled(*protocol))
    }

    /// Replace the user entries, trimming surrounding whitespace.
    pub fn set_users<I, U>(&mut self, users: I)
    where
        I: IntoIterator<Item = U>,
        U: AsRef<str>,
    {
        self.users = users
            .into_iter()
            .map(|user| user.as_ref().trim().to_string())
            .collect();
    }

    /// Parse every user entry.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidUser`] for the first malformed entry.
    pub fn parse_users(&self) -> Result<Vec<MailUser>, ServiceError> {
        self.users.iter().map(|user| user.parse()).collect()
    }

    /// Listening setup for `protocol` under this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::PortOutOfRange`] if the offset port does not
    /// fit in a `u16`.
    pub fn server_setup(&self, protocol: ServiceProtocol) -> Result<ServerSetup, ServiceError> {
        let port = protocol
            .default_port()
            .checked_add(self.port_offset)
            .ok_or(ServiceError::PortOutOfRange {
                protocol,
                offset: self.port_offset,
            })?;
        Ok(ServerSetup {
            port,
            bind_address: self.hostname.clone(),
            protocol,
        })
    }
}
