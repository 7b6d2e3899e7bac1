use core::fmt;

/// Mail protocols a supervisor can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ServiceProtocol {
    /// Plain SMTP.
    Smtp,
    /// SMTP over TLS.
    Smtps,
    /// Plain POP3.
    Pop3,
    /// POP3 over TLS.
    Pop3s,
    /// Plain IMAP.
    Imap,
    /// IMAP over TLS.
    Imaps,
}

impl ServiceProtocol {
    /// Every protocol, in start order.
    pub const ALL: [ServiceProtocol; 6] = [
        ServiceProtocol::Smtp,
        ServiceProtocol::Smtps,
        ServiceProtocol::Pop3,
        ServiceProtocol::Pop3s,
        ServiceProtocol::Imap,
        ServiceProtocol::Imaps,
    ];

    /// Well-known port before any offset is applied.
    #[must_use]
    pub const fn default_port(self) -> u16 {
        match self {
            ServiceProtocol::Smtp => 25,
            ServiceProtocol::Smtps => 465,
            ServiceProtocol::Pop3 => 110,
            ServiceProtocol::Pop3s => 995,
            ServiceProtocol::Imap => 143,
            ServiceProtocol::Imaps => 993,
        }
    }

    /// Lowercase protocol name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ServiceProtocol::Smtp => "smtp",
            ServiceProtocol::Smtps => "smtps",
            ServiceProtocol::Pop3 => "pop3",
            ServiceProtocol::Pop3s => "pop3s",
            ServiceProtocol::Imap => "imap",
            ServiceProtocol::Imaps => "imaps",
        }
    }

    /// Whether the protocol runs over TLS.
    #[must_use]
    pub const fn is_secure(self) -> bool {
        matches!(
            self,
            ServiceProtocol::Smtps | ServiceProtocol::Pop3s | ServiceProtocol::Imaps
        )
    }
}

impl fmt::Display for ServiceProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
