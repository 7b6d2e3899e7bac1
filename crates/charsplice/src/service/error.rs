use alloc::string::String;

use thiserror::Error;

use super::ServiceProtocol;

/// Failure while configuring, starting or querying mail services.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A user entry is not of the form `login:password@domain`.
    #[error("invalid user '{spec}': {reason}")]
    InvalidUser {
        /// The offending entry, trimmed.
        spec: String,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// The port offset pushes a protocol's port past `u16::MAX`.
    #[error("port offset {offset} is out of range for {protocol}")]
    PortOutOfRange {
        /// Protocol whose port overflowed.
        protocol: ServiceProtocol,
        /// Configured offset.
        offset: u16,
    },
    /// Neither SMTP nor SMTPS is running.
    #[error("no smtp or smtps service configured")]
    NoSmtpService,
    /// A protocol server refused to start.
    #[error("{protocol} service failed to start: {message}")]
    StartFailed {
        /// Protocol that failed.
        protocol: ServiceProtocol,
        /// Reason reported by the server.
        message: String,
    },
    /// The user store refused a user.
    #[error("user '{email}' rejected: {message}")]
    UserRejected {
        /// Address of the rejected user.
        email: String,
        /// Reason reported by the user store.
        message: String,
    },
}
