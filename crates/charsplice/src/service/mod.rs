//! Start/stop orchestration of externally supplied mail protocol servers.
//!
//! The protocol servers themselves (and the user store behind them) live
//! outside this crate and are reached only through [`Service`] and
//! [`ServiceBackend`].

mod config;
mod error;
mod protocol;
mod supervisor;
mod user;

pub use config::{DEFAULT_HOSTNAME, DEFAULT_PORT_OFFSET, ServerSetup, ServiceConfig};
pub use error::ServiceError;
pub use protocol::ServiceProtocol;
pub use supervisor::{Service, ServiceBackend, ServiceSupervisor};
pub use user::MailUser;
