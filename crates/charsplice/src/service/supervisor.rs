use alloc::{boxed::Box, collections::BTreeMap, vec::Vec};

use super::{MailUser, ServerSetup, ServiceConfig, ServiceError, ServiceProtocol};

/// A protocol server with a start/stop lifecycle.
pub trait Service {
    /// Start accepting connections.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::StartFailed`] if the server cannot start.
    fn start(&mut self) -> Result<(), ServiceError>;

    /// Stop accepting connections and shut down.
    fn stop(&mut self);

    /// Where the server listens.
    fn setup(&self) -> &ServerSetup;
}

/// Builds protocol servers and manages the users they serve.
pub trait ServiceBackend {
    /// Build an unstarted server for `setup`.
    fn create_service(&mut self, setup: ServerSetup) -> Box<dyn Service>;

    /// Make sure `user` exists, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::UserRejected`] if the user store refuses it.
    fn ensure_user(&mut self, user: &MailUser) -> Result<(), ServiceError>;
}

/// Starts and stops the configured set of protocol servers.
pub struct ServiceSupervisor<B> {
    config: ServiceConfig,
    backend: B,
    users: Vec<MailUser>,
    running: BTreeMap<ServiceProtocol, Box<dyn Service>>,
}

impl<B: ServiceBackend> ServiceSupervisor<B> {
    /// Supervise services built by `backend` according to `config`.
    #[must_use]
    pub fn new(config: ServiceConfig, backend: B) -> Self {
        Self {
            config,
            backend,
            users: Vec::new(),
            running: BTreeMap::new(),
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Configuration to apply on the next [`start`](Self::start).
    pub fn config_mut(&mut self) -> &mut ServiceConfig {
        &mut self.config
    }

    /// The backend services are built by.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Users registered with the backend by the last [`start`](Self::start).
    #[must_use]
    pub fn users(&self) -> &[MailUser] {
        &self.users
    }

    /// Register every configured user, then (re)start every enabled protocol.
    ///
    /// Users and listening setups are validated before anything is touched,
    /// so bad configuration leaves running services alone. Anything already
    /// running is then stopped. If a server fails to start, those started by
    /// this call are stopped again.
    ///
    /// # Errors
    ///
    /// Fails on a malformed or rejected user, an out-of-range port, or a
    /// server that refuses to start.
    pub fn start(&mut self) -> Result<(), ServiceError> {
        let users = self.config.parse_users()?;
        let setups = self
            .config
            .enabled_protocols()
            .map(|protocol| self.config.server_setup(protocol))
            .collect::<Result<Vec<_>, _>>()?;
        for user in &users {
            log::debug!("adding user {user}");
            self.backend.ensure_user(user)?;
        }
        self.users = users;

        self.stop();

        for setup in setups {
            let protocol = setup.protocol;
            log::debug!(
                "starting {protocol} on {}:{}",
                setup.bind_address,
                setup.port
            );
            let mut service = self.backend.create_service(setup);
            if let Err(err) = service.start() {
                log::warn!("{protocol} failed to start, stopping started services");
                self.stop();
                return Err(err);
            }
            self.running.insert(protocol, service);
        }
        log::debug!("running services: {:?}", self.running_protocols());
        Ok(())
    }

    /// Stop and forget every running service.
    pub fn stop(&mut self) {
        for (protocol, mut service) in core::mem::take(&mut self.running) {
            service.stop();
            log::debug!("stopped {protocol}");
        }
    }

    /// Protocols currently running, in start order.
    #[must_use]
    pub fn running_protocols(&self) -> Vec<ServiceProtocol> {
        self.running.keys().copied().collect()
    }

    /// Whether `protocol` is running.
    #[must_use]
    pub fn is_running(&self, protocol: ServiceProtocol) -> bool {
        self.running.contains_key(&protocol)
    }

    /// The running server for `protocol`.
    #[must_use]
    pub fn service(&self, protocol: ServiceProtocol) -> Option<&dyn Service> {
        self.running.get(&protocol).map(|service| &**service)
    }

    /// Setup of the server outgoing mail goes through: SMTP, else SMTPS.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NoSmtpService`] if neither is running.
    pub fn smtp_setup(&self) -> Result<&ServerSetup, ServiceError> {
        self.service(ServiceProtocol::Smtp)
            .or_else(|| self.service(ServiceProtocol::Smtps))
            .map(|service| service.setup())
            .ok_or(ServiceError::NoSmtpService)
    }
}

impl<B> core::fmt::Debug for ServiceSupervisor<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ServiceSupervisor")
            .field("config", &self.config)
            .field("running", &self.running.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
