//! Per-invocation service locator
//!
//! Each accessor builds a fresh capability client from the password that was
//! resolved for the active context. Nothing is cached between calls.

use log::debug;

use crate::context::Password;
use crate::error::Result;

use super::balance::BalanceService;
use super::client::{ClientSettings, SigmaClient};
use super::regions::RegionsService;
use super::servers::ServersService;

/// One accessor per capability domain
pub trait ServiceLocator {
    fn regions(&self) -> Result<RegionsService>;
    fn servers(&self) -> Result<ServersService>;
    fn balance(&self) -> Result<BalanceService>;
}

/// [`ServiceLocator`] backed by the CloudSigma HTTP API
#[derive(Debug, Clone)]
pub struct Services {
    password: Password,
    settings: ClientSettings,
}

impl Services {
    pub fn new(password: Password, settings: ClientSettings) -> Self {
        Self { password, settings }
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn client(&self, capability: &str) -> Result<SigmaClient> {
        debug!("Building {} client for {}", capability, self.settings.api_url);
        SigmaClient::new(&self.settings, &self.password)
    }
}

impl ServiceLocator for Services {
    fn regions(&self) -> Result<RegionsService> {
        Ok(RegionsService::new(self.client("regions")?))
    }

    fn servers(&self) -> Result<ServersService> {
        Ok(ServersService::new(self.client("servers")?))
    }

    fn balance(&self) -> Result<BalanceService> {
        Ok(BalanceService::new(self.client("balance")?))
    }
}
