//! Per-command state

use log::debug;
use std::path::PathBuf;

use crate::context::{resolve_active_profile, ConfigStore, CredentialStore, Profile};
use crate::error::{Result, SigmaError};
use crate::output::OutputOptions;
use crate::sigma::{ClientSettings, Services};

/// Everything one command runs with: the active profile, output options and
/// the configuration loaded from disk
#[derive(Debug)]
pub struct Invocation {
    profile: Profile,
    output: OutputOptions,
    config_store: ConfigStore,
    credentials: CredentialStore,
}

impl Invocation {
    pub fn new(
        profile: Profile,
        output: OutputOptions,
        config_store: ConfigStore,
        credentials: CredentialStore,
    ) -> Self {
        Self {
            profile,
            output,
            config_store,
            credentials,
        }
    }

    /// Load the config file and resolve the active profile
    pub fn load(
        cli_context: Option<&str>,
        config_path: Option<PathBuf>,
        output: OutputOptions,
    ) -> Result<Self> {
        let config_store = match config_path {
            Some(path) => ConfigStore::with_path(path),
            None => ConfigStore::new(),
        };
        debug!("Using config file {}", config_store.path().display());

        let config = config_store.load()?;
        let profile = resolve_active_profile(cli_context, &config);
        debug!("Active context: {}", profile);

        Ok(Self::new(
            profile,
            output,
            config_store,
            CredentialStore::new(config),
        ))
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn output(&self) -> &OutputOptions {
        &self.output
    }

    pub fn config_store(&self) -> &ConfigStore {
        &self.config_store
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Replace the in-memory configuration after it was persisted
    pub(crate) fn adopt(&mut self, credentials: CredentialStore) {
        self.credentials = credentials;
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings::from_config(self.credentials.config())
    }

    /// Service locator for the active profile's stored password
    pub fn services(&self) -> Result<Services> {
        let password = self
            .credentials
            .resolve(&self.profile)
            .ok_or_else(|| SigmaError::NotAuthenticated(self.profile.to_string()))?;
        Ok(Services::new(password, self.client_settings()))
    }
}
