//! Context-scoped password storage

use log::debug;
use std::fmt;

use crate::config::defaults;

use super::models::Config;
use super::resolve::Profile;

/// A password that was resolved through [`CredentialStore`]
///
/// There is no public constructor: API clients can only be built from a
/// value that went through the store.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Plain-text value, for the HTTP client only
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Masked form for display
    pub fn masked(&self) -> String {
        mask_password(&self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(****)")
    }
}

/// A configured context as listed by `config get-contexts`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEntry {
    pub profile: Profile,
    pub masked_password: String,
}

/// Holds the default-context password slot and the named-context map
///
/// Wraps the whole configuration document so that it can be handed back to
/// [`super::ConfigStore::save`] as a unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialStore {
    config: Config,
}

impl CredentialStore {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }

    /// Stored password for `profile`, empty if unset
    pub fn get_password(&self, profile: &Profile) -> String {
        match profile {
            Profile::Default => self.config.password.clone(),
            Profile::Named(name) => self
                .config
                .auth_contexts
                .get(name)
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Write `password` for `profile` in memory. Does not persist.
    pub fn set_password(&mut self, profile: &Profile, password: &str) {
        match profile {
            Profile::Default => self.config.password = password.to_string(),
            Profile::Named(name) => {
                self.config
                    .auth_contexts
                    .insert(name.clone(), password.to_string());
            }
        }
    }

    /// Resolve the password for `profile`, `None` when nothing is stored
    pub fn resolve(&self, profile: &Profile) -> Option<Password> {
        let password = self.get_password(profile);
        if password.is_empty() {
            None
        } else {
            Some(Password(password))
        }
    }

    /// All configured contexts, default first, then named ones sorted by name
    pub fn profiles(&self) -> Vec<ProfileEntry> {
        let mut entries = Vec::with_capacity(self.config.auth_contexts.len() + 1);

        if !self.config.password.is_empty() {
            entries.push(ProfileEntry {
                profile: Profile::Default,
                masked_password: mask_password(&self.config.password),
            });
        }

        for (name, password) in &self.config.auth_contexts {
            // The default context lives in the reserved slot only
            if name == defaults::CONTEXT {
                debug!("Ignoring auth-contexts entry named '{}'", name);
                continue;
            }
            entries.push(ProfileEntry {
                profile: Profile::Named(name.clone()),
                masked_password: mask_password(password),
            });
        }

        entries
    }
}

/// Mask a password for display: show last 4 chars or "<not set>"
pub fn mask_password(password: &str) -> String {
    let chars: Vec<char> = password.chars().collect();
    match chars.len() {
        0 => "<not set>".to_string(),
        n if n > 4 => format!("****{}", chars[n - 4..].iter().collect::<String>()),
        _ => "****".to_string(),
    }
}
