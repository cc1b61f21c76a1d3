//! Active profile resolution

use log::debug;
use std::fmt;

use crate::config::{defaults, env};

use super::models::Config;

/// A credential selector: the reserved default slot or a named entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Profile {
    Default,
    Named(String),
}

impl Profile {
    /// Parse a context name; `default` always maps to the reserved slot
    pub fn from_name(name: &str) -> Self {
        if name == defaults::CONTEXT {
            Profile::Default
        } else {
            Profile::Named(name.to_string())
        }
    }

    /// Name as written on the command line and in the config file
    pub fn name(&self) -> &str {
        match self {
            Profile::Default => defaults::CONTEXT,
            Profile::Named(name) => name,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve the active profile from multiple sources:
/// 1. --context CLI flag
/// 2. SIGMACTL_CONTEXT env var
/// 3. `context` key from the config file
/// 4. the default profile
pub fn resolve_active_profile(cli_context: Option<&str>, config: &Config) -> Profile {
    let env_context = std::env::var(env::CONTEXT).ok();
    resolve_from_sources(cli_context, env_context.as_deref(), config)
}

fn resolve_from_sources(
    cli_context: Option<&str>,
    env_context: Option<&str>,
    config: &Config,
) -> Profile {
    if let Some(name) = cli_context.filter(|n| !n.is_empty()) {
        debug!("Using context from CLI flag: {}", name);
        return Profile::from_name(name);
    }

    if let Some(name) = env_context.filter(|n| !n.is_empty()) {
        debug!("Using context from {} env var: {}", env::CONTEXT, name);
        return Profile::from_name(name);
    }

    if let Some(name) = config.context.as_deref().filter(|n| !n.is_empty()) {
        debug!("Using context from config file: {}", name);
        return Profile::from_name(name);
    }

    debug!("No context selected, using '{}'", defaults::CONTEXT);
    Profile::Default
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name_maps_to_reserved_slot() {
        assert_eq!(Profile::from_name("default"), Profile::Default);
        assert_eq!(
            Profile::from_name("staging"),
            Profile::Named("staging".to_string())
        );
    }

    #[test]
    fn test_profile_name_roundtrip() {
        assert_eq!(Profile::Default.name(), "default");
        assert_eq!(Profile::from_name("prod").to_string(), "prod");
    }

    #[test]
    fn test_cli_flag_wins() {
        let config = Config {
            context: Some("from-file".to_string()),
            ..Default::default()
        };
        let profile = resolve_from_sources(Some("from-cli"), Some("from-env"), &config);
        assert_eq!(profile, Profile::Named("from-cli".to_string()));
    }

    #[test]
    fn test_env_beats_config_file() {
        let config = Config {
            context: Some("from-file".to_string()),
            ..Default::default()
        };
        let profile = resolve_from_sources(None, Some("from-env"), &config);
        assert_eq!(profile, Profile::Named("from-env".to_string()));
    }

    #[test]
    fn test_config_file_context_used() {
        let config = Config {
            context: Some("staging".to_string()),
            ..Default::default()
        };
        let profile = resolve_from_sources(None, None, &config);
        assert_eq!(profile, Profile::Named("staging".to_string()));
    }

    #[test]
    fn test_falls_back_to_default() {
        let profile = resolve_from_sources(None, None, &Config::default());
        assert_eq!(profile, Profile::Default);
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let profile = resolve_from_sources(Some(""), Some(""), &Config::default());
        assert_eq!(profile, Profile::Default);
    }
}
