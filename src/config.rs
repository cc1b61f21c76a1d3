/// Configuration constants for the CloudSigma API
pub mod api {
    /// Default API endpoint (Zurich region)
    pub const DEFAULT_URL: &str = "https://zrh.cloudsigma.com/api/2.0";

    /// Account balance endpoint
    pub const BALANCE: &str = "balance";

    /// Locations (regions) endpoint
    pub const LOCATIONS: &str = "locations";

    /// Servers endpoint
    pub const SERVERS: &str = "servers";

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Configuration file location and layout
pub mod paths {
    /// Directory under the platform config dir
    pub const DIR_NAME: &str = "sigmactl";

    /// Config file name
    pub const FILE_NAME: &str = "config.yaml";
}

/// Environment variables recognised by the CLI
pub mod env {
    /// Overrides the active context
    pub const CONTEXT: &str = "SIGMACTL_CONTEXT";

    /// Overrides the config file path
    pub const CONFIG: &str = "SIGMACTL_CONFIG";
}

/// Default values for CLI
pub mod defaults {
    /// Name of the distinguished default profile
    pub const CONTEXT: &str = "default";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url_is_https() {
        assert!(api::DEFAULT_URL.starts_with("https://"));
        assert!(!api::DEFAULT_URL.ends_with('/'));
    }

    #[test]
    fn test_config_file_is_yaml() {
        assert!(paths::FILE_NAME.ends_with(".yaml"));
    }

    #[test]
    fn test_env_vars_prefixed() {
        assert!(env::CONTEXT.starts_with("SIGMACTL_"));
        assert!(env::CONFIG.starts_with("SIGMACTL_"));
    }
}
