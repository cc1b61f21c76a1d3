use std::fmt;

/// Custom error type for sigmactl operations
#[derive(Debug)]
pub enum SigmaError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// No interactive terminal to prompt on
    UnknownTerminal,
    /// Remote validation declined the candidate password
    CredentialRejected(Box<SigmaError>),
    /// API client could not be constructed or could not reach the endpoint
    ClientInitialization(Box<SigmaError>),
    /// Config file could not be written
    Persistence(String),
    /// No password stored for the active context
    NotAuthenticated(String),
    /// Reading from the terminal failed
    Prompt(String),
    /// JSON parsing error
    Json(String),
    /// YAML parsing error
    Yaml(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for SigmaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigmaError::Http(e) => write!(f, "HTTP request failed: {}", e),
            SigmaError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            SigmaError::UnknownTerminal => write!(
                f,
                "unknown terminal: a password can only be entered on an interactive terminal"
            ),
            SigmaError::CredentialRejected(e) => {
                write!(f, "Unable to use supplied password to access API: {}", e)
            }
            SigmaError::ClientInitialization(e) => {
                write!(f, "Unable to initialise CloudSigma API client: {}", e)
            }
            SigmaError::Persistence(msg) => write!(f, "Unable to write config file: {}", msg),
            SigmaError::NotAuthenticated(context) => write!(
                f,
                "No password configured for context '{}'. Run 'sigmactl auth init' first.",
                context
            ),
            SigmaError::Prompt(msg) => write!(f, "Unable to read password: {}", msg),
            SigmaError::Json(msg) => write!(f, "JSON error: {}", msg),
            SigmaError::Yaml(msg) => write!(f, "YAML error: {}", msg),
            SigmaError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for SigmaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SigmaError::Http(e) => Some(e),
            SigmaError::CredentialRejected(e) | SigmaError::ClientInitialization(e) => {
                Some(e.as_ref())
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for SigmaError {
    fn from(err: reqwest::Error) -> Self {
        SigmaError::Http(err)
    }
}

impl From<serde_json::Error> for SigmaError {
    fn from(err: serde_json::Error) -> Self {
        SigmaError::Json(err.to_string())
    }
}

impl From<serde_yml::Error> for SigmaError {
    fn from(err: serde_yml::Error) -> Self {
        SigmaError::Yaml(err.to_string())
    }
}

impl From<std::io::Error> for SigmaError {
    fn from(err: std::io::Error) -> Self {
        SigmaError::Config(err.to_string())
    }
}

/// Result type alias for sigmactl operations
pub type Result<T> = std::result::Result<T, SigmaError>;
