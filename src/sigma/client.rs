//! CloudSigma HTTP client for API interactions

use log::debug;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::context::{Config, Password};
use crate::error::{Result, SigmaError};

/// Connection settings taken from the config document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// API base URL without trailing slash
    pub api_url: String,
    /// Basic-auth user (account e-mail), empty if not configured
    pub username: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: api::DEFAULT_URL.to_string(),
            username: String::new(),
        }
    }
}

impl ClientSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            api_url: config
                .api_url
                .as_deref()
                .filter(|u| !u.is_empty())
                .unwrap_or(api::DEFAULT_URL)
                .trim_end_matches('/')
                .to_string(),
            username: config.username.clone().unwrap_or_default(),
        }
    }
}

/// CloudSigma API client
pub struct SigmaClient {
    client: Client,
    base_url: String,
    username: String,
    password: Password,
}

impl SigmaClient {
    /// Build a client for `settings`, authenticating with `password`.
    ///
    /// Fails with [`SigmaError::ClientInitialization`] when the base URL is
    /// not a valid http(s) URL or the HTTP client cannot be built.
    pub fn new(settings: &ClientSettings, password: &Password) -> Result<Self> {
        let base_url = settings.api_url.trim_end_matches('/').to_string();
        validate_base_url(&base_url)
            .map_err(|e| SigmaError::ClientInitialization(Box::new(e)))?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| SigmaError::ClientInitialization(Box::new(SigmaError::Http(e))))?;

        debug!("Built API client for {}", base_url);

        Ok(Self {
            client,
            base_url,
            username: settings.username.clone(),
            password: password.clone(),
        })
    }

    /// URL of a collection endpoint, e.g. `{base}/balance/`
    pub(crate) fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}/", self.base_url, endpoint.trim_matches('/'))
    }

    /// Create a GET request builder with credentials and standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .basic_auth(&self.username, Some(self.password.expose()))
            .header("Accept", "application/json")
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(SigmaError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// GET `url` and parse the JSON body
    pub(crate) async fn fetch<T>(&self, url: &str, error_context: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        debug!("Fetching {} from: {}", error_context, url);
        let response = self.get(url).send().await?;
        self.parse_api_response(response, error_context).await
    }
}

fn validate_base_url(base_url: &str) -> Result<()> {
    let url = Url::parse(base_url)
        .map_err(|e| SigmaError::Config(format!("Invalid API URL '{}': {}", base_url, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(SigmaError::Config(format!(
            "Invalid API URL '{}': unsupported scheme '{}'",
            base_url, other
        ))),
    }
}

#[cfg(test)]
impl SigmaClient {
    /// Client pointed at a mock server, authenticated as `user`/`password`
    pub(crate) fn test_client(base_url: &str, password: &str) -> Self {
        let mut store = crate::context::CredentialStore::default();
        store.set_password(&crate::context::Profile::Default, password);
        let password = store
            .resolve(&crate::context::Profile::Default)
            .expect("test password must not be empty");
        let settings = ClientSettings {
            api_url: base_url.to_string(),
            username: "user@example.com".to_string(),
        };
        Self::new(&settings, &password).expect("mock server URL is valid")
    }
}
