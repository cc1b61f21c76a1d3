//! Configuration document data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level configuration document persisted as YAML
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Name of the configured default context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Password of the `default` context
    #[serde(default)]
    pub password: String,
    /// Map of named context to password
    #[serde(rename = "auth-contexts", default)]
    pub auth_contexts: BTreeMap<String, String>,
    /// Account e-mail used as the basic-auth user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// API base URL override
    #[serde(rename = "api-url", default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Keys sigmactl does not know about, kept across load/save
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yml::Value>,
}
