//! Balance data models

use serde::{Deserialize, Deserializer, Serialize};

/// Account balance from the CloudSigma API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Balance {
    /// Remaining balance; the API sends it as a decimal string
    #[serde(rename = "balance", deserialize_with = "amount_as_string")]
    pub total_balance: String,
    pub currency: String,
}

/// Accept `"12.50"` as well as `12.5`
fn amount_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected balance as string or number, got {}",
            other
        ))),
    }
}
