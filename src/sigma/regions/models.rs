//! Region data models

use serde::{Deserialize, Serialize};

/// A CloudSigma location, each with its own API endpoint
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Region {
    pub id: String,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub api_endpoint: Option<String>,
}

impl Region {
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("")
    }

    pub fn country_code(&self) -> &str {
        self.country_code.as_deref().unwrap_or("")
    }

    pub fn api_endpoint(&self) -> &str {
        self.api_endpoint.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_deserialize() {
        let json = r#"{
            "id": "ZRH",
            "country_code": "CH",
            "display_name": "Zurich, Switzerland",
            "api_endpoint": "https://zrh.cloudsigma.com/api/2.0/"
        }"#;
        let region: Region = serde_json::from_str(json).unwrap();
        assert_eq!(region.id, "ZRH");
        assert_eq!(region.country_code(), "CH");
        assert_eq!(region.display_name(), "Zurich, Switzerland");
    }

    #[test]
    fn test_region_minimal() {
        let region: Region = serde_json::from_str(r#"{"id": "MNL"}"#).unwrap();
        assert_eq!(region.display_name(), "");
        assert_eq!(region.api_endpoint(), "");
    }
}
