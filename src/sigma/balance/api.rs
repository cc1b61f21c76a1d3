//! Balance API operations

use crate::config::api;
use crate::error::Result;
use crate::sigma::SigmaClient;

use super::models::Balance;

/// Read access to the account balance
pub struct BalanceService {
    client: SigmaClient,
}

impl BalanceService {
    pub fn new(client: SigmaClient) -> Self {
        Self { client }
    }

    /// Fetch the current account balance
    pub async fn get(&self) -> Result<Balance> {
        let url = self.client.endpoint_url(api::BALANCE);
        self.client.fetch(&url, "account balance").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SigmaError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_balance() {
        let mock_server = MockServer::start().await;
        let service = BalanceService::new(SigmaClient::test_client(&mock_server.uri(), "pw"));

        Mock::given(method("GET"))
            .and(path("/balance/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "balance": "99.99",
                "currency": "USD"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let balance = service.get().await.unwrap();
        assert_eq!(balance.total_balance, "99.99");
        assert_eq!(balance.currency, "USD");
    }

    #[tokio::test]
    async fn test_get_balance_unauthorized() {
        let mock_server = MockServer::start().await;
        let service = BalanceService::new(SigmaClient::test_client(&mock_server.uri(), "bad"));

        Mock::given(method("GET"))
            .and(path("/balance/"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        match service.get().await.unwrap_err() {
            SigmaError::Api { status, .. } => assert_eq!(status, 401),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }
}
