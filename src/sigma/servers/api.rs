//! Servers API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::sigma::{ObjectList, SigmaClient};

use super::models::Server;

/// Read access to the account's servers
pub struct ServersService {
    client: SigmaClient,
}

impl ServersService {
    pub fn new(client: SigmaClient) -> Self {
        Self { client }
    }

    /// List all servers of the account; `limit=0` disables server-side paging
    pub async fn list(&self) -> Result<Vec<Server>> {
        let url = format!("{}?limit=0", self.client.endpoint_url(api::SERVERS));
        let list: ObjectList<Server> = self.client.fetch(&url, "servers").await?;

        if let Some(total) = list.meta.as_ref().and_then(|m| m.total_count) {
            debug!("API reports {} servers", total);
        }

        let mut servers = list.into_objects();
        servers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(servers)
    }
}
