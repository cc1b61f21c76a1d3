//! Regions API operations

use crate::config::api;
use crate::error::Result;
use crate::sigma::{ObjectList, SigmaClient};

use super::models::Region;

/// Read access to the list of CloudSigma locations
pub struct RegionsService {
    client: SigmaClient,
}

impl RegionsService {
    pub fn new(client: SigmaClient) -> Self {
        Self { client }
    }

    /// List all locations, sorted by id
    pub async fn list(&self) -> Result<Vec<Region>> {
        let url = self.client.endpoint_url(api::LOCATIONS);
        let list: ObjectList<Region> = self.client.fetch(&url, "regions").await?;

        let mut regions = list.into_objects();
        regions.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(regions)
    }
}
