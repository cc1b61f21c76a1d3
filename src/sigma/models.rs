//! Shared API response shapes

use serde::Deserialize;

/// Generic list response: `{"meta": {...}, "objects": [...]}`
#[derive(Deserialize, Debug)]
pub struct ObjectList<T> {
    #[serde(default = "Vec::new")]
    pub objects: Vec<T>,
    #[serde(default)]
    pub meta: Option<ListMeta>,
}

impl<T> ObjectList<T> {
    pub fn into_objects(self) -> Vec<T> {
        self.objects
    }
}

/// List metadata returned by collection endpoints
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ListMeta {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub total_count: Option<u32>,
}
