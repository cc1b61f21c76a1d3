//! Server data models

use serde::{Deserialize, Serialize};

const BYTES_PER_MIB: u64 = 1024 * 1024;

/// A server from the CloudSigma API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Server {
    pub uuid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    /// CPU in MHz
    #[serde(default)]
    pub cpu: Option<u64>,
    /// Memory in bytes
    #[serde(default)]
    pub mem: Option<u64>,
}

impl Server {
    /// Memory in MiB, 0 if unknown
    pub fn mem_mib(&self) -> u64 {
        self.mem.unwrap_or(0) / BYTES_PER_MIB
    }

    pub fn cpu_mhz(&self) -> u64 {
        self.cpu.unwrap_or(0)
    }
}
