//! Table columns for API resources

use crate::sigma::{Balance, Region, Server};

use super::Tabular;

impl Tabular for Balance {
    fn headers() -> &'static [&'static str] {
        &["Total Balance", "Currency"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.total_balance.clone(), self.currency.clone()]
    }
}

impl Tabular for Region {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Country", "API Endpoint"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.display_name().to_string(),
            self.country_code().to_string(),
            self.api_endpoint().to_string(),
        ]
    }
}

impl Tabular for Server {
    fn headers() -> &'static [&'static str] {
        &["UUID", "Name", "Status", "CPU (MHz)", "Memory (MiB)"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.uuid.clone(),
            self.name.clone(),
            self.status.clone(),
            self.cpu_mhz().to_string(),
            self.mem_mib().to_string(),
        ]
    }
}
