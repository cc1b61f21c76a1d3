//! Region command handlers

use log::debug;

use crate::error::Result;
use crate::invocation::Invocation;
use crate::output::output_list;
use crate::sigma::ServiceLocator;
use crate::ui::{clear_spinner, create_spinner};

/// Run the 'region list' command
pub async fn run_region_command(inv: &Invocation) -> Result<()> {
    let services = inv.services()?;
    let service = services.regions()?;

    let spinner = create_spinner("Fetching regions...", inv.output().quiet);
    let result = service.list().await;
    clear_spinner(spinner);

    let regions = result?;
    debug!("Found {} regions", regions.len());
    output_list(&regions, inv.output())
}
