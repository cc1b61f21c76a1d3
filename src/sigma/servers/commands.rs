//! Server command handlers

use log::debug;

use crate::error::Result;
use crate::invocation::Invocation;
use crate::output::output_list;
use crate::sigma::ServiceLocator;
use crate::ui::{clear_spinner, create_spinner};

/// Run the 'server list' command
pub async fn run_server_command(inv: &Invocation) -> Result<()> {
    let services = inv.services()?;
    let service = services.servers()?;

    let spinner = create_spinner("Fetching servers...", inv.output().quiet);
    let result = service.list().await;
    clear_spinner(spinner);

    let servers = result?;
    debug!("Found {} servers for context '{}'", servers.len(), inv.profile());
    output_list(&servers, inv.output())
}
