//! Balance command handlers

use crate::error::Result;
use crate::invocation::Invocation;
use crate::output::output_one;
use crate::sigma::ServiceLocator;
use crate::ui::{clear_spinner, create_spinner};

/// Run the 'balance get' command
pub async fn run_balance_command(inv: &Invocation) -> Result<()> {
    let services = inv.services()?;
    let service = services.balance()?;

    let spinner = create_spinner("Fetching account balance...", inv.output().quiet);
    let result = service.get().await;
    clear_spinner(spinner);

    output_one(&result?, inv.output())
}
