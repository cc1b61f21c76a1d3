//! `auth init`: obtain, validate and persist the active context's password
//!
//! ```text
//! NoCredential -> PromptOrReuse -> Validating -> Persisted
//!                                            \-> Failed
//! ```
//!
//! The candidate is staged in a copy of the credential store. Only a
//! validated candidate that was written to disk replaces the invocation's
//! store; on any failure the copy is dropped.

use log::debug;
use std::io::Write;

use crate::context::mask_password;
use crate::error::{Result, SigmaError};
use crate::invocation::Invocation;
use crate::sigma::{ClientSettings, ServiceLocator, Services};

use super::prompt::SecretReader;

const PASSWORD_PROMPT: &str = "Enter your account password";

/// Run `auth init` for the invocation's active context
pub async fn run_auth_init<R, W>(inv: &mut Invocation, reader: &R, out: &mut W) -> Result<()>
where
    R: SecretReader + ?Sized,
    W: Write + ?Sized,
{
    let profile = inv.profile().clone();
    let stored = inv.credentials().get_password(&profile);

    let candidate = if stored.is_empty() {
        debug!("No password stored for context '{}'", profile);
        if !reader.is_interactive() {
            return Err(SigmaError::UnknownTerminal);
        }

        writeln!(
            out,
            "Please authenticate sigmactl for use with your CloudSigma account."
        )?;
        let entered = reader.read_secret(PASSWORD_PROMPT)?;
        let entered = entered.trim();
        if entered.is_empty() {
            return Err(SigmaError::CredentialRejected(Box::new(SigmaError::Config(
                "empty password".to_string(),
            ))));
        }
        entered.to_string()
    } else {
        debug!("Reusing stored password for context '{}'", profile);
        writeln!(out, "Using password [{}]", mask_password(&stored))?;
        stored
    };

    let mut staged = inv.credentials().clone();
    staged.set_password(&profile, &candidate);
    let password = staged
        .resolve(&profile)
        .ok_or_else(|| SigmaError::NotAuthenticated(profile.to_string()))?;
    let services = Services::new(password, ClientSettings::from_config(staged.config()));

    writeln!(out)?;
    write!(out, "Validating password... ")?;
    out.flush()?;

    if let Err(e) = validate(&services).await {
        debug!("Validation failed for context '{}': {}", profile, e);
        writeln!(out, "invalid password")?;
        return Err(e);
    }
    writeln!(out, "OK")?;

    inv.config_store().save(staged.config())?;
    debug!(
        "Persisted password for context '{}' to {}",
        profile,
        inv.config_store().path().display()
    );
    inv.adopt(staged);

    writeln!(
        out,
        "Saved credentials for context '{}' to {}",
        profile,
        inv.config_store().path().display()
    )?;
    Ok(())
}

/// Single read-only probe: fetch the account balance
async fn validate<L: ServiceLocator>(locator: &L) -> Result<()> {
    let balance = locator.balance()?;

    match balance.get().await {
        Ok(b) => {
            debug!("Password accepted (balance currency {})", b.currency);
            Ok(())
        }
        // An answer that is not a balance document came from the server
        Err(SigmaError::Http(e)) if e.is_decode() => {
            Err(SigmaError::CredentialRejected(Box::new(SigmaError::Http(e))))
        }
        Err(SigmaError::Http(e)) => Err(SigmaError::ClientInitialization(Box::new(
            SigmaError::Http(e),
        ))),
        Err(e) => Err(SigmaError::CredentialRejected(Box::new(e))),
    }
}
