//! Config command handlers

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use crate::cli::ConfigAction;
use crate::error::{Result, SigmaError};
use crate::invocation::Invocation;

use super::credentials::{mask_password, CredentialStore};
use super::models::Config;
use super::resolve::Profile;

/// Dispatch config subcommands
pub fn run_config_command(inv: &mut Invocation, action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::View => {
            println!("{}", render_config_view(inv.credentials().config())?);
            Ok(())
        }
        ConfigAction::GetContexts => {
            println!("{}", render_context_list(inv.credentials(), inv.profile()));
            Ok(())
        }
        ConfigAction::CurrentContext => {
            println!("{}", inv.profile());
            Ok(())
        }
        ConfigAction::UseContext(args) => {
            run_context_use(inv, &args.name)?;
            println!("✓ Switched to context '{}'", args.name);
            Ok(())
        }
    }
}

/// Config file contents with every password masked
fn render_config_view(config: &Config) -> Result<String> {
    let mut masked = config.clone();
    if !masked.password.is_empty() {
        masked.password = mask_password(&masked.password);
    }
    for password in masked.auth_contexts.values_mut() {
        *password = mask_password(password);
    }

    let yaml = serde_yml::to_string(&masked)
        .map_err(|e| SigmaError::Config(format!("Failed to serialize config: {}", e)))?;
    Ok(yaml.trim_end().to_string())
}

/// Table of configured contexts, marking the active one
fn render_context_list(store: &CredentialStore, active: &Profile) -> String {
    let entries = store.profiles();
    if entries.is_empty() {
        return "No contexts configured.\n\n\
                Use 'sigmactl [--context <name>] auth init' to create one."
            .to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("CURRENT"),
            Cell::new("NAME"),
            Cell::new("PASSWORD"),
        ]);

    for entry in &entries {
        let current_marker = if &entry.profile == active { "*" } else { "" };
        table.add_row(vec![
            Cell::new(current_marker),
            Cell::new(entry.profile.name()),
            Cell::new(&entry.masked_password),
        ]);
    }

    table.to_string()
}

/// Make `name` the configured default context and save the config file
fn run_context_use(inv: &mut Invocation, name: &str) -> Result<()> {
    let profile = Profile::from_name(name);
    let mut staged = inv.credentials().clone();

    if let Profile::Named(ref n) = profile {
        if !staged.config().auth_contexts.contains_key(n) {
            let available = staged
                .profiles()
                .iter()
                .map(|e| e.profile.name().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(SigmaError::Config(format!(
                "Context '{}' not found. Available contexts: {}\n\
                 Run 'sigmactl --context {} auth init' to create it.",
                name, available, name
            )));
        }
    }

    staged.config_mut().context = Some(profile.name().to_string());
    inv.config_store().save(staged.config())?;
    inv.adopt(staged);
    Ok(())
}
