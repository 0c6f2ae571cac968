//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::client::{CirrusApi, CirrusClient};
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Existing preferences and hosts in the config file are kept; only the
/// token and default organization are replaced.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to cirrusop!".bold().green());
    println!("Let's set up your Cirrus CI configuration.\n");

    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();
    if let Some(host) = opts.api_host_ref() {
        config.api_host = Some(host.to_string());
    }

    let api_token: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter your Cirrus CI API token")
        .interact()?;

    let organization: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Default GitHub organization (leave empty to skip)")
        .allow_empty(true)
        .interact_text()?;
    let organization = organization.trim();

    let client = CirrusClient::with_host(
        Some(api_token.clone()),
        Some(config.api_host().to_string()),
    )?;

    if organization.is_empty() {
        config.organization = None;
    } else {
        println!("\n{}", "Verifying organization...".cyan());
        let info = client.organization_info(organization).await?;
        println!("{} Found organization: {}", "✓".green(), info.name.bold());
        config.organization = Some(info.name);
    }

    config.api_token = Some(api_token);
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    if let Some(org) = &config.organization {
        println!("  Default organization: {}", org.bold());
    }

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "cirrusop status".cyan());
    println!("  {} - Show plan and seats", "cirrusop org settings".cyan());
    println!("  {} - Show compute credits", "cirrusop credits show".cyan());

    Ok(())
}
