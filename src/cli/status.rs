//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "cirrusop Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;

    let config = match Config::load_from(config_path.clone()) {
        Ok(config) => config,
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!(
                "Run {} to create a configuration file.",
                "cirrusop init".cyan()
            );
            println!();
            return Ok(());
        }
    };

    println!("Config file: {}", config_path.display().to_string().cyan());
    println!();

    if config.validate_auth().is_ok() {
        println!("{} API token configured", "✓".green());
    } else {
        println!("{} API token not configured", "✗".red());
        println!("  → Run 'cirrusop init' to configure");
    }

    match opts.org_ref().or(config.organization.as_deref()) {
        Some(org) => println!("{} Default organization: {}", "✓".green(), org),
        None => {
            println!("{} No default organization set", "○".dimmed());
            println!("  → Run 'cirrusop org set <ORGANIZATION>' to set one");
        }
    }

    // Only show hosts when customized
    if let Some(host) = opts.api_host_ref().or(config.api_host.as_deref()) {
        println!("{} Custom API host: {}", "○".dimmed(), host.cyan());
    }
    if let Some(ref host) = config.web_host {
        println!("{} Custom web host: {}", "○".dimmed(), host.cyan());
    }

    println!(
        "{} Page size: {}",
        "○".dimmed(),
        config.preferences.page_size
    );
    println!();

    Ok(())
}
