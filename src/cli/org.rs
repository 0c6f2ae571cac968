//! Organization command implementations

use colored::Colorize;
use log::debug;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::{CirrusApi, CirrusClient};
use crate::config::Config;
use crate::error::Result;
use crate::models::{OrgSettingsView, Routes};
use crate::output::Formattable;

/// Run the org set command
pub async fn set(opts: &GlobalOptions, organization: &str) -> Result<()> {
    let mut config = Config::load_at(opts.config_ref())?;
    config.validate_auth()?;

    let api_host = opts.api_host_ref().unwrap_or(config.api_host()).to_string();
    let client = CirrusClient::with_host(config.api_token.clone(), Some(api_host))?;

    println!("Verifying organization...");
    let info = client.organization_info(organization).await?;

    config.organization = Some(info.name.clone());
    config.save_at(opts.config_ref())?;

    println!(
        "{} Set default organization to: {}",
        "✓".green(),
        info.name.bold()
    );

    Ok(())
}

/// Run the org settings command
pub async fn settings(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let organization = ctx.require_organization()?;

    let spinner = ctx.spinner("Loading organization settings...");
    let view = load_settings(&*ctx.client, organization, &ctx.routes()).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    view?.print(ctx.format)
}

pub(crate) async fn load_settings<C: CirrusApi + ?Sized>(
    client: &C,
    organization: &str,
    routes: &Routes<'_>,
) -> Result<OrgSettingsView> {
    debug!("Fetching settings for organization {}", organization);
    let info = client.organization_info(organization).await?;
    Ok(OrgSettingsView::new(&info, routes))
}
