//! Repository commands

use log::debug;

use crate::cli::{CommandContext, GlobalOptions};
use crate::client::CirrusApi;
use crate::error::Result;
use crate::models::{RepositoryBuildsView, Routes};
use crate::output::Formattable;

/// Run the repo builds command
pub async fn builds(opts: &GlobalOptions, repository_id: &str, last: u32) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let spinner = ctx.spinner("Loading builds...");
    let view = load_builds(&*ctx.client, repository_id, last as usize, &ctx.routes()).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    view?.print(ctx.format)
}

pub(crate) async fn load_builds<C: CirrusApi + ?Sized>(
    client: &C,
    repository_id: &str,
    last: usize,
    routes: &Routes<'_>,
) -> Result<RepositoryBuildsView> {
    debug!("Fetching last {} builds of repository {}", last, repository_id);

    let repository = client.repository_builds(repository_id, last).await?;
    debug!("Fetched {} builds", repository.builds.edges.len());

    Ok(RepositoryBuildsView::new(&repository, routes))
}
