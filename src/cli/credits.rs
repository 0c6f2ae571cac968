//! Compute credits commands

use colored::Colorize;
use log::{debug, warn};

use crate::cli::{CommandContext, GlobalOptions, PageArgs};
use crate::client::{CirrusApi, PageVariables, PaginationController, Transaction};
use crate::error::Result;
use crate::models::{CreditsView, TransactionsView};
use crate::output::Formattable;

/// Run the credits show command
pub async fn show(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let organization = ctx.require_organization()?;

    let spinner = ctx.spinner("Loading compute credits...");
    let view = load_credits(&*ctx.client, organization, ctx.page_size()).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    view?.print(ctx.format)
}

/// Run the credits transactions command
pub async fn transactions(opts: &GlobalOptions, pagination: &PageArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let organization = ctx.require_organization()?;
    let page_size = pagination.page_size_or(ctx.page_size());

    debug!(
        "Listing transactions for {} (page size {}, after {:?})",
        organization, page_size, pagination.after
    );

    let mut controller =
        PaginationController::new(organization, page_size).starting_after(pagination.after.clone());

    let spinner = ctx.spinner("Loading transactions...");
    let outcome = tokio::select! {
        result = load_transactions(&*ctx.client, &mut controller, pagination) => Some(result),
        _ = tokio::signal::ctrl_c() => None,
    };
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let result = match outcome {
        Some(result) => result,
        None => {
            controller.tear_down();
            warn!("Interrupted; showing {} loaded transactions", controller.len());
            Ok(())
        }
    };

    if result.is_ok() || !controller.is_empty() {
        transactions_view(&controller, pagination.limit).print(ctx.format)?;
    }

    if let Err(err) = result {
        if let Some(cursor) = controller.cursor() {
            eprintln!(
                "{} cirrusop credits transactions --after {}",
                "→ Resume with:".yellow(),
                cursor
            );
        }
        return Err(err);
    }

    Ok(())
}

/// Organization info plus its embedded first transactions page.
pub(crate) async fn load_credits<C: CirrusApi + ?Sized>(
    client: &C,
    organization: &str,
    page_size: usize,
) -> Result<CreditsView> {
    let mut info = client.organization_info(organization).await?;
    let first_page = info.transactions.take().unwrap_or_default();
    let controller = PaginationController::from_connection(organization, page_size, first_page);

    debug!(
        "{} transactions loaded with organization (has_more={})",
        controller.len(),
        controller.has_more()
    );

    Ok(CreditsView::new(
        &info,
        controller.nodes(),
        controller.cursor(),
        controller.has_more(),
    ))
}

/// Load one page, or keep going for `--all` / `--limit`.
pub(crate) async fn load_transactions<C: CirrusApi + ?Sized>(
    client: &C,
    controller: &mut PaginationController<Transaction>,
    pagination: &PageArgs,
) -> Result<()> {
    let fetch = |variables: PageVariables| async move { client.transactions_page(&variables).await };

    if pagination.wants_many() {
        controller.load_until(pagination.limit, fetch).await
    } else {
        controller.load_more(fetch).await.map(|_| ())
    }
}

/// View over the loaded edges, cut to `limit` with the cursor of the last
/// shown edge so `--after` resumes right after it.
fn transactions_view(
    controller: &PaginationController<Transaction>,
    limit: Option<usize>,
) -> TransactionsView {
    let edges = controller.edges();
    let shown = limit.map_or(edges.len(), |l| l.min(edges.len()));
    let loaded = !controller.is_empty() || controller.is_empty_state();

    if shown == edges.len() {
        return TransactionsView::new(controller.nodes(), controller.cursor(), controller.has_more())
            .with_loaded(loaded);
    }

    let kept = &edges[..shown];
    let cursor = kept
        .last()
        .and_then(|e| e.cursor.as_deref())
        .or(controller.cursor());
    TransactionsView::new(kept.iter().map(|e| &e.node), cursor, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockCirrusClient;
    use crate::client::OrganizationInfo;
    use crate::client::pagination::{Connection, Edge, PageInfo};
    use crate::error::ApiError;

    fn page(ids: &[&str], has_next_page: bool) -> Connection<Transaction> {
        Connection::new(
            ids.iter()
                .map(|id| {
                    Edge::new(
                        format!("c{id}"),
                        Transaction {
                            task_id: Some(id.to_string()),
                            credits_amount: Some("0.10".to_string()),
                            ..Transaction::default()
                        },
                    )
                })
                .collect(),
            PageInfo {
                has_next_page,
                end_cursor: ids.last().map(|id| format!("c{id}")),
            },
        )
    }

    fn task_ids(view: &TransactionsView) -> Vec<String> {
        view.transactions.iter().map(|t| t.task_id.clone()).collect()
    }

    #[tokio::test]
    async fn test_load_credits_seeds_from_org_query() {
        let mock = MockCirrusClient::new().with_org(OrganizationInfo {
            name: "cirruslabs".to_string(),
            balance_in_credits: Some("9.99".to_string()),
            transactions: Some(page(&["1", "2"], true)),
            ..OrganizationInfo::default()
        });

        let view = load_credits(&mock, "cirruslabs", 100).await.unwrap();

        assert_eq!(view.balance_in_credits, "9.99");
        assert_eq!(task_ids(&view.transactions), vec!["1", "2"]);
        assert_eq!(view.transactions.page.end_cursor.as_deref(), Some("c2"));
        assert!(view.transactions.page.has_next_page);
        assert_eq!(mock.call_counts().await.transactions_page, 0);
    }

    #[tokio::test]
    async fn test_load_credits_unknown_org() {
        let mock = MockCirrusClient::new();
        let err = load_credits(&mock, "ghost", 100).await.unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[tokio::test]
    async fn test_single_page_by_default() {
        let mock = MockCirrusClient::new()
            .with_page(page(&["1", "2"], true))
            .with_page(page(&["3"], false));
        let mut controller = PaginationController::new("cirruslabs", 2);

        load_transactions(&mock, &mut controller, &PageArgs::default())
            .await
            .unwrap();

        assert_eq!(controller.len(), 2);
        assert!(controller.has_more());
        assert_eq!(mock.call_counts().await.transactions_page, 1);
    }

    #[tokio::test]
    async fn test_all_pages() {
        let mock = MockCirrusClient::new()
            .with_page(page(&["1", "2"], true))
            .with_page(page(&["3"], false));
        let mut controller = PaginationController::new("cirruslabs", 2);
        let args = PageArgs {
            all: true,
            ..PageArgs::default()
        };

        load_transactions(&mock, &mut controller, &args).await.unwrap();

        assert_eq!(controller.len(), 3);
        assert!(!controller.has_more());

        let requests = mock.page_requests().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].cursor, None);
        assert_eq!(requests[1].cursor.as_deref(), Some("c2"));
    }

    #[tokio::test]
    async fn test_resume_after_cursor() {
        let mock = MockCirrusClient::new().with_page(page(&["7"], false));
        let mut controller =
            PaginationController::new("cirruslabs", 5).starting_after(Some("c6".to_string()));

        load_transactions(&mock, &mut controller, &PageArgs::default())
            .await
            .unwrap();

        let requests = mock.page_requests().await;
        assert_eq!(requests[0].cursor.as_deref(), Some("c6"));
        assert_eq!(requests[0].count, 5);
        assert_eq!(requests[0].organization, "cirruslabs");
    }

    #[tokio::test]
    async fn test_failure_keeps_loaded_rows() {
        let mock = MockCirrusClient::new()
            .with_page(page(&["1", "2"], true))
            .with_page_error(ApiError::ServerError("boom".to_string()));
        let mut controller = PaginationController::new("cirruslabs", 2);
        let args = PageArgs {
            all: true,
            ..PageArgs::default()
        };

        let err = load_transactions(&mock, &mut controller, &args)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("boom"));
        assert_eq!(controller.len(), 2);
        assert_eq!(controller.cursor(), Some("c2"));
        assert!(controller.has_more());
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_limit_truncates_view_and_cursor() {
        let mock = MockCirrusClient::new()
            .with_page(page(&["1", "2", "3"], true))
            .with_page(page(&["4", "5", "6"], true));
        let mut controller = PaginationController::new("cirruslabs", 3);
        let args = PageArgs {
            limit: Some(4),
            ..PageArgs::default()
        };

        load_transactions(&mock, &mut controller, &args).await.unwrap();
        assert_eq!(controller.len(), 6);

        let view = transactions_view(&controller, args.limit);
        assert_eq!(task_ids(&view), vec!["1", "2", "3", "4"]);
        assert_eq!(view.page.end_cursor.as_deref(), Some("c4"));
        assert!(view.page.has_next_page);
    }

    #[tokio::test]
    async fn test_empty_history() {
        let mock = MockCirrusClient::new().with_page(page(&[], false));
        let mut controller = PaginationController::new("cirruslabs", 100);

        load_transactions(&mock, &mut controller, &PageArgs::default())
            .await
            .unwrap();

        assert!(controller.is_empty_state());
        let view = transactions_view(&controller, None);
        assert!(view.loaded);
        assert!(view.transactions.is_empty());
        assert!(view.continuation_hint().is_none());
    }

    #[test]
    fn test_interrupted_before_first_page_is_not_empty_state() {
        let mut controller: PaginationController<Transaction> =
            PaginationController::new("cirruslabs", 100);
        let request = controller.begin_load_more();
        assert!(request.is_some());
        controller.tear_down();

        let view = transactions_view(&controller, None);
        assert!(!view.loaded);
        assert!(view.transactions.is_empty());

        colored::control::set_override(false);
        let pretty = view.format(crate::cli::OutputFormat::Pretty).unwrap();
        assert!(!pretty.contains("No transactions yet."));
        assert!(pretty.contains("Interrupted"));
    }
}
