//! Mock Cirrus CI API client for testing
//!
//! Provides a mock implementation of [`CirrusApi`] for unit testing
//! without making real API calls.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::CirrusApi;
use super::models::{OrganizationInfo, Repository, Transaction};
use super::pagination::{Connection, PageVariables};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockCirrusClient::new()
///     .with_org(OrganizationInfo { name: "cirruslabs".into(), ..Default::default() });
///
/// let info = mock.organization_info("cirruslabs").await?;
/// ```
#[derive(Default)]
pub struct MockCirrusClient {
    /// Organizations returned by `organization_info`, matched by name
    orgs: Arc<Mutex<Vec<OrganizationInfo>>>,
    /// Transaction pages served in order by `transactions_page`
    pages: Arc<Mutex<VecDeque<Result<Connection<Transaction>>>>>,
    /// Repositories returned by `repository_builds`, matched by ID
    repos: Arc<Mutex<Vec<Repository>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Variables received by `transactions_page`
    page_requests: Arc<Mutex<Vec<PageVariables>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub organization_info: usize,
    pub transactions_page: usize,
    pub repository_builds: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.organization_info + self.transactions_page + self.repository_builds
    }
}

impl MockCirrusClient {
    /// Create a new mock client with no configured responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an organization to return.
    pub fn with_org(self, org: OrganizationInfo) -> Self {
        self.orgs.try_lock().expect("fresh mock").push(org);
        self
    }

    /// Queue a transactions page.
    pub fn with_page(self, page: Connection<Transaction>) -> Self {
        self.pages.try_lock().expect("fresh mock").push_back(Ok(page));
        self
    }

    /// Queue a failing transactions page.
    pub fn with_page_error(self, error: ApiError) -> Self {
        self.pages
            .try_lock()
            .expect("fresh mock")
            .push_back(Err(error.into()));
        self
    }

    /// Add a repository to return.
    pub fn with_repo(self, repo: Repository) -> Self {
        self.repos.try_lock().expect("fresh mock").push(repo);
        self
    }

    /// Fail the next call with `error`.
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().expect("fresh mock") = Some(error);
        self
    }

    /// Number of calls made so far.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Variables received by `transactions_page`, in call order.
    pub async fn page_requests(&self) -> Vec<PageVariables> {
        self.page_requests.lock().await.clone()
    }

    async fn take_error(&self) -> Result<()> {
        match self.error.lock().await.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CirrusApi for MockCirrusClient {
    async fn organization_info(&self, organization: &str) -> Result<OrganizationInfo> {
        self.call_count.lock().await.organization_info += 1;
        self.take_error().await?;

        self.orgs
            .lock()
            .await
            .iter()
            .find(|o| o.name == organization)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Organization {}", organization)).into())
    }

    async fn transactions_page(
        &self,
        variables: &PageVariables,
    ) -> Result<Connection<Transaction>> {
        self.call_count.lock().await.transactions_page += 1;
        self.page_requests.lock().await.push(variables.clone());
        self.take_error().await?;

        self.pages
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(Connection::default()))
    }

    async fn repository_builds(&self, repository_id: &str, count: usize) -> Result<Repository> {
        self.call_count.lock().await.repository_builds += 1;
        self.take_error().await?;

        let repo = self
            .repos
            .lock()
            .await
            .iter()
            .find(|r| r.id == repository_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Repository {}", repository_id)))?;

        let skip = repo.builds.edges.len().saturating_sub(count);
        Ok(Repository {
            builds: Connection::new(
                repo.builds.edges.into_iter().skip(skip).collect(),
                repo.builds.page_info,
            ),
            ..repo
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::pagination::{Edge, PageInfo, get_variables};

    #[tokio::test]
    async fn test_mock_serves_pages_in_order() {
        let mock = MockCirrusClient::new()
            .with_page(Connection::new(
                vec![Edge::new("c1", Transaction::default())],
                PageInfo {
                    has_next_page: true,
                    end_cursor: Some("c1".to_string()),
                },
            ))
            .with_page_error(ApiError::ServerError("down".to_string()));

        let vars = get_variables(1, None, "org");
        assert_eq!(mock.transactions_page(&vars).await.unwrap().edges.len(), 1);
        assert!(mock.transactions_page(&vars).await.is_err());
        assert!(mock.transactions_page(&vars).await.unwrap().edges.is_empty());

        assert_eq!(mock.call_counts().await.transactions_page, 3);
        assert_eq!(mock.page_requests().await.len(), 3);
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockCirrusClient::new()
            .with_org(OrganizationInfo {
                name: "cirruslabs".to_string(),
                ..OrganizationInfo::default()
            })
            .with_error(ApiError::Unauthorized);

        assert!(mock.organization_info("cirruslabs").await.is_err());
        assert!(mock.organization_info("cirruslabs").await.is_ok());
        assert_eq!(mock.call_counts().await.total(), 2);
    }
}
