//! Cirrus CI GraphQL API client

use async_trait::async_trait;

use crate::error::Result;

pub mod cirrus;
pub mod graphql;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod queries;

pub use cirrus::CirrusClient;
#[cfg(test)]
pub use mock::MockCirrusClient;
pub use models::{OrganizationInfo, Repository, Transaction};
pub use pagination::{Connection, PageVariables, PaginationController};

/// Cirrus CI API operations used by the CLI
#[async_trait]
pub trait CirrusApi: Send + Sync {
    /// Fetch organization settings, plan state, balance and the first
    /// transactions page.
    async fn organization_info(&self, organization: &str) -> Result<OrganizationInfo>;

    /// Fetch one page of compute credit transactions.
    async fn transactions_page(&self, variables: &PageVariables)
    -> Result<Connection<Transaction>>;

    /// Fetch a repository with its latest `count` builds.
    async fn repository_builds(&self, repository_id: &str, count: usize) -> Result<Repository>;
}
