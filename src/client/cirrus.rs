//! Cirrus CI GraphQL client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::CirrusApi;
use super::graphql::{GraphQlRequest, GraphQlResponse};
use super::models::{OrganizationInfo, Repository, Transaction};
use super::pagination::{Connection, DEFAULT_PAGE_SIZE, PageVariables, get_variables};
use super::queries::{
    COMPUTE_CREDITS_QUERY, ORGANIZATION_INFO_QUERY, REPOSITORY_BUILD_LIST_QUERY,
};
use crate::config::DEFAULT_API_HOST;
use crate::error::{ApiError, Result};

/// Requests per second allowed against the API
const RATE_LIMIT_PER_SECOND: u32 = 6;

/// Per-request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Cirrus CI GraphQL client
pub struct CirrusClient {
    http: HttpClient,
    endpoint: String,
    token: Option<String>,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl CirrusClient {
    /// Create a client, against a custom API host when one is given
    pub fn with_host(token: Option<String>, api_host: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("cirrusop/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(
            NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN),
        );
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        let host = api_host.unwrap_or_else(|| DEFAULT_API_HOST.to_string());

        Ok(Self {
            http,
            endpoint: graphql_endpoint(&host),
            token,
            rate_limiter,
        })
    }

    /// GraphQL endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a query and return its `data` object
    async fn execute<V, T>(&self, operation: &str, query: &str, variables: V) -> Result<T>
    where
        V: Serialize + Send,
        T: DeserializeOwned,
    {
        self.rate_limiter.until_ready().await;

        debug!("POST {} ({})", self.endpoint, operation);

        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables });
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let body = response.json::<GraphQlResponse<T>>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                body.into_data()
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(self.endpoint.clone()).into()),
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimit(Duration::from_secs(retry_after)).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

/// Append `/graphql` to a host unless it already points at the endpoint
fn graphql_endpoint(host: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.ends_with("/graphql") {
        host.to_string()
    } else {
        format!("{}/graphql", host)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrganizationInfoData<T> {
    github_organization_info: Option<T>,
}

#[derive(Deserialize)]
struct TransactionsOnly {
    #[serde(default)]
    transactions: Option<Connection<Transaction>>,
}

#[derive(Deserialize)]
struct RepositoryData {
    repository: Option<Repository>,
}

#[async_trait]
impl CirrusApi for CirrusClient {
    async fn organization_info(&self, organization: &str) -> Result<OrganizationInfo> {
        let variables = get_variables(DEFAULT_PAGE_SIZE, None, organization);
        let data: OrganizationInfoData<OrganizationInfo> = self
            .execute("OrganizationInfoQuery", ORGANIZATION_INFO_QUERY, variables)
            .await?;

        data.github_organization_info
            .ok_or_else(|| ApiError::NotFound(format!("Organization {}", organization)).into())
    }

    async fn transactions_page(
        &self,
        variables: &PageVariables,
    ) -> Result<Connection<Transaction>> {
        let data: OrganizationInfoData<TransactionsOnly> = self
            .execute("ComputeCreditsQuery", COMPUTE_CREDITS_QUERY, variables)
            .await?;

        let info = data.github_organization_info.ok_or_else(|| {
            ApiError::NotFound(format!("Organization {}", variables.organization))
        })?;
        Ok(info.transactions.unwrap_or_default())
    }

    async fn repository_builds(&self, repository_id: &str, count: usize) -> Result<Repository> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Variables<'a> {
            repository_id: &'a str,
            count: usize,
        }

        let data: RepositoryData = self
            .execute(
                "RepositoryBuildListQuery",
                REPOSITORY_BUILD_LIST_QUERY,
                Variables {
                    repository_id,
                    count,
                },
            )
            .await?;

        data.repository
            .ok_or_else(|| ApiError::NotFound(format!("Repository {}", repository_id)).into())
    }
}
