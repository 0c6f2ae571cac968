//! Cursor pagination over GraphQL connections
//!
//! Provides the connection wire types (`edges` / `pageInfo`) and
//! [`PaginationController`], the forward-cursor state machine behind every
//! "load more" list.
//!
//! The controller never performs I/O itself. A fetch is split into
//! [`PaginationController::begin_load_more`], which hands out a
//! [`PageRequest`] and marks the controller busy, and
//! [`PaginationController::complete`], which applies the response. While a
//! request is outstanding every further `begin_*` call is declined, so at
//! most one page fetch is in flight per list.

use std::future::Future;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// A GraphQL connection: an ordered page of edges plus page info.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    /// Edges in response order
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,

    /// Forward pagination info
    #[serde(default)]
    pub page_info: PageInfo,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            page_info: PageInfo::default(),
        }
    }
}

impl<T> Connection<T> {
    /// Create a connection from edges and page info.
    #[cfg(test)]
    pub fn new(edges: Vec<Edge<T>>, page_info: PageInfo) -> Self {
        Self { edges, page_info }
    }

    /// Iterate over the nodes, skipping the edge wrappers.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|e| &e.node)
    }

    /// Cursor to continue after: the last edge's cursor, else `pageInfo.endCursor`.
    pub fn last_cursor(&self) -> Option<&str> {
        self.edges
            .last()
            .and_then(|e| e.cursor.as_deref())
            .or(self.page_info.end_cursor.as_deref())
    }
}

/// A node together with its opaque cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge<T> {
    /// Opaque cursor for this edge
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,

    /// The node itself
    pub node: T,
}

impl<T> Edge<T> {
    /// Create an edge.
    #[cfg(test)]
    pub fn new(cursor: impl Into<String>, node: T) -> Self {
        Self {
            cursor: Some(cursor.into()),
            node,
        }
    }
}

/// Forward pagination info from a connection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether more edges exist after this page
    #[serde(default)]
    pub has_next_page: bool,

    /// Cursor of the last edge in this page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_cursor: Option<String>,
}

/// Variables for the compute credits pagination query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageVariables {
    /// Number of edges to request
    pub count: usize,

    /// Continue after this cursor; `null` starts from the beginning
    pub cursor: Option<String>,

    /// Organization login
    pub organization: String,
}

/// Build the variables for the next request.
///
/// `requested_count` is the number of edges wanted: a page size for
/// "load more", or the currently visible count for a refetch so the list
/// keeps its length.
pub fn get_variables(
    requested_count: usize,
    cursor: Option<&str>,
    organization: &str,
) -> PageVariables {
    PageVariables {
        count: requested_count,
        cursor: cursor.map(str::to_string),
        organization: organization.to_string(),
    }
}

/// What a [`PageRequest`] will do to the list once completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Append the next page
    LoadMore,
    /// Replace the list from the start
    Refetch,
}

/// A page fetch handed out by the controller.
///
/// Must be passed back to [`PaginationController::complete`] together with
/// the fetch result.
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// Variables to send with the query
    pub variables: PageVariables,
    kind: RequestKind,
    generation: u64,
}

impl PageRequest {
    /// Whether this request appends or replaces.
    pub fn kind(&self) -> RequestKind {
        self.kind
    }
}

/// Forward-cursor pagination state for one list.
#[derive(Debug, Clone)]
pub struct PaginationController<T> {
    organization: String,
    edges: Vec<Edge<T>>,
    cursor: Option<String>,
    page_size: usize,
    has_more: bool,
    in_flight: bool,
    loaded: bool,
    torn_down: bool,
    generation: u64,
}

impl<T> PaginationController<T> {
    /// Create an empty controller for `organization`.
    ///
    /// `has_more` starts out true so the first `load_more` fetches page one.
    pub fn new(organization: impl Into<String>, page_size: usize) -> Self {
        Self {
            organization: organization.into(),
            edges: Vec::new(),
            cursor: None,
            page_size: page_size.max(1),
            has_more: true,
            in_flight: false,
            loaded: false,
            torn_down: false,
            generation: 0,
        }
    }

    /// Start after an existing cursor instead of the first page.
    pub fn starting_after(mut self, cursor: Option<String>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Create a controller seeded with a page that was fetched elsewhere,
    /// such as the first page embedded in the organization query.
    pub fn from_connection(
        organization: impl Into<String>,
        page_size: usize,
        connection: Connection<T>,
    ) -> Self {
        let mut controller = Self::new(organization, page_size);
        controller.append(connection);
        controller
    }

    /// Loaded edges, in response order.
    pub fn edges(&self) -> &[Edge<T>] {
        &self.edges
    }

    /// Loaded nodes, in response order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|e| &e.node)
    }

    /// Number of loaded edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether the source reported more edges after the current cursor.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Cursor the next page continues after.
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Page size used for "load more".
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Whether a page came back and the list is still empty.
    pub fn is_empty_state(&self) -> bool {
        self.loaded && self.edges.is_empty()
    }

    /// Whether [`tear_down`](Self::tear_down) was called.
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Hand out a request for the next page.
    ///
    /// Returns `None` when there is nothing more to load, a fetch is
    /// already in flight, or the list was torn down.
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if self.torn_down || self.in_flight || !self.has_more {
            debug!(
                "load more declined (torn_down={}, in_flight={}, has_more={})",
                self.torn_down, self.in_flight, self.has_more
            );
            return None;
        }

        self.in_flight = true;
        Some(PageRequest {
            variables: get_variables(self.page_size, self.cursor(), &self.organization),
            kind: RequestKind::LoadMore,
            generation: self.generation,
        })
    }

    /// Hand out a request that reloads the list from the start while
    /// keeping its current length.
    pub fn begin_refetch(&mut self) -> Option<PageRequest> {
        if self.torn_down || self.in_flight {
            debug!("refetch declined");
            return None;
        }

        self.in_flight = true;
        let count = self.edges.len().max(self.page_size);
        Some(PageRequest {
            variables: get_variables(count, None, &self.organization),
            kind: RequestKind::Refetch,
            generation: self.generation,
        })
    }

    /// Apply the result of a request handed out by this controller.
    ///
    /// Returns the number of edges received. On error the list, cursor and
    /// `has_more` are left as they were and the error is returned. Results
    /// for requests issued before [`tear_down`](Self::tear_down) are dropped.
    pub fn complete(
        &mut self,
        request: PageRequest,
        result: Result<Connection<T>>,
    ) -> Result<usize> {
        if request.generation != self.generation {
            debug!("discarding page for a torn down list");
            return Ok(0);
        }

        self.in_flight = false;
        let connection = result?;

        let received = match request.kind {
            RequestKind::LoadMore => self.append(connection),
            RequestKind::Refetch => {
                self.edges.clear();
                self.cursor = None;
                self.append(connection)
            }
        };

        debug!(
            "applied {} edges ({} total, has_more={})",
            received,
            self.edges.len(),
            self.has_more
        );
        Ok(received)
    }

    /// Stop accepting results: pending and future fetches are ignored.
    pub fn tear_down(&mut self) {
        self.torn_down = true;
        self.in_flight = false;
        self.generation += 1;
    }

    /// Fetch and append the next page.
    ///
    /// Returns `Ok(0)` without calling `fetch` when the controller declines.
    pub async fn load_more<F, Fut>(&mut self, fetch: F) -> Result<usize>
    where
        F: FnOnce(PageVariables) -> Fut,
        Fut: Future<Output = Result<Connection<T>>>,
    {
        let Some(request) = self.begin_load_more() else {
            return Ok(0);
        };

        let result = fetch(request.variables.clone()).await;
        self.complete(request, result)
    }

    /// Reload the list from the start, preserving the visible count.
    pub async fn refetch<F, Fut>(&mut self, fetch: F) -> Result<usize>
    where
        F: FnOnce(PageVariables) -> Fut,
        Fut: Future<Output = Result<Connection<T>>>,
    {
        let Some(request) = self.begin_refetch() else {
            return Ok(0);
        };

        let result = fetch(request.variables.clone()).await;
        self.complete(request, result)
    }

    /// Keep loading pages until the source is exhausted or `limit` edges
    /// are loaded.
    ///
    /// Stops early on an empty page so a source that keeps reporting
    /// `hasNextPage` without progressing cannot loop forever.
    pub async fn load_until<F, Fut>(&mut self, limit: Option<usize>, mut fetch: F) -> Result<()>
    where
        F: FnMut(PageVariables) -> Fut,
        Fut: Future<Output = Result<Connection<T>>>,
    {
        while self.has_more && limit.is_none_or(|l| self.edges.len() < l) {
            let received = self.load_more(&mut fetch).await?;
            if received == 0 {
                break;
            }
        }
        Ok(())
    }

    fn append(&mut self, connection: Connection<T>) -> usize {
        if let Some(cursor) = connection.last_cursor() {
            self.cursor = Some(cursor.to_string());
        }
        self.has_more = connection.page_info.has_next_page;
        self.loaded = true;

        let received = connection.edges.len();
        self.edges.extend(connection.edges);
        received
    }
}
