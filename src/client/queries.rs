//! GraphQL documents sent by the client

/// Organization settings, plan state, balance and the first transactions page.
pub const ORGANIZATION_INFO_QUERY: &str = r#"
query OrganizationInfoQuery($organization: String!, $count: Int!, $cursor: String) {
  githubOrganizationInfo(organization: $organization) {
    id
    name
    role
    activeUsersAmount
    purchase {
      planId
      planName
      unitCount
      onFreeTrial
      freeTrialDaysLeft
    }
    balanceInCredits
    transactions(last: $count, after: $cursor) {
      edges {
        cursor
        node {
          ...TransactionRow
        }
      }
      pageInfo {
        hasNextPage
        endCursor
      }
    }
  }
}

fragment TransactionRow on AccountTransaction {
  timestamp
  taskId
  repositoryName
  creditsAmount
}
"#;

/// One page of compute credit transactions.
pub const COMPUTE_CREDITS_QUERY: &str = r#"
query ComputeCreditsQuery($count: Int!, $cursor: String, $organization: String!) {
  githubOrganizationInfo(organization: $organization) {
    transactions(last: $count, after: $cursor) {
      edges {
        cursor
        node {
          ...TransactionRow
        }
      }
      pageInfo {
        hasNextPage
        endCursor
      }
    }
  }
}

fragment TransactionRow on AccountTransaction {
  timestamp
  taskId
  repositoryName
  creditsAmount
}
"#;

/// A repository and its latest builds.
pub const REPOSITORY_BUILD_LIST_QUERY: &str = r#"
query RepositoryBuildListQuery($repositoryId: ID!, $count: Int!) {
  repository(id: $repositoryId) {
    id
    fullName
    builds(last: $count) {
      edges {
        node {
          id
          branch
          changeIdInRepo
          changeMessage
          status
          authorName
          changeTimestamp
          buildStartedTimestamp
          buildFinishedTimestamp
        }
      }
    }
  }
}
"#;
