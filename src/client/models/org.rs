//! Organization settings models

use serde::{Deserialize, Serialize};

use super::Transaction;
use crate::client::pagination::Connection;

/// Marketplace plan that unlocks private repositories for an organization.
pub const ORGANIZATIONAL_PRIVATE_REPOSITORIES_PLAN_ID: i64 = 993;

/// Marketplace plan used when switching an organization back to free.
pub const FREE_PLAN_ID: i64 = 990;

/// GitHub organization info as exposed by `githubOrganizationInfo`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationInfo {
    /// Account ID
    pub id: String,

    /// Organization login
    pub name: String,

    /// Caller's role within the organization
    #[serde(default)]
    pub role: String,

    /// Monthly active users counted against the plan
    #[serde(default)]
    pub active_users_amount: i64,

    /// Marketplace purchase, absent when nothing was bought
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase: Option<Purchase>,

    /// Compute credit balance as a decimal string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_in_credits: Option<String>,

    /// First page of compute credit transactions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Connection<Transaction>>,
}

impl OrganizationInfo {
    /// Balance for display, `"0.00"` when the API returned nothing.
    pub fn balance_display(&self) -> &str {
        match self.balance_in_credits.as_deref() {
            Some(balance) if !balance.is_empty() => balance,
            _ => "0.00",
        }
    }
}

/// Marketplace purchase state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    /// Marketplace plan number
    pub plan_id: i64,

    /// Human readable plan name
    #[serde(default)]
    pub plan_name: String,

    /// Purchased seats
    #[serde(default)]
    pub unit_count: i64,

    /// Whether the plan is still in its free trial
    #[serde(default)]
    pub on_free_trial: bool,

    /// Remaining trial days
    #[serde(default)]
    pub free_trial_days_left: i64,
}

impl Purchase {
    /// Whether this purchase is the private repositories plan.
    pub fn is_private_repositories_plan(&self) -> bool {
        self.plan_id == ORGANIZATIONAL_PRIVATE_REPOSITORIES_PLAN_ID
    }
}
