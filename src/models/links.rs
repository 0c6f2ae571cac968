//! Outbound marketplace links and dashboard navigation routes

use base64::{Engine as _, engine::general_purpose};

use crate::client::models::{FREE_PLAN_ID, ORGANIZATIONAL_PRIVATE_REPOSITORIES_PLAN_ID};

/// GitHub Marketplace order page for the Cirrus CI app
const MARKETPLACE_ORDER_URL: &str = "https://github.com/marketplace/cirrus-ci/order";

/// Opaque marketplace listing ID for a plan number.
///
/// GitHub identifies listing plans by the base64 of
/// `022:MarketplaceListingPlan<plan>`.
pub fn marketplace_listing_id(plan_id: i64) -> String {
    general_purpose::STANDARD.encode(format!("022:MarketplaceListingPlan{}", plan_id))
}

/// Marketplace order URL for `plan_id` on behalf of `organization`.
pub fn marketplace_order_url(plan_id: i64, organization: &str) -> String {
    format!(
        "{}/{}?account={}",
        MARKETPLACE_ORDER_URL,
        marketplace_listing_id(plan_id),
        organization
    )
}

/// Link to buy the private repositories plan.
pub fn purchase_plan_url(organization: &str) -> String {
    marketplace_order_url(ORGANIZATIONAL_PRIVATE_REPOSITORIES_PLAN_ID, organization)
}

/// Link to change the seat count of the private repositories plan.
pub fn add_seats_url(organization: &str) -> String {
    marketplace_order_url(ORGANIZATIONAL_PRIVATE_REPOSITORIES_PLAN_ID, organization)
}

/// Link to downgrade to the free plan.
pub fn switch_to_free_url(organization: &str) -> String {
    marketplace_order_url(FREE_PLAN_ID, organization)
}

/// Web dashboard routes
#[derive(Debug, Clone, Copy)]
pub struct Routes<'a> {
    web_host: &'a str,
}

impl<'a> Routes<'a> {
    /// Routes rooted at `web_host`
    pub fn new(web_host: &'a str) -> Self {
        Self {
            web_host: web_host.trim_end_matches('/'),
        }
    }

    /// `/repository/{id}/settings`
    pub fn repository_settings(&self, repository_id: &str) -> String {
        format!("{}/repository/{}/settings", self.web_host, repository_id)
    }

    /// `/build/{id}`
    pub fn build(&self, build_id: &str) -> String {
        format!("{}/build/{}", self.web_host, build_id)
    }

    /// `/settings/github/{organization}`
    pub fn organization_settings(&self, organization: &str) -> String {
        format!("{}/settings/github/{}", self.web_host, organization)
    }
}
