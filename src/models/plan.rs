//! Marketplace plan and trial state
//!
//! [`resolve_plan_state`] turns the optional purchase on an organization
//! into a [`PlanState`] once; views match on the result instead of
//! re-checking the purchase fields.

use log::debug;
use serde::Serialize;

use super::links;
use crate::client::models::{OrganizationInfo, Purchase};

/// Which plan call-to-action an organization gets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PlanState {
    /// Nothing (recognized) purchased
    NoPlan,
    /// Private repositories plan is active
    ActivePaidPlan(PaidPlan),
}

/// An active private repositories plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaidPlan {
    pub plan_name: String,
    pub seats: i64,
    pub active_users: i64,
    /// Seats not used by active users; negative when over-subscribed
    pub available_seats: i64,
    /// Present while a free trial has days left
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial: Option<TrialBanner>,
}

/// Free trial banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrialBanner {
    pub days_left: i64,
}

/// A plan call-to-action with its marketplace link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PlanAction {
    PurchasePlan { url: String },
    AddSeats { url: String },
    SwitchToFree { url: String },
}

impl PlanAction {
    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            PlanAction::PurchasePlan { .. } => "Purchase Plan for Private Repositories",
            PlanAction::AddSeats { .. } => "Add More Seats",
            PlanAction::SwitchToFree { .. } => "Switch to Free Plan",
        }
    }

    /// Marketplace link
    pub fn url(&self) -> &str {
        match self {
            PlanAction::PurchasePlan { url }
            | PlanAction::AddSeats { url }
            | PlanAction::SwitchToFree { url } => url,
        }
    }
}

/// Derive the plan state of an organization.
pub fn resolve_plan_state(info: &OrganizationInfo) -> PlanState {
    let Some(purchase) = info.purchase.as_ref() else {
        return PlanState::NoPlan;
    };

    if !purchase.is_private_repositories_plan() {
        debug!(
            "organization {} has unrecognized plan {}; treating as no plan",
            info.name, purchase.plan_id
        );
        return PlanState::NoPlan;
    }

    PlanState::ActivePaidPlan(PaidPlan {
        plan_name: purchase.plan_name.clone(),
        seats: purchase.unit_count,
        active_users: info.active_users_amount,
        available_seats: purchase.unit_count - info.active_users_amount,
        trial: trial_banner(purchase),
    })
}

fn trial_banner(purchase: &Purchase) -> Option<TrialBanner> {
    (purchase.on_free_trial && purchase.free_trial_days_left > 0).then_some(TrialBanner {
        days_left: purchase.free_trial_days_left,
    })
}

impl PlanState {
    /// Actions offered for this state, in display order.
    pub fn actions(&self, organization: &str) -> Vec<PlanAction> {
        match self {
            PlanState::NoPlan => vec![PlanAction::PurchasePlan {
                url: links::purchase_plan_url(organization),
            }],
            PlanState::ActivePaidPlan(_) => vec![
                PlanAction::SwitchToFree {
                    url: links::switch_to_free_url(organization),
                },
                PlanAction::AddSeats {
                    url: links::add_seats_url(organization),
                },
            ],
        }
    }

    /// Trial banner, if one should be shown.
    pub fn trial(&self) -> Option<TrialBanner> {
        match self {
            PlanState::NoPlan => None,
            PlanState::ActivePaidPlan(plan) => plan.trial,
        }
    }
}
