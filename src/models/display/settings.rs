//! Organization settings view

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::client::models::OrganizationInfo;
use crate::error::Result;
use crate::models::links::Routes;
use crate::models::plan::{PlanAction, PlanState, resolve_plan_state};
use crate::output::table::{FieldRow, format_table};
use crate::output::{Formattable, json};

/// Marketplace plan section of the organization settings page.
#[derive(Debug, Clone, Serialize)]
pub struct OrgSettingsView {
    pub organization: String,
    pub role: String,
    pub plan: PlanState,
    pub actions: Vec<PlanAction>,
    pub balance_in_credits: String,
    pub settings_url: String,
}

impl OrgSettingsView {
    pub fn new(info: &OrganizationInfo, routes: &Routes<'_>) -> Self {
        let plan = resolve_plan_state(info);
        let actions = plan.actions(&info.name);

        Self {
            organization: info.name.clone(),
            role: info.role.clone(),
            plan,
            actions,
            balance_in_credits: info.balance_display().to_string(),
            settings_url: routes.organization_settings(&info.name),
        }
    }

    fn rows(&self) -> Vec<FieldRow> {
        let mut rows = vec![
            FieldRow::new("Organization", self.organization.as_str()),
            FieldRow::new("Role", self.role.as_str()),
        ];

        match &self.plan {
            PlanState::NoPlan => rows.push(FieldRow::new("Plan", "none")),
            PlanState::ActivePaidPlan(plan) => {
                rows.push(FieldRow::new("Plan", plan.plan_name.as_str()));
                rows.push(FieldRow::new("Seats", plan.seats.to_string()));
                rows.push(FieldRow::new("Active users", plan.active_users.to_string()));
                rows.push(FieldRow::new("Available seats", plan.available_seats.to_string()));
                if let Some(trial) = plan.trial {
                    rows.push(FieldRow::new("Free trial days left", trial.days_left.to_string()));
                }
            }
        }

        rows.push(FieldRow::new("Compute credits", self.balance_in_credits.as_str()));
        for action in &self.actions {
            rows.push(FieldRow::new(action.label(), action.url()));
        }
        rows
    }

    fn render_pretty(&self) -> String {
        let mut out = format!(
            "{}\n\n{}\n",
            format!("Settings for {} organization", self.organization).bold(),
            "GitHub Settings".underline()
        );

        match &self.plan {
            PlanState::NoPlan => {
                out.push_str("No GitHub Marketplace plan has been configured!\n");
            }
            PlanState::ActivePaidPlan(plan) => {
                out.push_str(&format!(
                    "Purchased GitHub Plan: {} for {} seats\n",
                    plan.plan_name.bold(),
                    plan.seats.to_string().bold()
                ));
                out.push_str(&format!(
                    "Amount of monthly active users under the plan: {}\n",
                    plan.active_users.to_string().bold()
                ));
                let available = plan.available_seats.to_string();
                let available = if plan.available_seats < 0 {
                    available.red().bold()
                } else {
                    available.bold()
                };
                out.push_str(&format!("Available seats: {}\n", available));
            }
        }

        if let Some(trial) = self.plan.trial() {
            out.push_str(&format!(
                "{} {}\n",
                "Days of Free Trial left:".yellow(),
                trial.days_left.to_string().yellow().bold()
            ));
        }

        out.push('\n');
        for action in &self.actions {
            out.push_str(&format!("→ {}: {}\n", action.label().cyan(), action.url()));
        }

        out.push_str(&format!(
            "\nCompute credits: {}\n{} {}",
            self.balance_in_credits.bold(),
            "Dashboard:".dimmed(),
            self.settings_url
        ));
        out
    }
}

impl Formattable for OrgSettingsView {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Table => Ok(format_table(&self.rows())),
            OutputFormat::Pretty => Ok(self.render_pretty()),
        }
    }
}
