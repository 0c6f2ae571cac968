//! Compute credits view: balance, pricing notes and transactions

use colored::Colorize;
use serde::Serialize;

use super::transaction::TransactionsView;
use crate::cli::OutputFormat;
use crate::client::models::{OrganizationInfo, Transaction};
use crate::error::Result;
use crate::output::table::{FieldRow, format_table};
use crate::output::{Formattable, json};

/// Where compute credit pricing is documented
pub const PRICING_DOCS_URL: &str = "https://cirrus-ci.org/pricing/#compute-credits";

/// What compute credits buy
pub const PRICING_NOTES: [&str; 5] = [
    "1 compute credit can be bought for 1 US dollar.",
    "1000 minutes of 1 virtual CPU for Linux: 5 compute credits",
    "1000 minutes of 1 virtual CPU for Windows: 10 compute credits",
    "1000 minutes of 1 CPU with hyper-threading (comparable to 2 vCPUs) for macOS: 30 compute credits",
    "All tasks using compute credits are charged on a per-second basis.",
];

/// Compute credits of one organization.
#[derive(Debug, Clone, Serialize)]
pub struct CreditsView {
    pub organization: String,
    pub balance_in_credits: String,
    #[serde(flatten)]
    pub transactions: TransactionsView,
}

impl CreditsView {
    pub fn new<'a>(
        info: &OrganizationInfo,
        transactions: impl IntoIterator<Item = &'a Transaction>,
        end_cursor: Option<&str>,
        has_next_page: bool,
    ) -> Self {
        Self {
            organization: info.name.clone(),
            balance_in_credits: info.balance_display().to_string(),
            transactions: TransactionsView::new(transactions, end_cursor, has_next_page),
        }
    }

    fn render_pretty(&self) -> Result<String> {
        let mut out = format!(
            "{}\n\nYou have {} compute credits left.\n\n",
            "Compute Credits".bold(),
            self.balance_in_credits.yellow().bold()
        );

        for note in PRICING_NOTES {
            out.push_str(&format!("  • {}\n", note));
        }
        out.push_str(&format!("{} {}\n\n", "Docs:".dimmed(), PRICING_DOCS_URL));

        out.push_str(&self.transactions.format(OutputFormat::Pretty)?);
        Ok(out)
    }
}

impl Formattable for CreditsView {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            OutputFormat::Table => {
                let summary = format_table(&[
                    FieldRow::new("Organization", self.organization.as_str()),
                    FieldRow::new("Balance", self.balance_in_credits.as_str()),
                ]);
                let transactions = self.transactions.format(OutputFormat::Table)?;
                Ok(format!("{}\n{}", summary, transactions))
            }
            OutputFormat::Pretty => self.render_pretty(),
        }
    }
}
