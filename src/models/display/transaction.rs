//! Compute credit transaction display models

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use super::common::{format_as_iso_datetime, or_placeholder};
use crate::cli::OutputFormat;
use crate::client::models::Transaction;
use crate::error::Result;
use crate::output::json::{PageMeta, format_json_page};
use crate::output::{Formattable, table};

/// Transaction row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TransactionDisplay {
    #[tabled(rename = "TIME")]
    pub time: String,

    #[tabled(rename = "TASK ID")]
    pub task_id: String,

    #[tabled(rename = "REPOSITORY")]
    pub repository: String,

    #[tabled(rename = "CREDITS")]
    pub credits: String,
}

impl From<&Transaction> for TransactionDisplay {
    fn from(tx: &Transaction) -> Self {
        Self {
            time: format_as_iso_datetime(tx.timestamp),
            task_id: or_placeholder(tx.task_id.as_deref()),
            repository: or_placeholder(tx.repository_name.as_deref()),
            credits: or_placeholder(tx.credits_amount.as_deref()),
        }
    }
}

impl From<Transaction> for TransactionDisplay {
    fn from(tx: Transaction) -> Self {
        Self::from(&tx)
    }
}

/// Shown when no page came back before the listing stopped
const NOT_LOADED: &str = "Interrupted before any transactions were loaded.";

/// A loaded run of transactions and where it stopped.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionsView {
    pub transactions: Vec<TransactionDisplay>,
    pub page: PageMeta,
    /// False until at least one page has come back
    #[serde(skip)]
    pub loaded: bool,
}

impl TransactionsView {
    pub fn new<'a>(
        transactions: impl IntoIterator<Item = &'a Transaction>,
        end_cursor: Option<&str>,
        has_next_page: bool,
    ) -> Self {
        Self {
            transactions: transactions.into_iter().map(TransactionDisplay::from).collect(),
            page: PageMeta {
                end_cursor: end_cursor.map(str::to_string),
                has_next_page,
            },
            loaded: true,
        }
    }

    /// Mark whether any page has come back yet.
    pub fn with_loaded(mut self, loaded: bool) -> Self {
        self.loaded = loaded;
        self
    }

    fn is_unloaded(&self) -> bool {
        !self.loaded && self.transactions.is_empty()
    }

    /// Hint for fetching the next page, if there is one.
    pub fn continuation_hint(&self) -> Option<String> {
        if !self.page.has_next_page {
            return None;
        }
        self.page.end_cursor.as_ref().map(|cursor| {
            format!(
                "More transactions available: cirrusop credits transactions --after {}",
                cursor
            )
        })
    }
}

impl Formattable for TransactionsView {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(format_json_page(&self.transactions, self.page.clone())?),
            OutputFormat::Table | OutputFormat::Pretty if self.is_unloaded() => {
                Ok(NOT_LOADED.yellow().to_string())
            }
            OutputFormat::Table => Ok(table::format_table(&self.transactions)),
            OutputFormat::Pretty => {
                if self.transactions.is_empty() {
                    return Ok("No transactions yet.".dimmed().to_string());
                }
                let mut out = table::format_table(&self.transactions);
                if let Some(hint) = self.continuation_hint() {
                    out.push_str(&format!("\n{}", hint.dimmed()));
                }
                Ok(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(task: &str, amount: &str) -> Transaction {
        Transaction {
            timestamp: Some(1_736_942_400_000),
            task_id: Some(task.to_string()),
            repository_name: Some("cirruslabs/cirrus-ci-web".to_string()),
            credits_amount: Some(amount.to_string()),
        }
    }

    #[test]
    fn test_transaction_display() {
        let display = TransactionDisplay::from(tx("123", "0.42"));

        assert_eq!(display.time, "2025-01-15T12:00:00Z");
        assert_eq!(display.task_id, "123");
        assert_eq!(display.repository, "cirruslabs/cirrus-ci-web");
        assert_eq!(display.credits, "0.42");
    }

    #[test]
    fn test_transaction_display_placeholders() {
        let display = TransactionDisplay::from(Transaction::default());

        assert_eq!(display.time, "--");
        assert_eq!(display.task_id, "--");
        assert_eq!(display.repository, "--");
        assert_eq!(display.credits, "--");
    }

    #[test]
    fn test_continuation_hint() {
        let txs = [tx("1", "0.10")];
        let view = TransactionsView::new(&txs, Some("c1"), true);
        assert_eq!(
            view.continuation_hint().as_deref(),
            Some("More transactions available: cirrusop credits transactions --after c1")
        );

        let view = TransactionsView::new(&txs, Some("c1"), false);
        assert!(view.continuation_hint().is_none());
    }

    #[test]
    fn test_json_carries_page_meta() {
        let txs = [tx("1", "0.10"), tx("2", "0.20")];
        let view = TransactionsView::new(&txs, Some("c2"), true);

        let output = view.format(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["data"].as_array().unwrap().len(), 2);
        assert_eq!(value["data"][1]["task_id"], "2");
        assert_eq!(value["meta"]["page"]["endCursor"], "c2");
    }

    #[test]
    fn test_empty_table() {
        let none: [Transaction; 0] = [];
        let view = TransactionsView::new(&none, None, false);
        assert_eq!(view.format(OutputFormat::Table).unwrap(), "No results found.");
    }

    #[test]
    fn test_unloaded_view_is_not_the_empty_state() {
        colored::control::set_override(false);
        let none: [Transaction; 0] = [];

        let view = TransactionsView::new(&none, None, true).with_loaded(false);
        let pretty = view.format(OutputFormat::Pretty).unwrap();
        assert_eq!(pretty, NOT_LOADED);
        assert!(!pretty.contains("No transactions yet."));
        assert_eq!(view.format(OutputFormat::Table).unwrap(), NOT_LOADED);

        let view = TransactionsView::new(&none, None, false);
        assert_eq!(
            view.format(OutputFormat::Pretty).unwrap(),
            "No transactions yet."
        );
    }
}
