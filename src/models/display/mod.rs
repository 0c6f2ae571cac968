//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod build;
mod common;
mod credits;
mod settings;
mod transaction;

pub use build::RepositoryBuildsView;
pub use credits::CreditsView;
pub use settings::OrgSettingsView;
pub use transaction::TransactionsView;
