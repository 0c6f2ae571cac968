//! Presentation models
//!
//! Pure derivations from API data (plan state, status colors, links) and
//! the display models built on top of them.

pub mod display;
pub mod links;
pub mod plan;
pub mod status;

pub use display::{CreditsView, OrgSettingsView, RepositoryBuildsView, TransactionsView};
pub use links::Routes;
