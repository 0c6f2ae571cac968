//! Cirrus CI GraphQL data models
//!
//! Domain types returned by the GraphQL API, organized by resource type.

mod build;
mod org;
mod repo;
mod transaction;

pub use build::{Build, BuildStatus};
pub use org::{
    FREE_PLAN_ID, ORGANIZATIONAL_PRIVATE_REPOSITORIES_PLAN_ID, OrganizationInfo, Purchase,
};
pub use repo::Repository;
pub use transaction::Transaction;
