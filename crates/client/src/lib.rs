//! GitHub label REST client.
//!
//! This crate provides a small client for the GitHub repository labels API
//! and the delete-then-recreate synchronization built on top of it.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod sync;

pub use client::GitHubClient;
pub use client::builder::GitHubClientBuilder;
pub use error::{ClientError, Result};
pub use models::Label;
pub use sync::{SyncAction, SyncFailure, SyncPlan, SyncReport, sync_labels};
