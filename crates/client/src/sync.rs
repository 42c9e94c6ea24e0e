//! Label synchronization between two repositories.
//!
//! Responsibilities:
//! - Copy the label set of a source repository onto a target repository by
//!   deleting every target label and then creating every source label.
//! - Record per-label failures without aborting the run.
//!
//! Does NOT handle:
//! - Diffing or updating labels in place; the target is always rebuilt.
//! - Retrying failed calls or rolling back applied changes.
//!
//! Invariants:
//! - Both label lists are fetched before any mutation; a failure to list
//!   either side aborts with no changes made.
//! - Calls are made one at a time, deletions before creations.
//! - A dry run performs the two list calls and nothing else.

use std::fmt;

use tracing::{info, warn};

use crate::client::GitHubClient;
use crate::error::{ClientError, Result};
use crate::models::Label;

/// What to synchronize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPlan {
    /// Owner of both repositories.
    pub owner: String,
    pub source_repository: String,
    pub target_repository: String,
    /// List both sides and report the planned changes without applying them.
    pub dry_run: bool,
}

/// A mutation performed on the target repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    Delete,
    Create,
}

impl fmt::Display for SyncAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delete => f.write_str("delete"),
            Self::Create => f.write_str("create"),
        }
    }
}

/// A single label operation that failed.
#[derive(Debug)]
pub struct SyncFailure {
    pub action: SyncAction,
    pub label: String,
    pub error: ClientError,
}

/// Outcome of a synchronization run.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub source_labels: Vec<Label>,
    pub target_labels: Vec<Label>,
    /// Labels removed from the target (planned, on a dry run).
    pub deleted: Vec<String>,
    /// Labels created in the target (planned, on a dry run).
    pub created: Vec<String>,
    pub failures: Vec<SyncFailure>,
    pub dry_run: bool,
}

impl SyncReport {
    /// Whether every attempted operation succeeded.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Rebuild the target repository's labels from the source repository.
///
/// # Errors
///
/// Returns the client error if either label list cannot be fetched. Failures
/// of individual delete or create calls are returned in
/// [`SyncReport::failures`] instead.
pub async fn sync_labels(client: &GitHubClient, plan: &SyncPlan) -> Result<SyncReport> {
    let owner = plan.owner.as_str();
    let source = plan.source_repository.as_str();
    let target = plan.target_repository.as_str();

    let source_labels = client.list_labels(owner, source).await?;
    info!(
        repository = %format!("{owner}/{source}"),
        count = source_labels.len(),
        "Loaded labels from source repository"
    );

    let target_labels = client.list_labels(owner, target).await?;
    info!(
        repository = %format!("{owner}/{target}"),
        count = target_labels.len(),
        "Loaded labels from target repository"
    );

    let mut report = SyncReport {
        dry_run: plan.dry_run,
        ..Default::default()
    };

    if plan.dry_run {
        report.deleted = target_labels.iter().map(|l| l.name.clone()).collect();
        report.created = source_labels.iter().map(|l| l.name.clone()).collect();
        info!(
            deletions = report.deleted.len(),
            creations = report.created.len(),
            "Dry run, no labels changed"
        );
    } else {
        for label in &target_labels {
            match client.delete_label(owner, target, &label.name).await {
                Ok(()) => {
                    info!(label = %label.name, "Deleted label");
                    report.deleted.push(label.name.clone());
                }
                Err(error) => {
                    warn!(label = %label.name, error = %error, "Failed to delete label");
                    report.failures.push(SyncFailure {
                        action: SyncAction::Delete,
                        label: label.name.clone(),
                        error,
                    });
                }
            }
        }

        for label in &source_labels {
            match client.create_label(owner, target, label).await {
                Ok(()) => {
                    info!(label = %label.name, "Created label");
                    report.created.push(label.name.clone());
                }
                Err(error) => {
                    warn!(label = %label.name, error = %error, "Failed to create label");
                    report.failures.push(SyncFailure {
                        action: SyncAction::Create,
                        label: label.name.clone(),
                        error,
                    });
                }
            }
        }
    }

    report.source_labels = source_labels;
    report.target_labels = target_labels;
    Ok(report)
}
