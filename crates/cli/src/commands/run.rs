//! Run command implementation: rebuild the target repository's labels.

use anyhow::{Context, Result};
use gitlabel_client::{GitHubClient, SyncPlan, SyncReport, sync_labels};
use secrecy::SecretString;
use tracing::info;

use crate::args::RunArgs;
use crate::config_context::ConfigCommandContext;
use crate::error::CliError;

pub async fn run(args: RunArgs, ctx: &ConfigCommandContext) -> Result<()> {
    let settings = &ctx.settings;

    let owner = require(
        args.username,
        &settings.github_username,
        ctx,
        "github_username",
        "--username",
    )?;
    let source = require(
        args.source_repository,
        &settings.github_source_repository,
        ctx,
        "github_source_repository",
        "--source-repository",
    )?;
    let target = require(
        args.target_repository,
        &settings.github_target_repository,
        ctx,
        "github_target_repository",
        "--target-repository",
    )?;
    let token = args
        .access_token
        .filter(|t| !t.trim().is_empty())
        .map(|t| SecretString::new(t.into()))
        .or_else(|| settings.github_access_token.clone())
        .ok_or_else(|| CliError::MissingSetting {
            setting: "github_access_token",
            flag: "--access-token",
            var: ctx.var_name("github_access_token"),
        })?;

    let client = GitHubClient::builder()
        .from_settings(settings)
        .access_token(token)
        .build()
        .context("Failed to build GitHub client")?;

    let plan = SyncPlan {
        owner,
        source_repository: source,
        target_repository: target,
        dry_run: args.dry_run || settings.dry_run,
    };
    info!(
        owner = %plan.owner,
        source = %plan.source_repository,
        target = %plan.target_repository,
        dry_run = plan.dry_run,
        "Synchronizing labels"
    );

    let report = sync_labels(&client, &plan)
        .await
        .context("Failed to read labels")?;

    print!("{}", format_report(&plan, &report));

    if !report.is_success() {
        return Err(CliError::PartialSync {
            failed: report.failures.len(),
            attempted: report.target_labels.len() + report.source_labels.len(),
        }
        .into());
    }
    Ok(())
}

/// The flag value if given, else the setting, else a `MissingSetting` error.
fn require(
    flag_value: Option<String>,
    setting: &Option<String>,
    ctx: &ConfigCommandContext,
    name: &'static str,
    flag: &'static str,
) -> Result<String, CliError> {
    flag_value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| setting.clone())
        .ok_or_else(|| CliError::MissingSetting {
            setting: name,
            flag,
            var: ctx.var_name(name),
        })
}

fn format_report(plan: &SyncPlan, report: &SyncReport) -> String {
    let mut out = String::new();
    let source = format!("{}/{}", plan.owner, plan.source_repository);
    let target = format!("{}/{}", plan.owner, plan.target_repository);

    out.push_str(&format!(
        "Source {}: {} labels\n",
        source,
        report.source_labels.len()
    ));
    out.push_str(&format!(
        "Target {}: {} labels\n",
        target,
        report.target_labels.len()
    ));

    if report.dry_run {
        out.push_str(&format!(
            "Dry run: would delete {} and create {} labels in {}\n",
            report.deleted.len(),
            report.created.len(),
            target
        ));
        for name in &report.deleted {
            out.push_str(&format!("  - {}\n", name));
        }
        for name in &report.created {
            out.push_str(&format!("  + {}\n", name));
        }
        return out;
    }

    out.push_str(&format!(
        "Deleted {} labels, created {} labels in {}\n",
        report.deleted.len(),
        report.created.len(),
        target
    ));
    for failure in &report.failures {
        out.push_str(&format!(
            "  failed to {} '{}': {}\n",
            failure.action, failure.label, failure.error
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitlabel_client::{ClientError, Label, SyncAction, SyncFailure};
    use gitlabel_config::{EnvSources, Settings};
    use std::path::{Path, PathBuf};

    fn ctx() -> ConfigCommandContext {
        let sources = EnvSources {
            env_file: PathBuf::from("/etc/gitlabel/gitlabel.env"),
            env_file_encoding: "UTF-8".to_string(),
            secrets_dir: None,
        };
        let mut settings = Settings::defaults("1.0", Path::new("/opt/gitlabel"), &sources);
        settings.github_username = Some("from-settings".to_string());
        ConfigCommandContext::new(settings, "GITLABEL")
    }

    fn plan(dry_run: bool) -> SyncPlan {
        SyncPlan {
            owner: "octo".to_string(),
            source_repository: "src".to_string(),
            target_repository: "dst".to_string(),
            dry_run,
        }
    }

    #[test]
    fn test_require_prefers_flag_over_setting() {
        let ctx = ctx();
        let value = require(
            Some("from-flag".to_string()),
            &ctx.settings.github_username,
            &ctx,
            "github_username",
            "--username",
        )
        .unwrap();
        assert_eq!(value, "from-flag");
    }

    #[test]
    fn test_require_falls_back_to_setting() {
        let ctx = ctx();
        let value = require(
            None,
            &ctx.settings.github_username,
            &ctx,
            "github_username",
            "--username",
        )
        .unwrap();
        assert_eq!(value, "from-settings");
    }

    #[test]
    fn test_require_missing_names_variable() {
        let ctx = ctx();
        let err = require(
            Some("  ".to_string()),
            &ctx.settings.github_source_repository,
            &ctx,
            "github_source_repository",
            "--source-repository",
        )
        .unwrap_err();
        assert!(
            err.to_string()
                .contains("GITLABEL_GITHUB_SOURCE_REPOSITORY")
        );
    }

    #[test]
    fn test_format_report_dry_run_lists_planned_changes() {
        let report = SyncReport {
            source_labels: vec![Label::new("bug", "d73a4a")],
            target_labels: vec![Label::new("old", "ffffff")],
            deleted: vec!["old".to_string()],
            created: vec!["bug".to_string()],
            failures: Vec::new(),
            dry_run: true,
        };

        let out = format_report(&plan(true), &report);

        assert!(out.contains("Dry run: would delete 1 and create 1 labels in octo/dst"));
        assert!(out.contains("  - old\n"));
        assert!(out.contains("  + bug\n"));
    }

    #[test]
    fn test_format_report_lists_failures() {
        let report = SyncReport {
            source_labels: vec![Label::new("bug", "d73a4a")],
            target_labels: Vec::new(),
            deleted: Vec::new(),
            created: Vec::new(),
            failures: vec![SyncFailure {
                action: SyncAction::Create,
                label: "bug".to_string(),
                error: ClientError::InvalidResponse("boom".to_string()),
            }],
            dry_run: false,
        };

        let out = format_report(&plan(false), &report);

        assert!(out.contains("Deleted 0 labels, created 0 labels in octo/dst"));
        assert!(out.contains("failed to create 'bug'"));
    }
}
