//! Command line front end over the project status services.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use cn_app::{FetchOptions, FetchOutcome, ProjectStatusServices, TransitionOutcome};
use cn_core::ids::ProjectId;
use cn_core::project::{ProjectStatusItem, UnifiedStatus};

#[derive(Parser, Debug)]
#[command(
    name = "crowdnest",
    version,
    about = "Inspect and manage maker projects by lifecycle and review status"
)]
pub struct Cli {
    /// Config file (defaults to $CROWDNEST_CONFIG, then the app data dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show project counts per status
    Overview {
        #[arg(long)]
        force: bool,
    },
    /// List the projects in one status bucket
    List {
        #[arg(value_parser = parse_status)]
        status: UnifiedStatus,
        #[arg(long)]
        force: bool,
    },
    /// Delete a draft (remote or local)
    DeleteDraft {
        /// Bucket the project is listed under
        #[arg(value_parser = parse_status)]
        status: UnifiedStatus,
        id: String,
    },
    /// Withdraw a pending review request
    CancelReview { id: String },
    /// Cancel a scheduled release
    CancelScheduled { id: String },
}

/// Accepts route segments (`review`) as well as wire names (`REVIEW`).
pub fn parse_status(raw: &str) -> Result<UnifiedStatus, String> {
    UnifiedStatus::from_route(raw)
        .or_else(|| UnifiedStatus::parse_wire(raw))
        .ok_or_else(|| {
            let known: Vec<_> = UnifiedStatus::ALL
                .iter()
                .map(UnifiedStatus::route_segment)
                .collect();
            format!("unknown status `{raw}`, expected one of: {}", known.join(", "))
        })
}

/// Run one command, writing its output to `out`.
///
/// `cancel` is handed to bucket fetches so an interrupted listing never
/// writes a late response into the cache.
pub async fn execute(
    command: &Command,
    services: &ProjectStatusServices,
    json: bool,
    cancel: CancellationToken,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Overview { force } => {
            let outcome = services.store.fetch_overview(*force).await;
            ensure_settled(services, outcome)?;
            print_overview(services, json, out)
        }
        Command::List { status, force } => {
            let options = FetchOptions {
                force: *force,
                cancel: Some(cancel),
            };
            let outcome = services.store.fetch_by_status(*status, options).await;
            ensure_settled(services, outcome)?;
            print_items(&services.store.get_projects_by_status(*status), json, out)
        }
        Command::DeleteDraft { status, id } => {
            let item = locate(services, *status, id, cancel).await?;
            let outcome = services.delete_draft.execute(&item).await?;
            report(services, "Deleted draft", &item, outcome, out)
        }
        Command::CancelReview { id } => {
            let item = locate(services, UnifiedStatus::Review, id, cancel).await?;
            let outcome = services.cancel_review.execute(&item).await?;
            report(services, "Cancelled review of", &item, outcome, out)
        }
        Command::CancelScheduled { id } => {
            let item = locate(services, UnifiedStatus::Scheduled, id, cancel).await?;
            let outcome = services.cancel_scheduled.execute(&item).await?;
            report(services, "Cancelled scheduled release of", &item, outcome, out)
        }
    }
}

fn ensure_settled(services: &ProjectStatusServices, outcome: FetchOutcome) -> anyhow::Result<()> {
    match outcome {
        FetchOutcome::Failed => bail!(services
            .store
            .error()
            .unwrap_or_else(|| "request failed".to_string())),
        FetchOutcome::Discarded => bail!("request cancelled"),
        FetchOutcome::Cached | FetchOutcome::Fetched { .. } | FetchOutcome::Joined => Ok(()),
    }
}

async fn locate(
    services: &ProjectStatusServices,
    status: UnifiedStatus,
    id: &str,
    cancel: CancellationToken,
) -> anyhow::Result<ProjectStatusItem> {
    let outcome = services
        .store
        .fetch_by_status(status, FetchOptions::default().with_cancel(cancel))
        .await;
    ensure_settled(services, outcome)?;

    services
        .store
        .find_item(status, &ProjectId::from(id))
        .with_context(|| format!("project {id} is not listed under {}", status.route_segment()))
}

fn print_overview(services: &ProjectStatusServices, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let snapshot = services.store.snapshot();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
        return Ok(());
    }
    for tab in &snapshot.tabs {
        writeln!(out, "{:<10} {:>5}", tab.label, tab.count)?;
    }
    Ok(())
}

fn print_items(items: &[ProjectStatusItem], json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(items)?)?;
        return Ok(());
    }
    if items.is_empty() {
        writeln!(out, "(no projects)")?;
    }
    for item in items {
        writeln!(out, "{}\t{}\t{}", item.id, item.origin.as_str(), item.title)?;
    }
    Ok(())
}

fn report(
    services: &ProjectStatusServices,
    action: &str,
    item: &ProjectStatusItem,
    outcome: TransitionOutcome,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(out, "{action} {} ({})", item.id, item.title)?;
    if !outcome.refreshed {
        let reason = services.store.error().unwrap_or_default();
        writeln!(out, "warning: project lists could not be refreshed. {reason}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_accepts_route_and_wire_names() {
        assert_eq!(parse_status("review"), Ok(UnifiedStatus::Review));
        assert_eq!(parse_status("SCHEDULED"), Ok(UnifiedStatus::Scheduled));
        assert!(parse_status("archived").unwrap_err().contains("draft, review"));
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["crowdnest", "list", "live", "--json", "--config", "/tmp/c.toml"])
            .unwrap();

        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(
            cli.command,
            Command::List {
                status: UnifiedStatus::Live,
                force: false
            }
        );
    }

    #[test]
    fn delete_draft_takes_status_and_id() {
        let cli = Cli::try_parse_from(["crowdnest", "delete-draft", "draft", "p-1"]).unwrap();

        assert_eq!(
            cli.command,
            Command::DeleteDraft {
                status: UnifiedStatus::Draft,
                id: "p-1".to_string()
            }
        );
    }

    #[test]
    fn unknown_status_is_a_usage_error() {
        assert!(Cli::try_parse_from(["crowdnest", "list", "paused"]).is_err());
    }
}
