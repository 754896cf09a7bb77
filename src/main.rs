use anyhow::Context;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{error, warn};

use crowdnest_lib::bootstrap::tracing::init_tracing_subscriber;
use crowdnest_lib::bootstrap::{build_services, load_app_config, resolve_app_paths};
use crowdnest_lib::cli::{execute, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let paths = resolve_app_paths()?;
    if let Err(err) = init_tracing_subscriber(Some(&paths.logs_dir)) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let config = load_app_config(cli.config.clone(), &paths)?;

    // All fetches and commands interleave on one thread.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    runtime.block_on(async {
        let services = build_services(&config)?;

        let cancel = CancellationToken::new();
        let on_interrupt = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, discarding pending responses");
                on_interrupt.cancel();
            }
        });

        let mut out = std::io::stdout();
        let result = execute(&cli.command, &services, cli.json, cancel, &mut out).await;
        if let Err(err) = &result {
            error!(error = %format!("{err:#}"), "Command failed");
        }
        result
    })
}
