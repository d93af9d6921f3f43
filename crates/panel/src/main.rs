//! Customer intelligence panel.
//!
//! Loads the current ticket, the requester's customer profile and recent
//! posts, then prints the panel with a suggested reply.

mod config;
mod render;

use std::sync::Arc;

use clipboard_bridge::ClipboardBridge;
use directory_client::HttpDirectoryClient;
use host_bridge::{HostConfig, HttpHostBridge, SimulatedHost};
use panel_core::{Clipboard, CustomerDirectory, HostBridge, HostContext};
use panel_orchestrator::{DataOrchestrator, DraftDriver, OrchestratorConfig};
use reply_composer::DraftScheduler;
use tracing::{info, warn};

use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!(url = %config.panel_url, context = ?config.context, "Starting panel");

    let directory = HttpDirectoryClient::from_env()?;
    let orchestrator_config = OrchestratorConfig::default()
        .with_context(config.context)
        .with_posts_limit(config.posts_limit);

    match config.context {
        HostContext::Development => {
            let orchestrator =
                DataOrchestrator::new(SimulatedHost::new(), directory, orchestrator_config);
            run(&orchestrator, &config).await;
        }
        HostContext::Hosted => {
            let host_config = HostConfig::from_env()?;
            let orchestrator_config =
                orchestrator_config.with_handshake_timeout(host_config.handshake_timeout);
            let host = HttpHostBridge::new(host_config)?;
            let orchestrator = DataOrchestrator::new(host, directory, orchestrator_config);
            run(&orchestrator, &config).await;
        }
    }

    Ok(())
}

async fn run<H: HostBridge, D: CustomerDirectory>(
    orchestrator: &DataOrchestrator<H, D>,
    config: &Config,
) {
    let scheduler = Arc::new(DraftScheduler::new(config.draft_delay));
    let _driver = DraftDriver::spawn(orchestrator.subscribe(), scheduler.clone(), config.tone);
    let mut drafts = scheduler.subscribe();

    orchestrator.initialize().await;
    let snapshot = orchestrator.snapshot();

    // Drafts for partial chain states may land first; wait for the settled one.
    if let Some(expected) = snapshot.draft_inputs(config.tone).map(|i| i.compose()) {
        if drafts
            .wait_for(|draft| draft.as_ref() == Some(&expected))
            .await
            .is_err()
        {
            warn!("Draft channel closed before a draft was produced");
        }
    }

    let draft = scheduler.latest();
    println!("{}", render::render(&snapshot, draft.as_ref()));

    if let (true, Some(draft)) = (config.copy_draft, draft) {
        let clipboard = ClipboardBridge::system();
        if clipboard.copy(&draft.text).await {
            info!("Draft copied to clipboard");
        } else {
            warn!("Could not copy draft to clipboard");
        }
    }
}
