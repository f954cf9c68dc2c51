//! Serve command: MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{info, instrument};

use jurbix_core::config::Config;

use crate::server::JurbixServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Serve the analysis tools over MCP until the client disconnects.
#[instrument(name = "cmd_serve", skip_all, fields(profile = %profile_id))]
pub async fn cmd_serve(
    _args: ServeArgs,
    config: Config,
    profile_id: String,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let lexicon = config.load_lexicon().context("failed to load lexicon")?;
    let server = JurbixServer::new(lexicon, config.profile_store(), profile_id, max_input);

    info!(max_input = ?max_input, "starting MCP server on stdio");
    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await.context("MCP server stopped")?;
    info!("MCP server stopped");
    Ok(())
}
