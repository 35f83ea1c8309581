//! Warden binary: wires the role store, RCON console, status provider, and
//! command gateway together and runs the Discord bridge.

mod cli_args;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use warden_access::{shared, RoleStore};
use warden_discord_runtime::{run_discord_bridge, DiscordRuntimeConfig};
use warden_gateway::CommandGateway;
use warden_rcon::RconConsole;
use warden_status::PingStatusProvider;

use cli_args::Cli;

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let roles_path = cli.state_dir.join("admin_roles.json");
    let store = RoleStore::load(roles_path).context("failed to load admin role store")?;
    let roles = shared(store);

    let console = Arc::new(RconConsole::new(
        cli.rcon_host.clone(),
        cli.rcon_port,
        cli.rcon_password.clone(),
    ));
    let gateway = Arc::new(CommandGateway::new(console, roles.clone()));
    let status = Arc::new(PingStatusProvider::new(
        cli.query_host.clone(),
        cli.query_port,
    ));

    let config = DiscordRuntimeConfig {
        discord_token: cli.discord_token.clone(),
        query_host: cli.query_host.clone(),
        query_port: cli.query_port,
        status_interval: Duration::from_secs(cli.status_interval_seconds),
    };

    tracing::info!(
        rcon_host = %cli.rcon_host,
        rcon_port = cli.rcon_port,
        query_host = %cli.query_host,
        query_port = cli.query_port,
        "starting warden bridge"
    );
    run_discord_bridge(config, gateway, status, roles).await
}
