//! Flag and environment configuration for the `warden` binary.

use std::path::PathBuf;

use clap::Parser;

fn parse_positive_u64(value: &str) -> Result<u64, String> {
    let parsed = value
        .parse::<u64>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

#[derive(Debug, Parser)]
#[command(
    name = "warden",
    about = "Discord bridge for a Minecraft server: presence updates, live status embeds, and RCON admin commands",
    version
)]
pub struct Cli {
    #[arg(
        long,
        env = "WARDEN_DISCORD_TOKEN",
        hide_env_values = true,
        help = "Discord bot token"
    )]
    pub discord_token: String,

    #[arg(
        long,
        env = "WARDEN_RCON_HOST",
        help = "Host of the Minecraft server's RCON endpoint"
    )]
    pub rcon_host: String,

    #[arg(
        long,
        env = "WARDEN_RCON_PORT",
        default_value_t = 25575,
        help = "RCON port"
    )]
    pub rcon_port: u16,

    #[arg(
        long,
        env = "WARDEN_RCON_PASSWORD",
        hide_env_values = true,
        help = "RCON password"
    )]
    pub rcon_password: String,

    #[arg(
        long,
        env = "WARDEN_QUERY_HOST",
        help = "Host queried for server status"
    )]
    pub query_host: String,

    #[arg(
        long,
        env = "WARDEN_QUERY_PORT",
        default_value_t = 25565,
        help = "Server status query port"
    )]
    pub query_port: u16,

    #[arg(
        long,
        env = "WARDEN_STATE_DIR",
        default_value = ".",
        help = "Directory holding the admin role allow-list record"
    )]
    pub state_dir: PathBuf,

    #[arg(
        long,
        env = "WARDEN_STATUS_INTERVAL_SECONDS",
        default_value_t = 60,
        value_parser = parse_positive_u64,
        help = "Seconds between presence status refreshes"
    )]
    pub status_interval_seconds: u64,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    fn required_args() -> Vec<&'static str> {
        vec![
            "warden",
            "--discord-token=token",
            "--rcon-host=localhost",
            "--rcon-password=secret",
            "--query-host=localhost",
        ]
    }

    #[test]
    fn defaults_apply_when_only_required_flags_are_given() {
        let cli = Cli::try_parse_from(required_args()).expect("parse");
        assert_eq!(cli.rcon_port, 25575);
        assert_eq!(cli.query_port, 25565);
        assert_eq!(cli.status_interval_seconds, 60);
        assert_eq!(cli.state_dir, std::path::PathBuf::from("."));
    }

    #[test]
    fn zero_status_interval_is_rejected() {
        let mut args = required_args();
        args.push("--status-interval-seconds=0");
        assert!(Cli::try_parse_from(args).is_err());
    }
}
