//! Discord glue for the Warden bridge: slash-command registration,
//! interaction dispatch into the command gateway, embed rendering, and the
//! periodic presence poller.

pub mod discord_runtime;

pub use discord_runtime::{run_discord_bridge, DiscordRuntimeConfig};
