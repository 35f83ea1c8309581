//! Game-server status queries for the presence poller and `/server status`.
//!
//! Wraps the server-list-ping protocol behind an infallible provider trait:
//! any failure to reach or understand the server maps to
//! [`StatusRecord::Offline`], never to an error the caller must handle.

use std::time::{Duration, Instant};

use anyhow::Result;
use async_trait::async_trait;
use craftping::Chat;
use tokio::net::TcpStream;

/// Snapshot of a reachable server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnlineStatus {
    pub version: String,
    pub players_online: usize,
    pub max_players: usize,
    pub description: String,
    /// Sampled list of online player names; the server may send none.
    pub player_names: Vec<String>,
    pub latency: Duration,
}

/// Result of one status query. Recreated on every poll, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusRecord {
    Online(OnlineStatus),
    Offline,
}

impl StatusRecord {
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online(_))
    }
}

#[async_trait]
pub trait StatusProvider: Send + Sync {
    async fn query(&self) -> StatusRecord;
}

/// Server-list-ping provider for a fixed query endpoint.
#[derive(Debug, Clone)]
pub struct PingStatusProvider {
    host: String,
    port: u16,
}

impl PingStatusProvider {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    async fn ping_server(&self) -> Result<OnlineStatus> {
        let started = Instant::now();
        let mut stream = TcpStream::connect((self.host.as_str(), self.port)).await?;
        let pong = craftping::tokio::ping(&mut stream, &self.host, self.port).await?;
        let latency = started.elapsed();
        Ok(OnlineStatus {
            version: pong.version,
            players_online: pong.online_players,
            max_players: pong.max_players,
            description: pong
                .description
                .as_ref()
                .map(flatten_chat)
                .unwrap_or_default(),
            player_names: pong
                .sample
                .unwrap_or_default()
                .into_iter()
                .map(|player| player.name)
                .collect(),
            latency,
        })
    }
}

#[async_trait]
impl StatusProvider for PingStatusProvider {
    async fn query(&self) -> StatusRecord {
        match self.ping_server().await {
            Ok(status) => StatusRecord::Online(status),
            Err(error) => {
                tracing::warn!(
                    host = %self.host,
                    port = self.port,
                    %error,
                    "status query failed"
                );
                StatusRecord::Offline
            }
        }
    }
}

/// Flattens a chat component tree into plain text, depth-first, formatting
/// codes dropped.
fn flatten_chat(chat: &Chat) -> String {
    let mut text = chat.text.clone();
    for extra in &chat.extra {
        text.push_str(&flatten_chat(extra));
    }
    text
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn flatten_chat_concatenates_nested_extras_in_order() {
        let chat: Chat = serde_json::from_value(json!({
            "text": "A ",
            "extra": [
                { "text": "Minecraft", "extra": [{ "text": " Server" }] },
                { "text": "!" },
            ],
        }))
        .expect("chat component");
        assert_eq!(flatten_chat(&chat), "A Minecraft Server!");
    }

    #[tokio::test]
    async fn unreachable_server_maps_to_offline() {
        let provider = PingStatusProvider::new("127.0.0.1", 1);
        assert_eq!(provider.query().await, StatusRecord::Offline);
    }
}
