//! Remote console access to the Minecraft server.
//!
//! One short-lived authenticated RCON session per command: connect, send,
//! await the single reply, drop the connection. No pooling, no retry, no
//! pipelining — concurrent callers each open their own session.

use async_trait::async_trait;
use rcon::Connection;
use tokio::net::TcpStream;

/// Executes one console command and returns the server's free-text reply.
///
/// Implementations never fail: transport and authentication errors are folded
/// into a synthesized diagnostic string, so the returned text is not
/// necessarily the server's own reply.
#[async_trait]
pub trait ConsoleExecutor: Send + Sync {
    async fn execute(&self, command: &str) -> String;
}

/// Production executor over the Minecraft RCON protocol.
#[derive(Debug, Clone)]
pub struct RconConsole {
    host: String,
    port: u16,
    password: String,
}

impl RconConsole {
    pub fn new(host: impl Into<String>, port: u16, password: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            password: password.into(),
        }
    }

    fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    async fn run_command(&self, command: &str) -> Result<String, rcon::Error> {
        let mut connection = <Connection<TcpStream>>::builder()
            .enable_minecraft_quirks(true)
            .connect(self.address(), &self.password)
            .await?;
        connection.cmd(command).await
    }
}

#[async_trait]
impl ConsoleExecutor for RconConsole {
    async fn execute(&self, command: &str) -> String {
        match self.run_command(command).await {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(
                    endpoint = %self.address(),
                    %error,
                    "rcon command failed"
                );
                format!("Command error: {error}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_endpoint_yields_synthesized_error_string() {
        // Port 1 on localhost refuses connections; the executor must fold the
        // failure into its reply rather than panic or propagate.
        let console = RconConsole::new("127.0.0.1", 1, "hunter2");
        let response = console.execute("/list").await;
        assert!(response.starts_with("Command error: "), "got: {response}");
    }

    #[test]
    fn address_joins_host_and_port() {
        let console = RconConsole::new("mc.example.net", 25575, "secret");
        assert_eq!(console.address(), "mc.example.net:25575");
    }
}
