//! End-to-end gateway scenarios over a real on-disk role store and a
//! recording console fake: authorization follows store mutations across the
//! full wiring, and persisted state survives a reload.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use warden_access::{shared, AddOutcome, RoleStore};
use warden_gateway::{Actor, CommandGateway, GatewayError};
use warden_rcon::ConsoleExecutor;

struct RecordingConsole {
    reply: String,
    commands: Mutex<Vec<String>>,
}

impl RecordingConsole {
    fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            commands: Mutex::new(Vec::new()),
        })
    }

    fn recorded(&self) -> Vec<String> {
        self.commands.lock().expect("commands lock").clone()
    }
}

#[async_trait]
impl ConsoleExecutor for RecordingConsole {
    async fn execute(&self, command: &str) -> String {
        self.commands
            .lock()
            .expect("commands lock")
            .push(command.to_string());
        self.reply.clone()
    }
}

#[tokio::test]
async fn authorization_follows_store_mutations() {
    let state_dir = tempfile::tempdir().expect("tempdir");
    let store_path = state_dir.path().join("admin_roles.json");
    let roles = shared(RoleStore::load(store_path).expect("load store"));
    let console = RecordingConsole::replying("Kicked Steve: afk");
    let gateway = CommandGateway::new(console.clone(), roles.clone());

    let actor = Actor::with_roles(vec![77]);

    // Not on the allow-list yet: denied without a console call.
    let denied = gateway.kick(&actor, "Steve", "afk").await;
    assert_eq!(denied.unwrap_err(), GatewayError::Unauthorized);
    assert!(console.recorded().is_empty());

    {
        let mut store = roles.lock().expect("store lock");
        assert_eq!(store.add(77).expect("add role"), AddOutcome::Added);
    }

    let outcome = gateway
        .kick(&actor, "Steve", "afk")
        .await
        .expect("authorized kick");
    assert!(outcome.success);
    assert_eq!(console.recorded(), vec!["/kick Steve afk"]);

    {
        let mut store = roles.lock().expect("store lock");
        store.remove(77).expect("remove role");
    }

    let denied_again = gateway.kick(&actor, "Steve", "afk").await;
    assert_eq!(denied_again.unwrap_err(), GatewayError::Unauthorized);
    assert_eq!(console.recorded().len(), 1);
}

#[tokio::test]
async fn allow_list_survives_process_restart() {
    let state_dir = tempfile::tempdir().expect("tempdir");
    let store_path = state_dir.path().join("admin_roles.json");

    {
        let mut store = RoleStore::load(store_path.clone()).expect("load store");
        store.add(11).expect("add");
        store.add(22).expect("add");
    }

    // Fresh load simulates a restart; the gateway built over it must honor
    // the persisted list immediately.
    let roles = shared(RoleStore::load(store_path).expect("reload store"));
    let console = RecordingConsole::replying("Seed: [42]");
    let gateway = CommandGateway::new(console.clone(), roles);

    let outcome = gateway
        .difficulty(&Actor::with_roles(vec![22]), "normal")
        .await
        .expect("authorized difficulty change");
    assert!(outcome.success);
    assert_eq!(console.recorded(), vec!["/difficulty normal"]);
}

#[tokio::test]
async fn informational_commands_skip_the_allow_list_entirely() {
    let state_dir = tempfile::tempdir().expect("tempdir");
    let roles = shared(
        RoleStore::load(state_dir.path().join("admin_roles.json")).expect("load store"),
    );
    let console = RecordingConsole::replying("There are 0 of a max of 20 players online");
    let gateway = CommandGateway::new(console.clone(), roles);

    // Empty allow-list, actor-less calls: all three must still dispatch.
    gateway.list_players().await;
    gateway.seed().await;
    gateway.ban_list().await;
    assert_eq!(console.recorded(), vec!["/list", "/seed", "/banlist"]);
}
