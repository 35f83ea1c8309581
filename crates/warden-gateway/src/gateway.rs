//! One entry point per administrative intent.

use std::sync::Arc;

use warden_access::SharedRoleStore;
use warden_rcon::ConsoleExecutor;

use crate::args::{
    AdvancementAction, Difficulty, EffectAction, TimeOfDay, WeatherKind, XpAction, XpUnit,
};
use crate::classify::{ResponseClassifier, SuffixClassifier, Verdict};
use crate::outcome::{Actor, CommandOutcome, GatewayError};

/// Dispatches administrative intents to the remote console.
///
/// Stateless per invocation apart from reading the shared allow-list; safe to
/// share across concurrent interaction handlers.
pub struct CommandGateway {
    console: Arc<dyn ConsoleExecutor>,
    roles: SharedRoleStore,
    classifier: Box<dyn ResponseClassifier>,
}

impl CommandGateway {
    pub fn new(console: Arc<dyn ConsoleExecutor>, roles: SharedRoleStore) -> Self {
        Self::with_classifier(console, roles, Box::new(SuffixClassifier))
    }

    pub fn with_classifier(
        console: Arc<dyn ConsoleExecutor>,
        roles: SharedRoleStore,
        classifier: Box<dyn ResponseClassifier>,
    ) -> Self {
        Self {
            console,
            roles,
            classifier,
        }
    }

    fn authorize(&self, actor: &Actor) -> Result<(), GatewayError> {
        let store = match self.roles.lock() {
            Ok(guard) => guard,
            // a poisoned lock still holds a consistent list
            Err(poisoned) => poisoned.into_inner(),
        };
        if store.is_authorized(&actor.role_ids) {
            Ok(())
        } else {
            Err(GatewayError::Unauthorized)
        }
    }

    async fn run(
        &self,
        command: &str,
        strict_entity_check: bool,
        title: &str,
        fields: Vec<(String, String)>,
    ) -> CommandOutcome {
        let raw = self.console.execute(command).await;
        match self.classifier.classify(&raw, strict_entity_check) {
            Verdict::Success => CommandOutcome::succeeded(title, fields, raw),
            Verdict::Failure => CommandOutcome::rejected(raw),
        }
    }

    pub async fn give(
        &self,
        actor: &Actor,
        player: &str,
        item: &str,
        amount: i64,
    ) -> Result<CommandOutcome, GatewayError> {
        self.authorize(actor)?;
        let command = format!("/give {player} {item} {amount}");
        Ok(self
            .run(
                &command,
                true,
                "Item Given",
                vec![
                    field("Player", player),
                    field("Item", item),
                    field("Amount", amount.to_string()),
                ],
            )
            .await)
    }

    pub async fn teleport(
        &self,
        actor: &Actor,
        player: &str,
        destination: &str,
    ) -> Result<CommandOutcome, GatewayError> {
        self.authorize(actor)?;
        let command = format!("/tp {player} {destination}");
        Ok(self
            .run(
                &command,
                true,
                "Player Teleported",
                vec![field("Player", player), field("Destination", destination)],
            )
            .await)
    }

    pub async fn spawn_teleport(
        &self,
        actor: &Actor,
        player: &str,
    ) -> Result<CommandOutcome, GatewayError> {
        self.authorize(actor)?;
        let command = format!("/tp {player} ~ ~ ~");
        Ok(self
            .run(
                &command,
                true,
                "Player Teleported to Spawn",
                vec![field("Player", player)],
            )
            .await)
    }

    pub async fn kick(
        &self,
        actor: &Actor,
        player: &str,
        reason: &str,
    ) -> Result<CommandOutcome, GatewayError> {
        self.authorize(actor)?;
        let command = format!("/kick {player} {reason}");
        Ok(self
            .run(
                &command,
                true,
                "Player Kicked",
                vec![field("Player", player), field("Reason", reason)],
            )
            .await)
    }

    pub async fn ban(
        &self,
        actor: &Actor,
        player: &str,
        reason: &str,
    ) -> Result<CommandOutcome, GatewayError> {
        self.authorize(actor)?;
        let command = format!("/ban {player} {reason}");
        Ok(self
            .run(
                &command,
                true,
                "Player Banned",
                vec![field("Player", player), field("Reason", reason)],
            )
            .await)
    }

    pub async fn unban(&self, actor: &Actor, player: &str) -> Result<CommandOutcome, GatewayError> {
        self.authorize(actor)?;
        let command = format!("/pardon {player}");
        Ok(self
            .run(
                &command,
                true,
                "Player Unbanned",
                vec![field("Player", player)],
            )
            .await)
    }

    pub async fn advancement(
        &self,
        actor: &Actor,
        action: &str,
        player: &str,
        advancement: &str,
    ) -> Result<CommandOutcome, GatewayError> {
        self.authorize(actor)?;
        let action: AdvancementAction = action.parse()?;
        let command = format!("/advancement {} {player} {advancement}", action.as_str());
        Ok(self
            .run(
                &command,
                true,
                "Advancement Updated",
                vec![
                    field("Action", capitalize(action.as_str())),
                    field("Player", player),
                    field("Advancement", advancement),
                ],
            )
            .await)
    }

    pub async fn summon(
        &self,
        actor: &Actor,
        entity: &str,
        x: i64,
        y: i64,
        z: i64,
    ) -> Result<CommandOutcome, GatewayError> {
        self.authorize(actor)?;
        let command = format!("/summon {entity} {x} {y} {z}");
        Ok(self
            .run(
                &command,
                false,
                "Entity Summoned",
                vec![
                    field("Entity", entity),
                    field("Coordinates", format!("X:{x} Y:{y} Z:{z}")),
                ],
            )
            .await)
    }

    pub async fn set_world_spawn(
        &self,
        actor: &Actor,
        x: i64,
        y: i64,
        z: i64,
    ) -> Result<CommandOutcome, GatewayError> {
        self.authorize(actor)?;
        let command = format!("/setworldspawn {x} {y} {z}");
        Ok(self
            .run(
                &command,
                false,
                "World Spawn Set",
                vec![field("Coordinates", format!("X:{x} Y:{y} Z:{z}"))],
            )
            .await)
    }

    pub async fn weather(
        &self,
        actor: &Actor,
        weather_type: &str,
        duration: i64,
    ) -> Result<CommandOutcome, GatewayError> {
        self.authorize(actor)?;
        let weather_type: WeatherKind = weather_type.parse()?;
        let command = format!("/weather {} {duration}", weather_type.as_str());
        Ok(self
            .run(
                &command,
                false,
                "Weather Changed",
                vec![
                    field("Weather Type", capitalize(weather_type.as_str())),
                    field("Duration", format!("{duration} seconds")),
                ],
            )
            .await)
    }

    pub async fn time(
        &self,
        actor: &Actor,
        time_of_day: &str,
    ) -> Result<CommandOutcome, GatewayError> {
        self.authorize(actor)?;
        let time_of_day: TimeOfDay = time_of_day.parse()?;
        let command = format!("/time set {}", time_of_day.as_str());
        Ok(self
            .run(
                &command,
                false,
                "Time Set",
                vec![field("Time of Day", capitalize(time_of_day.as_str()))],
            )
            .await)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn effect(
        &self,
        actor: &Actor,
        action: &str,
        player: &str,
        effect: &str,
        duration: i64,
        amplifier: i64,
    ) -> Result<CommandOutcome, GatewayError> {
        self.authorize(actor)?;
        let action: EffectAction = action.parse()?;
        let command = format!(
            "/effect {} {player} {effect} {duration} {amplifier}",
            action.as_str()
        );
        Ok(self
            .run(
                &command,
                true,
                "Effect Applied",
                vec![
                    field("Action", capitalize(action.as_str())),
                    field("Player", player),
                    field("Effect", effect),
                    field("Duration", format!("{duration} seconds")),
                    field("Amplifier", amplifier.to_string()),
                ],
            )
            .await)
    }

    pub async fn kill(&self, actor: &Actor, target: &str) -> Result<CommandOutcome, GatewayError> {
        self.authorize(actor)?;
        let command = format!("/kill {target}");
        Ok(self
            .run(&command, true, "Target Killed", vec![field("Target", target)])
            .await)
    }

    pub async fn xp(
        &self,
        actor: &Actor,
        action: &str,
        player: &str,
        amount: i64,
        unit: &str,
    ) -> Result<CommandOutcome, GatewayError> {
        self.authorize(actor)?;
        let action: XpAction = action.parse()?;
        let unit: XpUnit = unit.parse()?;
        let command = format!(
            "/xp {} {player} {amount} {}",
            action.as_str(),
            unit.as_str()
        );
        Ok(self
            .run(
                &command,
                true,
                "Success!",
                vec![
                    field("Target", player),
                    field("Action", capitalize(action.as_str())),
                    field("Amount", format!("{amount} {}", unit.as_str())),
                ],
            )
            .await)
    }

    pub async fn locate(
        &self,
        actor: &Actor,
        structure: &str,
    ) -> Result<CommandOutcome, GatewayError> {
        self.authorize(actor)?;
        let command = format!("/locate {structure}");
        Ok(self
            .run(
                &command,
                false,
                "Structure Located",
                vec![field("Structure/Biome", structure)],
            )
            .await)
    }

    pub async fn difficulty(
        &self,
        actor: &Actor,
        level: &str,
    ) -> Result<CommandOutcome, GatewayError> {
        self.authorize(actor)?;
        let level: Difficulty = level.parse()?;
        let command = format!("/difficulty {}", level.as_str());
        Ok(self
            .run(
                &command,
                false,
                "Difficulty Changed",
                vec![field("New Difficulty Level", capitalize(level.as_str()))],
            )
            .await)
    }

    /// Gated like the other admin operations, but its reply is never
    /// classified: the server's reload output has no stable failure shape.
    pub async fn reload(&self, actor: &Actor) -> Result<CommandOutcome, GatewayError> {
        self.authorize(actor)?;
        let raw = self.console.execute("/reload").await;
        Ok(CommandOutcome::succeeded_with_note(
            "Success!",
            "Server reloaded.",
            Vec::new(),
            raw,
        ))
    }

    /// Informational; open to any actor, reply attached verbatim.
    pub async fn list_players(&self) -> CommandOutcome {
        let raw = self.console.execute("/list").await;
        CommandOutcome::succeeded_with_note(
            "Online Players",
            "List of all online players.",
            Vec::new(),
            raw,
        )
    }

    /// Informational; open to any actor.
    pub async fn seed(&self) -> CommandOutcome {
        let raw = self.console.execute("/seed").await;
        CommandOutcome::succeeded("World Seed", vec![field("Seed", raw.clone())], raw)
    }

    /// Informational; open to any actor.
    pub async fn ban_list(&self) -> CommandOutcome {
        let raw = self.console.execute("/banlist").await;
        CommandOutcome::succeeded_with_note("Ban List", "Viewing the ban list.", Vec::new(), raw)
    }
}

fn field(key: &str, value: impl Into<String>) -> (String, String) {
    (key.to_string(), value.into())
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
