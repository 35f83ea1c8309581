//! Discord bridge runtime: receives slash-command interactions, drives the
//! command gateway, and keeps the bot presence in sync with server status.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use serenity::all::{
    ActivityData, Command, CommandInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, EventHandler,
    GatewayIntents, Interaction, Permissions, Ready,
};
use serenity::{async_trait, Client};
use warden_access::{AddOutcome, RemoveOutcome, SharedRoleStore};
use warden_gateway::{Actor, CommandGateway, CommandOutcome};
use warden_status::{StatusProvider, StatusRecord};

mod command_registry;
mod dispatch_helpers;
mod render_helpers;

#[cfg(test)]
mod tests;

use command_registry::{role_command, server_command};
use dispatch_helpers::{subcommand, DispatchError, OptionBag};
use render_helpers::{
    offline_status_embed, online_status_embed, outcome_embed, presence_line, role_list_embed,
};

/// Runtime configuration for the Discord bridge.
#[derive(Debug, Clone)]
pub struct DiscordRuntimeConfig {
    pub discord_token: String,
    pub query_host: String,
    pub query_port: u16,
    pub status_interval: Duration,
}

/// Builds the Discord client and runs it until the gateway connection ends.
pub async fn run_discord_bridge(
    config: DiscordRuntimeConfig,
    gateway: Arc<CommandGateway>,
    status: Arc<dyn StatusProvider>,
    roles: SharedRoleStore,
) -> Result<()> {
    let handler = BridgeHandler {
        gateway,
        status,
        roles,
        query_host: config.query_host.clone(),
        query_port: config.query_port,
        status_interval: config.status_interval,
        poller_started: AtomicBool::new(false),
    };
    let mut client = Client::builder(&config.discord_token, GatewayIntents::empty())
        .event_handler(handler)
        .await
        .context("failed to build discord client")?;
    client
        .start()
        .await
        .context("discord client terminated")?;
    Ok(())
}

struct BridgeHandler {
    gateway: Arc<CommandGateway>,
    status: Arc<dyn StatusProvider>,
    roles: SharedRoleStore,
    query_host: String,
    query_port: u16,
    status_interval: Duration,
    poller_started: AtomicBool,
}

#[async_trait]
impl EventHandler for BridgeHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(user = %ready.user.name, "discord gateway session ready");

        for builder in [server_command(), role_command()] {
            if let Err(error) = Command::create_global_command(&ctx.http, builder).await {
                tracing::error!(%error, "failed to register global command");
            }
        }

        // Reconnects fire ready again; the poller must only be spawned once.
        if !self.poller_started.swap(true, Ordering::SeqCst) {
            let status = self.status.clone();
            let interval = self.status_interval;
            tokio::spawn(async move {
                let mut ticker = tokio::time::interval(interval);
                loop {
                    ticker.tick().await;
                    let record = status.query().await;
                    ctx.set_activity(Some(ActivityData::playing(presence_line(&record))));
                }
            });
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };
        let result = match command.data.name.as_str() {
            "server" => self.handle_server_interaction(&ctx, &command).await,
            "role" => self.handle_role_interaction(&ctx, &command).await,
            other => {
                tracing::warn!(command = other, "unexpected command interaction");
                Ok(())
            }
        };
        if let Err(error) = result {
            tracing::error!(%error, command = %command.data.name, "failed to respond to interaction");
        }
    }
}

impl BridgeHandler {
    async fn handle_server_interaction(
        &self,
        ctx: &Context,
        command: &CommandInteraction,
    ) -> Result<()> {
        let options = command.data.options();
        let Some((sub, sub_options)) = subcommand(&options) else {
            return respond_ephemeral_text(ctx, command, "Unknown server subcommand.").await;
        };
        tracing::info!(subcommand = sub, user = %command.user.name, "server command invoked");

        if sub == "status" {
            command
                .defer(&ctx.http)
                .await
                .context("failed to defer status response")?;
            let record = self.status.query().await;
            let embed = match record {
                StatusRecord::Online(status) => {
                    online_status_embed(&self.query_host, self.query_port, &status)
                }
                StatusRecord::Offline => offline_status_embed(&self.query_host, self.query_port),
            };
            command
                .create_followup(
                    &ctx.http,
                    CreateInteractionResponseFollowup::new().embed(embed),
                )
                .await
                .context("failed to send status followup")?;
            return Ok(());
        }

        let actor = actor_for(command);
        let bag = OptionBag::new(sub_options);
        match self.run_server_subcommand(sub, &bag, &actor).await {
            Ok(outcome) => respond_embed(ctx, command, outcome_embed(&outcome)).await,
            Err(error) => respond_ephemeral_text(ctx, command, &error.message()).await,
        }
    }

    async fn run_server_subcommand(
        &self,
        sub: &str,
        bag: &OptionBag<'_>,
        actor: &Actor,
    ) -> Result<CommandOutcome, DispatchError> {
        let gateway = &self.gateway;
        let outcome = match sub {
            "give" => {
                gateway
                    .give(actor, bag.str("player")?, bag.str("item")?, bag.int_or("amount", 1))
                    .await?
            }
            "teleport" => {
                gateway
                    .teleport(actor, bag.str("player1")?, bag.str("player2")?)
                    .await?
            }
            "spawn" => gateway.spawn_teleport(actor, bag.str("player")?).await?,
            "kick" => {
                gateway
                    .kick(actor, bag.str("player")?, bag.str("reason")?)
                    .await?
            }
            "ban" => {
                gateway
                    .ban(actor, bag.str("player")?, bag.str("reason")?)
                    .await?
            }
            "unban" => gateway.unban(actor, bag.str("player")?).await?,
            "advancement" => {
                gateway
                    .advancement(
                        actor,
                        bag.str("action")?,
                        bag.str("player")?,
                        bag.str("advancement")?,
                    )
                    .await?
            }
            "summon" => {
                gateway
                    .summon(
                        actor,
                        bag.str("entity")?,
                        bag.int("x")?,
                        bag.int("y")?,
                        bag.int("z")?,
                    )
                    .await?
            }
            "setworldspawn" => {
                gateway
                    .set_world_spawn(actor, bag.int("x")?, bag.int("y")?, bag.int("z")?)
                    .await?
            }
            "weather" => {
                gateway
                    .weather(actor, bag.str("type")?, bag.int("duration")?)
                    .await?
            }
            "time" => gateway.time(actor, bag.str("time_of_day")?).await?,
            "effect" => {
                gateway
                    .effect(
                        actor,
                        bag.str("action")?,
                        bag.str("player")?,
                        bag.str("effect")?,
                        bag.int("duration")?,
                        bag.int_or("amplifier", 0),
                    )
                    .await?
            }
            "kill" => gateway.kill(actor, bag.str("target")?).await?,
            "xp" => {
                gateway
                    .xp(
                        actor,
                        bag.str("action")?,
                        bag.str("player")?,
                        bag.int("amount")?,
                        bag.str("unit")?,
                    )
                    .await?
            }
            "locate" => gateway.locate(actor, bag.str("structure")?).await?,
            "difficulty" => gateway.difficulty(actor, bag.str("level")?).await?,
            "reload" => gateway.reload(actor).await?,
            "list" => gateway.list_players().await,
            "seed" => gateway.seed().await,
            "banlist" => gateway.ban_list().await,
            other => return Err(DispatchError::UnknownSubcommand(other.to_string())),
        };
        Ok(outcome)
    }

    async fn handle_role_interaction(
        &self,
        ctx: &Context,
        command: &CommandInteraction,
    ) -> Result<()> {
        let options = command.data.options();
        let Some((sub, sub_options)) = subcommand(&options) else {
            return respond_ephemeral_text(ctx, command, "Unknown role subcommand.").await;
        };
        tracing::info!(subcommand = sub, user = %command.user.name, "role command invoked");

        if sub == "view" {
            let role_ids = {
                let store = match self.roles.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                store.role_ids().to_vec()
            };
            return respond_ephemeral_embed(ctx, command, role_list_embed(&role_ids)).await;
        }

        if !invoker_is_moderator(command) {
            return respond_ephemeral_text(
                ctx,
                command,
                "You need the Moderate Members permission to manage admin roles.",
            )
            .await;
        }

        let bag = OptionBag::new(sub_options);
        let role = match bag.role("role") {
            Ok(role) => role,
            Err(missing) => {
                return respond_ephemeral_text(ctx, command, &missing.message()).await;
            }
        };

        let reply = {
            let mut store = match self.roles.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            match sub {
                "add" => match store.add(role.id.get()) {
                    Ok(AddOutcome::Added) => {
                        format!("Role {} has been added to the admin list.", role.name)
                    }
                    Ok(AddOutcome::AlreadyPresent) => {
                        format!("Role {} is already an admin role.", role.name)
                    }
                    Err(error) => {
                        tracing::error!(%error, "failed to persist admin role addition");
                        "Failed to update the admin role list.".to_string()
                    }
                },
                "remove" => match store.remove(role.id.get()) {
                    Ok(RemoveOutcome::Removed) => {
                        format!("Role {} has been removed from the admin list.", role.name)
                    }
                    Ok(RemoveOutcome::NotPresent) => {
                        format!("Role {} is not an admin role.", role.name)
                    }
                    Err(error) => {
                        tracing::error!(%error, "failed to persist admin role removal");
                        "Failed to update the admin role list.".to_string()
                    }
                },
                other => format!("Unknown role subcommand `{other}`."),
            }
        };
        respond_ephemeral_text(ctx, command, &reply).await
    }
}

fn actor_for(command: &CommandInteraction) -> Actor {
    let role_ids = command
        .member
        .as_ref()
        .map(|member| member.roles.iter().map(|role| role.get()).collect())
        .unwrap_or_default();
    Actor::with_roles(role_ids)
}

fn invoker_is_moderator(command: &CommandInteraction) -> bool {
    command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .map(|permissions| permissions.contains(Permissions::MODERATE_MEMBERS))
        .unwrap_or(false)
}

async fn respond_embed(
    ctx: &Context,
    command: &CommandInteraction,
    embed: CreateEmbed,
) -> Result<()> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().embed(embed),
            ),
        )
        .await
        .context("failed to send embed response")
}

async fn respond_ephemeral_embed(
    ctx: &Context,
    command: &CommandInteraction,
    embed: CreateEmbed,
) -> Result<()> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .embed(embed)
                    .ephemeral(true),
            ),
        )
        .await
        .context("failed to send ephemeral embed response")
}

async fn respond_ephemeral_text(
    ctx: &Context,
    command: &CommandInteraction,
    text: &str,
) -> Result<()> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(text)
                    .ephemeral(true),
            ),
        )
        .await
        .context("failed to send ephemeral response")
}
