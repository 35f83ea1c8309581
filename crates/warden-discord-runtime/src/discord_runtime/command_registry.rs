//! Global slash-command trees registered on every gateway ready.
//!
//! Enum-constrained values stay plain strings here; the gateway owns that
//! validation so the command surface and the permission checks cannot drift
//! apart.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};

fn required_str(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, name, description).required(true)
}

fn required_int(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, name, description).required(true)
}

fn optional_int(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, name, description)
}

fn sub(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description)
}

pub(super) fn server_command() -> CreateCommand {
    CreateCommand::new("server")
        .description("Minecraft server commands")
        .add_option(sub("status", "Get the status of the Minecraft server"))
        .add_option(
            sub("give", "Give an item to a player")
                .add_sub_option(required_str("player", "Target player"))
                .add_sub_option(required_str("item", "Item to give"))
                .add_sub_option(optional_int("amount", "Amount to give (default 1)")),
        )
        .add_option(
            sub("teleport", "Teleport a player to another player")
                .add_sub_option(required_str("player1", "Player to teleport"))
                .add_sub_option(required_str("player2", "Destination player")),
        )
        .add_option(
            sub("spawn", "Teleport a player to the spawn")
                .add_sub_option(required_str("player", "Player to teleport")),
        )
        .add_option(
            sub("kick", "Kick a player from the server")
                .add_sub_option(required_str("player", "Player to kick"))
                .add_sub_option(required_str("reason", "Kick reason")),
        )
        .add_option(
            sub("ban", "Ban a player from the server")
                .add_sub_option(required_str("player", "Player to ban"))
                .add_sub_option(required_str("reason", "Ban reason")),
        )
        .add_option(
            sub("unban", "Unban a player from the server")
                .add_sub_option(required_str("player", "Player to unban")),
        )
        .add_option(
            sub("advancement", "Grant or revoke an advancement")
                .add_sub_option(required_str("action", "grant or revoke"))
                .add_sub_option(required_str("player", "Target player"))
                .add_sub_option(required_str("advancement", "Advancement id")),
        )
        .add_option(
            sub("summon", "Summon an entity at specified coordinates")
                .add_sub_option(required_str("entity", "Entity id"))
                .add_sub_option(required_int("x", "X coordinate"))
                .add_sub_option(required_int("y", "Y coordinate"))
                .add_sub_option(required_int("z", "Z coordinate")),
        )
        .add_option(
            sub("setworldspawn", "Set the world spawn point")
                .add_sub_option(required_int("x", "X coordinate"))
                .add_sub_option(required_int("y", "Y coordinate"))
                .add_sub_option(required_int("z", "Z coordinate")),
        )
        .add_option(
            sub("weather", "Change the weather in the game")
                .add_sub_option(required_str("type", "clear, rain or thunder"))
                .add_sub_option(required_int("duration", "Duration in seconds")),
        )
        .add_option(
            sub("time", "Set the time of day")
                .add_sub_option(required_str("time_of_day", "day, night, midnight or noon")),
        )
        .add_option(
            sub("effect", "Apply or remove a status effect from a player")
                .add_sub_option(required_str("action", "give or clear"))
                .add_sub_option(required_str("player", "Target player"))
                .add_sub_option(required_str("effect", "Effect id"))
                .add_sub_option(required_int("duration", "Duration in seconds"))
                .add_sub_option(optional_int("amplifier", "Effect amplifier (default 0)")),
        )
        .add_option(
            sub("kill", "Kill a player or entity")
                .add_sub_option(required_str("target", "Target selector or player")),
        )
        .add_option(
            sub("xp", "Add, set or query player experience")
                .add_sub_option(required_str("action", "set, add or query"))
                .add_sub_option(required_str("player", "Target player"))
                .add_sub_option(required_int("amount", "Amount of XP or levels"))
                .add_sub_option(required_str("unit", "points or levels")),
        )
        .add_option(
            sub("locate", "Locate a specific structure or biome")
                .add_sub_option(required_str("structure", "Structure or biome id")),
        )
        .add_option(
            sub("difficulty", "Change the game difficulty")
                .add_sub_option(required_str("level", "peaceful, easy, normal or hard")),
        )
        .add_option(sub("reload", "Reload the server"))
        .add_option(sub("list", "List all online players"))
        .add_option(sub("seed", "Get the world seed"))
        .add_option(sub("banlist", "View the ban list"))
}

pub(super) fn role_command() -> CreateCommand {
    CreateCommand::new("role")
        .description("Manage the admin role allow-list")
        .add_option(
            sub("add", "Add a role to the admin list").add_sub_option(
                CreateCommandOption::new(CommandOptionType::Role, "role", "Role to add")
                    .required(true),
            ),
        )
        .add_option(
            sub("remove", "Remove a role from the admin list").add_sub_option(
                CreateCommandOption::new(CommandOptionType::Role, "role", "Role to remove")
                    .required(true),
            ),
        )
        .add_option(sub("view", "View the admin role list"))
}
