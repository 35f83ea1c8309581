//! Embed and presence-text rendering for gateway outcomes and status records.

use serenity::all::{Colour, CreateEmbed, CreateEmbedFooter};
use warden_gateway::CommandOutcome;
use warden_status::{OnlineStatus, StatusRecord};

/// Discord caps embed footers at 2048 characters; leave room for the prefix.
const MAX_FOOTER_RESPONSE_CHARS: usize = 1024;
/// The server samples online players; cap what we render on top of that.
const MAX_LISTED_PLAYERS: usize = 50;

pub(super) fn presence_line(record: &StatusRecord) -> String {
    match record {
        StatusRecord::Online(status) => format!(
            "{}/{} players online",
            status.players_online, status.max_players
        ),
        StatusRecord::Offline => "Minecraft server offline".to_string(),
    }
}

pub(super) fn outcome_embed(outcome: &CommandOutcome) -> CreateEmbed {
    let colour = if outcome.success {
        Colour::DARK_GREEN
    } else {
        Colour::RED
    };
    CreateEmbed::new()
        .title(outcome.title.clone())
        .description(outcome_description(outcome))
        .colour(colour)
        .footer(CreateEmbedFooter::new(response_footer(
            &outcome.raw_response,
        )))
}

pub(super) fn outcome_description(outcome: &CommandOutcome) -> String {
    let mut lines = Vec::new();
    if let Some(note) = &outcome.note {
        lines.push(note.clone());
    }
    for (key, value) in &outcome.fields {
        lines.push(format!("**{key}:** {value}"));
    }
    lines.join("\n")
}

pub(super) fn response_footer(raw_response: &str) -> String {
    format!(
        "Response: {}",
        truncate_with_ellipsis(raw_response, MAX_FOOTER_RESPONSE_CHARS)
    )
}

pub(super) fn online_status_embed(host: &str, port: u16, status: &OnlineStatus) -> CreateEmbed {
    let latency_ms = status.latency.as_secs_f64() * 1_000.0;
    CreateEmbed::new()
        .title("🟢 Server Status")
        .description(format!("{host}:{port} is **online**!"))
        .colour(Colour::DARK_GREEN)
        .field("🌍 Version", status.version.clone(), true)
        .field("📡 Ping", format!("{latency_ms:.2} ms"), true)
        .field("📝 Description", status.description.clone(), false)
        .field(
            format!(
                "👥 Players Online {}/{}",
                status.players_online, status.max_players
            ),
            player_list_value(&status.player_names),
            false,
        )
}

pub(super) fn offline_status_embed(host: &str, port: u16) -> CreateEmbed {
    CreateEmbed::new()
        .title("🔴 Server Status")
        .description(format!("{host}:{port} is **offline**."))
        .colour(Colour::RED)
        .footer(CreateEmbedFooter::new(
            "Server might be down or unreachable",
        ))
}

pub(super) fn player_list_value(player_names: &[String]) -> String {
    if player_names.is_empty() {
        return "No players online.".to_string();
    }
    let mut listed: Vec<&str> = player_names
        .iter()
        .take(MAX_LISTED_PLAYERS)
        .map(String::as_str)
        .collect();
    if player_names.len() > MAX_LISTED_PLAYERS {
        listed.push("...and more");
    }
    listed.join("\n")
}

pub(super) fn role_list_embed(role_ids: &[u64]) -> CreateEmbed {
    CreateEmbed::new()
        .title("Admin Roles")
        .description("Roles permitted to manage the Minecraft server")
        .colour(Colour::BLUE)
        .field("Admin Roles", role_mentions(role_ids), false)
}

pub(super) fn role_mentions(role_ids: &[u64]) -> String {
    if role_ids.is_empty() {
        return "No admin roles found.".to_string();
    }
    role_ids
        .iter()
        .map(|id| format!("<@&{id}>"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}
