//! Tests for the pure rendering helpers.

use std::time::Duration;

use warden_gateway::CommandOutcome;
use warden_status::{OnlineStatus, StatusRecord};

use super::render_helpers::{
    outcome_description, player_list_value, presence_line, response_footer, role_mentions,
};

fn online_record(players_online: usize, max_players: usize) -> StatusRecord {
    StatusRecord::Online(OnlineStatus {
        version: "1.21.4".to_string(),
        players_online,
        max_players,
        description: "A Minecraft Server".to_string(),
        player_names: Vec::new(),
        latency: Duration::from_millis(42),
    })
}

#[test]
fn presence_line_reports_player_counts_when_online() {
    assert_eq!(presence_line(&online_record(3, 20)), "3/20 players online");
}

#[test]
fn presence_line_reports_offline() {
    assert_eq!(
        presence_line(&StatusRecord::Offline),
        "Minecraft server offline"
    );
}

#[test]
fn outcome_description_renders_note_then_bold_fields() {
    let outcome = CommandOutcome {
        success: true,
        title: "Item Given".to_string(),
        note: Some("Delivered.".to_string()),
        fields: vec![
            ("Player".to_string(), "Steve".to_string()),
            ("Amount".to_string(), "64".to_string()),
        ],
        raw_response: "ok".to_string(),
    };
    assert_eq!(
        outcome_description(&outcome),
        "Delivered.\n**Player:** Steve\n**Amount:** 64"
    );
}

#[test]
fn player_list_value_caps_names_and_marks_overflow() {
    let names: Vec<String> = (0..60).map(|index| format!("player{index}")).collect();
    let value = player_list_value(&names);
    let lines: Vec<&str> = value.lines().collect();
    assert_eq!(lines.len(), 51);
    assert_eq!(lines[0], "player0");
    assert_eq!(lines[49], "player49");
    assert_eq!(lines[50], "...and more");
}

#[test]
fn player_list_value_handles_empty_sample() {
    assert_eq!(player_list_value(&[]), "No players online.");
}

#[test]
fn response_footer_truncates_very_long_replies() {
    let raw = "x".repeat(5_000);
    let footer = response_footer(&raw);
    assert!(footer.starts_with("Response: "));
    assert!(footer.chars().count() <= "Response: ".len() + 1_024);
    assert!(footer.ends_with('…'));
}

#[test]
fn role_mentions_formats_ids_or_placeholder() {
    assert_eq!(role_mentions(&[]), "No admin roles found.");
    assert_eq!(role_mentions(&[1, 2]), "<@&1>, <@&2>");
}
