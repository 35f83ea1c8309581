//! Structured results of gateway invocations.

use thiserror::Error;

/// Identity of the user driving an administrative command: the Discord role
/// ids it carries.
#[derive(Debug, Clone, Default)]
pub struct Actor {
    pub role_ids: Vec<u64>,
}

impl Actor {
    pub fn with_roles(role_ids: Vec<u64>) -> Self {
        Self { role_ids }
    }
}

/// Validation failures surfaced to the actor as ephemeral messages. Neither
/// variant makes a remote call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("You do not have the required role to use this command.")]
    Unauthorized,
    #[error("{0}")]
    InvalidArgument(String),
}

impl From<crate::args::InvalidChoice> for GatewayError {
    fn from(error: crate::args::InvalidChoice) -> Self {
        Self::InvalidArgument(error.to_string())
    }
}

const REJECTED_NOTE: &str =
    "The command was unsuccessful. Please check the server logs for more details.";

/// Result of one executed console command, ready for rendering.
///
/// The raw console reply is always attached, also on failure, so the operator
/// can diagnose what the server actually said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    pub title: String,
    /// Free-text body line, when the operation has one.
    pub note: Option<String>,
    /// Ordered key/value description fields specific to the operation.
    pub fields: Vec<(String, String)>,
    pub raw_response: String,
}

impl CommandOutcome {
    pub(crate) fn succeeded(
        title: impl Into<String>,
        fields: Vec<(String, String)>,
        raw_response: String,
    ) -> Self {
        Self {
            success: true,
            title: title.into(),
            note: None,
            fields,
            raw_response,
        }
    }

    pub(crate) fn succeeded_with_note(
        title: impl Into<String>,
        note: impl Into<String>,
        fields: Vec<(String, String)>,
        raw_response: String,
    ) -> Self {
        Self {
            note: Some(note.into()),
            ..Self::succeeded(title, fields, raw_response)
        }
    }

    pub(crate) fn rejected(raw_response: String) -> Self {
        Self {
            success: false,
            title: "Error!".to_string(),
            note: Some(REJECTED_NOTE.to_string()),
            fields: Vec::new(),
            raw_response,
        }
    }
}
