//! Extraction of subcommands and typed option values from resolved
//! interaction data.

use serenity::all::{ResolvedOption, ResolvedValue, Role};
use warden_gateway::GatewayError;

/// Returns the invoked subcommand and its nested options, if any.
pub(super) fn subcommand<'a>(
    options: &'a [ResolvedOption<'a>],
) -> Option<(&'a str, &'a [ResolvedOption<'a>])> {
    match options.first() {
        Some(ResolvedOption {
            name,
            value: ResolvedValue::SubCommand(nested),
            ..
        }) => Some((*name, nested.as_slice())),
        _ => None,
    }
}

/// Why a subcommand could not be dispatched; rendered as an ephemeral message.
#[derive(Debug)]
pub(super) enum DispatchError {
    MissingOption(String),
    UnknownSubcommand(String),
    Gateway(GatewayError),
}

impl DispatchError {
    pub(super) fn message(&self) -> String {
        match self {
            Self::MissingOption(name) => format!("Missing required option `{name}`."),
            Self::UnknownSubcommand(name) => format!("Unknown subcommand `{name}`."),
            Self::Gateway(error) => error.to_string(),
        }
    }
}

impl From<GatewayError> for DispatchError {
    fn from(error: GatewayError) -> Self {
        Self::Gateway(error)
    }
}

/// Typed accessors over a subcommand's resolved options.
pub(super) struct OptionBag<'a> {
    options: &'a [ResolvedOption<'a>],
}

impl<'a> OptionBag<'a> {
    pub(super) fn new(options: &'a [ResolvedOption<'a>]) -> Self {
        Self { options }
    }

    pub(super) fn str(&self, name: &str) -> Result<&'a str, DispatchError> {
        self.options
            .iter()
            .find_map(|option| match &option.value {
                ResolvedValue::String(value) if option.name == name => Some(*value),
                _ => None,
            })
            .ok_or_else(|| DispatchError::MissingOption(name.to_string()))
    }

    pub(super) fn int(&self, name: &str) -> Result<i64, DispatchError> {
        self.options
            .iter()
            .find_map(|option| match &option.value {
                ResolvedValue::Integer(value) if option.name == name => Some(*value),
                _ => None,
            })
            .ok_or_else(|| DispatchError::MissingOption(name.to_string()))
    }

    pub(super) fn int_or(&self, name: &str, default: i64) -> i64 {
        self.int(name).unwrap_or(default)
    }

    pub(super) fn role(&self, name: &str) -> Result<&'a Role, DispatchError> {
        self.options
            .iter()
            .find_map(|option| match &option.value {
                ResolvedValue::Role(role) if option.name == name => Some(*role),
                _ => None,
            })
            .ok_or_else(|| DispatchError::MissingOption(name.to_string()))
    }
}
