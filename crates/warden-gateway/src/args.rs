//! Enum-constrained argument types for gateway operations.
//!
//! Platform layers hand these arguments over as raw strings; parsing happens
//! inside the gateway so an out-of-set value short-circuits to
//! `InvalidArgument` before any remote call.

use std::fmt;
use std::str::FromStr;

/// Parse failure for an enum-constrained argument, carrying the accepted
/// values for the user-facing validation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice {
    what: &'static str,
    accepted: &'static [&'static str],
}

impl InvalidChoice {
    fn new(what: &'static str, accepted: &'static [&'static str]) -> Self {
        Self { what, accepted }
    }
}

impl fmt::Display for InvalidChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {}: expected one of {}",
            self.what,
            self.accepted.join(", ")
        )
    }
}

impl std::error::Error for InvalidChoice {}

macro_rules! constrained_arg {
    ($name:ident, $what:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }

            pub const fn accepted() -> &'static [&'static str] {
                &[$($text),+]
            }
        }

        impl FromStr for $name {
            type Err = InvalidChoice;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(InvalidChoice::new($what, Self::accepted())),
                }
            }
        }
    };
}

constrained_arg!(AdvancementAction, "advancement action", {
    Grant => "grant",
    Revoke => "revoke",
});

constrained_arg!(WeatherKind, "weather type", {
    Clear => "clear",
    Rain => "rain",
    Thunder => "thunder",
});

constrained_arg!(TimeOfDay, "time of day", {
    Day => "day",
    Night => "night",
    Midnight => "midnight",
    Noon => "noon",
});

constrained_arg!(EffectAction, "effect action", {
    Give => "give",
    Clear => "clear",
});

constrained_arg!(XpAction, "xp action", {
    Set => "set",
    Add => "add",
    Query => "query",
});

constrained_arg!(XpUnit, "xp unit", {
    Points => "points",
    Levels => "levels",
});

constrained_arg!(Difficulty, "difficulty level", {
    Peaceful => "peaceful",
    Easy => "easy",
    Normal => "normal",
    Hard => "hard",
});
