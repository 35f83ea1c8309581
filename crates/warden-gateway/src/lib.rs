//! Administrative command gateway: the mapping from a fixed vocabulary of
//! admin intents to remote-console command strings.
//!
//! Every operation follows the same contract: check the caller's roles
//! against the allow-list, validate enum-constrained arguments, build the
//! command string, execute it over the console seam, classify the free-text
//! reply, and return a structured [`CommandOutcome`] for rendering.

pub mod args;
pub mod classify;
pub mod gateway;
pub mod outcome;


pub use args::{
    AdvancementAction, Difficulty, EffectAction, InvalidChoice, TimeOfDay, WeatherKind, XpAction,
    XpUnit,
};
pub use classify::{ResponseClassifier, SuffixClassifier, Verdict};
pub use gateway::CommandGateway;
pub use outcome::{Actor, CommandOutcome, GatewayError};
