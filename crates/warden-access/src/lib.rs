//! Role-based access control for Warden administrative commands.
//!
//! Holds the persisted allow-list of Discord role ids whose members may drive
//! the remote console, plus the shared handle the rest of the bot uses to
//! consult it.

pub mod role_store;

pub use role_store::{shared, AddOutcome, RemoveOutcome, RoleStore, SharedRoleStore};
