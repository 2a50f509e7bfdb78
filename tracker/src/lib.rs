//! Duolingo non-follower tracker.
//!
//! Given a username, the tracker resolves the account, fetches its profile,
//! followers and following, and reports the accounts it follows that do not
//! follow it back.
//!
//! - [`domain`]: data model, ports and the tracking pipeline
//! - [`outbound`]: Duolingo HTTP and history file adapters
//! - [`inbound`]: command-line intake and report rendering
//! - [`config`]: layered settings

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use config::TrackerSettings;
