//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **duolingo**: reqwest-backed social-graph source
//! - **history**: file-backed store for the last tracked username
//!
//! Adapters are thin translators between domain types and wire or disk
//! representations. They contain no business logic.

pub mod duolingo;
pub mod history;
