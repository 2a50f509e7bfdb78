//! Command-line presentation layer.
//!
//! Turns raw user input into a tracking run and turns the resulting
//! [`TrackUserReport`](crate::domain::TrackUserReport) into text or JSON.

mod error;
mod render;
mod session;

pub use error::CliError;
pub use render::{
    PROFILE_URL_BASE, ProfileView, ReportView, UserView, format_thousands, profile_url,
    render_json, render_text,
};
pub use session::TrackSession;
