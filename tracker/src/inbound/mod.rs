//! Inbound adapters driving the domain.
//!
//! - **cli**: username intake and report rendering for the `duo-tracker`
//!   binary

pub mod cli;
