//! Client for the on-call management service consumed by handoff reports.
//!
//! This crate is the I/O boundary of the `handoff` tool: it fetches the
//! shift schedule, incident and alert listings, and the escalation policy
//! from the on-call management service, and converts the raw records into
//! the core event types that [`handoff_report`] aggregates.
//!
//! # Usage
//!
//! ```no_run
//! use handoff_oncall::OnCallClient;
//!
//! # async fn example() -> Result<(), handoff_oncall::OnCallError> {
//! let client = OnCallClient::from_env()?;
//!
//! let windows = client.shift_windows("primary").await?;
//! let incidents = client.incidents_since(windows.previous.start()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! - `ONCALL_API_URL`: base URL of the on-call management service
//! - `ONCALL_API_TOKEN`: API token with read access to schedules, incidents,
//!   alerts, and the escalation policy

pub mod client;
pub mod error;
pub mod models;

pub use client::OnCallClient;
pub use error::OnCallError;
pub use models::{
    AlertRecord, EscalationLevel, EscalationPolicy, IncidentRecord, ShiftEntry, ShiftWindows,
};
