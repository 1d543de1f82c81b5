//! Period-comparison summarization for on-call handoff reports.
//!
//! This crate is the computational core of the `handoff` tool. It buckets a
//! stream of time-stamped shift events into a current and a previous window,
//! answers count/grouping queries over each window, and computes formatted
//! percentage changes between them. The final plain-text report is assembled
//! by [`render::render_report`].
//!
//! # Usage
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use handoff_report::{Event, PeriodSummary, TimePeriod};
//!
//! # fn main() -> Result<(), handoff_report::PeriodError> {
//! let current = TimePeriod::new(
//!     Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2026, 8, 8, 9, 0, 0).unwrap(),
//! )?;
//! let previous = TimePeriod::new(
//!     Utc.with_ymd_and_hms(2026, 7, 25, 9, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2026, 8, 1, 9, 0, 0).unwrap(),
//! )?;
//!
//! let mut summary = PeriodSummary::new(current, previous);
//! summary.append(Event::Incident {
//!     timestamp: Utc.with_ymd_and_hms(2026, 8, 3, 14, 30, 0).unwrap(),
//!     resolved: true,
//!     resolver: Some("alice".to_string()),
//!     trigger: "high-cpu".to_string(),
//! });
//!
//! assert_eq!(summary.current_total(), 1);
//! assert_eq!(summary.current_count(Event::is_resolved), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`TimePeriod`] is a closed interval with inclusive boundaries.
//! - [`Event`] is a tagged union over incidents and alerts with pure
//!   predicates used by the counting queries.
//! - [`PeriodSummary`] owns the event sequence; classification into the two
//!   windows happens lazily at query time, so appends are O(1).
//! - [`summary::pct_change`] handles the zero-previous edge cases without
//!   dividing.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod events;
pub mod period;
pub mod render;
pub mod summary;

pub use events::{AlertChannel, Event};
pub use period::{PeriodError, TimePeriod};
pub use render::{render_report, EscalationEntry, ReportConfig};
pub use summary::{pct_change, GroupCounts, PeriodSummary};
