//! Wire types for the on-call management service API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use handoff_report::{AlertChannel, Event, TimePeriod};

/// One shift entry from the schedule endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftEntry {
    /// Shift start
    pub start: DateTime<Utc>,
    /// Shift end
    pub end: DateTime<Utc>,
    /// Person on call for the shift
    pub person: String,
}

/// Response from `GET /api/v1/schedules/{id}/shifts`.
///
/// Shifts are ordered most-recent-first.
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftsResponse {
    /// Shift entries for the schedule
    pub shifts: Vec<ShiftEntry>,
}

/// The two shift windows a report compares, derived from the schedule.
#[derive(Debug, Clone)]
pub struct ShiftWindows {
    /// The shift being handed off
    pub current: TimePeriod,
    /// The shift before it
    pub previous: TimePeriod,
    /// Person on call for the current shift
    pub oncall: String,
}

/// Raw incident record from the incidents endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct IncidentRecord {
    /// When the incident fired
    pub created_at: DateTime<Utc>,
    /// Lifecycle status reported by the service, e.g. "resolved"
    pub status: String,
    /// Who resolved the incident, when resolved
    #[serde(default)]
    pub resolved_by: Option<String>,
    /// Name of the trigger that fired the incident
    pub trigger: String,
}

impl IncidentRecord {
    /// Convert into a core event for aggregation.
    #[must_use]
    pub fn into_event(self) -> Event {
        Event::Incident {
            timestamp: self.created_at,
            resolved: self.status == "resolved",
            resolver: self.resolved_by,
            trigger: self.trigger,
        }
    }
}

/// Response from `GET /api/v1/incidents`.
#[derive(Debug, Clone, Deserialize)]
pub struct IncidentsResponse {
    /// Incident records, oldest first
    pub incidents: Vec<IncidentRecord>,
}

/// Raw alert row from the alerts endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertRecord {
    /// When the alert was sent
    pub sent_at: DateTime<Utc>,
    /// Delivery channel as the service names it
    pub channel: String,
    /// Person the alert was sent to
    pub person: String,
}

impl AlertRecord {
    /// Convert into a core event for aggregation. Unknown channel names map
    /// to [`AlertChannel::Other`].
    #[must_use]
    pub fn into_event(self) -> Event {
        Event::Alert {
            timestamp: self.sent_at,
            channel: AlertChannel::from(self.channel.as_str()),
            person: self.person,
        }
    }
}

/// Response from `GET /api/v1/alerts`.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertsResponse {
    /// Alert rows, oldest first
    pub alerts: Vec<AlertRecord>,
}

/// One level of the rotation's escalation policy.
#[derive(Debug, Clone, Deserialize)]
pub struct EscalationLevel {
    /// Rank in the paging policy, 1 is paged first
    pub level: u32,
    /// Person at this level
    pub person: String,
    /// Optional role label, e.g. "primary"
    #[serde(default)]
    pub label: Option<String>,
}

/// Response from `GET /api/v1/escalation_policy`.
#[derive(Debug, Clone, Deserialize)]
pub struct EscalationPolicy {
    /// Levels ordered by rank
    pub levels: Vec<EscalationLevel>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_incident_record_conversion() {
        let record = IncidentRecord {
            created_at: Utc.with_ymd_and_hms(2026, 8, 3, 14, 30, 0).unwrap(),
            status: "resolved".to_string(),
            resolved_by: Some("alice".to_string()),
            trigger: "high-cpu".to_string(),
        };

        let event = record.into_event();
        assert!(event.is_resolved());
        assert_eq!(event.resolver(), Some("alice"));
        assert_eq!(event.trigger(), Some("high-cpu"));
        assert_eq!(
            event.timestamp(),
            Utc.with_ymd_and_hms(2026, 8, 3, 14, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_open_incident_converts_as_unresolved() {
        let record = IncidentRecord {
            created_at: Utc::now(),
            status: "triggered".to_string(),
            resolved_by: None,
            trigger: "disk-full".to_string(),
        };

        assert!(!record.into_event().is_resolved());
    }

    #[test]
    fn test_alert_record_maps_unknown_channel_to_other() {
        let record = AlertRecord {
            sent_at: Utc::now(),
            channel: "carrier-pigeon".to_string(),
            person: "bob".to_string(),
        };

        let event = record.into_event();
        assert!(event.channel_is(AlertChannel::Other));
        assert_eq!(event.person(), Some("bob"));
    }

    #[test]
    fn test_incident_record_deserializes_without_resolved_by() {
        let record: IncidentRecord = serde_json::from_str(
            r#"{"created_at":"2026-08-03T14:30:00Z","status":"triggered","trigger":"high-cpu"}"#,
        )
        .unwrap();

        assert_eq!(record.resolved_by, None);
        assert_eq!(record.trigger, "high-cpu");
    }
}
