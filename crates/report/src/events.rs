//! Shift event types observed by the rotation.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Channel an alert was delivered over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertChannel {
    /// Text message
    Sms,
    /// Phone call
    Phone,
    /// Email notification
    Email,
    /// Anything the service reports that we do not recognize
    Other,
}

impl AlertChannel {
    /// Get display name for this channel.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sms => "SMS",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Other => "other",
        }
    }
}

impl From<&str> for AlertChannel {
    /// Lenient mapping from the service's channel strings. Unknown channels
    /// land in [`AlertChannel::Other`] rather than failing the run.
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "sms" => Self::Sms,
            "phone" | "voice" => Self::Phone,
            "email" => Self::Email,
            _ => Self::Other,
        }
    }
}

/// Events observed during an on-call shift.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// An incident that paged the rotation
    Incident {
        /// When the incident fired
        timestamp: DateTime<Utc>,
        /// Whether the incident has been resolved
        resolved: bool,
        /// Who resolved it; resolved incidents carry a resolver identity
        resolver: Option<String>,
        /// Name of the trigger that fired the incident
        trigger: String,
    },

    /// A notification sent to an on-call person
    Alert {
        /// When the alert was sent
        timestamp: DateTime<Utc>,
        /// Delivery channel
        channel: AlertChannel,
        /// Person the alert was sent to
        person: String,
    },
}

impl Event {
    /// Get the timestamp for this event, used for period bucketing.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Incident { timestamp, .. } | Self::Alert { timestamp, .. } => *timestamp,
        }
    }

    /// Whether this is an incident event.
    #[must_use]
    pub const fn is_incident(&self) -> bool {
        matches!(self, Self::Incident { .. })
    }

    /// Whether this is an alert event.
    #[must_use]
    pub const fn is_alert(&self) -> bool {
        matches!(self, Self::Alert { .. })
    }

    /// Whether this is a resolved incident. Alerts are never resolved.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Incident { resolved: true, .. })
    }

    /// Whether this is an alert delivered over `channel`.
    #[must_use]
    pub fn channel_is(&self, channel: AlertChannel) -> bool {
        matches!(self, Self::Alert { channel: c, .. } if *c == channel)
    }

    /// Whether this is an alert sent in the graveyard window, i.e. with an
    /// hour in `[0, cutoff_hour)`. Incidents are never graveyard events.
    #[must_use]
    pub fn is_graveyard(&self, cutoff_hour: u32) -> bool {
        match self {
            Self::Alert { timestamp, .. } => timestamp.hour() < cutoff_hour,
            Self::Incident { .. } => false,
        }
    }

    /// Resolver identity for resolved incidents.
    #[must_use]
    pub fn resolver(&self) -> Option<&str> {
        match self {
            Self::Incident { resolver, .. } => resolver.as_deref(),
            Self::Alert { .. } => None,
        }
    }

    /// Trigger name for incidents.
    #[must_use]
    pub fn trigger(&self) -> Option<&str> {
        match self {
            Self::Incident { trigger, .. } => Some(trigger),
            Self::Alert { .. } => None,
        }
    }

    /// Person an alert was sent to.
    #[must_use]
    pub fn person(&self) -> Option<&str> {
        match self {
            Self::Alert { person, .. } => Some(person),
            Self::Incident { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 3, hour, minute, 0).unwrap()
    }

    fn alert(hour: u32, channel: AlertChannel) -> Event {
        Event::Alert {
            timestamp: at(hour, 15),
            channel,
            person: "alice".to_string(),
        }
    }

    #[test]
    fn test_channel_from_service_strings() {
        assert_eq!(AlertChannel::from("sms"), AlertChannel::Sms);
        assert_eq!(AlertChannel::from("SMS"), AlertChannel::Sms);
        assert_eq!(AlertChannel::from("voice"), AlertChannel::Phone);
        assert_eq!(AlertChannel::from("push"), AlertChannel::Other);
    }

    #[test]
    fn test_graveyard_window_is_half_open() {
        assert!(alert(0, AlertChannel::Sms).is_graveyard(6));
        assert!(alert(5, AlertChannel::Sms).is_graveyard(6));
        assert!(!alert(6, AlertChannel::Sms).is_graveyard(6));
        assert!(!alert(23, AlertChannel::Sms).is_graveyard(6));
    }

    #[test]
    fn test_incident_predicates() {
        let incident = Event::Incident {
            timestamp: at(14, 30),
            resolved: true,
            resolver: Some("bob".to_string()),
            trigger: "disk-full".to_string(),
        };

        assert!(incident.is_incident());
        assert!(incident.is_resolved());
        assert!(!incident.is_graveyard(6));
        assert!(!incident.channel_is(AlertChannel::Sms));
        assert_eq!(incident.resolver(), Some("bob"));
        assert_eq!(incident.trigger(), Some("disk-full"));
        assert_eq!(incident.person(), None);
    }

    #[test]
    fn test_unresolved_incident_has_no_resolver() {
        let incident = Event::Incident {
            timestamp: at(2, 0),
            resolved: false,
            resolver: None,
            trigger: "high-cpu".to_string(),
        };

        assert!(!incident.is_resolved());
        assert_eq!(incident.resolver(), None);
    }

    #[test]
    fn test_alert_channel_predicate() {
        let event = alert(10, AlertChannel::Phone);

        assert!(event.is_alert());
        assert!(event.channel_is(AlertChannel::Phone));
        assert!(!event.channel_is(AlertChannel::Sms));
        assert_eq!(event.person(), Some("alice"));
    }
}
