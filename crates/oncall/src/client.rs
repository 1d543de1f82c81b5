//! HTTP client for the on-call management service.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use handoff_report::TimePeriod;

use crate::error::OnCallError;
use crate::models::{
    AlertRecord, AlertsResponse, EscalationPolicy, IncidentRecord, IncidentsResponse,
    ShiftWindows, ShiftsResponse,
};

/// Environment variable for the service base URL.
const ENV_ONCALL_API_URL: &str = "ONCALL_API_URL";

/// Environment variable for the service API token.
const ENV_ONCALL_API_TOKEN: &str = "ONCALL_API_TOKEN";

/// Request timeout for service calls.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the on-call management service REST API.
///
/// Each listing endpoint returns a single page of data; the report covers
/// two shifts, which fits comfortably in one page.
#[derive(Debug, Clone)]
pub struct OnCallClient {
    base_url: String,
    token: String,
    client: reqwest::Client,
}

impl OnCallClient {
    /// Create a client from environment variables.
    ///
    /// # Errors
    /// Returns an error if `ONCALL_API_URL` or `ONCALL_API_TOKEN` is not set.
    pub fn from_env() -> Result<Self, OnCallError> {
        let base_url = std::env::var(ENV_ONCALL_API_URL)
            .map_err(|_| OnCallError::Auth("ONCALL_API_URL not set".to_string()))?;
        let token = std::env::var(ENV_ONCALL_API_TOKEN)
            .map_err(|_| OnCallError::Auth("ONCALL_API_TOKEN not set".to_string()))?;
        Self::new(base_url, token)
    }

    /// Create a client against a specific base URL.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, OnCallError> {
        let client = reqwest::Client::builder()
            .user_agent("handoff/0.3")
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        })
    }

    /// Make a GET request against the service.
    async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, OnCallError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        debug!(url = %url, "requesting on-call service");

        let response = self
            .client
            .get(&url)
            .query(query)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = %status, "on-call service request failed");
            return Err(OnCallError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(OnCallError::Serialization)
    }

    /// Fetch the current and previous shift windows for a schedule.
    ///
    /// The service returns shifts most-recent-first; the first two entries
    /// become the current and previous windows.
    ///
    /// # Errors
    /// Returns [`OnCallError::ScheduleNotFound`] if the schedule is unknown
    /// or has fewer than two shifts. Reports cannot be generated without
    /// both windows, so callers must abort on this error.
    pub async fn shift_windows(&self, schedule_id: &str) -> Result<ShiftWindows, OnCallError> {
        let path = format!("/api/v1/schedules/{schedule_id}/shifts");
        let response: ShiftsResponse = match self.get(&path, &[]).await {
            Err(OnCallError::Api { status: 404, .. }) => {
                return Err(OnCallError::ScheduleNotFound(schedule_id.to_string()));
            }
            other => other?,
        };

        let mut shifts = response.shifts.into_iter();
        let (Some(current), Some(previous)) = (shifts.next(), shifts.next()) else {
            warn!(schedule = schedule_id, "schedule has fewer than two shifts");
            return Err(OnCallError::ScheduleNotFound(schedule_id.to_string()));
        };

        debug!(
            oncall = %current.person,
            start = %current.start,
            end = %current.end,
            "resolved current shift"
        );

        Ok(ShiftWindows {
            current: TimePeriod::new(current.start, current.end)?,
            previous: TimePeriod::new(previous.start, previous.end)?,
            oncall: current.person,
        })
    }

    /// List incidents created since `since`.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not parse.
    pub async fn incidents_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<IncidentRecord>, OnCallError> {
        let response: IncidentsResponse = self
            .get("/api/v1/incidents", &[("since", since.to_rfc3339())])
            .await?;

        debug!(count = response.incidents.len(), "fetched incidents");
        Ok(response.incidents)
    }

    /// List alerts sent since `since`.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not parse.
    pub async fn alerts_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<AlertRecord>, OnCallError> {
        let response: AlertsResponse = self
            .get("/api/v1/alerts", &[("since", since.to_rfc3339())])
            .await?;

        debug!(count = response.alerts.len(), "fetched alerts");
        Ok(response.alerts)
    }

    /// Fetch the rotation's escalation policy.
    ///
    /// Consumed only by the report header annotation, never by aggregation.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body does not parse.
    pub async fn escalation_policy(&self) -> Result<EscalationPolicy, OnCallError> {
        self.get("/api/v1/escalation_policy", &[]).await
    }
}
