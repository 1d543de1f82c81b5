//! Plain-text rendering of the end-of-shift report.

use crate::events::{AlertChannel, Event};
use crate::summary::{pct_change, PeriodSummary};

/// Tunables for report generation.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Alerts with an hour before this cutoff count as graveyard alerts
    pub graveyard_cutoff_hour: u32,
    /// How many triggers to list in the trigger section
    pub top_triggers: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            graveyard_cutoff_hour: 6,
            top_triggers: 5,
        }
    }
}

/// One escalation level shown in the report header.
#[derive(Debug, Clone)]
pub struct EscalationEntry {
    /// Rank in the paging policy, 1 is paged first
    pub level: u32,
    /// Person at this level
    pub person: String,
    /// Optional role label, e.g. "primary"
    pub label: Option<String>,
}

impl EscalationEntry {
    fn describe(&self) -> String {
        match &self.label {
            Some(label) => format!("L{} {} ({label})", self.level, self.person),
            None => format!("L{} {}", self.level, self.person),
        }
    }
}

/// Render the end-of-shift report from the two populated summaries.
///
/// The escalation entries and on-call name only annotate the header; they
/// play no part in aggregation.
#[must_use]
pub fn render_report(
    oncall: &str,
    escalations: &[EscalationEntry],
    incidents: &PeriodSummary,
    alerts: &PeriodSummary,
    config: &ReportConfig,
) -> String {
    let mut out = String::new();

    let shift = incidents.current_period();
    out.push_str("On-call handoff report\n");
    out.push_str(&format!(
        "Shift: {} to {} (UTC)\n",
        shift.start().format("%Y-%m-%d %H:%M"),
        shift.end().format("%Y-%m-%d %H:%M"),
    ));
    out.push_str(&format!("On call: {oncall}\n"));
    if !escalations.is_empty() {
        let levels: Vec<String> = escalations.iter().map(EscalationEntry::describe).collect();
        out.push_str(&format!("Escalation: {}\n", levels.join(", ")));
    }

    out.push('\n');
    render_incidents(&mut out, incidents);
    out.push('\n');
    render_alerts(&mut out, alerts, config);
    out.push('\n');
    render_triggers(&mut out, incidents, config);

    out
}

fn render_incidents(out: &mut String, incidents: &PeriodSummary) {
    let total = incidents.current_total();
    out.push_str("Incidents\n");
    out.push_str(&format!(
        "  {total} incidents this shift ({} vs previous shift)\n",
        incidents.pct_change()
    ));

    let resolved = incidents.current_count(Event::is_resolved);
    out.push_str(&format!(
        "  {resolved} resolved, {} still open\n",
        total - resolved
    ));

    let by_resolver = incidents.current_summary(|event, counts| {
        if let Some(resolver) = event.resolver() {
            *counts.entry(resolver.to_string()).or_default() += 1;
        }
    });
    if !by_resolver.is_empty() {
        out.push_str("  Resolutions:\n");
        for (person, count) in &by_resolver {
            out.push_str(&format!("    {person}: {count}\n"));
        }
    }
}

fn render_alerts(out: &mut String, alerts: &PeriodSummary, config: &ReportConfig) {
    out.push_str("Alerts\n");
    out.push_str(&format!(
        "  {} alerts this shift ({} vs previous shift)\n",
        alerts.current_total(),
        alerts.pct_change()
    ));

    let sms = alerts.current_count(|e| e.channel_is(AlertChannel::Sms));
    let phone = alerts.current_count(|e| e.channel_is(AlertChannel::Phone));
    out.push_str(&format!("  Pages by channel: {sms} SMS, {phone} phone\n"));

    let graveyard = alerts.current_count(|e| e.is_graveyard(config.graveyard_cutoff_hour));
    out.push_str(&format!(
        "  {graveyard} graveyard alerts (before {:02}:00)\n",
        config.graveyard_cutoff_hour
    ));
}

fn render_triggers(out: &mut String, incidents: &PeriodSummary, config: &ReportConfig) {
    let by_trigger = incidents.current_summary(|event, counts| {
        if let Some(trigger) = event.trigger() {
            *counts.entry(trigger.to_string()).or_default() += 1;
        }
    });

    out.push_str("Triggers\n");
    if by_trigger.is_empty() {
        out.push_str("  none this shift\n");
        return;
    }

    // First N triggers in first-seen order, not the N largest.
    for (trigger, count) in by_trigger.iter().take(config.top_triggers) {
        let previous = incidents.previous_count(|e| e.trigger() == Some(trigger.as_str()));
        out.push_str(&format!(
            "  {trigger}: {count} ({})\n",
            pct_change(previous, *count)
        ));
    }
}
