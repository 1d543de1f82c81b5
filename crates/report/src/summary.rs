//! Period-comparison aggregation over shift events.

use indexmap::IndexMap;

use crate::events::Event;
use crate::period::TimePeriod;

/// Grouped event counts keyed by a visitor-chosen label.
///
/// Keys iterate in first-insertion order, which keeps downstream report
/// output deterministic for a given event sequence.
pub type GroupCounts = IndexMap<String, u64>;

/// Buckets appended events into a current and a previous shift window and
/// answers count, grouping, and percent-change queries.
///
/// Events are classified lazily at query time; `append` only pushes onto the
/// internal sequence. An event whose timestamp falls in neither window is
/// kept but never counted. Populate first, then query; there is no removal.
#[derive(Debug, Clone)]
pub struct PeriodSummary {
    current: TimePeriod,
    previous: TimePeriod,
    events: Vec<Event>,
}

impl PeriodSummary {
    /// Create an empty summary over the two shift windows.
    #[must_use]
    pub const fn new(current: TimePeriod, previous: TimePeriod) -> Self {
        Self {
            current,
            previous,
            events: Vec::new(),
        }
    }

    /// Add an event to the sequence.
    pub fn append(&mut self, event: Event) {
        self.events.push(event);
    }

    /// The current shift window.
    #[must_use]
    pub const fn current_period(&self) -> TimePeriod {
        self.current
    }

    /// The previous shift window.
    #[must_use]
    pub const fn previous_period(&self) -> TimePeriod {
        self.previous
    }

    /// Count of current-window events.
    #[must_use]
    pub fn current_total(&self) -> u64 {
        self.current_count(|_| true)
    }

    /// Count of previous-window events.
    #[must_use]
    pub fn previous_total(&self) -> u64 {
        self.previous_count(|_| true)
    }

    /// Count of current-window events satisfying `pred`.
    #[must_use]
    pub fn current_count(&self, pred: impl Fn(&Event) -> bool) -> u64 {
        self.count_in(&self.current, pred)
    }

    /// Count of previous-window events satisfying `pred`.
    #[must_use]
    pub fn previous_count(&self, pred: impl Fn(&Event) -> bool) -> u64 {
        self.count_in(&self.previous, pred)
    }

    fn count_in(&self, period: &TimePeriod, pred: impl Fn(&Event) -> bool) -> u64 {
        self.events
            .iter()
            .filter(|event| period.contains(event.timestamp()))
            .filter(|event| pred(event))
            .count() as u64
    }

    /// Visit every current-window event in insertion order and let the
    /// visitor increment whichever key it chooses.
    ///
    /// The accumulator starts empty with default-zero semantics for unseen
    /// keys; use `*counts.entry(key).or_default() += 1`. The returned map
    /// iterates keys in first-insertion order.
    #[must_use]
    pub fn current_summary(&self, visitor: impl Fn(&Event, &mut GroupCounts)) -> GroupCounts {
        let mut counts = GroupCounts::new();
        for event in &self.events {
            if self.current.contains(event.timestamp()) {
                visitor(event, &mut counts);
            }
        }
        counts
    }

    /// Percentage change of the unfiltered current count against the
    /// previous count.
    #[must_use]
    pub fn pct_change(&self) -> String {
        pct_change(self.previous_total(), self.current_total())
    }

    /// Percentage change of the counts satisfying `pred`.
    #[must_use]
    pub fn pct_change_where(&self, pred: impl Fn(&Event) -> bool) -> String {
        pct_change(self.previous_count(&pred), self.current_count(&pred))
    }
}

/// Percentage change between two counts, formatted with an explicit sign and
/// one decimal place, e.g. `"+50.0%"` or `"-33.3%"`.
///
/// A zero previous count is common for fast-changing categories (new trigger
/// names, new people) and is not an error:
///
/// - previous 0, current 0 yields `"no change"`
/// - previous 0, current > 0 yields `"new"`
#[must_use]
#[allow(clippy::cast_precision_loss)] // counts are far below f64 mantissa range
pub fn pct_change(previous: u64, current: u64) -> String {
    if previous == 0 {
        return if current == 0 {
            "no change".to_string()
        } else {
            "new".to_string()
        };
    }

    let pct = (current as f64 - previous as f64) / previous as f64 * 100.0;
    format!("{pct:+.1}%")
}
