//! Visible hour-range selection.
//!
//! A timeline never renders the whole 0-24h day; it picks a contiguous hour
//! window near an anchor (the primary event, the first event, or "now") and
//! grows it when the container offers more room than the minimum. The day
//! view derives its baseline from the full spread of the items instead of a
//! single anchor, then expands the same way.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::item::TimelineItem;
use crate::utils::clock::Clock;
use crate::utils::date::hour_of;

const HOURS_PER_DAY: i32 = 24;

/// The contiguous hour range [start_hour, end_hour) chosen for rendering.
///
/// Both bounds stay within [0, 24] and the span is always at least one hour,
/// even for degenerate input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl TimeWindow {
    /// Number of hour slots the window spans.
    pub fn span_hours(&self) -> u32 {
        self.end_hour - self.start_hour
    }

    /// Whether a timed item falls within the window by hour component.
    ///
    /// All-day items never intersect; they live outside the hour grid.
    pub fn intersects(&self, item: &TimelineItem) -> bool {
        if item.all_day {
            return false;
        }
        hour_of(item.start) <= self.end_hour && hour_of(item.end) >= self.start_hour
    }
}

/// How a compact timeline derives its hour count from the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeightMode {
    /// Fill available vertical space; the hour count follows the container
    /// height, reserving one row's worth for the trailing label.
    Flexible,
    /// Show a fixed number of hours regardless of container size. Values
    /// below 1 are treated as 1 so the timeline stays usable.
    Fixed { hours: i32 },
}

impl HeightMode {
    /// Resolve the number of hour slots to request for a container.
    pub fn visible_hours(&self, container_height: f32, hour_height: f32) -> i32 {
        match *self {
            HeightMode::Flexible => ((container_height / hour_height) as i32 - 1).max(1),
            HeightMode::Fixed { hours } => hours.max(1),
        }
    }
}

/// The instant the visible window centers on: the first primary item's
/// start, else the first item's start, else the clock's "now".
pub fn anchor_time(items: &[TimelineItem], clock: &dyn Clock) -> DateTime<Local> {
    items
        .iter()
        .find(|item| item.primary)
        .or_else(|| items.first())
        .map(|item| item.start)
        .unwrap_or_else(|| clock.now())
}

/// Select the hour window around an anchor instant.
///
/// The baseline spans one hour of lead-in before the anchor hour plus the
/// requested slots and one hour of lead-out. When `available_hour_slots`
/// exceeds that span the surplus is split evenly around the window, the odd
/// hour going after the end; both bounds clamp to the day.
pub fn select_window(
    anchor: DateTime<Local>,
    desired_hour_slots: i32,
    available_hour_slots: i32,
) -> TimeWindow {
    let desired = clamp_slots(desired_hour_slots, "desired");
    let available = clamp_slots(available_hour_slots, "available");
    let anchor_hour = hour_of(anchor) as i32;

    let start = (anchor_hour - 1).max(0);
    let end = (start + desired.max(1) + 1).min(HOURS_PER_DAY);
    expand_to_fill(start, end, available)
}

/// Select the hour window for the full day view.
///
/// The baseline covers every timed item from one hour before the earliest
/// start to one hour past the slot holding the latest end, then expands into
/// any extra space like [`select_window`]. With no timed items it falls back
/// to a three-hour window around the anchor.
pub fn select_day_window(
    items: &[TimelineItem],
    available_hour_slots: i32,
    clock: &dyn Clock,
) -> TimeWindow {
    let available = clamp_slots(available_hour_slots, "available");

    let timed: Vec<&TimelineItem> = items.iter().filter(|item| !item.all_day).collect();
    if timed.is_empty() {
        let anchor_hour = hour_of(anchor_time(items, clock)) as i32;
        let start = (anchor_hour - 1).max(0);
        let end = (anchor_hour + 2).min(HOURS_PER_DAY);
        return expand_to_fill(start, end, available);
    }

    // unwrap is fine: timed is non-empty here
    let earliest = timed.iter().map(|item| hour_of(item.start)).min().unwrap() as i32;
    let latest = timed.iter().map(|item| hour_of(item.end)).max().unwrap() as i32;

    let start = (earliest - 1).max(0);
    let end = (latest + 2).min(HOURS_PER_DAY);
    expand_to_fill(start, end, available)
}

/// Clamp a caller-supplied slot count into [0, 24]. Out-of-range values are
/// a caller bug worth surfacing in logs, but never an error.
fn clamp_slots(value: i32, label: &str) -> i32 {
    if (0..=HOURS_PER_DAY).contains(&value) {
        value
    } else {
        let clamped = value.clamp(0, HOURS_PER_DAY);
        log::debug!(
            "{} hour slots {} out of range, clamped to {}",
            label,
            value,
            clamped
        );
        clamped
    }
}

/// Distribute surplus space evenly before and after a baseline window.
///
/// Surplus lost to a day boundary on one side is not re-granted to the
/// other; the window simply ends at the boundary.
fn expand_to_fill(baseline_start: i32, baseline_end: i32, available: i32) -> TimeWindow {
    let mut start = baseline_start;
    let mut end = baseline_end;

    let span = end - start;
    if available > span {
        let surplus = available - span;
        let before = surplus / 2;
        let after = surplus - before;
        start = (start - before).max(0);
        end = (end + after).min(HOURS_PER_DAY);
    }

    // A window always spans at least one hour slot.
    if end - start < 1 {
        end = (start + 1).min(HOURS_PER_DAY);
        start = end - 1;
    }

    TimeWindow {
        start_hour: start as u32,
        end_hour: end as u32,
    }
}
