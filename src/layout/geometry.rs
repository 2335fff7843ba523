//! Pixel geometry for the timeline grid.
//!
//! Converts the abstract layout (hour window plus column assignments) into
//! the rectangles a renderer draws: event blocks, hour grid lines, and the
//! all-day section above the grid. All coordinates are relative to the
//! timeline's own top-left corner.

use serde::{Deserialize, Serialize};

use super::columns::ColumnAssignment;
use super::window::TimeWindow;
use crate::models::item::{ItemId, TimelineItem};
use crate::utils::date::{fractional_hour, hours_between};

/// Pixel metrics for the timeline grid. The configuration surface of the
/// engine; hosts may persist overrides, so everything serializes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    /// Height of one hour row.
    pub hour_height: f32,
    /// Width of the leading time-label column.
    pub label_width: f32,
    /// Shortest rendered block; zero-length items still get this much.
    pub min_block_height: f32,
    /// Gap between the label column and the event area.
    pub content_inset: f32,
    /// Horizontal space reserved at the trailing edge of the event area.
    pub content_gutter: f32,
    /// Gap between adjacent event columns.
    pub block_spacing: f32,
    /// Height of one row in the all-day section.
    pub all_day_row_height: f32,
    /// Vertical padding around the all-day section.
    pub all_day_padding: f32,
    /// Rows shown in the all-day section before collapsing to a count.
    pub all_day_max_rows: usize,
    /// Vertical padding around the whole timeline.
    pub vertical_padding: f32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            hour_height: 44.0,
            label_width: 48.0,
            min_block_height: 24.0,
            content_inset: 8.0,
            content_gutter: 16.0,
            block_spacing: 2.0,
            all_day_row_height: 24.0,
            all_day_padding: 16.0,
            all_day_max_rows: 3,
            vertical_padding: 16.0,
        }
    }
}

impl Metrics {
    /// Check the metrics are usable (finite, with positive row sizing).
    pub fn is_plausible(&self) -> bool {
        self.hour_height.is_finite()
            && self.hour_height > 0.0
            && self.label_width.is_finite()
            && self.label_width >= 0.0
            && self.min_block_height.is_finite()
            && self.min_block_height >= 0.0
            && self.content_inset.is_finite()
            && self.content_gutter.is_finite()
            && self.block_spacing.is_finite()
            && self.all_day_row_height.is_finite()
            && self.all_day_padding.is_finite()
            && self.vertical_padding.is_finite()
    }

    /// Return these metrics if plausible, else the defaults.
    pub fn sanitized(self) -> Self {
        if self.is_plausible() {
            self
        } else {
            log::warn!("metrics {:?} are not plausible, using defaults", self);
            Self::default()
        }
    }
}

/// Position and size of a rendered element, in pixels from the timeline's
/// top-left corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct BlockRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One horizontal grid line with its time label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourLine {
    /// Hour the line marks, kept as selected (24 means end of day).
    pub hour: u32,
    pub y: f32,
    /// Zero-padded "HH:00" label; the display hour wraps at midnight.
    pub label: String,
}

/// The all-day strip rendered above the hour grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AllDaySection {
    /// Items shown as rows, capped at the configured maximum.
    pub visible: Vec<ItemId>,
    /// How many further all-day items are summarized as "+N more".
    pub overflow: usize,
    pub height: f32,
}

/// Compute the rectangle for one event block.
///
/// The vertical position follows the item's offset from the window start;
/// items starting before the window produce a negative `y` and are expected
/// to be clipped by the host. Width divides the event area evenly among the
/// assignment's `total_columns`.
pub fn block_rect(
    item: &TimelineItem,
    assignment: &ColumnAssignment,
    window: &TimeWindow,
    metrics: &Metrics,
    content_width: f32,
) -> BlockRect {
    let y = (fractional_hour(item.start) - window.start_hour as f32) * metrics.hour_height;
    let height = (hours_between(item.start, item.end) * metrics.hour_height)
        .max(metrics.min_block_height);

    let total = assignment.total_columns.max(1);
    let available_width = content_width - metrics.content_gutter;
    let column_width = available_width / total as f32;
    let x = metrics.label_width + metrics.content_inset + column_width * assignment.column as f32;

    BlockRect {
        x,
        y,
        width: column_width - metrics.block_spacing,
        height,
    }
}

/// Grid lines for every hour boundary of the window, fence-post style: a
/// window spanning n hours yields n + 1 lines.
pub fn hour_lines(window: &TimeWindow, metrics: &Metrics) -> Vec<HourLine> {
    (window.start_hour..=window.end_hour)
        .map(|hour| HourLine {
            hour,
            y: (hour - window.start_hour) as f32 * metrics.hour_height,
            label: format!("{:02}:00", hour % 24),
        })
        .collect()
}

/// Build the all-day section from the full item list.
///
/// Only the first few all-day items (in input order) become rows; the rest
/// collapse into an overflow count. Empty input collapses to zero height.
pub fn all_day_section(items: &[TimelineItem], metrics: &Metrics) -> AllDaySection {
    let all_day: Vec<&TimelineItem> = items.iter().filter(|item| item.all_day).collect();
    if all_day.is_empty() {
        return AllDaySection::default();
    }

    let shown = all_day.len().min(metrics.all_day_max_rows);
    AllDaySection {
        visible: all_day.iter().take(shown).map(|item| item.id).collect(),
        overflow: all_day.len() - shown,
        height: shown as f32 * metrics.all_day_row_height + metrics.all_day_padding,
    }
}
