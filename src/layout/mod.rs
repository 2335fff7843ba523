//! The timeline layout engine.
//!
//! Pure functions from an item list plus container metrics to a finished
//! arrangement: the visible hour window, one positioned block per visible
//! event, the hour grid lines, and the all-day section. Callers own the
//! input and the output; nothing is cached or retained between calls, so
//! concurrent calls on independent inputs are safe.

use serde::{Deserialize, Serialize};

use crate::models::item::{ItemId, TimelineItem};
use crate::utils::clock::Clock;

pub mod columns;
pub mod geometry;
pub mod window;

use geometry::{AllDaySection, BlockRect, HourLine, Metrics};
use window::{HeightMode, TimeWindow};

/// Container dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f32,
    pub height: f32,
}

/// One positioned event block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBlock {
    pub id: ItemId,
    pub column: usize,
    pub total_columns: usize,
    pub rect: BlockRect,
}

/// A complete layout pass, produced fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineLayout {
    pub window: TimeWindow,
    pub blocks: Vec<EventBlock>,
    pub hour_lines: Vec<HourLine>,
    pub all_day: AllDaySection,
}

/// Lay out the full day view.
///
/// All-day items occupy a section above the grid; the hour window derives
/// from the spread of the timed items and widens into whatever height is
/// left over.
pub fn day_layout(
    items: &[TimelineItem],
    size: ContainerSize,
    metrics: &Metrics,
    clock: &dyn Clock,
) -> TimelineLayout {
    let metrics = metrics.sanitized();

    let all_day = geometry::all_day_section(items, &metrics);
    let available_height = size.height - all_day.height - metrics.vertical_padding;
    let available_slots = (available_height / metrics.hour_height) as i32;

    let win = window::select_day_window(items, available_slots, clock);
    finish_layout(items, win, all_day, &metrics, size.width)
}

/// Lay out the compact view.
///
/// The window anchors on the primary (or first) item and shows the number
/// of hours the height mode resolves to. All-day items are skipped
/// entirely; the compact view has no section for them.
pub fn compact_layout(
    items: &[TimelineItem],
    size: ContainerSize,
    height_mode: HeightMode,
    metrics: &Metrics,
    clock: &dyn Clock,
) -> TimelineLayout {
    let metrics = metrics.sanitized();

    let visible_hours = height_mode.visible_hours(size.height, metrics.hour_height);
    let anchor = window::anchor_time(items, clock);
    let win = window::select_window(anchor, visible_hours, visible_hours);

    finish_layout(items, win, AllDaySection::default(), &metrics, size.width)
}

/// Container height that renders a fixed-hours compact timeline without
/// clipping: the hour rows plus one row for the trailing label.
pub fn compact_fixed_height(hours: i32, metrics: &Metrics) -> f32 {
    (hours.max(1) + 1) as f32 * metrics.hour_height
}

fn finish_layout(
    items: &[TimelineItem],
    win: TimeWindow,
    all_day: AllDaySection,
    metrics: &Metrics,
    container_width: f32,
) -> TimelineLayout {
    let visible: Vec<TimelineItem> = items
        .iter()
        .filter(|item| win.intersects(item))
        .cloned()
        .collect();

    let content_width = container_width - metrics.label_width;
    let assignments = columns::pack(&visible);
    let blocks = visible
        .iter()
        .zip(assignments.iter())
        .map(|(item, assignment)| EventBlock {
            id: assignment.id,
            column: assignment.column,
            total_columns: assignment.total_columns,
            rect: geometry::block_rect(item, assignment, &win, metrics, content_width),
        })
        .collect();

    TimelineLayout {
        window: win,
        blocks,
        hour_lines: geometry::hour_lines(&win, metrics),
        all_day,
    }
}
