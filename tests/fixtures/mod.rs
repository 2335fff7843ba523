// Test fixtures - reusable scenario data
// Mirrors the preview scenarios used while developing the timeline views

use chrono::{DateTime, Local, TimeZone};
use timeline_grid::models::item::{ItemId, TimelineItem};

/// Jan 20, 2025 at the given time; the reference day for all fixtures.
pub fn at(hour: u32, minute: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 1, 20, hour, minute, 0).unwrap()
}

/// Three well-spaced meetings through a workday; no conflicts.
pub fn sample_items() -> Vec<TimelineItem> {
    vec![
        TimelineItem::builder(ItemId(1))
            .title("Team Meeting")
            .start(at(10, 0))
            .end(at(11, 0))
            .location("Conference Room A")
            .color("#3366CC")
            .primary(true)
            .build()
            .unwrap(),
        TimelineItem::builder(ItemId(2))
            .title("Lunch")
            .start(at(12, 0))
            .end(at(13, 0))
            .location("Cafeteria")
            .color("#33A852")
            .build()
            .unwrap(),
        TimelineItem::builder(ItemId(3))
            .title("Code Review")
            .start(at(14, 30))
            .end(at(15, 30))
            .color("#9933CC")
            .build()
            .unwrap(),
    ]
}

/// A newly created event dropped on top of two existing meetings.
pub fn conflicting_items() -> Vec<TimelineItem> {
    vec![
        TimelineItem::builder(ItemId(1))
            .title("New Event")
            .start(at(10, 30))
            .end(at(11, 30))
            .location("Main Office")
            .color("#CC4433")
            .primary(true)
            .build()
            .unwrap(),
        TimelineItem::builder(ItemId(2))
            .title("Existing Meeting")
            .start(at(10, 0))
            .end(at(11, 0))
            .location("Room 101")
            .color("#CC3333")
            .build()
            .unwrap(),
        TimelineItem::builder(ItemId(3))
            .title("Another Meeting")
            .start(at(11, 0))
            .end(at(12, 0))
            .color("#CC8833")
            .build()
            .unwrap(),
    ]
}

/// Two all-day banners plus one short timed standup.
pub fn all_day_items() -> Vec<TimelineItem> {
    vec![
        TimelineItem::builder(ItemId(1))
            .title("Company Retreat")
            .start(at(0, 0))
            .end(at(23, 59))
            .all_day(true)
            .color("#33AACC")
            .build()
            .unwrap(),
        TimelineItem::builder(ItemId(2))
            .title("Holiday")
            .start(at(0, 0))
            .end(at(23, 59))
            .all_day(true)
            .color("#CC6699")
            .build()
            .unwrap(),
        TimelineItem::builder(ItemId(3))
            .title("Team Standup")
            .start(at(9, 0))
            .end(at(9, 30))
            .primary(true)
            .build()
            .unwrap(),
    ]
}
