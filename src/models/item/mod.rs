// Item module
// Timeline event view-model consumed by the layout engine

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::is_same_day;

/// Stable identifier for a timeline item. Caller-assigned and only required
/// to be unique within a single layout call; a monotonic u64 serializes
/// easily and can evolve to UUIDs later if needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u64);

/// Validation errors raised when constructing a [`TimelineItem`].
///
/// The layout engine itself is total and never validates; these checks only
/// run at construction so malformed intervals cannot enter the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("item title cannot be empty")]
    EmptyTitle,
    #[error("item end time must not be before start time")]
    EndBeforeStart,
    #[error("timed items must start and end on the same day")]
    CrossesMidnight,
    #[error("color must be in hex format (#RRGGBB or #RGB)")]
    InvalidColor,
}

/// A calendar event to be laid out on the timeline grid.
///
/// This is a view model: the calendar-data adapter builds items from its
/// event store per render pass, and the engine borrows them without ever
/// mutating or retaining them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub id: ItemId,
    pub title: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    /// All-day items render in a separate section above the hour grid in the
    /// day view and are skipped entirely by the compact view.
    pub all_day: bool,
    /// Marks the highlighted/selected event. The first primary item anchors
    /// the visible hour window.
    pub primary: bool,
    pub location: Option<String>,
    /// Accent color in hex format (#RRGGBB or #RGB).
    pub color: Option<String>,
}

impl TimelineItem {
    /// Create a new item with required fields.
    ///
    /// # Arguments
    /// * `id` - Caller-assigned identifier, unique within a layout call
    /// * `title` - Item title (required, non-empty)
    /// * `start` - Start time
    /// * `end` - End time; must not be before `start`. A zero-length item is
    ///   valid and renders as a minimum-height block.
    ///
    /// # Examples
    /// ```
    /// use timeline_grid::models::item::{ItemId, TimelineItem};
    /// use chrono::{Local, TimeZone};
    ///
    /// let start = Local.with_ymd_and_hms(2025, 1, 20, 10, 0, 0).unwrap();
    /// let end = start + chrono::Duration::hours(1);
    /// let item = TimelineItem::new(ItemId(1), "Team Meeting", start, end).unwrap();
    /// ```
    pub fn new(
        id: ItemId,
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self, ItemError> {
        let item = Self {
            id,
            title: title.into(),
            start,
            end,
            all_day: false,
            primary: false,
            location: None,
            color: None,
        };
        item.validate()?;
        Ok(item)
    }

    /// Create a builder for constructing items with optional fields.
    pub fn builder(id: ItemId) -> TimelineItemBuilder {
        TimelineItemBuilder::new(id)
    }

    /// Validate the item.
    pub fn validate(&self) -> Result<(), ItemError> {
        if self.title.trim().is_empty() {
            return Err(ItemError::EmptyTitle);
        }

        if self.end < self.start {
            return Err(ItemError::EndBeforeStart);
        }

        // Cross-midnight spans are undefined for the hour-window math, so a
        // timed item must stay within one calendar day. All-day items are
        // exempt; they never enter the hour grid.
        if !self.all_day && !is_same_day(self.start, self.end) {
            return Err(ItemError::CrossesMidnight);
        }

        if let Some(ref color) = self.color {
            if !color.starts_with('#') || (color.len() != 7 && color.len() != 4) {
                return Err(ItemError::InvalidColor);
            }
        }

        Ok(())
    }

    /// Get the duration of the item.
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }

    /// Whether this item's half-open interval [start, end) overlaps another's.
    ///
    /// Two intervals are disjoint when one ends at or before the other
    /// starts, so items meeting exactly at a boundary do not overlap and two
    /// zero-length items at the same instant do not overlap each other.
    pub fn overlaps(&self, other: &TimelineItem) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Builder for creating items with optional fields.
pub struct TimelineItemBuilder {
    id: ItemId,
    title: Option<String>,
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,
    all_day: bool,
    primary: bool,
    location: Option<String>,
    color: Option<String>,
}

/// Errors from [`TimelineItemBuilder::build`]: a missing required field or a
/// validation failure on the assembled item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("item title is required")]
    MissingTitle,
    #[error("item start time is required")]
    MissingStart,
    #[error("item end time is required")]
    MissingEnd,
    #[error(transparent)]
    Invalid(#[from] ItemError),
}

impl TimelineItemBuilder {
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            title: None,
            start: None,
            end: None,
            all_day: false,
            primary: false,
            location: None,
            color: None,
        }
    }

    /// Set the item title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the start time.
    pub fn start(mut self, start: DateTime<Local>) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end time.
    pub fn end(mut self, end: DateTime<Local>) -> Self {
        self.end = Some(end);
        self
    }

    /// Set as all-day item.
    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Mark as the primary/highlighted item.
    pub fn primary(mut self, primary: bool) -> Self {
        self.primary = primary;
        self
    }

    /// Set the location shown below the title.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the accent color (hex format).
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Build the item.
    pub fn build(self) -> Result<TimelineItem, BuildError> {
        let title = self.title.ok_or(BuildError::MissingTitle)?;
        let start = self.start.ok_or(BuildError::MissingStart)?;
        let end = self.end.ok_or(BuildError::MissingEnd)?;

        let item = TimelineItem {
            id: self.id,
            title,
            start,
            end,
            all_day: self.all_day,
            primary: self.primary,
            location: self.location,
            color: self.color,
        };

        item.validate()?;
        Ok(item)
    }
}
