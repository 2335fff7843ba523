// Access module
// Presentation-agnostic state for the calendar-access prompt and blur overlay

use serde::{Deserialize, Serialize};

/// Which variant of the access prompt to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PromptStyle {
    /// Small inline prompt for compact timelines and widgets.
    Compact,
    /// Full-height prompt for the expanded day view.
    Expanded,
}

/// Copy and icon for an access-request prompt.
///
/// Hosts render this however their UI toolkit prefers; the engine only
/// supplies consistent defaults so every surface shows the same wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPrompt {
    pub style: PromptStyle,
    /// Symbolic icon name, resolved by the host's icon set.
    pub icon: String,
    pub title: String,
    pub message: String,
    pub button_label: String,
}

impl AccessPrompt {
    /// Generic prompt with placeholder wording.
    pub fn new(style: PromptStyle) -> Self {
        Self {
            style,
            icon: "lock.fill".to_string(),
            title: "Access Required".to_string(),
            message: "Grant access to view this content".to_string(),
            button_label: "Grant Access".to_string(),
        }
    }

    /// Preset wording for the calendar-permission prompt.
    pub fn calendar(style: PromptStyle) -> Self {
        let (title, button_label) = match style {
            PromptStyle::Compact => ("See your schedule", "Grant Access"),
            PromptStyle::Expanded => ("See Your Schedule", "Grant Calendar Access"),
        };
        Self {
            style,
            icon: "calendar.badge.checkmark".to_string(),
            title: title.to_string(),
            message: "Allow calendar access to show your events".to_string(),
            button_label: button_label.to_string(),
        }
    }
}

/// Blur-overlay parameters for an access-restricted timeline.
///
/// When restricted, the host blurs the timeline content by `blur_radius`
/// and shows an [`AccessPrompt`] on top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RestrictedOverlay {
    pub restricted: bool,
    pub blur_radius: f32,
}

impl Default for RestrictedOverlay {
    fn default() -> Self {
        Self {
            restricted: false,
            blur_radius: 3.0,
        }
    }
}

impl RestrictedOverlay {
    pub fn restricted(blur_radius: f32) -> Self {
        Self {
            restricted: true,
            blur_radius,
        }
    }

    /// Blur to apply to the content right now; zero when access is granted.
    pub fn effective_blur(&self) -> f32 {
        if self.restricted {
            self.blur_radius
        } else {
            0.0
        }
    }

    pub fn shows_prompt(&self) -> bool {
        self.restricted
    }
}
