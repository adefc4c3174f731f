//! Severity tier from the service's decorated level label.
//!
//! The label is opaque human-readable text; the tier is carried only by a
//! marker glyph embedded somewhere in it. Detection is plain substring
//! containment, checked red, then yellow, then green. `call_now` forces red
//! regardless of the label.

use serde::{Deserialize, Serialize};

pub const RED_MARKER: &str = "🔴";
pub const YELLOW_MARKER: &str = "🟡";
pub const GREEN_MARKER: &str = "🟢";

/// Severity tier signalled by a marker glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Red,
    Yellow,
    Green,
}

/// Color theme of the result card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Green,
    Yellow,
    Red,
    #[default]
    Neutral,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Neutral => "neutral",
        }
    }
}

impl From<Option<Severity>> for Theme {
    fn from(severity: Option<Severity>) -> Self {
        match severity {
            Some(Severity::Red) => Self::Red,
            Some(Severity::Yellow) => Self::Yellow,
            Some(Severity::Green) => Self::Green,
            None => Self::Neutral,
        }
    }
}

/// Marker found in the label, if any.
pub fn marker_severity(level: &str) -> Option<Severity> {
    if level.contains(RED_MARKER) {
        Some(Severity::Red)
    } else if level.contains(YELLOW_MARKER) {
        Some(Severity::Yellow)
    } else if level.contains(GREEN_MARKER) {
        Some(Severity::Green)
    } else {
        None
    }
}

/// Effective tier for a response: red when `call_now` is set, otherwise the
/// label's marker.
pub fn classify(level: Option<&str>, call_now: bool) -> Option<Severity> {
    if call_now {
        return Some(Severity::Red);
    }
    level.and_then(marker_severity)
}

/// Card theme for a response.
pub fn theme_for(level: Option<&str>, call_now: bool) -> Theme {
    classify(level, call_now).into()
}
