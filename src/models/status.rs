//! Build status presentation: color token, icon name and terminal glyph

use colored::Color;
use serde::Serialize;

use crate::client::models::BuildStatus;

/// Semantic color token for a build status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    /// Queued, waiting or not yet started
    Initialization,
    Executing,
    Success,
    Failure,
    Aborted,
    Neutral,
}

impl StatusColor {
    /// Hex value used by the web dashboard palette.
    pub fn hex(self) -> &'static str {
        match self {
            StatusColor::Initialization => "#00bcd4",
            StatusColor::Executing => "#2196f3",
            StatusColor::Success => "#4caf50",
            StatusColor::Failure => "#f44336",
            StatusColor::Aborted => "#ff9800",
            StatusColor::Neutral => "#9e9e9e",
        }
    }

    /// Closest terminal color.
    pub fn terminal(self) -> Color {
        match self {
            StatusColor::Initialization => Color::Cyan,
            StatusColor::Executing => Color::Blue,
            StatusColor::Success => Color::Green,
            StatusColor::Failure => Color::Red,
            StatusColor::Aborted => Color::Yellow,
            StatusColor::Neutral => Color::White,
        }
    }
}

/// Color token for a build status.
pub fn status_color(status: BuildStatus) -> StatusColor {
    match status {
        BuildStatus::Created | BuildStatus::Triggered | BuildStatus::NeedsApproval => {
            StatusColor::Initialization
        }
        BuildStatus::Executing => StatusColor::Executing,
        BuildStatus::Completed => StatusColor::Success,
        BuildStatus::Failed | BuildStatus::Errored => StatusColor::Failure,
        BuildStatus::Aborted => StatusColor::Aborted,
        BuildStatus::Unknown => StatusColor::Neutral,
    }
}

/// Material icon name for a build status.
pub fn status_icon(status: BuildStatus) -> &'static str {
    match status {
        BuildStatus::Created => "cloud_queue",
        BuildStatus::Triggered => "input",
        BuildStatus::NeedsApproval => "lock",
        BuildStatus::Executing => "refresh",
        BuildStatus::Completed => "done",
        BuildStatus::Failed => "error_outline",
        BuildStatus::Errored => "warning",
        BuildStatus::Aborted => "highlight_off",
        BuildStatus::Unknown => "help_outline",
    }
}

/// Single-width glyph shown next to a status in the terminal.
pub fn status_glyph(status: BuildStatus) -> &'static str {
    match status {
        BuildStatus::Created | BuildStatus::Triggered => "○",
        BuildStatus::NeedsApproval => "⧗",
        BuildStatus::Executing => "↻",
        BuildStatus::Completed => "✓",
        BuildStatus::Failed => "✗",
        BuildStatus::Errored => "⚠",
        BuildStatus::Aborted => "⊘",
        BuildStatus::Unknown => "?",
    }
}
