//! Theme and styling constants shared by the wallet widgets.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - addresses and focused elements.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Success indicator color - the copied check glyph.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Destructive action color - the logout control.
pub const DANGER_COLOR: Color = Color::Red;

/// Muted text color - labels and separators.
pub const MUTED_COLOR: Color = Color::Gray;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused widgets.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for the focused widget.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for the focused widget.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for card/section labels.
pub const LABEL_STYLE: Style = Style::new().fg(MUTED_COLOR).add_modifier(Modifier::BOLD);
