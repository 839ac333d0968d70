//! Wallet pill widget.
//!
//! A single-line, inline wallet display for headers and status rows. Shows
//! the truncated address with a copy glyph and, when enabled, a logout
//! segment behind a separator. In compact layouts the logout label collapses
//! to its glyph.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::StatefulWidget,
};

use crate::format::truncate_address;
use crate::layout::LayoutMode;
use crate::theme::{DANGER_COLOR, MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR};
use crate::widgets::state::{LOGOUT_ICON, WalletState};

/// Separator between the address segment and the logout segment.
const SEGMENT_SEPARATOR: &str = " │ ";

// ============================================================================
// WalletPill Widget
// ============================================================================

/// Inline one-line wallet display.
///
/// # Example
///
/// ```text
/// 0x742d...bEb7 [c] │ [x] Logout
/// ```
///
/// # Usage
///
/// ```ignore
/// use gelatui::layout::LayoutMode;
/// use gelatui::widgets::{WalletPill, WalletState};
///
/// let pill = WalletPill::new().layout(LayoutMode::Wide);
/// let mut state = WalletState::new("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb7")
///     .with_logout();
/// frame.render_stateful_widget(pill, area, &mut state);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WalletPill {
    layout: LayoutMode,
}

impl WalletPill {
    /// Creates a pill in the compact layout.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layout: LayoutMode::Compact,
        }
    }

    /// Sets the layout mode; the wide layout spells out the logout label.
    #[must_use]
    pub const fn layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    /// The rendered line.
    #[must_use]
    pub fn to_line(&self, state: &WalletState) -> Line<'static> {
        let icon_style = if state.is_copied() {
            Style::default().fg(SUCCESS_COLOR)
        } else {
            Style::default().fg(MUTED_COLOR)
        };

        let mut spans = vec![
            Span::styled(
                truncate_address(state.address()),
                Style::default().fg(PRIMARY_COLOR),
            ),
            Span::raw(" "),
            Span::styled(state.copy_icon().to_string(), icon_style),
        ];

        if state.logout_enabled() {
            let logout_label = if self.layout.is_wide() {
                format!("{LOGOUT_ICON} Logout")
            } else {
                LOGOUT_ICON.to_string()
            };
            spans.push(Span::styled(
                SEGMENT_SEPARATOR,
                Style::default().fg(MUTED_COLOR),
            ));
            spans.push(Span::styled(logout_label, Style::default().fg(DANGER_COLOR)));
        }

        Line::from(spans)
    }
}

impl StatefulWidget for WalletPill {
    type State = WalletState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut WalletState) {
        if area.height == 0 {
            return;
        }

        let line = self.to_line(state);
        let y = area.y;
        let mut x = area.x;

        for span in line.spans.iter() {
            for ch in span.content.as_ref().chars() {
                if x >= area.x + area.width {
                    return;
                }
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(ch).set_style(span.style);
                }
                x += 1;
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
