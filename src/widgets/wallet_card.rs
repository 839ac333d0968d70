//! Wallet card widget.
//!
//! A bordered card showing a wallet's shortened address with a copy control
//! and, when enabled, a logout control.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget},
};

use crate::format::format_address;
use crate::theme::{
    BORDER_STYLE, DANGER_COLOR, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE, LABEL_STYLE,
    MUTED_COLOR, PRIMARY_COLOR, SUCCESS_COLOR,
};
use crate::widgets::state::WalletState;

// ============================================================================
// WalletCard Widget
// ============================================================================

/// Bordered wallet display with copy and logout controls.
///
/// # Example
///
/// ```text
/// ┌─ Your Wallet ──────────────┐
/// │ 0x742d...bEb7  [c]         │
/// │ c:Copy  x:Logout           │
/// └────────────────────────────┘
/// ```
///
/// # Usage
///
/// ```ignore
/// use gelatui::widgets::{WalletCard, WalletState};
///
/// let card = WalletCard::new().focused(true);
/// let mut state = WalletState::new("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb7");
/// frame.render_stateful_widget(card, area, &mut state);
/// ```
#[derive(Debug, Clone)]
pub struct WalletCard<'a> {
    title: &'a str,
    focused: bool,
}

impl Default for WalletCard<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> WalletCard<'a> {
    /// Title shown when none is supplied.
    pub const DEFAULT_TITLE: &'static str = "Your Wallet";

    /// Rows the card occupies: two content lines plus borders.
    pub const HEIGHT: u16 = 4;

    /// Creates a card with the default title.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            title: Self::DEFAULT_TITLE,
            focused: false,
        }
    }

    /// Overrides the card title.
    #[must_use]
    pub const fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Marks the card as focused, changing its border treatment.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Content lines for the card interior.
    ///
    /// Exposed separately from rendering so tests can assert on content
    /// without a terminal buffer.
    #[must_use]
    pub fn content_lines(&self, state: &WalletState) -> Vec<Line<'static>> {
        let icon_style = if state.is_copied() {
            Style::default().fg(SUCCESS_COLOR)
        } else {
            Style::default().fg(MUTED_COLOR)
        };

        let address_line = Line::from(vec![
            Span::styled(
                format_address(state.address()),
                Style::default().fg(PRIMARY_COLOR),
            ),
            Span::raw("  "),
            Span::styled(state.copy_icon().to_string(), icon_style),
        ]);

        let mut controls = vec![Span::styled("c:Copy", LABEL_STYLE)];
        if state.logout_enabled() {
            controls.push(Span::raw("  "));
            controls.push(Span::styled(
                "x:Logout",
                Style::default().fg(DANGER_COLOR),
            ));
        }

        vec![address_line, Line::from(controls)]
    }

    fn bordered_block(&self) -> Block<'a> {
        if self.focused {
            Block::default()
                .title(format!(" {} ", self.title))
                .title_alignment(Alignment::Left)
                .title_style(FOCUSED_TITLE_STYLE)
                .borders(Borders::ALL)
                .border_set(border::DOUBLE)
                .border_style(FOCUSED_BORDER_STYLE)
        } else {
            Block::default()
                .title(format!(" {} ", self.title))
                .title_alignment(Alignment::Left)
                .title_style(LABEL_STYLE)
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(BORDER_STYLE)
        }
    }
}

impl StatefulWidget for WalletCard<'_> {
    type State = WalletState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut WalletState) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let block = self.bordered_block();
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.content_lines(state)).render(inner, buf);
    }
}

// ============================================================================
// Tests
// ============================================================================
