//! Transaction link widget.
//!
//! A one-line notice pointing at a transaction on a block explorer, with an
//! action to open the link in the system browser.

use std::io;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};

/// Label rendered for the link itself.
const LINK_LABEL: &str = "View transaction [>]";

// ============================================================================
// TxnLink Widget
// ============================================================================

/// Message line with an explorer link for one transaction hash.
///
/// # Example
///
/// ```text
/// Swap confirmed View transaction [>]
/// ```
///
/// # Usage
///
/// ```
/// use gelatui::widgets::TxnLink;
///
/// let link = TxnLink::new("Swap confirmed", "0xabc123", "https://explorer.inksepolia.com");
/// assert_eq!(link.url(), "https://explorer.inksepolia.com/tx/0xabc123");
/// ```
#[derive(Debug, Clone)]
pub struct TxnLink<'a> {
    message: &'a str,
    hash: &'a str,
    explorer_url: &'a str,
}

impl<'a> TxnLink<'a> {
    /// Creates a link for `hash` on the explorer at `explorer_url`.
    #[must_use]
    pub const fn new(message: &'a str, hash: &'a str, explorer_url: &'a str) -> Self {
        Self {
            message,
            hash,
            explorer_url,
        }
    }

    /// The full explorer URL for this transaction.
    ///
    /// A trailing slash on the explorer base is tolerated.
    #[must_use]
    pub fn url(&self) -> String {
        let base = self.explorer_url.trim_end_matches('/');
        format!("{base}/tx/{}", self.hash)
    }

    /// The rendered line.
    #[must_use]
    pub fn to_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(self.message.to_string(), Style::default().fg(MUTED_COLOR)),
            Span::raw(" "),
            Span::styled(
                LINK_LABEL,
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ])
    }

    /// Opens the transaction in the system browser.
    ///
    /// # Errors
    ///
    /// Returns an error if no browser could be launched.
    pub fn open_in_browser(&self) -> io::Result<()> {
        open::that(self.url())
    }
}

impl Widget for TxnLink<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let line = self.to_line();
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
