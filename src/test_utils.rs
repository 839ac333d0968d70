//! Shared test fixtures and fakes.
//!
//! Mother-pattern factories and clipboard doubles reused across the test
//! modules, so individual tests don't copy-paste setup code.

#![allow(dead_code)]

use ratatui::buffer::Buffer;

use crate::clipboard::{ClipboardError, ClipboardResult, ClipboardWrite};

// ============================================================================
// Address Fixtures
// ============================================================================

pub struct AddressMother;

impl AddressMother {
    /// A checksummed Ethereum address; formats to `0x742d...bEb7`.
    pub const ETH: &'static str = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb7";

    #[must_use]
    pub fn eth() -> &'static str {
        Self::ETH
    }

    /// A 58-character Algorand-style address.
    #[must_use]
    pub fn algorand() -> String {
        "A".repeat(58)
    }
}

// ============================================================================
// Clipboard Doubles
// ============================================================================

/// Clipboard fake that records every written value.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    writes: Vec<String>,
}

impl RecordingClipboard {
    /// Values written so far, in order.
    #[must_use]
    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl ClipboardWrite for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> ClipboardResult<()> {
        self.writes.push(text.to_string());
        Ok(())
    }
}

/// Clipboard fake whose writes always fail.
#[derive(Debug, Default)]
pub struct FailingClipboard;

impl ClipboardWrite for FailingClipboard {
    fn write_text(&mut self, _text: &str) -> ClipboardResult<()> {
        Err(ClipboardError::CopyFailed(
            "clipboard access denied".to_string(),
        ))
    }
}

// ============================================================================
// Buffer Helpers
// ============================================================================

/// Flattens a terminal buffer into newline-joined row text.
#[must_use]
pub fn buffer_text(buf: &Buffer) -> String {
    let height = buf.area().height;
    let width = buf.area().width;
    (0..height)
        .map(|y| {
            (0..width)
                .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
