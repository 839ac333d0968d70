//! Cross-platform clipboard capability.
//!
//! Widgets depend only on the [`ClipboardWrite`] trait; the production
//! implementation is [`ClipboardManager`].
//!
//! # Platform-Specific Behavior
//!
//! On Linux, external clipboard tools are tried first (`wl-copy`, `xclip`,
//! `xsel`) because they keep the clipboard content alive after the process
//! exits. The `arboard` crate is the fallback, and the only path used on
//! macOS and Windows.

use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for clipboard operations.
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    /// No usable clipboard on this system.
    #[error("Clipboard not available")]
    NotAvailable,
    /// The write itself failed.
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

/// Result type for clipboard operations.
pub type ClipboardResult<T> = Result<T, ClipboardError>;

// ============================================================================
// Capability Trait
// ============================================================================

/// Write-text clipboard capability.
///
/// This is the seam widgets program against, so tests can substitute a
/// recording or failing implementation without touching the host clipboard.
pub trait ClipboardWrite {
    /// Writes `text` to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard is unavailable or the write fails.
    fn write_text(&mut self, text: &str) -> ClipboardResult<()>;
}

// ============================================================================
// Clipboard Manager
// ============================================================================

/// Cross-platform clipboard manager.
///
/// # Example
///
/// ```no_run
/// use gelatui::clipboard::{ClipboardManager, ClipboardWrite};
///
/// let mut clipboard = ClipboardManager::new();
/// if let Err(err) = clipboard.write_text("0x742d...") {
///     eprintln!("copy failed: {err}");
/// }
/// ```
#[derive(Debug)]
pub struct ClipboardManager {
    /// Whether to prefer external tools on Linux.
    prefer_external_tools: bool,
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardManager {
    /// Creates a new clipboard manager.
    ///
    /// On Linux this prefers external clipboard tools over `arboard` so the
    /// copied text persists after the application exits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefer_external_tools: true,
        }
    }

    /// Creates a clipboard manager that only uses the `arboard` crate.
    #[must_use]
    pub fn arboard_only() -> Self {
        Self {
            prefer_external_tools: false,
        }
    }

    /// Returns `true` if clipboard writes are likely to succeed.
    #[must_use]
    pub fn is_available(&self) -> bool {
        #[cfg(target_os = "linux")]
        if self.prefer_external_tools && Self::external_tool_name().is_some() {
            return true;
        }

        arboard::Clipboard::new().is_ok()
    }

    fn write_with_arboard(text: &str) -> ClipboardResult<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    /// Pipes text through the first available external tool (Linux only).
    #[cfg(target_os = "linux")]
    fn write_with_external_tool(text: &str) -> ClipboardResult<()> {
        const TOOLS: [(&str, &[&str]); 3] = [
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ];

        for (tool, args) in TOOLS {
            if Self::pipe_to_tool(tool, args, text) {
                return Ok(());
            }
        }

        Err(ClipboardError::NotAvailable)
    }

    #[cfg(target_os = "linux")]
    fn pipe_to_tool(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let child = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let Ok(mut child) = child else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };

        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }

        drop(stdin);

        child.wait().map(|s| s.success()).unwrap_or(false)
    }

    #[cfg(target_os = "linux")]
    fn external_tool_name() -> Option<&'static str> {
        use std::process::Command;

        ["wl-copy", "xclip", "xsel"].into_iter().find(|tool| {
            Command::new("which")
                .arg(tool)
                .output()
                .map(|o| o.status.success())
                .unwrap_or(false)
        })
    }
}

impl ClipboardWrite for ClipboardManager {
    fn write_text(&mut self, text: &str) -> ClipboardResult<()> {
        #[cfg(target_os = "linux")]
        if self.prefer_external_tools && Self::write_with_external_tool(text).is_ok() {
            return Ok(());
        }

        Self::write_with_arboard(text)
    }
}

// ============================================================================
// Tests
// ============================================================================
