//! Shared state for wallet display widgets.
//!
//! A [`WalletState`] is the identity and copy-acknowledgement state of one
//! rendered wallet display. [`WalletCard`](super::WalletCard) and
//! [`WalletPill`](super::WalletPill) are two visual forms over the same
//! state type, so an application can switch between them without losing the
//! instance's state.

use std::time::Instant;

use crossterm::event::KeyCode;

use crate::clipboard::ClipboardWrite;
use crate::copy::{CopyFeedback, CopyHandler, CopyState};

// ============================================================================
// Control Glyphs
// ============================================================================

/// Glyph shown on an idle copy control.
pub const COPY_ICON: &str = "[c]";

/// Glyph shown while the copied acknowledgement is active.
pub const COPIED_ICON: &str = "[v]";

/// Glyph shown on the logout control.
pub const LOGOUT_ICON: &str = "[x]";

// ============================================================================
// Wallet Events
// ============================================================================

/// Activation emitted by a wallet control.
///
/// A `Some(WalletEvent)` from [`WalletState::handle_key`] means the key was
/// consumed; callers must stop dispatching it so enclosing handlers do not
/// also react to the same press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletEvent {
    /// The copy control fired and the acknowledgement is showing.
    AddressCopied,
    /// The logout control fired; the host decides what logging out means.
    LogoutRequested,
}

// ============================================================================
// WalletState
// ============================================================================

/// Per-instance state of one wallet display.
///
/// Each rendered wallet owns its state exclusively; two side-by-side
/// widgets never share an acknowledgement.
///
/// # Example
///
/// ```ignore
/// use gelatui::widgets::{WalletCard, WalletState};
///
/// let mut state = WalletState::new("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb7")
///     .with_logout();
///
/// // frame.render_stateful_widget(WalletCard::new(), area, &mut state);
/// ```
#[derive(Debug, Clone)]
pub struct WalletState {
    /// The full, unformatted address this instance displays.
    address: String,
    /// Copy acknowledgement owned by this instance.
    feedback: CopyFeedback,
    /// Whether the logout control is rendered and accepts activation.
    logout_enabled: bool,
}

impl WalletState {
    /// Creates state for displaying `address`.
    ///
    /// No logout control is shown unless [`with_logout`](Self::with_logout)
    /// is called.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            feedback: CopyFeedback::new(),
            logout_enabled: false,
        }
    }

    /// Enables the logout control.
    #[must_use]
    pub fn with_logout(mut self) -> Self {
        self.logout_enabled = true;
        self
    }

    /// Returns the full address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the current copy acknowledgement state.
    #[must_use]
    pub const fn copy_state(&self) -> CopyState {
        self.feedback.state()
    }

    /// Returns `true` while the copied acknowledgement is showing.
    #[must_use]
    pub const fn is_copied(&self) -> bool {
        self.feedback.is_copied()
    }

    /// Returns `true` if the logout control is rendered.
    #[must_use]
    pub const fn logout_enabled(&self) -> bool {
        self.logout_enabled
    }

    /// Glyph for the copy control in the current state.
    #[must_use]
    pub const fn copy_icon(&self) -> &'static str {
        if self.feedback.is_copied() {
            COPIED_ICON
        } else {
            COPY_ICON
        }
    }

    /// Copies this instance's address and shows the acknowledgement.
    ///
    /// `handler`, when supplied, receives the address instead of the
    /// clipboard. See [`CopyFeedback::trigger`] for the full contract.
    pub fn trigger_copy(
        &mut self,
        handler: Option<&mut CopyHandler<'_>>,
        clipboard: &mut dyn ClipboardWrite,
        now: Instant,
    ) {
        self.feedback.trigger(&self.address, handler, clipboard, now);
    }

    /// Advances the acknowledgement countdown to `now`.
    ///
    /// # Returns
    ///
    /// `true` if the acknowledgement reverted on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.feedback.tick(now)
    }

    /// Dispatches a key press against this wallet's controls.
    ///
    /// `c` and `Enter` activate the copy control; `x` activates the logout
    /// control when it is enabled. A consumed key returns `Some`, and the
    /// caller must not forward it to enclosing handlers.
    pub fn handle_key(
        &mut self,
        key: KeyCode,
        clipboard: &mut dyn ClipboardWrite,
        now: Instant,
    ) -> Option<WalletEvent> {
        match key {
            KeyCode::Char('c') | KeyCode::Enter => {
                self.trigger_copy(None, clipboard, now);
                Some(WalletEvent::AddressCopied)
            }
            KeyCode::Char('x') if self.logout_enabled => Some(WalletEvent::LogoutRequested),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingClipboard;

    #[test]
    fn test_copy_key_is_consumed_and_copies() {
        let mut state = WalletState::new("ADDR_AAAAAAAAAAAAAAAA");
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();

        let event = state.handle_key(KeyCode::Char('c'), &mut clipboard, now);

        assert_eq!(event, Some(WalletEvent::AddressCopied));
        assert_eq!(clipboard.writes(), &["ADDR_AAAAAAAAAAAAAAAA".to_string()]);
        assert_eq!(state.copy_state(), CopyState::Copied);
    }

    #[test]
    fn test_logout_key_requires_enabled_control() {
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();

        let mut without_logout = WalletState::new("ADDR");
        assert_eq!(
            without_logout.handle_key(KeyCode::Char('x'), &mut clipboard, now),
            None,
            "a hidden control must not consume the key"
        );

        let mut with_logout = WalletState::new("ADDR").with_logout();
        assert_eq!(
            with_logout.handle_key(KeyCode::Char('x'), &mut clipboard, now),
            Some(WalletEvent::LogoutRequested)
        );
        assert!(clipboard.writes().is_empty());
    }

    #[test]
    fn test_unrelated_keys_propagate() {
        let mut state = WalletState::new("ADDR").with_logout();
        let mut clipboard = RecordingClipboard::default();

        for key in [KeyCode::Char('q'), KeyCode::Tab, KeyCode::Esc] {
            assert_eq!(state.handle_key(key, &mut clipboard, Instant::now()), None);
        }
        assert_eq!(state.copy_state(), CopyState::Idle);
    }

    #[test]
    fn test_copy_icon_follows_state() {
        let mut state = WalletState::new("ADDR");
        let mut clipboard = RecordingClipboard::default();
        let t0 = Instant::now();

        assert_eq!(state.copy_icon(), COPY_ICON);

        state.trigger_copy(None, &mut clipboard, t0);
        assert_eq!(state.copy_icon(), COPIED_ICON);

        state.tick(t0 + crate::copy::FEEDBACK_DURATION);
        assert_eq!(state.copy_icon(), COPY_ICON);
    }

    #[test]
    fn test_side_by_side_instances_stay_independent() {
        let mut first = WalletState::new("0x1111111111111111111111111111111111111111");
        let mut second = WalletState::new("0x2222222222222222222222222222222222222222");
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();

        first.trigger_copy(None, &mut clipboard, now);

        assert!(first.is_copied());
        assert!(!second.is_copied());
        assert_eq!(
            clipboard.writes(),
            &["0x1111111111111111111111111111111111111111".to_string()]
        );
    }
}
