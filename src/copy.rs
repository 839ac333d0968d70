//! Timed copy-acknowledgement state machine.
//!
//! Every wallet widget that offers a "copy address" action shows the same
//! transient acknowledgement: the copy glyph flips to a check mark, then
//! reverts on its own two seconds later. [`CopyFeedback`] captures that
//! pattern once so each widget instance can own its private copy state.
//!
//! The feedback is optimistic: the state flips to [`CopyState::Copied`] the
//! moment the action fires, whether or not the underlying clipboard write
//! succeeds. A failed write is logged at debug level and otherwise ignored;
//! no error state is ever surfaced for it.
//!
//! Time is injected as [`Instant`] values rather than read from the system
//! clock, so the countdown is driven by the host event loop's tick and tests
//! can run on a simulated clock.

use std::time::{Duration, Instant};

use crate::clipboard::ClipboardWrite;

// ============================================================================
// Constants
// ============================================================================

/// How long the copied acknowledgement stays visible.
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

// ============================================================================
// Copy State
// ============================================================================

/// Visible acknowledgement state of one copy control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyState {
    /// No acknowledgement pending; the copy glyph is shown.
    #[default]
    Idle,
    /// A copy fired recently; the check glyph is shown until the
    /// countdown elapses.
    Copied,
}

/// Caller-supplied replacement for the system clipboard.
///
/// When present, it receives the value instead of the clipboard (host
/// integrations, clipboard shims, analytics).
pub type CopyHandler<'a> = dyn FnMut(&str) + 'a;

// ============================================================================
// CopyFeedback
// ============================================================================

/// Per-instance copy acknowledgement with a single revert-timer slot.
///
/// Each rendered widget owns exactly one `CopyFeedback`; instances never
/// share state, so side-by-side widgets acknowledge independently. Dropping
/// the owning widget drops the pending countdown with it.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
/// use gelatui::clipboard::{ClipboardResult, ClipboardWrite};
/// use gelatui::copy::{CopyFeedback, CopyState, FEEDBACK_DURATION};
///
/// struct NullClipboard;
/// impl ClipboardWrite for NullClipboard {
///     fn write_text(&mut self, _text: &str) -> ClipboardResult<()> {
///         Ok(())
///     }
/// }
///
/// let mut feedback = CopyFeedback::new();
/// let t0 = Instant::now();
///
/// feedback.trigger("0x742d...", None, &mut NullClipboard, t0);
/// assert_eq!(feedback.state(), CopyState::Copied);
///
/// feedback.tick(t0 + FEEDBACK_DURATION);
/// assert_eq!(feedback.state(), CopyState::Idle);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CopyFeedback {
    /// Deadline of the pending revert, if an acknowledgement is showing.
    revert_at: Option<Instant>,
}

impl CopyFeedback {
    /// Creates a new feedback instance in the idle state.
    #[must_use]
    pub const fn new() -> Self {
        Self { revert_at: None }
    }

    /// Returns the current visible state.
    #[must_use]
    pub const fn state(&self) -> CopyState {
        if self.revert_at.is_some() {
            CopyState::Copied
        } else {
            CopyState::Idle
        }
    }

    /// Returns `true` while the copied acknowledgement is showing.
    #[must_use]
    pub const fn is_copied(&self) -> bool {
        self.revert_at.is_some()
    }

    /// Copies `value` and arms the acknowledgement countdown.
    ///
    /// Exactly one side effect runs: `handler` when supplied, otherwise a
    /// clipboard write. The state transitions to [`CopyState::Copied`]
    /// unconditionally; a clipboard failure is swallowed after a debug log.
    ///
    /// Triggering again while already copied replaces the pending deadline,
    /// so rapid repeats keep a single countdown running from the latest
    /// trigger.
    pub fn trigger(
        &mut self,
        value: &str,
        handler: Option<&mut CopyHandler<'_>>,
        clipboard: &mut dyn ClipboardWrite,
        now: Instant,
    ) {
        match handler {
            Some(handler) => handler(value),
            None => {
                if let Err(err) = clipboard.write_text(value) {
                    tracing::debug!("Clipboard write failed: {err}");
                }
            }
        }

        self.revert_at = Some(now + FEEDBACK_DURATION);
    }

    /// Advances the countdown to `now`.
    ///
    /// # Returns
    ///
    /// `true` if the acknowledgement reverted to idle on this tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.revert_at {
            Some(deadline) if now >= deadline => {
                self.revert_at = None;
                true
            }
            _ => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FailingClipboard, RecordingClipboard};

    const ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb7";

    #[test]
    fn test_trigger_transitions_to_copied_synchronously() {
        let mut feedback = CopyFeedback::new();
        let mut clipboard = RecordingClipboard::default();
        let t0 = Instant::now();

        assert_eq!(feedback.state(), CopyState::Idle);

        feedback.trigger(ADDRESS, None, &mut clipboard, t0);

        // Observable before any tick runs.
        assert_eq!(feedback.state(), CopyState::Copied);
        assert!(feedback.is_copied());
    }

    #[test]
    fn test_reverts_after_feedback_duration() {
        let mut feedback = CopyFeedback::new();
        let mut clipboard = RecordingClipboard::default();
        let t0 = Instant::now();

        feedback.trigger(ADDRESS, None, &mut clipboard, t0);

        assert!(!feedback.tick(t0 + Duration::from_millis(1999)));
        assert_eq!(feedback.state(), CopyState::Copied);

        assert!(feedback.tick(t0 + FEEDBACK_DURATION));
        assert_eq!(feedback.state(), CopyState::Idle);
    }

    #[test]
    fn test_retrigger_restarts_countdown() {
        let mut feedback = CopyFeedback::new();
        let mut clipboard = RecordingClipboard::default();
        let t0 = Instant::now();

        feedback.trigger(ADDRESS, None, &mut clipboard, t0);
        assert!(!feedback.tick(t0 + Duration::from_millis(1500)));

        // Second trigger at 1500ms re-arms the single timer slot.
        feedback.trigger(ADDRESS, None, &mut clipboard, t0 + Duration::from_millis(1500));

        assert!(!feedback.tick(t0 + Duration::from_millis(3000)));
        assert_eq!(feedback.state(), CopyState::Copied);

        assert!(feedback.tick(t0 + Duration::from_millis(3500)));
        assert_eq!(feedback.state(), CopyState::Idle);
    }

    #[test]
    fn test_handler_replaces_clipboard_write() {
        let mut feedback = CopyFeedback::new();
        let mut clipboard = RecordingClipboard::default();
        let t0 = Instant::now();

        let mut received: Vec<String> = Vec::new();
        let mut handler = |value: &str| received.push(value.to_string());

        feedback.trigger(ADDRESS, Some(&mut handler), &mut clipboard, t0);

        assert_eq!(received, vec![ADDRESS.to_string()]);
        assert!(clipboard.writes().is_empty(), "handler must bypass clipboard");
        assert_eq!(feedback.state(), CopyState::Copied);
    }

    #[test]
    fn test_clipboard_written_exactly_once_per_trigger() {
        let mut feedback = CopyFeedback::new();
        let mut clipboard = RecordingClipboard::default();
        let t0 = Instant::now();

        feedback.trigger(ADDRESS, None, &mut clipboard, t0);

        assert_eq!(clipboard.writes(), &[ADDRESS.to_string()]);
    }

    #[test]
    fn test_clipboard_failure_is_swallowed() {
        let mut feedback = CopyFeedback::new();
        let t0 = Instant::now();

        // The write rejects; the acknowledgement and its countdown proceed
        // as if it had succeeded.
        feedback.trigger(ADDRESS, None, &mut FailingClipboard, t0);
        assert_eq!(feedback.state(), CopyState::Copied);

        assert!(feedback.tick(t0 + FEEDBACK_DURATION));
        assert_eq!(feedback.state(), CopyState::Idle);
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let mut first = CopyFeedback::new();
        let mut second = CopyFeedback::new();
        let mut clipboard = RecordingClipboard::default();
        let t0 = Instant::now();

        first.trigger(ADDRESS, None, &mut clipboard, t0);

        assert_eq!(first.state(), CopyState::Copied);
        assert_eq!(second.state(), CopyState::Idle);

        second.tick(t0 + FEEDBACK_DURATION);
        assert_eq!(second.state(), CopyState::Idle);
        assert_eq!(first.state(), CopyState::Copied);
    }

    #[test]
    fn test_tick_while_idle_is_a_no_op() {
        let mut feedback = CopyFeedback::new();
        assert!(!feedback.tick(Instant::now()));
        assert_eq!(feedback.state(), CopyState::Idle);
    }
}
