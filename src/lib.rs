//! Gelatui - wallet display widgets for Ratatui terminal UIs.
//!
//! A small component library for terminal applications that show blockchain
//! wallet addresses: shortened-address formatting, copy-to-clipboard with a
//! transient acknowledgement, transaction links, and a loading splash.
//!
//! # Module Structure
//!
//! - [`format`]: Pure address shortening helpers
//! - [`copy`]: Timed copy-acknowledgement state machine
//! - [`clipboard`]: Cross-platform clipboard capability
//! - [`widgets`]: Wallet card, wallet pill, and transaction link widgets
//! - [`layout`]: Compact/wide layout mode from terminal width
//! - [`splash`]: Pulsing loading splash
//! - [`theme`]: Shared color and style constants
//! - [`config`]: Persisted demo settings
//! - [`tui`]: Terminal setup/teardown plumbing
//!
//! # Example
//!
//! ```
//! use gelatui::format::truncate_address;
//! use gelatui::widgets::WalletState;
//!
//! let wallet = WalletState::new("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb7");
//! assert_eq!(truncate_address(wallet.address()), "0x742d...bEb7");
//! ```

pub mod clipboard;
pub mod config;
pub mod copy;
pub mod format;
pub mod layout;
pub mod splash;
pub mod theme;
pub mod tui;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export the types most hosts need at the crate root.
pub use clipboard::{ClipboardManager, ClipboardWrite};
pub use copy::{CopyFeedback, CopyState, FEEDBACK_DURATION};
pub use format::{format_address, truncate_address};
pub use layout::LayoutMode;
pub use widgets::{TxnLink, WalletCard, WalletEvent, WalletPill, WalletState};
