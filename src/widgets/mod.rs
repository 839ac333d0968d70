//! Wallet display widgets.
//!
//! # Module Structure
//!
//! - [`state`]: Per-instance wallet state shared by the display widgets
//! - [`wallet_card`]: Bordered card with copy and logout controls
//! - [`wallet_pill`]: Inline one-line wallet display
//! - [`tx_link`]: Transaction link line with browser-open action
//!
//! # Example Usage
//!
//! ```ignore
//! use gelatui::widgets::{TxnLink, WalletCard, WalletPill, WalletState};
//!
//! let mut wallet = WalletState::new("0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb7");
//! frame.render_stateful_widget(WalletCard::new(), card_area, &mut wallet);
//! frame.render_stateful_widget(WalletPill::new(), pill_area, &mut wallet);
//! frame.render_widget(TxnLink::new("Sent", "0xabc", "https://etherscan.io"), link_area);
//! ```

pub mod state;
pub mod tx_link;
pub mod wallet_card;
pub mod wallet_pill;

pub use state::{COPIED_ICON, COPY_ICON, LOGOUT_ICON, WalletEvent, WalletState};
pub use tx_link::TxnLink;
pub use wallet_card::WalletCard;
pub use wallet_pill::WalletPill;
