//! Demo application for the gelatui widgets.
//!
//! Renders two independent wallet cards, a wallet pill header, and a
//! transaction link footer inside a small event loop. Keys are dispatched
//! to the focused wallet first; a consumed key never reaches the global
//! bindings.

use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing_subscriber::EnvFilter;

use gelatui::{
    clipboard::ClipboardManager,
    config::UiConfig,
    format::format_address,
    layout::LayoutMode,
    splash::{LOGO, LoadingSplash},
    theme::{LABEL_STYLE, MUTED_COLOR},
    tui::{self, Tui},
    widgets::{TxnLink, WalletCard, WalletEvent, WalletPill, WalletState},
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Delay between ticks when no input is pending.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Addresses shown when neither the CLI nor the config provides any.
const SAMPLE_ADDRESSES: [&str; 2] = [
    "0x742d35Cc6634C0532925a3b844Bc9e7595f0bEb7",
    "0x53d284357ec70cE289D6D64134DfAc8E511c8a3D",
];

/// Transaction hash behind the footer link.
const SAMPLE_TXN_HASH: &str = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b";

/// Gelatui demo - wallet display widgets in action
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Wallet address to display (repeatable; overrides configured ones)
    #[arg(short, long)]
    address: Vec<String>,

    /// Block explorer base URL for the transaction link
    #[arg(long)]
    explorer_url: Option<String>,

    /// Skip the loading splash
    #[arg(long)]
    no_splash: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display version with ASCII art
    Version,
}

// ============================================================================
// Demo App
// ============================================================================

struct DemoApp {
    wallets: Vec<WalletState>,
    focused: usize,
    layout: LayoutMode,
    clipboard: ClipboardManager,
    explorer_url: String,
    status: Option<String>,
    exit: bool,
}

impl DemoApp {
    fn new(config: &UiConfig, width: u16) -> Self {
        let addresses: Vec<String> = if config.addresses.is_empty() {
            SAMPLE_ADDRESSES.iter().map(ToString::to_string).collect()
        } else {
            config.addresses.clone()
        };

        let wallets = addresses
            .into_iter()
            .enumerate()
            // Only the first wallet gets a logout control, so the demo also
            // shows the control-less variant.
            .map(|(i, addr)| {
                let state = WalletState::new(addr);
                if i == 0 { state.with_logout() } else { state }
            })
            .collect();

        Self {
            wallets,
            focused: 0,
            layout: LayoutMode::from_width(width),
            clipboard: ClipboardManager::new(),
            explorer_url: config.explorer_url.clone(),
            status: None,
            exit: false,
        }
    }

    fn txn_link(&self) -> TxnLink<'_> {
        TxnLink::new("Last transfer confirmed.", SAMPLE_TXN_HASH, &self.explorer_url)
    }

    /// Dispatches a key press: focused wallet first, then global bindings.
    fn handle_key(&mut self, key: KeyEvent) {
        let now = Instant::now();

        if let Some(wallet) = self.wallets.get_mut(self.focused)
            && let Some(consumed) = wallet.handle_key(key.code, &mut self.clipboard, now)
        {
            match consumed {
                WalletEvent::AddressCopied => {
                    self.status = Some("Address copied to clipboard".to_string());
                }
                WalletEvent::LogoutRequested => {
                    let short = format_address(wallet.address());
                    self.status = Some(format!("Logout requested for {short}"));
                }
            }
            // Consumed by the wallet control; global bindings never see it.
            return;
        }

        match key.code {
            event::KeyCode::Tab => {
                if !self.wallets.is_empty() {
                    self.focused = (self.focused + 1) % self.wallets.len();
                }
            }
            event::KeyCode::Char('o') => {
                let outcome = match self.txn_link().open_in_browser() {
                    Ok(()) => "Opened transaction in browser".to_string(),
                    Err(err) => format!("Could not open browser: {err}"),
                };
                self.status = Some(outcome);
            }
            event::KeyCode::Char('q') | event::KeyCode::Esc => self.exit = true,
            _ => {}
        }
    }

    fn update_layout(&mut self, width: u16) {
        self.layout = LayoutMode::from_width(width);
    }

    fn tick(&mut self, now: Instant) {
        for wallet in &mut self.wallets {
            wallet.tick(now);
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(WalletCard::HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0]);
        self.render_cards(frame, chunks[2]);
        frame.render_widget(self.txn_link(), chunks[3]);
        self.render_footer(frame, chunks[4]);
    }

    fn render_header(&mut self, frame: &mut Frame, area: Rect) {
        let pill = WalletPill::new().layout(self.layout);
        if let Some(wallet) = self.wallets.get_mut(self.focused) {
            frame.render_stateful_widget(pill, area, wallet);
        }
    }

    fn render_cards(&mut self, frame: &mut Frame, area: Rect) {
        let constraints: Vec<Constraint> = self
            .wallets
            .iter()
            .map(|_| match self.layout {
                LayoutMode::Wide => Constraint::Ratio(1, self.wallets.len().max(1) as u32),
                LayoutMode::Compact => Constraint::Length(WalletCard::HEIGHT),
            })
            .collect();

        let direction = match self.layout {
            LayoutMode::Wide => Direction::Horizontal,
            LayoutMode::Compact => Direction::Vertical,
        };

        let areas = Layout::default()
            .direction(direction)
            .constraints(constraints)
            .split(area);

        let focused = self.focused;
        for (i, (wallet, card_area)) in self.wallets.iter_mut().zip(areas.iter()).enumerate() {
            let card = WalletCard::new().focused(i == focused);
            frame.render_stateful_widget(card, *card_area, wallet);
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hints = "Tab:Focus  c:Copy  x:Logout  o:Open  q:Quit";
        let line = match &self.status {
            Some(status) => Line::from(vec![
                Span::styled(hints, LABEL_STYLE),
                Span::raw("  "),
                Span::styled(status.clone(), Style::default().fg(MUTED_COLOR)),
            ]),
            None => Line::from(Span::styled(hints, LABEL_STYLE)),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

// ============================================================================
// Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    color_eyre::install()?;

    let cli = Cli::parse();
    if let Some(Commands::Version) = cli.command {
        println!("{LOGO}");
        println!("Gelatui demo v{VERSION}");
        return Ok(());
    }

    let mut config = UiConfig::load();
    if !cli.address.is_empty() {
        config.addresses = cli.address.clone();
    }
    if let Some(explorer_url) = cli.explorer_url {
        config.explorer_url = explorer_url;
    }

    if !cli.no_splash && !config.skip_splash {
        let mut splash = LoadingSplash::new();
        if !splash.run().await? {
            return Ok(());
        }
    }

    let mut terminal = tui::init()?;
    let width = terminal.size().map(|s| s.width).unwrap_or(0);
    let mut app = DemoApp::new(&config, width);

    let result = run_app(&mut terminal, &mut app).await;

    tui::restore()?;
    result
}

/// Main event loop: draw, poll, dispatch, tick.
async fn run_app(terminal: &mut Tui, app: &mut DemoApp) -> Result<()> {
    loop {
        if app.exit {
            break;
        }

        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(1))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Resize(width, _) => app.update_layout(width),
                _ => {}
            }
        } else {
            tokio::time::sleep(TICK_RATE).await;
        }

        app.tick(Instant::now());
    }
    Ok(())
}
