//! Loading splash screen.
//!
//! Full-screen centered logo with a slow pulse animation, shown while the
//! host application finishes starting up. Any key skips the splash; Ctrl+C
//! exits. Non-interactive environments (no TTY) skip it entirely.

use std::f64::consts::TAU;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, poll, read};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// ASCII logo shown on the splash and in `version` output.
pub const LOGO: &str = r#"
 ██████╗ ███████╗██╗      █████╗ ████████╗██╗   ██╗██╗
██╔════╝ ██╔════╝██║     ██╔══██╗╚══██╔══╝██║   ██║██║
██║  ███╗█████╗  ██║     ███████║   ██║   ██║   ██║██║
██║   ██║██╔══╝  ██║     ██╔══██║   ██║   ██║   ██║██║
╚██████╔╝███████╗███████╗██║  ██║   ██║   ╚██████╔╝██║
 ╚═════╝ ╚══════╝╚══════╝╚═╝  ╚═╝   ╚═╝    ╚═════╝ ╚═╝
"#;

/// One full fade-out/fade-in cycle of the pulse.
pub const PULSE_PERIOD: Duration = Duration::from_millis(2500);

/// Frame delay targeting ~60 FPS.
const FRAME_DURATION: Duration = Duration::from_millis(16);

// ============================================================================
// Animation
// ============================================================================

/// Splash animation phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplashPhase {
    /// Logo pulsing, waiting for the period to elapse or a key press.
    Pulsing,
    /// Splash finished, ready to hand over to the application.
    Complete,
}

/// Pulse intensity in `[0.0, 1.0]` for a given elapsed time.
///
/// Starts dark, peaks mid-period, returns to dark at the period boundary.
#[must_use]
pub fn pulse_intensity(elapsed: Duration) -> f64 {
    let t = elapsed.as_secs_f64() / PULSE_PERIOD.as_secs_f64();
    0.5 - 0.5 * (TAU * t.fract()).cos()
}

/// Maps a pulse intensity to the logo color.
#[must_use]
fn pulse_color(intensity: f64) -> Color {
    let ramp = |lo: f64, hi: f64| (lo + (hi - lo) * intensity).round() as u8;
    Color::Rgb(ramp(40.0, 0.0), ramp(60.0, 230.0), ramp(70.0, 230.0))
}

// ============================================================================
// LoadingSplash
// ============================================================================

/// Splash screen state.
pub struct LoadingSplash {
    /// Time when the splash started.
    start_time: Instant,
    /// Current animation phase.
    phase: SplashPhase,
}

impl Default for LoadingSplash {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingSplash {
    /// Creates a splash starting now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: SplashPhase::Pulsing,
        }
    }

    /// Returns the current animation phase.
    #[must_use]
    pub const fn phase(&self) -> &SplashPhase {
        &self.phase
    }

    /// Draws the centered, pulsing logo.
    pub fn render(&self, frame: &mut Frame) {
        let logo_lines: Vec<&str> = LOGO.lines().filter(|l| !l.is_empty()).collect();
        let logo_height = logo_lines.len() as u16 + 2;

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(logo_height),
                Constraint::Min(0),
            ])
            .split(frame.area());

        let color = pulse_color(pulse_intensity(self.start_time.elapsed()));

        let mut lines: Vec<Line> = logo_lines
            .iter()
            .map(|l| Line::from(Span::styled(*l, Style::default().fg(color))))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("v{VERSION}"),
            Style::default().fg(Color::DarkGray),
        )));

        let logo = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(logo, vertical[1]);
    }

    /// Runs the splash until one pulse period elapses or a key skips it.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - continue to the application
    /// * `Ok(false)` - exit (user pressed Ctrl+C)
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be driven.
    pub async fn run(&mut self) -> Result<bool> {
        if !tui::is_interactive() {
            self.phase = SplashPhase::Complete;
            return Ok(true);
        }

        let mut terminal = tui::init()?;

        let outcome = loop {
            if self.start_time.elapsed() >= PULSE_PERIOD {
                break true;
            }

            if poll(Duration::from_millis(0))?
                && let Event::Key(KeyEvent {
                    code, modifiers, ..
                }) = read()?
            {
                match code {
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        break false;
                    }
                    _ => break true,
                }
            }

            terminal.draw(|frame| self.render(frame))?;
            tokio::time::sleep(FRAME_DURATION).await;
        };

        tui::restore()?;
        self.phase = SplashPhase::Complete;
        Ok(outcome)
    }
}

// ============================================================================
// Tests
// ============================================================================
