//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::{info, warn};

use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::BudgetInputs;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Mouse reporting for the whole terminal
///
/// Pointer events are delivered wherever they happen on screen for as
/// long as the guard lives, so a slider drag ends on release even when
/// the pointer has left the slider.
pub struct MouseCapture {
    _private: (),
}

impl MouseCapture {
    pub fn enable() -> BudgetResult<Self> {
        execute!(io::stdout(), EnableMouseCapture)
            .map_err(|e| BudgetError::Tui(format!("Failed to enable mouse capture: {}", e)))?;
        Ok(Self { _private: () })
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), DisableMouseCapture) {
            warn!(error = %e, "failed to disable mouse capture");
        }
    }
}

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic info
        let _ = execute!(io::stdout(), DisableMouseCapture);
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    // Enable raw mode and enter alternate screen
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Create terminal
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

/// Internal implementation of terminal restoration
fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Draw a frame, then put focus back on the input being edited
///
/// Restoring focus can only happen once the new element list exists, so
/// a change in focus costs a second draw.
fn draw(terminal: &mut Tui, app: &mut App) -> Result<()> {
    terminal.draw(|frame| super::views::render(frame, app))?;
    if app.focus.restore_focus() {
        terminal.draw(|frame| super::views::render(frame, app))?;
    }
    Ok(())
}

/// Run the TUI application
pub fn run_tui(settings: &Settings, inputs: BudgetInputs) -> Result<()> {
    // Initialize terminal
    let mut terminal = init_terminal()?;
    let mouse = match MouseCapture::enable() {
        Ok(mouse) => mouse,
        Err(e) => {
            restore_terminal()?;
            return Err(e.into());
        }
    };

    let mut app = App::new(settings, inputs);
    info!(
        total_income = app.inputs.total_income().dollars(),
        ratio = %app.inputs.rent_ratio,
        "starting TUI"
    );

    let result = run_loop(&mut terminal, &mut app);

    // Mouse capture goes first so release events stop before raw mode ends
    drop(mouse);
    restore_terminal()?;

    result
}

fn run_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let events = EventHandler::default();

    loop {
        draw(terminal, app)?;

        match events.next()? {
            Event::Resize(_, _) => {
                // Next draw picks up the new size
            }
            event => handle_event(app, event)?,
        }

        // Check if we should quit
        if app.should_quit {
            info!("exiting TUI");
            return Ok(());
        }
    }
}
