use std::{io, panic};
use anyhow::Result;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::layout::Size;
use crate::{app::App, event::EventHandler, ui};

pub type CrosstermTerminal = ratatui::Terminal<ratatui::backend::CrosstermBackend<io::Stderr>>;

/// Representation of a terminal user interface.
///
/// Draws on stderr so that the selected line can go to stdout untouched.
pub struct Tui {
  terminal: CrosstermTerminal,
  pub events: EventHandler,
}

impl Tui {
  pub fn new(terminal: CrosstermTerminal, events: EventHandler) -> Self {
    Self { terminal, events }
  }

  pub fn enter(&mut self) -> Result<()> {
    terminal::enable_raw_mode()?;
    crossterm::execute!(io::stderr(), EnterAlternateScreen)?;

    // Restore the terminal before the panic message is printed.
    let panic_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic| {
      if let Err(e) = Self::reset() {
        eprintln!("failed to reset the terminal: {e}");
      }
      panic_hook(panic);
    }));

    self.terminal.clear()?;
    Ok(())
  }

  pub fn draw(&mut self, app: &mut App) -> Result<()> {
    self.terminal.draw(|frame| ui::render(app, frame))?;
    Ok(())
  }

  fn reset() -> Result<()> {
    terminal::disable_raw_mode()?;
    crossterm::execute!(io::stderr(), LeaveAlternateScreen)?;
    Ok(())
  }

  pub fn exit(&mut self) -> Result<()> {
    Self::reset()?;
    self.terminal.show_cursor()?;
    Ok(())
  }

  pub fn size(&self) -> Result<Size> {
    Ok(self.terminal.size()?)
  }
}
