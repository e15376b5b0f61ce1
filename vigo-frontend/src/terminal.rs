use std::io::{stderr, BufWriter, Stderr};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};

use crate::error::AppError;

/// Owns the terminal while the editor runs. The terminal is restored on
/// `shutdown` or, at the latest, when the wrapper is dropped.
pub struct TerminalWrapper {
    inner: Option<Terminal<CrosstermBackend<BufWriter<Stderr>>>>,
}

impl TerminalWrapper {
    pub fn start() -> Result<Self, AppError> {
        terminal::enable_raw_mode()?;

        match create() {
            Ok(terminal) => Ok(Self {
                inner: Some(terminal),
            }),
            Err(error) => {
                if let Err(stop_error) = stop() {
                    tracing::error!("restoring terminal failed: {:?}", stop_error);
                }
                Err(error)
            }
        }
    }

    pub fn shutdown(&mut self) -> Result<(), AppError> {
        if self.inner.take().is_some() {
            stop()?;
        }

        Ok(())
    }

    pub fn size(&self) -> Result<Rect, AppError> {
        if let Some(term) = &self.inner {
            let size = term.size()?;
            Ok(Rect::new(0, 0, size.width, size.height))
        } else {
            Err(AppError::TerminalNotInitialized)
        }
    }

    pub fn draw(&mut self, layout: impl FnMut(&mut Frame<'_>)) -> Result<(), AppError> {
        if let Some(term) = &mut self.inner {
            term.draw(layout)?;
            Ok(())
        } else {
            Err(AppError::TerminalNotInitialized)
        }
    }

    pub fn resize(&mut self, x: u16, y: u16) -> Result<(), AppError> {
        if let Some(term) = &mut self.inner {
            term.resize(Rect::new(0, 0, x, y))?;
        }

        Ok(())
    }
}

impl Drop for TerminalWrapper {
    fn drop(&mut self) {
        if let Err(error) = self.shutdown() {
            tracing::error!("restoring terminal failed: {:?}", error);
        }
    }
}

fn create() -> Result<Terminal<CrosstermBackend<BufWriter<Stderr>>>, AppError> {
    stderr()
        .execute(EnterAlternateScreen)?
        .execute(EnableMouseCapture)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(BufWriter::new(stderr())))?;
    terminal.clear()?;

    Ok(terminal)
}

fn stop() -> Result<(), AppError> {
    terminal::disable_raw_mode()?;
    stderr()
        .execute(DisableMouseCapture)?
        .execute(LeaveAlternateScreen)?
        .execute(cursor::Show)?;

    Ok(())
}
