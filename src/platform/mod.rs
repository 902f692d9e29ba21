//! Terminal platform layer
//!
//! Owns the raw-mode terminal session: alternate screen, hidden cursor,
//! per-frame clear, frame presentation, and the keypress gate. Dropping
//! the [`Terminal`] restores the caller's terminal even on the error path.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

/// What the user asked for with a keypress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    /// Any ordinary key: advance one frame
    Advance,
    /// `q`, `Esc` or Ctrl-C: leave the demo
    Quit,
}

/// A raw-mode terminal session
pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        // Drop has no chance to run if setup fails here; undo raw mode
        // by hand so the caller's terminal comes back usable.
        if let Err(err) = execute!(stdout, EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self { stdout })
    }

    /// Clear the whole display and park the cursor at the top left
    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.stdout, cursor::MoveTo(0, 0), Clear(ClearType::All))
    }

    /// Write the frame's text rows and flush.
    ///
    /// Raw mode means `\n` alone does not return the carriage, so each
    /// row is positioned explicitly.
    pub fn present(&mut self, rows: &[String]) -> io::Result<()> {
        for (i, row) in rows.iter().enumerate() {
            queue!(
                self.stdout,
                cursor::MoveTo(0, i as u16),
                Print(row.as_str())
            )?;
        }
        self.stdout.flush()
    }

    /// Block until one key press and classify it
    pub fn wait_key(&mut self) -> io::Result<Request> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                return Ok(classify(key.code, key.modifiers));
            }
        }
    }

    /// Drain any pending key presses without blocking; reports `Quit` if
    /// one of them asked for it. Used by clock pacing.
    pub fn poll_keys(&mut self) -> io::Result<Request> {
        let mut request = Request::Advance;
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && classify(key.code, key.modifiers) == Request::Quit
                {
                    request = Request::Quit;
                }
            }
        }
        Ok(request)
    }
}

fn classify(code: KeyCode, modifiers: KeyModifiers) -> Request {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Request::Quit,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Request::Quit,
        _ => Request::Advance,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
