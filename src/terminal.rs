use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use bjcli::{Clock, Flow, Key, Session, Shuffler};
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue};

/// Raw-mode alternate screen, restored on drop.
struct Screen<W: Write = Stdout> {
    out: W,
}

impl Screen {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        Self::open(io::stdout())
    }
}

impl<W: Write> Screen<W> {
    /// Switches `out` to the alternate screen. Raw mode must already be on.
    fn open(out: W) -> Result<Self> {
        // From here on, dropping the screen restores the terminal.
        let mut screen = Self { out };
        execute!(screen.out, terminal::EnterAlternateScreen, cursor::Hide)
            .context("entering the alternate screen")?;
        Ok(screen)
    }

    fn draw(&mut self, lines: &[String]) -> Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All))?;
        for (row, line) in lines.iter().enumerate() {
            queue!(self.out, cursor::MoveTo(0, row as u16))?;
            if row == 0 {
                queue!(self.out, PrintStyledContent(line.as_str().bold().magenta()))?;
            } else {
                queue!(self.out, Print(line))?;
            }
        }
        self.out.flush().context("flushing terminal output")
    }
}

impl<W: Write> Drop for Screen<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Runs the session until the player quits.
///
/// Blocks on the keyboard while no dealer step is pending; otherwise waits
/// at most until the dealer is due.
pub fn run<S: Shuffler, C: Clock>(session: &mut Session<S, C>) -> Result<()> {
    let mut screen = Screen::enter()?;

    loop {
        screen.draw(&session.render())?;

        let ready = match session.next_wakeup() {
            Some(timeout) => event::poll(timeout).context("polling terminal events")?,
            None => true,
        };

        if ready {
            let event = event::read().context("reading terminal event")?;
            if let TermEvent::Key(key) = event {
                if let Some(key) = map_key(key) {
                    if session.on_key(key) == Flow::Exit {
                        break;
                    }
                }
            }
        }

        if session.on_timer() == Flow::Exit {
            break;
        }
    }

    Ok(())
}

fn map_key(event: KeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    match event.code {
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Key::Interrupt)
        }
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        _ => None,
    }
}
