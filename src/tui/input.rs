use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawMode, console_width, flush, reset_terminal};

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Submit,
    Cancel,
    Quit,
}

/// Single-line editor state. The cursor indexes chars, not bytes, so notes
/// typed in CJK edit correctly.
#[derive(Debug, Default)]
pub struct LineEditor {
    buf: Vec<char>,
    cursor: usize,
}

impl LineEditor {
    pub fn new(initial: &str) -> Self {
        let buf: Vec<char> = initial.chars().collect();
        let cursor = buf.len();
        Self { buf, cursor }
    }

    pub fn text(&self) -> String {
        self.buf.iter().collect()
    }

    /// Display column of the cursor relative to the start of the input.
    pub fn cursor_col(&self) -> usize {
        console_width(&self.buf[..self.cursor].iter().collect::<String>())
    }

    pub fn handle(&mut self, key: KeyEvent) -> Outcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Outcome::Quit,
            KeyCode::Char('q') if ctrl => return Outcome::Cancel,
            KeyCode::Char('u') if ctrl => {
                self.buf.clear();
                self.cursor = 0;
            }
            KeyCode::Esc => return Outcome::Cancel,
            KeyCode::Enter => return Outcome::Submit,
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.buf.remove(self.cursor);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.buf.len() {
                    self.buf.remove(self.cursor);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.buf.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.buf.len(),
            KeyCode::Char(c) => {
                self.buf.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Outcome::Continue
    }
}

/// Read a line with `initial` prefilled. `None` on Esc / Ctrl+Q.
/// Ctrl+C restores the terminal and exits.
pub fn get_editable_input(prompt: &str, initial: &str) -> Option<String> {
    let mut editor = LineEditor::new(initial);

    let guard = match RawMode::enable() {
        Ok(g) => g,
        Err(_) => return Some(editor.text()),
    };

    redraw(prompt, &editor);

    let outcome = loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                match editor.handle(key) {
                    Outcome::Continue => redraw(prompt, &editor),
                    done => break done,
                }
            }
            Ok(_) => {}
            Err(_) => break Outcome::Submit,
        }
    };

    drop(guard);
    println!();

    match outcome {
        Outcome::Quit => {
            reset_terminal();
            std::process::exit(0);
        }
        Outcome::Cancel => None,
        _ => Some(editor.text()),
    }
}

fn redraw(prompt: &str, editor: &LineEditor) {
    print!("\r{}: {}\x1b[K", prompt, editor.text());
    print!("\x1b[{}G", console_width(prompt) + 2 + editor.cursor_col() + 1);
    flush();
}
