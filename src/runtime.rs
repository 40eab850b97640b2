//! Feeds terminal input to an [`App`] until it asks to quit.
//!
//! The app only changes on a key press, so the loop blocks on input and
//! redraws after each one. A resize just forces a redraw.

use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event, KeyEvent};
use tracing::debug;

use crate::app::{App, Control};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Key(KeyEvent),
    Redraw,
}

pub trait InputSource {
    /// Next input, or `None` once the source has nothing more to give.
    fn next_input(&mut self) -> io::Result<Option<Input>>;
}

/// Blocking reads from the real terminal.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn next_input(&mut self) -> io::Result<Option<Input>> {
        loop {
            match event::read()? {
                Event::Key(key) => return Ok(Some(Input::Key(key))),
                Event::Resize(..) => return Ok(Some(Input::Redraw)),
                _ => {}
            }
        }
    }
}

/// Input prepared up front, for driving the app without a terminal.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    queue: VecDeque<Input>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = Input>) -> Self {
        Self {
            queue: inputs.into_iter().collect(),
        }
    }

    pub fn keys(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self::new(keys.into_iter().map(Input::Key))
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_input(&mut self) -> io::Result<Option<Input>> {
        Ok(self.queue.pop_front())
    }
}

/// Draw once, then hand every key to `app` and draw again, until the app
/// returns [`Control::Quit`] or `source` runs dry.
pub fn run<S, D>(app: &mut App, source: &mut S, mut draw: D) -> io::Result<Control>
where
    S: InputSource,
    D: FnMut(&mut App) -> io::Result<()>,
{
    draw(app)?;
    while let Some(input) = source.next_input()? {
        if let Input::Key(key) = input {
            if app.handle_key(key) == Control::Quit {
                debug!("quit requested");
                return Ok(Control::Quit);
            }
        }
        draw(app)?;
    }
    Ok(Control::Continue)
}
