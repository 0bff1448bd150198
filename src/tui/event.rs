use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, KeyEvent};

use crate::error::{Result, SchoolbookError};

/// Terminal events
#[derive(Debug)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic tick for UI updates
    Tick,
}

/// Forwards terminal input from a background thread, emitting a tick
/// whenever a poll window elapses with no input.
pub struct EventHandler {
    receiver: Receiver<Event>,
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate in milliseconds
    pub fn new(tick_rate: u64) -> Self {
        let (sender, receiver) = channel();
        let handler =
            thread::spawn(move || forward_events(sender, Duration::from_millis(tick_rate)));

        Self { receiver, handler }
    }

    /// Get the next event, blocking until one is available
    pub fn next(&self) -> Result<Event> {
        self.receiver
            .recv()
            .map_err(|e| SchoolbookError::Tui(e.to_string()))
    }
}

/// Runs until the receiving side hangs up.
fn forward_events(sender: Sender<Event>, tick_rate: Duration) {
    loop {
        let quiet = !event::poll(tick_rate).unwrap_or(false);
        if quiet {
            if sender.send(Event::Tick).is_err() {
                return;
            }
            continue;
        }

        let forwarded = match event::read() {
            Ok(event::Event::Key(key)) => sender.send(Event::Key(key)),
            Ok(event::Event::Resize(width, height)) => sender.send(Event::Resize(width, height)),
            _ => Ok(()),
        };
        if forwarded.is_err() {
            return;
        }
    }
}
