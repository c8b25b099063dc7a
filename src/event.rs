use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// Terminal events.
#[derive(Clone, Copy, Debug)]
pub enum Event {
    Tick,
    Key(KeyEvent),
    /// new terminal height in rows
    Resize(u16),
}

/// Terminal event handler.
///
/// Polls crossterm on a background thread and forwards events over a channel,
/// emitting [`Event::Tick`] every `tick_rate` milliseconds.
#[derive(Debug)]
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
    #[allow(dead_code)]
    handler: thread::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate);
        let (sender, receiver) = mpsc::channel();
        let handler = thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(tick_rate);

                let forwarded = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => sender.send(Event::Key(key)),
                        Ok(CrosstermEvent::Resize(_, h)) => sender.send(Event::Resize(h)),
                        Ok(_) => Ok(()),
                        Err(e) => {
                            debug!(error = %e, "terminal read failed");
                            break;
                        }
                    },
                    Ok(false) => Ok(()),
                    Err(e) => {
                        debug!(error = %e, "terminal poll failed");
                        break;
                    }
                };
                // receiver dropped
                if forwarded.is_err() {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });
        Self { receiver, handler }
    }

    /// Block until the next event. Fails once the polling thread has stopped.
    pub fn next(&self) -> Result<Event> {
        Ok(self.receiver.recv()?)
    }
}
