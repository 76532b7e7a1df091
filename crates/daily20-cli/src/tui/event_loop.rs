use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event};

#[derive(Debug, Clone, derive_more::IsVariant, derive_more::From)]
pub(super) enum TuiEvent {
    Tick,
    /// Redraw after a state change.
    Render,
    Terminal(Event),
}

/// Produces ticks, renders and terminal events in order.
///
/// A render is emitted once after any tick or terminal event; an idle app does
/// not redraw.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    last_tick: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self {
            tick_interval: None,
            last_tick: Instant::now(),
            dirty: true,
        }
    }
}

impl EventLoop {
    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        if self.tick_interval.is_none() {
            self.last_tick = Instant::now();
        }
        self.tick_interval = interval;
    }

    /// Blocks until the next tick is due, a render is pending, or a terminal event arrives.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            if self.dirty {
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            let now = Instant::now();
            let timeout = match self.tick_interval {
                Some(interval) => {
                    let due = self.last_tick + interval;
                    if now >= due {
                        self.last_tick = now;
                        self.dirty = true;
                        return Ok(TuiEvent::Tick);
                    }
                    due - now
                }
                None => Duration::from_secs(60),
            };

            if event::poll(timeout)? {
                self.dirty = true;
                return Ok(event::read()?.into());
            }
        }
    }
}
