//! Miscellaneous helper types around controlling the timing of the game, mostly the memorization pause.

use std::{
    cmp::min,
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

#[cfg(test)]
use mock_instant::Instant;
#[cfg(not(test))]
use std::time::Instant;

use thiserror::Error;

use crate::constants::display::TICK;

/// A fixed point in time that something is waiting for.
pub struct Deadline {
    end: Instant,
}

impl Deadline {
    /// A deadline `period` from right now.
    pub fn after(period: Duration) -> Self {
        Self { end: Instant::now() + period }
    }

    /// How much time is left before the deadline. Minimum 0.
    pub fn remaining(&self) -> Duration {
        self.end.checked_duration_since(Instant::now()).unwrap_or(Duration::ZERO)
    }

    pub fn passed(&self) -> bool {
        self.remaining().is_zero()
    }
}

/// Lets something else cut a [`ThreadPause`] short.
#[derive(Clone, Default)]
pub struct Interrupt(Arc<AtomicBool>);

impl Interrupt {
    /// Ask the paired pause to stop waiting. Sticks until the pause notices it.
    pub fn interrupt(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Check for and clear a pending interruption.
    fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

impl fmt::Debug for Interrupt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interrupt(...)")
    }
}

/// A pause ended before its time was up.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
#[error("pause interrupted with {remaining:?} left")]
pub struct Interrupted {
    pub remaining: Duration,
}

/// Something that can hold the game still for a while.
pub trait Pause {
    /// Block for `period`, or until interrupted, whichever's first.
    fn wait(&mut self, period: Duration) -> Result<(), Interrupted>;
}

/// Really sleeps the current thread, in [`TICK`]-sized slices so an [`Interrupt`] takes effect promptly.
#[derive(Debug, Default)]
pub struct ThreadPause {
    interrupt: Interrupt,
}

impl ThreadPause {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle which can interrupt this pause from anywhere, including other threads.
    pub fn interrupter(&self) -> Interrupt {
        self.interrupt.clone()
    }
}

impl Pause for ThreadPause {
    fn wait(&mut self, period: Duration) -> Result<(), Interrupted> {
        let deadline = Deadline::after(period);
        loop {
            if self.interrupt.take() {
                return Err(Interrupted { remaining: deadline.remaining() });
            }
            let left = deadline.remaining();
            if left.is_zero() {
                return Ok(());
            }
            thread::sleep(min(left, TICK));
        }
    }
}
