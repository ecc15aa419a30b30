//! Session clock.
//!
//! The session clock is the only timekeeping in the widget system. It is
//! advanced once per frame by the owner of the widget tree and drives cursor
//! blinking and tooltip delays.
//!
//! Other threads may poll the elapsed time through a [`SessionTime`] handle,
//! which is read-only.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

/// Elapsed-time counter for a GUI session.
#[derive(Debug)]
pub struct SessionClock {
    elapsed: Arc<RwLock<Duration>>,
    last_tick: Option<Instant>,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionClock {
    /// Create a clock at zero.
    pub fn new() -> Self {
        Self {
            elapsed: Arc::new(RwLock::new(Duration::ZERO)),
            last_tick: None,
        }
    }

    /// Advance by the wall-clock time since the previous tick.
    ///
    /// The first tick only records the starting instant.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let delta = self
            .last_tick
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or(Duration::ZERO);
        self.last_tick = Some(now);
        self.advance(delta)
    }

    /// Advance by an explicit amount. Returns the new elapsed time.
    pub fn advance(&mut self, delta: Duration) -> Duration {
        let mut elapsed = self.elapsed.write();
        *elapsed += delta;
        *elapsed
    }

    /// Time elapsed since the session started.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        *self.elapsed.read()
    }

    /// A read-only handle that can be polled from another thread.
    pub fn handle(&self) -> SessionTime {
        SessionTime {
            elapsed: Arc::clone(&self.elapsed),
        }
    }
}

/// Read-only view of a [`SessionClock`].
#[derive(Debug, Clone)]
pub struct SessionTime {
    elapsed: Arc<RwLock<Duration>>,
}

impl SessionTime {
    /// Time elapsed since the session started.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        *self.elapsed.read()
    }
}

static_assertions::assert_impl_all!(SessionTime: Send, Sync);
