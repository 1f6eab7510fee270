use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

/// A live repeating task: fires every `period`, phase measured from its start.
#[derive(Debug, Clone)]
struct Interval {
    id: TimerId,
    period: Duration,
    elapsed: Duration,
}

/// Owner of the single autoplay handle.
///
/// Starting always cancels whatever was running first, so at most one
/// interval exists at any time.
#[derive(Debug, Clone)]
pub struct Autoplay {
    period: Duration,
    handle: Option<Interval>,
    next_id: u64,
}

impl Autoplay {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            handle: None,
            next_id: 0,
        }
    }

    pub fn start(&mut self) -> TimerId {
        self.cancel();
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.handle = Some(Interval {
            id,
            period: self.period,
            elapsed: Duration::ZERO,
        });
        debug!(timer = id.0, period_ms = self.period.as_millis() as u64, "autoplay started");
        id
    }

    /// Returns true when a live interval was dropped.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(interval) => {
                debug!(timer = interval.id.0, "autoplay cancelled");
                true
            }
            None => false,
        }
    }

    /// Moves the clock forward and returns how many times the interval fired.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        let Some(interval) = self.handle.as_mut() else {
            return 0;
        };
        if interval.period.is_zero() {
            return 0;
        }

        interval.elapsed += dt;
        let mut fired = 0;
        while interval.elapsed >= interval.period {
            interval.elapsed -= interval.period;
            fired += 1;
        }
        fired
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn current(&self) -> Option<TimerId> {
        self.handle.as_ref().map(|i| i.id)
    }

    /// Time left until the next firing, if running.
    pub fn remaining(&self) -> Option<Duration> {
        self.handle
            .as_ref()
            .map(|i| i.period.saturating_sub(i.elapsed))
    }
}
