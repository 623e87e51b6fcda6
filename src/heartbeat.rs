use std::time::Duration;

use tokio::{select, time};
use tokio_util::sync::CancellationToken;
use tracing::{dispatcher, error, info, Dispatch};

use crate::logging::LOGGER_NAME;

/// Delay between two beats.
pub const PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl Severity {
    /// Odd counts are reported as errors, even ones as info.
    /// This only exercises both levels; nothing has actually gone wrong.
    pub fn for_count(count: u64) -> Self {
        if count % 2 == 1 {
            Severity::Error
        } else {
            Severity::Info
        }
    }
}

/// A single emitted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beat {
    pub count: u64,
    pub severity: Severity,
}

impl Beat {
    pub fn message(&self) -> String {
        format!("hello world {}", self.count)
    }
}

pub struct Heartbeat {
    count: u64,
    period: Duration,
    sink: Dispatch,
}

impl Heartbeat {
    pub fn new(sink: Dispatch) -> Self {
        Self {
            count: 0,
            period: PERIOD,
            sink,
        }
    }

    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// The count the next beat will carry.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Emits one record for the current count and advances the counter.
    pub fn beat(&mut self) -> Beat {
        let beat = Beat {
            count: self.count,
            severity: Severity::for_count(self.count),
        };
        let message = beat.message();
        dispatcher::with_default(&self.sink, || match beat.severity {
            Severity::Info => info!(target: LOGGER_NAME, "{message}"),
            Severity::Error => error!(target: LOGGER_NAME, "{message}"),
        });
        self.count = self.count.wrapping_add(1);
        beat
    }

    /// Beats once per period until `token` is cancelled, returning how many
    /// beats were emitted.
    ///
    /// The binary hands in a token nobody ever cancels, so in production this
    /// never returns: the process only stops when it is killed from outside.
    /// Sleeps are fixed-delay; time spent emitting is not compensated for.
    pub async fn run(mut self, token: CancellationToken) -> u64 {
        let mut emitted = 0u64;
        loop {
            self.beat();
            emitted = emitted.wrapping_add(1);
            select! {
                _ = token.cancelled() => break emitted,
                _ = time::sleep(self.period) => {}
            }
        }
    }
}
