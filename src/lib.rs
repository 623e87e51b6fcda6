//! A liveness probe that logs `hello world N` once per second, forever.
//!
//! [`Heartbeat`] owns the counter and the sink built by [`logging::console`];
//! supervisors and log pipelines watch the resulting lines on stderr.

pub mod heartbeat;
pub mod logging;

pub use heartbeat::{Beat, Heartbeat, Severity, PERIOD};
