//! Capture helpers for heartbeat integration tests.

#![allow(dead_code)]

use std::{
    io,
    sync::{Arc, Mutex},
};

use tokio::time::Instant;
use tracing_subscriber::fmt::MakeWriter;

/// Writer that keeps every record in memory together with the (tokio) time
/// at which the sink asked for it.
#[derive(Clone, Default)]
pub struct Recorder {
    buf: Arc<Mutex<Vec<u8>>>,
    stamps: Arc<Mutex<Vec<Instant>>>,
}

impl Recorder {
    pub fn lines(&self) -> Vec<String> {
        let buf = self.buf.lock().unwrap();
        String::from_utf8_lossy(&buf)
            .lines()
            .map(str::to_owned)
            .collect()
    }

    pub fn stamps(&self) -> Vec<Instant> {
        self.stamps.lock().unwrap().clone()
    }
}

impl io::Write for Recorder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Recorder {
    type Writer = Recorder;

    fn make_writer(&'a self) -> Self::Writer {
        self.stamps.lock().unwrap().push(Instant::now());
        self.clone()
    }
}

/// Returns `(level, message)` for a sink line, checking the timestamp layout
/// `YYYY-MM-DD HH:MM:SS,mmm` on the way.
pub fn split_line(line: &str) -> (&str, &str) {
    let bytes = line.as_bytes();
    assert!(line.len() > 31, "line too short: {line:?}");
    for (i, b) in bytes[..23].iter().enumerate() {
        let ok = match i {
            4 | 7 => *b == b'-',
            10 => *b == b' ',
            13 | 16 => *b == b':',
            19 => *b == b',',
            _ => b.is_ascii_digit(),
        };
        assert!(ok, "unexpected byte {:?} at {i} in {line:?}", *b as char);
    }
    assert_eq!(&line[23..25], " [", "{line:?}");
    assert_eq!(&line[30..33], "]  ", "{line:?}");
    (&line[25..30], &line[33..])
}
