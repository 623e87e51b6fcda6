//! Console sink for heartbeat records.
//!
//! Every line looks like `2024-05-01 12:00:00,123 [INFO ]  hello world 0`.

use std::fmt;

use chrono::Local;
use tracing::{Dispatch, Event, Level, Subscriber};
use tracing_subscriber::{
    filter::Targets,
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    Layer,
};

/// Target every heartbeat record is emitted under.
pub const LOGGER_NAME: &str = "heartbeat";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Builds the production sink, writing to stderr.
pub fn console() -> Dispatch {
    sink(std::io::stderr)
}

/// Builds a sink over an arbitrary writer.
///
/// Only records under [`LOGGER_NAME`] at `DEBUG` or above get through.
pub fn sink<W>(make_writer: W) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .event_format(LineFormat)
        .with_writer(make_writer)
        .with_filter(Targets::new().with_target(LOGGER_NAME, Level::DEBUG));
    Dispatch::new(tracing_subscriber::registry().with(layer))
}

/// `<timestamp> [<LEVEL:5>]  <message>`
#[derive(Debug, Default, Clone, Copy)]
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(
            writer,
            "{} [{:<5}]  ",
            Local::now().format(TIMESTAMP_FORMAT),
            event.metadata().level().as_str(),
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
