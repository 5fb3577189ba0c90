//! Opt-in JSON trace logging for the transliteration pipeline.

use std::path::Path;

/// Log file written under the directory passed to [`init_tracing`].
pub const TRACE_FILE: &str = "translit-trace.jsonl";

/// Keeps the background log writer alive. Buffered events are flushed when
/// it is dropped, so hold it until the program is done transliterating.
#[must_use = "trace events are lost once the guard is dropped"]
pub struct TraceGuard {
    #[cfg(feature = "trace")]
    _worker: tracing_appender::non_blocking::WorkerGuard,
}

#[cfg(feature = "trace")]
static INIT: std::sync::Once = std::sync::Once::new();

/// Install a global subscriber writing JSON spans and events to
/// `<log_dir>/translit-trace.jsonl`. `RUST_LOG` overrides the default filter.
///
/// Only the first call installs anything. Returns `None` on later calls, when
/// the log file cannot be created, or when another global subscriber is
/// already set.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> Option<TraceGuard> {
    let mut guard = None;
    INIT.call_once(|| guard = install(log_dir));
    guard
}

#[cfg(feature = "trace")]
fn install(log_dir: &Path) -> Option<TraceGuard> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

    let (prefix, suffix) = TRACE_FILE.rsplit_once('.')?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(prefix)
        .filename_suffix(suffix)
        .build(log_dir)
        .ok()?;
    let (writer, worker) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("translit_core=debug,hindi_translit=debug"));
    tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(filter)
        .try_init()
        .ok()?;

    Some(TraceGuard { _worker: worker })
}

/// Tracing is compiled out without the `trace` feature.
#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) -> Option<TraceGuard> {
    None
}
