use std::{fs::File, path::Path, sync::OnceLock};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::error::HeaderError;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Installs a file logger at `<log_dir>/timegrid-header.log`.
///
/// The level comes from `TIMEGRID_LOG` and defaults to `info`. Later calls are no-ops.
pub fn setup_logger(log_dir: impl AsRef<Path>) -> Result<(), HeaderError> {
    if LOG_GUARD.get().is_some() {
        return Ok(());
    }

    let file = File::create(log_dir.as_ref().join("timegrid-header.log"))?;
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_env("TIMEGRID_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(non_blocking_writer)
        .with_filter(filter);

    if LOG_GUARD.set(guard).is_err() {
        return Ok(());
    }

    tracing_subscriber::registry().with(file_layer).try_init().ok();

    Ok(())
}
