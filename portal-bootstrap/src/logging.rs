use std::path::Path;

use anyhow::{anyhow, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use portal_infrastructure::AppConfig;

const LOG_FILE_PREFIX: &str = "portal.log";

/// Installs the global subscriber. Terminal logs go to stderr; when
/// `log_dir` is set a daily-rolling file gets the same events. The returned
/// guard must live until exit or buffered file lines are lost.
pub fn init_logging(config: &AppConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let Some(log_dir) = config.log_dir.as_deref() else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()
            .map_err(|err| anyhow!("failed to install logger: {err}"))?;
        return Ok(None);
    };

    std::fs::create_dir_all(Path::new(log_dir))
        .map_err(|err| anyhow!("failed to create log directory '{}': {}", log_dir, err))?;
    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .map_err(|err| anyhow!("failed to install logger: {err}"))?;
    Ok(Some(guard))
}
