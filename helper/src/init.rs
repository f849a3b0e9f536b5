use std::env::var;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_forest::ForestLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Compose the `tracing` layers and register them as global default.
///
/// `env_filter` is used when `RUST_LOG` is not set. The returned guard
/// flushes the log file when dropped, so keep it alive until exit.
pub fn init_subscriber(
    name: String,
    env_filter: String,
) -> anyhow::Result<WorkerGuard> {
    // Env variable LOG_CONFIG_PATH points at the path where
    // LOG_CONFIG_FILENAME is located
    let log_config_path =
        var("LOG_CONFIG_PATH").unwrap_or_else(|_| "./".to_string());
    // Env variable LOG_CONFIG_FILENAME names the log file
    let log_config_filename =
        var("LOG_CONFIG_FILENAME").unwrap_or_else(|_| format!("{}.log", name));

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env_filter));

    let file_appender =
        tracing_appender::rolling::never(log_config_path, log_config_filename);
    let (non_blocking_file, guard) =
        tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::Layer::default()
                .with_ansi(false)
                .with_writer(non_blocking_file),
        )
        .with(ForestLayer::default())
        .try_init()?;

    Ok(guard)
}
