use std::path::PathBuf;

#[cfg(feature = "debug-log")]
mod inner {
    use super::PathBuf;
    use std::fs;
    use tracing_appender::non_blocking::WorkerGuard;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    pub fn init() -> Option<(PathBuf, WorkerGuard)> {
        let log_path = PathBuf::from("conduit-debug.log");

        let file = match fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
        {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Failed to open log file: {e}");
                return None;
            }
        };

        let (non_blocking, guard) = tracing_appender::non_blocking(file);

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let subscriber = tracing_subscriber::registry().with(filter).with(
            fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_target(true),
        );

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("Failed to set tracing subscriber");
            return None;
        }

        tracing::info!("Debug logging initialized");

        Some((log_path, guard))
    }
}

#[cfg(not(feature = "debug-log"))]
mod inner {
    use super::PathBuf;

    #[inline(always)]
    pub fn init() -> Option<(PathBuf, ())> {
        None
    }
}

pub use inner::init;
