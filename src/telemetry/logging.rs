use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "NAXX_LOG";
const DEFAULT_FILTER: &str = "naxxramas=info";
const LOG_FILE: &str = "instance.log";

static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Installs the global subscriber: stdout plus `<root>/log/instance.log`.
/// Later calls are no-ops.
pub fn init(root: &Path) -> Result<(), String> {
    if LOG_PATH.get().is_some() {
        return Ok(());
    }
    let log_dir = root.join("log");
    std::fs::create_dir_all(&log_dir)
        .map_err(|err| format!("log directory create failed: {}", err))?;

    let path = log_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|err| format!("open log {} failed: {}", LOG_FILE, err))?;

    tracing_subscriber::registry()
        .with(build_filter(std::env::var(LOG_ENV).ok().as_deref()))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .map_err(|err| format!("log system init failed: {}", err))?;

    let _ = LOG_PATH.set(path);
    Ok(())
}

pub fn log_path() -> Option<&'static Path> {
    LOG_PATH.get().map(PathBuf::as_path)
}

fn build_filter(directives: Option<&str>) -> EnvFilter {
    let Some(directives) = directives.map(str::trim).filter(|value| !value.is_empty()) else {
        return EnvFilter::new(DEFAULT_FILTER);
    };
    EnvFilter::try_new(directives).unwrap_or_else(|err| {
        eprintln!("naxxramas: invalid {} '{}': {}", LOG_ENV, directives, err);
        EnvFilter::new(DEFAULT_FILTER)
    })
}
