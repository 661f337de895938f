use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file when `--log-file` is not given.
pub const LOG_ENV_VAR: &str = "FLASHCARD_QUIZ_LOG";

/// Pick the log destination: the explicit path wins over the environment.
pub fn log_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(LOG_ENV_VAR).map(PathBuf::from))
}

/// Initialize tracing with file output.
///
/// Logging stays off without a log path, since anything written to the
/// terminal would corrupt the quiz screens. The filter comes from `RUST_LOG`
/// and defaults to `info`.
pub fn init_tracing(path: Option<&Path>) {
    let Some(path) = log_path(path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: failed to create log file {}: {}", path.display(), err);
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
