use std::panic::{self, PanicHookInfo};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Logging knobs, read from the environment once at startup.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Directory for daily-rotated log files. Unset means stdout.
    pub dir: Option<PathBuf>,
    /// Whether a captured panic also prints the default backtrace.
    pub backtrace_on_panic: bool,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self {
            dir: std::env::var_os("UT_LOG_DIR").map(PathBuf::from),
            backtrace_on_panic: std::env::var("UT_LOG_INCLUDE_BACKTRACE")
                .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

fn panic_summary(info: &PanicHookInfo<'_>) -> (String, String) {
    let location = info
        .location()
        .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
        .unwrap_or_else(|| "unknown".into());

    let payload = if let Some(text) = info.payload().downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = info.payload().downcast_ref::<String>() {
        text.clone()
    } else {
        "non-string panic payload".into()
    };

    (location, payload)
}

/// Route panics through `tracing` so they land in the same sink as request
/// logs. Installed once per process; later calls are no-ops.
pub fn install_tracing_panic_hook(service: &'static str) {
    static HOOK: OnceLock<()> = OnceLock::new();

    HOOK.get_or_init(|| {
        let print_backtrace = LogConfig::from_env().backtrace_on_panic;
        let default_hook = panic::take_hook();

        panic::set_hook(Box::new(move |info| {
            let (location, payload) = panic_summary(info);

            tracing::error!(
                service,
                thread = %std::thread::current().name().unwrap_or("unnamed"),
                %location,
                %payload,
                "panic"
            );

            if print_backtrace {
                default_hook(info);
            }
        }));
    });
}

fn daily_writer(dir: &Path, service: &str) -> Option<NonBlocking> {
    if let Err(err) = std::fs::create_dir_all(dir) {
        // The subscriber is not installed yet, so this cannot go through tracing.
        eprintln!("cannot create log dir {}: {err}", dir.display());
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, format!("{service}.log"));
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = FILE_GUARD.set(guard);
    Some(writer)
}

/// Initialize the global subscriber. `RUST_LOG` controls filtering, defaulting
/// to `info`. With `UT_LOG_DIR` set, output goes to a daily-rotated
/// `<dir>/<service>.log` without ANSI color; otherwise stdout.
pub fn init_tracing_subscriber(service: &'static str) {
    let config = LogConfig::from_env();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config
        .dir
        .as_deref()
        .and_then(|dir| daily_writer(dir, service))
    {
        Some(writer) => {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            let _ = registry.with(file_layer).try_init();
        }
        None => {
            let _ = registry.with(tracing_subscriber::fmt::layer()).try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn log_config_reads_backtrace_flag_case_insensitively() {
        unsafe { env::set_var("UT_LOG_INCLUDE_BACKTRACE", "TRUE") };
        assert!(LogConfig::from_env().backtrace_on_panic);

        unsafe { env::set_var("UT_LOG_INCLUDE_BACKTRACE", "0") };
        assert!(!LogConfig::from_env().backtrace_on_panic);

        unsafe { env::remove_var("UT_LOG_INCLUDE_BACKTRACE") };
        assert!(!LogConfig::from_env().backtrace_on_panic);
    }
}
