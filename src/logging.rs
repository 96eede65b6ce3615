//! Process-wide tracing setup.
//!
//! `init` wires an `EnvFilter`ed fmt subscriber (stdout by default, daily
//! rolling files when `SB_LOG_DIR` is set) and routes panics through
//! `tracing::error!` so they land in the same sink as everything else.

use std::panic;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

// Keeps the non-blocking writer alive for the life of the process.
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// One-call setup: subscriber plus panic hook. Calling it again is a no-op
/// for whichever half is already installed.
pub fn init(app_name: &'static str) {
    init_tracing_subscriber(app_name);
    install_tracing_panic_hook(app_name);
}

/// Initialize the global subscriber. Filtering follows `RUST_LOG`, default
/// `info`. With `SB_LOG_DIR` set, output goes to `<dir>/<app>.log` rotated
/// daily; an unwritable directory falls back to stdout.
pub fn init_tracing_subscriber(app_name: &'static str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file_writer(app_name) {
        Some(writer) => {
            let _ = fmt.with_writer(writer).try_init();
        }
        None => {
            let _ = fmt.try_init();
        }
    }
}

fn log_file_writer(app_name: &'static str) -> Option<BoxMakeWriter> {
    let dir = PathBuf::from(std::env::var_os("SB_LOG_DIR")?);
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!("SB_LOG_DIR unusable ({err}); logging to stdout");
        return None;
    }

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, format!("{app_name}.log")));
    let _ = FILE_GUARD.set(guard);
    Some(BoxMakeWriter::new(writer))
}

/// Route panics through the subscriber. Set `SB_LOG_INCLUDE_BACKTRACE=1` to
/// also run the default hook and get the stderr backtrace.
pub fn install_tracing_panic_hook(app_name: &'static str) {
    static HOOKED: OnceLock<()> = OnceLock::new();

    HOOKED.get_or_init(|| {
        let previous = panic::take_hook();
        let with_backtrace = env_flag("SB_LOG_INCLUDE_BACKTRACE");

        panic::set_hook(Box::new(move |info| {
            let thread = std::thread::current();
            let location = info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown".to_string());
            let message = info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| info.payload().downcast_ref::<String>().map(String::as_str))
                .unwrap_or("non-string panic payload");

            tracing::error!(
                application = app_name,
                thread_name = thread.name().unwrap_or("unnamed"),
                %location,
                panic_message = message,
                "panic captured"
            );

            if with_backtrace {
                previous(info);
            }
        }));
    });
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
