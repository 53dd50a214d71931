//! Process-wide logging: a console sink and a size-rotated file sink sharing
//! one line format, both fed through background writer threads so request
//! handlers never wait on stdout or the disk.

pub mod format;
pub mod rolling;

use std::any::Any;
use std::io;
use std::panic;
use std::path::PathBuf;

use tracing::Dispatch;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::{NonBlocking, NonBlockingBuilder, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub use format::LineFormat;
pub use rolling::RollingFile;

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub dir: PathBuf,
    pub file_name: String,
    /// Rotation threshold for the active file; 0 disables rotation.
    pub max_bytes: u64,
    pub max_backups: usize,
    pub console: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs"),
            file_name: "api.log".to_string(),
            max_bytes: 10 * 1024 * 1024,
            max_backups: 5,
            console: true,
        }
    }
}

/// The logging service. Construct once at startup, then either `install` it
/// as the process default or hand its `dispatch` to scoped callers.
///
/// Dropping it drains and flushes both sinks.
pub struct Logger {
    dispatch: Dispatch,
    _guards: Vec<WorkerGuard>,
}

impl Logger {
    pub fn new(config: &LogConfig) -> io::Result<Self> {
        let file = RollingFile::open(
            &config.dir,
            &config.file_name,
            config.max_bytes,
            config.max_backups,
        )?;
        let (file_writer, file_guard) = queued(file, "cryptix-log-file");
        let mut guards = vec![file_guard];

        let console_layer = if config.console {
            let (stdout_writer, stdout_guard) = queued(io::stdout(), "cryptix-log-console");
            guards.push(stdout_guard);
            Some(
                tracing_subscriber::fmt::layer()
                    .event_format(LineFormat)
                    .with_writer(stdout_writer),
            )
        } else {
            None
        };

        let file_layer = tracing_subscriber::fmt::layer()
            .event_format(LineFormat)
            .with_ansi(false)
            .with_writer(file_writer);

        // RUST_LOG may narrow what is recorded, never widen it below INFO
        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let subscriber = tracing_subscriber::registry()
            .with(LevelFilter::INFO)
            .with(env_filter)
            .with(console_layer)
            .with(file_layer);

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            _guards: guards,
        })
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Installs this logger as the global default. Fails if another
    /// subscriber was installed first.
    pub fn install(&self) -> anyhow::Result<()> {
        self.dispatch().clone().try_init()?;
        Ok(())
    }
}

/// Routes panic reports through the installed logger instead of stderr.
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());
        let thread = std::thread::current();
        tracing::error!(
            "thread '{}' panicked at {}: {}",
            thread.name().unwrap_or("<unnamed>"),
            location,
            panic_payload(info.payload())
        );
    }));
}

/// Best-effort text of a panic payload.
pub fn panic_payload(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Wraps a sink in a dedicated writer thread. Lossless: when the queue is
/// full, callers wait instead of dropping lines.
fn queued<W>(sink: W, thread_name: &str) -> (NonBlocking, WorkerGuard)
where
    W: io::Write + Send + 'static,
{
    NonBlockingBuilder::default()
        .lossy(false)
        .thread_name(thread_name)
        .finish(sink)
}

#[cfg(test)]
pub(crate) fn scratch_dir(label: &str) -> PathBuf {
    use std::sync::atomic::{AtomicUsize, Ordering};

    static SEQ: AtomicUsize = AtomicUsize::new(0);
    let dir = std::env::temp_dir().join(format!(
        "cryptix-{label}-{}-{}",
        std::process::id(),
        SEQ.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}
