//! Jour entrypoint.
use anyhow::Result;
use clap::Parser;
use core_terminal::CrosstermTerminal;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

mod runtime;

const LOG_FILE: &str = "jour.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "jour", version, about = "Jour modal text editor")]
struct Args {
    /// File to open at startup. If omitted an empty document is used.
    pub path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `jour.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

/// Log to `jour.log` in the working directory. The terminal belongs to the
/// compositor, so nothing is ever logged to stdout or stderr.
fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join(LOG_FILE);
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(nb_writer)
        .try_init()
    {
        Ok(()) => Some(guard),
        // Global subscriber already installed; drop guard so the writer shuts down.
        Err(_) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", %info, "panic");
            core_terminal::emergency_restore();
            default_panic(info);
        }));
    });
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", version = env!("CARGO_PKG_VERSION"), "startup");

    let config = core_config::load_from(args.config.clone())?;
    let mut term = CrosstermTerminal::new();
    match runtime::run(&mut term, args.path.as_deref(), &config) {
        Ok(reason) => {
            info!(target: "runtime", reason = reason.as_str(), "exit");
            Ok(())
        }
        Err(e) => {
            // The terminal is already restored; anyhow prints the chain on return.
            error!(target: "runtime", error = %format!("{e:#}"), "fatal");
            Err(e)
        }
    }
}
