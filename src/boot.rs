use chrono::Local;
use log::LevelFilter;
use std::io::{self, Write};

use env_logger::{Builder, Target};

pub const LOG_FILE_ENV: &str = "TRAYWISE_LOG_FILE";

/// Logger setup used by the TUI entrypoint.
///
/// The terminal belongs to the UI while it runs, so logs only ever go to a
/// file: `$TRAYWISE_LOG_FILE` when set, a timestamped file in the working
/// directory for debug builds, and nowhere otherwise.
pub fn init_common() {
    let log_file = std::env::var(LOG_FILE_ENV).ok().or_else(|| {
        #[cfg(debug_assertions)]
        {
            Some(format!("./log_{}.log", Local::now().format("%Y%m%d%H%M%S")))
        }
        #[cfg(not(debug_assertions))]
        {
            None
        }
    });

    if let Some(path) = log_file {
        if let Err(err) = init_file_logger(&path) {
            eprintln!("Failed to initialize file logger at '{path}': {err}");
        }
    }
}

fn init_file_logger(path: &str) -> io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    let mut builder = Builder::new();
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(file)))
        .filter_level(LevelFilter::Debug)
        .parse_default_env();

    builder
        .try_init()
        .map_err(|err| io::Error::new(io::ErrorKind::AlreadyExists, err))?;

    log::info!("File logger initialized at {path}");

    Ok(())
}
