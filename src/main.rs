//! pi3g-usbpatcher - field updater for pi3g devices.
//!
//! A udev rule starts this binary when a USB drive is plugged in,
//! exporting the block device name as `DEVNAME`. The drive is mounted,
//! a single patch archive is applied over the root filesystem and the
//! device halts so the technician can pull the stick.

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use pi3g_usbpatcher::config::{Config, LOG_PATH};
use pi3g_usbpatcher::logging;
use pi3g_usbpatcher::updater::Updater;

#[derive(Parser)]
#[command(name = "pi3g-usbpatcher", version)]
#[command(about = "Applies a USB patch archive over the root filesystem, then halts")]
struct Cli {
    /// Block device to mount (overrides the DEVNAME environment variable)
    #[arg(long)]
    device: Option<String>,

    /// Log file path
    #[arg(long, default_value = LOG_PATH)]
    log_file: PathBuf,

    /// Log to stdout instead of the log file
    #[arg(long)]
    stdout: bool,

    /// Enable debug logging (RUST_LOG overrides this)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let code = run(Cli::parse());
    if code != 0 {
        std::process::exit(code);
    }
}

/// Runs one update and returns the process exit code. The log guard
/// lives exactly as long as this scope, so the file is synced on every
/// exit path before the process terminates.
fn run(cli: Cli) -> i32 {
    let log_file = if cli.stdout {
        None
    } else {
        Some(cli.log_file.as_path())
    };
    let _log_guard = logging::init(log_file, cli.verbose);

    info!(
        "Device plugged in, running updater version {}",
        env!("CARGO_PKG_VERSION")
    );

    let cfg = Config::from_env(cli.device);
    match Updater::new(cfg).run() {
        Ok(()) => 0,
        Err(e) => {
            error!("{e}");
            e.exit_code()
        }
    }
}
