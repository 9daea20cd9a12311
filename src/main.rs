//! Camview CLI
//!
//! Command-line demo for the camera preview session core. Drives the
//! presentation shell through its lifecycle hooks against the mock host
//! (or the real one with the `camera` feature) and renders the preview
//! surface's status line instead of pixels.

use camview::{CameraHost, FileConfig, MockHost, PreviewShell};
use clap::Parser;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "camview", version, about = "Camera preview session demo")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List discovered devices and exit.
    #[arg(long)]
    list_devices: bool,

    /// Overlay index to select after entry (e.g. 2 for the telephoto
    /// lens on the mock triple).
    #[arg(long)]
    select: Option<usize>,

    /// Keep the preview open until Ctrl-C, printing the status line.
    #[arg(long)]
    hold: bool,

    /// Use the real camera backend instead of the mock host.
    #[cfg(feature = "camera")]
    #[arg(long)]
    real: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    info!("Camview v{}", camview::VERSION);

    let config = match &cli.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    #[cfg(feature = "camera")]
    if cli.real {
        run(camview::NokhwaHost::new(), &config, &cli);
        return;
    }

    info!("Using mock host with the canonical rear triple");
    run(MockHost::with_rear_triple(), &config, &cli);
}

fn run<H: CameraHost>(host: H, config: &FileConfig, cli: &Cli) {
    let mut shell = PreviewShell::with_filter(host, config.discovery.filter());

    // Screen entry: discovery plus default selection, then a queued start.
    shell.on_enter();

    println!("Devices:");
    for (i, device) in shell.controller().devices().iter().enumerate() {
        let marker = if shell.controller().current_device() == Some(device) {
            "*"
        } else {
            " "
        };
        println!("  {marker} [{i}] {device}");
    }

    if cli.list_devices {
        shell.on_exit();
        shell.controller().wait_idle();
        return;
    }

    if let Some(index) = cli.select {
        shell.on_tap();
        shell.on_select(index);
        shell.on_tap();
    }

    shell.controller().wait_idle();
    println!("{}", shell.surface().status_line());

    if cli.hold {
        hold_until_interrupt(&shell, config.preview.status_interval_ms);
    }

    // Screen exit.
    shell.on_exit();
    shell.controller().wait_idle();
    info!("Session stopped, exiting");
}

fn hold_until_interrupt<H: CameraHost>(shell: &PreviewShell<H>, interval_ms: u64) {
    let (tx, rx) = mpsc::channel();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = tx.send(());
    }) {
        warn!("Failed to install Ctrl-C handler: {}", e);
        return;
    }

    info!("Holding preview open, press Ctrl-C to exit");
    loop {
        match rx.recv_timeout(Duration::from_millis(interval_ms)) {
            Err(mpsc::RecvTimeoutError::Timeout) => {
                println!("{}", shell.surface().status_line());
            }
            _ => break,
        }
    }
}
