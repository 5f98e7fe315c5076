//! Screenshot Manager - capture, browse, rename and delete screenshots
//!
//! A desktop tool that saves full-screen captures into a flat directory
//! on a global hotkey and offers a browser for the saved files. Closing
//! the window minimizes it to the system tray.

mod capture;
mod config;
mod dashboard;
mod hotkey;
mod library;
mod shared;
mod storage;
mod tray;

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::capture::{list_monitors, ScreenCapture};
use crate::config::AppConfig;
use crate::library::ScreenshotLibrary;
use crate::storage::ScreenshotStore;

/// Screenshot Manager - hotkey screen capture and screenshot browser
#[derive(Parser, Debug)]
#[command(name = "screenshot-manager")]
#[command(about = "Capture the screen on a hotkey and manage the saved screenshots")]
struct Args {
    /// Screenshot directory (overrides the configuration file)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Start minimized to the system tray
    #[arg(short, long)]
    minimized: bool,

    /// Configuration file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the screenshot listing, newest first, and exit
    #[arg(long)]
    list: bool,

    /// List available monitors and exit
    #[arg(long)]
    list_monitors: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // List monitors mode
    if args.list_monitors {
        println!("Available monitors:");
        let monitors = list_monitors()?;
        if monitors.is_empty() {
            println!("  No monitors detected");
        } else {
            for monitor in &monitors {
                println!(
                    "  [{}] {} - {}x{}{}",
                    monitor.index,
                    monitor.name,
                    monitor.width,
                    monitor.height,
                    if monitor.is_primary { " (primary)" } else { "" }
                );
            }
        }
        return Ok(());
    }

    let mut config = load_or_create_config(args.config.as_deref());
    if let Some(dir) = args.dir {
        config.storage.directory = Some(dir);
    }
    if args.minimized {
        config.general.start_minimized = true;
    }

    let screenshot_dir = config.screenshot_dir()?;
    let store = ScreenshotStore::new(&screenshot_dir);
    store.ensure_exists()?;
    info!("Screenshots are stored in {:?}", screenshot_dir);

    if args.list {
        print_listing(store, &config)?;
        return Ok(());
    }

    info!("Screenshot Manager starting...");

    if let Err(e) = dashboard::run_dashboard(config, store) {
        tracing::error!("Dashboard error: {}", e);
    }

    info!("Screenshot Manager shutdown complete");

    Ok(())
}

/// Load configuration from file, writing the defaults on first run
fn load_or_create_config(explicit: Option<&Path>) -> AppConfig {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match storage::get_config_dir() {
            Ok(dir) => dir.join("config.toml"),
            Err(e) => {
                warn!("{}; using default configuration", e);
                return AppConfig::default();
            }
        },
    };

    if config_path.exists() {
        match config::load_config(&config_path) {
            Ok(config) => {
                info!("Loaded configuration from {:?}", config_path);
                return config;
            }
            Err(e) => warn!("Ignoring unreadable configuration {:?}: {}", config_path, e),
        }
        return AppConfig::default();
    }

    let config = AppConfig::default();
    match config::save_config(&config, &config_path) {
        Ok(()) => info!("Wrote default configuration to {:?}", config_path),
        Err(e) => warn!("Could not write default configuration: {}", e),
    }
    config
}

/// `--list`: print the listing the browser would show
fn print_listing(store: ScreenshotStore, config: &AppConfig) -> Result<()> {
    let source = ScreenCapture::new(config.capture_config());
    let mut library = ScreenshotLibrary::new(store, Box::new(source));

    for entry in library.refresh()? {
        match entry.created_at() {
            Some(at) => println!("{}  {}", at.format("%Y-%m-%d %H:%M:%S"), entry.name()),
            None => println!("{:19}  {}", "", entry.name()),
        }
    }

    Ok(())
}
