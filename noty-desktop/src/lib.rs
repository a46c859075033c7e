//! Noty desktop application: an `iced` shell over [`noty_core`].

pub mod app;
pub mod menu;
pub mod settings;

use clap::Parser;
use std::path::PathBuf;

/// Command-line overrides for the stored settings.
#[derive(Debug, Parser)]
#[command(name = "noty", version, about = "Pages of plain-text blocks")]
pub struct Cli {
    /// Notes store to open instead of the one in settings.json.
    #[arg(long, value_name = "PATH")]
    pub storage: Option<PathBuf>,

    /// Keep everything in memory; nothing is written to disk.
    #[arg(long, conflicts_with = "storage")]
    pub ephemeral: bool,
}

/// Where the workspace's pages live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreTarget {
    File(PathBuf),
    Memory,
}

impl Cli {
    pub fn store_target(&self, settings: &settings::AppSettings) -> StoreTarget {
        if self.ephemeral {
            StoreTarget::Memory
        } else {
            StoreTarget::File(
                self.storage
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(&settings.storage_path)),
            )
        }
    }
}

/// Installs the `tracing` subscriber; `log` records from the core are bridged into it.
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("logging already initialised: {e}");
    }
}

pub fn run() -> iced::Result {
    init_logging();
    let cli = Cli::parse();
    let settings_path = settings::settings_file_path();
    let settings = settings::load_settings_from(&settings_path);
    let target = cli.store_target(&settings);
    log::info!("starting noty with store {target:?}");
    app::run(settings, settings_path, target)
}
