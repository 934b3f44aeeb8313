use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use dilogs::config::{self, Config};

/// Dump the logs of the di cluster containers on this host.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Containers to dump, in order. Defaults to the configured list.
    #[arg(value_name = "CONTAINER")]
    pub containers: Vec<String>,

    /// Runtime command, e.g. "docker" or "sudo docker".
    #[arg(short, long, value_name = "CMD")]
    pub runtime: Option<String>,

    /// YAML config file. Defaults to `.dilogs` in the current directory.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Don't check that the runtime answers before collecting.
    #[arg(long, default_value_t = false)]
    pub skip_probe: bool,

    /// Enable debug logging.
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    /// Resolve the effective config: command line, then config file, then defaults.
    pub fn resolve_config(&self, cwd: &Path) -> Result<Config> {
        let base = match &self.config {
            Some(path) => config::load_file(path)?,
            None => config::load(cwd)?,
        };
        Ok(base.with_overrides(self.runtime.as_deref(), &self.containers))
    }
}

pub fn init_logging(debug: bool) {
    if debug {
        env_logger::builder()
            .filter(None, log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }
}
