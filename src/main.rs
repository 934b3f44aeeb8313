mod cli;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use dilogs::collector::collect_and_print;
use dilogs::runtime::{Availability, CliLogSource, RuntimeCommand, probe};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    cli::init_logging(args.debug);

    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let cfg = args.resolve_config(&cwd)?;
    let runtime = RuntimeCommand::parse(&cfg.runtime)?;

    if cfg.containers.is_empty() {
        log::debug!("no containers to collect");
        return Ok(());
    }

    if !args.skip_probe {
        match probe(&runtime)? {
            Availability::Ready => {}
            Availability::Unresponsive(status) => {
                log::warn!("`{runtime} version` failed ({status}), collecting anyway");
            }
        }
    }

    let mut source = CliLogSource::new(runtime);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = collect_and_print(&cfg.containers, &mut source, &mut out)
        .context("failed to write logs to stdout")?;

    log::info!(
        "dumped {} containers, {} could not be fetched",
        summary.sections,
        summary.failures
    );
    Ok(())
}
