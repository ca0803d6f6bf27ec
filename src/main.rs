// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use clap::error::ErrorKind;
use clap::Parser;
use local_properties::cli::{self, Args, USAGE};
use local_properties::search::driver;
use tracing::warn;

fn main() -> anyhow::Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(_) => {
            print!("{}", USAGE);
            return Ok(());
        }
    };
    cli::init_logging(args.verbose);

    let invocation = match args.validate() {
        Ok(invocation) => invocation,
        Err(err) => {
            warn!("{}", err);
            print!("{}", USAGE);
            return Ok(());
        }
    };

    if !args.ignored.is_empty() {
        warn!(arguments = ?args.ignored, "ignoring trailing arguments");
    }

    let stdout = std::io::stdout();
    driver::run(
        &invocation.configuration,
        invocation.selection,
        &args.search_options(),
        &mut stdout.lock(),
    )?;
    Ok(())
}
