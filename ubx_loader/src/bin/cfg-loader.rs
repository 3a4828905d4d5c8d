use anyhow::{Context, Result};
use std::{fs::File, io::BufReader};
use tracing::{info, warn};
use ubx_loader::{
    cli::{self, LoaderArgs},
    logging,
    ubx_assist::CfgFileLoader,
};

fn main() -> Result<()> {
    let args = LoaderArgs::from_matches(&cli::cfg_command().get_matches())?;
    logging::initialize(args.debug)?;

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open configuration file: {}", args.file.display()))?;
    let port = cli::open_serialport(&args)?;

    let mut loader = CfgFileLoader::new(port);
    let report = loader.load(BufReader::new(file))?;
    info!(
        "Sent {} CFG messages to {} ({} resets)",
        report.sent, args.port, report.resets
    );
    if report.malformed > 0 {
        warn!("{} malformed lines were skipped", report.malformed);
    }
    Ok(())
}
