use anyhow::Result;
use tracing::info;
use ubx_loader::{
    assistnow::{self, AssistNowOutcome},
    cli::{self, LoaderArgs},
    config::LoaderConfig,
    http::UreqClient,
    logging,
};

fn main() -> Result<()> {
    let args = LoaderArgs::from_matches(&cli::assistnow_command().get_matches())?;
    logging::initialize(args.debug)?;

    let config = LoaderConfig::load(&args.file)?.assist_now;
    let outcome = assistnow::run(&config, &UreqClient::default(), args.debug, || {
        cli::open_serialport(&args)
    })?;
    if let AssistNowOutcome::Sent(report) = outcome {
        info!(
            "Sent {} messages to {}, skipped {}",
            report.forwarded,
            args.port,
            report.rejected()
        );
    }
    Ok(())
}
