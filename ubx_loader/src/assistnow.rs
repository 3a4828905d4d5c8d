use anyhow::Result;
use std::io::Write;
use tracing::{info, warn};
use ubx_assist::{
    fetch_with_fallback, AssistNowClient, AssistNowConfig, DispatchConfig, DispatchReport,
    Dispatcher, DEFAULT_ENDPOINTS,
};

/// How an AssistNow run ended without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistNowOutcome {
    /// No API token configured, nothing was requested
    NoToken,
    /// Every server failed, nothing was sent
    Unavailable,
    Sent(DispatchReport),
}

/// Downloads AssistNow data and forwards it to the sink returned by `open_sink`.
///
/// The sink is only opened once there is data to send, so a missing token or
/// an unreachable service leaves the receiver untouched.
pub fn run<C, W, F>(
    config: &AssistNowConfig,
    client: &C,
    verbose: bool,
    open_sink: F,
) -> Result<AssistNowOutcome>
where
    C: AssistNowClient + ?Sized,
    W: Write,
    F: FnOnce() -> Result<W>,
{
    if config.token().is_none() {
        info!("No AssistNow API token provided. Skipping AssistNow.");
        return Ok(AssistNowOutcome::NoToken);
    }
    for warning in config.validate() {
        warn!("{warning}");
    }

    let data = match fetch_with_fallback(client, &DEFAULT_ENDPOINTS, &config.query_string()) {
        Ok(data) => data,
        Err(e) => {
            warn!("{e}, nothing sent to the receiver");
            return Ok(AssistNowOutcome::Unavailable);
        },
    };
    info!("Downloaded {} bytes of AssistNow data", data.len());

    let mut dispatcher = Dispatcher::new(
        open_sink()?,
        DispatchConfig {
            inter_message_delay: config.inter_message_delay(),
            verbose,
        },
    );
    let report = dispatcher.dispatch_stream(&data)?;
    Ok(AssistNowOutcome::Sent(report))
}
