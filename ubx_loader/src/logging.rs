use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Checked when `RUST_LOG` is not set
pub const LOG_ENV: &str = "UBX_LOADER_LOGLEVEL";

fn filter_directives(debug: bool) -> String {
    std::env::var("RUST_LOG")
        .or_else(|_| std::env::var(LOG_ENV))
        .unwrap_or_else(|_| if debug { "debug" } else { "info" }.to_string())
}

pub fn initialize(debug: bool) -> Result<()> {
    let filter = EnvFilter::try_new(filter_directives(debug))?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init()?;
    Ok(())
}
