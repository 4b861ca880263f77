//! Tracing initialization for the embedding application.
//!
//! The library crates only emit events; installing a subscriber is the
//! application's call, made once at startup through [`init`].

/// Install the global tracing subscriber.
///
/// `MEDISORT_LOG` overrides the default level with a full `EnvFilter`
/// directive string (e.g. `medi_classify=debug,warn`).
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(default_level: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("MEDISORT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
