//! Single-shot enumeration run for the command-line front end.

use net_adapters::config::ValidatedConfig;
use net_adapters::network::{AdapterSource, EnumerateError, enumerate_with};
use net_adapters::output;
use thiserror::Error;

/// Error type for a run of the application.
#[derive(Debug, Error)]
pub enum RunError {
    /// The adapter enumeration failed.
    #[error(transparent)]
    Enumerate(#[from] EnumerateError),

    /// The adapters could not be rendered.
    #[error("Failed to render adapters: {0}")]
    Render(#[from] serde_json::Error),

    /// No adapter source exists for this platform.
    #[error("Adapter enumeration is only supported on Windows")]
    UnsupportedPlatform,
}

/// Enumerates adapters from the platform source and prints them to stdout.
///
/// # Errors
///
/// Returns [`RunError::UnsupportedPlatform`] off Windows, otherwise see [`render_with`].
#[cfg(not(tarpaulin_include))]
pub fn execute(config: &ValidatedConfig) -> Result<(), RunError> {
    let rendered = platform_render(config)?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

#[cfg(windows)]
fn platform_render(config: &ValidatedConfig) -> Result<String, RunError> {
    use net_adapters::network::platform::PlatformSource;

    render_with(&PlatformSource::new(), config)
}

#[cfg(not(windows))]
fn platform_render(_config: &ValidatedConfig) -> Result<String, RunError> {
    Err(RunError::UnsupportedPlatform)
}

/// Enumerates adapters from `source` and renders them in the configured format.
///
/// # Errors
///
/// Returns an error if the enumeration fails or the output cannot be rendered.
#[cfg_attr(not(windows), allow(dead_code))]
pub fn render_with<S: AdapterSource>(
    source: &S,
    config: &ValidatedConfig,
) -> Result<String, RunError> {
    let adapters = enumerate_with(source, config.family, config.flags, &config.options)?;
    tracing::info!(count = adapters.len(), family = %config.family, "Enumerated adapters");

    for adapter in &adapters {
        tracing::debug!(
            identifier = adapter.identifier(),
            alias = adapter.display_alias(),
            "Adapter"
        );
    }

    Ok(output::render(&adapters, config.format)?)
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
