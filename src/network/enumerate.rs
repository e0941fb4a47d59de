//! Adapter enumeration over a host adapter table.

use std::sync::Arc;

use thiserror::Error;

use super::{
    AdapterBuffer, AdapterDescriptor, AdapterSet, AdapterSource, AddressFamily, FetchStatus,
    QueryFlags,
};

/// `ERROR_BUFFER_OVERFLOW`, reported when the table keeps outgrowing the buffer.
/// Value from Windows SDK `winerror.h`.
pub const ERROR_BUFFER_OVERFLOW: u32 = 111;

/// Default upper bound on fetch attempts per enumeration.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default multiplier applied to the reported size before allocating.
pub const DEFAULT_SIZE_GROWTH: usize = 2;

/// Error type for adapter enumeration.
///
/// Both variants carry the host's native error code. No adapters are
/// returned alongside either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EnumerateError {
    /// The size probe failed.
    #[error("Adapter table size probe failed with host error {code}")]
    QueryFailure {
        /// Native error code from the host.
        code: u32,
    },

    /// The fetch failed, or the table kept outgrowing the buffer.
    #[error("Adapter table fetch failed with host error {code}")]
    FetchFailure {
        /// Native error code from the host.
        code: u32,
    },
}

impl EnumerateError {
    /// The host's native error code.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::QueryFailure { code } | Self::FetchFailure { code } => *code,
        }
    }
}

/// Tuning for the size/fetch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerateOptions {
    /// Maximum number of fetches before giving up. Values below 1 act as 1.
    pub max_attempts: u32,
    /// Multiplier applied to the reported size. Values below 1 act as 1.
    pub size_growth: usize,
}

impl Default for EnumerateOptions {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            size_growth: DEFAULT_SIZE_GROWTH,
        }
    }
}

impl EnumerateOptions {
    fn allocation_for(&self, required: usize) -> usize {
        required.saturating_mul(self.size_growth.max(1))
    }
}

/// Enumerates the host's network adapters.
///
/// Uses `GetAdaptersAddresses` with [`EnumerateOptions::default`].
///
/// # Errors
///
/// See [`enumerate_with`].
///
/// # Example
///
/// ```no_run
/// use net_adapters::network::{AddressFamily, QueryFlags, enumerate_adapters};
///
/// let adapters = enumerate_adapters(AddressFamily::Unspecified, QueryFlags::SKIP_ANYCAST)
///     .expect("Failed to enumerate adapters");
///
/// for adapter in &adapters {
///     println!("{} {}", adapter.identifier(), adapter.display_alias());
/// }
/// ```
#[cfg(windows)]
pub fn enumerate_adapters(
    family: AddressFamily,
    flags: QueryFlags,
) -> Result<AdapterSet, EnumerateError> {
    enumerate_with(
        &super::platform::WindowsAdapterSource::new(),
        family,
        flags,
        &EnumerateOptions::default(),
    )
}

/// Enumerates adapters from `source`.
///
/// Probes the table size, fetches into a buffer grown by
/// `options.size_growth`, and refetches with a fresh buffer whenever the
/// host reports the table outgrew it, up to `options.max_attempts` fetches.
/// Records with an empty identifier are skipped; a later record whose
/// identifier matches an earlier one ignoring case replaces it.
///
/// # Errors
///
/// - [`EnumerateError::QueryFailure`] if the probe fails
/// - [`EnumerateError::FetchFailure`] if a fetch fails, or the table still
///   does not fit after `max_attempts` fetches
pub fn enumerate_with<S>(
    source: &S,
    family: AddressFamily,
    flags: QueryFlags,
    options: &EnumerateOptions,
) -> Result<AdapterSet, EnumerateError>
where
    S: AdapterSource + ?Sized,
{
    let required = source
        .probe(family, flags)
        .map_err(|code| EnumerateError::QueryFailure { code })?;

    if required == 0 {
        tracing::debug!(%family, %flags, "Host reports no adapters");
        return Ok(AdapterSet::new());
    }

    let Some(buffer) = fetch_table(source, family, flags, options, required)? else {
        tracing::debug!(%family, %flags, "Host reports no adapters");
        return Ok(AdapterSet::new());
    };

    let adapters = collect_descriptors(source, buffer);
    tracing::debug!(%family, %flags, count = adapters.len(), "Enumerated adapters");
    Ok(adapters)
}

/// Runs the bounded allocate-and-fetch loop.
///
/// Returns `Ok(None)` if the host reports no data.
fn fetch_table<S>(
    source: &S,
    family: AddressFamily,
    flags: QueryFlags,
    options: &EnumerateOptions,
    required: usize,
) -> Result<Option<AdapterBuffer>, EnumerateError>
where
    S: AdapterSource + ?Sized,
{
    let max_attempts = options.max_attempts.max(1);
    let mut len = options.allocation_for(required);

    for attempt in 1..=max_attempts {
        let mut buffer = AdapterBuffer::with_len(len);

        match source.fetch(&mut buffer, family, flags) {
            FetchStatus::Filled => return Ok(Some(buffer)),
            FetchStatus::NoData => return Ok(None),
            FetchStatus::BufferTooSmall { required: reported } => {
                tracing::debug!(
                    attempt,
                    max_attempts,
                    allocated = buffer.len(),
                    required = reported,
                    "Adapter table grew during fetch, retrying"
                );
                // The margin applies to the host's figure only; the previous
                // length is a floor so a stale report never shrinks the buffer.
                len = options.allocation_for(reported).max(buffer.len());
            }
            FetchStatus::Failed(code) => return Err(EnumerateError::FetchFailure { code }),
        }
    }

    Err(EnumerateError::FetchFailure {
        code: ERROR_BUFFER_OVERFLOW,
    })
}

fn collect_descriptors<S>(source: &S, buffer: AdapterBuffer) -> AdapterSet
where
    S: AdapterSource + ?Sized,
{
    let entries = source.walk(&buffer);
    let buffer = Arc::new(buffer);
    let mut adapters = AdapterSet::new();

    for entry in entries {
        if entry.identifier.is_empty() {
            tracing::trace!(offset = entry.offset, "Skipping adapter without identifier");
            continue;
        }

        let offset = entry.offset;
        let Some(descriptor) = AdapterDescriptor::new(Arc::clone(&buffer), entry) else {
            tracing::warn!(offset, "Skipping adapter record outside buffer");
            continue;
        };

        if let Some(previous) = adapters.replace(descriptor) {
            tracing::trace!(
                identifier = previous.identifier(),
                "Duplicate adapter identifier, keeping later record"
            );
        }
    }

    adapters
}
