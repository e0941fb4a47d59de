//! Windows adapter table access using `GetAdaptersAddresses`.

use std::mem;

use windows::Win32::Foundation::{ERROR_BUFFER_OVERFLOW, ERROR_NO_DATA, NO_ERROR};
use windows::Win32::NetworkManagement::IpHelper::{
    GET_ADAPTERS_ADDRESSES_FLAGS, GetAdaptersAddresses, IP_ADAPTER_ADDRESSES_LH,
};
use windows::core::{PSTR, PWSTR};

use crate::network::{
    AdapterBuffer, AdapterSource, AddressFamily, FetchStatus, QueryFlags, RecordEntry, RecordKind,
};

/// Windows implementation of [`AdapterSource`] backed by `GetAdaptersAddresses`.
///
/// # Example
///
/// ```no_run
/// use net_adapters::network::platform::WindowsAdapterSource;
/// use net_adapters::network::{AddressFamily, EnumerateOptions, QueryFlags, enumerate_with};
///
/// let source = WindowsAdapterSource::new();
/// let adapters = enumerate_with(
///     &source,
///     AddressFamily::Ipv4,
///     QueryFlags::INCLUDE_GATEWAYS,
///     &EnumerateOptions::default(),
/// )
/// .expect("Failed to enumerate adapters");
///
/// for adapter in &adapters {
///     println!("{}: {:?}", adapter.display_alias(), adapter.if_index());
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct WindowsAdapterSource {
    _private: (),
}

impl WindowsAdapterSource {
    /// Creates a new Windows adapter source.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AdapterSource for WindowsAdapterSource {
    fn probe(&self, family: AddressFamily, flags: QueryFlags) -> Result<usize, u32> {
        let mut size = 0u32;

        // SAFETY: a null buffer with a zero size only asks for the required length.
        let result = unsafe {
            GetAdaptersAddresses(
                u32::from(family.as_raw()),
                GET_ADAPTERS_ADDRESSES_FLAGS(flags.bits()),
                None,
                None,
                &raw mut size,
            )
        };

        map_size_query_result(result, size)
    }

    fn fetch(
        &self,
        buffer: &mut AdapterBuffer,
        family: AddressFamily,
        flags: QueryFlags,
    ) -> FetchStatus {
        let mut size = u32::try_from(buffer.len()).unwrap_or(u32::MAX);

        // SAFETY: the buffer is at least `size` bytes and 8-byte aligned.
        #[allow(clippy::cast_ptr_alignment)]
        let result = unsafe {
            GetAdaptersAddresses(
                u32::from(family.as_raw()),
                GET_ADAPTERS_ADDRESSES_FLAGS(flags.bits()),
                None,
                Some(buffer.as_mut_ptr().cast::<IP_ADAPTER_ADDRESSES_LH>()),
                &raw mut size,
            )
        };

        map_fetch_result(result, size)
    }

    fn walk(&self, buffer: &AdapterBuffer) -> Vec<RecordEntry> {
        let mut entries = Vec::new();
        if buffer.len() < mem::size_of::<IP_ADAPTER_ADDRESSES_LH>() {
            return entries;
        }

        let base = buffer.as_ptr().addr();
        #[allow(clippy::cast_ptr_alignment)]
        let mut current = buffer.as_ptr().cast::<IP_ADAPTER_ADDRESSES_LH>();

        // SAFETY: the list was written by GetAdaptersAddresses into `buffer`
        // and every `Next` points into the same allocation.
        while !current.is_null() {
            let record = unsafe { &*current };

            match current.addr().checked_sub(base) {
                Some(offset) => entries.push(read_record(record, offset)),
                None => tracing::warn!("Adapter record outside fetch buffer, skipping"),
            }

            current = record.Next;
        }

        entries
    }
}

/// Maps a size-query result code to the required length in bytes.
///
/// A host with no adapters answers `ERROR_NO_DATA`, and some versions answer
/// `NO_ERROR` for an empty table; both mean zero bytes are needed.
const fn map_size_query_result(result: u32, size: u32) -> Result<usize, u32> {
    if result == ERROR_BUFFER_OVERFLOW.0 {
        Ok(size as usize)
    } else if result == ERROR_NO_DATA.0 || result == NO_ERROR.0 {
        Ok(0)
    } else {
        Err(result)
    }
}

/// Maps a fill-call result code to a [`FetchStatus`].
const fn map_fetch_result(result: u32, size: u32) -> FetchStatus {
    if result == NO_ERROR.0 {
        FetchStatus::Filled
    } else if result == ERROR_NO_DATA.0 {
        FetchStatus::NoData
    } else if result == ERROR_BUFFER_OVERFLOW.0 {
        FetchStatus::BufferTooSmall {
            required: size as usize,
        }
    } else {
        FetchStatus::Failed(result)
    }
}

/// Copies the identifying strings out of one record.
///
/// Malformed text is decoded lossily so the adapter is still listed; only an
/// empty identifier causes the enumerator to drop the record.
fn read_record(record: &IP_ADAPTER_ADDRESSES_LH, offset: usize) -> RecordEntry {
    RecordEntry::new(
        offset,
        mem::size_of::<IP_ADAPTER_ADDRESSES_LH>(),
        read_ansi(record.AdapterName),
        read_wide(record.Description),
        read_wide(record.FriendlyName),
    )
    .with_kind(RecordKind::AdapterAddresses)
}

fn read_ansi(text: PSTR) -> String {
    if text.is_null() {
        return String::new();
    }
    // SAFETY: non-null strings in the record are NUL-terminated.
    String::from_utf8_lossy(unsafe { text.as_bytes() }).into_owned()
}

fn read_wide(text: PWSTR) -> String {
    if text.is_null() {
        return String::new();
    }
    // SAFETY: non-null strings in the record are NUL-terminated.
    decode_wide(unsafe { text.as_wide() })
}

/// Decodes UTF-16, replacing unpaired surrogates with U+FFFD.
fn decode_wide(units: &[u16]) -> String {
    String::from_utf16_lossy(units)
}
