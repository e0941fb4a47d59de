//! Host adapter table trait and the values it exchanges with the enumerator.

use super::{AdapterBuffer, AddressFamily, QueryFlags};

/// Outcome of asking the host to fill a buffer with its adapter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    /// The buffer now holds the complete table.
    Filled,
    /// The host has no adapters matching the query.
    NoData,
    /// The table grew since the probe; `required` bytes are now needed.
    BufferTooSmall {
        /// Size in bytes the host reported.
        required: usize,
    },
    /// Terminal failure with the host's native error code.
    Failed(u32),
}

/// Layout of the bytes a [`RecordEntry`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Source-defined bytes with no known layout.
    Opaque,
    /// A Windows `IP_ADAPTER_ADDRESSES_LH` written by `GetAdaptersAddresses`.
    AdapterAddresses,
}

/// One adapter record found while walking a filled buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
    pub(crate) offset: usize,
    pub(crate) len: usize,
    pub(crate) kind: RecordKind,
    pub(crate) identifier: String,
    pub(crate) internal_name: String,
    pub(crate) display_alias: String,
}

impl RecordEntry {
    /// Describes a record of `len` bytes at `offset` with no known layout.
    #[must_use]
    pub fn new(
        offset: usize,
        len: usize,
        identifier: impl Into<String>,
        internal_name: impl Into<String>,
        display_alias: impl Into<String>,
    ) -> Self {
        Self {
            offset,
            len,
            kind: RecordKind::Opaque,
            identifier: identifier.into(),
            internal_name: internal_name.into(),
            display_alias: display_alias.into(),
        }
    }

    /// Marks the record as a native layout. Only platform sources inside the
    /// crate can vouch for that, since typed access trusts it.
    #[cfg_attr(not(windows), allow(dead_code))]
    pub(crate) const fn with_kind(mut self, kind: RecordKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns true if the record lies entirely within `buffer_len` bytes.
    pub(crate) const fn fits(&self, buffer_len: usize) -> bool {
        match self.offset.checked_add(self.len) {
            Some(end) => end <= buffer_len,
            None => false,
        }
    }
}

/// The host's two-step adapter table facility.
///
/// # Design
///
/// - `probe` and `fetch` mirror the size-then-fill contract of the host API
/// - `walk` knows the record layout the same source wrote
/// - Enables dependency injection for testing with scripted sources
///
/// # Thread Safety
///
/// Sources must be `Send + Sync`; concurrent calls each use their own buffer.
pub trait AdapterSource: Send + Sync {
    /// Asks how many bytes the adapter table currently needs.
    ///
    /// Returns `Ok(0)` when the host has no matching adapters.
    ///
    /// # Errors
    ///
    /// Returns the host's native error code if the probe fails.
    fn probe(&self, family: AddressFamily, flags: QueryFlags) -> Result<usize, u32>;

    /// Fills `buffer` with the adapter table.
    fn fetch(&self, buffer: &mut AdapterBuffer, family: AddressFamily, flags: QueryFlags)
    -> FetchStatus;

    /// Lists the records in a buffer this source reported as
    /// [`FetchStatus::Filled`], in host order.
    fn walk(&self, buffer: &AdapterBuffer) -> Vec<RecordEntry>;
}
