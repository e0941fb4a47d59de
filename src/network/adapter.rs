//! Adapter descriptors returned by an enumeration.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::AdapterBuffer;
use super::source::{RecordEntry, RecordKind};

#[cfg(windows)]
use windows::Win32::NetworkManagement::IpHelper::IP_ADAPTER_ADDRESSES_LH;
#[cfg(windows)]
use windows::Win32::NetworkManagement::Ndis::IfOperStatusUp;

/// Adapters from one enumeration, ordered case-insensitively by identifier.
pub type AdapterSet = BTreeSet<AdapterDescriptor>;

/// Compares two strings ignoring case.
///
/// Uses the Unicode simple lowercase mapping character by character, which
/// is locale-independent and agrees with `_wcsicmp` on ASCII text such as
/// adapter GUIDs.
#[must_use]
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// A read-only view of one network adapter.
///
/// Every descriptor from the same enumeration shares that enumeration's
/// buffer, which stays alive as long as any of them does. The raw record is
/// located by offset and resolved against the buffer on each access.
///
/// # Equality
///
/// Two descriptors are equal if their identifiers are equal ignoring case.
/// Names and aliases are not compared.
#[derive(Clone)]
pub struct AdapterDescriptor {
    buffer: Arc<AdapterBuffer>,
    offset: usize,
    len: usize,
    kind: RecordKind,
    identifier: String,
    internal_name: String,
    display_alias: String,
}

impl AdapterDescriptor {
    /// Wraps a record entry, taking a share of its buffer.
    ///
    /// Returns `None` if the record does not lie within the buffer.
    pub(crate) fn new(buffer: Arc<AdapterBuffer>, entry: RecordEntry) -> Option<Self> {
        if !entry.fits(buffer.len()) {
            return None;
        }

        Some(Self {
            buffer,
            offset: entry.offset,
            len: entry.len,
            kind: entry.kind,
            identifier: entry.identifier,
            internal_name: entry.internal_name,
            display_alias: entry.display_alias,
        })
    }

    /// The adapter's stable unique handle (its GUID string on Windows).
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The OS-level interface name.
    #[must_use]
    pub fn internal_name(&self) -> &str {
        &self.internal_name
    }

    /// The human-facing name, as shown in the network settings UI.
    #[must_use]
    pub fn display_alias(&self) -> &str {
        &self.display_alias
    }

    /// Layout of the raw record.
    #[must_use]
    pub const fn record_kind(&self) -> RecordKind {
        self.kind
    }

    /// The bytes of the platform record this descriptor was built from.
    #[must_use]
    pub fn raw_bytes(&self) -> &[u8] {
        &self.buffer.as_bytes()[self.offset..self.offset + self.len]
    }

    /// Returns true if both descriptors came from the same enumeration.
    #[must_use]
    pub fn shares_buffer_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.buffer, &other.buffer)
    }

    /// The `IP_ADAPTER_ADDRESSES` record this descriptor was built from.
    ///
    /// Returns `None` if the record did not come from `GetAdaptersAddresses`.
    /// Pointers inside the record refer to the same buffer and are valid
    /// for the lifetime of the borrow.
    #[cfg(windows)]
    #[must_use]
    pub fn raw(&self) -> Option<&IP_ADAPTER_ADDRESSES_LH> {
        if self.kind != RecordKind::AdapterAddresses {
            return None;
        }

        // SAFETY: records of this kind are only produced by the Windows source,
        // which found them by walking the list the host wrote into this buffer.
        // `new` checked that the whole record lies within the buffer.
        #[allow(clippy::cast_ptr_alignment)]
        let record = unsafe {
            &*self
                .buffer
                .as_ptr()
                .add(self.offset)
                .cast::<IP_ADAPTER_ADDRESSES_LH>()
        };
        Some(record)
    }

    /// IPv4 interface index (0 if IPv4 is disabled on the adapter).
    ///
    /// Returns `None` if the record is not a native `IP_ADAPTER_ADDRESSES_LH`.
    #[cfg(windows)]
    #[must_use]
    pub fn if_index(&self) -> Option<u32> {
        // SAFETY: both union variants are plain integers.
        self.raw().map(|r| unsafe { r.Anonymous1.Anonymous.IfIndex })
    }

    /// IPv6 interface index (0 if IPv6 is disabled on the adapter).
    ///
    /// Returns `None` if the record is not a native `IP_ADAPTER_ADDRESSES_LH`.
    #[cfg(windows)]
    #[must_use]
    pub fn ipv6_if_index(&self) -> Option<u32> {
        self.raw().map(|r| r.Ipv6IfIndex)
    }

    /// The interface LUID as its 64-bit value, or `None` for a non-native record.
    #[cfg(windows)]
    #[must_use]
    pub fn luid(&self) -> Option<u64> {
        // SAFETY: `Value` covers the whole union.
        self.raw().map(|r| unsafe { r.Luid.Value })
    }

    /// IANA interface type (`IF_TYPE_*`), or `None` for a non-native record.
    #[cfg(windows)]
    #[must_use]
    pub fn if_type(&self) -> Option<u32> {
        self.raw().map(|r| r.IfType)
    }

    /// Whether the adapter's operational status is up, or `None` for a
    /// non-native record.
    #[cfg(windows)]
    #[must_use]
    pub fn is_up(&self) -> Option<bool> {
        self.raw().map(|r| r.OperStatus == IfOperStatusUp)
    }
}

impl PartialEq for AdapterDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AdapterDescriptor {}

impl PartialOrd for AdapterDescriptor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AdapterDescriptor {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_ignore_case(&self.identifier, &other.identifier)
    }
}

impl fmt::Debug for AdapterDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterDescriptor")
            .field("identifier", &self.identifier)
            .field("internal_name", &self.internal_name)
            .field("display_alias", &self.display_alias)
            .field("kind", &self.kind)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

impl Serialize for AdapterDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AdapterDescriptor", 3)?;
        state.serialize_field("identifier", &self.identifier)?;
        state.serialize_field("internal_name", &self.internal_name)?;
        state.serialize_field("display_alias", &self.display_alias)?;
        state.end()
    }
}
