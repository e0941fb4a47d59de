//! Network adapter enumeration.
//!
//! This module provides types and functions for:
//! - Query selectors ([`AddressFamily`], [`QueryFlags`])
//! - Adapter descriptors sharing one fetch buffer ([`AdapterDescriptor`], [`AdapterSet`])
//! - The host table contract ([`AdapterSource`])
//! - The enumeration itself ([`enumerate_with`], and `enumerate_adapters` on Windows)
//! - Platform-specific sources ([`platform`])

mod adapter;
mod buffer;
pub mod enumerate;
mod family;
pub mod platform;
mod source;


pub use adapter::{AdapterDescriptor, AdapterSet, cmp_ignore_case};
pub use buffer::AdapterBuffer;
#[cfg(windows)]
pub use enumerate::enumerate_adapters;
pub use enumerate::{EnumerateError, EnumerateOptions, enumerate_with};
pub use family::{AddressFamily, QueryFlags, UnknownAddressFamily};
pub use source::{AdapterSource, FetchStatus, RecordEntry, RecordKind};
