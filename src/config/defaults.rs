//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use crate::network::{AddressFamily, QueryFlags, enumerate};

/// Default address family: both IPv4 and IPv6.
pub const FAMILY: AddressFamily = AddressFamily::Unspecified;

/// Default maximum number of fetch attempts per enumeration.
pub const MAX_ATTEMPTS: u32 = enumerate::DEFAULT_MAX_ATTEMPTS;

/// Upper bound accepted for `max_attempts`.
pub const MAX_ATTEMPTS_LIMIT: u32 = 16;

/// Default buffer growth factor applied to the probed size.
pub const SIZE_GROWTH: usize = enumerate::DEFAULT_SIZE_GROWTH;

/// Upper bound accepted for `size_growth`.
pub const SIZE_GROWTH_LIMIT: usize = 8;

/// Default query flags, used when neither CLI nor TOML names any.
#[must_use]
pub const fn flags() -> QueryFlags {
    QueryFlags::from_bits(
        QueryFlags::SKIP_ANYCAST.bits()
            | QueryFlags::SKIP_MULTICAST.bits()
            | QueryFlags::SKIP_DNS_SERVER.bits(),
    )
}
