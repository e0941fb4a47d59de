//! Query selectors passed to the host adapter table.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use thiserror::Error;

/// Address family selector for an adapter query.
///
/// Discriminants are the Windows `AF_*` values from `ws2def.h`; they are
/// fixed here so the selector exists on every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressFamily {
    /// Both IPv4 and IPv6 (`AF_UNSPEC`).
    #[default]
    Unspecified,
    /// IPv4 only (`AF_INET`).
    Ipv4,
    /// IPv6 only (`AF_INET6`).
    Ipv6,
}

/// Raw family value not defined by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown address family: {0}")]
pub struct UnknownAddressFamily(pub u16);

impl AddressFamily {
    const AF_UNSPEC: u16 = 0;
    const AF_INET: u16 = 2;
    const AF_INET6: u16 = 23;

    /// Returns the `AF_*` constant for this family.
    #[must_use]
    pub const fn as_raw(self) -> u16 {
        match self {
            Self::Unspecified => Self::AF_UNSPEC,
            Self::Ipv4 => Self::AF_INET,
            Self::Ipv6 => Self::AF_INET6,
        }
    }

    /// Converts one of the `AF_*` constants into a family.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownAddressFamily`] for any value other than
    /// `AF_UNSPEC`, `AF_INET` or `AF_INET6`.
    pub const fn try_from_raw(raw: u16) -> Result<Self, UnknownAddressFamily> {
        match raw {
            Self::AF_UNSPEC => Ok(Self::Unspecified),
            Self::AF_INET => Ok(Self::Ipv4),
            Self::AF_INET6 => Ok(Self::Ipv6),
            other => Err(UnknownAddressFamily(other)),
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unspecified => write!(f, "Both (AF_UNSPEC)"),
            Self::Ipv4 => write!(f, "IPv4 (AF_INET)"),
            Self::Ipv6 => write!(f, "IPv6 (AF_INET6)"),
        }
    }
}

/// Bitset of `GAA_FLAG_*` values controlling what the host returns.
///
/// The bits are passed through verbatim, so values without a named
/// constant are preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct QueryFlags(u32);

impl QueryFlags {
    /// Do not return unicast addresses.
    pub const SKIP_UNICAST: Self = Self(0x0001);
    /// Do not return anycast addresses.
    pub const SKIP_ANYCAST: Self = Self(0x0002);
    /// Do not return multicast addresses.
    pub const SKIP_MULTICAST: Self = Self(0x0004);
    /// Do not return DNS server addresses.
    pub const SKIP_DNS_SERVER: Self = Self(0x0008);
    /// Return the list of IP address prefixes.
    pub const INCLUDE_PREFIX: Self = Self(0x0010);
    /// Do not return the adapter friendly name.
    pub const SKIP_FRIENDLY_NAME: Self = Self(0x0020);
    /// Return WINS server addresses.
    pub const INCLUDE_WINS_INFO: Self = Self(0x0040);
    /// Return default gateway addresses.
    pub const INCLUDE_GATEWAYS: Self = Self(0x0080);
    /// Return addresses for all NDIS interfaces, including disabled ones.
    pub const INCLUDE_ALL_INTERFACES: Self = Self(0x0100);
    /// Return addresses in all routing compartments.
    pub const INCLUDE_ALL_COMPARTMENTS: Self = Self(0x0200);
    /// Sort addresses by tunnel binding order.
    pub const INCLUDE_TUNNEL_BINDINGORDER: Self = Self(0x0400);

    const NAMED: [(&'static str, Self); 11] = [
        ("skip-unicast", Self::SKIP_UNICAST),
        ("skip-anycast", Self::SKIP_ANYCAST),
        ("skip-multicast", Self::SKIP_MULTICAST),
        ("skip-dns-server", Self::SKIP_DNS_SERVER),
        ("include-prefix", Self::INCLUDE_PREFIX),
        ("skip-friendly-name", Self::SKIP_FRIENDLY_NAME),
        ("include-wins-info", Self::INCLUDE_WINS_INFO),
        ("include-gateways", Self::INCLUDE_GATEWAYS),
        ("include-all-interfaces", Self::INCLUDE_ALL_INTERFACES),
        ("include-all-compartments", Self::INCLUDE_ALL_COMPARTMENTS),
        ("include-tunnel-bindingorder", Self::INCLUDE_TUNNEL_BINDINGORDER),
    ];

    /// Creates an empty flag set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Wraps raw `GAA_FLAG_*` bits.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns true if every bit of `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns true if no bits are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Looks up a single flag by its kebab-case name (e.g. `skip-anycast`).
    ///
    /// Matching is case-insensitive and accepts underscores in place of dashes.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
        Self::NAMED
            .iter()
            .find(|(known, _)| *known == normalized)
            .map(|(_, flag)| *flag)
    }

    /// Returns the kebab-case names of the named flags that are set.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect()
    }
}

impl BitOr for QueryFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for QueryFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Self> for QueryFlags {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |acc, flag| acc | flag)
    }
}

impl fmt::Display for QueryFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        write!(f, "{:#06x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod address_family {
        use super::*;

        #[test]
        fn raw_values_match_winsock() {
            assert_eq!(AddressFamily::Unspecified.as_raw(), 0);
            assert_eq!(AddressFamily::Ipv4.as_raw(), 2);
            assert_eq!(AddressFamily::Ipv6.as_raw(), 23);
        }

        #[test]
        fn try_from_raw_accepts_known_values() {
            for family in [
                AddressFamily::Unspecified,
                AddressFamily::Ipv4,
                AddressFamily::Ipv6,
            ] {
                assert_eq!(AddressFamily::try_from_raw(family.as_raw()), Ok(family));
            }
        }

        #[test]
        fn try_from_raw_rejects_unknown_value() {
            assert_eq!(
                AddressFamily::try_from_raw(10),
                Err(UnknownAddressFamily(10))
            );
        }

        #[test]
        fn default_is_unspecified() {
            assert_eq!(AddressFamily::default(), AddressFamily::Unspecified);
        }

        #[test]
        fn display_names_constant() {
            assert_eq!(AddressFamily::Ipv6.to_string(), "IPv6 (AF_INET6)");
            assert_eq!(
                UnknownAddressFamily(7).to_string(),
                "Unknown address family: 7"
            );
        }

        #[cfg(windows)]
        #[test]
        fn raw_values_match_windows_crate() {
            use windows::Win32::Networking::WinSock::{AF_INET, AF_INET6, AF_UNSPEC};

            assert_eq!(AddressFamily::Unspecified.as_raw(), AF_UNSPEC.0);
            assert_eq!(AddressFamily::Ipv4.as_raw(), AF_INET.0);
            assert_eq!(AddressFamily::Ipv6.as_raw(), AF_INET6.0);
        }
    }

    mod query_flags {
        use super::*;

        #[test]
        fn bitor_combines_flags() {
            let flags = QueryFlags::SKIP_ANYCAST | QueryFlags::INCLUDE_GATEWAYS;
            assert_eq!(flags.bits(), 0x0082);
            assert!(flags.contains(QueryFlags::SKIP_ANYCAST));
            assert!(!flags.contains(QueryFlags::SKIP_UNICAST));
        }

        #[test]
        fn unknown_bits_are_preserved() {
            let flags = QueryFlags::from_bits(0x8000_0001);
            assert_eq!(flags.bits(), 0x8000_0001);
            assert_eq!(flags.names(), vec!["skip-unicast"]);
        }

        #[test]
        fn from_name_is_lenient() {
            assert_eq!(
                QueryFlags::from_name("SKIP_DNS_SERVER"),
                Some(QueryFlags::SKIP_DNS_SERVER)
            );
            assert_eq!(
                QueryFlags::from_name(" include-gateways "),
                Some(QueryFlags::INCLUDE_GATEWAYS)
            );
            assert_eq!(QueryFlags::from_name("skip-everything"), None);
        }

        #[test]
        fn collect_unions_all() {
            let flags: QueryFlags = ["skip-anycast", "skip-multicast"]
                .into_iter()
                .filter_map(QueryFlags::from_name)
                .collect();
            assert_eq!(flags, QueryFlags::SKIP_ANYCAST | QueryFlags::SKIP_MULTICAST);
        }

        #[test]
        fn display_is_hex_or_none() {
            assert_eq!(QueryFlags::empty().to_string(), "none");
            assert_eq!(QueryFlags::INCLUDE_PREFIX.to_string(), "0x0010");
        }

        #[cfg(windows)]
        #[test]
        fn bits_match_windows_crate() {
            use windows::Win32::NetworkManagement::IpHelper::{
                GAA_FLAG_INCLUDE_ALL_COMPARTMENTS, GAA_FLAG_INCLUDE_GATEWAYS, GAA_FLAG_SKIP_ANYCAST,
                GAA_FLAG_SKIP_FRIENDLY_NAME,
            };

            assert_eq!(QueryFlags::SKIP_ANYCAST.bits(), GAA_FLAG_SKIP_ANYCAST.0);
            assert_eq!(
                QueryFlags::SKIP_FRIENDLY_NAME.bits(),
                GAA_FLAG_SKIP_FRIENDLY_NAME.0
            );
            assert_eq!(
                QueryFlags::INCLUDE_GATEWAYS.bits(),
                GAA_FLAG_INCLUDE_GATEWAYS.0
            );
            assert_eq!(
                QueryFlags::INCLUDE_ALL_COMPARTMENTS.bits(),
                GAA_FLAG_INCLUDE_ALL_COMPARTMENTS.0
            );
        }
    }
}
