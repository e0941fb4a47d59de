//! Platform-specific adapter table sources.
//!
//! # Platform Support
//!
//! - **Windows**: Uses the `GetAdaptersAddresses` API via the `windows` crate.
//!
//! Other platforms have no host source; the enumerator still builds there and
//! can be driven by any [`AdapterSource`](super::AdapterSource).

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use windows::WindowsAdapterSource;

// Re-export the platform source as PlatformSource for convenience
#[cfg(windows)]
pub use windows::WindowsAdapterSource as PlatformSource;
