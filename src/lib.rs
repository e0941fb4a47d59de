//! net-adapters: Windows network adapter enumeration
//!
//! A library for listing the host's network adapters with their identifier,
//! interface name, display alias and raw `IP_ADAPTER_ADDRESSES` record.

pub mod config;
pub mod network;
pub mod output;
