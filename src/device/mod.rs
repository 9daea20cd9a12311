//! Camera device descriptions and discovery filtering.
//!
//! Devices are immutable handles produced by a discovery query; the
//! session layer never mutates them, only binds them as inputs.

mod filter;
mod info;

pub use filter::DiscoveryFilter;
pub use info::{DeviceInfo, DeviceKind, Position};
