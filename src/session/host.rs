//! Platform seam for camera hardware.
//!
//! This module provides trait-based abstractions over the platform's
//! media-capture layer, allowing for both real camera backends and mock
//! implementations for testing.

use crate::device::{DeviceInfo, DiscoveryFilter};
use thiserror::Error;

/// Errors that can occur while enumerating camera devices.
#[derive(Debug, Error)]
pub enum DiscoverError {
    /// The platform query itself failed.
    #[error("device enumeration failed: {0}")]
    Enumeration(String),
}

/// Errors that can occur while constructing a device input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The device is no longer present.
    #[error("camera device not found: {0}")]
    DeviceNotFound(String),
    /// The device exists but could not be opened.
    #[error("failed to open device {device}: {reason}")]
    OpenFailed {
        /// Identity of the device that failed.
        device: String,
        /// Platform-reported reason.
        reason: String,
    },
}

/// A binding of one device into a capture session.
///
/// Constructed by a [`CameraHost`]; owned by the session once attached.
/// `start`/`stop` are invoked from the session worker thread, so
/// implementations must be `Send`.
pub trait DeviceInput: Send {
    /// Identity of the device this input was constructed from.
    fn device_id(&self) -> &str;

    /// Format negotiation with the session. A `false` return means the
    /// session must refuse to attach this input.
    fn negotiate(&self) -> bool {
        true
    }

    /// Begin delivering frames.
    fn start(&mut self) {}

    /// Stop delivering frames.
    fn stop(&mut self) {}
}

/// Trait for platform camera backends.
///
/// This abstraction allows swapping between real camera hardware
/// and mock implementations for testing.
pub trait CameraHost {
    /// Enumerates devices matching `filter`, in discovery order.
    fn discover(&self, filter: &DiscoveryFilter) -> Result<Vec<DeviceInfo>, DiscoverError>;

    /// Constructs an input for `device`. Fallible: the device may be busy,
    /// disconnected, or refused by the platform.
    fn open_input(&self, device: &DeviceInfo) -> Result<Box<dyn DeviceInput>, InputError>;
}
