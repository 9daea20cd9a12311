//! Mock camera host for testing and the demo binary.

use super::host::{CameraHost, DeviceInput, DiscoverError, InputError};
use crate::device::{DeviceInfo, DeviceKind, DiscoveryFilter, Position};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock host with a scriptable device list and failure injection.
///
/// Failure knobs mirror the two fallible platform paths: input
/// construction (`fail_open`) and session attachment (`reject_attach`).
#[derive(Debug, Default)]
pub struct MockHost {
    devices: Vec<DeviceInfo>,
    fail_open: HashSet<String>,
    reject_attach: HashSet<String>,
    discover_count: Arc<AtomicUsize>,
    fail_discover: Arc<AtomicBool>,
}

impl MockHost {
    /// Creates a host with no devices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a host exposing the canonical rear triple:
    /// ultra-wide, wide, telephoto, in that discovery order.
    pub fn with_rear_triple() -> Self {
        let mut host = Self::new();
        host.push_device(DeviceInfo::new(
            "cam-uw",
            "Back Ultra Wide",
            DeviceKind::UltraWide,
            Position::Back,
        ));
        host.push_device(DeviceInfo::new(
            "cam-w",
            "Back Wide",
            DeviceKind::Wide,
            Position::Back,
        ));
        host.push_device(DeviceInfo::new(
            "cam-t",
            "Back Telephoto",
            DeviceKind::Telephoto,
            Position::Back,
        ));
        host
    }

    /// Adds a device to the enumeration result.
    pub fn push_device(&mut self, device: DeviceInfo) {
        self.devices.push(device);
    }

    /// Makes input construction fail for the device with `id`.
    pub fn fail_open(&mut self, id: impl Into<String>) {
        self.fail_open.insert(id.into());
    }

    /// Makes the session reject attachment of inputs for `id`.
    pub fn reject_attach(&mut self, id: impl Into<String>) {
        self.reject_attach.insert(id.into());
    }

    /// Shared counter of `discover` calls, for test assertions.
    pub fn discover_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.discover_count)
    }

    /// Shared switch that makes `discover` fail while set.
    pub fn discover_gate(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.fail_discover)
    }
}

impl CameraHost for MockHost {
    fn discover(&self, filter: &DiscoveryFilter) -> Result<Vec<DeviceInfo>, DiscoverError> {
        self.discover_count.fetch_add(1, Ordering::Relaxed);
        if self.fail_discover.load(Ordering::Relaxed) {
            return Err(DiscoverError::Enumeration("mock enumeration failure".into()));
        }
        let devices: Vec<DeviceInfo> = self
            .devices
            .iter()
            .filter(|d| filter.matches(d))
            .cloned()
            .collect();
        tracing::info!(count = devices.len(), "MockHost discovered devices");
        Ok(devices)
    }

    fn open_input(&self, device: &DeviceInfo) -> Result<Box<dyn DeviceInput>, InputError> {
        if !self.devices.iter().any(|d| d == device) {
            return Err(InputError::DeviceNotFound(device.id().to_string()));
        }
        if self.fail_open.contains(device.id()) {
            return Err(InputError::OpenFailed {
                device: device.id().to_string(),
                reason: "mock open failure".into(),
            });
        }
        Ok(Box::new(MockInput {
            id: device.id().to_string(),
            negotiable: !self.reject_attach.contains(device.id()),
            active: false,
        }))
    }
}

/// Input produced by [`MockHost`].
#[derive(Debug)]
pub struct MockInput {
    id: String,
    negotiable: bool,
    active: bool,
}

impl MockInput {
    /// Whether frames are currently being delivered.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl DeviceInput for MockInput {
    fn device_id(&self) -> &str {
        &self.id
    }

    fn negotiate(&self) -> bool {
        self.negotiable
    }

    fn start(&mut self) {
        self.active = true;
        tracing::info!(device = %self.id, "MockInput streaming");
    }

    fn stop(&mut self) {
        self.active = false;
        tracing::info!(device = %self.id, "MockInput stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovery_applies_filter() {
        let mut host = MockHost::with_rear_triple();
        host.push_device(DeviceInfo::new(
            "cam-front",
            "Front Wide",
            DeviceKind::Wide,
            Position::Front,
        ));

        let devices = host.discover(&DiscoveryFilter::default()).unwrap();
        assert_eq!(devices.len(), 3);
        assert!(devices.iter().all(|d| d.position() == Position::Back));
    }

    #[test]
    fn open_unknown_device_fails() {
        let host = MockHost::new();
        let ghost = DeviceInfo::new("ghost", "Ghost", DeviceKind::Wide, Position::Back);
        assert!(matches!(
            host.open_input(&ghost),
            Err(InputError::DeviceNotFound(_))
        ));
    }

    #[test]
    fn scripted_open_failure() {
        let mut host = MockHost::with_rear_triple();
        host.fail_open("cam-w");
        let wide = host.discover(&DiscoveryFilter::default()).unwrap()[1].clone();
        assert!(matches!(
            host.open_input(&wide),
            Err(InputError::OpenFailed { .. })
        ));
    }

    #[test]
    fn scripted_rejection_shows_in_negotiation() {
        let mut host = MockHost::with_rear_triple();
        host.reject_attach("cam-t");
        let tele = host.discover(&DiscoveryFilter::default()).unwrap()[2].clone();
        let input = host.open_input(&tele).unwrap();
        assert!(!input.negotiate());
    }
}
