//! Discovery query parameters.

use super::{DeviceInfo, DeviceKind, Position};
use serde::{Deserialize, Serialize};

/// Filter applied by a host when enumerating camera devices.
///
/// The default matches the preview screen's needs: rear-facing devices of
/// the three built-in lens kinds, in the order they should be displayed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryFilter {
    /// Lens kinds to include. Order is display order.
    pub kinds: Vec<DeviceKind>,
    /// Facing position to include.
    pub position: Position,
}

impl Default for DiscoveryFilter {
    fn default() -> Self {
        Self {
            kinds: vec![
                DeviceKind::UltraWide,
                DeviceKind::Wide,
                DeviceKind::Telephoto,
            ],
            position: Position::Back,
        }
    }
}

impl DiscoveryFilter {
    /// Returns true if `device` satisfies this filter.
    pub fn matches(&self, device: &DeviceInfo) -> bool {
        device.position() == self.position && self.kinds.contains(&device.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_accepts_back_lenses_only() {
        let filter = DiscoveryFilter::default();
        let back = DeviceInfo::new("b", "Back Wide", DeviceKind::Wide, Position::Back);
        let front = DeviceInfo::new("f", "Front Wide", DeviceKind::Wide, Position::Front);

        assert!(filter.matches(&back));
        assert!(!filter.matches(&front));
    }

    #[test]
    fn filter_respects_kind_subset() {
        let filter = DiscoveryFilter {
            kinds: vec![DeviceKind::Telephoto],
            position: Position::Back,
        };
        let wide = DeviceInfo::new("w", "Wide", DeviceKind::Wide, Position::Back);
        let tele = DeviceInfo::new("t", "Tele", DeviceKind::Telephoto, Position::Back);

        assert!(!filter.matches(&wide));
        assert!(filter.matches(&tele));
    }
}
