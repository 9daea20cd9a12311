//! Immutable description of one physical camera.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lens type tag for a physical camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceKind {
    /// Ultra-wide lens.
    UltraWide,
    /// Standard wide-angle lens. The default selection when present.
    Wide,
    /// Telephoto lens.
    Telephoto,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeviceKind::UltraWide => "ultra-wide",
            DeviceKind::Wide => "wide",
            DeviceKind::Telephoto => "telephoto",
        };
        f.write_str(s)
    }
}

/// Which way the camera faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    /// Rear-facing camera.
    Back,
    /// User-facing camera.
    Front,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Back => f.write_str("back"),
            Position::Front => f.write_str("front"),
        }
    }
}

/// Describes one physical camera exposed by the host.
///
/// Instances are produced by discovery and treated as read-only handles.
/// Equality is by identity (`id`), not by display fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceInfo {
    id: String,
    name: String,
    kind: DeviceKind,
    position: Position,
}

impl DeviceInfo {
    /// Creates a new device description.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: DeviceKind,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            position,
        }
    }

    /// Stable device identity.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable device name, used by the picker overlay.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lens type tag.
    #[inline]
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    /// Facing position.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }
}

impl PartialEq for DeviceInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for DeviceInfo {}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.kind, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_id() {
        let a = DeviceInfo::new("cam0", "Back Wide", DeviceKind::Wide, Position::Back);
        let b = DeviceInfo::new("cam0", "Renamed", DeviceKind::Telephoto, Position::Back);
        let c = DeviceInfo::new("cam1", "Back Wide", DeviceKind::Wide, Position::Back);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_includes_kind() {
        let d = DeviceInfo::new("cam2", "Back Tele", DeviceKind::Telephoto, Position::Back);
        assert_eq!(d.to_string(), "Back Tele (telephoto, back)");
    }
}
