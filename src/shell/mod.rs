//! Presentation shell: one controller per screen, overlay toggling, and
//! lifecycle hook forwarding.
//!
//! The shell is deliberately thin. It owns exactly one
//! [`SessionController`], flips an overlay flag on tap, and forwards
//! selections. It is also the swallow point for selection and start
//! failures: they are logged and the previous state is kept, so the user
//! never sees an error, only whatever preview was last bound.

mod surface;

pub use surface::PreviewSurface;

use crate::device::{DeviceInfo, DiscoveryFilter};
use crate::session::{CameraHost, SessionController};

/// A minimal camera preview screen.
pub struct PreviewShell<H: CameraHost> {
    controller: SessionController<H>,
    surface: PreviewSurface,
    overlay_visible: bool,
}

impl<H: CameraHost> PreviewShell<H> {
    /// Creates the screen with the default rear-facing discovery filter.
    pub fn new(host: H) -> Self {
        Self::with_filter(host, DiscoveryFilter::default())
    }

    /// Creates the screen with an explicit discovery filter.
    pub fn with_filter(host: H, filter: DiscoveryFilter) -> Self {
        let controller = SessionController::with_filter(host, filter);
        let surface = PreviewSurface::bind(controller.session());
        Self {
            controller,
            surface,
            overlay_visible: false,
        }
    }

    /// Screen-entry hook: starts the session.
    pub fn on_enter(&mut self) {
        if let Err(error) = self.controller.start_session() {
            tracing::warn!(%error, "session start failed");
        }
    }

    /// Screen-exit hook: requests a session stop.
    pub fn on_exit(&mut self) {
        self.controller.stop_session();
    }

    /// Tap hook: toggles the device-picker overlay.
    pub fn on_tap(&mut self) {
        self.overlay_visible = !self.overlay_visible;
        tracing::debug!(visible = self.overlay_visible, "overlay toggled");
    }

    /// Selection hook: binds the device at `index` in the overlay list.
    /// Failures are logged and the previous binding is kept. The overlay
    /// stays open after a pick.
    pub fn on_select(&mut self, index: usize) {
        let Some(device) = self.controller.devices().get(index).cloned() else {
            tracing::warn!(index, "selection index out of range");
            return;
        };
        if let Err(error) = self.controller.select_device(&device) {
            tracing::warn!(device = device.id(), %error, "device selection failed");
        }
    }

    /// Whether the device-picker overlay is showing.
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// Overlay entries, present only while the overlay is showing.
    pub fn overlay_entries(&self) -> Option<&[DeviceInfo]> {
        self.overlay_visible.then(|| self.controller.devices())
    }

    /// The rendering surface bound to this screen's session.
    pub fn surface(&self) -> &PreviewSurface {
        &self.surface
    }

    /// The underlying controller.
    pub fn controller(&self) -> &SessionController<H> {
        &self.controller
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceKind;
    use crate::session::MockHost;

    fn shell() -> PreviewShell<MockHost> {
        PreviewShell::new(MockHost::with_rear_triple())
    }

    #[test]
    fn overlay_toggles_and_lists_devices_by_name() {
        let mut shell = shell();
        shell.on_enter();

        assert!(shell.overlay_entries().is_none());

        shell.on_tap();
        let entries = shell.overlay_entries().unwrap();
        assert_eq!(
            entries.iter().map(DeviceInfo::name).collect::<Vec<_>>(),
            ["Back Ultra Wide", "Back Wide", "Back Telephoto"]
        );

        shell.on_tap();
        assert!(shell.overlay_entries().is_none());
    }

    #[test]
    fn selection_through_overlay_switches_device() {
        let mut shell = shell();
        shell.on_enter();
        shell.on_tap();

        shell.on_select(2);
        assert_eq!(
            shell.controller().current_device().map(DeviceInfo::kind),
            Some(DeviceKind::Telephoto)
        );
        // Overlay stays open after a pick.
        assert!(shell.overlay_visible());
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut shell = shell();
        shell.on_enter();
        let before = shell.controller().bound_input_id();

        shell.on_select(42);
        assert_eq!(shell.controller().bound_input_id(), before);
    }

    #[test]
    fn failed_selection_keeps_previous_binding() {
        let mut host = MockHost::with_rear_triple();
        host.fail_open("cam-t");
        let mut shell = PreviewShell::new(host);
        shell.on_enter();

        shell.on_select(2);
        assert_eq!(shell.controller().bound_input_id().as_deref(), Some("cam-w"));
    }

    #[test]
    fn enter_and_exit_drive_the_session() {
        let mut shell = shell();
        shell.on_enter();
        shell.controller().wait_idle();
        assert!(shell.surface().is_live());

        shell.on_exit();
        shell.controller().wait_idle();
        assert!(!shell.surface().is_live());
    }
}
