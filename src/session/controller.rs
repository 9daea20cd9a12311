//! Session controller: discovery, default selection, and input swapping.

use super::capture::{lock, CaptureSession, ConfigTxn, SessionHandle};
use super::host::{CameraHost, DiscoverError, InputError};
use super::worker::SessionWorker;
use crate::device::{DeviceInfo, DeviceKind, DiscoveryFilter};
use thiserror::Error;

/// Errors returned by [`SessionController::select_device`].
#[derive(Debug, Error)]
pub enum SelectError {
    /// The host could not construct an input for the device. The session
    /// is left on its previous input.
    #[error("input construction failed for {device}")]
    InputConstruction {
        /// Identity of the requested device.
        device: String,
        /// Underlying host error.
        #[source]
        source: InputError,
    },
    /// The session refused the new input. The previous input, if any,
    /// was restored within the same configuration transaction.
    #[error("session rejected input for {device}; previous input restored")]
    InputRejected {
        /// Identity of the requested device.
        device: String,
    },
}

/// Manages the capture session's lifecycle and its single active input.
///
/// All state is owned and mutated from the caller's thread; the only
/// off-thread operations are start and stop, which are queued on a
/// dedicated worker. Configuration (device discovery plus default
/// selection) runs at most once per controller lifetime.
pub struct SessionController<H: CameraHost> {
    host: H,
    filter: DiscoveryFilter,
    session: SessionHandle,
    worker: SessionWorker,
    devices: Vec<DeviceInfo>,
    current: Option<DeviceInfo>,
    configured: bool,
}

impl<H: CameraHost> SessionController<H> {
    /// Creates a controller with the default rear-facing filter.
    pub fn new(host: H) -> Self {
        Self::with_filter(host, DiscoveryFilter::default())
    }

    /// Creates a controller with an explicit discovery filter.
    pub fn with_filter(host: H, filter: DiscoveryFilter) -> Self {
        let session = CaptureSession::new_handle();
        let worker = SessionWorker::spawn(session.clone());
        Self {
            host,
            filter,
            session,
            worker,
            devices: Vec::new(),
            current: None,
            configured: false,
        }
    }

    /// Starts the session.
    ///
    /// The first successful call runs device discovery and auto-selects
    /// the wide-angle device if one was found. Every call queues a start
    /// request on the worker; the caller is never blocked on hardware.
    /// A discovery failure leaves the controller unconfigured, so a later
    /// call retries.
    pub fn start_session(&mut self) -> Result<(), DiscoverError> {
        self.configure()?;
        self.worker.submit_start();
        Ok(())
    }

    /// Requests a session stop. Non-blocking; a no-op if the session is
    /// not running when the worker gets to it.
    pub fn stop_session(&self) {
        self.worker.submit_stop();
    }

    /// Binds `device` as the session's input.
    ///
    /// On failure the previous binding is kept: a construction failure
    /// never touches the session, and a rejection by the session restores
    /// the previous input before the transaction commits.
    pub fn select_device(&mut self, device: &DeviceInfo) -> Result<(), SelectError> {
        let input =
            self.host
                .open_input(device)
                .map_err(|source| SelectError::InputConstruction {
                    device: device.id().to_string(),
                    source,
                })?;

        let mut txn = ConfigTxn::begin(&self.session);
        let previous = txn.remove_input();
        match txn.add_input(input) {
            Ok(()) => {
                tracing::info!(device = device.id(), kind = %device.kind(), "device selected");
                self.current = Some(device.clone());
                Ok(())
            }
            Err(_rejected) => {
                if let Some(prev) = previous {
                    // Restore within the same transaction; the previous
                    // input was accepted once, so re-adding cannot fail.
                    let _ = txn.add_input(prev);
                }
                Err(SelectError::InputRejected {
                    device: device.id().to_string(),
                })
            }
        }
    }

    /// Discovered devices, in discovery order. Empty until the first
    /// successful `start_session`.
    pub fn devices(&self) -> &[DeviceInfo] {
        &self.devices
    }

    /// The device currently bound as the session input, if any.
    pub fn current_device(&self) -> Option<&DeviceInfo> {
        self.current.as_ref()
    }

    /// Whether discovery has run.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    /// Shared handle to the capture session, for binding a preview
    /// surface.
    pub fn session(&self) -> SessionHandle {
        self.session.clone()
    }

    /// Blocks until all previously queued start/stop requests have
    /// executed. Intended for orderly shutdown and tests.
    pub fn wait_idle(&self) {
        self.worker.wait_idle();
    }

    fn configure(&mut self) -> Result<(), DiscoverError> {
        if self.configured {
            return Ok(());
        }
        let devices = self.host.discover(&self.filter)?;
        self.configured = true;
        self.devices = devices;
        tracing::info!(count = self.devices.len(), "camera devices discovered");

        let default = self
            .devices
            .iter()
            .find(|d| d.kind() == DeviceKind::Wide)
            .cloned();
        if let Some(device) = default {
            if let Err(error) = self.select_device(&device) {
                tracing::warn!(device = device.id(), %error, "default selection failed");
            }
        }
        Ok(())
    }
}

impl<H: CameraHost> SessionController<H> {
    /// Identity of the input currently attached to the session, observed
    /// through the session itself.
    pub fn bound_input_id(&self) -> Option<String> {
        lock(&self.session).input_id().map(str::to_string)
    }
}
