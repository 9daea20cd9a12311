//! The capture session and its configuration transaction.
//!
//! The session is an explicitly owned resource created by the controller
//! and shared by handle with the preview surface and the worker thread.
//! All input mutation goes through [`ConfigTxn`], a scoped bracket that
//! holds the session lock for the whole change set, so no observer ever
//! sees a partially applied input swap.

use super::host::DeviceInput;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared handle to a capture session.
pub type SessionHandle = Arc<Mutex<CaptureSession>>;

/// Locks a session handle, recovering from poisoning.
pub(crate) fn lock(handle: &SessionHandle) -> MutexGuard<'_, CaptureSession> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The active camera pipeline for one preview screen.
///
/// Holds at most one bound input and a running flag. Created once per
/// controller and destroyed with it; never a process-wide singleton.
pub struct CaptureSession {
    input: Option<Box<dyn DeviceInput>>,
    running: bool,
}

impl CaptureSession {
    /// Creates an empty, stopped session.
    pub fn new() -> Self {
        Self {
            input: None,
            running: false,
        }
    }

    /// Creates a session and wraps it in a shareable handle.
    pub fn new_handle() -> SessionHandle {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Whether the session is currently delivering frames.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether an input is attached.
    #[inline]
    pub fn has_input(&self) -> bool {
        self.input.is_some()
    }

    /// Identity of the bound input's device, if any.
    pub fn input_id(&self) -> Option<&str> {
        self.input.as_deref().map(DeviceInput::device_id)
    }

    /// Number of attached inputs. Always 0 or 1.
    pub fn input_count(&self) -> usize {
        usize::from(self.input.is_some())
    }

    /// Starts frame delivery. Invoked only from the session worker.
    pub(crate) fn start_running(&mut self) {
        self.running = true;
        if let Some(input) = self.input.as_mut() {
            input.start();
        }
    }

    /// Stops frame delivery. Invoked only from the session worker.
    pub(crate) fn stop_running(&mut self) {
        self.running = false;
        if let Some(input) = self.input.as_mut() {
            input.stop();
        }
    }
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped configuration transaction over a session.
///
/// Holds the session lock from `begin` until drop; the commit is the lock
/// release and happens on every exit path. Inputs attached while the
/// session is running are started immediately; removed inputs are stopped
/// before being handed back.
pub struct ConfigTxn<'a> {
    session: MutexGuard<'a, CaptureSession>,
}

impl<'a> ConfigTxn<'a> {
    /// Begins a configuration transaction on `handle`.
    pub fn begin(handle: &'a SessionHandle) -> Self {
        Self {
            session: lock(handle),
        }
    }

    /// Detaches and returns the current input, if one is attached.
    pub fn remove_input(&mut self) -> Option<Box<dyn DeviceInput>> {
        let mut input = self.session.input.take()?;
        if self.session.running {
            input.stop();
        }
        tracing::debug!(device = input.device_id(), "input removed from session");
        Some(input)
    }

    /// Whether the session would accept `input` right now.
    pub fn can_add_input(&self, input: &dyn DeviceInput) -> bool {
        self.session.input.is_none() && input.negotiate()
    }

    /// Attaches `input` to the session.
    ///
    /// Returns the input back on rejection (slot occupied or negotiation
    /// refused) so the caller can restore or discard it.
    pub fn add_input(
        &mut self,
        mut input: Box<dyn DeviceInput>,
    ) -> Result<(), Box<dyn DeviceInput>> {
        if !self.can_add_input(input.as_ref()) {
            return Err(input);
        }
        if self.session.running {
            input.start();
        }
        tracing::debug!(device = input.device_id(), "input added to session");
        self.session.input = Some(input);
        Ok(())
    }
}

impl Drop for ConfigTxn<'_> {
    fn drop(&mut self) {
        tracing::trace!("session configuration committed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestInput {
        id: String,
        negotiable: bool,
    }

    impl TestInput {
        fn boxed(id: &str) -> Box<dyn DeviceInput> {
            Box::new(Self {
                id: id.to_string(),
                negotiable: true,
            })
        }

        fn rejected(id: &str) -> Box<dyn DeviceInput> {
            Box::new(Self {
                id: id.to_string(),
                negotiable: false,
            })
        }
    }

    impl DeviceInput for TestInput {
        fn device_id(&self) -> &str {
            &self.id
        }

        fn negotiate(&self) -> bool {
            self.negotiable
        }
    }

    #[test]
    fn add_remove_roundtrip() {
        let handle = CaptureSession::new_handle();

        {
            let mut txn = ConfigTxn::begin(&handle);
            assert!(txn.add_input(TestInput::boxed("cam0")).is_ok());
        }
        assert_eq!(lock(&handle).input_id(), Some("cam0"));
        assert_eq!(lock(&handle).input_count(), 1);

        {
            let mut txn = ConfigTxn::begin(&handle);
            let removed = txn.remove_input().unwrap();
            assert_eq!(removed.device_id(), "cam0");
        }
        assert!(!lock(&handle).has_input());
    }

    #[test]
    fn occupied_slot_rejects_second_input() {
        let handle = CaptureSession::new_handle();
        let mut txn = ConfigTxn::begin(&handle);

        assert!(txn.add_input(TestInput::boxed("a")).is_ok());
        let returned = txn.add_input(TestInput::boxed("b")).unwrap_err();
        assert_eq!(returned.device_id(), "b");
        assert_eq!(txn.session.input_count(), 1);
    }

    #[test]
    fn negotiation_refusal_rejects_input() {
        let handle = CaptureSession::new_handle();
        let mut txn = ConfigTxn::begin(&handle);

        assert!(!txn.can_add_input(TestInput::rejected("bad").as_ref()));
        assert!(txn.add_input(TestInput::rejected("bad")).is_err());
        assert!(!txn.session.has_input());
    }

    #[test]
    fn remove_on_empty_session_is_none() {
        let handle = CaptureSession::new_handle();
        let mut txn = ConfigTxn::begin(&handle);
        assert!(txn.remove_input().is_none());
    }
}
