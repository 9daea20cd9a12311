//! Capture session lifecycle and device input management.
//!
//! The controller owns the session and the worker; platform specifics
//! live behind the [`CameraHost`] trait so the whole layer is testable
//! with [`MockHost`].

mod capture;
mod controller;
mod host;
mod mock;
#[cfg(feature = "camera")]
mod nokhwa_host;
mod worker;

pub use capture::{CaptureSession, ConfigTxn, SessionHandle};
pub use controller::{SelectError, SessionController};
pub use host::{CameraHost, DeviceInput, DiscoverError, InputError};
pub use mock::{MockHost, MockInput};
#[cfg(feature = "camera")]
pub use nokhwa_host::NokhwaHost;

pub(crate) use capture::lock;
