//! Camview: a minimal camera preview session core.
//!
//! Discovers back-facing camera devices, manages one capture session per
//! screen, and exposes a thin presentation shell with a tappable
//! device-picker overlay.
//!
//! # Architecture
//!
//! ```text
//! shell (hooks, overlay) → session (controller, worker) → host (platform)
//!                              ↓
//!                     surface (status view)
//! ```
//!
//! # Design principles
//!
//! - **Explicit ownership**: the capture session is created and destroyed
//!   with its controller and shared by handle, never a global singleton.
//! - **Non-blocking lifecycle**: start/stop are queued on a dedicated
//!   worker; the running guard is checked at execution time.
//! - **Explicit failure**: `select_device` returns a typed error; the
//!   shell is the one place failures are logged and dropped.
//! - **Testable seam**: all platform access goes through the `CameraHost`
//!   trait; a mock host ships in the crate.
//!
//! # Example
//!
//! ```
//! use camview::{MockHost, PreviewShell};
//!
//! let mut shell = PreviewShell::new(MockHost::with_rear_triple());
//!
//! // Screen entry: discovery runs once, the wide lens is bound.
//! shell.on_enter();
//!
//! // Tap to open the picker, select the telephoto lens.
//! shell.on_tap();
//! let count = shell.overlay_entries().unwrap().len();
//! shell.on_select(count - 1);
//!
//! shell.controller().wait_idle();
//! assert!(shell.surface().is_live());
//!
//! // Screen exit.
//! shell.on_exit();
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod device;
pub mod session;
pub mod shell;

// Re-export commonly used types at crate root
pub use config::{ConfigError, FileConfig};
pub use device::{DeviceInfo, DeviceKind, DiscoveryFilter, Position};
#[cfg(feature = "camera")]
pub use session::NokhwaHost;
pub use session::{
    CameraHost, CaptureSession, DeviceInput, DiscoverError, InputError, MockHost, SelectError,
    SessionController, SessionHandle,
};
pub use shell::{PreviewShell, PreviewSurface};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
