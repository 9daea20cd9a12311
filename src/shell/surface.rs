//! Read-only view over the session for rendering.
//!
//! Stand-in for a real preview layer: the demo binary renders its status
//! line instead of pixels. Holds the session by handle, never owning it.

use crate::session::{lock, SessionHandle};

/// A rendering surface bound to one capture session.
pub struct PreviewSurface {
    session: SessionHandle,
}

impl PreviewSurface {
    /// Binds a surface to `session`.
    pub fn bind(session: SessionHandle) -> Self {
        Self { session }
    }

    /// Whether frames would be visible: session running with an input.
    pub fn is_live(&self) -> bool {
        let session = lock(&self.session);
        session.is_running() && session.has_input()
    }

    /// One-line textual rendering of the preview state.
    pub fn status_line(&self) -> String {
        let session = lock(&self.session);
        let state = if session.is_running() {
            "running"
        } else {
            "stopped"
        };
        match session.input_id() {
            Some(id) => format!("preview: {state}, input={id}"),
            None => format!("preview: {state}, no input"),
        }
    }
}
