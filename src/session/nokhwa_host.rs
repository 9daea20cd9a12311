//! Real camera host backed by `nokhwa`.
//!
//! Only compiled with the `camera` feature. Lens kinds are inferred from
//! the device name, since the native enumeration does not expose them.

use super::host::{CameraHost, DeviceInput, DiscoverError, InputError};
use crate::device::{DeviceInfo, DeviceKind, DiscoveryFilter, Position};
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{ApiBackend, CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::CallbackCamera;

/// Camera host using the platform's native capture API via `nokhwa`.
#[derive(Debug, Default)]
pub struct NokhwaHost;

impl NokhwaHost {
    /// Creates the host.
    pub fn new() -> Self {
        Self
    }
}

fn kind_from_name(name: &str) -> DeviceKind {
    let lower = name.to_ascii_lowercase();
    if lower.contains("ultra") {
        DeviceKind::UltraWide
    } else if lower.contains("tele") {
        DeviceKind::Telephoto
    } else {
        DeviceKind::Wide
    }
}

impl CameraHost for NokhwaHost {
    fn discover(&self, filter: &DiscoveryFilter) -> Result<Vec<DeviceInfo>, DiscoverError> {
        let cameras = nokhwa::query(ApiBackend::Auto)
            .map_err(|e| DiscoverError::Enumeration(e.to_string()))?;
        let devices: Vec<DeviceInfo> = cameras
            .into_iter()
            .map(|info| {
                let name = info.human_name();
                // Webcams do not report facing; treat them all as back.
                DeviceInfo::new(
                    info.index().to_string(),
                    name.clone(),
                    kind_from_name(&name),
                    Position::Back,
                )
            })
            .filter(|d| filter.matches(d))
            .collect();
        tracing::info!(count = devices.len(), "native camera devices discovered");
        Ok(devices)
    }

    fn open_input(&self, device: &DeviceInfo) -> Result<Box<dyn DeviceInput>, InputError> {
        let index = match device.id().parse::<u32>() {
            Ok(n) => CameraIndex::Index(n),
            Err(_) => CameraIndex::String(device.id().to_string()),
        };
        let format = RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);
        let camera = CallbackCamera::new(index, format, |buffer| {
            tracing::trace!(bytes = buffer.buffer().len(), "frame delivered");
        })
        .map_err(|e| InputError::OpenFailed {
            device: device.id().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Box::new(NokhwaInput {
            id: device.id().to_string(),
            camera,
        }))
    }
}

struct NokhwaInput {
    id: String,
    camera: CallbackCamera,
}

impl DeviceInput for NokhwaInput {
    fn device_id(&self) -> &str {
        &self.id
    }

    fn start(&mut self) {
        if let Err(error) = self.camera.open_stream() {
            tracing::warn!(device = %self.id, %error, "failed to open camera stream");
        }
    }

    fn stop(&mut self) {
        if let Err(error) = self.camera.stop_stream() {
            tracing::warn!(device = %self.id, %error, "failed to stop camera stream");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_inference_from_names() {
        assert_eq!(kind_from_name("Back Ultra Wide Camera"), DeviceKind::UltraWide);
        assert_eq!(kind_from_name("Back Telephoto Camera"), DeviceKind::Telephoto);
        assert_eq!(kind_from_name("Integrated Webcam"), DeviceKind::Wide);
    }
}
