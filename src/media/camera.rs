//! Browser camera capture for the live studio.
//!
//! Acquisition goes through `navigator.mediaDevices.getUserMedia` (video +
//! audio). Any failure collapses to one user-facing message; there is no
//! reconnect. Outside the browser, acquisition always fails.

use thiserror::Error;
use tracing::{info, warn};

/// The only camera error the user ever sees
pub const CAMERA_ERROR_MESSAGE: &str = "Failed to access camera. Please check permissions.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("camera capture is only available in the browser")]
    Unsupported,
    #[error("media devices unavailable: {0}")]
    NoMediaDevices(String),
    #[error("camera access denied: {0}")]
    Denied(String),
    #[error("video element not found: {0}")]
    NoVideoElement(String),
}

/// Live studio camera state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CameraState {
    #[default]
    Idle,
    /// `getUserMedia` is pending; at most one request is in flight
    Acquiring,
    Live,
    /// Holds the user-facing message
    Failed(String),
}

impl CameraState {
    /// Claim the single acquisition slot. False if one is already pending
    /// or the camera is on.
    pub fn begin_acquire(&mut self) -> bool {
        if !self.can_start() {
            return false;
        }
        *self = Self::Acquiring;
        true
    }

    /// Returns false when the request was abandoned meanwhile; the caller
    /// must release the stream it got.
    pub fn on_acquired(&mut self) -> bool {
        if *self != Self::Acquiring {
            return false;
        }
        info!("Camera stream acquired");
        *self = Self::Live;
        true
    }

    pub fn on_failed(&mut self, error: &CameraError) {
        warn!(error = %error, "Camera acquisition failed");
        *self = Self::Failed(CAMERA_ERROR_MESSAGE.to_string());
    }

    /// "End Session": back to idle. A failure stays on screen.
    pub fn on_stopped(&mut self) {
        if matches!(self, Self::Live | Self::Acquiring) {
            info!("Camera stream released");
            *self = Self::Idle;
        }
    }

    /// The video element is mounted only while live
    pub fn shows_video(&self) -> bool {
        matches!(self, Self::Live)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Idle | Self::Acquiring | Self::Live => None,
        }
    }

    pub fn can_start(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// An acquired camera stream. Release it with [`CameraHandle::release`].
#[derive(Clone)]
pub struct CameraHandle {
    #[cfg(target_arch = "wasm32")]
    stream: web_sys::MediaStream,
}

#[cfg(target_arch = "wasm32")]
pub async fn acquire() -> Result<CameraHandle, CameraError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let window =
        web_sys::window().ok_or_else(|| CameraError::NoMediaDevices("no window".to_string()))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| CameraError::NoMediaDevices(js_message(&e)))?;

    let constraints = web_sys::MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    constraints.set_audio(&JsValue::TRUE);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| CameraError::Denied(js_message(&e)))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|e| CameraError::Denied(js_message(&e)))?;
    let stream: web_sys::MediaStream = stream
        .dyn_into()
        .map_err(|e| CameraError::Denied(js_message(&e)))?;

    Ok(CameraHandle { stream })
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn acquire() -> Result<CameraHandle, CameraError> {
    Err(CameraError::Unsupported)
}

impl CameraHandle {
    /// Point the `<video>` element with `element_id` at this stream.
    pub fn attach(&self, element_id: &str) -> Result<(), CameraError> {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            let video: web_sys::HtmlMediaElement = super::element_by_id(element_id)
                .and_then(|el| el.dyn_into().ok())
                .ok_or_else(|| CameraError::NoVideoElement(element_id.to_string()))?;
            video.set_src_object(Some(&self.stream));
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = element_id;
        Ok(())
    }

    /// Stop every track so the browser turns the camera off.
    pub fn release(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            for track in self.stream.get_tracks().iter() {
                if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
                    track.stop();
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn js_message(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
