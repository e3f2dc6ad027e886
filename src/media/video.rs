//! Lesson video playback helpers.
//!
//! The `<video>` element plays HLS manifests natively where the browser can;
//! this module only drives playback rate and seeking.

use std::fmt;

/// Selectable playback speeds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PlaybackRate {
    #[default]
    Normal,
    OneAndQuarter,
    OneAndHalf,
    Double,
}

impl PlaybackRate {
    /// In display order
    pub const ALL: [PlaybackRate; 4] = [
        Self::Normal,
        Self::OneAndQuarter,
        Self::OneAndHalf,
        Self::Double,
    ];

    /// Value for `HTMLMediaElement.playbackRate`
    pub fn value(self) -> f64 {
        match self {
            Self::Normal => 1.0,
            Self::OneAndQuarter => 1.25,
            Self::OneAndHalf => 1.5,
            Self::Double => 2.0,
        }
    }
}

impl fmt::Display for PlaybackRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.value())
    }
}

/// Set the playback rate of the media element `element_id`.
/// Returns false when the element is not mounted (or outside the browser).
pub fn set_playback_rate(element_id: &str, rate: PlaybackRate) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(media) = media_element(element_id) {
            media.set_playback_rate(rate.value());
            return true;
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (element_id, rate);
    false
}

/// Jump to `secs`. Used once metadata has loaded.
pub fn seek(element_id: &str, secs: f64) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(media) = media_element(element_id) {
            media.set_current_time(secs);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (element_id, secs);
}

/// Current playback position in seconds
pub fn current_time(element_id: &str) -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        media_element(element_id).map(|m| m.current_time())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = element_id;
        None
    }
}

/// `m:ss` (or `h:mm:ss`) for a playback position. Negative and NaN read as zero.
pub fn format_position(secs: f64) -> String {
    let total = if secs.is_finite() && secs > 0.0 { secs as u64 } else { 0 };
    let (hours, minutes, seconds) = (total / 3600, (total / 60) % 60, total % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(target_arch = "wasm32")]
fn media_element(element_id: &str) -> Option<web_sys::HtmlMediaElement> {
    use wasm_bindgen::JsCast;

    super::element_by_id(element_id).and_then(|el| el.dyn_into().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_labels() {
        let labels: Vec<String> = PlaybackRate::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(labels, vec!["1x", "1.25x", "1.5x", "2x"]);
    }

    #[test]
    fn test_default_rate_is_normal() {
        assert_eq!(PlaybackRate::default().value(), 1.0);
    }

    #[test]
    fn test_format_position() {
        assert_eq!(format_position(0.0), "0:00");
        assert_eq!(format_position(65.9), "1:05");
        assert_eq!(format_position(3725.0), "1:02:05");
        assert_eq!(format_position(-3.0), "0:00");
        assert_eq!(format_position(f64::NAN), "0:00");
    }

    #[test]
    fn test_no_element_outside_browser() {
        assert!(!set_playback_rate("lesson-player", PlaybackRate::Double));
        assert_eq!(current_time("lesson-player"), None);
    }
}
