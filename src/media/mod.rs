//! Capability wrappers around browser media APIs (camera, video element).

pub mod camera;
pub mod video;

#[cfg(target_arch = "wasm32")]
fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}
