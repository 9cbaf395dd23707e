//! Thin wrappers over the browser APIs the components need. Outside the
//! browser they report nothing and do nothing.

use dioxus_logger::tracing;

use crate::client::model::error::FlowError;

#[cfg(feature = "web")]
pub fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

#[cfg(not(feature = "web"))]
pub fn window_width() -> Option<f64> {
    None
}

#[cfg(feature = "web")]
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

#[cfg(not(feature = "web"))]
pub fn scroll_y() -> f64 {
    0.0
}

/// Adds or removes the `dark` class on the document root.
#[cfg(feature = "web")]
pub fn set_dark_class(is_dark: bool) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());

    if let Some(root) = root {
        if root.class_list().toggle_with_force("dark", is_dark).is_err() {
            tracing::warn!("Failed to apply theme class");
        }
    }
}

#[cfg(not(feature = "web"))]
pub fn set_dark_class(_is_dark: bool) {}

/// Full-page navigation to an external URL.
#[cfg(feature = "web")]
pub fn redirect(url: &str) -> Result<(), FlowError> {
    web_sys::window()
        .ok_or(FlowError::RedirectFailed)?
        .location()
        .set_href(url)
        .map_err(|_| FlowError::RedirectFailed)
}

#[cfg(not(feature = "web"))]
pub fn redirect(url: &str) -> Result<(), FlowError> {
    tracing::warn!("Cannot leave the app for {} outside the browser", url);
    Err(FlowError::RedirectFailed)
}
