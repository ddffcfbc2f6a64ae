//! Blocking notifications via the browser's native dialog

/// Show a blocking alert dialog; the user must dismiss it to continue.
///
/// A no-op outside a browsing context.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
