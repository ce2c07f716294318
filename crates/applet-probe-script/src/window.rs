//! Browser window scrolling.
//!
//! Positions are pixels from the top left corner of the page.

/// Scroll to the bottom. The page height can only be measured in the
/// browser, so it is computed inside the same script.
pub const SCROLL_TO_BOTTOM: &str = "\r\nvar height = (window.document.innerHeight !== undefined) \r\n                ? window.document.innerHeight \r\n                : window.document.body.clientHeight;\r\nwindow.scroll(0,height);\r\n";

/// Scroll to an absolute position.
#[must_use]
pub fn scroll_to(x: i32, y: i32) -> String {
    format!("window.scroll({x},{y});")
}

/// Scroll to the origin.
#[must_use]
pub fn scroll_to_top() -> String {
    scroll_to(0, 0)
}
