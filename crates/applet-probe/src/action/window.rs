//! Browser window scrolling.

use applet_probe_script::window;

use super::JavaAction;
use crate::bridge::CommandProcessor;
use crate::geometry::Coordinates;
use crate::result::ProbeResult;

impl<P: CommandProcessor> JavaAction<P> {
    /// Scroll the hosting page to its origin
    pub fn scroll_browser_window_to_top(&mut self) -> ProbeResult<&mut Self> {
        self.eval(&window::scroll_to_top())?;
        Ok(self)
    }

    /// Scroll the hosting page to the bottom of its content
    pub fn scroll_browser_window_to_bottom(&mut self) -> ProbeResult<&mut Self> {
        self.eval(window::SCROLL_TO_BOTTOM)?;
        Ok(self)
    }

    /// Scroll the hosting page to an absolute position
    pub fn scroll_browser_window_to(&mut self, x: i32, y: i32) -> ProbeResult<&mut Self> {
        self.eval(&window::scroll_to(x, y))?;
        Ok(self)
    }

    /// [`JavaAction::scroll_browser_window_to`] taking a point
    pub fn scroll_browser_window_to_point(&mut self, point: Coordinates) -> ProbeResult<&mut Self> {
        self.scroll_browser_window_to(point.x, point.y)
    }
}
