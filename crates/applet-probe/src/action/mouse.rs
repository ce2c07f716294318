//! Robot mouse verbs.
//!
//! Buttons are always the left button. The `*_at` verbs use the current
//! component's coordinates, `(0, 0)` unless set.

use applet_probe_script::mouse;
use tracing::debug;

use super::JavaAction;
use crate::bridge::CommandProcessor;
use crate::component::{Capability, Component};
use crate::geometry::{Coordinates, MouseClick};
use crate::result::{ProbeError, ProbeResult};

impl<P: CommandProcessor> JavaAction<P> {
    fn current_coordinates(&self) -> ProbeResult<Coordinates> {
        self.current()?.coordinates()
    }

    fn set_current_coordinates(&mut self, coordinates: Coordinates) -> ProbeResult<()> {
        self.mutate_current(Capability::Coordinates, |component| {
            component.set_coordinates(coordinates)
        })
    }

    fn robot_click_at(&mut self, click: MouseClick) -> ProbeResult<&mut Self> {
        let point = self.current_coordinates()?;
        let target = self.target()?;
        self.eval(&mouse::click_at(
            &target,
            point.x,
            point.y,
            click.button_mask(),
            click.times,
        ))?;
        Ok(self)
    }

    fn robot_press(&mut self) -> ProbeResult<&mut Self> {
        let target = self.target()?;
        self.eval(&mouse::press(&target, MouseClick::left_button().button_mask()))?;
        Ok(self)
    }

    fn robot_press_at(&mut self) -> ProbeResult<&mut Self> {
        let point = self.current_coordinates()?;
        let target = self.target()?;
        let mask = MouseClick::left_button().button_mask();
        self.eval(&mouse::press_at(&target, point.x, point.y, mask))?;
        Ok(self)
    }

    fn robot_release(&mut self) -> ProbeResult<&mut Self> {
        let target = self.target()?;
        self.eval(&mouse::release(&target, MouseClick::left_button().button_mask()))?;
        Ok(self)
    }

    fn robot_move(&mut self) -> ProbeResult<&mut Self> {
        let target = self.target()?;
        self.eval(&mouse::move_to_component(&target))?;
        Ok(self)
    }

    fn robot_move_at(&mut self) -> ProbeResult<&mut Self> {
        let point = self.current_coordinates()?;
        let target = self.target()?;
        self.eval(&mouse::move_to(&target, point.x, point.y))?;
        Ok(self)
    }

    // =========================================================================
    // Clicks at a point
    // =========================================================================

    /// Left click at the component's coordinates.
    pub fn click_at(&mut self, component: Component) -> ProbeResult<&mut Self> {
        self.adopt(component, &[Capability::Coordinates])?;
        self.click_at_current()
    }

    /// Left click at the current component's coordinates.
    pub fn click_at_current(&mut self) -> ProbeResult<&mut Self> {
        self.robot_click_at(MouseClick::left_button())
    }

    /// Move the current component's point, then left click there.
    pub fn click_at_with(&mut self, coordinates: Coordinates) -> ProbeResult<&mut Self> {
        self.set_current_coordinates(coordinates)?;
        self.click_at_current()
    }

    /// Double left click at the component's coordinates.
    pub fn double_click_at(&mut self, component: Component) -> ProbeResult<&mut Self> {
        self.adopt(component, &[Capability::Coordinates])?;
        self.double_click_at_current()
    }

    /// Double left click at the current component's coordinates.
    pub fn double_click_at_current(&mut self) -> ProbeResult<&mut Self> {
        self.robot_click_at(MouseClick::left_button().times(2))
    }

    /// Move the current component's point, then double click there.
    pub fn double_click_at_with(&mut self, coordinates: Coordinates) -> ProbeResult<&mut Self> {
        self.set_current_coordinates(coordinates)?;
        self.double_click_at_current()
    }

    // =========================================================================
    // Press and release
    // =========================================================================

    /// Press the left button over a component.
    pub fn mouse_down(&mut self, component: Component) -> ProbeResult<&mut Self> {
        self.adopt(component, &[])?;
        self.mouse_down_current()
    }

    /// Press the left button over the current component.
    pub fn mouse_down_current(&mut self) -> ProbeResult<&mut Self> {
        self.robot_press()
    }

    /// Press the left button at the component's coordinates.
    pub fn mouse_down_at(&mut self, component: Component) -> ProbeResult<&mut Self> {
        self.adopt(component, &[Capability::Coordinates])?;
        self.mouse_down_at_current()
    }

    /// Press the left button at the current component's coordinates.
    pub fn mouse_down_at_current(&mut self) -> ProbeResult<&mut Self> {
        self.robot_press_at()
    }

    /// Move the current component's point, then press there.
    pub fn mouse_down_at_with(&mut self, coordinates: Coordinates) -> ProbeResult<&mut Self> {
        self.set_current_coordinates(coordinates)?;
        self.mouse_down_at_current()
    }

    /// Release the left button over a component.
    pub fn mouse_up(&mut self, component: Component) -> ProbeResult<&mut Self> {
        self.adopt(component, &[])?;
        self.mouse_up_current()
    }

    /// Release the left button over the current component.
    pub fn mouse_up_current(&mut self) -> ProbeResult<&mut Self> {
        self.robot_release()
    }

    /// Release the left button; the coordinates are checked but not sent.
    ///
    /// The applet robot has no point-taking release, so this renders the
    /// same script as [`JavaAction::mouse_up`].
    pub fn mouse_up_at(&mut self, component: Component) -> ProbeResult<&mut Self> {
        self.adopt(component, &[Capability::Coordinates])?;
        self.mouse_up_at_current()
    }

    /// [`JavaAction::mouse_up_at`] on the current component.
    pub fn mouse_up_at_current(&mut self) -> ProbeResult<&mut Self> {
        let point = self.current_coordinates()?;
        debug!(x = point.x, y = point.y, "mouse_up_at ignores coordinates");
        self.robot_release()
    }

    /// Move the current component's point, then release.
    pub fn mouse_up_at_with(&mut self, coordinates: Coordinates) -> ProbeResult<&mut Self> {
        self.set_current_coordinates(coordinates)?;
        self.mouse_up_at_current()
    }

    // =========================================================================
    // Movement
    // =========================================================================

    /// Move the pointer onto a component.
    pub fn mouse_move(&mut self, component: Component) -> ProbeResult<&mut Self> {
        self.adopt(component, &[])?;
        self.mouse_move_current()
    }

    /// Move the pointer onto the current component.
    pub fn mouse_move_current(&mut self) -> ProbeResult<&mut Self> {
        self.robot_move()
    }

    /// Same as [`JavaAction::mouse_move`].
    pub fn mouse_over(&mut self, component: Component) -> ProbeResult<&mut Self> {
        self.mouse_move(component)
    }

    /// Same as [`JavaAction::mouse_move_current`].
    pub fn mouse_over_current(&mut self) -> ProbeResult<&mut Self> {
        self.mouse_move_current()
    }

    /// Move the pointer to the component's coordinates.
    pub fn mouse_move_at(&mut self, component: Component) -> ProbeResult<&mut Self> {
        self.adopt(component, &[Capability::Coordinates])?;
        self.mouse_move_at_current()
    }

    /// Move the pointer to the current component's coordinates.
    pub fn mouse_move_at_current(&mut self) -> ProbeResult<&mut Self> {
        self.robot_move_at()
    }

    /// Move the current component's point, then the pointer to it.
    pub fn mouse_move_at_with(&mut self, coordinates: Coordinates) -> ProbeResult<&mut Self> {
        self.set_current_coordinates(coordinates)?;
        self.mouse_move_at_current()
    }

    /// Not supported: the applet robot cannot move off a component.
    pub fn mouse_out(&mut self, component: Component) -> ProbeResult<&mut Self> {
        self.adopt(component, &[])?;
        self.mouse_out_current()
    }

    /// Not supported: the applet robot cannot move off a component.
    pub fn mouse_out_current(&mut self) -> ProbeResult<&mut Self> {
        Err(ProbeError::not_implemented(
            "mouse out is not supported by the applet robot",
        ))
    }
}
