//! Mouse scripts.
//!
//! All of these drive the fixture's robot. Points and buttons are created on
//! the Java side through `createPoint` and `createMouseButton`.

use crate::query::ScriptTarget;

/// Click `times` times at a point relative to the component.
#[must_use]
pub fn click_at(target: &ScriptTarget, x: i32, y: i32, button_mask: i32, times: u32) -> String {
    let fixture = target.fixture();
    format!(
        "\r\nvar point = {fixture}.createPoint({x}, {y}); \r\nvar mousebutton = {fixture}.createMouseButton({button_mask})\r\n{}.robot.click(point, mousebutton, {times});",
        target.component()
    )
}

/// Press a mouse button over the component.
#[must_use]
pub fn press(target: &ScriptTarget, button_mask: i32) -> String {
    format!(
        "\r\nvar mousebutton = {}.createMouseButton({button_mask})\r\n{}.robot.pressMouse(mousebutton);",
        target.fixture(),
        target.component()
    )
}

/// Press a mouse button at a point.
#[must_use]
pub fn press_at(target: &ScriptTarget, x: i32, y: i32, button_mask: i32) -> String {
    let fixture = target.fixture();
    format!(
        "\r\nvar point = {fixture}.createPoint({x}, {y}); \r\nvar mousebutton = {fixture}.createMouseButton({button_mask})\r\n{}.robot.pressMouse(point, mousebutton);",
        target.component()
    )
}

/// Release a mouse button.
///
/// The robot has no point-taking release, so there is no `release_at`.
#[must_use]
pub fn release(target: &ScriptTarget, button_mask: i32) -> String {
    format!(
        "\r\nvar mousebutton = {}.createMouseButton({button_mask})\r\n{}.robot.releaseMouse(mousebutton);",
        target.fixture(),
        target.component()
    )
}

/// Move the pointer onto the component.
#[must_use]
pub fn move_to_component(target: &ScriptTarget) -> String {
    let component = target.component();
    format!("\r\nvar component = {component}.component(); \r\n{component}.robot.moveMouse(component);")
}

/// Move the pointer to a point.
#[must_use]
pub fn move_to(target: &ScriptTarget, x: i32, y: i32) -> String {
    format!(
        "\r\nvar point = {}.createPoint({x}, {y}); \r\n{}.robot.moveMouse(point);",
        target.fixture(),
        target.component()
    )
}
