//! Key event scripts.

use crate::query::ScriptTarget;

/// Press and release one key, with an explicit modifier mask.
///
/// Every key verb (plain, Alt, Control, Shift, down or up) renders this
/// template; only the mask differs.
#[must_use]
pub fn press_and_release(target: &ScriptTarget, key_code: i32, modifiers: i32) -> String {
    format!(
        "\r\nvar javaObject = {}.createKeyPressInfo({key_code}, {modifiers}); \r\n{}.pressAndReleaseKey(javaObject);",
        target.fixture(),
        target.component()
    )
}
