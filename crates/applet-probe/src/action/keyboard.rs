//! Single-keystroke verbs.
//!
//! Each verb types the one character held in the current component's value,
//! with a fixed modifier mask. The press is always a full press-and-release;
//! the `*_down` / `*_up` pairs differ only in name.

use applet_probe_script::keyboard;

use super::JavaAction;
use crate::bridge::CommandProcessor;
use crate::component::{Capability, Component};
use crate::keystroke::{ALT_MASK, CTRL_MASK, NO_MASK, SHIFT_MASK};
use crate::result::{ProbeError, ProbeResult};

/// The single character of a key verb's value.
fn single_character(value: &str) -> ProbeResult<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(character), None) => Ok(character),
        (None, _) => Err(ProbeError::InvalidKeyValue {
            message: "Must specify a character for a key press by setting the value.".to_string(),
        }),
        (Some(_), Some(_)) => Err(ProbeError::InvalidKeyValue {
            message: "Cannot specify more than one character for a key press.".to_string(),
        }),
    }
}

impl<P: CommandProcessor> JavaAction<P> {
    fn press_key(&mut self, modifiers: i32) -> ProbeResult<&mut Self> {
        let character = single_character(self.current()?.value()?)?;
        let code = self.key_mapping.code_for(character)?;
        let target = self.target()?;
        self.eval(&keyboard::press_and_release(&target, code, modifiers))?;
        Ok(self)
    }
}

macro_rules! key_verbs {
    ($($(#[$doc:meta])* $verb:ident, $current:ident, $with:ident => $mask:expr;)*) => {
        impl<P: CommandProcessor> JavaAction<P> {
            $(
                $(#[$doc])*
                pub fn $verb(&mut self, component: Component) -> ProbeResult<&mut Self> {
                    self.adopt(component, &[Capability::InputValue])?;
                    self.press_key($mask)
                }

                $(#[$doc])*
                ///
                /// Uses the current component's value.
                pub fn $current(&mut self) -> ProbeResult<&mut Self> {
                    self.press_key($mask)
                }

                $(#[$doc])*
                ///
                /// Sets the current component's value first.
                pub fn $with(&mut self, value: impl Into<String>) -> ProbeResult<&mut Self> {
                    let value = value.into();
                    self.mutate_current(Capability::InputValue, |component| component.set_value(value))?;
                    self.press_key($mask)
                }
            )*
        }
    };
}

key_verbs! {
    /// Press a key with Alt held.
    alt_key_down, alt_key_down_current, alt_key_down_with => ALT_MASK;
    /// Release a key with Alt held.
    alt_key_up, alt_key_up_current, alt_key_up_with => ALT_MASK;
    /// Press a key with Control held.
    control_key_down, control_key_down_current, control_key_down_with => CTRL_MASK;
    /// Release a key with Control held.
    control_key_up, control_key_up_current, control_key_up_with => CTRL_MASK;
    /// Press a key with Shift held.
    shift_key_down, shift_key_down_current, shift_key_down_with => SHIFT_MASK;
    /// Release a key with Shift held.
    shift_key_up, shift_key_up_current, shift_key_up_with => SHIFT_MASK;
    /// Press a key.
    key_down, key_down_current, key_down_with => NO_MASK;
    /// Press and release a key.
    key_press, key_press_current, key_press_with => NO_MASK;
    /// Release a key.
    key_up, key_up_current, key_up_with => NO_MASK;
}
