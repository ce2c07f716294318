//! Verbs that invoke a single method on the component query.

use applet_probe_script::invoke::ScriptArg;
use applet_probe_script::query::{self, FIXTURE_ROOT};

use super::JavaAction;
use crate::bridge::CommandProcessor;
use crate::component::{Capability, Component};
use crate::result::{ProbeError, ProbeResult};

macro_rules! invoke_verbs {
    ($($(#[$doc:meta])* $verb:ident, $current:ident => $member:literal;)*) => {
        impl<P: CommandProcessor> JavaAction<P> {
            $(
                $(#[$doc])*
                pub fn $verb(&mut self, component: Component) -> ProbeResult<&mut Self> {
                    self.adopt(component, &[])?;
                    self.$current()
                }

                $(#[$doc])*
                ///
                /// Acts on the current component.
                pub fn $current(&mut self) -> ProbeResult<&mut Self> {
                    self.invoke_on_current($member, &[])?;
                    Ok(self)
                }
            )*
        }
    };
}

invoke_verbs! {
    /// Tick a check box or toggle.
    check, check_current => "check";
    /// Clear a check box or toggle.
    uncheck, uncheck_current => "uncheck";
    /// Click the component.
    click, click_current => "click";
    /// Double-click the component.
    double_click, double_click_current => "doubleClick";
    /// Right-click the component.
    right_click, right_click_current => "rightClick";
    /// Open the component's popup menu.
    select_popup, select_popup_current => "showPopupMenu";
}

impl<P: CommandProcessor> JavaAction<P> {
    fn focus_fixture(&mut self) -> ProbeResult<String> {
        let function = query::member(FIXTURE_ROOT, "focus");
        let result = self.bridge.invoke_method(&function, &[])?;
        self.result.clone_from(&result);
        Ok(result)
    }

    /// Focus a component.
    pub fn focus(&mut self, component: Component) -> ProbeResult<&mut Self> {
        self.adopt(component, &[])?;
        self.focus_current()
    }

    /// Focus the current component, or the fixture when none is set.
    pub fn focus_current(&mut self) -> ProbeResult<&mut Self> {
        if self.current.is_some() {
            self.invoke_on_current("focus", &[])?;
        } else {
            self.focus_fixture()?;
        }
        Ok(self)
    }

    /// Focus the fixture frame.
    pub fn select_frame(&mut self, component: Component) -> ProbeResult<&mut Self> {
        self.adopt(component, &[])?;
        self.select_frame_current()
    }

    /// Focus the fixture frame; a current component must be set.
    pub fn select_frame_current(&mut self) -> ProbeResult<&mut Self> {
        self.current()?;
        self.focus_fixture()?;
        Ok(self)
    }

    /// Same as [`JavaAction::select_frame`].
    pub fn select_window(&mut self, component: Component) -> ProbeResult<&mut Self> {
        self.select_frame(component)
    }

    /// Same as [`JavaAction::select_frame_current`].
    pub fn select_window_current(&mut self) -> ProbeResult<&mut Self> {
        self.select_frame_current()
    }

    /// Enter a component's value as text.
    pub fn type_text(&mut self, component: Component) -> ProbeResult<&mut Self> {
        self.adopt(component, &[Capability::InputValue])?;
        self.type_text_current()
    }

    /// Enter the current component's value as text.
    pub fn type_text_current(&mut self) -> ProbeResult<&mut Self> {
        let value = self.current()?.value()?.to_string();
        if value.is_empty() {
            return Err(ProbeError::InvalidKeyValue {
                message: "Must specify a string to type by setting the value.".to_string(),
            });
        }
        self.invoke_on_current("enterText", &[ScriptArg::Text(value)])?;
        Ok(self)
    }

    /// Set the current component's value, then type it.
    pub fn type_text_with(&mut self, value: impl Into<String>) -> ProbeResult<&mut Self> {
        let value = value.into();
        self.mutate_current(Capability::InputValue, |component| component.set_value(value))?;
        self.type_text_current()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Read a component's text.
    pub fn get_text(&mut self, component: Component) -> ProbeResult<String> {
        self.adopt(component, &[])?;
        self.get_text_current()
    }

    /// Read the current component's text.
    pub fn get_text_current(&mut self) -> ProbeResult<String> {
        self.invoke_on_current("text", &[])
    }

    /// Whether a component is enabled.
    pub fn is_enabled(&mut self, component: Component) -> ProbeResult<bool> {
        self.adopt(component, &[])?;
        self.is_enabled_current()
    }

    /// Whether the current component is enabled.
    pub fn is_enabled_current(&mut self) -> ProbeResult<bool> {
        Ok(self.invoke_on_current("component().isEnabled", &[])? == "true")
    }

    /// Whether a component is visible.
    pub fn is_visible(&mut self, component: Component) -> ProbeResult<bool> {
        self.adopt(component, &[])?;
        self.is_visible_current()
    }

    /// Whether the current component is visible.
    pub fn is_visible_current(&mut self) -> ProbeResult<bool> {
        Ok(self.invoke_on_current("component().isVisible", &[])? == "true")
    }
}
