//! Not-busy waits.
//!
//! The applet side has no busy flag, so waiting means calling a caller
//! supplied poll function and keeping whatever it reports.

use tracing::debug;

use super::JavaAction;
use crate::bridge::{CommandProcessor, JavaBridge};
use crate::component::{Capability, Component};
use crate::result::{ProbeError, ProbeResult};

/// Poll function used by [`JavaAction::wait_for_not_busy`]
pub type WaitDelegate = Box<dyn FnMut() -> String>;

impl<P: CommandProcessor> JavaAction<P> {
    /// Create an engine with a default poll function installed
    #[must_use]
    pub fn with_wait_delegate(bridge: JavaBridge<P>, delegate: impl FnMut() -> String + 'static) -> Self {
        let mut action = Self::new(bridge);
        action.set_wait_delegate(delegate);
        action
    }

    /// Replace the default poll function
    pub fn set_wait_delegate(&mut self, delegate: impl FnMut() -> String + 'static) -> &mut Self {
        self.wait_delegate = Some(Box::new(delegate));
        self
    }

    /// Whether a default poll function is installed
    #[must_use]
    pub fn has_wait_delegate(&self) -> bool {
        self.wait_delegate.is_some()
    }

    fn keep_poll_result(&mut self, result: String) -> &mut Self {
        debug!(result = %result, "not busy");
        self.result = result;
        self
    }

    /// Call the installed poll function.
    pub fn wait_for_not_busy(&mut self) -> ProbeResult<&mut Self> {
        let delegate = self.wait_delegate.as_mut().ok_or(ProbeError::MissingDelegate)?;
        let result = delegate();
        Ok(self.keep_poll_result(result))
    }

    /// Call `poll` instead of the installed poll function.
    pub fn wait_for_not_busy_using(&mut self, poll: impl FnOnce() -> String) -> ProbeResult<&mut Self> {
        Ok(self.keep_poll_result(poll()))
    }

    /// Make `component` current, then wait.
    pub fn wait_for_not_busy_on(&mut self, component: Component) -> ProbeResult<&mut Self> {
        self.adopt(component, &[Capability::Timeout])?;
        self.wait_for_not_busy()
    }

    /// Make `component` current, then wait with `poll`.
    pub fn wait_for_not_busy_on_using(
        &mut self,
        component: Component,
        poll: impl FnOnce() -> String,
    ) -> ProbeResult<&mut Self> {
        self.adopt(component, &[Capability::Timeout])?;
        self.wait_for_not_busy_using(poll)
    }

    /// Write `timeout` into the current component, then wait.
    pub fn wait_for_not_busy_with_timeout(&mut self, timeout: &str) -> ProbeResult<&mut Self> {
        self.mutate_current(Capability::Timeout, |component| component.set_timeout(timeout))?;
        self.wait_for_not_busy()
    }

    /// Write `timeout` into the current component, then wait with `poll`.
    pub fn wait_for_not_busy_with_timeout_using(
        &mut self,
        timeout: &str,
        poll: impl FnOnce() -> String,
    ) -> ProbeResult<&mut Self> {
        self.mutate_current(Capability::Timeout, |component| component.set_timeout(timeout))?;
        self.wait_for_not_busy_using(poll)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::engine;
    use super::*;
    use crate::mock::MockProcessor;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_missing_delegate() {
        let (mut action, _) = engine();
        assert!(!action.has_wait_delegate());
        assert!(matches!(
            action.wait_for_not_busy().unwrap_err(),
            ProbeError::MissingDelegate
        ));
    }

    #[test]
    fn test_installed_delegate_is_polled() {
        let mock = MockProcessor::new();
        let bridge = JavaBridge::new(mock.clone()).unwrap();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut action = JavaAction::with_wait_delegate(bridge, move || {
            counter.set(counter.get() + 1);
            "idle".to_string()
        });
        mock.clear_history();

        action.wait_for_not_busy().unwrap().wait_for_not_busy().unwrap();
        assert_eq!(calls.get(), 2);
        assert_eq!(action.result(), "idle");
        assert!(mock.evals().is_empty());
    }

    #[test]
    fn test_supplied_poll_wins() {
        let (mut action, _) = engine();
        action.set_wait_delegate(|| "installed".to_string());
        action.wait_for_not_busy_using(|| "supplied".to_string()).unwrap();
        assert_eq!(action.result(), "supplied");
    }

    #[test]
    fn test_on_component_needs_timeout() {
        let (mut action, _) = engine();
        action.set_wait_delegate(|| "done".to_string());
        assert!(matches!(
            action.wait_for_not_busy_on(Component::button("b")).unwrap_err(),
            ProbeError::CapabilityMismatch {
                capability: Capability::Timeout,
                ..
            }
        ));
        action.wait_for_not_busy_on(Component::tree("t")).unwrap();
        assert_eq!(action.current_component().unwrap().name(), "t");
        assert_eq!(action.result(), "done");
    }

    #[test]
    fn test_on_component_using() {
        let (mut action, _) = engine();
        action
            .wait_for_not_busy_on_using(Component::tree("t"), || "ready".to_string())
            .unwrap();
        assert_eq!(action.result(), "ready");
    }

    #[test]
    fn test_with_timeout_sets_slot() {
        let (mut action, _) = engine();
        action.set_current_component(Component::tree("t"));
        action
            .wait_for_not_busy_with_timeout_using("5000", || "ok".to_string())
            .unwrap();
        assert_eq!(action.current_component().unwrap().timeout().unwrap(), "5000");
        assert_eq!(action.result(), "ok");
    }

    #[test]
    fn test_with_timeout_without_current() {
        let (mut action, _) = engine();
        action.set_wait_delegate(String::new);
        assert!(action.wait_for_not_busy_with_timeout("10").is_err());
    }
}
