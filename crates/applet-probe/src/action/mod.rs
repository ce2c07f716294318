//! The action engine.
//!
//! [`JavaAction`] is a stateful, chainable dispatcher. It remembers the
//! component most recently acted on and an optional chain of root components,
//! turns each verb into a script, evaluates it through its [`JavaBridge`] and
//! keeps the last result.
//!
//! Every verb comes in two shapes:
//!
//! - `verb(component)` makes `component` current, then acts on it;
//! - `verb_current()` acts on the current component, and `verb_with(raw)`
//!   first writes `raw` into the matching slot of the current component.
//!
//! ```rust
//! use applet_probe::prelude::*;
//!
//! let mock = MockProcessor::new();
//! let bridge = JavaBridge::new(mock.clone()).unwrap();
//! let mut action = JavaAction::new(bridge);
//!
//! action.focus(Component::button("clickme")).unwrap().click_current().unwrap();
//!
//! let evals = mock.evals();
//! assert_eq!(evals[evals.len() - 2], "getTestFixture().button(\"clickme\").focus();");
//! assert_eq!(evals[evals.len() - 1], "getTestFixture().button(\"clickme\").click();");
//! ```

mod keyboard;
mod mouse;
mod selection;
mod verbs;
mod wait;
mod window;

pub use selection::INVALID_INDEX;
pub use wait::WaitDelegate;

use applet_probe_script::invoke::ScriptArg;
use applet_probe_script::query::{self, ScriptTarget};
use std::fmt;
use tracing::{debug, instrument};

use crate::bridge::{CommandProcessor, JavaBridge};
use crate::component::{Capability, Component};
use crate::keystroke::KeyStrokeMappingProvider;
use crate::result::{ProbeError, ProbeResult};

/// Fluent dispatcher bound to one bridge session.
pub struct JavaAction<P: CommandProcessor> {
    bridge: JavaBridge<P>,
    key_mapping: KeyStrokeMappingProvider,
    current: Option<Component>,
    roots: Vec<Component>,
    result: String,
    wait_delegate: Option<WaitDelegate>,
}

impl<P: CommandProcessor + fmt::Debug> fmt::Debug for JavaAction<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JavaAction")
            .field("bridge", &self.bridge)
            .field("current", &self.current)
            .field("roots", &self.roots)
            .field("result", &self.result)
            .field("has_wait_delegate", &self.wait_delegate.is_some())
            .finish_non_exhaustive()
    }
}

impl<P: CommandProcessor> JavaAction<P> {
    /// Create an engine with no current component and no roots
    #[must_use]
    pub fn new(bridge: JavaBridge<P>) -> Self {
        Self {
            bridge,
            key_mapping: KeyStrokeMappingProvider::english(),
            current: None,
            roots: Vec::new(),
            result: String::new(),
            wait_delegate: None,
        }
    }

    /// Give the bridge back, ending the engine
    #[must_use]
    pub fn into_bridge(self) -> JavaBridge<P> {
        self.bridge
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Component the next `*_current` verb acts on
    #[must_use]
    pub const fn current_component(&self) -> Option<&Component> {
        self.current.as_ref()
    }

    /// Mutable access to the current component
    pub fn current_component_mut(&mut self) -> Option<&mut Component> {
        self.current.as_mut()
    }

    /// Replace the current component without acting
    pub fn set_current_component(&mut self, component: Component) -> &mut Self {
        self.current = Some(component);
        self
    }

    /// Result of the most recent evaluation
    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Key table used by the key verbs
    #[must_use]
    pub const fn key_mapping(&self) -> &KeyStrokeMappingProvider {
        &self.key_mapping
    }

    /// The bridge
    #[must_use]
    pub const fn bridge(&self) -> &JavaBridge<P> {
        &self.bridge
    }

    /// The bridge, mutably
    pub fn bridge_mut(&mut self) -> &mut JavaBridge<P> {
        &mut self.bridge
    }

    /// Open a page through the bridge
    pub fn open(&mut self, url: &str) -> ProbeResult<&mut Self> {
        self.bridge.open(url)?;
        Ok(self)
    }

    /// Wait for the current page through the bridge
    pub fn wait_for_page_to_load(&mut self, timeout_ms: u64) -> ProbeResult<&mut Self> {
        self.bridge.wait_for_page_to_load(timeout_ms)?;
        Ok(self)
    }

    // =========================================================================
    // Root components
    // =========================================================================

    /// Scoping chain prefixed onto every component query
    #[must_use]
    pub fn root_components(&self) -> &[Component] {
        &self.roots
    }

    /// Replace the scoping chain
    pub fn set_root_components(&mut self, roots: impl IntoIterator<Item = Component>) -> &mut Self {
        self.roots = roots.into_iter().collect();
        self
    }

    /// Scope queries by a single root
    pub fn set_root_component(&mut self, root: Component) -> &mut Self {
        self.set_root_components([root])
    }

    /// Drop the scoping chain
    pub fn set_default_root_component(&mut self) -> &mut Self {
        self.roots.clear();
        self
    }

    /// Root base fragments joined with `.`, empty without roots
    #[must_use]
    pub fn root_component_prefix(&self) -> String {
        query::root_prefix(self.roots.iter().map(Component::base_query_fragment))
    }

    // =========================================================================
    // Dispatch helpers
    // =========================================================================

    /// Make `component` current once it has every required capability.
    fn adopt(&mut self, component: Component, required: &[Capability]) -> ProbeResult<()> {
        for capability in required {
            component.require(*capability)?;
        }
        debug!(component = %component.base_query_fragment(), "current component");
        self.current = Some(component);
        Ok(())
    }

    /// Apply `f` to the current component after checking `capability`.
    fn mutate_current<F>(&mut self, capability: Capability, f: F) -> ProbeResult<()>
    where
        F: FnOnce(&mut Component) -> ProbeResult<()>,
    {
        let Some(component) = self.current.as_mut() else {
            return Err(ProbeError::capability("no current component", capability));
        };
        component.require(capability)?;
        f(component)
    }

    fn current(&self) -> ProbeResult<&Component> {
        self.current.as_ref().ok_or(ProbeError::NoCurrentComponent)
    }

    fn current_query(&self) -> ProbeResult<String> {
        Ok(self.current()?.query_string(&self.root_component_prefix()))
    }

    fn target(&self) -> ProbeResult<ScriptTarget> {
        Ok(ScriptTarget::new(self.bridge.js_prefix(), &self.current_query()?))
    }

    /// Invoke `member` on the current component's query.
    #[instrument(level = "debug", skip(self, args))]
    fn invoke_on_current(&mut self, member: &str, args: &[ScriptArg]) -> ProbeResult<String> {
        let function = query::member(&self.current_query()?, member);
        let result = self.bridge.invoke_method(&function, args)?;
        self.result.clone_from(&result);
        Ok(result)
    }

    /// Evaluate a rendered script and keep its result.
    #[instrument(level = "debug", skip(self, script), fields(script_len = script.len()))]
    fn eval(&mut self, script: &str) -> ProbeResult<String> {
        let result = self.bridge.get_eval(script)?;
        self.result.clone_from(&result);
        Ok(result)
    }
}
