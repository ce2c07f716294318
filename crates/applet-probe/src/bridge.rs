//! Remote bridge adapter.
//!
//! A [`CommandProcessor`] is the Selenium-RC style session that actually opens
//! pages and evaluates JavaScript in a browser. [`JavaBridge`] owns one, keeps
//! the JavaScript prefix that reaches the applet element, and turns method
//! invocations and field access into evaluated scripts.
//!
//! ```text
//! JavaBridge ── get_eval(script) ──► CommandProcessor ──► browser ──► applet
//!     │
//!     └─ js_prefix: window.document.getElementById("applet").
//! ```
//!
//! The session starts when the bridge is built and stops when it is dropped.

use applet_probe_script::invoke::{self, ScriptArg, USER_AGENT_QUERY};
use tracing::{debug, info, warn};

use crate::config::BridgeConfig;
use crate::result::ProbeResult;

/// A remote-control session able to evaluate JavaScript in a page.
pub trait CommandProcessor {
    /// Start the session
    fn start(&mut self) -> ProbeResult<()>;

    /// Stop the session
    fn stop(&mut self) -> ProbeResult<()>;

    /// Open a page
    fn open(&mut self, url: &str) -> ProbeResult<()>;

    /// Block until the current page has loaded
    fn wait_for_page_to_load(&mut self, timeout_ms: u64) -> ProbeResult<()>;

    /// Evaluate a script and return its result as text
    fn get_eval(&mut self, script: &str) -> ProbeResult<String>;
}

impl<P: CommandProcessor + ?Sized> CommandProcessor for Box<P> {
    fn start(&mut self) -> ProbeResult<()> {
        (**self).start()
    }

    fn stop(&mut self) -> ProbeResult<()> {
        (**self).stop()
    }

    fn open(&mut self, url: &str) -> ProbeResult<()> {
        (**self).open(url)
    }

    fn wait_for_page_to_load(&mut self, timeout_ms: u64) -> ProbeResult<()> {
        (**self).wait_for_page_to_load(timeout_ms)
    }

    fn get_eval(&mut self, script: &str) -> ProbeResult<String> {
        (**self).get_eval(script)
    }
}

/// A running session bound to one applet element.
#[derive(Debug)]
pub struct JavaBridge<P: CommandProcessor> {
    processor: P,
    object_id: String,
    js_prefix: String,
    user_agent_markers: Vec<String>,
    page_load_timeout_ms: u64,
    running: bool,
}

impl<P: CommandProcessor> JavaBridge<P> {
    /// Start a session with default settings
    pub fn new(processor: P) -> ProbeResult<Self> {
        Self::with_config(processor, &BridgeConfig::default())
    }

    /// Start a session for the applet element `object_id`
    pub fn with_object_id(processor: P, object_id: impl Into<String>) -> ProbeResult<Self> {
        Self::with_config(processor, &BridgeConfig::default().with_object_id(object_id))
    }

    /// Start a session, resolve the JS prefix and open the start page if set.
    pub fn with_config(processor: P, config: &BridgeConfig) -> ProbeResult<Self> {
        config.validate()?;
        let mut bridge = Self {
            processor,
            object_id: config.object_id.clone(),
            js_prefix: String::new(),
            user_agent_markers: config.user_agent_markers.clone(),
            page_load_timeout_ms: config.page_load_timeout_ms,
            running: false,
        };
        bridge.processor.start()?;
        bridge.running = true;
        info!(object_id = %bridge.object_id, "bridge session started");

        bridge.resolve_js_prefix()?;
        if let Some(url) = &config.start_url {
            bridge.open(url)?;
            bridge.wait_for_page_to_load(bridge.page_load_timeout_ms)?;
        }
        Ok(bridge)
    }

    fn resolve_js_prefix(&mut self) -> ProbeResult<()> {
        let user_agent = self.get_eval(USER_AGENT_QUERY)?;
        if user_agent.is_empty() {
            debug!("empty user agent, JS prefix unchanged");
            return Ok(());
        }
        let window_scoped = self
            .user_agent_markers
            .iter()
            .any(|marker| user_agent.contains(marker.as_str()));
        self.js_prefix = invoke::element_accessor(&self.object_id, window_scoped);
        debug!(js_prefix = %self.js_prefix, window_scoped, "resolved JS prefix");
        Ok(())
    }

    /// Id of the page element hosting the applet
    #[must_use]
    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    /// Point at another applet element and recompute the prefix
    pub fn set_object_id(&mut self, object_id: impl Into<String>) -> ProbeResult<()> {
        self.object_id = object_id.into();
        self.resolve_js_prefix()
    }

    /// Prefix prepended to every applet expression
    #[must_use]
    pub fn js_prefix(&self) -> &str {
        &self.js_prefix
    }

    /// Override the prefix
    pub fn set_js_prefix(&mut self, js_prefix: impl Into<String>) {
        self.js_prefix = js_prefix.into();
    }

    /// Timeout applied to the start page
    #[must_use]
    pub const fn page_load_timeout_ms(&self) -> u64 {
        self.page_load_timeout_ms
    }

    /// Whether the session is still running
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Evaluate a raw script
    pub fn get_eval(&mut self, script: &str) -> ProbeResult<String> {
        debug!(script_len = script.len(), "get_eval");
        self.processor.get_eval(script)
    }

    /// Evaluate `<prefix><function>(<args>);`
    pub fn invoke_method(&mut self, function: &str, args: &[ScriptArg]) -> ProbeResult<String> {
        debug!(function, args = args.len(), "invoke_method");
        let script = invoke::method_call(&self.js_prefix, function, args);
        self.processor.get_eval(&script)
    }

    /// Evaluate `<prefix><field>;`
    pub fn get_field(&mut self, field: &str) -> ProbeResult<String> {
        debug!(field, "get_field");
        let script = invoke::field_read(&self.js_prefix, field);
        self.processor.get_eval(&script)
    }

    /// Evaluate `<prefix><field> = <value>;`
    pub fn set_field(&mut self, field: &str, value: impl Into<ScriptArg>) -> ProbeResult<String> {
        debug!(field, "set_field");
        let script = invoke::field_write(&self.js_prefix, field, &value.into());
        self.processor.get_eval(&script)
    }

    /// Open a page
    pub fn open(&mut self, url: &str) -> ProbeResult<()> {
        info!(url, "open");
        self.processor.open(url)
    }

    /// Wait for the current page to load
    pub fn wait_for_page_to_load(&mut self, timeout_ms: u64) -> ProbeResult<()> {
        debug!(timeout_ms, "wait_for_page_to_load");
        self.processor.wait_for_page_to_load(timeout_ms)
    }

    /// Stop the session. Later calls do nothing.
    pub fn stop(&mut self) -> ProbeResult<()> {
        if !self.running {
            return Ok(());
        }
        self.running = false;
        info!(object_id = %self.object_id, "bridge session stopped");
        self.processor.stop()
    }

    /// The underlying processor
    #[must_use]
    pub const fn processor(&self) -> &P {
        &self.processor
    }

    /// The underlying processor, mutably
    pub fn processor_mut(&mut self) -> &mut P {
        &mut self.processor
    }
}

impl<P: CommandProcessor> Drop for JavaBridge<P> {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            warn!(error = %e, "failed to stop bridge session");
        }
    }
}
