//! In-process command processor for tests.
//!
//! [`MockProcessor`] records every call and answers evaluations from queued or
//! pattern-matched responses. Clones share state, so a test can keep one handle
//! while another moves into a bridge.
//!
//! ```rust
//! use applet_probe::bridge::JavaBridge;
//! use applet_probe::mock::MockProcessor;
//!
//! let mock = MockProcessor::new().respond_to("getSelectedIndex", "2");
//! let mut bridge = JavaBridge::new(mock.clone()).unwrap();
//! assert_eq!(bridge.get_eval("x.getSelectedIndex();").unwrap(), "2");
//! assert!(mock.was_called("eval:x.getSelectedIndex"));
//! ```

use applet_probe_script::invoke::USER_AGENT_QUERY;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::bridge::CommandProcessor;
use crate::result::{ProbeError, ProbeResult};

#[derive(Debug, Default)]
struct MockState {
    calls: Vec<String>,
    user_agent: String,
    queued: VecDeque<String>,
    responses: Vec<(String, String)>,
    failures: Vec<String>,
    running: bool,
}

/// Recording command processor.
#[derive(Debug, Clone, Default)]
pub struct MockProcessor {
    state: Rc<RefCell<MockState>>,
}

impl MockProcessor {
    /// Create a processor with an empty user agent
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `navigator.userAgent` with `user_agent`
    #[must_use]
    pub fn with_user_agent(self, user_agent: impl Into<String>) -> Self {
        self.state.borrow_mut().user_agent = user_agent.into();
        self
    }

    /// Answer any script containing `pattern` with `response`
    #[must_use]
    pub fn respond_to(self, pattern: impl Into<String>, response: impl Into<String>) -> Self {
        self.state
            .borrow_mut()
            .responses
            .push((pattern.into(), response.into()));
        self
    }

    /// Fail any script containing `pattern` with a bridge error
    #[must_use]
    pub fn fail_on(self, pattern: impl Into<String>) -> Self {
        self.state.borrow_mut().failures.push(pattern.into());
        self
    }

    /// Answer the next evaluation with `response`, ahead of patterns
    pub fn queue_response(&self, response: impl Into<String>) {
        self.state.borrow_mut().queued.push_back(response.into());
    }

    /// Every call, in order
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.state.borrow().calls.clone()
    }

    /// Evaluated scripts only, in order
    #[must_use]
    pub fn evals(&self) -> Vec<String> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter_map(|call| call.strip_prefix("eval:"))
            .map(ToString::to_string)
            .collect()
    }

    /// Most recently evaluated script
    #[must_use]
    pub fn last_eval(&self) -> Option<String> {
        self.evals().pop()
    }

    /// Whether any recorded call starts with `prefix`
    #[must_use]
    pub fn was_called(&self, prefix: &str) -> bool {
        self.state
            .borrow()
            .calls
            .iter()
            .any(|call| call.starts_with(prefix))
    }

    /// Forget recorded calls
    pub fn clear_history(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Whether the session is started
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }

    fn record(&self, call: String) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl CommandProcessor for MockProcessor {
    fn start(&mut self) -> ProbeResult<()> {
        self.record("start".to_string());
        self.state.borrow_mut().running = true;
        Ok(())
    }

    fn stop(&mut self) -> ProbeResult<()> {
        self.record("stop".to_string());
        self.state.borrow_mut().running = false;
        Ok(())
    }

    fn open(&mut self, url: &str) -> ProbeResult<()> {
        self.record(format!("open:{url}"));
        Ok(())
    }

    fn wait_for_page_to_load(&mut self, timeout_ms: u64) -> ProbeResult<()> {
        self.record(format!("wait:{timeout_ms}"));
        Ok(())
    }

    fn get_eval(&mut self, script: &str) -> ProbeResult<String> {
        self.record(format!("eval:{script}"));
        let mut state = self.state.borrow_mut();
        if script == USER_AGENT_QUERY {
            return Ok(state.user_agent.clone());
        }
        if state.failures.iter().any(|pattern| script.contains(pattern.as_str())) {
            return Err(ProbeError::bridge(format!("mock failure evaluating: {script}")));
        }
        if let Some(response) = state.queued.pop_front() {
            return Ok(response);
        }
        Ok(state
            .responses
            .iter()
            .find(|(pattern, _)| script.contains(pattern.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_default())
    }
}
