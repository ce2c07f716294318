//! Applet Probe: fluent automation of Java applets in a remote browser
//!
//! Applets embedded in a page expose a test fixture to JavaScript. This crate
//! models the Swing widgets of such an applet as [`Component`] descriptors,
//! renders every user action into a JavaScript snippet and evaluates it
//! through a Selenium-style [`CommandProcessor`].
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐    ┌────────────┐    ┌────────────┐    ┌────────────┐
//! │ JavaAction │───►│ Component  │───►│ JS script  │───►│ JavaBridge │
//! │ (verbs)    │    │ (queries)  │    │ templates  │    │ (getEval)  │
//! └────────────┘    └────────────┘    └────────────┘    └────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use applet_probe::prelude::*;
//!
//! let mock = MockProcessor::new();
//! let bridge = JavaBridge::new(mock.clone()).unwrap();
//! let mut action = JavaAction::new(bridge);
//!
//! let list = Component::list("employees").with_items(["Alice", "Bob"]).unwrap();
//! action.select(list).unwrap();
//!
//! assert!(mock.last_eval().unwrap().contains("createStringArray([\"Alice\",\"Bob\"])"));
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod action;
pub mod bridge;
pub mod component;
pub mod config;
pub mod geometry;
pub mod keystroke;
pub mod logging;
pub mod mock;
pub mod result;

pub use action::{JavaAction, WaitDelegate, INVALID_INDEX};
pub use applet_probe_script;
pub use bridge::{CommandProcessor, JavaBridge};
pub use component::{Capability, Component, ComponentKind, SelectionItem};
pub use config::BridgeConfig;
pub use geometry::{Cell, Coordinates, MouseButton, MouseClick};
pub use keystroke::{KeyStroke, KeyStrokeMapping, KeyStrokeMappingProvider};
pub use logging::{init_logging, try_init_logging, LogConfig, LogFormat};
pub use mock::MockProcessor;
pub use result::{ProbeError, ProbeResult};

/// Common imports
pub mod prelude {
    pub use super::action::{JavaAction, WaitDelegate, INVALID_INDEX};
    pub use super::bridge::{CommandProcessor, JavaBridge};
    pub use super::component::{
        Capability, Component, ComponentKind, ItemRule, SelectionItem, SelectionPolicy,
    };
    pub use super::config::BridgeConfig;
    pub use super::geometry::{Cell, Coordinates, MouseButton, MouseClick};
    pub use super::keystroke::{
        KeyStroke, KeyStrokeMapping, KeyStrokeMappingProvider, ALT_MASK, CTRL_MASK, META_MASK,
        NO_MASK, SHIFT_MASK,
    };
    pub use super::logging::{init_logging, LogConfig, LogFormat};
    pub use super::mock::MockProcessor;
    pub use super::result::{ProbeError, ProbeResult};
}
