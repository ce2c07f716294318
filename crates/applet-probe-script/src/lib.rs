//! JavaScript templates for driving Java applets.
//!
//! Every snippet the automation layer sends to a hosted test page is rendered
//! here. Hosted pages expose a fixture (`getTestFixture()`) plus a handful of
//! `create*` helpers and evaluate exactly what they receive, so the templates
//! must stay byte-stable.
//!
//! # Modules
//!
//! | Module | Produces |
//! |---|---|
//! | [`query`] | component queries and root prefixes |
//! | [`invoke`] | method invocations and field access |
//! | [`keyboard`] | key press scripts |
//! | [`mouse`] | robot click, press, release and move scripts |
//! | [`selection`] | item, cell, file, path and row selection |
//! | [`window`] | browser window scrolling |
//!
//! # Example
//!
//! ```rust
//! use applet_probe_script::prelude::*;
//!
//! let query = query_string(&base_fragment("button", "ok"), "");
//! assert_eq!(query, "getTestFixture().button(\"ok\")");
//!
//! let target = ScriptTarget::new("", &query);
//! let script = keyboard::press_and_release(&target, 65, 0);
//! assert!(script.ends_with(".pressAndReleaseKey(javaObject);"));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod invoke;
pub mod keyboard;
pub mod mouse;
pub mod query;
pub mod selection;
pub mod window;

pub use error::{Result, ScriptError};

/// Common imports.
pub mod prelude {
    pub use crate::error::{Result, ScriptError};
    pub use crate::invoke::{self, ScriptArg};
    pub use crate::keyboard;
    pub use crate::mouse;
    pub use crate::query::{
        base_fragment, member, query_string, root_prefix, ScriptTarget, FIXTURE_ROOT,
    };
    pub use crate::selection;
    pub use crate::window;
}
