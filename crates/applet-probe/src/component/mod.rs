//! Component descriptors.
//!
//! A [`Component`] names one widget inside the applet (`table("orders")`) and
//! carries whatever state the verbs acting on it need: selected items or rows,
//! an input value, a timeout, a point. Which of those slots a descriptor has is
//! decided by its [`ComponentKind`] and checked through [`Capability`], so a
//! verb on the wrong kind of widget fails with a typed error instead of
//! generating a script the applet would reject.
//!
//! ```rust
//! use applet_probe::component::Component;
//!
//! let table = Component::table("orders");
//! assert_eq!(table.query_string(""), "getTestFixture().table(\"orders\")");
//! assert_eq!(
//!     table.query_string("dialog(\"confirm\")"),
//!     "getTestFixture().dialog(\"confirm\").table(\"orders\")"
//! );
//! ```

mod kind;
mod queries;
mod script;
mod selection;
mod validate;

pub use kind::{Capability, ComponentKind, ItemRule, SelectionPolicy};
pub use selection::SelectionItem;

use applet_probe_script::query;
use serde::{Deserialize, Serialize};

use crate::geometry::Coordinates;
use crate::result::{ProbeError, ProbeResult};

/// Describes one GUI element inside the applet.
///
/// `kind` and `name` are fixed at construction; everything else is mutable
/// test state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    kind: ComponentKind,
    name: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    items: Vec<SelectionItem>,
    #[serde(default)]
    rows: Vec<u32>,
    #[serde(default)]
    value: String,
    #[serde(default)]
    timeout: String,
    #[serde(default)]
    coordinates: Coordinates,
}

macro_rules! named_constructors {
    ($($(#[$doc:meta])* $fn_name:ident => $kind:ident),* $(,)?) => {
        impl Component {
            $(
                $(#[$doc])*
                #[must_use]
                pub fn $fn_name(name: impl Into<String>) -> Self {
                    Self::new(ComponentKind::$kind, name)
                }
            )*
        }
    };
}

named_constructors! {
    /// `button("name")`
    button => Button,
    /// `checkBox("name")`
    check_box => CheckBox,
    /// `comboBox("name")`
    combo_box => ComboBox,
    /// `dialog("name")`
    dialog => Dialog,
    /// `fileChooser("name")`
    file_chooser => FileChooser,
    /// `label("name")`
    label => Label,
    /// `list("name")`
    list => List,
    /// `menuItem("name")`
    menu_item => MenuItem,
    /// `panel("name")`
    panel => Panel,
    /// `radioButton("name")`
    radio_button => RadioButton,
    /// `scrollBar("name")`
    scroll_bar => ScrollBar,
    /// `scrollPane("name")`
    scroll_pane => ScrollPane,
    /// `slider("name")`
    slider => Slider,
    /// `spinner("name")`
    spinner => Spinner,
    /// `splitPane("name")`
    split_pane => SplitPane,
    /// `tab("name")`
    tab => Tab,
    /// `tabbedPane("name")`
    tabbed_pane => TabbedPane,
    /// `table("name")`
    table => Table,
    /// `textBox("name")`
    text_box => TextBox,
    /// `toggleButton("name")`
    toggle_button => ToggleButton,
    /// `toolBar("name")`
    tool_bar => ToolBar,
    /// `tree("name")`
    tree => Tree,
}

impl Component {
    /// Create a descriptor with empty display text
    #[must_use]
    pub fn new(kind: ComponentKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            text: String::new(),
            items: Vec::new(),
            rows: Vec::new(),
            value: String::new(),
            timeout: String::new(),
            coordinates: Coordinates::default(),
        }
    }

    /// Create a descriptor with display text
    #[must_use]
    pub fn with_text(kind: ComponentKind, name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut component = Self::new(kind, name);
        component.text = text.into();
        component
    }

    /// Widget kind
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Identifier used in queries
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the display text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Whether this descriptor has a capability
    #[must_use]
    pub fn supports(&self, capability: Capability) -> bool {
        self.kind.supports(capability)
    }

    /// Fail with [`ProbeError::CapabilityMismatch`] unless the capability is present.
    pub fn require(&self, capability: Capability) -> ProbeResult<()> {
        if self.supports(capability) {
            Ok(())
        } else {
            Err(ProbeError::capability(self.query_string(""), capability))
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// `kind("name")`
    #[must_use]
    pub fn base_query_fragment(&self) -> String {
        query::base_fragment(self.kind.tag(), &self.name)
    }

    /// Full query from the fixture root, scoped by `prefix` when non-empty.
    #[must_use]
    pub fn query_string(&self, prefix: &str) -> String {
        query::query_string(&self.base_query_fragment(), prefix)
    }

    // =========================================================================
    // Value slots
    // =========================================================================

    /// Keyboard input payload
    pub fn value(&self) -> ProbeResult<&str> {
        self.require(Capability::InputValue)?;
        Ok(&self.value)
    }

    /// Replace the keyboard input payload
    pub fn set_value(&mut self, value: impl Into<String>) -> ProbeResult<()> {
        self.require(Capability::InputValue)?;
        self.value = value.into();
        Ok(())
    }

    /// Builder form of [`Component::set_value`]
    pub fn with_value(mut self, value: impl Into<String>) -> ProbeResult<Self> {
        self.set_value(value)?;
        Ok(self)
    }

    /// Timeout embedded into scripts
    pub fn timeout(&self) -> ProbeResult<&str> {
        self.require(Capability::Timeout)?;
        Ok(&self.timeout)
    }

    /// Replace the timeout
    pub fn set_timeout(&mut self, timeout: impl Into<String>) -> ProbeResult<()> {
        self.require(Capability::Timeout)?;
        self.timeout = timeout.into();
        Ok(())
    }

    /// Builder form of [`Component::set_timeout`]
    pub fn with_timeout(mut self, timeout: impl Into<String>) -> ProbeResult<Self> {
        self.set_timeout(timeout)?;
        Ok(self)
    }

    /// Point used by the `*_at` mouse verbs, `(0, 0)` until set
    pub fn coordinates(&self) -> ProbeResult<Coordinates> {
        self.require(Capability::Coordinates)?;
        Ok(self.coordinates)
    }

    /// Replace the point
    pub fn set_coordinates(&mut self, coordinates: Coordinates) -> ProbeResult<()> {
        self.require(Capability::Coordinates)?;
        self.coordinates = coordinates;
        Ok(())
    }

    /// Builder form of [`Component::set_coordinates`]
    pub fn with_coordinates(mut self, coordinates: Coordinates) -> ProbeResult<Self> {
        self.set_coordinates(coordinates)?;
        Ok(self)
    }
}
