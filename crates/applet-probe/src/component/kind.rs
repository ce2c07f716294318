//! Widget kinds and the capabilities each one carries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::result::ProbeError;
use Capability::{
    Coordinates as C, InputValue as V, JavaObjectCreation as J, MultipleSelectionValues as QN,
    RowSelection as R, Selection as S, SelectionValue as Q1, Timeout as T,
};

/// A behavioural contract a descriptor may or may not satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Ordered item selection
    Selection,
    /// A point for the `*_at` mouse verbs
    Coordinates,
    /// A keyboard input payload
    InputValue,
    /// A timeout value
    Timeout,
    /// Ordered row-index selection
    RowSelection,
    /// Selection goes through a Java helper object
    JavaObjectCreation,
    /// `selected index` / `selected value` queries
    SelectionValue,
    /// `selected indices` / `selected values` queries
    MultipleSelectionValues,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Selection => "selection",
            Self::Coordinates => "coordinates",
            Self::InputValue => "input value",
            Self::Timeout => "timeout",
            Self::RowSelection => "row selection",
            Self::JavaObjectCreation => "java object creation",
            Self::SelectionValue => "selection value queries",
            Self::MultipleSelectionValues => "multiple selection value queries",
        };
        f.write_str(name)
    }
}

/// How a selectable component stores its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// One item at a time; adding replaces
    SingleSlot,
    /// Items accumulate in insertion order
    Accumulate {
        /// Reject an item already present
        unique: bool,
    },
}

/// Which items a selectable component accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRule {
    /// Any text item
    Text,
    /// Table cells only
    Cell,
    /// Text shaped like a tree path
    TreePath,
    /// Text shaped like a Windows file or directory path
    FilePath,
}

/// Widget kinds known to the hosted test fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    /// Push button
    Button,
    /// Check box
    CheckBox,
    /// Drop-down combo box
    ComboBox,
    /// Dialog window
    Dialog,
    /// File chooser
    FileChooser,
    /// Text label
    Label,
    /// Item list
    List,
    /// Menu entry
    MenuItem,
    /// Container panel
    Panel,
    /// Radio button
    RadioButton,
    /// Scroll bar
    ScrollBar,
    /// Scrolling container
    ScrollPane,
    /// Slider
    Slider,
    /// Spinner
    Spinner,
    /// Split container
    SplitPane,
    /// Single tab
    Tab,
    /// Tab container
    TabbedPane,
    /// Table of cells
    Table,
    /// Single-line text field
    TextBox,
    /// Toggle button
    ToggleButton,
    /// Tool bar
    ToolBar,
    /// Tree of nodes
    Tree,
}

impl ComponentKind {
    /// Every kind, in tag order
    pub const ALL: [Self; 22] = [
        Self::Button,
        Self::CheckBox,
        Self::ComboBox,
        Self::Dialog,
        Self::FileChooser,
        Self::Label,
        Self::List,
        Self::MenuItem,
        Self::Panel,
        Self::RadioButton,
        Self::ScrollBar,
        Self::ScrollPane,
        Self::Slider,
        Self::Spinner,
        Self::SplitPane,
        Self::Tab,
        Self::TabbedPane,
        Self::Table,
        Self::TextBox,
        Self::ToggleButton,
        Self::ToolBar,
        Self::Tree,
    ];

    /// Fixture method naming this kind
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::CheckBox => "checkBox",
            Self::ComboBox => "comboBox",
            Self::Dialog => "dialog",
            Self::FileChooser => "fileChooser",
            Self::Label => "label",
            Self::List => "list",
            Self::MenuItem => "menuItem",
            Self::Panel => "panel",
            Self::RadioButton => "radioButton",
            Self::ScrollBar => "scrollBar",
            Self::ScrollPane => "scrollPane",
            Self::Slider => "slider",
            Self::Spinner => "spinner",
            Self::SplitPane => "splitPane",
            Self::Tab => "tab",
            Self::TabbedPane => "tabbedPane",
            Self::Table => "table",
            Self::TextBox => "textBox",
            Self::ToggleButton => "toggleButton",
            Self::ToolBar => "toolBar",
            Self::Tree => "tree",
        }
    }

    /// Capabilities of this kind
    #[must_use]
    pub const fn capabilities(self) -> &'static [Capability] {
        match self {
            Self::Button => &[V],
            Self::ComboBox => &[S, V, Q1, QN],
            Self::FileChooser => &[S, C, J],
            Self::List | Self::Table => &[S, C, J, Q1, QN],
            Self::Spinner => &[S, V],
            Self::TabbedPane | Self::TextBox => &[S, V, C],
            Self::Tree => &[S, R, T, C],
            Self::Panel => &[C],
            Self::CheckBox
            | Self::Dialog
            | Self::Label
            | Self::MenuItem
            | Self::RadioButton
            | Self::ScrollBar
            | Self::ScrollPane
            | Self::Slider
            | Self::SplitPane
            | Self::Tab
            | Self::ToggleButton
            | Self::ToolBar => &[],
        }
    }

    /// Whether this kind has a capability
    #[must_use]
    pub fn supports(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Storage policy; `None` for kinds without selection
    #[must_use]
    pub const fn selection_policy(self) -> Option<SelectionPolicy> {
        match self {
            Self::ComboBox | Self::Spinner | Self::TabbedPane | Self::TextBox => {
                Some(SelectionPolicy::SingleSlot)
            }
            Self::List | Self::FileChooser | Self::Tree => {
                Some(SelectionPolicy::Accumulate { unique: false })
            }
            Self::Table => Some(SelectionPolicy::Accumulate { unique: true }),
            _ => None,
        }
    }

    /// Accepted items; `None` for kinds without selection
    #[must_use]
    pub const fn item_rule(self) -> Option<ItemRule> {
        match self {
            Self::ComboBox | Self::List | Self::Spinner | Self::TabbedPane | Self::TextBox => {
                Some(ItemRule::Text)
            }
            Self::Table => Some(ItemRule::Cell),
            Self::Tree => Some(ItemRule::TreePath),
            Self::FileChooser => Some(ItemRule::FilePath),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ComponentKind {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| ProbeError::invalid_operand(format!("unknown component kind: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.tag().parse::<ComponentKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert!("grid".parse::<ComponentKind>().is_err());
    }

    #[test]
    fn test_selection_kinds_have_policy_and_rule() {
        for kind in ComponentKind::ALL {
            let selectable = kind.supports(Capability::Selection);
            assert_eq!(kind.selection_policy().is_some(), selectable, "{kind}");
            assert_eq!(kind.item_rule().is_some(), selectable, "{kind}");
        }
    }

    #[test]
    fn test_only_tree_selects_rows() {
        let row_kinds: Vec<_> = ComponentKind::ALL
            .into_iter()
            .filter(|kind| kind.supports(Capability::RowSelection))
            .collect();
        assert_eq!(row_kinds, vec![ComponentKind::Tree]);
    }

    #[test]
    fn test_java_object_kinds() {
        assert!(ComponentKind::Table.supports(Capability::JavaObjectCreation));
        assert!(ComponentKind::FileChooser.supports(Capability::JavaObjectCreation));
        assert!(!ComponentKind::Tree.supports(Capability::JavaObjectCreation));
    }

    #[test]
    fn test_serde_uses_tag() {
        assert_eq!(
            serde_json::to_string(&ComponentKind::TabbedPane).unwrap(),
            "\"tabbedPane\""
        );
    }

    #[test]
    fn test_panel_has_coordinates_only() {
        assert_eq!(ComponentKind::Panel.capabilities(), &[Capability::Coordinates]);
    }

    #[test]
    fn test_combo_box_takes_input_value() {
        assert!(ComponentKind::ComboBox.supports(Capability::InputValue));
        assert!(ComponentKind::ComboBox.supports(Capability::Selection));
        assert!(!ComponentKind::ComboBox.supports(Capability::Coordinates));
    }

    #[test]
    fn test_capability_display() {
        assert_eq!(Capability::RowSelection.to_string(), "row selection");
    }
}
