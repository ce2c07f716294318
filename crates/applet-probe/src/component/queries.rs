//! Member fragments that read a component's current selection back.
//!
//! Each fragment is appended to the component query and invoked through the
//! bridge, e.g. `getTestFixture().list("l").target.getSelectedIndex()`.

use super::kind::{Capability, ComponentKind};
use super::Component;
use crate::result::{ProbeError, ProbeResult};

impl Component {
    /// Fragment returning the selected index (row, for tables)
    pub fn selected_index_query(&self) -> ProbeResult<&'static str> {
        self.require(Capability::SelectionValue)?;
        match self.kind {
            ComponentKind::Table => Ok(".selectedRow"),
            _ => Ok(".target.getSelectedIndex"),
        }
    }

    /// Fragment returning the selected value (item, for combo boxes)
    pub fn selected_value_query(&self) -> ProbeResult<&'static str> {
        self.require(Capability::SelectionValue)?;
        match self.kind {
            ComponentKind::Table => Ok(".selectionValue"),
            ComponentKind::ComboBox => Ok(".target.getSelectedItem"),
            _ => Ok(".target.getSelectedValue"),
        }
    }

    /// Fragment returning all selected indices
    pub fn selected_indices_query(&self) -> ProbeResult<&'static str> {
        self.require(Capability::MultipleSelectionValues)?;
        match self.kind {
            ComponentKind::Table => Ok("target.getSelectedRows"),
            ComponentKind::ComboBox => Err(ProbeError::not_implemented(
                "The Java Swing ComboBox does not implement an equivalent selectedIndicies method.",
            )),
            _ => Ok(".target.getSelectedIndices"),
        }
    }

    /// Fragment returning all selected values
    pub fn selected_values_query(&self) -> ProbeResult<&'static str> {
        self.require(Capability::MultipleSelectionValues)?;
        match self.kind {
            ComponentKind::Table => Err(ProbeError::not_implemented(
                "The Java Swing Table does not implement an equivalent selectedValues method.",
            )),
            ComponentKind::ComboBox => Ok(".target.getSelectedObjects"),
            _ => Ok(".target.getSelectedValues"),
        }
    }

    /// Alias of [`Component::selected_index_query`]
    pub fn selected_row_query(&self) -> ProbeResult<&'static str> {
        self.selected_index_query()
    }

    /// Alias of [`Component::selected_value_query`]
    pub fn selected_item_query(&self) -> ProbeResult<&'static str> {
        self.selected_value_query()
    }

    /// Alias of [`Component::selected_indices_query`]
    pub fn selected_rows_query(&self) -> ProbeResult<&'static str> {
        self.selected_indices_query()
    }

    /// Alias of [`Component::selected_values_query`]
    pub fn selected_items_query(&self) -> ProbeResult<&'static str> {
        self.selected_values_query()
    }
}
