//! Selection verbs and selection-value queries.

use super::JavaAction;
use crate::bridge::CommandProcessor;
use crate::component::{Capability, Component, SelectionItem};
use crate::result::{ProbeError, ProbeResult};

/// Returned by [`JavaAction::get_selected_index`] when nothing is selected
pub const INVALID_INDEX: i32 = -1;

fn parse_index(value: &str) -> ProbeResult<i32> {
    value.trim().parse().map_err(|_| ProbeError::Format {
        value: value.to_string(),
        expected: "integer index",
    })
}

fn split_values(result: &str) -> Vec<String> {
    if result.is_empty() {
        return Vec::new();
    }
    result.split(',').map(|value| value.trim().to_string()).collect()
}

impl<P: CommandProcessor> JavaAction<P> {
    fn select_held(&mut self) -> ProbeResult<&mut Self> {
        let target = self.target()?;
        let script = self.current()?.selection_script(&target)?;
        self.eval(&script)?;
        Ok(self)
    }

    fn query_current(&mut self, fragment: fn(&Component) -> ProbeResult<&'static str>) -> ProbeResult<String> {
        let fragment = fragment(self.current()?)?;
        // Fragments carry their own leading dot, except `target.getSelectedRows`.
        let fragment = fragment.strip_prefix('.').unwrap_or(fragment);
        self.invoke_on_current(fragment, &[])
    }

    // =========================================================================
    // Select
    // =========================================================================

    /// Select whatever the component holds: rows first, then items.
    pub fn select(&mut self, component: Component) -> ProbeResult<&mut Self> {
        self.adopt(component, &[Capability::Selection])?;
        self.select_current()
    }

    /// Select whatever the current component holds.
    pub fn select_current(&mut self) -> ProbeResult<&mut Self> {
        self.current()?.require(Capability::Selection)?;
        self.select_held()
    }

    /// Add an item to the current component, then select.
    pub fn select_with(&mut self, item: impl Into<SelectionItem>) -> ProbeResult<&mut Self> {
        let item = item.into();
        self.mutate_current(Capability::Selection, |component| component.add_item(item))?;
        self.select_held()
    }

    /// Same as [`JavaAction::select`].
    pub fn add_selection(&mut self, component: Component) -> ProbeResult<&mut Self> {
        self.select(component)
    }

    /// Same as [`JavaAction::select_current`].
    pub fn add_selection_current(&mut self) -> ProbeResult<&mut Self> {
        self.select_current()
    }

    /// Same as [`JavaAction::select_with`].
    pub fn add_selection_with(&mut self, item: impl Into<SelectionItem>) -> ProbeResult<&mut Self> {
        self.select_with(item)
    }

    // =========================================================================
    // Index queries
    // =========================================================================

    /// Selected index, or `None` when the applet reports nothing.
    pub fn find_selected_index(&mut self, component: Component) -> ProbeResult<Option<i32>> {
        self.adopt(component, &[Capability::SelectionValue])?;
        self.find_selected_index_current()
    }

    /// Selected index of the current component, or `None`.
    pub fn find_selected_index_current(&mut self) -> ProbeResult<Option<i32>> {
        let result = self.query_current(Component::selected_index_query)?;
        if result.is_empty() {
            return Ok(None);
        }
        parse_index(&result).map(Some)
    }

    /// Selected index, or [`INVALID_INDEX`] when the applet reports nothing.
    pub fn get_selected_index(&mut self, component: Component) -> ProbeResult<i32> {
        Ok(self.find_selected_index(component)?.unwrap_or(INVALID_INDEX))
    }

    /// Selected index of the current component, or [`INVALID_INDEX`].
    pub fn get_selected_index_current(&mut self) -> ProbeResult<i32> {
        Ok(self.find_selected_index_current()?.unwrap_or(INVALID_INDEX))
    }

    /// All selected indices; empty when the applet reports nothing.
    pub fn get_selected_indices(&mut self, component: Component) -> ProbeResult<Vec<i32>> {
        self.adopt(component, &[Capability::MultipleSelectionValues])?;
        self.get_selected_indices_current()
    }

    /// All selected indices of the current component.
    pub fn get_selected_indices_current(&mut self) -> ProbeResult<Vec<i32>> {
        let result = self.query_current(Component::selected_indices_query)?;
        split_values(&result)
            .iter()
            .map(|index| parse_index(index))
            .collect()
    }

    // =========================================================================
    // Value queries
    // =========================================================================

    /// Selected value.
    pub fn get_selected_value(&mut self, component: Component) -> ProbeResult<String> {
        self.adopt(component, &[Capability::SelectionValue])?;
        self.get_selected_value_current()
    }

    /// Selected value of the current component.
    pub fn get_selected_value_current(&mut self) -> ProbeResult<String> {
        self.query_current(Component::selected_value_query)
    }

    /// Same as [`JavaAction::get_selected_value`].
    pub fn get_value(&mut self, component: Component) -> ProbeResult<String> {
        self.get_selected_value(component)
    }

    /// Same as [`JavaAction::get_selected_value_current`].
    pub fn get_value_current(&mut self) -> ProbeResult<String> {
        self.get_selected_value_current()
    }

    /// All selected values, trimmed.
    pub fn get_selected_values(&mut self, component: Component) -> ProbeResult<Vec<String>> {
        self.adopt(component, &[Capability::MultipleSelectionValues])?;
        self.get_selected_values_current()
    }

    /// All selected values of the current component, trimmed.
    pub fn get_selected_values_current(&mut self) -> ProbeResult<Vec<String>> {
        let result = self.query_current(Component::selected_values_query)?;
        Ok(split_values(&result))
    }

    /// Same as [`JavaAction::get_selected_values`].
    pub fn get_values(&mut self, component: Component) -> ProbeResult<Vec<String>> {
        self.get_selected_values(component)
    }

    /// Same as [`JavaAction::get_selected_values_current`].
    pub fn get_values_current(&mut self) -> ProbeResult<Vec<String>> {
        self.get_selected_values_current()
    }
}
