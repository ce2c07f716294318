//! Item and row selection state.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use super::kind::{Capability, SelectionPolicy};
use super::{validate, Component};
use crate::geometry::Cell;
use crate::result::{ProbeError, ProbeResult};

const EXACTLY_ONE: &str = "Specify EXACTLY one selection.";
const EXACTLY_ONE_ROW: &str = "Specify EXACTLY one row selection.";
const SINGLE_SLOT_ADD: &str = "This component can only have a single item at a time. Use add_item()";
const SINGLE_SLOT_REMOVE: &str =
    "This component can only have a single item at a time. Use remove_item().";

/// One selected entry: plain text or a table cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionItem {
    /// List entry, tab title, tree path, file path
    Text(String),
    /// Table cell
    Cell(Cell),
}

impl SelectionItem {
    /// Text content, when this is a text item
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Cell(_) => None,
        }
    }

    /// Cell address, when this is a cell item
    #[must_use]
    pub const fn as_cell(&self) -> Option<Cell> {
        match self {
            Self::Cell(cell) => Some(*cell),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for SelectionItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Cell(cell) => cell.fmt(f),
        }
    }
}

impl From<&str> for SelectionItem {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for SelectionItem {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Cell> for SelectionItem {
    fn from(cell: Cell) -> Self {
        Self::Cell(cell)
    }
}

impl Component {
    fn policy(&self) -> ProbeResult<SelectionPolicy> {
        self.require(Capability::Selection)?;
        self.kind
            .selection_policy()
            .ok_or_else(|| ProbeError::capability(self.query_string(""), Capability::Selection))
    }

    fn checked_item(&self, item: SelectionItem) -> ProbeResult<SelectionItem> {
        validate::check_item(self.kind, &item)?;
        Ok(item)
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Add an item. Single-slot components replace their current item.
    pub fn add_item(&mut self, item: impl Into<SelectionItem>) -> ProbeResult<()> {
        let policy = self.policy()?;
        let item = self.checked_item(item.into())?;
        match policy {
            SelectionPolicy::SingleSlot => self.items.clear(),
            SelectionPolicy::Accumulate { unique: true } if self.items.contains(&item) => {
                return Err(ProbeError::DuplicateSelection {
                    item: item.to_string(),
                });
            }
            SelectionPolicy::Accumulate { .. } => {}
        }
        trace!(component = %self.name, item = %item, "add selection item");
        self.items.push(item);
        Ok(())
    }

    /// Add several items, all or none.
    ///
    /// Single-slot components accept exactly one item, and only while empty.
    pub fn add_items<I, T>(&mut self, items: I) -> ProbeResult<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<SelectionItem>,
    {
        let policy = self.policy()?;
        let items = items
            .into_iter()
            .map(|item| self.checked_item(item.into()))
            .collect::<ProbeResult<Vec<_>>>()?;

        match policy {
            SelectionPolicy::SingleSlot => {
                if items.len() != 1 || !self.items.is_empty() {
                    return Err(ProbeError::selection_count(SINGLE_SLOT_ADD));
                }
            }
            SelectionPolicy::Accumulate { unique: true } => {
                for (index, item) in items.iter().enumerate() {
                    if self.items.contains(item) || items[..index].contains(item) {
                        return Err(ProbeError::DuplicateSelection {
                            item: item.to_string(),
                        });
                    }
                }
            }
            SelectionPolicy::Accumulate { unique: false } => {}
        }
        self.items.extend(items);
        Ok(())
    }

    /// Builder form of [`Component::add_item`]
    pub fn with_item(mut self, item: impl Into<SelectionItem>) -> ProbeResult<Self> {
        self.add_item(item)?;
        Ok(self)
    }

    /// Builder form of [`Component::add_items`]
    pub fn with_items<I, T>(mut self, items: I) -> ProbeResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<SelectionItem>,
    {
        self.add_items(items)?;
        Ok(self)
    }

    /// Remove the first occurrence of an item.
    pub fn remove_item(&mut self, item: impl Into<SelectionItem>) -> ProbeResult<()> {
        self.policy()?;
        let item = self.checked_item(item.into())?;
        let position = self
            .items
            .iter()
            .position(|selected| *selected == item)
            .ok_or_else(|| ProbeError::NotFound {
                item: item.to_string(),
            })?;
        self.items.remove(position);
        Ok(())
    }

    /// Remove several items, all or none.
    pub fn remove_items<I, T>(&mut self, items: I) -> ProbeResult<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<SelectionItem>,
    {
        if self.policy()? == SelectionPolicy::SingleSlot {
            return Err(ProbeError::selection_count(SINGLE_SLOT_REMOVE));
        }
        let items = items
            .into_iter()
            .map(|item| self.checked_item(item.into()))
            .collect::<ProbeResult<Vec<_>>>()?;

        let mut remaining = self.items.clone();
        for item in &items {
            let position = remaining
                .iter()
                .position(|selected| selected == item)
                .ok_or_else(|| ProbeError::NotFound {
                    item: item.to_string(),
                })?;
            remaining.remove(position);
        }
        self.items = remaining;
        Ok(())
    }

    /// The only selected item.
    pub fn selected_item(&self) -> ProbeResult<&SelectionItem> {
        self.policy()?;
        match self.items.as_slice() {
            [item] => Ok(item),
            _ => Err(ProbeError::selection_count(EXACTLY_ONE)),
        }
    }

    /// Selected items in insertion order.
    ///
    /// Single-slot components require exactly one; the others may be empty.
    pub fn selected_items(&self) -> ProbeResult<&[SelectionItem]> {
        if self.policy()? == SelectionPolicy::SingleSlot && self.items.len() != 1 {
            return Err(ProbeError::selection_count(EXACTLY_ONE));
        }
        Ok(&self.items)
    }

    /// Drop every selected item
    pub fn clear_items(&mut self) -> ProbeResult<()> {
        self.policy()?;
        self.items.clear();
        Ok(())
    }

    // =========================================================================
    // Rows
    // =========================================================================

    /// Append a row index
    pub fn add_row(&mut self, row: u32) -> ProbeResult<()> {
        self.require(Capability::RowSelection)?;
        self.rows.push(row);
        Ok(())
    }

    /// Append several row indices
    pub fn add_rows(&mut self, rows: impl IntoIterator<Item = u32>) -> ProbeResult<()> {
        self.require(Capability::RowSelection)?;
        self.rows.extend(rows);
        Ok(())
    }

    /// Builder form of [`Component::add_rows`]
    pub fn with_rows(mut self, rows: impl IntoIterator<Item = u32>) -> ProbeResult<Self> {
        self.add_rows(rows)?;
        Ok(self)
    }

    /// Remove the first occurrence of a row index
    pub fn remove_row(&mut self, row: u32) -> ProbeResult<()> {
        self.require(Capability::RowSelection)?;
        let position = self
            .rows
            .iter()
            .position(|&selected| selected == row)
            .ok_or_else(|| ProbeError::NotFound {
                item: row.to_string(),
            })?;
        self.rows.remove(position);
        Ok(())
    }

    /// Remove several row indices, all or none
    pub fn remove_rows(&mut self, rows: impl IntoIterator<Item = u32>) -> ProbeResult<()> {
        self.require(Capability::RowSelection)?;
        let mut remaining = self.rows.clone();
        for row in rows {
            let position = remaining
                .iter()
                .position(|&selected| selected == row)
                .ok_or_else(|| ProbeError::NotFound {
                    item: row.to_string(),
                })?;
            remaining.remove(position);
        }
        self.rows = remaining;
        Ok(())
    }

    /// The only selected row
    pub fn selected_row(&self) -> ProbeResult<u32> {
        self.require(Capability::RowSelection)?;
        match self.rows.as_slice() {
            [row] => Ok(*row),
            _ => Err(ProbeError::selection_count(EXACTLY_ONE_ROW)),
        }
    }

    /// Selected rows in insertion order
    pub fn selected_rows(&self) -> ProbeResult<&[u32]> {
        self.require(Capability::RowSelection)?;
        Ok(&self.rows)
    }

    /// Whether any row is selected; always false without row selection
    #[must_use]
    pub fn has_row_selection(&self) -> bool {
        self.supports(Capability::RowSelection) && !self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Single-slot components
    // ========================================================================

    mod single_slot_tests {
        use super::*;

        #[test]
        fn test_selected_item_before_add_fails() {
            for component in [
                Component::text_box("t"),
                Component::tabbed_pane("p"),
                Component::spinner("s"),
                Component::combo_box("c"),
            ] {
                let err = component.selected_item().unwrap_err();
                assert!(matches!(err, ProbeError::InvalidSelectionCount { .. }));
            }
        }

        #[test]
        fn test_add_item_replaces() {
            let mut text_box = Component::text_box("t");
            text_box.add_item("first").unwrap();
            assert_eq!(text_box.selected_item().unwrap(), &SelectionItem::from("first"));
            text_box.add_item("second").unwrap();
            assert_eq!(text_box.selected_items().unwrap(), &[SelectionItem::from("second")]);
        }

        #[test]
        fn test_add_items_needs_exactly_one_while_empty() {
            let mut spinner = Component::spinner("s");
            assert!(spinner.add_items(["a", "b"]).is_err());
            spinner.add_items(["a"]).unwrap();
            let err = spinner.add_items(["b"]).unwrap_err();
            assert!(matches!(err, ProbeError::InvalidSelectionCount { .. }));
            assert_eq!(spinner.selected_item().unwrap().as_text(), Some("a"));
        }

        #[test]
        fn test_remove_items_always_fails() {
            let mut pane = Component::tabbed_pane("p").with_item("Tab 1").unwrap();
            assert!(matches!(
                pane.remove_items(["Tab 1"]).unwrap_err(),
                ProbeError::InvalidSelectionCount { .. }
            ));
            pane.remove_item("Tab 1").unwrap();
            assert!(pane.selected_items().is_err());
        }

        #[test]
        fn test_rejects_cells() {
            let err = Component::text_box("t").add_item(Cell::new(1, 1)).unwrap_err();
            assert!(matches!(err, ProbeError::InvalidOperand { .. }));
        }
    }

    // ========================================================================
    // Accumulating components
    // ========================================================================

    mod accumulate_tests {
        use super::*;

        #[test]
        fn test_insertion_order() {
            let list = Component::list("l").with_items(["b", "a", "c"]).unwrap();
            let texts: Vec<_> = list
                .selected_items()
                .unwrap()
                .iter()
                .map(ToString::to_string)
                .collect();
            assert_eq!(texts, vec!["b", "a", "c"]);
        }

        #[test]
        fn test_add_then_remove_all_is_empty() {
            let mut list = Component::list("l").with_items(["a", "b"]).unwrap();
            list.remove_items(["a", "b"]).unwrap();
            assert!(list.selected_items().unwrap().is_empty());
        }

        #[test]
        fn test_list_allows_duplicates() {
            let list = Component::list("l").with_items(["a", "a"]).unwrap();
            assert_eq!(list.selected_items().unwrap().len(), 2);
        }

        #[test]
        fn test_remove_missing_item() {
            let mut list = Component::list("l").with_item("a").unwrap();
            let err = list.remove_item("z").unwrap_err();
            assert!(matches!(err, ProbeError::NotFound { ref item } if item == "z"));
        }

        #[test]
        fn test_remove_items_is_atomic() {
            let mut list = Component::list("l").with_items(["a", "b"]).unwrap();
            assert!(list.remove_items(["a", "z"]).is_err());
            assert_eq!(list.selected_items().unwrap().len(), 2);
        }

        #[test]
        fn test_selected_item_needs_exactly_one() {
            let list = Component::list("l").with_items(["a", "b"]).unwrap();
            assert!(list.selected_item().is_err());
        }

        #[test]
        fn test_clear_items() {
            let mut list = Component::list("l").with_items(["a", "b"]).unwrap();
            list.clear_items().unwrap();
            assert!(list.selected_items().unwrap().is_empty());
        }
    }

    mod table_tests {
        use super::*;

        #[test]
        fn test_duplicate_cell_rejected() {
            let mut table = Component::table("t").with_item(Cell::new(1, 1)).unwrap();
            let err = table.add_item(Cell::new(1, 1)).unwrap_err();
            assert!(matches!(err, ProbeError::DuplicateSelection { ref item } if item == "1,1"));
        }

        #[test]
        fn test_duplicate_within_batch_rejected() {
            let mut table = Component::table("t");
            assert!(table.add_items([Cell::new(1, 1), Cell::new(1, 1)]).is_err());
            assert!(table.selected_items().unwrap().is_empty());
        }

        #[test]
        fn test_text_rejected() {
            let err = Component::table("t").add_item("1,1").unwrap_err();
            assert!(matches!(err, ProbeError::InvalidOperand { .. }));
        }

        #[test]
        fn test_no_selection_on_plain_component() {
            let err = Component::button("b").add_item("x").unwrap_err();
            assert!(matches!(
                err,
                ProbeError::CapabilityMismatch {
                    capability: Capability::Selection,
                    ..
                }
            ));
        }
    }

    // ========================================================================
    // Rows
    // ========================================================================

    mod row_tests {
        use super::*;

        #[test]
        fn test_rows_in_order() {
            let tree = Component::tree("t").with_rows([3, 1, 2]).unwrap();
            assert_eq!(tree.selected_rows().unwrap(), &[3, 1, 2]);
            assert!(tree.has_row_selection());
        }

        #[test]
        fn test_selected_row_exactly_one() {
            let mut tree = Component::tree("t");
            assert!(tree.selected_row().is_err());
            tree.add_row(4).unwrap();
            assert_eq!(tree.selected_row().unwrap(), 4);
            tree.add_row(5).unwrap();
            assert!(tree.selected_row().is_err());
        }

        #[test]
        fn test_remove_rows() {
            let mut tree = Component::tree("t").with_rows([1, 2, 3]).unwrap();
            tree.remove_row(2).unwrap();
            assert!(matches!(tree.remove_row(9).unwrap_err(), ProbeError::NotFound { .. }));
            assert!(tree.remove_rows([1, 9]).is_err());
            assert_eq!(tree.selected_rows().unwrap(), &[1, 3]);
            tree.remove_rows([1, 3]).unwrap();
            assert!(!tree.has_row_selection());
        }

        #[test]
        fn test_rows_need_capability() {
            assert!(Component::table("t").add_row(1).is_err());
            assert!(!Component::table("t").has_row_selection());
        }
    }
}
