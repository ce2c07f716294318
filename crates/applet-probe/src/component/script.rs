//! Selection scripts for a descriptor's current state.

use applet_probe_script::query::ScriptTarget;
use applet_probe_script::selection;

use super::kind::{Capability, ComponentKind};
use super::selection::SelectionItem;
use super::Component;
use crate::result::{ProbeError, ProbeResult};

const AT_LEAST_ONE: &str = "Specify AT LEAST one selection.";
const AT_LEAST_ONE_ROW: &str = "Specify AT LEAST one row.";

impl Component {
    /// Script selecting whatever this descriptor currently holds.
    ///
    /// Row selections take precedence over items; more than one entry picks
    /// the multi-selection template.
    pub fn selection_script(&self, target: &ScriptTarget) -> ProbeResult<String> {
        self.require(Capability::Selection)?;
        if self.has_row_selection() {
            if self.selected_rows()?.len() > 1 {
                self.rows_script(target)
            } else {
                self.row_script(target)
            }
        } else if self.selected_items()?.len() > 1 {
            self.items_script(target)
        } else {
            self.item_script(target)
        }
    }

    /// Single-item template; requires exactly one item.
    pub fn item_script(&self, target: &ScriptTarget) -> ProbeResult<String> {
        let item = self.selected_item()?;
        let component = target.component();
        let script = match (self.kind, item) {
            (ComponentKind::Table, SelectionItem::Cell(cell)) => {
                selection::select_cell(target, &cell.to_string())
            }
            (ComponentKind::FileChooser, SelectionItem::Text(path)) => {
                selection::select_file(target, path)
            }
            (ComponentKind::Tree, SelectionItem::Text(path)) => selection::select_path(component, path),
            (ComponentKind::TextBox | ComponentKind::Spinner, SelectionItem::Text(text)) => {
                selection::select_text(component, text)
            }
            (ComponentKind::TabbedPane, SelectionItem::Text(text)) => {
                selection::select_tab(component, text)
            }
            (ComponentKind::List | ComponentKind::ComboBox, SelectionItem::Text(text)) => {
                selection::select_item(component, text)
            }
            (_, item) => {
                return Err(ProbeError::invalid_operand(format!(
                    "{} cannot select {item}",
                    self.kind
                )))
            }
        };
        Ok(script)
    }

    /// Multi-item template; requires at least one item.
    ///
    /// Single-slot components fall back to the single-item template.
    pub fn items_script(&self, target: &ScriptTarget) -> ProbeResult<String> {
        let items = self.selected_items()?;
        if items.is_empty() {
            return Err(ProbeError::selection_count(AT_LEAST_ONE));
        }
        let texts: Vec<String> = items.iter().map(ToString::to_string).collect();
        let script = match self.kind {
            ComponentKind::List => selection::select_items(target, &texts)?,
            ComponentKind::Table => selection::select_cells(target, &texts)?,
            ComponentKind::FileChooser => selection::select_files(target, &texts)?,
            ComponentKind::Tree => selection::select_paths(target.component(), &texts)?,
            _ => return self.item_script(target),
        };
        Ok(script)
    }

    /// Single-row template; requires exactly one row.
    pub fn row_script(&self, target: &ScriptTarget) -> ProbeResult<String> {
        let row = self.selected_row()?;
        Ok(selection::select_row(target.component(), row))
    }

    /// Multi-row template; requires at least one row.
    pub fn rows_script(&self, target: &ScriptTarget) -> ProbeResult<String> {
        let rows = self.selected_rows()?;
        if rows.is_empty() {
            return Err(ProbeError::selection_count(AT_LEAST_ONE_ROW));
        }
        Ok(selection::select_rows(target.component(), rows)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Cell;

    fn target_for(component: &Component) -> ScriptTarget {
        ScriptTarget::new("", &component.query_string(""))
    }

    // ========================================================================
    // Items
    // ========================================================================

    mod item_tests {
        use super::*;

        #[test]
        fn test_list_single_item() {
            let list = Component::list("l").with_item("A").unwrap();
            assert_eq!(
                list.selection_script(&target_for(&list)).unwrap(),
                "getTestFixture().list(\"l\").selectItem(\"A\");"
            );
        }

        #[test]
        fn test_list_multiple_items() {
            let list = Component::list("employees").with_items(["A", "B"]).unwrap();
            let script = list.selection_script(&target_for(&list)).unwrap();
            assert!(script.contains("createStringArray([\"A\",\"B\"])"));
            assert!(script.ends_with("getTestFixture().list(\"employees\").selectItems(stringArray);"));
        }

        #[test]
        fn test_text_box_and_tabbed_pane() {
            let text_box = Component::text_box("t").with_item("hello").unwrap();
            assert_eq!(
                text_box.selection_script(&target_for(&text_box)).unwrap(),
                "getTestFixture().textBox(\"t\").select(\"hello\");"
            );
            let pane = Component::tabbed_pane("p").with_item("Tab 2").unwrap();
            assert_eq!(
                pane.selection_script(&target_for(&pane)).unwrap(),
                "getTestFixture().tabbedPane(\"p\").selectTab(\"Tab 2\");"
            );
        }

        #[test]
        fn test_table_cells() {
            let table = Component::table("t")
                .with_items([Cell::new(1, 1), Cell::new(2, 2)])
                .unwrap();
            let script = table.selection_script(&target_for(&table)).unwrap();
            assert!(script.contains("createTableCells([\"1,1\",\"2,2\"])"));
        }

        #[test]
        fn test_file_chooser_single() {
            let chooser = Component::file_chooser("f").with_item("c:\\dir").unwrap();
            let script = chooser.selection_script(&target_for(&chooser)).unwrap();
            assert!(script.contains("createFile(c:\\dir)"));
        }

        #[test]
        fn test_empty_selection_fails() {
            let list = Component::list("l");
            let err = list.selection_script(&target_for(&list)).unwrap_err();
            assert!(matches!(err, ProbeError::InvalidSelectionCount { .. }));
            assert!(matches!(
                list.items_script(&target_for(&list)).unwrap_err(),
                ProbeError::InvalidSelectionCount { .. }
            ));
        }

        #[test]
        fn test_plain_component_cannot_select() {
            let button = Component::button("b");
            assert!(matches!(
                button.selection_script(&target_for(&button)).unwrap_err(),
                ProbeError::CapabilityMismatch { .. }
            ));
        }
    }

    // ========================================================================
    // Rows
    // ========================================================================

    mod row_tests {
        use super::*;

        #[test]
        fn test_rows_take_precedence() {
            let tree = Component::tree("t")
                .with_item("root/a")
                .unwrap()
                .with_rows([2])
                .unwrap();
            assert_eq!(
                tree.selection_script(&target_for(&tree)).unwrap(),
                "getTestFixture().tree(\"t\").selectRow(2);"
            );
        }

        #[test]
        fn test_multiple_rows() {
            let tree = Component::tree("t").with_rows([1, 2]).unwrap();
            assert_eq!(
                tree.selection_script(&target_for(&tree)).unwrap(),
                "getTestFixture().tree(\"t\").selectRows([1,2]);"
            );
        }

        #[test]
        fn test_tree_paths_without_rows() {
            let tree = Component::tree("t").with_items(["root/a", "root/b"]).unwrap();
            assert_eq!(
                tree.selection_script(&target_for(&tree)).unwrap(),
                "getTestFixture().tree(\"t\").selectPaths([\"root/a\",\"root/b\"])"
            );
        }

        #[test]
        fn test_rows_script_needs_rows() {
            let tree = Component::tree("t");
            assert!(tree.rows_script(&target_for(&tree)).is_err());
        }
    }
}
