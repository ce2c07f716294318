//! Selection scripts, one family per component flavour.
//!
//! Components that need Java-side helper objects (lists, tables, file
//! choosers) take a full [`ScriptTarget`]; the rest only need the component
//! expression.

use crate::error::{Result, ScriptError};
use crate::query::ScriptTarget;

/// Render `"a","b"` for a non-empty list of items.
pub fn quoted_list<I, S>(items: I, template: &'static str) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let quoted: Vec<String> = items
        .into_iter()
        .map(|item| format!("\"{}\"", item.as_ref()))
        .collect();
    if quoted.is_empty() {
        return Err(ScriptError::empty(template, "item"));
    }
    Ok(quoted.join(","))
}

// =============================================================================
// Plain items (list, combo box, text box, spinner, tabbed pane)
// =============================================================================

/// `component.selectItem("item");`
#[must_use]
pub fn select_item(component: &str, item: &str) -> String {
    format!("{component}.selectItem(\"{item}\");")
}

/// Select several list items through a Java string array.
pub fn select_items<I, S>(target: &ScriptTarget, items: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items = quoted_list(items, "selectItems")?;
    Ok(format!(
        "\r\nvar stringArray = {}.createStringArray([{items}]);\r\n{}.selectItems(stringArray);",
        target.fixture(),
        target.component()
    ))
}

/// `component.select("item");`
#[must_use]
pub fn select_text(component: &str, item: &str) -> String {
    format!("{component}.select(\"{item}\");")
}

/// `component.selectTab("item");`
#[must_use]
pub fn select_tab(component: &str, item: &str) -> String {
    format!("{component}.selectTab(\"{item}\");")
}

// =============================================================================
// Table cells
// =============================================================================

/// Select one cell; `cell` is its `row,column` form.
#[must_use]
pub fn select_cell(target: &ScriptTarget, cell: &str) -> String {
    format!(
        "\r\nvar tableCell = {}.createTableCell({cell});\r\n{}.selectCell(tableCell);",
        target.fixture(),
        target.component()
    )
}

/// Select several cells, each given in `row,column` form.
pub fn select_cells<I, S>(target: &ScriptTarget, cells: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let cells = quoted_list(cells, "selectCells")?;
    Ok(format!(
        "\r\nvar tableCells = {}.createTableCells([{cells}]);\r\n{}.selectCells(tableCells);",
        target.fixture(),
        target.component()
    ))
}

// =============================================================================
// Files
// =============================================================================

/// Select one file. The path goes in unquoted; hosted pages depend on it.
#[must_use]
pub fn select_file(target: &ScriptTarget, path: &str) -> String {
    format!(
        "\r\nvar file = {}.createFile({path});\r\n{}.selectFile(file);",
        target.fixture(),
        target.component()
    )
}

/// Select several files.
pub fn select_files<I, S>(target: &ScriptTarget, paths: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let paths = quoted_list(paths, "selectFiles")?;
    Ok(format!(
        "\r\nvar files = {}.createFiles([{paths}]);\r\n{}.selectFiles(files);",
        target.fixture(),
        target.component()
    ))
}

// =============================================================================
// Tree paths and rows
// =============================================================================

/// `component.selectPath("path");`
#[must_use]
pub fn select_path(component: &str, path: &str) -> String {
    format!("{component}.selectPath(\"{path}\");")
}

/// `component.selectPaths([...])`, without a trailing semicolon.
pub fn select_paths<I, S>(component: &str, paths: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let paths = quoted_list(paths, "selectPaths")?;
    Ok(format!("{component}.selectPaths([{paths}])"))
}

/// `component.selectRow(n);`
#[must_use]
pub fn select_row(component: &str, row: u32) -> String {
    format!("{component}.selectRow({row});")
}

/// `component.selectRows([a,b]);`
pub fn select_rows(component: &str, rows: &[u32]) -> Result<String> {
    if rows.is_empty() {
        return Err(ScriptError::empty("selectRows", "row"));
    }
    let rows: Vec<String> = rows.iter().map(ToString::to_string).collect();
    Ok(format!("{component}.selectRows([{}]);", rows.join(",")))
}
