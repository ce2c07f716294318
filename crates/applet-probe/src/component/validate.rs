//! Item validation per [`ItemRule`].

use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

use super::kind::{ComponentKind, ItemRule};
use super::selection::SelectionItem;
use crate::result::{ProbeError, ProbeResult};

const TREE_PATH_PATTERN: &str = r"^(.*?/|.*?\\)?([^\./|^\.\\]+)(?:\.([^\\]*)|)$";
const FILE_PATH_PATTERN: &str = r#"^(([a-zA-Z]:)|(\\))(\\{1}|((\\{1})[^\\]([^/:*?<>"|]*))+)$"#;

static TREE_PATH: OnceLock<Regex> = OnceLock::new();
static FILE_PATH: OnceLock<Regex> = OnceLock::new();

#[allow(clippy::unwrap_used)]
fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    // Constant patterns, exercised by every path test.
    cell.get_or_init(|| {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .unwrap()
    })
}

/// Check that `item` is acceptable to a component of `kind`.
pub(crate) fn check_item(kind: ComponentKind, item: &SelectionItem) -> ProbeResult<()> {
    let Some(rule) = kind.item_rule() else {
        return Ok(());
    };
    match (rule, item) {
        (ItemRule::Text, SelectionItem::Text(_)) | (ItemRule::Cell, SelectionItem::Cell(_)) => {
            Ok(())
        }
        (ItemRule::Cell, SelectionItem::Text(_)) => Err(ProbeError::invalid_operand(
            "This component can only use Items that are Cells.",
        )),
        (ItemRule::Text, SelectionItem::Cell(_)) => Err(ProbeError::invalid_operand(
            "This component can only use Items that are strings.",
        )),
        (ItemRule::TreePath, item) => check_path(
            item,
            compiled(&TREE_PATH, TREE_PATH_PATTERN),
            "This component requires a valid tree path.",
        ),
        (ItemRule::FilePath, item) => check_path(
            item,
            compiled(&FILE_PATH, FILE_PATH_PATTERN),
            "This component requires a valid file/directory path.",
        ),
    }
}

fn check_path(item: &SelectionItem, regex: &Regex, message: &str) -> ProbeResult<()> {
    let Some(path) = item.as_text() else {
        return Err(ProbeError::invalid_operand(
            "This component can only use Items that are strings.",
        ));
    };
    if regex.is_match(path) {
        Ok(())
    } else {
        Err(ProbeError::invalid_operand(format!("{message} Got: {path}")))
    }
}
