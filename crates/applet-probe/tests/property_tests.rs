//! Property-based tests for component queries and selection storage.

use applet_probe::prelude::*;
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = ComponentKind> {
    (0..ComponentKind::ALL.len()).prop_map(|index| ComponentKind::ALL[index])
}

proptest! {
    /// Rendering a query twice gives the same bytes.
    #[test]
    fn prop_query_string_is_stable(
        kind in kind_strategy(),
        name in "[a-zA-Z0-9_]{1,12}",
        prefix in "[a-z]{0,8}"
    ) {
        let component = Component::new(kind, name);
        prop_assert_eq!(component.query_string(&prefix), component.query_string(&prefix));
    }

    /// An empty prefix adds nothing; a prefix sits between root and fragment.
    #[test]
    fn prop_prefix_placement(
        kind in kind_strategy(),
        name in "[a-zA-Z0-9_]{1,12}",
        prefix in "[a-z]{1,8}"
    ) {
        let component = Component::new(kind, name);
        let fragment = component.base_query_fragment();
        prop_assert_eq!(
            component.query_string(""),
            format!("getTestFixture().{fragment}")
        );
        prop_assert_eq!(
            component.query_string(&prefix),
            format!("getTestFixture().{prefix}.{fragment}")
        );
    }

    /// Root fragments are joined with single dots and no trailing separator.
    #[test]
    fn prop_root_prefix_joins(names in prop::collection::vec("[a-z]{1,6}", 1..4)) {
        let mock = MockProcessor::new();
        let mut action = JavaAction::new(JavaBridge::new(mock).unwrap());
        let roots: Vec<Component> = names.iter().map(|name| Component::panel(name.as_str())).collect();
        let expected: Vec<String> = roots.iter().map(Component::base_query_fragment).collect();

        action.set_root_components(roots);
        let prefix = action.root_component_prefix();
        prop_assert_eq!(&prefix, &expected.join("."));
        prop_assert!(!prefix.ends_with('.'));
    }

    /// Single-slot components keep only the latest item.
    #[test]
    fn prop_single_slot_replaces(items in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let mut text_box = Component::text_box("t");
        for item in &items {
            text_box.add_item(item.as_str()).unwrap();
        }
        let last = items.last().unwrap();
        prop_assert_eq!(text_box.selected_item().unwrap().as_text(), Some(last.as_str()));
    }

    /// Lists keep items in insertion order and remove them all again.
    #[test]
    fn prop_list_keeps_insertion_order(items in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let mut list = Component::list("l");
        list.add_items(items.iter().map(String::as_str)).unwrap();
        let selected: Vec<String> = list
            .selected_items()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        prop_assert_eq!(&selected, &items);

        list.remove_items(items.iter().map(String::as_str)).unwrap();
        prop_assert!(list.selected_items().unwrap().is_empty());
    }
}
