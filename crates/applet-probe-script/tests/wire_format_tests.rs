//! Byte-exact checks of every template against the text hosted pages run.

use applet_probe_script::prelude::*;
use pretty_assertions::assert_eq;

const PREFIX: &str = "window.document.getElementById(\"applet\").";

fn list_target() -> ScriptTarget {
    let query = query_string(&base_fragment("list", "employees"), "dialog(\"hr\")");
    ScriptTarget::new(PREFIX, &query)
}

// === Keyboard ===

#[test]
fn key_press_with_prefix() {
    assert_eq!(
        keyboard::press_and_release(&list_target(), 65, 1),
        concat!(
            "\r\nvar javaObject = window.document.getElementById(\"applet\").getTestFixture().createKeyPressInfo(65, 1); ",
            "\r\nwindow.document.getElementById(\"applet\").getTestFixture().dialog(\"hr\").list(\"employees\").pressAndReleaseKey(javaObject);"
        )
    );
}

// === Mouse ===

#[test]
fn click_at_with_prefix() {
    assert_eq!(
        mouse::click_at(&list_target(), 10, 20, 16, 2),
        concat!(
            "\r\nvar point = window.document.getElementById(\"applet\").getTestFixture().createPoint(10, 20); ",
            "\r\nvar mousebutton = window.document.getElementById(\"applet\").getTestFixture().createMouseButton(16)",
            "\r\nwindow.document.getElementById(\"applet\").getTestFixture().dialog(\"hr\").list(\"employees\").robot.click(point, mousebutton, 2);"
        )
    );
}

#[test]
fn press_and_release_scripts() {
    let target = ScriptTarget::new("", "q");
    assert_eq!(
        mouse::press(&target, 16),
        "\r\nvar mousebutton = getTestFixture().createMouseButton(16)\r\nq.robot.pressMouse(mousebutton);"
    );
    assert_eq!(
        mouse::release(&target, 16),
        "\r\nvar mousebutton = getTestFixture().createMouseButton(16)\r\nq.robot.releaseMouse(mousebutton);"
    );
    assert_eq!(
        mouse::press_at(&target, 1, 2, 16),
        "\r\nvar point = getTestFixture().createPoint(1, 2); \r\nvar mousebutton = getTestFixture().createMouseButton(16)\r\nq.robot.pressMouse(point, mousebutton);"
    );
}

// === Window ===

#[test]
fn scroll_to_bottom_text() {
    assert_eq!(
        window::SCROLL_TO_BOTTOM,
        "\r\nvar height = (window.document.innerHeight !== undefined) \r\n                ? window.document.innerHeight \r\n                : window.document.body.clientHeight;\r\nwindow.scroll(0,height);\r\n"
    );
}

// === Selection ===

#[test]
fn list_items_with_prefix() {
    assert_eq!(
        selection::select_items(&list_target(), ["Ann", "Bob"]).unwrap(),
        concat!(
            "\r\nvar stringArray = window.document.getElementById(\"applet\").getTestFixture().createStringArray([\"Ann\",\"Bob\"]);",
            "\r\nwindow.document.getElementById(\"applet\").getTestFixture().dialog(\"hr\").list(\"employees\").selectItems(stringArray);"
        )
    );
}

#[test]
fn tree_rows_and_paths() {
    let tree = "getTestFixture().tree(\"files\")";
    assert_eq!(selection::select_row(tree, 0), "getTestFixture().tree(\"files\").selectRow(0);");
    assert_eq!(
        selection::select_rows(tree, &[2, 5, 9]).unwrap(),
        "getTestFixture().tree(\"files\").selectRows([2,5,9]);"
    );
    assert_eq!(
        selection::select_path(tree, "root/a"),
        "getTestFixture().tree(\"files\").selectPath(\"root/a\");"
    );
}

// === Bridge forms ===

#[test]
fn invocation_forms() {
    assert_eq!(
        invoke::method_call(PREFIX, "getTestFixture().button(\"ok\").click", &[]),
        "window.document.getElementById(\"applet\").getTestFixture().button(\"ok\").click();"
    );
    assert_eq!(
        invoke::method_call("", "getTestFixture().textBox(\"t\").enterText", &[ScriptArg::from("hi")]),
        "getTestFixture().textBox(\"t\").enterText(\"hi\");"
    );
}

#[test]
fn root_prefix_feeds_query() {
    let prefix = root_prefix([base_fragment("dialog", "d"), base_fragment("panel", "p")]);
    assert_eq!(
        query_string(&base_fragment("table", "t"), &prefix),
        "getTestFixture().dialog(\"d\").panel(\"p\").table(\"t\")"
    );
}
