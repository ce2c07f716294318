//! Bridge-level method and field access.
//!
//! These forms are what the bridge evaluates for `invoke_method`,
//! `get_field` and `set_field`. The JS prefix addresses the applet element on
//! the hosting page.

use std::fmt;

/// Script evaluated to learn which browser is hosting the applet.
pub const USER_AGENT_QUERY: &str = "navigator.userAgent";

/// A literal argument in an invocation or field assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptArg {
    /// Rendered as a double-quoted string
    Text(String),
    /// Rendered as a bare integer
    Int(i64),
}

impl fmt::Display for ScriptArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "\"{text}\""),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ScriptArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ScriptArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ScriptArg {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i32> for ScriptArg {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for ScriptArg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ScriptArg {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

/// `prefix` + `function(args);`
#[must_use]
pub fn method_call(js_prefix: &str, function: &str, args: &[ScriptArg]) -> String {
    let rendered: Vec<String> = args.iter().map(ToString::to_string).collect();
    format!("{js_prefix}{function}({});", rendered.join(","))
}

/// `prefix` + `field;`
#[must_use]
pub fn field_read(js_prefix: &str, field: &str) -> String {
    format!("{js_prefix}{field};")
}

/// `prefix` + `field = value;`
#[must_use]
pub fn field_write(js_prefix: &str, field: &str, value: &ScriptArg) -> String {
    format!("{js_prefix}{field} = {value};")
}

/// Accessor for the applet element, including the trailing `.`.
///
/// Browsers that only expose the element through `window.document` get the
/// window-scoped form.
#[must_use]
pub fn element_accessor(object_id: &str, window_scoped: bool) -> String {
    if window_scoped {
        format!("window.document.getElementById(\"{object_id}\").")
    } else {
        format!("document.getElementById(\"{object_id}\").")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Arguments
    // ========================================================================

    mod arg_tests {
        use super::*;

        #[test]
        fn test_text_is_quoted() {
            assert_eq!(ScriptArg::from("abc").to_string(), "\"abc\"");
        }

        #[test]
        fn test_int_is_bare() {
            assert_eq!(ScriptArg::from(-12).to_string(), "-12");
            assert_eq!(ScriptArg::from(7_u32).to_string(), "7");
        }
    }

    mod invocation_tests {
        use super::*;

        #[test]
        fn test_no_arguments() {
            assert_eq!(method_call("p.", "getTestFixture().focus", &[]), "p.getTestFixture().focus();");
        }

        #[test]
        fn test_mixed_arguments() {
            let args = [ScriptArg::from("hello"), ScriptArg::from(3)];
            assert_eq!(method_call("", "enterText", &args), "enterText(\"hello\",3);");
        }

        #[test]
        fn test_field_read() {
            assert_eq!(field_read("p.", "width"), "p.width;");
        }

        #[test]
        fn test_field_write_text() {
            assert_eq!(
                field_write("p.", "title", &ScriptArg::from("x")),
                "p.title = \"x\";"
            );
        }

        #[test]
        fn test_field_write_int() {
            assert_eq!(field_write("", "count", &ScriptArg::from(5)), "count = 5;");
        }
    }

    mod accessor_tests {
        use super::*;

        #[test]
        fn test_window_scoped() {
            assert_eq!(
                element_accessor("applet", true),
                "window.document.getElementById(\"applet\")."
            );
        }

        #[test]
        fn test_document_scoped() {
            assert_eq!(
                element_accessor("applet", false),
                "document.getElementById(\"applet\")."
            );
        }
    }
}
