//! Query composition.
//!
//! A component is addressed from the fixture root through an optional chain of
//! root components:
//!
//! ```text
//! getTestFixture().dialog("confirm").table("orders")
//! └── fixture ───┘ └─ root prefix ─┘ └─ base ─────┘
//! ```

/// JavaScript accessor for the test fixture a hosted page exposes.
pub const FIXTURE_ROOT: &str = "getTestFixture()";

/// Self-identifying call fragment, `kind("name")`.
#[must_use]
pub fn base_fragment(kind: &str, name: &str) -> String {
    format!("{kind}(\"{name}\")")
}

/// Full query for a base fragment, optionally scoped by a root prefix.
#[must_use]
pub fn query_string(base: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        format!("{FIXTURE_ROOT}.{base}")
    } else {
        format!("{FIXTURE_ROOT}.{prefix}.{base}")
    }
}

/// Join root base fragments with `.`; empty when there are none.
#[must_use]
pub fn root_prefix<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut prefix = String::new();
    for fragment in fragments {
        if !prefix.is_empty() {
            prefix.push('.');
        }
        prefix.push_str(fragment.as_ref());
    }
    prefix
}

/// Member access on a query, `query.member`.
#[must_use]
pub fn member(query: &str, name: &str) -> String {
    format!("{query}.{name}")
}

/// The two expressions most templates are rendered against.
///
/// Both carry the page's JS prefix, so they can be evaluated as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTarget {
    fixture: String,
    component: String,
}

impl ScriptTarget {
    /// Build a target from the bridge prefix and a component query.
    #[must_use]
    pub fn new(js_prefix: &str, component_query: &str) -> Self {
        Self {
            fixture: format!("{js_prefix}{FIXTURE_ROOT}"),
            component: format!("{js_prefix}{component_query}"),
        }
    }

    /// Prefixed fixture accessor, used for the `create*` helper calls.
    #[must_use]
    pub fn fixture(&self) -> &str {
        &self.fixture
    }

    /// Prefixed component query.
    #[must_use]
    pub fn component(&self) -> &str {
        &self.component
    }
}
