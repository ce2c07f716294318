//! Error types for `applet-probe-script`.

use thiserror::Error;

/// Result type alias for script generation.
pub type Result<T> = std::result::Result<T, ScriptError>;

/// Errors that can occur while rendering a script template.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// A template that renders a JavaScript array was given nothing to put in it.
    #[error("{template} needs at least one {operand}")]
    EmptyOperandList {
        /// Template that was being rendered
        template: &'static str,
        /// What the array holds
        operand: &'static str,
    },
}

impl ScriptError {
    /// Shorthand for [`ScriptError::EmptyOperandList`].
    #[must_use]
    pub const fn empty(template: &'static str, operand: &'static str) -> Self {
        Self::EmptyOperandList { template, operand }
    }
}
