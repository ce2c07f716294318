//! Result and error types for applet-probe.

use applet_probe_script::ScriptError;
use thiserror::Error;

use crate::component::Capability;

/// Result type for applet-probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Errors raised by descriptors, the key table, the bridge and the action engine.
///
/// Every failure is reported at the call that detects it. Nothing is retried.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The operand, or the current component, lacks a capability the verb needs
    #[error("{component} does not support {capability}")]
    CapabilityMismatch {
        /// Query or description of the offending component
        component: String,
        /// Capability that was required
        capability: Capability,
    },

    /// A verb that acts on the current component was called before one was set
    #[error("No current component. Ensure that a component has been set")]
    NoCurrentComponent,

    /// Wrong kind of item passed to a selection mutator
    #[error("Invalid operand: {message}")]
    InvalidOperand {
        /// Error message
        message: String,
    },

    /// Zero, or too many, selections where a fixed count is required
    #[error("Invalid selection count: {message}")]
    InvalidSelectionCount {
        /// Error message
        message: String,
    },

    /// Item already present in a selection that must stay unique
    #[error("Duplicate selection: {item}")]
    DuplicateSelection {
        /// The repeated item
        item: String,
    },

    /// Removal of an item or row that is not selected
    #[error("Attempt to remove a non-existent item: {item}")]
    NotFound {
        /// The missing item
        item: String,
    },

    /// Empty or multi-character value given to a single-keystroke verb
    #[error("Invalid key value: {message}")]
    InvalidKeyValue {
        /// Error message
        message: String,
    },

    /// `wait_for_not_busy` with no poll function installed or supplied
    #[error("Cannot wait for not busy without a poll function. Supply one to the engine or to the call")]
    MissingDelegate,

    /// Character absent from the key table
    #[error("Character {character:?} has no key stroke mapping")]
    UnmappedCharacter {
        /// Character looked up
        character: char,
    },

    /// Key stroke absent from the key table
    #[error("Key stroke {code}/{modifiers} has no associated character")]
    UnmappedKeyStroke {
        /// Key code looked up
        code: i32,
        /// Modifier mask looked up
        modifiers: i32,
    },

    /// Recognised but unsupported by the applet side
    #[error("Not implemented: {message}")]
    NotImplemented {
        /// Error message
        message: String,
    },

    /// A bridge result could not be decoded
    #[error("Cannot decode {value:?} as {expected}")]
    Format {
        /// Raw result text
        value: String,
        /// What it should have been
        expected: &'static str,
    },

    /// Transport failure reported by a command processor
    #[error("Bridge error: {message}")]
    Bridge {
        /// Error message
        message: String,
    },

    /// Invalid configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Script rendering error
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl ProbeError {
    /// Create a capability mismatch error
    pub fn capability(component: impl Into<String>, capability: Capability) -> Self {
        Self::CapabilityMismatch {
            component: component.into(),
            capability,
        }
    }

    /// Create an invalid operand error
    pub fn invalid_operand(message: impl Into<String>) -> Self {
        Self::InvalidOperand {
            message: message.into(),
        }
    }

    /// Create an invalid selection count error
    pub fn selection_count(message: impl Into<String>) -> Self {
        Self::InvalidSelectionCount {
            message: message.into(),
        }
    }

    /// Create a not-implemented error
    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::NotImplemented {
            message: message.into(),
        }
    }

    /// Create a bridge error
    pub fn bridge(message: impl Into<String>) -> Self {
        Self::Bridge {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_mismatch_display() {
        let err = ProbeError::capability("getTestFixture().button(\"b\")", Capability::Coordinates);
        assert_eq!(
            err.to_string(),
            "getTestFixture().button(\"b\") does not support coordinates"
        );
    }

    #[test]
    fn test_unmapped_character_display() {
        let err = ProbeError::UnmappedCharacter { character: 'é' };
        assert!(err.to_string().contains("'é'"));
    }

    #[test]
    fn test_script_error_converts() {
        let err: ProbeError = ScriptError::empty("selectRows", "row").into();
        assert!(matches!(err, ProbeError::Script(_)));
    }

    #[test]
    fn test_helper_constructors() {
        assert!(matches!(
            ProbeError::invalid_operand("x"),
            ProbeError::InvalidOperand { .. }
        ));
        assert!(matches!(
            ProbeError::selection_count("x"),
            ProbeError::InvalidSelectionCount { .. }
        ));
        assert!(matches!(
            ProbeError::not_implemented("x"),
            ProbeError::NotImplemented { .. }
        ));
        assert!(matches!(ProbeError::bridge("x"), ProbeError::Bridge { .. }));
        assert!(matches!(ProbeError::config("x"), ProbeError::Config { .. }));
    }
}
