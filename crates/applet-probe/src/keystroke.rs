//! Key-stroke mapping table.
//!
//! Maps characters to the `(key code, modifier mask)` pair the applet robot
//! needs to type them on an English keyboard, and back again. Built once,
//! never mutated.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::result::{ProbeError, ProbeResult};

/// No modifier
pub const NO_MASK: i32 = 0;
/// Shift held
pub const SHIFT_MASK: i32 = 1;
/// Control held
pub const CTRL_MASK: i32 = 2;
/// Meta held
pub const META_MASK: i32 = 4;
/// Alt held
pub const ALT_MASK: i32 = 8;

/// A key code plus modifier mask, as understood by `java.awt.event.KeyEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyStroke {
    /// Virtual key code
    pub code: i32,
    /// Modifier bit mask
    pub modifiers: i32,
}

impl KeyStroke {
    /// Create a new key stroke
    #[must_use]
    pub const fn new(code: i32, modifiers: i32) -> Self {
        Self { code, modifiers }
    }
}

/// One character and the key stroke that produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStrokeMapping {
    /// Character typed
    pub character: char,
    /// Key stroke typing it
    pub key_stroke: KeyStroke,
}

impl KeyStrokeMapping {
    /// Create a new mapping
    #[must_use]
    pub const fn new(character: char, code: i32, modifiers: i32) -> Self {
        Self {
            character,
            key_stroke: KeyStroke::new(code, modifiers),
        }
    }
}

// VK_* codes from java.awt.event.KeyEvent, in table order.
const EN_TABLE: &[(char, i32, i32)] = &[
    ('0', 48, NO_MASK),
    (')', 48, SHIFT_MASK),
    ('1', 49, NO_MASK),
    ('!', 49, SHIFT_MASK),
    ('2', 50, NO_MASK),
    ('@', 50, SHIFT_MASK),
    ('3', 51, NO_MASK),
    ('#', 51, SHIFT_MASK),
    ('4', 52, NO_MASK),
    ('$', 52, SHIFT_MASK),
    ('5', 53, NO_MASK),
    ('%', 53, SHIFT_MASK),
    ('6', 54, NO_MASK),
    ('^', 54, SHIFT_MASK),
    ('7', 55, NO_MASK),
    ('&', 55, SHIFT_MASK),
    ('8', 56, NO_MASK),
    ('*', 56, SHIFT_MASK),
    ('9', 57, NO_MASK),
    ('(', 57, SHIFT_MASK),
    ('a', 65, NO_MASK),
    ('A', 65, SHIFT_MASK),
    ('b', 66, NO_MASK),
    ('B', 66, SHIFT_MASK),
    ('`', 192, NO_MASK),
    ('~', 192, SHIFT_MASK),
    ('\\', 92, NO_MASK),
    ('|', 92, SHIFT_MASK),
    ('\u{8}', 8, NO_MASK),
    ('c', 67, NO_MASK),
    ('C', 67, SHIFT_MASK),
    (']', 93, NO_MASK),
    ('}', 93, SHIFT_MASK),
    (',', 44, NO_MASK),
    ('<', 44, SHIFT_MASK),
    ('d', 68, NO_MASK),
    ('D', 68, SHIFT_MASK),
    ('\u{7f}', 127, NO_MASK),
    ('e', 69, NO_MASK),
    ('E', 69, SHIFT_MASK),
    ('\n', 10, NO_MASK),
    ('\r', 10, NO_MASK),
    ('=', 61, NO_MASK),
    ('+', 61, SHIFT_MASK),
    ('\u{1b}', 27, NO_MASK),
    ('f', 70, NO_MASK),
    ('F', 70, SHIFT_MASK),
    ('g', 71, NO_MASK),
    ('G', 71, SHIFT_MASK),
    ('h', 72, NO_MASK),
    ('H', 72, SHIFT_MASK),
    ('i', 73, NO_MASK),
    ('I', 73, SHIFT_MASK),
    ('j', 74, NO_MASK),
    ('J', 74, SHIFT_MASK),
    ('k', 75, NO_MASK),
    ('K', 75, SHIFT_MASK),
    ('l', 76, NO_MASK),
    ('L', 76, SHIFT_MASK),
    ('m', 77, NO_MASK),
    ('M', 77, SHIFT_MASK),
    ('-', 45, NO_MASK),
    ('_', 45, SHIFT_MASK),
    ('n', 78, NO_MASK),
    ('N', 78, SHIFT_MASK),
    ('o', 79, NO_MASK),
    ('O', 79, SHIFT_MASK),
    ('[', 91, NO_MASK),
    ('{', 91, SHIFT_MASK),
    ('p', 80, NO_MASK),
    ('P', 80, SHIFT_MASK),
    ('.', 46, NO_MASK),
    ('>', 46, SHIFT_MASK),
    ('q', 81, NO_MASK),
    ('Q', 81, SHIFT_MASK),
    ('\'', 222, NO_MASK),
    ('"', 222, SHIFT_MASK),
    ('r', 82, NO_MASK),
    ('R', 82, SHIFT_MASK),
    ('s', 83, NO_MASK),
    ('S', 83, SHIFT_MASK),
    (';', 59, NO_MASK),
    (':', 59, SHIFT_MASK),
    ('/', 47, NO_MASK),
    ('?', 47, SHIFT_MASK),
    (' ', 32, NO_MASK),
    ('t', 84, NO_MASK),
    ('T', 84, SHIFT_MASK),
    ('u', 85, NO_MASK),
    ('U', 85, SHIFT_MASK),
    ('v', 86, NO_MASK),
    ('V', 86, SHIFT_MASK),
    ('w', 87, NO_MASK),
    ('W', 87, SHIFT_MASK),
    ('x', 88, NO_MASK),
    ('X', 88, SHIFT_MASK),
    ('y', 89, NO_MASK),
    ('Y', 89, SHIFT_MASK),
    ('z', 90, NO_MASK),
    ('Z', 90, SHIFT_MASK),
];

/// Bidirectional character / key stroke lookup.
#[derive(Debug, Clone)]
pub struct KeyStrokeMappingProvider {
    mappings: Vec<KeyStrokeMapping>,
    by_char: HashMap<char, KeyStrokeMapping>,
    by_key_stroke: HashMap<KeyStroke, KeyStrokeMapping>,
}

impl Default for KeyStrokeMappingProvider {
    fn default() -> Self {
        Self::english()
    }
}

impl KeyStrokeMappingProvider {
    /// The English keyboard table
    #[must_use]
    pub fn english() -> Self {
        Self::from_mappings(
            EN_TABLE
                .iter()
                .map(|&(character, code, modifiers)| KeyStrokeMapping::new(character, code, modifiers)),
        )
    }

    /// Build a provider from arbitrary mappings.
    ///
    /// When two characters share a key stroke, the reverse lookup keeps the
    /// first one.
    #[must_use]
    pub fn from_mappings(mappings: impl IntoIterator<Item = KeyStrokeMapping>) -> Self {
        let mappings: Vec<KeyStrokeMapping> = mappings.into_iter().collect();
        let mut by_char = HashMap::with_capacity(mappings.len());
        let mut by_key_stroke = HashMap::with_capacity(mappings.len());
        for mapping in &mappings {
            by_char.entry(mapping.character).or_insert(*mapping);
            by_key_stroke.entry(mapping.key_stroke).or_insert(*mapping);
        }
        Self {
            mappings,
            by_char,
            by_key_stroke,
        }
    }

    /// Key code for a character
    pub fn code_for(&self, character: char) -> ProbeResult<i32> {
        self.mapping_for_char(character)
            .map(|mapping| mapping.key_stroke.code)
    }

    /// Modifier mask for a character
    pub fn modifier_for(&self, character: char) -> ProbeResult<i32> {
        self.mapping_for_char(character)
            .map(|mapping| mapping.key_stroke.modifiers)
    }

    /// Character produced by a key stroke
    pub fn char_for(&self, key_stroke: KeyStroke) -> ProbeResult<char> {
        self.mapping_for_key_stroke(key_stroke)
            .map(|mapping| mapping.character)
    }

    /// Full mapping for a character
    pub fn mapping_for_char(&self, character: char) -> ProbeResult<KeyStrokeMapping> {
        self.by_char
            .get(&character)
            .copied()
            .ok_or(ProbeError::UnmappedCharacter { character })
    }

    /// Full mapping for a key stroke
    pub fn mapping_for_key_stroke(&self, key_stroke: KeyStroke) -> ProbeResult<KeyStrokeMapping> {
        self.by_key_stroke
            .get(&key_stroke)
            .copied()
            .ok_or(ProbeError::UnmappedKeyStroke {
                code: key_stroke.code,
                modifiers: key_stroke.modifiers,
            })
    }

    /// All mappings, in table order
    #[must_use]
    pub fn mappings(&self) -> &[KeyStrokeMapping] {
        &self.mappings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Forward lookups
    // ========================================================================

    mod char_lookup_tests {
        use super::*;

        #[test]
        fn test_lower_case_letter() {
            let provider = KeyStrokeMappingProvider::english();
            assert_eq!(provider.code_for('a').unwrap(), 65);
            assert_eq!(provider.modifier_for('a').unwrap(), NO_MASK);
        }

        #[test]
        fn test_upper_case_shares_code() {
            let provider = KeyStrokeMappingProvider::english();
            assert_eq!(provider.code_for('Z').unwrap(), 90);
            assert_eq!(provider.modifier_for('Z').unwrap(), SHIFT_MASK);
        }

        #[test]
        fn test_shifted_digit_row() {
            let provider = KeyStrokeMappingProvider::english();
            for (plain, shifted) in "0123456789".chars().zip(")!@#$%^&*(".chars()) {
                assert_eq!(
                    provider.code_for(plain).unwrap(),
                    provider.code_for(shifted).unwrap()
                );
                assert_eq!(provider.modifier_for(shifted).unwrap(), SHIFT_MASK);
            }
        }

        #[test]
        fn test_control_characters() {
            let provider = KeyStrokeMappingProvider::english();
            assert_eq!(provider.code_for('\u{8}').unwrap(), 8);
            assert_eq!(provider.code_for('\u{7f}').unwrap(), 127);
            assert_eq!(provider.code_for('\u{1b}').unwrap(), 27);
            assert_eq!(provider.code_for(' ').unwrap(), 32);
        }

        #[test]
        fn test_unmapped_character() {
            let provider = KeyStrokeMappingProvider::english();
            let err = provider.code_for('é').unwrap_err();
            assert!(matches!(err, ProbeError::UnmappedCharacter { character: 'é' }));
        }
    }

    // ========================================================================
    // Reverse lookups
    // ========================================================================

    mod key_stroke_lookup_tests {
        use super::*;

        #[test]
        fn test_char_for() {
            let provider = KeyStrokeMappingProvider::english();
            assert_eq!(provider.char_for(KeyStroke::new(59, SHIFT_MASK)).unwrap(), ':');
        }

        #[test]
        fn test_enter_resolves_to_first_entry() {
            let provider = KeyStrokeMappingProvider::english();
            assert_eq!(provider.char_for(KeyStroke::new(10, NO_MASK)).unwrap(), '\n');
            assert_eq!(provider.code_for('\r').unwrap(), 10);
        }

        #[test]
        fn test_unmapped_key_stroke() {
            let provider = KeyStrokeMappingProvider::english();
            let err = provider
                .mapping_for_key_stroke(KeyStroke::new(65, ALT_MASK))
                .unwrap_err();
            assert!(matches!(
                err,
                ProbeError::UnmappedKeyStroke {
                    code: 65,
                    modifiers: ALT_MASK
                }
            ));
        }
    }

    mod table_tests {
        use super::*;

        #[test]
        fn test_every_mapping_round_trips_by_char() {
            let provider = KeyStrokeMappingProvider::english();
            for mapping in provider.mappings() {
                assert_eq!(provider.mapping_for_char(mapping.character).unwrap(), *mapping);
            }
        }

        #[test]
        fn test_table_size() {
            assert_eq!(KeyStrokeMappingProvider::default().mappings().len(), 100);
        }

        #[test]
        fn test_custom_table_first_wins() {
            let provider = KeyStrokeMappingProvider::from_mappings([
                KeyStrokeMapping::new('x', 1, META_MASK),
                KeyStrokeMapping::new('y', 1, META_MASK),
            ]);
            assert_eq!(provider.char_for(KeyStroke::new(1, META_MASK)).unwrap(), 'x');
            assert_eq!(provider.code_for('y').unwrap(), 1);
            assert_eq!(provider.modifier_for('y').unwrap(), META_MASK);
        }
    }
}
